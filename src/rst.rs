//! Final RST document assembly.

/// Comment line prepended to generated RST so nobody edits it by hand.
pub const PROVENANCE_NOTICE: &str =
    ".. This file is automatically generated by dist-prep from README.md and CHANGELOG.md.";

/// Assemble the final long-description document.
///
/// Provenance notice, blank line, readme, then the changelog beneath it.
/// Pure string concatenation; persisting the result is the orchestrator's job.
pub fn assemble(readme_rst: &str, changelog_rst: &str) -> String {
    format!(
        "{}\n\n{}\n{}",
        PROVENANCE_NOTICE, readme_rst, changelog_rst
    )
}
