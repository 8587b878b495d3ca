//! Markdown sanitization for package-index consumption.
//!
//! Each pass is a pure function `&str -> String` applied in sequence. The
//! pipeline chops the badge header off the top of the document and strips
//! link markup, which package indices render poorly.

use std::sync::LazyLock;

use regex::Regex;

use crate::error::{DistPrepError, Result};

/// Opening sequence of a CI badge line, e.g. `[![Build Status](...)](...)`
const BADGE_PREFIX: &str = "[![";

/// Run the full sanitization pipeline on a Markdown document.
///
/// Chops the header, then removes link markup. The result is still Markdown;
/// conversion to RST happens elsewhere.
pub fn sanitize(md: &str) -> Result<String> {
    let md = chop_header(md)?;
    Ok(remove_links(&md))
}

/// Remove leading blank lines and CI badge lines from a Markdown document.
///
/// Drops lines from the top while they are empty, whitespace-only, or start
/// with `[![`. The rest of the document is returned unchanged, trailing
/// newline included.
///
/// # Returns
/// * `Ok(String)` - Document starting at the first real content line
/// * `Err` - `EmptyDocument` if every line is blank or a badge
pub fn chop_header(md: &str) -> Result<String> {
    let mut offset = 0;
    for line in md.split_inclusive('\n') {
        let text = line.trim_end_matches(['\n', '\r']);
        if text.trim().is_empty() || text.starts_with(BADGE_PREFIX) {
            offset += line.len();
        } else {
            return Ok(md[offset..].to_string());
        }
    }

    Err(DistPrepError::empty_document(
        "No content line found after blank lines and badges",
    ))
}

// Link text and reference may contain escaped closing brackets (`\]`), which
// must not terminate the match early.
static NAMED_LINK_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"\[((?:[^\]]|\\\])+)\]\[((?:[^\]]|\\\])*)\]", // [text][ref], ref may be empty
    )
    .expect("valid regex")
});

static INLINE_LINK_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"\[((?:[^\]]|\\\])+)\]\(((?:[^\]]|\\\])*)\)", // [text](url)
    )
    .expect("valid regex")
});

/// Strip link markup, keeping the link text.
///
/// Rewrites `[text][ref]` and `[text](url)` to `text` in two single sweeps;
/// a replacement is not re-scanned for nested matches.
pub fn remove_links(md: &str) -> String {
    let md = NAMED_LINK_RE.replace_all(md, "$1");
    INLINE_LINK_RE.replace_all(&md, "$1").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chop_header_removes_blanks_and_badges() {
        let md = "\n\n[![build]]\nReal content\n";
        assert_eq!(chop_header(md).unwrap(), "Real content\n");
    }

    #[test]
    fn test_chop_header_keeps_body_untouched() {
        let md = "[![badge](https://ci.example.com)](https://ci.example.com)\n# Title\n\nBody\n";
        assert_eq!(chop_header(md).unwrap(), "# Title\n\nBody\n");
    }

    #[test]
    fn test_chop_header_no_header_is_noop() {
        let md = "# Title\nBody\n";
        assert_eq!(chop_header(md).unwrap(), md);
    }

    #[test]
    fn test_chop_header_all_blank_fails() {
        let err = chop_header("\n\n   \n").unwrap_err();
        assert!(matches!(err, DistPrepError::EmptyDocument(_)));
    }

    #[test]
    fn test_chop_header_empty_input_fails() {
        assert!(chop_header("").is_err());
    }

    #[test]
    fn test_remove_named_links() {
        assert_eq!(remove_links("[hello][world]"), "hello");
        assert_eq!(remove_links("[hello][]"), "hello");
    }

    #[test]
    fn test_remove_inline_links() {
        assert_eq!(remove_links("[hello](http://example.com)"), "hello");
    }

    #[test]
    fn test_remove_links_escaped_bracket_in_text() {
        assert_eq!(remove_links(r"[see \] here][ref]"), r"see \] here");
    }

    #[test]
    fn test_remove_links_escaped_bracket_in_url() {
        assert_eq!(remove_links(r"[hello](http://x/\]y)"), "hello");
    }

    #[test]
    fn test_remove_links_is_noop_without_links() {
        let md = "# Title\n\nPlain text with [brackets but no link.\n";
        assert_eq!(remove_links(md), md);
    }

    #[test]
    fn test_remove_links_idempotent() {
        let once = remove_links("[hello][world] and [bye](http://example.com)");
        assert_eq!(remove_links(&once), once);
    }

    #[test]
    fn test_sanitize_full_pipeline() {
        let md = "\n[![build](https://ci)](https://ci)\nSee [docs][] for more.\n";
        assert_eq!(sanitize(md).unwrap(), "See docs for more.\n");
    }
}
