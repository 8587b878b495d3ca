//! Markdown to RST conversion via an external converter.
//!
//! The conversion engine is pandoc, an optional external program. Detection
//! happens once at startup; the orchestrator decides what to do when it is
//! absent. A trait seam keeps the pipeline testable without pandoc installed:
//!
//! - [PandocConverter]: the real thing
//! - [MockConverter]: canned output for testing

use std::io::Write;
use std::process::{Command, Stdio};

use crate::error::{DistPrepError, Result};

/// Converts a Markdown document to RST.
pub trait MarkdownConverter {
    /// Convert GitHub-flavored Markdown to RST
    ///
    /// Single blocking call, no retry.
    fn convert(&self, markdown: &str) -> Result<String>;
}

/// Converter backed by the `pandoc` executable.
#[derive(Debug)]
pub struct PandocConverter {
    program: String,
}

impl PandocConverter {
    /// Probe for pandoc and return a converter handle if it is runnable.
    ///
    /// # Returns
    /// * `Ok(PandocConverter)` - pandoc answered `--version`
    /// * `Err` - `ConverterUnavailable` if it could not be run
    pub fn detect() -> Result<Self> {
        Self::detect_program("pandoc")
    }

    /// Probe a specific program name instead of the default `pandoc`.
    pub fn detect_program(program: impl Into<String>) -> Result<Self> {
        let program = program.into();
        let status = Command::new(&program)
            .arg("--version")
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .map_err(|e| {
                DistPrepError::converter_unavailable(format!("Cannot run {}: {}", program, e))
            })?;

        if !status.success() {
            return Err(DistPrepError::converter_unavailable(format!(
                "{} --version exited with code {}",
                program,
                status.code().unwrap_or(-1)
            )));
        }

        Ok(PandocConverter { program })
    }
}

impl MarkdownConverter for PandocConverter {
    fn convert(&self, markdown: &str) -> Result<String> {
        let mut child = Command::new(&self.program)
            .args(["--from", "gfm", "--to", "rst"])
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|e| {
                DistPrepError::process(format!("Failed to spawn {}: {}", self.program, e))
            })?;

        if let Some(stdin) = child.stdin.as_mut() {
            stdin.write_all(markdown.as_bytes())?;
        }

        let output = child.wait_with_output()?;
        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(DistPrepError::process(format!(
                "{} exited with code {}: {}",
                self.program,
                output.status.code().unwrap_or(-1),
                stderr.trim()
            )));
        }

        Ok(String::from_utf8_lossy(&output.stdout).to_string())
    }
}

/// Mock converter for testing without pandoc installed.
///
/// Wraps the input so tests can tell converted text from raw passthrough.
pub struct MockConverter;

impl MarkdownConverter for MockConverter {
    fn convert(&self, markdown: &str) -> Result<String> {
        Ok(format!("<rst>{}</rst>", markdown))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_missing_program_is_converter_unavailable() {
        let err = PandocConverter::detect_program("definitely-not-a-real-converter").unwrap_err();
        assert!(matches!(err, DistPrepError::ConverterUnavailable(_)));
    }

    #[test]
    fn test_mock_converter_marks_output() {
        let rst = MockConverter.convert("# Title").unwrap();
        assert_eq!(rst, "<rst># Title</rst>");
    }
}
