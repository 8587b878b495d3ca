//! VCS describe abstraction layer
//!
//! The version resolver needs one line of `git describe` output. This module
//! provides a trait-based abstraction over that call so the resolver can be
//! exercised without a git checkout:
//!
//! - [GitCli]: shells out to the real `git describe`
//! - [MockDescribe]: a canned implementation for testing

use std::process::Command;

use crate::error::{DistPrepError, Result};

/// Source of a single `git describe` line.
///
/// Implementations return the trimmed stdout line, or an error if the
/// underlying tool cannot run or produces nothing.
pub trait Describe {
    /// Get the describe line for the current checkout
    ///
    /// # Returns
    /// * `Ok(String)` - One trimmed line, e.g. "1.2.3-4-gabc1234"
    /// * `Err` - If the tool cannot be spawned, exits non-zero, or prints nothing
    fn describe(&self) -> Result<String>;
}

/// Real implementation that invokes `git describe` as a subprocess.
///
/// The call is synchronous and single-shot; there is no timeout and no retry.
pub struct GitCli;

impl Describe for GitCli {
    fn describe(&self) -> Result<String> {
        let output = Command::new("git")
            .arg("describe")
            .output()
            .map_err(|e| DistPrepError::process(format!("Failed to run git describe: {}", e)))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(DistPrepError::process(format!(
                "git describe exited with code {}: {}",
                output.status.code().unwrap_or(-1),
                stderr.trim()
            )));
        }

        let line = String::from_utf8_lossy(&output.stdout).trim().to_string();
        if line.is_empty() {
            return Err(DistPrepError::process(
                "git describe produced no output".to_string(),
            ));
        }

        Ok(line)
    }
}

/// Mock describe source for testing without a git checkout
pub struct MockDescribe {
    line: Option<String>,
}

impl MockDescribe {
    /// Create a mock that returns the given describe line
    pub fn new(line: impl Into<String>) -> Self {
        MockDescribe {
            line: Some(line.into()),
        }
    }

    /// Create a mock that fails as if git could not be run
    pub fn failing() -> Self {
        MockDescribe { line: None }
    }
}

impl Describe for MockDescribe {
    fn describe(&self) -> Result<String> {
        self.line
            .clone()
            .ok_or_else(|| DistPrepError::process("mock describe failure".to_string()))
    }
}
