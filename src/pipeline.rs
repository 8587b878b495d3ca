//! Long-description orchestration.
//!
//! Decides how the long description gets produced and wires the sanitizer,
//! converter, and assembler together. The tiered fallback exists so that a
//! packaging run never hard-fails just because pandoc is not installed: the
//! best available description is always produced.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use crate::config::Config;
use crate::convert::MarkdownConverter;
use crate::error::{DistPrepError, Result};
use crate::rst;
use crate::sanitize;
use crate::ui;

/// How the long description will be produced, decided once up front.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DescriptionStrategy {
    /// Converter available: regenerate RST from the Markdown sources
    Regenerate,
    /// No converter, but a previously generated RST file exists: read it
    ReadExisting,
    /// Neither: concatenate the raw Markdown sources
    RawFallback,
}

/// Produces the long-description text for the packaging-metadata step.
///
/// Holds the configuration and the converter handle obtained at startup;
/// converter absence is represented as `None` rather than re-probed later.
pub struct Orchestrator {
    config: Config,
    converter: Option<Box<dyn MarkdownConverter>>,
    dry_run: bool,
}

impl Orchestrator {
    pub fn new(config: Config, converter: Option<Box<dyn MarkdownConverter>>) -> Self {
        Orchestrator {
            config,
            converter,
            dry_run: false,
        }
    }

    /// Skip all filesystem mutation (the generated RST is neither written
    /// nor removed).
    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// Decide the production strategy. First match wins:
    /// converter present, then existing RST file, then raw fallback.
    pub fn strategy(&self) -> DescriptionStrategy {
        if self.converter.is_some() {
            DescriptionStrategy::Regenerate
        } else if self.config.paths.rst_output.is_file() {
            DescriptionStrategy::ReadExisting
        } else {
            DescriptionStrategy::RawFallback
        }
    }

    /// Produce the long-description text.
    ///
    /// Tier 2 and 3 never fail for a missing converter or missing RST file;
    /// Markdown sources required by the selected tier are still fatal when
    /// absent, as is any conversion failure in tier 1.
    pub fn long_description(&self) -> Result<String> {
        match self.strategy() {
            DescriptionStrategy::Regenerate => {
                ui::display_status(&format!(
                    "Generating {} from {} and {}",
                    self.config.paths.rst_output.display(),
                    self.config.paths.readme.display(),
                    self.config.paths.changelog.display()
                ));
                self.regenerate()
            }
            DescriptionStrategy::ReadExisting => {
                ui::display_status(&format!(
                    "Reading {}",
                    self.config.paths.rst_output.display()
                ));
                Ok(fs::read_to_string(&self.config.paths.rst_output)?)
            }
            DescriptionStrategy::RawFallback => {
                ui::display_warning(&format!(
                    "No {} found!",
                    self.config.paths.rst_output.display()
                ));
                ui::display_status(&format!("Reading {}", self.config.paths.readme.display()));
                let readme = read_source(&self.config.paths.readme)?;
                let changelog = read_source(&self.config.paths.changelog)?;
                Ok(format!("{}\n{}", readme, changelog))
            }
        }
    }

    /// Tier 1: sanitize and convert both Markdown sources, assemble the RST,
    /// and persist or remove the output file per configuration.
    fn regenerate(&self) -> Result<String> {
        let converter = self.converter.as_deref().ok_or_else(|| {
            DistPrepError::converter_unavailable("Regenerate selected without a converter")
        })?;

        let readme_md = sanitize::sanitize(&read_source(&self.config.paths.readme)?)?;
        let readme_rst = converter.convert(&readme_md)?;

        let changelog_md = sanitize::sanitize(&read_source(&self.config.paths.changelog)?)?;
        let changelog_rst = converter.convert(&changelog_md)?;

        let document = rst::assemble(&readme_rst, &changelog_rst);

        if !self.dry_run {
            if self.config.create_rst {
                fs::write(&self.config.paths.rst_output, &document)?;
            } else {
                remove_if_exists(&self.config.paths.rst_output)?;
            }
        }

        Ok(document)
    }
}

/// Read a required Markdown source, reporting absence as a missing-file error.
fn read_source(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|e| {
        if e.kind() == ErrorKind::NotFound {
            DistPrepError::missing_file(path.display().to_string())
        } else {
            DistPrepError::Io(e)
        }
    })
}

/// Remove a stale generated file; absence is not an error.
fn remove_if_exists(path: &Path) -> Result<()> {
    match fs::remove_file(path) {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
        Err(e) => Err(DistPrepError::Io(e)),
    }
}
