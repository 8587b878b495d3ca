//! Version resolution for packaging runs
//!
//! A release build ships the configured target version unchanged. A
//! development build derives a beta version from `git describe` output,
//! e.g. "1.2.3-4-gabc1234" becomes "1.2.3b4".

use std::fmt;
use std::str::FromStr;

use crate::config::Config;
use crate::describe::Describe;
use crate::error::{DistPrepError, Result};

/// Environment variable inspected to select the release channel.
pub const CHANNEL_ENV_VAR: &str = "PYPI";

/// Value of [CHANNEL_ENV_VAR] that selects the development channel.
const DEV_CHANNEL_VALUE: &str = "pypitest";

/// Release channel for a packaging run.
///
/// Selected once per invocation from the environment; everything downstream
/// branches on this value rather than re-reading the environment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Channel {
    Development,
    Release,
}

impl Channel {
    /// Determine the channel from the process environment.
    ///
    /// The development channel is selected only when `PYPI` is set to the
    /// literal value `pypitest`; any other value or absence means release.
    pub fn from_env() -> Self {
        Channel::from_value(std::env::var(CHANNEL_ENV_VAR).ok().as_deref())
    }

    /// Determine the channel from an already-read environment value.
    pub fn from_value(value: Option<&str>) -> Self {
        match value {
            Some(DEV_CHANNEL_VALUE) => Channel::Development,
            _ => Channel::Release,
        }
    }

    /// Whether this is the development channel
    pub fn is_development(&self) -> bool {
        matches!(self, Channel::Development)
    }
}

/// Parsed `git describe` output.
///
/// The raw line has the form `{release}-{build}-{commitish}`, where release
/// is the nearest tag, build counts commits since that tag, and commitish is
/// the abbreviated commit id. Tags with embedded dashes do not fit this form
/// and are rejected as malformed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DescribeTag {
    /// Nearest release tag, with any 'v'/'V' prefix stripped
    pub release: semver::Version,
    /// Number of commits since the release tag
    pub build: u32,
    /// Abbreviated commit identifier, e.g. "gabc1234"
    pub commitish: String,
}

impl FromStr for DescribeTag {
    type Err = DistPrepError;

    fn from_str(s: &str) -> Result<Self> {
        let fields: Vec<&str> = s.split('-').collect();
        if fields.len() != 3 {
            return Err(DistPrepError::malformed_version(format!(
                "Expected 3 dash-separated fields in describe output, got {} in '{}'",
                fields.len(),
                s
            )));
        }

        // Remove common prefixes like 'v', 'V', etc.
        let clean_release = fields[0].trim_start_matches('v').trim_start_matches('V');
        let release = semver::Version::parse(clean_release).map_err(|e| {
            DistPrepError::malformed_version(format!(
                "Release field '{}' is not a version: {}",
                fields[0], e
            ))
        })?;

        let build = fields[1].parse::<u32>().map_err(|_| {
            DistPrepError::malformed_version(format!(
                "Build field '{}' is not a commit count",
                fields[1]
            ))
        })?;

        Ok(DescribeTag {
            release,
            build,
            commitish: fields[2].to_string(),
        })
    }
}

impl DescribeTag {
    /// Format the tag as a beta version string, e.g. "1.2.3b4"
    pub fn beta_version(&self) -> String {
        format!("{}b{}", self.release, self.build)
    }
}

impl fmt::Display for DescribeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}-{}", self.release, self.build, self.commitish)
    }
}

/// Resolves the package version string for this run.
///
/// Development channel: invokes the describe source and composes a beta
/// version from the parsed tag. Release channel: returns the configured
/// target version unchanged, without touching the VCS.
///
/// # Arguments
/// * `channel` - Release channel selected from the environment
/// * `config` - Configuration holding the release target version
/// * `describe` - VCS describe source (only consulted on the development channel)
///
/// # Returns
/// * `Ok(String)` - The resolved version string
/// * `Err` - If the describe call fails or its output is malformed
pub fn resolve_version(
    channel: Channel,
    config: &Config,
    describe: &dyn Describe,
) -> Result<String> {
    match channel {
        Channel::Development => {
            let line = describe.describe()?;
            let tag: DescribeTag = line.parse()?;
            Ok(tag.beta_version())
        }
        Channel::Release => Ok(config.target_version.clone()),
    }
}

/// Derive the download location for a resolved version, if a repository URL
/// is configured.
pub fn download_location(config: &Config, version: &str) -> Option<String> {
    config
        .repository
        .as_ref()
        .map(|repo| format!("{}/tarball/{}", repo.trim_end_matches('/'), version))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::describe::MockDescribe;

    #[test]
    fn test_channel_from_value() {
        assert_eq!(Channel::from_value(Some("pypitest")), Channel::Development);
        assert_eq!(Channel::from_value(Some("pypi")), Channel::Release);
        assert_eq!(Channel::from_value(Some("")), Channel::Release);
        assert_eq!(Channel::from_value(None), Channel::Release);
    }

    #[test]
    fn test_describe_tag_parse() {
        let tag: DescribeTag = "1.2.3-4-gabc1234".parse().unwrap();
        assert_eq!(tag.release, semver::Version::new(1, 2, 3));
        assert_eq!(tag.build, 4);
        assert_eq!(tag.commitish, "gabc1234");
        assert_eq!(tag.beta_version(), "1.2.3b4");
    }

    #[test]
    fn test_describe_tag_strips_v_prefix() {
        let tag: DescribeTag = "v2.1.1-10-g0f3a9c2".parse().unwrap();
        assert_eq!(tag.release, semver::Version::new(2, 1, 1));
        assert_eq!(tag.beta_version(), "2.1.1b10");
    }

    #[test]
    fn test_describe_tag_two_fields_is_malformed() {
        let err = "1.2.3-4".parse::<DescribeTag>().unwrap_err();
        assert!(matches!(err, DistPrepError::MalformedVersion(_)));
    }

    #[test]
    fn test_describe_tag_four_fields_is_malformed() {
        // A tag with an embedded dash does not fit the three-field form
        let err = "release-1.2.3-4-gabc1234".parse::<DescribeTag>().unwrap_err();
        assert!(matches!(err, DistPrepError::MalformedVersion(_)));
    }

    #[test]
    fn test_describe_tag_bad_build_count() {
        let err = "1.2.3-x-gabc1234".parse::<DescribeTag>().unwrap_err();
        assert!(matches!(err, DistPrepError::MalformedVersion(_)));
    }

    #[test]
    fn test_resolve_development_version() {
        let config = Config::default();
        let describe = MockDescribe::new("1.2.3-4-gabc1234");
        let version = resolve_version(Channel::Development, &config, &describe).unwrap();
        assert_eq!(version, "1.2.3b4");
    }

    #[test]
    fn test_resolve_release_version_ignores_describe() {
        let config = Config {
            target_version: "2.1.1".to_string(),
            ..Config::default()
        };
        // The describe source would fail if consulted; release must not touch it
        let describe = MockDescribe::failing();
        let version = resolve_version(Channel::Release, &config, &describe).unwrap();
        assert_eq!(version, "2.1.1");
    }

    #[test]
    fn test_resolve_development_propagates_process_error() {
        let config = Config::default();
        let describe = MockDescribe::failing();
        let err = resolve_version(Channel::Development, &config, &describe).unwrap_err();
        assert!(matches!(err, DistPrepError::Process(_)));
    }

    #[test]
    fn test_download_location() {
        let config = Config {
            repository: Some("https://github.com/example/project".to_string()),
            ..Config::default()
        };
        assert_eq!(
            download_location(&config, "2.1.1").unwrap(),
            "https://github.com/example/project/tarball/2.1.1"
        );
        assert_eq!(download_location(&Config::default(), "2.1.1"), None);
    }
}
