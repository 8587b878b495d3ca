use thiserror::Error;

/// Unified error type for dist-prep operations
#[derive(Error, Debug)]
pub enum DistPrepError {
    #[error("Process error: {0}")]
    Process(String),

    #[error("Malformed version: {0}")]
    MalformedVersion(String),

    #[error("Empty document: {0}")]
    EmptyDocument(String),

    #[error("Converter unavailable: {0}")]
    ConverterUnavailable(String),

    #[error("Missing file: {0}")]
    MissingFile(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for Results in dist-prep
pub type Result<T> = std::result::Result<T, DistPrepError>;

impl DistPrepError {
    /// Create a process error with context
    pub fn process(msg: impl Into<String>) -> Self {
        DistPrepError::Process(msg.into())
    }

    /// Create a malformed-version error with context
    pub fn malformed_version(msg: impl Into<String>) -> Self {
        DistPrepError::MalformedVersion(msg.into())
    }

    /// Create an empty-document error with context
    pub fn empty_document(msg: impl Into<String>) -> Self {
        DistPrepError::EmptyDocument(msg.into())
    }

    /// Create a converter-unavailable error with context
    pub fn converter_unavailable(msg: impl Into<String>) -> Self {
        DistPrepError::ConverterUnavailable(msg.into())
    }

    /// Create a missing-file error with context
    pub fn missing_file(msg: impl Into<String>) -> Self {
        DistPrepError::MissingFile(msg.into())
    }

    /// Create a configuration error with context
    pub fn config(msg: impl Into<String>) -> Self {
        DistPrepError::Config(msg.into())
    }
}
