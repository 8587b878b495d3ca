pub mod config;
pub mod convert;
pub mod describe;
pub mod error;
pub mod pipeline;
pub mod rst;
pub mod sanitize;
pub mod ui;
pub mod version;

pub use error::{DistPrepError, Result};
