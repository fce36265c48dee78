//! Error types for calgrid-core operations.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum LayoutError {
    #[error("Invalid timezone: {0}")]
    InvalidTimezone(String),

    #[error("Invalid month: {year:04}-{month:02}")]
    InvalidMonth { year: i32, month: u32 },
}

pub type Result<T> = std::result::Result<T, LayoutError>;
