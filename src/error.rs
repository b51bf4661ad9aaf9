//! Error types
//!
//! The simulation itself never fails. Errors only come from parsing options
//! and from wiring up the page on startup.

/// Crate error
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// Config JSON did not parse
    #[error("Config parse error: {0}")]
    Config(#[from] serde_json::Error),

    /// Config parsed but holds unusable values
    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    /// Missing page element or GPU capability
    #[error("Startup error: {0}")]
    Startup(String),
}

pub type Result<T> = std::result::Result<T, Error>;
