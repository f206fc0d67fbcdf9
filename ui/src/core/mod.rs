//! Cross-cutting helpers: configuration, errors, formatting, host glue.

pub mod config;
pub mod error;
pub mod format;
pub mod platform;

pub use config::ReportConfig;
pub use error::ReportError;
