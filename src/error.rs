//! Error types for counter-gui
//!
//! Centralized error handling using snafu for ergonomic error definitions.

use snafu::Snafu;

/// Main error type for the application
#[derive(Debug, Snafu)]
pub enum Error {
    /// Invalid input or configuration
    #[snafu(display("Invalid: {message}"))]
    Invalid { message: String },
}

/// Result type alias for convenience
pub type Result<T, E = Error> = std::result::Result<T, E>;
