//! Error types
//!
//! The dashboard core is total: charts, simulators and the mock source never
//! fail. Errors only arise at the edges (CLI arguments, config files, output).

use thiserror::Error;

/// Errors raised by the command-line and configuration surfaces
#[derive(Error, Debug)]
pub enum NexusError {
    /// Panel identifier not in the menu
    #[error("Unknown panel: {0}")]
    UnknownPanel(String),

    /// Configuration could not be loaded
    #[error("Configuration error: {0}")]
    Config(String),

    /// I/O operation failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Snapshot serialization failed
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for NexusError {
    fn from(err: serde_json::Error) -> Self {
        NexusError::Serialization(err.to_string())
    }
}

/// Result type alias for fallible edge operations
pub type NexusResult<T> = Result<T, NexusError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = NexusError::UnknownPanel("weather".to_string());
        assert_eq!(err.to_string(), "Unknown panel: weather");

        let err = NexusError::Config("bad latency".to_string());
        assert_eq!(err.to_string(), "Configuration error: bad latency");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: NexusError = io_err.into();
        assert!(matches!(err, NexusError::Io(_)));
    }
}
