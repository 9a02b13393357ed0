//! Error types for the grid and simulation engine.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Out of bounds: ({x}, {y}) is outside a {width}x{height} grid")]
    OutOfBounds {
        x: u32,
        y: u32,
        width: u32,
        height: u32,
    },

    #[error("Invalid range: ({x0}, {y0})..({x1}, {y1}) has start after end")]
    InvalidRange { x0: u32, y0: u32, x1: u32, y1: u32 },

    #[error("Format error: {0}")]
    Format(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    #[error("Unknown pattern: {0}")]
    UnknownPattern(String),
}

impl Error {
    pub fn format(msg: impl Into<String>) -> Self {
        Error::Format(msg.into())
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Serialization(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_out_of_bounds_message() {
        let err = Error::OutOfBounds {
            x: 5,
            y: 1,
            width: 4,
            height: 4,
        };
        assert_eq!(
            err.to_string(),
            "Out of bounds: (5, 1) is outside a 4x4 grid"
        );
    }

    #[test]
    fn test_json_error_conversion() {
        let parse: std::result::Result<u32, _> = serde_json::from_str("not json");
        let err: Error = parse.unwrap_err().into();
        assert!(matches!(err, Error::Serialization(_)));
    }
}
