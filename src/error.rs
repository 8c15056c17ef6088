//! Crate-level error types.

use std::fmt;

/// Errors produced by the tabletop crate.
#[derive(Debug)]
pub enum TabletopError {
    /// Generic I/O failure.
    Io(std::io::Error),
    /// TOML options parsing/serialization failure.
    OptionsParse(String),
    /// Options parsed but hold values the camera cannot use.
    InvalidOptions(String),
    /// Viewer event-loop or window failure.
    Viewer(String),
}

impl fmt::Display for TabletopError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::OptionsParse(msg) => {
                write!(f, "options parse error: {msg}")
            }
            Self::InvalidOptions(msg) => {
                write!(f, "invalid options: {msg}")
            }
            Self::Viewer(msg) => write!(f, "viewer error: {msg}"),
        }
    }
}

impl std::error::Error for TabletopError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for TabletopError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<toml::de::Error> for TabletopError {
    fn from(e: toml::de::Error) -> Self {
        Self::OptionsParse(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use std::error::Error;

    use super::*;

    #[test]
    fn io_errors_keep_their_source() {
        let err: TabletopError =
            std::io::Error::new(std::io::ErrorKind::NotFound, "gone").into();
        assert!(err.source().is_some());
        assert_eq!(err.to_string(), "I/O error: gone");
    }

    #[test]
    fn message_variants_have_no_source() {
        let err = TabletopError::InvalidOptions("zoom_min > zoom_max".into());
        assert!(err.source().is_none());
        assert!(err.to_string().contains("zoom_min"));
    }
}
