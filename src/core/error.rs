//! Error types for the logger

pub type Result<T> = std::result::Result<T, LoggerError>;

#[derive(Debug, thiserror::Error)]
pub enum LoggerError {
    /// IO error raised by the output sink
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid log level name
    #[error("invalid log level: '{0}'")]
    ParseLevel(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_level_display() {
        let err = LoggerError::ParseLevel("verbose".to_string());
        assert_eq!(err.to_string(), "invalid log level: 'verbose'");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "pipe closed");
        let err: LoggerError = io_err.into();
        assert!(matches!(err, LoggerError::Io(_)));
        assert!(err.to_string().contains("pipe closed"));
    }
}
