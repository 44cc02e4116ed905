use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Failed to read input from {path}: {source}")]
    InputRead {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write report to {path}: {source}")]
    ReportWrite {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML deserialization error: {0}")]
    TomlDeserialize(#[from] toml::de::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Log setup error: {0}")]
    LogSetup(String),

    #[error("Matching task failed: {0}")]
    TaskJoin(#[from] tokio::task::JoinError),
}

impl AppError {
    /// Create a configuration error with context
    pub fn config_error(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a log setup error with context
    pub fn log_setup_error(msg: impl Into<String>) -> Self {
        Self::LogSetup(msg.into())
    }

    /// Create an input read error for the given source identifier
    pub fn input_read(path: impl Into<String>, source: std::io::Error) -> Self {
        Self::InputRead {
            path: path.into(),
            source,
        }
    }

    /// Create a report write error for the given destination identifier
    pub fn report_write(path: impl Into<String>, source: std::io::Error) -> Self {
        Self::ReportWrite {
            path: path.into(),
            source,
        }
    }

    /// Check if the error came from the input or output side of a run
    pub fn is_io_boundary(&self) -> bool {
        matches!(
            self,
            AppError::InputRead { .. } | AppError::ReportWrite { .. } | AppError::Io(_)
        )
    }
}
