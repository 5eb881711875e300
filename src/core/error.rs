//! Error types for the logging pipeline

pub type Result<T> = std::result::Result<T, LogError>;

#[derive(Debug, thiserror::Error)]
pub enum LogError {
    /// Generic IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Sink failed to deliver a record
    #[error("Sink '{name}' failed: {message}")]
    Sink { name: String, message: String },

    /// File sink could not open its target
    #[error("Cannot open log file '{path}': {message}")]
    FileOpen { path: String, message: String },

    /// Dispatch queue rejected a record
    #[error("Dispatch queue full ({capacity} records buffered)")]
    QueueFull { capacity: usize },

    /// Logger has been shut down
    #[error("Logger already stopped")]
    Stopped,
}

impl LogError {
    pub fn sink(name: impl Into<String>, message: impl Into<String>) -> Self {
        LogError::Sink {
            name: name.into(),
            message: message.into(),
        }
    }

    pub fn file_open(path: impl Into<String>, message: impl Into<String>) -> Self {
        LogError::FileOpen {
            path: path.into(),
            message: message.into(),
        }
    }
}
