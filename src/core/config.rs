//! Logger configuration
//!
//! A `LogConfig` is a plain value record. The active instance lives inside
//! the [`Logger`](crate::core::logger::Logger) behind a read-write lock and
//! is replaced wholesale by `set_config`; it is never partially mutated.

use serde::{Deserialize, Serialize};

/// Default format template. Recognized placeholders: `%timestamp%`,
/// `%level%`, `%message%`, `%file%`, `%line%`, `%function%`.
pub const DEFAULT_LOG_FORMAT: &str =
    "[%timestamp%] %level% %message%\n -> File: %file%:%line% (Function: %function%)\n";

/// Default file sink target.
pub const DEFAULT_LOG_FILENAME: &str = "error_log.txt";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogConfig {
    /// Write rendered records to stderr.
    pub console_output: bool,
    /// Append rendered records to `log_filename`.
    pub file_output: bool,
    /// Reserved for a future remote sink; currently never read.
    pub remote_logging: bool,
    /// Format template; unrecognized text passes through verbatim.
    pub log_format: String,
    /// Target of the file sink, opened in append mode.
    pub log_filename: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            console_output: true,
            file_output: false,
            remote_logging: false,
            log_format: DEFAULT_LOG_FORMAT.to_string(),
            log_filename: DEFAULT_LOG_FILENAME.to_string(),
        }
    }
}

impl LogConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_console_output(mut self, enabled: bool) -> Self {
        self.console_output = enabled;
        self
    }

    #[must_use]
    pub fn with_file_output(mut self, enabled: bool) -> Self {
        self.file_output = enabled;
        self
    }

    /// Set the format template. No validation is performed; placeholders
    /// missing from the template are simply skipped during rendering.
    #[must_use]
    pub fn with_log_format(mut self, format: impl Into<String>) -> Self {
        self.log_format = format.into();
        self
    }

    #[must_use]
    pub fn with_log_filename(mut self, filename: impl Into<String>) -> Self {
        self.log_filename = filename.into();
        self
    }
}
