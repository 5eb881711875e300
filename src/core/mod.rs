//! Core logging and profiling types

pub mod config;
pub mod error;
pub mod format;
pub mod log_level;
pub mod logger;
pub mod metrics;
pub mod profiling;
pub mod record;

pub use config::{LogConfig, DEFAULT_LOG_FILENAME, DEFAULT_LOG_FORMAT};
pub use error::{LogError, Result};
pub use log_level::{prefix_or_unknown, LogLevel, UNKNOWN_LEVEL_PREFIX};
pub use logger::{Logger, LoggerBuilder, DEFAULT_QUEUE_CAPACITY, DEFAULT_SHUTDOWN_TIMEOUT};
pub use metrics::DispatchMetrics;
pub use record::{CallSite, RenderedRecord};
