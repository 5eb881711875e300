//! # profilog
//!
//! A lightweight, embeddable logging and execution-profiling library with
//! asynchronous dispatch, template-based formatting, and colorized console
//! output.
//!
//! ## Features
//!
//! - **Non-blocking**: records are rendered on the caller's thread, then
//!   delivered by a dedicated worker, so callers never wait on sink I/O
//! - **Configurable formatting**: placeholder templates with timestamp,
//!   level, message, and call-site substitution
//! - **Console and file sinks**: level-colored stderr output plus an
//!   append-mode log file
//! - **Profiling timers**: tag-based start/end timers and a wrap-a-call
//!   helper, reported through the logging pipeline
//!
//! ## Example
//!
//! ```
//! use profilog::prelude::*;
//! use profilog::{info, profile};
//!
//! let logger = Logger::builder()
//!     .config(LogConfig::new().with_console_output(false))
//!     .build();
//!
//! info!(logger, "starting up");
//!
//! let answer = profile!(logger, "compute", {
//!     (1..=10).product::<u64>()
//! });
//! assert_eq!(answer, 3_628_800);
//! ```

pub mod core;
pub mod macros;
pub mod sinks;

pub mod prelude {
    pub use crate::core::{
        CallSite, DispatchMetrics, LogConfig, LogError, LogLevel, Logger, LoggerBuilder,
        RenderedRecord, Result, DEFAULT_SHUTDOWN_TIMEOUT,
    };
    pub use crate::sinks::{ConsoleSink, FileSink, Sink};
}

pub use crate::core::{
    prefix_or_unknown, CallSite, DispatchMetrics, LogConfig, LogError, LogLevel, Logger,
    LoggerBuilder, RenderedRecord, Result, DEFAULT_LOG_FILENAME, DEFAULT_LOG_FORMAT,
    DEFAULT_QUEUE_CAPACITY, DEFAULT_SHUTDOWN_TIMEOUT, UNKNOWN_LEVEL_PREFIX,
};
pub use crate::sinks::{ConsoleSink, FileSink, Sink};
