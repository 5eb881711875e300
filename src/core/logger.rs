//! Asynchronous log dispatch engine
//!
//! A `log` call renders the record synchronously on the caller's thread
//! (so timestamp and call site reflect the calling context), then hands the
//! finished record to a bounded queue drained by a single worker thread.
//! The single worker preserves submission order; the caller never blocks on
//! sink I/O and never observes delivery failures directly; losses are
//! counted in [`DispatchMetrics`].

use super::{
    config::LogConfig,
    error::Result,
    format,
    log_level::LogLevel,
    metrics::DispatchMetrics,
    record::{CallSite, RenderedRecord},
};
use crate::sinks::{ConsoleSink, FileSink, Sink};
use chrono::Local;
use crossbeam_channel::{bounded, Receiver, Sender, TrySendError};
use parking_lot::{Mutex, RwLock};
use std::collections::HashMap;
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

/// Default timeout used when the logger is dropped without an explicit
/// `shutdown()` call.
pub const DEFAULT_SHUTDOWN_TIMEOUT: Duration = Duration::from_secs(5);

/// Default dispatch queue capacity.
pub const DEFAULT_QUEUE_CAPACITY: usize = 1024;

/// The managed sinks plus any host-supplied extras, guarded by one lock so
/// all sink I/O is mutually exclusive.
struct SinkSet {
    console: ConsoleSink,
    file: FileSink,
    extra: Vec<Box<dyn Sink>>,
}

pub struct Logger {
    config: Arc<RwLock<LogConfig>>,
    sinks: Arc<Mutex<SinkSet>>,
    sender: Option<Sender<RenderedRecord>>,
    worker: Option<thread::JoinHandle<()>>,
    metrics: Arc<DispatchMetrics>,
    /// Profiling registry: tag to start instant. See `core::profiling`.
    pub(crate) timers: Mutex<HashMap<String, Instant>>,
}

impl Logger {
    /// Create a logger with the default configuration and queue capacity.
    #[must_use]
    pub fn new() -> Self {
        LoggerBuilder::new().build()
    }

    /// Create a logger with an explicit configuration.
    #[must_use]
    pub fn with_config(config: LogConfig) -> Self {
        LoggerBuilder::new().config(config).build()
    }

    #[must_use]
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder::new()
    }

    fn start(config: LogConfig, capacity: usize, use_colors: bool, extra: Vec<Box<dyn Sink>>) -> Self {
        let file_sink = FileSink::new(&config.log_filename);
        let config = Arc::new(RwLock::new(config));
        let sinks = Arc::new(Mutex::new(SinkSet {
            console: ConsoleSink::with_colors(use_colors),
            file: file_sink,
            extra,
        }));
        let metrics = Arc::new(DispatchMetrics::new());

        let (sender, receiver) = bounded(capacity);
        let worker = {
            let config = Arc::clone(&config);
            let sinks = Arc::clone(&sinks);
            let metrics = Arc::clone(&metrics);
            thread::Builder::new()
                .name("profilog-dispatch".to_string())
                .spawn(move || Self::run_worker(&receiver, &config, &sinks, &metrics))
                .expect("failed to spawn dispatch worker")
        };

        Self {
            config,
            sinks,
            sender: Some(sender),
            worker: Some(worker),
            metrics,
            timers: Mutex::new(HashMap::new()),
        }
    }

    /// Delivery loop. `recv` keeps returning queued records after the
    /// sending side closes, so dropping the sender drains the queue.
    fn run_worker(
        receiver: &Receiver<RenderedRecord>,
        config: &Arc<RwLock<LogConfig>>,
        sinks: &Arc<Mutex<SinkSet>>,
        metrics: &Arc<DispatchMetrics>,
    ) {
        while let Ok(record) = receiver.recv() {
            let snapshot = config.read().clone();
            let mut sinks = sinks.lock();
            Self::deliver(&mut sinks, &snapshot, &record, metrics);
        }

        let mut sinks = sinks.lock();
        if let Err(e) = Self::flush_all(&mut sinks) {
            eprintln!("[profilog] flush on shutdown failed: {}", e);
        }
    }

    fn deliver(
        sinks: &mut SinkSet,
        config: &LogConfig,
        record: &RenderedRecord,
        metrics: &DispatchMetrics,
    ) {
        if config.console_output && sinks.console.write(record).is_err() {
            metrics.record_sink_error();
        }

        if config.file_output {
            sinks.file.retarget(&config.log_filename);
            // An unopenable file skips only this sink.
            if sinks.file.write(record).is_err() {
                metrics.record_sink_error();
            }
        }

        for sink in sinks.extra.iter_mut() {
            if let Err(e) = sink.write(record) {
                metrics.record_sink_error();
                eprintln!("[profilog] sink '{}' failed: {}", sink.name(), e);
            }
        }

        metrics.record_delivered();
    }

    fn flush_all(sinks: &mut SinkSet) -> Result<()> {
        sinks.console.flush()?;
        sinks.file.flush()?;
        for sink in sinks.extra.iter_mut() {
            sink.flush()?;
        }
        Ok(())
    }

    /// Replace the active configuration wholesale. Takes effect for records
    /// rendered after this call returns; records already queued keep the
    /// text they were rendered with.
    pub fn set_config(&self, config: LogConfig) {
        *self.config.write() = config;
    }

    /// Snapshot of the active configuration.
    #[must_use]
    pub fn config(&self) -> LogConfig {
        self.config.read().clone()
    }

    /// Render and enqueue one record. Fire-and-forget: never blocks on sink
    /// I/O and never returns an error. A full queue drops the record and
    /// increments the dropped counter.
    pub fn log(&self, level: LogLevel, message: impl Into<String>, site: CallSite) {
        let message = message.into();
        let timestamp = Local::now();
        let template = self.config.read().log_format.clone();
        let text = format::render(&template, level, &message, site, timestamp);

        if let Some(ref sender) = self.sender {
            match sender.try_send(RenderedRecord::new(level, text)) {
                Ok(()) => {}
                Err(TrySendError::Full(_)) => {
                    self.metrics.record_dropped();
                }
                Err(TrySendError::Disconnected(_)) => {
                    // Logger is shutting down, silently ignore
                }
            }
        }
    }

    /// Delivery counters for observability.
    pub fn metrics(&self) -> &DispatchMetrics {
        &self.metrics
    }

    /// Flush every sink. Does not wait for queued records; use `shutdown`
    /// to drain the queue first.
    pub fn flush(&self) -> Result<()> {
        let mut sinks = self.sinks.lock();
        Self::flush_all(&mut sinks)
    }

    /// Close the queue and wait for the worker to drain all pending
    /// records. Returns `true` when the worker finished within `timeout`.
    pub fn shutdown(&mut self, timeout: Duration) -> bool {
        drop(self.sender.take());

        if let Some(handle) = self.worker.take() {
            let start = Instant::now();
            loop {
                if handle.is_finished() {
                    if let Err(e) = handle.join() {
                        eprintln!("[profilog] dispatch worker panicked during shutdown: {:?}", e);
                        return false;
                    }
                    break;
                }
                if start.elapsed() >= timeout {
                    eprintln!(
                        "[profilog] dispatch worker did not finish within {:?}; some records may be lost",
                        timeout
                    );
                    return false;
                }
                thread::sleep(Duration::from_millis(10));
            }
        }

        true
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for Logger {
    fn drop(&mut self) {
        self.shutdown(DEFAULT_SHUTDOWN_TIMEOUT);

        let dropped = self.metrics.dropped();
        if dropped > 0 {
            eprintln!(
                "[profilog] shutting down with {} dropped records (drop rate: {:.2}%)",
                dropped,
                self.metrics.drop_rate()
            );
        }
    }
}

/// Builder for constructing a [`Logger`] with a fluent API.
///
/// # Example
/// ```
/// use profilog::prelude::*;
///
/// let logger = Logger::builder()
///     .config(LogConfig::new().with_console_output(false))
///     .queue_capacity(256)
///     .build();
/// ```
pub struct LoggerBuilder {
    config: LogConfig,
    capacity: usize,
    use_colors: bool,
    extra_sinks: Vec<Box<dyn Sink>>,
}

impl LoggerBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self {
            config: LogConfig::default(),
            capacity: DEFAULT_QUEUE_CAPACITY,
            use_colors: true,
            extra_sinks: Vec::new(),
        }
    }

    /// Set the initial configuration.
    #[must_use = "builder methods return a new value"]
    pub fn config(mut self, config: LogConfig) -> Self {
        self.config = config;
        self
    }

    /// Set the dispatch queue capacity.
    #[must_use = "builder methods return a new value"]
    pub fn queue_capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }

    /// Enable or disable console colors.
    #[must_use = "builder methods return a new value"]
    pub fn colors(mut self, use_colors: bool) -> Self {
        self.use_colors = use_colors;
        self
    }

    /// Add a host-supplied sink that receives every record regardless of
    /// the console/file flags.
    #[must_use = "builder methods return a new value"]
    pub fn sink<S: Sink + 'static>(mut self, sink: S) -> Self {
        self.extra_sinks.push(Box::new(sink));
        self
    }

    #[must_use]
    pub fn build(self) -> Logger {
        Logger::start(self.config, self.capacity, self.use_colors, self.extra_sinks)
    }
}

impl Default for LoggerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn site() -> CallSite {
        CallSite::new(file!(), line!(), "logger_tests")
    }

    #[test]
    fn test_builder_defaults() {
        let logger = Logger::builder().build();
        assert!(logger.config().console_output);
        assert_eq!(logger.metrics().dropped(), 0);
    }

    #[test]
    fn test_set_config_replaces_wholesale() {
        let logger = Logger::new();
        let config = LogConfig::new()
            .with_console_output(false)
            .with_log_format("%message%");

        logger.set_config(config.clone());
        assert_eq!(logger.config(), config);
    }

    #[test]
    fn test_log_never_errors_with_all_sinks_disabled() {
        let logger = Logger::builder()
            .config(LogConfig::new().with_console_output(false))
            .build();

        logger.log(LogLevel::Info, "nobody listening", site());
        logger.log(LogLevel::Error, "still fine", site());
    }

    #[test]
    fn test_log_after_shutdown_is_noop() {
        let mut logger = Logger::builder()
            .config(LogConfig::new().with_console_output(false))
            .build();

        assert!(logger.shutdown(Duration::from_secs(1)));
        logger.log(LogLevel::Info, "dropped on the floor", site());
    }

    #[test]
    fn test_shutdown_is_idempotent() {
        let mut logger = Logger::builder()
            .config(LogConfig::new().with_console_output(false))
            .build();

        assert!(logger.shutdown(Duration::from_secs(1)));
        assert!(logger.shutdown(Duration::from_secs(1)));
    }
}
