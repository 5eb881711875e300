//! Profiling timer registry
//!
//! A tag maps to at most one running timer. Starting a tag twice overwrites
//! its start instant (last write wins); ending an absent tag is a silent
//! no-op. Completed measurements feed back through the dispatch engine as
//! Debug-level records.

use super::logger::Logger;
use super::record::CallSite;
use super::log_level::LogLevel;
use std::time::Instant;

impl Logger {
    /// Start (or restart) the timer for `tag`.
    pub fn start_profiling(&self, tag: impl Into<String>) {
        self.timers.lock().insert(tag.into(), Instant::now());
    }

    /// Stop the timer for `tag` and emit a Debug record with the elapsed
    /// time in microseconds. Does nothing when no timer is running for
    /// `tag`.
    pub fn end_profiling(&self, tag: &str) {
        let elapsed = {
            let mut timers = self.timers.lock();
            timers.remove(tag).map(|start| start.elapsed())
        };

        if let Some(elapsed) = elapsed {
            self.emit_duration(tag, elapsed.as_micros(), "end_profiling");
        }
    }

    /// Time a single synchronous invocation of `f` and return its result
    /// unchanged. The Debug record is emitted only on normal return; a
    /// panic propagates without one. The registry is not involved, so
    /// `profile_fn` never collides with a `start_profiling` tag.
    pub fn profile_fn<F, R>(&self, tag: &str, f: F) -> R
    where
        F: FnOnce() -> R,
    {
        let start = Instant::now();
        let result = f();
        let elapsed = start.elapsed();
        self.emit_duration(tag, elapsed.as_micros(), "profile_fn");
        result
    }

    fn emit_duration(&self, tag: &str, micros: u128, function: &'static str) {
        self.log(
            LogLevel::Debug,
            format!("Execution time for {}: {} microseconds", tag, micros),
            CallSite::new(file!(), line!(), function),
        );
    }

    /// Whether a timer is currently running for `tag`.
    #[must_use]
    pub fn is_profiling(&self, tag: &str) -> bool {
        self.timers.lock().contains_key(tag)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::LogConfig;
    use std::time::Duration;

    fn quiet_logger() -> Logger {
        Logger::builder()
            .config(LogConfig::new().with_console_output(false))
            .build()
    }

    #[test]
    fn test_start_registers_tag() {
        let logger = quiet_logger();
        logger.start_profiling("parse");
        assert!(logger.is_profiling("parse"));
    }

    #[test]
    fn test_end_removes_tag() {
        let logger = quiet_logger();
        logger.start_profiling("parse");
        logger.end_profiling("parse");
        assert!(!logger.is_profiling("parse"));
    }

    #[test]
    fn test_end_absent_tag_is_noop() {
        let logger = quiet_logger();
        logger.end_profiling("never-started");
        assert!(!logger.is_profiling("never-started"));
    }

    #[test]
    fn test_double_start_overwrites() {
        let logger = quiet_logger();
        logger.start_profiling("t");
        std::thread::sleep(Duration::from_millis(20));
        logger.start_profiling("t");

        // The restarted timer measures from the second start.
        let elapsed = logger.timers.lock().get("t").copied().map(|s| s.elapsed());
        assert!(elapsed.expect("timer running") < Duration::from_millis(20));
    }

    #[test]
    fn test_profile_fn_returns_value() {
        let logger = quiet_logger();
        let result = logger.profile_fn("add", || 2 + 3);
        assert_eq!(result, 5);
    }

    #[test]
    fn test_profile_fn_does_not_touch_registry() {
        let logger = quiet_logger();
        let _ = logger.profile_fn("calc", || 1);
        assert!(!logger.is_profiling("calc"));
    }

    #[test]
    #[should_panic(expected = "profiled failure")]
    fn test_profile_fn_panic_propagates() {
        let logger = quiet_logger();
        logger.profile_fn::<_, ()>("doomed", || panic!("profiled failure"));
    }
}
