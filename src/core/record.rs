//! Log record structures
//!
//! A record exists in two shapes: the call-site descriptor captured
//! synchronously where a logging macro expands, and the rendered record
//! that travels through the dispatch queue. The rendered text is produced
//! before the asynchronous handoff, so location and timestamp always
//! reflect the calling context rather than the delivery thread.

use super::log_level::LogLevel;

/// Source location of a log call, captured by the logging macros via
/// `file!()`, `line!()`, and [`function_name!`](crate::function_name).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CallSite {
    pub file: &'static str,
    pub line: u32,
    pub function: &'static str,
}

impl CallSite {
    #[must_use]
    pub const fn new(file: &'static str, line: u32, function: &'static str) -> Self {
        Self {
            file,
            line,
            function,
        }
    }
}

/// A fully rendered record, ready for sink delivery. Immutable once built;
/// each dispatched unit owns its own copy, so concurrent log calls never
/// share record state.
#[derive(Debug, Clone)]
pub struct RenderedRecord {
    pub level: LogLevel,
    pub text: String,
}

impl RenderedRecord {
    #[must_use]
    pub fn new(level: LogLevel, text: String) -> Self {
        Self { level, text }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_call_site_capture() {
        let site = CallSite::new(file!(), line!(), "test_call_site_capture");
        assert!(site.file.ends_with("record.rs"));
        assert!(site.line > 0);
        assert_eq!(site.function, "test_call_site_capture");
    }

    #[test]
    fn test_rendered_record() {
        let record = RenderedRecord::new(LogLevel::Warning, "[!] careful\n".to_string());
        assert_eq!(record.level, LogLevel::Warning);
        assert!(record.text.contains("careful"));
    }
}
