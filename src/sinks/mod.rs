//! Sink implementations

pub mod console;
pub mod file;

pub use console::ConsoleSink;
pub use file::FileSink;

use crate::core::{RenderedRecord, Result};

/// A destination that visibly or durably records a rendered log line.
///
/// Sinks are owned by the dispatch worker behind a single shared lock; one
/// sink failing never prevents delivery to the others.
pub trait Sink: Send {
    /// Deliver one rendered record. Implementations flush per write so a
    /// record is observable as soon as the call returns.
    fn write(&mut self, record: &RenderedRecord) -> Result<()>;

    /// Flush any remaining buffered output.
    fn flush(&mut self) -> Result<()>;

    fn name(&self) -> &str;
}
