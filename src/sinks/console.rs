//! Console sink implementation
//!
//! Writes rendered records to stderr, colorizing the level prefix when
//! colors are enabled. The `colored` crate embeds a reset after the prefix
//! and no-ops on terminals without color support, so color state never
//! leaks past the written line.

use crate::core::{RenderedRecord, Result};
use crate::sinks::Sink;
use colored::Colorize;
use std::io::Write;

pub struct ConsoleSink {
    use_colors: bool,
}

impl ConsoleSink {
    #[must_use]
    pub fn new() -> Self {
        Self { use_colors: true }
    }

    #[must_use]
    pub fn with_colors(use_colors: bool) -> Self {
        Self { use_colors }
    }

    /// Colorize the first occurrence of the level prefix in the rendered
    /// text. The prefix may be absent when the template omits `%level%`;
    /// the line is then written as-is.
    fn colorized(&self, record: &RenderedRecord) -> String {
        if !self.use_colors {
            return record.text.clone();
        }

        let prefix = record.level.prefix();
        match record.text.find(prefix) {
            Some(pos) => {
                let colored_prefix = prefix.color(record.level.color_code()).to_string();
                let mut out = String::with_capacity(record.text.len() + colored_prefix.len());
                out.push_str(&record.text[..pos]);
                out.push_str(&colored_prefix);
                out.push_str(&record.text[pos + prefix.len()..]);
                out
            }
            None => record.text.clone(),
        }
    }
}

impl Default for ConsoleSink {
    fn default() -> Self {
        Self::new()
    }
}

impl Sink for ConsoleSink {
    fn write(&mut self, record: &RenderedRecord) -> Result<()> {
        let text = self.colorized(record);
        let mut stderr = std::io::stderr().lock();
        stderr.write_all(text.as_bytes())?;
        stderr.flush()?;
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        std::io::stderr().flush()?;
        Ok(())
    }

    fn name(&self) -> &str {
        "console"
    }
}
