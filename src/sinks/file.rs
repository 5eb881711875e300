//! File sink implementation
//!
//! Appends rendered records to the configured filename, flushing per write.
//! The handle is opened lazily and kept while the target stays the same, so
//! a reconfigured filename takes effect on the next delivery. Open failures
//! surface as errors to the dispatch worker, which skips only this sink.

use crate::core::{LogError, RenderedRecord, Result};
use crate::sinks::Sink;
use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

pub struct FileSink {
    path: PathBuf,
    writer: Option<BufWriter<File>>,
}

impl FileSink {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            writer: None,
        }
    }

    /// Point the sink at a new file. The current handle is flushed and
    /// dropped; the new target is opened on the next write.
    pub fn retarget(&mut self, path: impl AsRef<Path>) {
        let path = path.as_ref();
        if self.path != path {
            if let Some(mut writer) = self.writer.take() {
                let _ = writer.flush();
            }
            self.path = path.to_path_buf();
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn ensure_open(&mut self) -> Result<&mut BufWriter<File>> {
        if self.writer.is_none() {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(&self.path)
                .map_err(|e| LogError::file_open(self.path.display().to_string(), e.to_string()))?;
            self.writer = Some(BufWriter::new(file));
        }
        Ok(self
            .writer
            .as_mut()
            .expect("writer opened in previous branch"))
    }
}

impl Sink for FileSink {
    fn write(&mut self, record: &RenderedRecord) -> Result<()> {
        let writer = self.ensure_open()?;
        writer.write_all(record.text.as_bytes())?;
        writer.flush()?;
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        if let Some(ref mut writer) = self.writer {
            writer.flush()?;
        }
        Ok(())
    }

    fn name(&self) -> &str {
        "file"
    }
}

impl Drop for FileSink {
    fn drop(&mut self) {
        let _ = self.flush();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::LogLevel;
    use tempfile::TempDir;

    fn record(text: &str) -> RenderedRecord {
        RenderedRecord::new(LogLevel::Info, text.to_string())
    }

    #[test]
    fn test_append_semantics() {
        let dir = TempDir::new().expect("temp dir");
        let path = dir.path().join("out.log");

        let mut sink = FileSink::new(&path);
        sink.write(&record("first\n")).expect("first write");
        sink.write(&record("second\n")).expect("second write");

        let content = std::fs::read_to_string(&path).expect("read log");
        assert_eq!(content, "first\nsecond\n");
    }

    #[test]
    fn test_append_survives_reopen() {
        let dir = TempDir::new().expect("temp dir");
        let path = dir.path().join("out.log");

        {
            let mut sink = FileSink::new(&path);
            sink.write(&record("before\n")).expect("write");
        }
        {
            let mut sink = FileSink::new(&path);
            sink.write(&record("after\n")).expect("write");
        }

        let content = std::fs::read_to_string(&path).expect("read log");
        assert_eq!(content, "before\nafter\n");
    }

    #[test]
    fn test_retarget_switches_files() {
        let dir = TempDir::new().expect("temp dir");
        let first = dir.path().join("a.log");
        let second = dir.path().join("b.log");

        let mut sink = FileSink::new(&first);
        sink.write(&record("to a\n")).expect("write a");
        sink.retarget(&second);
        sink.write(&record("to b\n")).expect("write b");

        assert_eq!(std::fs::read_to_string(&first).expect("read a"), "to a\n");
        assert_eq!(std::fs::read_to_string(&second).expect("read b"), "to b\n");
    }

    #[test]
    fn test_retarget_same_path_keeps_handle() {
        let dir = TempDir::new().expect("temp dir");
        let path = dir.path().join("same.log");

        let mut sink = FileSink::new(&path);
        sink.write(&record("one\n")).expect("write");
        sink.retarget(&path);
        assert!(sink.writer.is_some());
    }

    #[test]
    fn test_unopenable_path_errors() {
        let dir = TempDir::new().expect("temp dir");
        // A directory cannot be opened for appending.
        let mut sink = FileSink::new(dir.path());
        assert!(sink.write(&record("x\n")).is_err());
    }
}
