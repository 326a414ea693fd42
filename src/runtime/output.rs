//! Destinations for values written by `print`

use std::io::Write;

use crate::error::{Error, Result};
use crate::runtime::Value;

/// Receives each value a print statement emits
pub trait OutputSink {
    /// Writes one value
    fn emit(&mut self, value: &Value) -> Result<()>;
}

/// Prints each value on its own line of standard output
#[derive(Debug, Clone, Copy, Default)]
pub struct StdoutSink;

impl OutputSink for StdoutSink {
    fn emit(&mut self, value: &Value) -> Result<()> {
        let stdout = std::io::stdout();
        let mut handle = stdout.lock();
        writeln!(handle, "{}", value).map_err(|e| Error::OutputError(e.to_string()))
    }
}

/// Writes each value on its own line to any `io::Write`
#[derive(Debug, Default)]
pub struct WriterSink<W: Write> {
    writer: W,
}

impl<W: Write> WriterSink<W> {
    /// Wraps a writer
    pub fn new(writer: W) -> Self {
        WriterSink { writer }
    }

    /// Borrows the underlying writer
    pub fn get_ref(&self) -> &W {
        &self.writer
    }

    /// Unwraps the underlying writer
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> OutputSink for WriterSink<W> {
    fn emit(&mut self, value: &Value) -> Result<()> {
        writeln!(self.writer, "{}", value).map_err(|e| Error::OutputError(e.to_string()))
    }
}

/// Collects values in memory
impl OutputSink for Vec<Value> {
    fn emit(&mut self, value: &Value) -> Result<()> {
        self.push(*value);
        Ok(())
    }
}

impl<S: OutputSink + ?Sized> OutputSink for &mut S {
    fn emit(&mut self, value: &Value) -> Result<()> {
        (**self).emit(value)
    }
}
