//! Output sinks a console writes its lines to.

use std::io;
use std::sync::{Arc, Mutex, PoisonError};

use console::Term;
use serde_json::Value;

use crate::error::{Error, Result};

/// A line-oriented output stream.
pub trait Sink: Send + Sync {
    /// Writes one line, appending the line terminator.
    fn write_line(&self, line: &str) -> io::Result<()>;
}

impl Sink for Term {
    fn write_line(&self, line: &str) -> io::Result<()> {
        Term::write_line(self, line)
    }
}

/// In-memory sink collecting every written line.
///
/// Clones share the same buffer, so a clone handed to a console can be read
/// back through the original.
///
/// # Example
///
/// ```rust
/// use chromatic::{MemorySink, Sink};
///
/// let sink = MemorySink::new();
/// sink.write_line("hello").unwrap();
/// assert_eq!(sink.lines(), vec!["hello".to_string()]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    lines: Arc<Mutex<Vec<String>>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a copy of the lines written so far.
    pub fn lines(&self) -> Vec<String> {
        self.lines
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Returns everything written so far, one line per line.
    pub fn contents(&self) -> String {
        self.lines()
            .iter()
            .map(|line| format!("{}\n", line))
            .collect()
    }

    /// Drops the collected lines.
    pub fn clear(&self) {
        self.lines
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }
}

impl Sink for MemorySink {
    fn write_line(&self, line: &str) -> io::Result<()> {
        self.lines
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(line.to_string());
        Ok(())
    }
}

/// Reads a stream handle from configuration: `null`, `"stdout"` or `"stderr"`.
///
/// `null` yields `None`, leaving the choice of default to the caller.
///
/// # Errors
///
/// Returns [`Error::InvalidStream`] labelled with `key` for any other value.
pub fn stream_from_value(key: &str, value: &Value) -> Result<Option<Arc<dyn Sink>>> {
    match value {
        Value::Null => Ok(None),
        Value::String(name) if name == "stdout" => Ok(Some(Arc::new(Term::stdout()))),
        Value::String(name) if name == "stderr" => Ok(Some(Arc::new(Term::stderr()))),
        _ => Err(Error::InvalidStream {
            key: key.to_string(),
        }),
    }
}
