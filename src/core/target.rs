//! Output sinks for rendered records

use parking_lot::Mutex;
use std::fmt;
use std::io::{self, Write};
use std::sync::Arc;

/// Where rendered records go.
///
/// `Discard` short-circuits the whole formatting call. Cloning a `Writer`
/// target shares the underlying writer, so a derived logger keeps writing to
/// the same sink as its parent. Each record is written with a single
/// `write_all`.
#[derive(Clone, Default)]
pub enum Target {
    #[default]
    Stderr,
    Stdout,
    Discard,
    Writer(Arc<Mutex<Box<dyn Write + Send>>>),
}

impl Target {
    /// Wrap an arbitrary writer as a target.
    pub fn writer(w: impl Write + Send + 'static) -> Self {
        Target::Writer(Arc::new(Mutex::new(Box::new(w))))
    }

    #[must_use]
    pub fn is_discard(&self) -> bool {
        matches!(self, Target::Discard)
    }

    pub(crate) fn write_record(&self, bytes: &[u8]) -> io::Result<()> {
        match self {
            Target::Stderr => io::stderr().write_all(bytes),
            Target::Stdout => io::stdout().write_all(bytes),
            Target::Discard => Ok(()),
            Target::Writer(w) => w.lock().write_all(bytes),
        }
    }

    pub(crate) fn flush(&self) -> io::Result<()> {
        match self {
            Target::Stderr => io::stderr().flush(),
            Target::Stdout => io::stdout().flush(),
            Target::Discard => Ok(()),
            Target::Writer(w) => w.lock().flush(),
        }
    }
}

impl fmt::Debug for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Target::Stderr => f.write_str("Stderr"),
            Target::Stdout => f.write_str("Stdout"),
            Target::Discard => f.write_str("Discard"),
            Target::Writer(_) => f.write_str("Writer(..)"),
        }
    }
}
