//! # Termlog
//!
//! A structured, leveled console logger: human-readable records with
//! optional timestamp, caller location, prefix, and ordered key/value
//! attributes, styled for the terminal and escaped so that arbitrary values
//! stay on one readable line (or in one clearly marked multi-line block).
//!
//! ## Features
//!
//! - **Leveled**: Debug/Info/Warn/Error with a per-logger minimum level
//! - **Structured**: ordered, duplicate-preserving key/value attributes
//! - **Styled**: per-element theme with a strict no-color mode
//! - **Thread Safe**: call one logger from as many threads as you like
//!
//! ## Example
//!
//! ```
//! use termlog::{Logger, LogLevel};
//!
//! let logger = Logger::builder().level(LogLevel::Debug).build();
//! logger.info("server started", &["port".into(), 8080.into()]);
//!
//! let db = logger.with(&["component".into(), "db".into()]);
//! db.debug("connected", &[]);
//! ```

pub mod core;
pub mod macros;

pub mod prelude {
    pub use crate::core::{
        LogLevel, Logger, LoggerBuilder, LoggerError, Result, Style, Styles, Target, TimeSource,
        TimestampFormat, Value, MISSING_KEY, MISSING_VALUE,
    };
}

pub use crate::core::{
    LogLevel, Logger, LoggerBuilder, LoggerError, Result, Style, Styles, Target, TimeSource,
    TimestampFormat, Value, MISSING_KEY, MISSING_VALUE,
};
