//! Core logger types

pub mod error;
pub mod log_level;
pub mod logger;
pub mod render;
pub mod styles;
pub mod target;
pub mod timestamp;
pub mod value;

pub use error::{LoggerError, Result};
pub use log_level::LogLevel;
pub use logger::{Logger, LoggerBuilder};
pub use styles::{Style, Styles};
pub use target::Target;
pub use timestamp::{TimeSource, TimestampFormat};
pub use value::{Value, MISSING_KEY, MISSING_VALUE};
