//! Logging macros for ergonomic key/value arguments.
//!
//! These macros convert each trailing argument through [`Value::from`], so
//! call sites can mix string, integer, float, and bool keyvals without
//! writing the conversions out.
//!
//! [`Value::from`]: crate::Value
//!
//! # Examples
//!
//! ```
//! use termlog::prelude::*;
//! use termlog::info;
//!
//! let logger = Logger::new();
//!
//! // Message only
//! info!(logger, "server started");
//!
//! // With key/value attributes
//! info!(logger, "request served", "status", 200, "path", "/healthz");
//! ```

/// Log a message with keyvals at an explicit level.
///
/// # Examples
///
/// ```
/// # use termlog::prelude::*;
/// use termlog::log;
/// # let logger = Logger::new();
/// log!(logger, LogLevel::Info, "ready");
/// log!(logger, LogLevel::Error, "request failed", "status", 500);
/// ```
#[macro_export]
macro_rules! log {
    ($logger:expr, $level:expr, $msg:expr $(, $kv:expr)* $(,)?) => {
        $logger.log($level, $msg, &[$($crate::Value::from($kv)),*])
    };
}

/// Log a debug-level message.
///
/// # Examples
///
/// ```
/// # use termlog::prelude::*;
/// # let logger = Logger::new();
/// # logger.set_level(LogLevel::Debug);
/// use termlog::debug;
/// debug!(logger, "cache warmed", "entries", 128);
/// ```
#[macro_export]
macro_rules! debug {
    ($logger:expr, $msg:expr $(, $kv:expr)* $(,)?) => {
        $crate::log!($logger, $crate::LogLevel::Debug, $msg $(, $kv)*)
    };
}

/// Log an info-level message.
///
/// # Examples
///
/// ```
/// # use termlog::prelude::*;
/// # let logger = Logger::new();
/// use termlog::info;
/// info!(logger, "listening", "port", 8080);
/// ```
#[macro_export]
macro_rules! info {
    ($logger:expr, $msg:expr $(, $kv:expr)* $(,)?) => {
        $crate::log!($logger, $crate::LogLevel::Info, $msg $(, $kv)*)
    };
}

/// Log a warning-level message.
///
/// # Examples
///
/// ```
/// # use termlog::prelude::*;
/// # let logger = Logger::new();
/// use termlog::warn;
/// warn!(logger, "retrying", "attempt", 3, "max", 5);
/// ```
#[macro_export]
macro_rules! warn {
    ($logger:expr, $msg:expr $(, $kv:expr)* $(,)?) => {
        $crate::log!($logger, $crate::LogLevel::Warn, $msg $(, $kv)*)
    };
}

/// Log an error-level message.
///
/// # Examples
///
/// ```
/// # use termlog::prelude::*;
/// # let logger = Logger::new();
/// use termlog::error;
/// error!(logger, "connect failed", "addr", "10.0.0.1:5432");
/// ```
#[macro_export]
macro_rules! error {
    ($logger:expr, $msg:expr $(, $kv:expr)* $(,)?) => {
        $crate::log!($logger, $crate::LogLevel::Error, $msg $(, $kv)*)
    };
}
