//! Main logger implementation
//!
//! One `Logger` owns one lock guarding its whole configuration and a scratch
//! buffer the record is assembled in. Severity methods gate on the minimum
//! level under a read lock; the formatting call itself holds the write lock
//! until the record has been handed to the target.

use super::{
    error::Result,
    log_level::LogLevel,
    render,
    styles::{Style, Styles},
    target::Target,
    timestamp::{TimeSource, TimestampFormat},
    value::{Value, MISSING_KEY, MISSING_VALUE},
};
use chrono::Utc;
use parking_lot::RwLock;
use std::panic::Location;

struct Inner {
    target: Target,
    buf: String,
    level: LogLevel,
    prefix: String,
    time_source: TimeSource,
    timestamp_format: TimestampFormat,
    report_timestamp: bool,
    report_caller: bool,
    no_color: bool,
    fields: Vec<Value>,
    styles: Styles,
}

/// A structured, leveled console logger.
///
/// Writes one styled, escaped record per accepted call. Safe to share across
/// threads by reference; every instance is independent and there is no
/// global logger.
///
/// # Example
///
/// ```
/// use termlog::{Logger, LogLevel, Target};
///
/// let logger = Logger::builder()
///     .level(LogLevel::Debug)
///     .target(Target::Stdout)
///     .build();
/// logger.info("server started", &["port".into(), 8080.into()]);
/// ```
pub struct Logger {
    inner: RwLock<Inner>,
}

impl Logger {
    /// Returns a new logger writing to stderr at `Info` level.
    #[must_use]
    pub fn new() -> Self {
        LoggerBuilder::new().build()
    }

    /// Create a builder for a logger.
    #[must_use]
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder::new()
    }

    /// Returns the current minimum level.
    #[must_use]
    pub fn level(&self) -> LogLevel {
        self.inner.read().level
    }

    /// Sets the minimum level.
    pub fn set_level(&self, level: LogLevel) {
        self.inner.write().level = level;
    }

    /// Returns the current prefix.
    #[must_use]
    pub fn prefix(&self) -> String {
        self.inner.read().prefix.clone()
    }

    /// Sets the prefix.
    pub fn set_prefix(&self, prefix: impl Into<String>) {
        self.inner.write().prefix = prefix.into();
    }

    /// Sets the output target.
    pub fn set_target(&self, target: Target) {
        self.inner.write().target = target;
    }

    /// Sets the time source.
    pub fn set_time_source(&self, time_source: TimeSource) {
        self.inner.write().time_source = time_source;
    }

    /// Sets the timestamp format.
    pub fn set_timestamp_format(&self, format: TimestampFormat) {
        self.inner.write().timestamp_format = format;
    }

    /// Enables or disables the leading timestamp.
    pub fn set_report_timestamp(&self, report: bool) {
        self.inner.write().report_timestamp = report;
    }

    /// Enables or disables the caller tag.
    pub fn set_report_caller(&self, report: bool) {
        self.inner.write().report_caller = report;
    }

    /// Disables or re-enables all styling.
    pub fn set_no_color(&self, no_color: bool) {
        self.inner.write().no_color = no_color;
    }

    /// Replaces the styling theme.
    pub fn set_styles(&self, styles: Styles) {
        self.inner.write().styles = styles;
    }

    /// Flushes the output target.
    pub fn flush(&self) -> Result<()> {
        self.inner.read().target.flush()?;
        Ok(())
    }

    /// Returns a new logger with the given keyvals appended to this logger's
    /// static fields.
    ///
    /// The derived logger is a full snapshot with its own lock and scratch
    /// buffer; mutating either logger afterwards never affects the other.
    /// Both keep writing to the same target.
    #[must_use]
    pub fn with(&self, keyvals: &[Value]) -> Logger {
        let inner = self.inner.read();
        let mut fields = inner.fields.clone();
        fields.extend(keyvals.iter().cloned());
        Logger {
            inner: RwLock::new(Inner {
                target: inner.target.clone(),
                buf: String::new(),
                level: inner.level,
                prefix: inner.prefix.clone(),
                time_source: inner.time_source,
                timestamp_format: inner.timestamp_format.clone(),
                report_timestamp: inner.report_timestamp,
                report_caller: inner.report_caller,
                no_color: inner.no_color,
                fields,
                styles: inner.styles.clone(),
            }),
        }
    }

    /// Logs a message at the given level.
    #[track_caller]
    pub fn log(&self, level: LogLevel, msg: impl Into<Value>, keyvals: &[Value]) {
        if !self.enabled(level) {
            return;
        }
        self.log_record(level, Location::caller(), msg.into(), keyvals);
    }

    /// Logs a debug message.
    #[track_caller]
    pub fn debug(&self, msg: impl Into<Value>, keyvals: &[Value]) {
        if !self.enabled(LogLevel::Debug) {
            return;
        }
        self.log_record(LogLevel::Debug, Location::caller(), msg.into(), keyvals);
    }

    /// Logs an info message.
    #[track_caller]
    pub fn info(&self, msg: impl Into<Value>, keyvals: &[Value]) {
        if !self.enabled(LogLevel::Info) {
            return;
        }
        self.log_record(LogLevel::Info, Location::caller(), msg.into(), keyvals);
    }

    /// Logs a warning message.
    #[track_caller]
    pub fn warn(&self, msg: impl Into<Value>, keyvals: &[Value]) {
        if !self.enabled(LogLevel::Warn) {
            return;
        }
        self.log_record(LogLevel::Warn, Location::caller(), msg.into(), keyvals);
    }

    /// Logs an error message.
    #[track_caller]
    pub fn error(&self, msg: impl Into<Value>, keyvals: &[Value]) {
        if !self.enabled(LogLevel::Error) {
            return;
        }
        self.log_record(LogLevel::Error, Location::caller(), msg.into(), keyvals);
    }

    fn enabled(&self, level: LogLevel) -> bool {
        level >= self.inner.read().level
    }

    fn log_record(
        &self,
        level: LogLevel,
        location: &'static Location<'static>,
        msg: Value,
        keyvals: &[Value],
    ) {
        let (is_discard, time_source) = {
            let inner = self.inner.read();
            (inner.target.is_discard(), inner.time_source)
        };
        if is_discard {
            return;
        }

        // The time source runs exactly once per record, before the write
        // lock is taken.
        let now = time_source();

        let mut guard = self.inner.write();
        let inner = &mut *guard;
        // Detach the scratch buffer; a panic mid-format must not leave stale
        // bytes behind for the next record.
        let mut buf = std::mem::take(&mut inner.buf);
        let styles = &inner.styles;
        let no_color = inner.no_color;

        if inner.report_timestamp {
            let ts = inner.timestamp_format.format(&now);
            push_styled(&mut buf, &styles.timestamp, no_color, &ts);
            buf.push(' ');
        }

        push_styled(&mut buf, styles.level(level), no_color, level.to_str());
        buf.push(' ');

        if inner.report_caller {
            let caller = format!("{}:{}:", trim_caller_path(location.file()), location.line());
            push_styled(&mut buf, &styles.caller, no_color, &caller);
            buf.push(' ');
        }

        if !inner.prefix.is_empty() {
            let prefix = format!("{}:", inner.prefix);
            push_styled(&mut buf, &styles.prefix, no_color, &prefix);
            buf.push(' ');
        }

        let msg = msg.to_string();
        if !msg.is_empty() {
            push_styled(&mut buf, &styles.message, no_color, &msg);
        }

        let missing_value = Value::from(MISSING_VALUE);
        let mut seq: Vec<&Value> = Vec::with_capacity(inner.fields.len() + keyvals.len() + 1);
        seq.extend(inner.fields.iter());
        seq.extend(keyvals.iter());
        if seq.len() % 2 != 0 {
            seq.push(&missing_value);
        }

        for pair in seq.chunks(2) {
            let mut key = pair[0].to_string();
            let val = pair[1].to_string();
            let raw = val.is_empty();
            let mut val = if raw { "\"\"".to_string() } else { val };
            if key.is_empty() {
                key = MISSING_KEY.to_string();
            }
            if !no_color {
                key = styles.key.render(&key);
                val = styles.value.render(&val);
            }

            // Multi-line values keep their line structure, each line behind
            // an indent bar. Single-line values are quoted when any rune
            // falls outside the unquoted-safe range.
            if val.contains('\n') {
                buf.push_str("\n  ");
                buf.push_str(&key);
                push_styled(&mut buf, &styles.separator, no_color, "=");
                buf.push('\n');
                let indent = if no_color {
                    "  \u{2502} ".to_string()
                } else {
                    styles.separator.render("  \u{2502} ")
                };
                render::write_indented(&mut buf, &val, &indent);
                buf.push(' ');
            } else if !raw && render::needs_quoting(&val) {
                buf.push(' ');
                buf.push_str(&key);
                push_styled(&mut buf, &styles.separator, no_color, "=");
                buf.push('"');
                render::escape_into(&mut buf, &val, true);
                buf.push('"');
            } else {
                buf.push(' ');
                buf.push_str(&key);
                push_styled(&mut buf, &styles.separator, no_color, "=");
                buf.push_str(&val);
            }
        }

        buf.push('\n');

        // Best effort, one write per record. Failures are the consumer's
        // concern.
        let _ = inner.target.write_record(buf.as_bytes());

        buf.clear();
        inner.buf = buf;
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}

fn push_styled(buf: &mut String, style: &Style, no_color: bool, text: &str) {
    if no_color {
        buf.push_str(text);
    } else {
        buf.push_str(&style.render(text));
    }
}

/// Reduce a path to its last two segments, keeping the immediate containing
/// directory for context.
fn trim_caller_path(path: &str) -> &str {
    let Some(idx) = path.rfind('/') else {
        return path;
    };
    let Some(idx) = path[..idx].rfind('/') else {
        return path;
    };
    &path[idx + 1..]
}

/// Builder for constructing a [`Logger`] with a fluent API
///
/// # Example
/// ```
/// use termlog::{Logger, LogLevel, TimestampFormat};
///
/// let logger = Logger::builder()
///     .level(LogLevel::Debug)
///     .prefix("worker")
///     .report_timestamp(true)
///     .timestamp_format(TimestampFormat::Iso8601)
///     .build();
/// ```
pub struct LoggerBuilder {
    target: Target,
    level: LogLevel,
    prefix: String,
    time_source: TimeSource,
    timestamp_format: TimestampFormat,
    report_timestamp: bool,
    report_caller: bool,
    no_color: bool,
    fields: Vec<Value>,
    styles: Styles,
}

impl LoggerBuilder {
    /// Create a new builder with default values.
    #[must_use]
    pub fn new() -> Self {
        Self {
            target: Target::default(),
            level: LogLevel::default(),
            prefix: String::new(),
            time_source: Utc::now,
            timestamp_format: TimestampFormat::default(),
            report_timestamp: false,
            report_caller: false,
            no_color: false,
            fields: Vec::new(),
            styles: Styles::default(),
        }
    }

    /// Set the output target. The default is stderr.
    #[must_use = "builder methods return a new value"]
    pub fn target(mut self, target: Target) -> Self {
        self.target = target;
        self
    }

    /// Set the minimum level. The default is `Info`.
    #[must_use = "builder methods return a new value"]
    pub fn level(mut self, level: LogLevel) -> Self {
        self.level = level;
        self
    }

    /// Set the prefix.
    #[must_use = "builder methods return a new value"]
    pub fn prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    /// Set the time source. The default is `Utc::now`.
    #[must_use = "builder methods return a new value"]
    pub fn time_source(mut self, time_source: TimeSource) -> Self {
        self.time_source = time_source;
        self
    }

    /// Set the timestamp format.
    #[must_use = "builder methods return a new value"]
    pub fn timestamp_format(mut self, format: TimestampFormat) -> Self {
        self.timestamp_format = format;
        self
    }

    /// Enable or disable the leading timestamp.
    #[must_use = "builder methods return a new value"]
    pub fn report_timestamp(mut self, report: bool) -> Self {
        self.report_timestamp = report;
        self
    }

    /// Enable or disable the caller tag.
    #[must_use = "builder methods return a new value"]
    pub fn report_caller(mut self, report: bool) -> Self {
        self.report_caller = report;
        self
    }

    /// Disable all styling.
    #[must_use = "builder methods return a new value"]
    pub fn no_color(mut self, no_color: bool) -> Self {
        self.no_color = no_color;
        self
    }

    /// Set static fields emitted on every record, as a flat alternating
    /// key, value sequence.
    #[must_use = "builder methods return a new value"]
    pub fn fields(mut self, keyvals: &[Value]) -> Self {
        self.fields = keyvals.to_vec();
        self
    }

    /// Set the styling theme.
    #[must_use = "builder methods return a new value"]
    pub fn styles(mut self, styles: Styles) -> Self {
        self.styles = styles;
        self
    }

    /// Build the logger.
    #[must_use]
    pub fn build(self) -> Logger {
        Logger {
            inner: RwLock::new(Inner {
                target: self.target,
                buf: String::new(),
                level: self.level,
                prefix: self.prefix,
                time_source: self.time_source,
                timestamp_format: self.timestamp_format,
                report_timestamp: self.report_timestamp,
                report_caller: self.report_caller,
                no_color: self.no_color,
                fields: self.fields,
                styles: self.styles,
            }),
        }
    }
}

impl Default for LoggerBuilder {
    fn default() -> Self {
        Self::new()
    }
}
