//! Terminal styling theme
//!
//! Each structural element of a record (timestamp, level tag, caller tag,
//! prefix, message, key, value, separator) is styled through its own
//! [`Style`]. An empty style is the identity transform, so a theme can leave
//! individual elements unstyled. The logger's no-color mode bypasses the
//! theme entirely.

use super::log_level::LogLevel;
use colored::{Color, Colorize};

/// A render transform for one structural element.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Style {
    color: Option<Color>,
    bold: bool,
    faint: bool,
}

impl Style {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the foreground color.
    #[must_use]
    pub fn foreground(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }

    #[must_use]
    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    #[must_use]
    pub fn faint(mut self) -> Self {
        self.faint = true;
        self
    }

    /// Whether this style is the identity transform.
    #[must_use]
    pub fn is_plain(&self) -> bool {
        self.color.is_none() && !self.bold && !self.faint
    }

    /// Apply the transform. Plain styles return the input unchanged.
    #[must_use]
    pub fn render(&self, text: &str) -> String {
        if self.is_plain() {
            return text.to_string();
        }
        let mut styled = match self.color {
            Some(color) => text.color(color),
            None => text.normal(),
        };
        if self.bold {
            styled = styled.bold();
        }
        if self.faint {
            styled = styled.dimmed();
        }
        styled.to_string()
    }
}

/// Styles for every structural element of a record.
#[derive(Debug, Clone, PartialEq)]
pub struct Styles {
    pub timestamp: Style,
    pub caller: Style,
    pub prefix: Style,
    pub message: Style,
    pub key: Style,
    pub value: Style,
    pub separator: Style,
    pub debug_level: Style,
    pub info_level: Style,
    pub warn_level: Style,
    pub error_level: Style,
}

impl Styles {
    /// The default theme: bold colored level tags, faint structural markers,
    /// plain timestamp, message, and values.
    #[must_use]
    pub fn new() -> Self {
        Self {
            timestamp: Style::new(),
            caller: Style::new().faint(),
            prefix: Style::new().bold().faint(),
            message: Style::new(),
            key: Style::new().faint(),
            value: Style::new(),
            separator: Style::new().faint(),
            debug_level: Style::new().bold().foreground(LogLevel::Debug.color()),
            info_level: Style::new().bold().foreground(LogLevel::Info.color()),
            warn_level: Style::new().bold().foreground(LogLevel::Warn.color()),
            error_level: Style::new().bold().foreground(LogLevel::Error.color()),
        }
    }

    /// The style for a level tag.
    #[must_use]
    pub fn level(&self, level: LogLevel) -> &Style {
        match level {
            LogLevel::Debug => &self.debug_level,
            LogLevel::Info => &self.info_level,
            LogLevel::Warn => &self.warn_level,
            LogLevel::Error => &self.error_level,
        }
    }
}

impl Default for Styles {
    fn default() -> Self {
        Self::new()
    }
}
