//! ANSI color codes and terminal styling.
//!
//! Styling only wraps text in escape sequences; with color disabled the
//! rendered text is exactly the plain content.

use std::fmt;
use std::io::{self, IsTerminal};

/// ANSI escape code prefix.
const ESC: &str = "\x1b[";

/// ANSI reset code.
const RESET: &str = "\x1b[0m";

/// Check if stdout is a terminal that supports colors.
pub fn stdout_supports_color() -> bool {
    io::stdout().is_terminal() && !no_color_env()
}

/// Check if stderr is a terminal that supports colors.
pub fn stderr_supports_color() -> bool {
    io::stderr().is_terminal() && !no_color_env()
}

/// Check if the NO_COLOR environment variable is set.
fn no_color_env() -> bool {
    std::env::var_os("NO_COLOR").is_some()
}

/// Terminal colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    Red,
    Green,
}

impl Color {
    /// Get the ANSI foreground color code.
    fn fg_code(self) -> &'static str {
        match self {
            Color::Red => "31",
            Color::Green => "32",
        }
    }
}

/// Text style attributes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Style {
    Bold,
}

impl Style {
    fn code(self) -> &'static str {
        match self {
            Style::Bold => "1",
        }
    }
}

/// A string with optional color and formatting.
#[derive(Debug, Clone)]
pub struct Styled {
    content: String,
    color: Option<Color>,
    styles: Vec<Style>,
    enabled: bool,
}

impl Styled {
    /// Create a styled string with explicit color support setting.
    pub fn with_color_support(content: impl Into<String>, enabled: bool) -> Self {
        Self {
            content: content.into(),
            color: None,
            styles: Vec::new(),
            enabled,
        }
    }

    /// Set the foreground color.
    pub fn color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }

    /// Add a style attribute.
    pub fn style(mut self, style: Style) -> Self {
        if !self.styles.contains(&style) {
            self.styles.push(style);
        }
        self
    }

    pub fn bold(self) -> Self {
        self.style(Style::Bold)
    }

    pub fn red(self) -> Self {
        self.color(Color::Red)
    }

    pub fn green(self) -> Self {
        self.color(Color::Green)
    }
}

impl fmt::Display for Styled {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.enabled || (self.color.is_none() && self.styles.is_empty()) {
            return f.write_str(&self.content);
        }

        let mut codes: Vec<&str> = self.styles.iter().map(|s| s.code()).collect();
        if let Some(color) = self.color {
            codes.push(color.fg_code());
        }

        write!(f, "{}{}m{}{}", ESC, codes.join(";"), self.content, RESET)
    }
}

/// Message symbols with colors.
pub struct Symbols {
    enabled: bool,
}

impl Symbols {
    pub fn new(color_enabled: bool) -> Self {
        Self {
            enabled: color_enabled,
        }
    }

    /// `[OK]` tag for a successfully optimized file.
    pub fn ok(&self) -> Styled {
        Styled::with_color_support("[OK]", self.enabled).green().bold()
    }

    /// Error symbol (red X).
    pub fn error(&self) -> Styled {
        Styled::with_color_support("\u{2717}", self.enabled).red().bold()
    }
}

/// Print an error message to stderr.
pub fn print_error(message: &str) {
    let symbols = Symbols::new(stderr_supports_color());
    eprintln!("{} {}", symbols.error(), message);
}

/// Format a file size in human-readable form.
pub fn format_size(bytes: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = KB * 1024;
    const GB: u64 = MB * 1024;

    if bytes >= GB {
        format!("{:.1} GB", bytes as f64 / GB as f64)
    } else if bytes >= MB {
        format!("{:.1} MB", bytes as f64 / MB as f64)
    } else if bytes >= KB {
        format!("{:.1} KB", bytes as f64 / KB as f64)
    } else {
        format!("{} B", bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_styled_no_formatting() {
        let s = Styled::with_color_support("hello", true);
        assert_eq!(s.to_string(), "hello");
    }

    #[test]
    fn test_styled_with_color_disabled() {
        let s = Styled::with_color_support("hello", false).red().bold();
        assert_eq!(s.to_string(), "hello");
    }

    #[test]
    fn test_styled_with_color_enabled() {
        let s = Styled::with_color_support("hello", true).red();
        assert_eq!(s.to_string(), "\x1b[31mhello\x1b[0m");
    }

    #[test]
    fn test_styled_bold_and_color() {
        let s = Styled::with_color_support("hello", true).bold().green();
        assert_eq!(s.to_string(), "\x1b[1;32mhello\x1b[0m");
    }

    #[test]
    fn test_style_added_once() {
        let s = Styled::with_color_support("x", true).bold().bold();
        assert_eq!(s.to_string(), "\x1b[1mx\x1b[0m");
    }

    #[test]
    fn test_format_size() {
        assert_eq!(format_size(500), "500 B");
        assert_eq!(format_size(2048), "2.0 KB");
        assert_eq!(format_size(5 * 1024 * 1024), "5.0 MB");
        assert_eq!(format_size(2 * 1024 * 1024 * 1024), "2.0 GB");
    }

    #[test]
    fn test_symbols_plain() {
        let symbols = Symbols::new(false);
        assert_eq!(symbols.ok().to_string(), "[OK]");
        assert_eq!(symbols.error().to_string(), "\u{2717}");
    }
}
