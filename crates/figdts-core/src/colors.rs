//! ANSI color codes for terminal output.
//!
//! Declaration output uses two accents plus a dim modifier:
//! - Blue: declared names, type references
//! - Dim: keywords, doc comments
//!
//! Diagnostics add severity accents:
//! - Red: errors
//! - Yellow: warnings

/// ANSI color palette shared by the declaration printer and the diagnostics printer.
///
/// Uses only standard 16-color ANSI codes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Colors {
    pub blue: &'static str,
    pub red: &'static str,
    pub yellow: &'static str,
    pub dim: &'static str,
    pub reset: &'static str,
}

impl Default for Colors {
    fn default() -> Self {
        Self::OFF
    }
}

impl Colors {
    pub const ON: Self = Self {
        blue: "\x1b[34m",
        red: "\x1b[31m",
        yellow: "\x1b[33m",
        dim: "\x1b[2m",
        reset: "\x1b[0m",
    };

    pub const OFF: Self = Self {
        blue: "",
        red: "",
        yellow: "",
        dim: "",
        reset: "",
    };

    pub fn new(enabled: bool) -> Self {
        if enabled { Self::ON } else { Self::OFF }
    }

    pub fn is_enabled(&self) -> bool {
        !self.reset.is_empty()
    }

    /// Wrap `text` in `color`, or return it unchanged when colors are off.
    pub fn paint(&self, color: &'static str, text: &str) -> String {
        if color.is_empty() {
            text.to_string()
        } else {
            format!("{color}{text}{}", self.reset)
        }
    }
}
