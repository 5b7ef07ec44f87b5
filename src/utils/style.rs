//! Terminal colors for report output

use std::io::IsTerminal;

/// Colors used by the report writer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    Cyan,
    Green,
    Yellow,
    Orange,
    Red,
    Magenta,
    Grey,
}

impl Color {
    fn code(&self) -> &'static str {
        match self {
            Color::Cyan => "36",
            Color::Green => "32",
            Color::Yellow => "33",
            Color::Orange => "38;5;208",
            Color::Red => "31",
            Color::Magenta => "35",
            Color::Grey => "90",
        }
    }
}

/// Applies ANSI colors when enabled
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    enabled: bool,
}

impl Palette {
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    pub fn plain() -> Self {
        Self::new(false)
    }

    /// Colors on when stdout is a terminal, `NO_COLOR` is unset and not disabled explicitly
    pub fn detect(disabled: bool) -> Self {
        let no_color = std::env::var_os("NO_COLOR").is_some_and(|v| !v.is_empty());
        Self::new(!disabled && !no_color && std::io::stdout().is_terminal())
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn paint(&self, text: &str, color: Color) -> String {
        if self.enabled {
            format!("\x1b[{}m{}\x1b[0m", color.code(), text)
        } else {
            text.to_string()
        }
    }
}
