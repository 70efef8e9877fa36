use crate::level::Level;
use colored::{ColoredString, Colorize};

/// Bold true-color style used for a level label and attribute keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LevelStyle {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl LevelStyle {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        LevelStyle { r, g, b }
    }

    pub fn paint(&self, text: &str) -> ColoredString {
        text.truecolor(self.r, self.g, self.b).bold()
    }
}

const DEBUG: LevelStyle = LevelStyle::rgb(95, 214, 254);
const INFO: LevelStyle = LevelStyle::rgb(95, 254, 135);
const WARN: LevelStyle = LevelStyle::rgb(254, 241, 95);
const ERROR: LevelStyle = LevelStyle::rgb(254, 95, 134);
const FALLBACK: LevelStyle = LevelStyle::rgb(255, 255, 255);

/// Returns the style for `level`. Levels without a dedicated color
/// render white.
pub fn style_for(level: Level) -> LevelStyle {
    match level {
        Level::Debug => DEBUG,
        Level::Info => INFO,
        Level::Warn => WARN,
        Level::Error => ERROR,
        _ => FALLBACK,
    }
}

/// Gray, used for the timestamp column.
pub(crate) fn gray(text: &str) -> ColoredString {
    text.bright_black()
}

/// Italic gray, used for the caller line.
pub(crate) fn faint(text: &str) -> ColoredString {
    text.bright_black().italic()
}
