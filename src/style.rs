//! Colors and category palettes for chart layers.
//!
//! Two sources of color: a fixed preset for the four extra-base/single
//! batted-ball outcomes, and a ten-color cycle assigned to arbitrary
//! categories in sorted order. Within one chart call the same category
//! always receives the same color.

use serde::{Deserialize, Serialize};

/// 8-bit RGB display color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub fn hex(&self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

pub const BLACK: Color = Color::rgb(0, 0, 0);
pub const WHITE: Color = Color::rgb(255, 255, 255);
pub const RED: Color = Color::rgb(255, 0, 0);
pub const ORANGE: Color = Color::rgb(255, 165, 0);
pub const BLUE: Color = Color::rgb(0, 0, 255);
pub const GREEN: Color = Color::rgb(0, 128, 0);
pub const GRAY: Color = Color::rgb(128, 128, 128);
pub const BROWN: Color = Color::rgb(165, 42, 42);
pub const SADDLE_BROWN: Color = Color::rgb(139, 69, 19);
pub const LIGHT_GREEN: Color = Color::rgb(144, 238, 144);

/// Preset outcome colors for spray charts, in drawing order.
pub const EVENT_COLORS: [(&str, Color); 4] = [
    ("home_run", RED),
    ("triple", ORANGE),
    ("double", BLUE),
    ("single", GREEN),
];

/// Fallback category cycle (the matplotlib "tab10" order).
pub const PALETTE10: [Color; 10] = [
    Color::rgb(31, 119, 180),  // #1F77B4
    Color::rgb(255, 127, 14),  // #FF7F0E
    Color::rgb(44, 160, 44),   // #2CA02C
    Color::rgb(214, 39, 40),   // #D62728
    Color::rgb(148, 103, 189), // #9467BD
    Color::rgb(140, 86, 75),   // #8C564B
    Color::rgb(227, 119, 194), // #E377C2
    Color::rgb(127, 127, 127), // #7F7F7F
    Color::rgb(188, 189, 34),  // #BCBD22
    Color::rgb(23, 190, 207),  // #17BECF
];

/// Color for the `idx`-th sorted category, cycling through the palette.
#[inline]
pub fn palette_color(idx: usize) -> Color {
    PALETTE10[idx % PALETTE10.len()]
}

/// Preset color for a batted-ball outcome, if it has one.
pub fn event_color(event: &str) -> Option<Color> {
    EVENT_COLORS
        .iter()
        .find(|(name, _)| *name == event)
        .map(|(_, c)| *c)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palette_cycles() {
        assert_eq!(palette_color(0), palette_color(10));
        assert_eq!(palette_color(3), PALETTE10[3]);
    }

    #[test]
    fn event_presets() {
        assert_eq!(event_color("home_run"), Some(RED));
        assert_eq!(event_color("out"), None);
    }

    #[test]
    fn hex_formatting() {
        assert_eq!(PALETTE10[0].hex(), "#1F77B4");
    }
}
