//! Color themes for the trail display.

use ratatui::style::Color;

/// Color theme for the trail display.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ColorTheme {
    #[default]
    Purple,
    Cyan,
    Green,
    Amber,
    Rose,
}

impl ColorTheme {
    /// Cycle to the next color theme.
    pub fn next(self) -> Self {
        match self {
            ColorTheme::Purple => ColorTheme::Cyan,
            ColorTheme::Cyan => ColorTheme::Green,
            ColorTheme::Green => ColorTheme::Amber,
            ColorTheme::Amber => ColorTheme::Rose,
            ColorTheme::Rose => ColorTheme::Purple,
        }
    }

    /// Base RGB components of the theme hue.
    ///
    /// Kept as raw components rather than a [`Color`] so the renderer can
    /// scale them for opacity fades.
    pub fn rgb(self) -> (u8, u8, u8) {
        match self {
            ColorTheme::Purple => (147, 51, 234),
            ColorTheme::Cyan => (34, 211, 238),
            ColorTheme::Green => (74, 222, 128),
            ColorTheme::Amber => (251, 191, 36),
            ColorTheme::Rose => (244, 63, 94),
        }
    }

    /// Full-intensity color for UI accents.
    pub fn color(self) -> Color {
        let (r, g, b) = self.rgb();
        Color::Rgb(r, g, b)
    }

    /// Configuration name of this theme.
    pub fn name(self) -> &'static str {
        match self {
            ColorTheme::Purple => "purple",
            ColorTheme::Cyan => "cyan",
            ColorTheme::Green => "green",
            ColorTheme::Amber => "amber",
            ColorTheme::Rose => "rose",
        }
    }

    /// Parse a theme from its configuration name.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "purple" => Some(ColorTheme::Purple),
            "cyan" => Some(ColorTheme::Cyan),
            "green" => Some(ColorTheme::Green),
            "amber" => Some(ColorTheme::Amber),
            "rose" => Some(ColorTheme::Rose),
            _ => None,
        }
    }
}
