use baltree_config::{Color as ConfigColor, RenderSettings};
use baltree_core::Color as NodeColor;
use crossterm::style::{Color, Stylize};

/// Terminal colors for red and black nodes
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Theme {
    red: Option<Color>,
    black: Option<Color>,
}

impl Theme {
    /// A theme that leaves text untouched
    pub fn plain() -> Self {
        Self::default()
    }

    /// Create theme from configuration
    pub fn from_config(settings: &RenderSettings) -> Self {
        if !settings.colors {
            return Self::plain();
        }

        Self {
            red: Some(Self::hex_to_color(settings.red)),
            black: Some(Self::hex_to_color(settings.black)),
        }
    }

    /// Convert hex color to crossterm Color
    pub fn hex_to_color(hex: ConfigColor) -> Color {
        Color::Rgb {
            r: hex.r,
            g: hex.g,
            b: hex.b,
        }
    }

    pub fn is_plain(&self) -> bool {
        self.red.is_none() && self.black.is_none()
    }

    pub fn color_for(&self, color: NodeColor) -> Option<Color> {
        match color {
            NodeColor::Red => self.red,
            NodeColor::Black => self.black,
        }
    }

    /// Style `text` with the terminal color of a node
    pub fn paint(&self, color: NodeColor, text: String) -> String {
        match self.color_for(color) {
            Some(fg) => text.with(fg).to_string(),
            None => text,
        }
    }

    /// One-letter color tag used in debug dumps
    pub fn tag(color: NodeColor) -> &'static str {
        match color {
            NodeColor::Red => "R",
            NodeColor::Black => "B",
        }
    }
}
