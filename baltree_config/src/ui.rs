use crate::error::{ConfigError, ConfigResult};
use serde::{Deserialize, Serialize};

/// An RGB color, written as `#RRGGBB` in TOML
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Accepts `#E06C75` or `E06C75`
    pub fn from_hex(hex: &str) -> ConfigResult<Self> {
        let hex = hex.strip_prefix('#').unwrap_or(hex);
        if hex.len() != 6 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(ConfigError::Validation(
                "Color must be 6 hex digits".to_string(),
            ));
        }

        let component = |range: std::ops::Range<usize>, name: &str| {
            u8::from_str_radix(&hex[range], 16)
                .map_err(|_| ConfigError::Validation(format!("Invalid {} component", name)))
        };

        Ok(Self::new(
            component(0..2, "red")?,
            component(2..4, "green")?,
            component(4..6, "blue")?,
        ))
    }

    pub fn to_hex(&self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

impl TryFrom<String> for Color {
    type Error = ConfigError;

    fn try_from(value: String) -> ConfigResult<Self> {
        Self::from_hex(&value)
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.to_hex()
    }
}

/// Tree rendering settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderSettings {
    /// Paint nodes with their red-black color
    pub colors: bool,
    /// Show the parent value next to each node in debug dumps
    pub show_parent: bool,
    /// Color used for red nodes
    pub red: Color,
    /// Color used for black nodes
    pub black: Color,
    /// Label drawn for an absent child
    pub empty_label: String,
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            colors: true,
            show_parent: true,
            red: Color::new(0xE0, 0x6C, 0x75),
            black: Color::new(0xAB, 0xB2, 0xBF),
            empty_label: "(null)".to_string(),
        }
    }
}
