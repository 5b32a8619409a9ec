use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;
use core::str::FromStr;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// An RGB highlight color, written as `#rrggbb`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    #[must_use]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parses `#rgb` or `#rrggbb` (the leading `#` is optional).
    #[must_use]
    pub fn from_hex(s: &str) -> Option<Self> {
        let hex = s.trim();
        let hex = hex.strip_prefix('#').unwrap_or(hex);
        if !hex.is_ascii() {
            return None;
        }
        match hex.len() {
            3 => {
                let mut channels = hex.chars().map(|c| c.to_digit(16).map(|d| (d * 17) as u8));
                Some(Self::rgb(channels.next()??, channels.next()??, channels.next()??))
            }
            6 => {
                let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
                Some(Self::rgb(channel(0)?, channel(2)?, channel(4)?))
            }
            _ => None,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseColorError;

impl fmt::Display for ParseColorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("expected a hex color such as #ffadad or #fa0")
    }
}

impl core::error::Error for ParseColorError {}

impl FromStr for Color {
    type Err = ParseColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s).ok_or(ParseColorError)
    }
}

impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

/// Swatches shared by manual highlighting and rhyme coloring.
pub const DEFAULT_COLORS: [Color; 12] = [
    Color::rgb(0xff, 0xad, 0xad),
    Color::rgb(0xff, 0xd6, 0xa5),
    Color::rgb(0xfd, 0xff, 0xb6),
    Color::rgb(0xca, 0xff, 0xbf),
    Color::rgb(0x9b, 0xf6, 0xff),
    Color::rgb(0xa0, 0xc4, 0xff),
    Color::rgb(0xbd, 0xb2, 0xff),
    Color::rgb(0xff, 0xc6, 0xff),
    Color::rgb(0xe5, 0xe5, 0xe5),
    Color::rgb(0xf4, 0xa2, 0x61),
    Color::rgb(0x2a, 0x9d, 0x8f),
    Color::rgb(0xe9, 0xc4, 0x6a),
];

/// A non-empty, ordered list of colors indexed cyclically.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Color>", into = "Vec<Color>")]
pub struct Palette {
    colors: Vec<Color>,
}

impl Palette {
    /// Returns `None` for an empty list.
    #[must_use]
    pub fn new(colors: Vec<Color>) -> Option<Self> {
        if colors.is_empty() {
            None
        } else {
            Some(Self { colors })
        }
    }

    /// Color for group `index`, wrapping around the palette.
    #[must_use]
    pub fn color(&self, index: usize) -> Color {
        self.colors[index % self.colors.len()]
    }

    /// The swatch selected before any explicit choice.
    #[must_use]
    pub fn first(&self) -> Color {
        self.colors[0]
    }

    #[must_use]
    pub fn colors(&self) -> &[Color] {
        &self.colors
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        false
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            colors: DEFAULT_COLORS.to_vec(),
        }
    }
}

impl TryFrom<Vec<Color>> for Palette {
    type Error = &'static str;

    fn try_from(colors: Vec<Color>) -> Result<Self, Self::Error> {
        Self::new(colors).ok_or("palette must contain at least one color")
    }
}

impl From<Palette> for Vec<Color> {
    fn from(palette: Palette) -> Self {
        palette.colors
    }
}
