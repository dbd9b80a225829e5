//! Color types and downgrade utilities.

use std::fmt;
use std::str::FromStr;

/// RGB color (opaque).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    /// Red channel (0–255).
    pub r: u8,
    /// Green channel (0–255).
    pub g: u8,
    /// Blue channel (0–255).
    pub b: u8,
}

impl Rgb {
    /// Create a new RGB color.
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Create an RGB color from a packed `0xRRGGBB` value.
    #[must_use]
    pub const fn from_u32(value: u32) -> Self {
        Self {
            r: ((value >> 16) & 0xFF) as u8,
            g: ((value >> 8) & 0xFF) as u8,
            b: (value & 0xFF) as u8,
        }
    }

    /// Pack into a `0xRRGGBB` value.
    #[must_use]
    pub const fn as_u32(self) -> u32 {
        ((self.r as u32) << 16) | ((self.g as u32) << 8) | (self.b as u32)
    }

    /// Compute perceived luminance (BT.709) as a `u8` (0 = black, 255 = white).
    #[must_use]
    pub fn luminance_u8(self) -> u8 {
        // ITU-R BT.709 luma: 0.2126 R + 0.7152 G + 0.0722 B
        let r = self.r as u32;
        let g = self.g as u32;
        let b = self.b as u32;
        let luma = 2126 * r + 7152 * g + 722 * b;
        ((luma + 5000) / 10_000) as u8
    }

    /// Format as a lowercase `#rrggbb` string.
    #[must_use]
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// The sixteen legacy chat colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum NamedColor {
    Black = 0,
    DarkBlue = 1,
    DarkGreen = 2,
    DarkAqua = 3,
    DarkRed = 4,
    DarkPurple = 5,
    Gold = 6,
    Gray = 7,
    DarkGray = 8,
    Blue = 9,
    Green = 10,
    Aqua = 11,
    Red = 12,
    LightPurple = 13,
    Yellow = 14,
    White = 15,
}

const NAMED_PALETTE: [(NamedColor, &str, Rgb); 16] = [
    (NamedColor::Black, "black", Rgb::from_u32(0x000000)),
    (NamedColor::DarkBlue, "dark_blue", Rgb::from_u32(0x0000AA)),
    (NamedColor::DarkGreen, "dark_green", Rgb::from_u32(0x00AA00)),
    (NamedColor::DarkAqua, "dark_aqua", Rgb::from_u32(0x00AAAA)),
    (NamedColor::DarkRed, "dark_red", Rgb::from_u32(0xAA0000)),
    (NamedColor::DarkPurple, "dark_purple", Rgb::from_u32(0xAA00AA)),
    (NamedColor::Gold, "gold", Rgb::from_u32(0xFFAA00)),
    (NamedColor::Gray, "gray", Rgb::from_u32(0xAAAAAA)),
    (NamedColor::DarkGray, "dark_gray", Rgb::from_u32(0x555555)),
    (NamedColor::Blue, "blue", Rgb::from_u32(0x5555FF)),
    (NamedColor::Green, "green", Rgb::from_u32(0x55FF55)),
    (NamedColor::Aqua, "aqua", Rgb::from_u32(0x55FFFF)),
    (NamedColor::Red, "red", Rgb::from_u32(0xFF5555)),
    (NamedColor::LightPurple, "light_purple", Rgb::from_u32(0xFF55FF)),
    (NamedColor::Yellow, "yellow", Rgb::from_u32(0xFFFF55)),
    (NamedColor::White, "white", Rgb::from_u32(0xFFFFFF)),
];

impl NamedColor {
    /// All named colors in palette order.
    pub const ALL: [NamedColor; 16] = [
        Self::Black,
        Self::DarkBlue,
        Self::DarkGreen,
        Self::DarkAqua,
        Self::DarkRed,
        Self::DarkPurple,
        Self::Gold,
        Self::Gray,
        Self::DarkGray,
        Self::Blue,
        Self::Green,
        Self::Aqua,
        Self::Red,
        Self::LightPurple,
        Self::Yellow,
        Self::White,
    ];

    /// Return the palette index (0–15).
    #[must_use]
    pub const fn as_u8(self) -> u8 {
        self as u8
    }

    /// The canonical snake_case name (`"dark_blue"`).
    #[must_use]
    pub const fn name(self) -> &'static str {
        NAMED_PALETTE[self as usize].1
    }

    /// The canonical RGB value.
    #[must_use]
    pub const fn rgb(self) -> Rgb {
        NAMED_PALETTE[self as usize].2
    }

    /// Look up a named color by its canonical name (case-insensitive).
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        NAMED_PALETTE
            .iter()
            .find(|(_, candidate, _)| candidate.eq_ignore_ascii_case(name))
            .map(|(color, _, _)| *color)
    }
}

impl fmt::Display for NamedColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A component color: either one of the legacy named colors or a full RGB value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    /// Legacy named color.
    Named(NamedColor),
    /// True-color RGB value.
    Rgb(Rgb),
}

impl Color {
    /// Create a true-color RGB value.
    #[must_use]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::Rgb(Rgb::new(r, g, b))
    }

    /// Convert this color to an RGB triplet regardless of its kind.
    #[must_use]
    pub const fn to_rgb(self) -> Rgb {
        match self {
            Self::Named(named) => named.rgb(),
            Self::Rgb(rgb) => rgb,
        }
    }

    /// Downgrade to the closest legacy named color.
    ///
    /// Named colors map to themselves; RGB values pick the palette entry with
    /// the smallest luma-weighted distance.
    #[must_use]
    pub fn nearest_named(self) -> NamedColor {
        match self {
            Self::Named(named) => named,
            Self::Rgb(rgb) => rgb_to_named(rgb),
        }
    }

    /// Parse either a legacy name (`"gold"`) or a `#rrggbb` hex string.
    pub fn parse(value: &str) -> Result<Self, ColorParseError> {
        let trimmed = value.trim();
        if let Some(hex) = trimmed.strip_prefix('#') {
            return parse_hex(hex)
                .map(Self::Rgb)
                .ok_or_else(|| ColorParseError::new(value));
        }
        NamedColor::from_name(trimmed)
            .map(Self::Named)
            .ok_or_else(|| ColorParseError::new(value))
    }
}

impl From<NamedColor> for Color {
    fn from(color: NamedColor) -> Self {
        Self::Named(color)
    }
}

impl From<Rgb> for Color {
    fn from(rgb: Rgb) -> Self {
        Self::Rgb(rgb)
    }
}

impl FromStr for Color {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Named(named) => f.write_str(named.name()),
            Self::Rgb(rgb) => f.write_str(&rgb.to_hex()),
        }
    }
}

/// A color string that is neither a known name nor a valid `#rrggbb` value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorParseError {
    value: String,
}

impl ColorParseError {
    fn new(value: &str) -> Self {
        Self {
            value: value.to_string(),
        }
    }

    /// The rejected input.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }
}

impl fmt::Display for ColorParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid color '{}'", self.value)
    }
}

impl std::error::Error for ColorParseError {}

fn parse_hex(hex: &str) -> Option<Rgb> {
    if hex.len() != 6 || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    u32::from_str_radix(hex, 16).ok().map(Rgb::from_u32)
}

/// Convert an RGB color to the nearest legacy named color.
#[must_use]
pub fn rgb_to_named(rgb: Rgb) -> NamedColor {
    let mut best = NamedColor::Black;
    let mut best_dist = u64::MAX;

    for (color, _, candidate) in NAMED_PALETTE.iter() {
        let dist = weighted_distance(rgb, *candidate);
        if dist < best_dist {
            best = *color;
            best_dist = dist;
        }
    }

    best
}

fn weighted_distance(a: Rgb, b: Rgb) -> u64 {
    let dr = a.r as i32 - b.r as i32;
    let dg = a.g as i32 - b.g as i32;
    let db = a.b as i32 - b.b as i32;
    let dr2 = (dr * dr) as u64;
    let dg2 = (dg * dg) as u64;
    let db2 = (db * db) as u64;
    2126 * dr2 + 7152 * dg2 + 722 * db2
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    // --- Rgb tests ---

    #[test]
    fn rgb_u32_roundtrip() {
        let rgb = Rgb::new(0x12, 0x34, 0x56);
        assert_eq!(rgb.as_u32(), 0x123456);
        assert_eq!(Rgb::from_u32(0x123456), rgb);
    }

    #[test]
    fn rgb_luminance_extremes() {
        assert_eq!(Rgb::new(0, 0, 0).luminance_u8(), 0);
        assert_eq!(Rgb::new(255, 255, 255).luminance_u8(), 255);
    }

    #[test]
    fn rgb_hex_is_lowercase_and_padded() {
        assert_eq!(Rgb::new(1, 0xAB, 0).to_hex(), "#01ab00");
    }

    // --- NamedColor tests ---

    #[test]
    fn named_palette_is_indexed_in_order() {
        for (idx, color) in NamedColor::ALL.iter().enumerate() {
            assert_eq!(color.as_u8() as usize, idx);
            assert_eq!(NAMED_PALETTE[idx].0, *color);
        }
    }

    #[test]
    fn named_lookup_is_case_insensitive() {
        assert_eq!(NamedColor::from_name("GOLD"), Some(NamedColor::Gold));
        assert_eq!(
            NamedColor::from_name("light_purple"),
            Some(NamedColor::LightPurple)
        );
        assert_eq!(NamedColor::from_name("purple"), None);
    }

    // --- Color tests ---

    #[test]
    fn parse_named_and_hex() {
        assert_eq!(Color::parse("red"), Ok(Color::Named(NamedColor::Red)));
        assert_eq!(Color::parse("#FF8000"), Ok(Color::rgb(255, 128, 0)));
        assert_eq!(" aqua ".parse::<Color>(), Ok(Color::Named(NamedColor::Aqua)));
    }

    #[test]
    fn parse_rejects_garbage() {
        assert!(Color::parse("#12345").is_err());
        assert!(Color::parse("#gg0000").is_err());
        assert!(Color::parse("crimson").is_err());
        let err = Color::parse("nope").unwrap_err();
        assert_eq!(err.value(), "nope");
        assert_eq!(err.to_string(), "invalid color 'nope'");
    }

    #[test]
    fn display_uses_name_or_hex() {
        assert_eq!(Color::Named(NamedColor::DarkGray).to_string(), "dark_gray");
        assert_eq!(Color::rgb(0, 0, 255).to_string(), "#0000ff");
    }

    #[test]
    fn nearest_named_exact_palette_hits() {
        for color in NamedColor::ALL {
            assert_eq!(Color::Rgb(color.rgb()).nearest_named(), color);
        }
    }

    #[test]
    fn nearest_named_close_values() {
        assert_eq!(Color::rgb(250, 80, 80).nearest_named(), NamedColor::Red);
        assert_eq!(Color::rgb(10, 10, 10).nearest_named(), NamedColor::Black);
    }

    proptest! {
        #[test]
        fn hex_display_parses_back(r in any::<u8>(), g in any::<u8>(), b in any::<u8>()) {
            let color = Color::rgb(r, g, b);
            prop_assert_eq!(Color::parse(&color.to_string()), Ok(color));
        }
    }
}
