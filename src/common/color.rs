//! RGB color type shared by fills and font colors.

use std::fmt;

/// RGB color representation.
///
/// # Examples
///
/// ```rust
/// use pptx_fixtures::common::RGBColor;
///
/// let royal_blue = RGBColor::new(0x41, 0x69, 0xE1);
/// assert_eq!(royal_blue.to_hex(), "4169E1");
/// assert_eq!(RGBColor::from_hex("#4169e1"), Some(royal_blue));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RGBColor {
    /// Red component (0-255)
    pub r: u8,
    /// Green component (0-255)
    pub g: u8,
    /// Blue component (0-255)
    pub b: u8,
}

impl RGBColor {
    pub const WHITE: Self = Self::new(0xFF, 0xFF, 0xFF);
    pub const BLACK: Self = Self::new(0x00, 0x00, 0x00);

    /// Create a new RGB color.
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Create an RGB color from a hex string ("FF0000" or "#FF0000").
    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.trim_start_matches('#');
        if hex.len() != 6 || !hex.is_ascii() {
            return None;
        }

        let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
        let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
        let b = u8::from_str_radix(&hex[4..6], 16).ok()?;

        Some(Self::new(r, g, b))
    }

    /// Convert to an upper-case hex string without `#`, as used by `a:srgbClr/@val`.
    pub fn to_hex(&self) -> String {
        format!("{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

impl fmt::Display for RGBColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.to_hex())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex() {
        assert_eq!(RGBColor::new(0x1a, 0x1a, 0x2e).to_hex(), "1A1A2E");
        assert_eq!(RGBColor::from_hex("FFA500"), Some(RGBColor::new(255, 165, 0)));
        assert_eq!(RGBColor::from_hex("FFA5"), None);
        assert_eq!(RGBColor::from_hex("GGGGGG"), None);
    }

    #[test]
    fn test_display() {
        assert_eq!(RGBColor::WHITE.to_string(), "#FFFFFF");
    }
}
