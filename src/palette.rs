//! Gradient palette for the recolor pass
//!
//! The recolored logo runs from a dark blue at the top row to a brighter blue
//! at the bottom row. Colors can be given in any CSS color format.

use anyhow::{anyhow, Result};
use image::Rgb;
use std::str::FromStr;

/// Darker blue used at the top of the gradient
pub const PRIMARY_BLUE: Rgb<u8> = Rgb([0, 91, 159]);

/// Brighter blue used towards the bottom of the gradient
pub const SECONDARY_BLUE: Rgb<u8> = Rgb([0, 176, 255]);

/// Accent color for special elements. Not used by the recolor pass.
pub const ACCENT_BLUE: Rgb<u8> = Rgb([0, 229, 255]);

/// Endpoints of the vertical gradient applied to blue pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    /// Color at the top row (t = 0)
    pub primary: Rgb<u8>,

    /// Color the gradient approaches at the bottom row (t -> 1)
    pub secondary: Rgb<u8>,

    /// Accent color, carried but not used by the recolor pass
    pub accent: Rgb<u8>,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            primary: PRIMARY_BLUE,
            secondary: SECONDARY_BLUE,
            accent: ACCENT_BLUE,
        }
    }
}

impl Palette {
    pub fn new(primary: Rgb<u8>, secondary: Rgb<u8>) -> Self {
        Self {
            primary,
            secondary,
            ..Self::default()
        }
    }

    /// Build a palette from two CSS color strings (e.g. "#005b9f", "rgb(0, 176, 255)")
    pub fn from_css(primary: &str, secondary: &str) -> Result<Self> {
        Ok(Self::new(
            parse_css_color(primary)?,
            parse_css_color(secondary)?,
        ))
    }

    /// Interpolate between the primary and secondary colors.
    ///
    /// Each channel is `primary * (1 - t) + secondary * t`, truncated toward
    /// zero. `t` is expected in `[0, 1)`.
    pub fn gradient_at(&self, t: f64) -> Rgb<u8> {
        let mut out = [0u8; 3];
        for (c, value) in out.iter_mut().enumerate() {
            let blended = self.primary[c] as f64 * (1.0 - t) + self.secondary[c] as f64 * t;
            *value = blended.clamp(0.0, 255.0) as u8;
        }
        Rgb(out)
    }
}

/// Parse a CSS color string into an opaque RGB triple
pub fn parse_css_color(color: &str) -> Result<Rgb<u8>> {
    let srgb = css_color::Srgb::from_str(color)
        .map_err(|_| anyhow!("Invalid color: {color:?} (expected a CSS color)"))?;

    Ok(Rgb([
        (srgb.red * 255.).round() as u8,
        (srgb.green * 255.).round() as u8,
        (srgb.blue * 255.).round() as u8,
    ]))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_palette_matches_constants() {
        let palette = Palette::default();
        assert_eq!(palette.primary, Rgb([0, 91, 159]));
        assert_eq!(palette.secondary, Rgb([0, 176, 255]));
        assert_eq!(palette.accent, Rgb([0, 229, 255]));
    }

    #[test]
    fn test_parse_hex_colors() {
        assert_eq!(parse_css_color("#005b9f").unwrap(), PRIMARY_BLUE);
        assert_eq!(parse_css_color("#00b0ff").unwrap(), SECONDARY_BLUE);
        assert_eq!(parse_css_color("#fff").unwrap(), Rgb([255, 255, 255]));
    }

    #[test]
    fn test_parse_invalid_color() {
        assert!(parse_css_color("not-a-color").is_err());
        assert!(Palette::from_css("#005b9f", "").is_err());
    }

    #[test]
    fn test_gradient_endpoints() {
        let palette = Palette::default();
        assert_eq!(palette.gradient_at(0.0), PRIMARY_BLUE);
        assert_eq!(palette.gradient_at(0.5), Rgb([0, 133, 207]));
        // Truncation keeps the last row just short of the secondary color
        assert_eq!(palette.gradient_at(0.99), Rgb([0, 175, 254]));
    }
}
