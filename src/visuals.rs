//! Colors and glyphs for the presentation.
//!
//! Palettes are fixed five-stop color sets sampled uniformly when spawning
//! sparkles. Scene backgrounds and the burst glyph set live here too, so
//! every visual constant has one home.

use glam::Vec3;

/// Pre-defined color palettes for sparkle rendering.
///
/// Each palette is five stops; the field picks one stop uniformly per
/// spawned sparkle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Palette {
    /// Rose and gold — soft pinks with two warm metallic stops (default).
    #[default]
    RoseGold,

    /// Blush — pinks only, no gold.
    Blush,

    /// Candlelight — warm creams and ambers.
    Candlelight,
}

impl Palette {
    /// Get the color stops for this palette (5 colors, linear RGB 0-1).
    pub fn colors(&self) -> [Vec3; 5] {
        match self {
            Palette::RoseGold => [
                hex(0xf2a5b8), // Rose
                hex(0xe07a94), // Deep rose
                hex(0xfad4de), // Pale pink
                hex(0xe0be5c), // Gold
                hex(0xf5e2a8), // Light gold
            ],
            Palette::Blush => [
                hex(0xfad4de), // Pale pink
                hex(0xf2a5b8), // Rose
                hex(0xe8929f), // Dusty rose
                hex(0xe07a94), // Deep rose
                hex(0xc95d77), // Berry
            ],
            Palette::Candlelight => [
                hex(0xfdf6e3), // Cream
                hex(0xf5e2a8), // Light gold
                hex(0xe0be5c), // Gold
                hex(0xd4a843), // Amber
                hex(0xb8862f), // Deep amber
            ],
        }
    }
}

/// Scene background and accent colors used by the default greeting.
pub mod scene_colors {
    use super::hex;
    use glam::Vec3;

    pub fn cream() -> Vec3 {
        hex(0xfdf6e3)
    }
    pub fn rose_whisper() -> Vec3 {
        hex(0xfbeef2)
    }
    pub fn rose_pale() -> Vec3 {
        hex(0xf6dce4)
    }
    pub fn rose_light() -> Vec3 {
        hex(0xf2a5b8)
    }
    pub fn rose_mid() -> Vec3 {
        hex(0xe07a94)
    }
    pub fn rose_deep() -> Vec3 {
        hex(0x9e4260)
    }
    pub fn gold() -> Vec3 {
        hex(0xe0be5c)
    }
    pub fn gold_light() -> Vec3 {
        hex(0xf5e2a8)
    }
    pub fn text_primary() -> Vec3 {
        hex(0x4a3540)
    }
    pub fn text_secondary() -> Vec3 {
        hex(0x7a5c68)
    }
}

/// Glyphs cycled through by the card burst, in slot order.
pub const BURST_GLYPHS: [char; 6] = ['♥', '♡', '❤', '💗', '✿', '💕'];

/// Convert a `0xRRGGBB` color to linear-ish RGB in 0-1.
///
/// Good enough for flat UI tints; no gamma correction is applied beyond the
/// sRGB surface format.
pub fn hex(rgb: u32) -> Vec3 {
    Vec3::new(
        ((rgb >> 16) & 0xff) as f32 / 255.0,
        ((rgb >> 8) & 0xff) as f32 / 255.0,
        (rgb & 0xff) as f32 / 255.0,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_channels() {
        let c = hex(0xff8000);
        assert!((c.x - 1.0).abs() < 1e-6);
        assert!((c.y - 128.0 / 255.0).abs() < 1e-6);
        assert!(c.z < 1e-6);
    }

    #[test]
    fn test_palettes_in_range() {
        for palette in [Palette::RoseGold, Palette::Blush, Palette::Candlelight] {
            for stop in palette.colors() {
                assert!(stop.min_element() >= 0.0);
                assert!(stop.max_element() <= 1.0);
            }
        }
    }

    #[test]
    fn test_burst_glyph_count() {
        assert_eq!(BURST_GLYPHS.len(), 6);
    }
}
