use crate::error::{LeafscanError, Result};

/// Hue/saturation/brightness triple.
///
/// `hue` is in degrees `[0, 360)`, `saturation` and `brightness` in `[0, 1]`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Hsb {
    pub hue: f32,
    pub saturation: f32,
    pub brightness: f32,
}

impl Hsb {
    pub fn from_rgb(rgb: [u8; 3]) -> Self {
        let r = rgb[0] as f32 / 255.0;
        let g = rgb[1] as f32 / 255.0;
        let b = rgb[2] as f32 / 255.0;

        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let delta = max - min;

        let saturation = if max > 0.0 { delta / max } else { 0.0 };

        let hue = if delta == 0.0 {
            0.0
        } else if max == r {
            60.0 * ((g - b) / delta)
        } else if max == g {
            60.0 * ((b - r) / delta + 2.0)
        } else {
            60.0 * ((r - g) / delta + 4.0)
        };
        let hue = if hue < 0.0 { hue + 360.0 } else { hue };

        Self {
            hue,
            saturation,
            brightness: max,
        }
    }

    /// Angular hue distance in degrees, `[0, 180]`.
    pub fn hue_distance(&self, other: &Hsb) -> f32 {
        let diff = (self.hue - other.hue).abs();
        if diff > 180.0 {
            360.0 - diff
        } else {
            diff
        }
    }
}

impl std::fmt::Display for Hsb {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "HSB({:.0}\u{b0}, {:.0}%, {:.0}%)",
            self.hue,
            self.saturation * 100.0,
            self.brightness * 100.0
        )
    }
}

/// Parse `#rrggbb` (the `#` is optional).
pub fn parse_hex_color(s: &str) -> Result<[u8; 3]> {
    let hex = s.trim();
    let hex = hex.strip_prefix('#').unwrap_or(hex);
    if hex.len() != 6 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(LeafscanError::InvalidColor(s.to_string()));
    }

    let channel = |i: usize| {
        u8::from_str_radix(&hex[i..i + 2], 16)
            .map_err(|_| LeafscanError::InvalidColor(s.to_string()))
    };
    Ok([channel(0)?, channel(2)?, channel(4)?])
}
