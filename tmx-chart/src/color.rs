//! Sequential yellow-orange-red color scale.
//!
//! Colors are interpolated with a uniform cubic B-spline through the palette,
//! which passes exactly through the first and last colors.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Rgb { r, g, b }
    }

    /// Parse `#rrggbb`.
    pub fn from_hex(s: &str) -> Option<Rgb> {
        let hex = s.strip_prefix('#')?;
        if hex.len() != 6 {
            return None;
        }
        let channel = |i: usize| u8::from_str_radix(hex.get(i..i + 2)?, 16).ok();
        Some(Rgb::new(channel(0)?, channel(2)?, channel(4)?))
    }

    /// Weighted channel sum on the 0-255 scale; lower reads as darker and warmer
    /// along this palette.
    pub fn luminance(&self) -> f64 {
        0.2126 * self.r as f64 + 0.7152 * self.g as f64 + 0.0722 * self.b as f64
    }
}

/// Formats as `#rrggbb`.
impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// Nine-step light yellow to dark red palette.
pub const YL_OR_RD: [Rgb; 9] = [
    Rgb::new(0xff, 0xff, 0xcc),
    Rgb::new(0xff, 0xed, 0xa0),
    Rgb::new(0xfe, 0xd9, 0x76),
    Rgb::new(0xfe, 0xb2, 0x4c),
    Rgb::new(0xfd, 0x8d, 0x3c),
    Rgb::new(0xfc, 0x4e, 0x2a),
    Rgb::new(0xe3, 0x1a, 0x1c),
    Rgb::new(0xbd, 0x00, 0x26),
    Rgb::new(0x80, 0x00, 0x26),
];

/// Maps a temperature to a palette color. Inputs outside the domain clamp to
/// the end colors.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorScale {
    domain: (f64, f64),
    palette: &'static [Rgb],
}

impl ColorScale {
    pub fn new(min: f64, max: f64) -> Self {
        ColorScale {
            domain: (min, max),
            palette: &YL_OR_RD,
        }
    }

    pub fn domain(&self) -> (f64, f64) {
        self.domain
    }

    /// Position of `value` in the domain, clamped to `[0, 1]`.
    pub fn normalize(&self, value: f64) -> f64 {
        let (d0, d1) = self.domain;
        if d1 == d0 || value.is_nan() {
            return 0.5;
        }
        ((value - d0) / (d1 - d0)).clamp(0.0, 1.0)
    }

    pub fn rgb(&self, value: f64) -> Rgb {
        interpolate_basis(self.palette, self.normalize(value))
    }

    /// CSS color string for `value`.
    pub fn color(&self, value: f64) -> String {
        self.rgb(value).to_string()
    }
}

fn basis(t1: f64, v0: f64, v1: f64, v2: f64, v3: f64) -> f64 {
    let t2 = t1 * t1;
    let t3 = t2 * t1;
    ((1.0 - 3.0 * t1 + 3.0 * t2 - t3) * v0
        + (4.0 - 6.0 * t2 + 3.0 * t3) * v1
        + (1.0 + 3.0 * t1 + 3.0 * t2 - 3.0 * t3) * v2
        + t3 * v3)
        / 6.0
}

fn interpolate_basis(palette: &[Rgb], t: f64) -> Rgb {
    match palette.len() {
        0 => return Rgb::new(0, 0, 0),
        1 => return palette[0],
        _ => {}
    }
    let n = palette.len() - 1;
    let t = t.clamp(0.0, 1.0);
    let i = if t >= 1.0 {
        n - 1
    } else {
        ((t * n as f64).floor() as usize).min(n - 1)
    };
    let local = (t - i as f64 / n as f64) * n as f64;

    let channel = |pick: fn(&Rgb) -> u8| -> u8 {
        let v1 = pick(&palette[i]) as f64;
        let v2 = pick(&palette[i + 1]) as f64;
        let v0 = if i > 0 {
            pick(&palette[i - 1]) as f64
        } else {
            2.0 * v1 - v2
        };
        let v3 = if i < n - 1 {
            pick(&palette[i + 2]) as f64
        } else {
            2.0 * v2 - v1
        };
        basis(local, v0, v1, v2, v3).round().clamp(0.0, 255.0) as u8
    };

    Rgb::new(channel(|c| c.r), channel(|c| c.g), channel(|c| c.b))
}
