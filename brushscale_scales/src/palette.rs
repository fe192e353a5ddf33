// Copyright 2025 the Brushscale Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Palette indexing: cycling custom colors and sampling named schemes.
//!
//! Only a handful of schemes are bundled. They are stored as concatenated 6-digit hex strings
//! and decoded on demand.

extern crate alloc;

use alloc::vec::Vec;

use peniko::Color;

const CATEGORY10: &str = "1f77b4ff7f0e2ca02cd627289467bd8c564be377c27f7f7fbcbd2217becf";

const TABLEAU10: &str = "4c78a8f58518e4575672b7b254a24beeca3bb279a2ff9da69d755dbab0ac";

const VIRIDIS: &str = concat!(
    "440154470e61481a6c482575472f7d443a834144873d4e8a39568c35608d31688e2d708e",
    "2a788e27818e23888e21918d1f988b1fa08822a8842ab07f35b77943bf7154c56866cc5d",
    "7ad1518fd744a5db36bcdf27d2e21be9e51afde725"
);

const BLUES: &str = "cfe1f2bed8eca8cee58fc1de74b2d75ba3cf4592c63181bd206fb2125ca40a4a90";

const RDYLGN: &str = "a50026d73027f46d43fdae61fee08bffffbfd9ef8ba6d96a66bd631a9850006837";

/// A named color scheme.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Scheme {
    /// d3's ten categorical colors.
    Category10,
    /// Tableau's ten categorical colors.
    Tableau10,
    /// Perceptually uniform sequential ramp.
    Viridis,
    /// Sequential light-to-dark blues.
    Blues,
    /// Diverging red-yellow-green.
    RdYlGn,
}

impl Scheme {
    /// Looks up a scheme by (case-insensitive) name.
    pub fn from_name(name: &str) -> Option<Self> {
        [
            Self::Category10,
            Self::Tableau10,
            Self::Viridis,
            Self::Blues,
            Self::RdYlGn,
        ]
        .into_iter()
        .find(|s| s.name().eq_ignore_ascii_case(name))
    }

    /// The canonical scheme name.
    pub fn name(self) -> &'static str {
        match self {
            Self::Category10 => "category10",
            Self::Tableau10 => "tableau10",
            Self::Viridis => "viridis",
            Self::Blues => "blues",
            Self::RdYlGn => "rdylgn",
        }
    }

    /// Discrete schemes are cycled; continuous ones are interpolated.
    pub fn is_discrete(self) -> bool {
        matches!(self, Self::Category10 | Self::Tableau10)
    }

    /// The scheme's base colors (stops, for continuous schemes).
    pub fn colors(self) -> Vec<Color> {
        let hex = match self {
            Self::Category10 => CATEGORY10,
            Self::Tableau10 => TABLEAU10,
            Self::Viridis => VIRIDIS,
            Self::Blues => BLUES,
            Self::RdYlGn => RDYLGN,
        };
        decode_hex_colors(hex)
    }

    /// Returns exactly `n` colors: discrete schemes cycle, continuous schemes are quantized.
    pub fn sample(self, n: usize) -> Vec<Color> {
        let colors = self.colors();
        if self.is_discrete() {
            cycle(&colors, n)
        } else {
            quantize(&colors, n)
        }
    }
}

/// Returns `n` colors where the `i`-th is `palette[i % palette.len()]`.
pub fn cycle(palette: &[Color], n: usize) -> Vec<Color> {
    if palette.is_empty() {
        return Vec::new();
    }
    (0..n).map(|i| palette[i % palette.len()]).collect()
}

/// Samples `n` evenly spaced colors along a gradient, endpoints included.
///
/// A single sample takes the first stop.
pub fn quantize(stops: &[Color], n: usize) -> Vec<Color> {
    match n {
        0 => Vec::new(),
        1 => stops.first().copied().into_iter().collect(),
        _ => (0..n)
            .filter_map(|i| interpolate_stops(stops, i as f64 / (n - 1) as f64))
            .collect(),
    }
}

/// Evaluates a gradient of evenly spaced stops at `t` (clamped to `[0, 1]`).
pub fn interpolate_stops(stops: &[Color], t: f64) -> Option<Color> {
    let last = stops.len().checked_sub(1)?;
    if last == 0 {
        return Some(stops[0]);
    }
    let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
    let pos = t * last as f64;
    if pos >= last as f64 {
        return Some(stops[last]);
    }
    let mut i = 0;
    while i + 1 < last && (i + 1) as f64 <= pos {
        i += 1;
    }
    Some(lerp_color(stops[i], stops[i + 1], pos - i as f64))
}

/// Component-wise interpolation in sRGB.
pub(crate) fn lerp_color(a: Color, b: Color, t: f64) -> Color {
    #[allow(clippy::cast_possible_truncation, reason = "color components are f32")]
    let t = t as f32;
    let mut out = [0.0_f32; 4];
    for (o, (x, y)) in out.iter_mut().zip(a.components.iter().zip(b.components.iter())) {
        *o = x + (y - x) * t;
    }
    Color::new(out)
}

fn decode_hex_colors(hex: &str) -> Vec<Color> {
    hex.as_bytes()
        .chunks_exact(6)
        .filter_map(|chunk| {
            let s = core::str::from_utf8(chunk).ok()?;
            let r = u8::from_str_radix(&s[0..2], 16).ok()?;
            let g = u8::from_str_radix(&s[2..4], 16).ok()?;
            let b = u8::from_str_radix(&s[4..6], 16).ok()?;
            Some(Color::from_rgba8(r, g, b, 255))
        })
        .collect()
}
