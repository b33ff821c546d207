//! Deterministic per-layer colors.
//!
//! The hash is a plain sum of character codes, so different layer names
//! collide freely. Colors are derived once when a shape is created and stored
//! on the shape, which keeps a shape's color fixed even if the scheme changes.

#[cfg(test)]
#[path = "color_test.rs"]
mod color_test;

use crate::consts::LAYER_ALPHA;

const RED_MULTIPLIER: u64 = 123;
const GREEN_MULTIPLIER: u64 = 321;
const BLUE_MULTIPLIER: u64 = 231;

/// Sum of the first UTF-16 code unit of every character in `layer`.
///
/// Characters outside the Basic Multilingual Plane contribute their high
/// surrogate, matching what a browser reports for `charCodeAt(0)`.
#[must_use]
pub fn layer_hash(layer: &str) -> u64 {
    let mut units = [0_u16; 2];
    layer
        .chars()
        .map(|c| u64::from(c.encode_utf16(&mut units)[0]))
        .sum()
}

/// RGB channels for a layer name, each in `0..255`.
#[must_use]
pub fn layer_rgb(layer: &str) -> (u64, u64, u64) {
    let hash = layer_hash(layer);
    (
        hash.wrapping_mul(RED_MULTIPLIER) % 255,
        hash.wrapping_mul(GREEN_MULTIPLIER) % 255,
        hash.wrapping_mul(BLUE_MULTIPLIER) % 255,
    )
}

/// CSS `rgba(r,g,b,0.4)` color for a layer name.
#[must_use]
pub fn layer_color(layer: &str) -> String {
    let (r, g, b) = layer_rgb(layer);
    format!("rgba({r},{g},{b},{LAYER_ALPHA})")
}
