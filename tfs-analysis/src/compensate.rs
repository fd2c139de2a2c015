//! Legibility compensation for colors rendered on a dark background.
//!
//! Dark or translucent palette colors are brightened before rendering so
//! they stay readable; the stored token value is never touched — only the
//! render color comes from here.

use serde::Deserialize;
use tfs_parser::Rgba;

/// Whether resolved colors are perceptually corrected before rendering.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CompensationMode {
    #[default]
    Auto,
    Off,
}

/// Alpha below this is treated as a legibility risk on its own.
const TRANSLUCENT_ALPHA: f64 = 0.55;
/// Flat boost applied to translucent colors.
const TRANSLUCENT_BOOST: f64 = 0.5;
/// Step of the progressive blend search.
const BLEND_STEP: f64 = 0.1;
/// Hard cap: the output is never blended further toward white than this,
/// even when the luminance target stays out of reach.
const MAX_BLEND: f64 = 0.85;

/// Brighten `color` until its relative luminance reaches `min_luminance`.
///
/// Substantially translucent colors (alpha < 0.55) get a flat 50% blend
/// toward white regardless of luminance. Otherwise the cumulative blend
/// factor grows in 0.1 steps, re-blending the *original* color each step,
/// until the target is met or the factor hits the 0.85 cap. Pure and
/// deterministic.
pub fn compensate(color: Rgba, min_luminance: f64) -> Rgba {
    if color.alpha < TRANSLUCENT_ALPHA {
        return color.blend_toward_white(TRANSLUCENT_BOOST);
    }
    if color.relative_luminance() >= min_luminance {
        return color;
    }
    let mut factor = 0.0;
    let mut out = color;
    while factor < MAX_BLEND && out.relative_luminance() < min_luminance {
        factor = (factor + BLEND_STEP).min(MAX_BLEND);
        out = color.blend_toward_white(factor);
    }
    out
}
