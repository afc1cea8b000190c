use serde::Serialize;

use crate::cache::LookupCaches;
use crate::config::{Dimension, ResolvedConfig};

/// Target canvas dimensions in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CanvasSize {
    pub width: u32,
    pub height: u32,
}

/// Layout constants behind the size heuristics.
///
/// These are calibration values tuned against the reference monospace font
/// and theme, not universal truths; re-tune them when targeting a different
/// rasterizer or font.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SizeCalibration {
    /// Estimated advance width of one character cell, in pixels.
    pub char_width: f32,
    /// Estimated height of one text line, in pixels.
    pub line_height: f32,
    /// Horizontal margin, in character columns.
    pub margin_columns: f32,
    /// How many pixels of height one pixel of padding buys.
    pub padding_influence: f32,
    /// The padding the height heuristic was calibrated at.
    pub default_padding: f32,
}

impl Default for SizeCalibration {
    fn default() -> Self {
        Self {
            char_width: 9.6,
            line_height: 24.0,
            margin_columns: 4.0,
            padding_influence: 2.0,
            default_padding: 25.0,
        }
    }
}

/// Memoization key for a computed size: the code plus the configuration
/// subset that governs geometry.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SizeKey {
    code: String,
    width: Option<u32>,
    height: Option<u32>,
    padding: u32,
}

impl SizeKey {
    pub fn new(code: &str, config: &ResolvedConfig) -> Self {
        let bits = |dimension: Dimension| match dimension {
            Dimension::Auto => None,
            Dimension::Px(v) => Some(v.to_bits()),
        };

        Self {
            code: code.to_string(),
            width: bits(config.width),
            height: bits(config.height),
            padding: config.style.padding.to_bits(),
        }
    }
}

/// Derive the canvas size from code geometry and configuration overrides.
///
/// Width: explicit values pass through verbatim, no clamping; auto derives
/// from the widest line. Height: the padding adjustment applies even when the
/// height is explicit, to compensate for the chrome added around the content.
pub fn estimate(
    code: &str,
    config: &ResolvedConfig,
    calibration: &SizeCalibration,
    caches: &LookupCaches,
) -> CanvasSize {
    let key = SizeKey::new(code, config);
    if let Some(size) = caches.cached_size(&key) {
        return size;
    }

    let lines: Vec<&str> = code.split('\n').collect();
    let line_count = lines.len() as f32;
    let max_columns = lines
        .iter()
        .map(|line| caches.width_of(line))
        .fold(0.0_f32, f32::max);

    let width = match config.width {
        Dimension::Auto => (max_columns + calibration.margin_columns) * calibration.char_width,
        Dimension::Px(width) => width,
    };

    let padding_adjustment =
        (config.style.padding - calibration.default_padding) * calibration.padding_influence;
    let height = match config.height {
        Dimension::Auto => (line_count + 2.0) * calibration.line_height,
        Dimension::Px(height) => height,
    } + padding_adjustment;

    let size = CanvasSize {
        width: width.max(0.0).round() as u32,
        height: height.max(0.0).round() as u32,
    };
    caches.store_size(key, size);
    size
}
