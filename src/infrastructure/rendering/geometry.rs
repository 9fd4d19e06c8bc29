//! Frame geometry precomputed from the series state, kept separate from the
//! canvas calls so it stays testable off-browser.

use crate::domain::chart::{PriceSeries, SurfaceSize};
use crate::domain::random::RandomSource;

pub const GRID_ROWS: u32 = 10;
pub const GRID_COLS: u32 = 20;

/// Every 3rd point opens a candle; the following point closes it.
pub const CANDLE_STRIDE: usize = 3;
/// Every 2nd point carries a volume bar.
pub const VOLUME_STRIDE: usize = 2;

pub const MIN_CANDLE_WIDTH: f64 = 2.0;
pub const MIN_BODY_HEIGHT: f64 = 2.0;
/// Fixed wick offset beyond the body, plus a random extent on top.
pub const WICK_GAP: f64 = 20.0;
pub const WICK_EXTENT: f64 = 30.0;

pub const VOLUME_BAR_WIDTH: f64 = 2.0;
pub const VOLUME_MIN: f64 = 20.0;
pub const VOLUME_MAX: f64 = 100.0;

/// Grid line positions for one frame.
#[derive(Debug, Clone, PartialEq)]
pub struct GridLayout {
    pub rows: Vec<f64>,
    pub cols: Vec<f64>,
}

pub fn grid_layout(surface: SurfaceSize) -> GridLayout {
    let height = surface.height as f64;
    let width = surface.width as f64;
    GridLayout {
        rows: (0..GRID_ROWS).map(|i| height / GRID_ROWS as f64 * i as f64).collect(),
        cols: (0..GRID_COLS).map(|i| width / GRID_COLS as f64 * i as f64).collect(),
    }
}

/// Render data for one synthetic candlestick (precomputed).
///
/// All fields are screen coordinates: `high_y` sits above the body (smaller
/// y), `low_y` below it. The up/down split compares raw y values, matching
/// the same inverted convention.
#[derive(Debug, Clone, PartialEq)]
pub struct CandleGlyph {
    pub x: f64,
    pub high_y: f64,
    pub low_y: f64,
    pub body_top: f64,
    pub body_height: f64,
    pub width: f64,
    pub bullish: bool,
}

pub fn candle_width(surface_width: f64, point_count: usize) -> f64 {
    if point_count == 0 {
        return MIN_CANDLE_WIDTH;
    }
    (surface_width / point_count as f64 / 2.0).max(MIN_CANDLE_WIDTH)
}

/// Synthesize candle glyphs from the series: every 3rd point is the open,
/// its successor the close (or the open itself at the right edge).
pub fn candle_glyphs(
    series: &PriceSeries,
    surface_width: f64,
    rng: &mut dyn RandomSource,
) -> Vec<CandleGlyph> {
    let points = series.points();
    let width = candle_width(surface_width, points.len());
    let mut glyphs = Vec::with_capacity(points.len() / CANDLE_STRIDE + 1);

    for i in (0..points.len()).step_by(CANDLE_STRIDE) {
        let open = points[i].y;
        let close = points.get(i + 1).map(|p| p.y).unwrap_or(open);

        let high_y = open.min(close) - WICK_GAP - rng.in_range(0.0, WICK_EXTENT);
        let low_y = open.max(close) + WICK_GAP + rng.in_range(0.0, WICK_EXTENT);

        glyphs.push(CandleGlyph {
            x: points[i].x,
            high_y,
            low_y,
            body_top: open.min(close),
            body_height: (close - open).abs().max(MIN_BODY_HEIGHT),
            width,
            bullish: close > open,
        });
    }

    glyphs
}

/// Render data for one volume bar, drawn upward from the bottom edge.
#[derive(Debug, Clone, PartialEq)]
pub struct VolumeBar {
    pub x: f64,
    pub height: f64,
}

pub fn volume_bars(series: &PriceSeries, rng: &mut dyn RandomSource) -> Vec<VolumeBar> {
    series
        .points()
        .iter()
        .step_by(VOLUME_STRIDE)
        .map(|point| VolumeBar { x: point.x, height: rng.in_range(VOLUME_MIN, VOLUME_MAX) })
        .collect()
}
