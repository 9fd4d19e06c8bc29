use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use super::geometry;
use crate::domain::chart::{PriceSeries, SurfaceSize};
use crate::domain::errors::SurfaceError;
use crate::domain::random::RandomSource;

const GRID_STROKE: &str = "rgba(0, 212, 255, 0.1)";
const PRICE_LINE_COLOR: &str = "#00d4ff";
const PRICE_LINE_WIDTH: f64 = 2.0;
const PRICE_LINE_GLOW: f64 = 10.0;
const FILL_TOP: &str = "rgba(0, 212, 255, 0.3)";
const FILL_BOTTOM: &str = "rgba(0, 212, 255, 0)";
const BULLISH_COLOR: &str = "#00ff88";
const BEARISH_COLOR: &str = "#ff4444";
const VOLUME_FILL: &str = "rgba(123, 47, 247, 0.3)";

/// Canvas 2D renderer for the animated chart - Infrastructure implementation
pub struct CanvasRenderer {
    canvas: HtmlCanvasElement,
    context: CanvasRenderingContext2d,
    surface: SurfaceSize,
}

impl CanvasRenderer {
    /// Bind to an existing canvas element. A missing element or context is
    /// reported, not fatal; callers degrade to a no-op chart.
    pub fn from_element_id(canvas_id: &str, surface: SurfaceSize) -> Result<Self, SurfaceError> {
        let canvas = web_sys::window()
            .and_then(|window| window.document())
            .and_then(|document| document.get_element_by_id(canvas_id))
            .ok_or_else(|| SurfaceError::CanvasNotFound(canvas_id.to_string()))?
            .dyn_into::<HtmlCanvasElement>()
            .map_err(|_| SurfaceError::CanvasNotFound(canvas_id.to_string()))?;

        let context = canvas
            .get_context("2d")
            .map_err(|e| {
                SurfaceError::ContextUnavailable(canvas_id.to_string(), format!("{:?}", e))
            })?
            .ok_or_else(|| {
                SurfaceError::ContextUnavailable(canvas_id.to_string(), "no 2d context".into())
            })?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| {
                SurfaceError::ContextUnavailable(canvas_id.to_string(), "cast failed".into())
            })?;

        let mut renderer = Self { canvas, context, surface };
        renderer.set_dimensions(surface);
        Ok(renderer)
    }

    pub fn surface(&self) -> SurfaceSize {
        self.surface
    }

    /// Resize the backing canvas attributes along with the stored size.
    pub fn set_dimensions(&mut self, surface: SurfaceSize) {
        self.surface = surface;
        self.canvas.set_width(surface.width);
        self.canvas.set_height(surface.height);
    }

    /// Paint one complete frame: grid, candlesticks, price line with its
    /// gradient fill, volume bars. Read-only with respect to the series.
    pub fn render_frame(
        &self,
        series: &PriceSeries,
        rng: &mut dyn RandomSource,
    ) -> Result<(), JsValue> {
        let width = self.surface.width as f64;
        let height = self.surface.height as f64;
        self.context.clear_rect(0.0, 0.0, width, height);

        self.draw_grid();
        self.draw_candlesticks(series, rng);
        self.draw_price_line(series)?;
        self.draw_volume(series, rng);

        Ok(())
    }

    fn draw_grid(&self) {
        let layout = geometry::grid_layout(self.surface);
        let width = self.surface.width as f64;
        let height = self.surface.height as f64;

        self.context.set_stroke_style(&JsValue::from(GRID_STROKE));
        self.context.set_line_width(1.0);

        for y in layout.rows {
            self.context.begin_path();
            self.context.move_to(0.0, y);
            self.context.line_to(width, y);
            self.context.stroke();
        }

        for x in layout.cols {
            self.context.begin_path();
            self.context.move_to(x, 0.0);
            self.context.line_to(x, height);
            self.context.stroke();
        }
    }

    fn draw_candlesticks(&self, series: &PriceSeries, rng: &mut dyn RandomSource) {
        let glyphs = geometry::candle_glyphs(series, self.surface.width as f64, rng);

        for glyph in glyphs {
            let color = if glyph.bullish { BULLISH_COLOR } else { BEARISH_COLOR };
            self.context.set_stroke_style(&JsValue::from(color));
            self.context.set_fill_style(&JsValue::from(color));

            // Wick from synthetic high to synthetic low
            self.context.begin_path();
            self.context.move_to(glyph.x, glyph.high_y);
            self.context.line_to(glyph.x, glyph.low_y);
            self.context.stroke();

            self.context.fill_rect(
                glyph.x - glyph.width / 2.0,
                glyph.body_top,
                glyph.width,
                glyph.body_height,
            );
        }
    }

    fn draw_price_line(&self, series: &PriceSeries) -> Result<(), JsValue> {
        let points = series.points();
        if points.len() < 2 {
            return Ok(());
        }
        let height = self.surface.height as f64;

        self.context.set_stroke_style(&JsValue::from(PRICE_LINE_COLOR));
        self.context.set_line_width(PRICE_LINE_WIDTH);
        self.context.set_shadow_blur(PRICE_LINE_GLOW);
        self.context.set_shadow_color(PRICE_LINE_COLOR);

        self.context.begin_path();
        self.context.move_to(points[0].x, points[0].y);
        for point in &points[1..] {
            self.context.line_to(point.x, point.y);
        }
        self.context.stroke();
        self.context.set_shadow_blur(0.0);

        // Close the same path down to the bottom edge and fill it with a
        // top-to-bottom gradient fading to transparent.
        let gradient = self.context.create_linear_gradient(0.0, 0.0, 0.0, height);
        gradient.add_color_stop(0.0, FILL_TOP)?;
        gradient.add_color_stop(1.0, FILL_BOTTOM)?;
        self.context.set_fill_style(&JsValue::from(gradient));

        self.context.line_to(points[points.len() - 1].x, height);
        self.context.line_to(points[0].x, height);
        self.context.close_path();
        self.context.fill();

        Ok(())
    }

    fn draw_volume(&self, series: &PriceSeries, rng: &mut dyn RandomSource) {
        let height = self.surface.height as f64;
        self.context.set_fill_style(&JsValue::from(VOLUME_FILL));

        for bar in geometry::volume_bars(series, rng) {
            self.context.fill_rect(
                bar.x - geometry::VOLUME_BAR_WIDTH / 2.0,
                height - bar.height,
                geometry::VOLUME_BAR_WIDTH,
                bar.height,
            );
        }
    }
}
