use super::entities::PriceSeries;
use super::value_objects::{PricePoint, SurfaceSize};
use crate::domain::random::RandomSource;

/// Domain service - builds a fresh series for the given surface.
///
/// Biased random walk with a slow sinusoidal drift; no statistical guarantee
/// beyond staying inside the clamp bounds.
pub struct SeriesGenerator;

impl SeriesGenerator {
    pub fn generate(surface: SurfaceSize, rng: &mut dyn RandomSource) -> PriceSeries {
        let count = surface.point_count();
        let width = surface.width as f64;
        let mut base_price = surface.height as f64 / 2.0;
        let mut points = Vec::with_capacity(count);

        for i in 0..count {
            let volatility = rng.in_range(50.0, 150.0);
            let trend = (i as f64 * 0.01).sin() * 30.0;
            base_price += rng.in_range(-0.5, 0.5) * volatility + trend * 0.1;
            base_price = surface.clamp_price(base_price);

            points.push(PricePoint::at(i as f64 / count as f64 * width, base_price));
        }

        PriceSeries::new(points)
    }
}

/// Domain service - advances the series by one animation step.
///
/// Owns the monotonic animation clock; perceived speed is tied to frame rate,
/// not wall-clock time.
#[derive(Debug, Clone, Default)]
pub struct SeriesUpdater {
    clock: f64,
}

impl SeriesUpdater {
    /// Clock increment per frame.
    pub const TICK: f64 = 0.02;

    pub fn new() -> Self {
        Self::default()
    }

    pub fn clock(&self) -> f64 {
        self.clock
    }

    /// One time-step: perturb every point except the oldest, then scroll the
    /// window and re-space the x positions.
    pub fn advance(
        &mut self,
        series: &mut PriceSeries,
        surface: SurfaceSize,
        rng: &mut dyn RandomSource,
    ) {
        self.clock += Self::TICK;

        for (i, point) in series.points_mut().iter_mut().enumerate().skip(1) {
            let trend = (self.clock + i as f64 * 0.1).sin() * 5.0;
            let noise = rng.in_range(-1.0, 1.0);
            point.set_price(surface.clamp_price(point.price + noise + trend * 0.1));
        }

        let Some(last) = series.last() else {
            return;
        };
        let next_price =
            surface.clamp_price(last.price + rng.in_range(-2.5, 2.5) + self.clock.sin() * 3.0);

        // The appended point sits provisionally at the right edge; respace
        // pulls all N points back onto the even grid.
        series.scroll(PricePoint::at(surface.width as f64, next_price));
        series.respace(surface.width as f64);
    }
}
