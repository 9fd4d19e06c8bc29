use serde::{Deserialize, Serialize};

/// Vertical margin kept free above and below the price path, in pixels.
pub const PRICE_MARGIN: f64 = 50.0;

/// Horizontal pixels covered by one series sample.
pub const PIXELS_PER_POINT: u32 = 3;

/// Value Object - current pixel dimensions of the drawing surface
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SurfaceSize {
    pub width: u32,
    pub height: u32,
}

impl SurfaceSize {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Number of series samples for this surface: `floor(width / 3)`.
    pub fn point_count(&self) -> usize {
        (self.width / PIXELS_PER_POINT) as usize
    }

    /// Hard clamp into `[50, height - 50]`. Applied after every price move;
    /// surfaces shorter than twice the margin collapse to the lower bound.
    pub fn clamp_price(&self, price: f64) -> f64 {
        price.min(self.height as f64 - PRICE_MARGIN).max(PRICE_MARGIN)
    }

    pub fn price_floor(&self) -> f64 {
        PRICE_MARGIN
    }

    pub fn price_ceiling(&self) -> f64 {
        self.height as f64 - PRICE_MARGIN
    }
}

/// Value Object - one sample of the synthetic price path.
///
/// `x` is derived from the sample's index and recomputed every frame; `y`
/// mirrors `price` at all times (screen coordinates, y grows downward).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PricePoint {
    pub x: f64,
    pub y: f64,
    pub price: f64,
}

impl PricePoint {
    pub fn at(x: f64, price: f64) -> Self {
        Self { x, y: price, price }
    }

    /// Move the sample to a new price, keeping `y == price`.
    pub fn set_price(&mut self, price: f64) {
        self.price = price;
        self.y = price;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn point_count_floors() {
        assert_eq!(SurfaceSize::new(300, 400).point_count(), 100);
        assert_eq!(SurfaceSize::new(301, 400).point_count(), 100);
        assert_eq!(SurfaceSize::new(302, 400).point_count(), 100);
        assert_eq!(SurfaceSize::new(303, 400).point_count(), 101);
    }

    #[test]
    fn clamp_is_hard() {
        let surface = SurfaceSize::new(300, 400);
        assert_eq!(surface.clamp_price(0.0), 50.0);
        assert_eq!(surface.clamp_price(1e9), 350.0);
        assert_eq!(surface.clamp_price(200.0), 200.0);
    }

    #[test]
    fn tiny_surface_clamps_to_floor() {
        let surface = SurfaceSize::new(30, 60);
        assert_eq!(surface.clamp_price(55.0), 50.0);
    }

    #[test]
    fn set_price_keeps_y_in_sync() {
        let mut point = PricePoint::at(10.0, 120.0);
        point.set_price(180.5);
        assert_eq!(point.y, point.price);
        assert_eq!(point.price, 180.5);
    }
}
