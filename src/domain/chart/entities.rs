use super::value_objects::PricePoint;

/// Entity - the ordered window of price points currently displayed.
///
/// Index 0 is the oldest visible sample, the last index the most recent.
/// Length is fixed between rebuilds; scrolling drops exactly one point and
/// appends exactly one.
#[derive(Debug, Clone, Default)]
pub struct PriceSeries {
    points: Vec<PricePoint>,
}

impl PriceSeries {
    pub fn new(points: Vec<PricePoint>) -> Self {
        Self { points }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn points(&self) -> &[PricePoint] {
        &self.points
    }

    pub fn points_mut(&mut self) -> &mut [PricePoint] {
        &mut self.points
    }

    pub fn first(&self) -> Option<&PricePoint> {
        self.points.first()
    }

    pub fn last(&self) -> Option<&PricePoint> {
        self.points.last()
    }

    /// Drop the oldest point and append `latest` at the right edge,
    /// preserving the window length.
    pub fn scroll(&mut self, latest: PricePoint) {
        if !self.points.is_empty() {
            self.points.remove(0);
        }
        self.points.push(latest);
    }

    /// Recompute every `x` as `i / N * width`. Called after each scroll so
    /// the window stays evenly distributed across the full surface width.
    pub fn respace(&mut self, width: f64) {
        let count = self.points.len();
        if count == 0 {
            return;
        }
        for (i, point) in self.points.iter_mut().enumerate() {
            point.x = i as f64 / count as f64 * width;
        }
    }
}
