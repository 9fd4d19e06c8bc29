/// Injectable randomness for the price model. The browser implementation
/// lives in the infrastructure layer; tests supply deterministic sequences.
pub trait RandomSource {
    /// Next sample in `[0, 1)`.
    fn next_unit(&mut self) -> f64;

    /// Uniform sample in `[lo, hi)`.
    fn in_range(&mut self, lo: f64, hi: f64) -> f64 {
        lo + self.next_unit() * (hi - lo)
    }
}

/// Deterministic source cycling through a fixed list of unit samples.
#[derive(Debug, Clone)]
pub struct SequenceSource {
    values: Vec<f64>,
    cursor: usize,
}

impl SequenceSource {
    pub fn new(values: Vec<f64>) -> Self {
        Self { values, cursor: 0 }
    }

    /// Source that always yields the same unit sample. With `0.5` every
    /// `in_range(-a, a)` term collapses to zero, which makes the price model
    /// fully predictable.
    pub fn constant(value: f64) -> Self {
        Self::new(vec![value])
    }
}

impl RandomSource for SequenceSource {
    fn next_unit(&mut self) -> f64 {
        if self.values.is_empty() {
            return 0.5;
        }
        let value = self.values[self.cursor % self.values.len()];
        self.cursor += 1;
        value.clamp(0.0, 1.0 - f64::EPSILON)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sequence_cycles() {
        let mut src = SequenceSource::new(vec![0.0, 0.25, 0.75]);
        assert_eq!(src.next_unit(), 0.0);
        assert_eq!(src.next_unit(), 0.25);
        assert_eq!(src.next_unit(), 0.75);
        assert_eq!(src.next_unit(), 0.0);
    }

    #[test]
    fn in_range_spans_interval() {
        let mut src = SequenceSource::new(vec![0.0, 0.5]);
        assert_eq!(src.in_range(-1.0, 1.0), -1.0);
        assert_eq!(src.in_range(-1.0, 1.0), 0.0);
    }

    #[test]
    fn empty_sequence_falls_back_to_midpoint() {
        let mut src = SequenceSource::new(Vec::new());
        assert_eq!(src.next_unit(), 0.5);
    }
}
