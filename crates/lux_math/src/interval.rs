/// A range of ray parameters `[min, max)`.
///
/// The lower bound is inclusive and the upper bound exclusive, so a
/// nearest-hit search that shrinks `max` to the best `t` found so far keeps
/// the first object encountered when two hits tie.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Interval {
    pub min: f32,
    pub max: f32,
}

impl Interval {
    /// Create a new interval given min and max values.
    pub fn new(min: f32, max: f32) -> Self {
        Self { min, max }
    }

    /// Returns true if `min <= t < max`.
    #[inline]
    pub fn admits(&self, t: f32) -> bool {
        self.min <= t && t < self.max
    }

    /// Same lower bound, new upper bound.
    #[inline]
    pub fn with_max(&self, max: f32) -> Interval {
        Interval::new(self.min, max)
    }

    /// Returns true if no value can be admitted.
    pub fn is_empty(&self) -> bool {
        self.min >= self.max
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interval_creation() {
        let interval = Interval::new(0.0, 10.0);
        assert_eq!(interval.min, 0.0);
        assert_eq!(interval.max, 10.0);
    }

    #[test]
    fn test_interval_admits_half_open() {
        let interval = Interval::new(0.0, 10.0);

        // Lower bound inclusive
        assert!(interval.admits(0.0));
        assert!(interval.admits(5.0));

        // Upper bound exclusive
        assert!(!interval.admits(10.0));
        assert!(!interval.admits(-0.1));
        assert!(!interval.admits(10.1));
    }

    #[test]
    fn test_interval_rejects_nan_and_infinity() {
        let interval = Interval::new(0.0, f32::INFINITY);

        assert!(!interval.admits(f32::NAN));
        assert!(!interval.admits(f32::INFINITY));
        assert!(interval.admits(1e30));
    }

    #[test]
    fn test_interval_with_max() {
        let narrowed = Interval::new(0.001, f32::INFINITY).with_max(2.0);

        assert_eq!(narrowed.min, 0.001);
        assert_eq!(narrowed.max, 2.0);
        assert!(!narrowed.admits(2.0));
    }

    #[test]
    fn test_interval_empty() {
        assert!(Interval::new(5.0, 5.0).is_empty());
        assert!(Interval::new(6.0, 5.0).is_empty());
        assert!(!Interval::new(0.0, f32::INFINITY).is_empty());
    }
}
