/// The inverse golden ratio, `1/φ = φ - 1`.
const INV_PHI: f64 = 0.618_033_988_749_894_9;

/// Golden section search interval.
///
/// Holds the outer bounds `[lower, upper]` and the two interior probes. The
/// low probe sits at `lower + (1 - 1/φ) * width` and the high probe at
/// `lower + (1/φ) * width`, so after each shrink one old probe is reused.
#[derive(Debug, Clone, Copy)]
pub(super) struct Interval {
    pub(super) lower: f64,
    pub(super) upper: f64,
    pub(super) probe_low: f64,
    pub(super) probe_high: f64,
}

impl Interval {
    /// Creates an interval from bounds given in either order.
    pub(super) fn new([a, b]: [f64; 2]) -> Self {
        let (lower, upper) = if a <= b { (a, b) } else { (b, a) };
        Self {
            lower,
            upper,
            probe_low: low_probe(lower, upper),
            probe_high: high_probe(lower, upper),
        }
    }

    /// Distance between the two probes.
    pub(super) fn probe_gap(&self) -> f64 {
        (self.probe_high - self.probe_low).abs()
    }

    /// Midpoint between the two probes.
    pub(super) fn probe_mid(&self) -> f64 {
        0.5 * (self.probe_low + self.probe_high)
    }

    /// Keeps `[lower, probe_high]`; the old low probe becomes the high probe.
    pub(super) fn keep_lower(&mut self) {
        self.upper = self.probe_high;
        self.probe_high = self.probe_low;
        self.probe_low = low_probe(self.lower, self.upper);
    }

    /// Keeps `[probe_low, upper]`; the old high probe becomes the low probe.
    pub(super) fn keep_upper(&mut self) {
        self.lower = self.probe_low;
        self.probe_low = self.probe_high;
        self.probe_high = high_probe(self.lower, self.upper);
    }

    /// The new low probe [`keep_lower`](Self::keep_lower) would create.
    pub(super) fn next_probe_low(&self) -> f64 {
        low_probe(self.lower, self.probe_high)
    }

    /// The new high probe [`keep_upper`](Self::keep_upper) would create.
    pub(super) fn next_probe_high(&self) -> f64 {
        high_probe(self.probe_low, self.upper)
    }
}

fn low_probe(lower: f64, upper: f64) -> f64 {
    lower + (1.0 - INV_PHI) * (upper - lower)
}

fn high_probe(lower: f64, upper: f64) -> f64 {
    lower + INV_PHI * (upper - lower)
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn probes_divide_interval_by_golden_ratio() {
        let interval = Interval::new([1.0, 11.0]);

        assert_relative_eq!(interval.probe_low, 1.0 + 10.0 * (1.0 - INV_PHI));
        assert_relative_eq!(interval.probe_high, 1.0 + 10.0 * INV_PHI);
        assert_relative_eq!(interval.probe_mid(), 6.0, epsilon = 1e-12);
    }

    #[test]
    fn reversed_bounds_are_sorted() {
        let interval = Interval::new([5.0, -1.0]);

        assert_relative_eq!(interval.lower, -1.0);
        assert_relative_eq!(interval.upper, 5.0);
    }

    #[test]
    fn keep_lower_reuses_low_probe() {
        let mut interval = Interval::new([0.0, 1.0]);
        let old_low = interval.probe_low;
        let predicted = interval.next_probe_low();

        interval.keep_lower();

        assert_relative_eq!(interval.upper, INV_PHI);
        assert_relative_eq!(interval.probe_high, old_low, epsilon = 1e-12);
        assert_relative_eq!(interval.probe_low, predicted);
    }

    #[test]
    fn keep_upper_reuses_high_probe() {
        let mut interval = Interval::new([0.0, 1.0]);
        let old_high = interval.probe_high;
        let predicted = interval.next_probe_high();

        interval.keep_upper();

        assert_relative_eq!(interval.lower, 1.0 - INV_PHI);
        assert_relative_eq!(interval.probe_low, old_high, epsilon = 1e-12);
        assert_relative_eq!(interval.probe_high, predicted);
    }

    #[test]
    fn degenerate_interval_has_no_gap() {
        let interval = Interval::new([3.0, 3.0]);

        assert_relative_eq!(interval.probe_gap(), 0.0);
        assert_relative_eq!(interval.probe_low, 3.0);
    }
}
