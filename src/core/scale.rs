use crate::error::{SparkError, SparkResult};

/// Linear mapping from a domain interval to a range interval.
///
/// Bounds stay mutable after construction so one instance can be re-queried
/// and adjusted while a mapping pass is assembled. A degenerate domain
/// (`d0 == d1`) is legal and maps every input to the range start.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearScale {
    domain_start: f64,
    domain_end: f64,
    range_start: f64,
    range_end: f64,
    clamp: bool,
}

impl LinearScale {
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> SparkResult<Self> {
        validate_interval(domain, "domain")?;
        validate_interval(range, "range")?;

        Ok(Self {
            domain_start: domain.0,
            domain_end: domain.1,
            range_start: range.0,
            range_end: range.1,
            clamp: false,
        })
    }

    #[must_use]
    pub fn with_clamp(mut self, clamp: bool) -> Self {
        self.clamp = clamp;
        self
    }

    #[must_use]
    pub fn domain(self) -> (f64, f64) {
        (self.domain_start, self.domain_end)
    }

    #[must_use]
    pub fn range(self) -> (f64, f64) {
        (self.range_start, self.range_end)
    }

    #[must_use]
    pub fn is_clamped(self) -> bool {
        self.clamp
    }

    pub fn set_domain(&mut self, domain: (f64, f64)) -> SparkResult<()> {
        validate_interval(domain, "domain")?;
        self.domain_start = domain.0;
        self.domain_end = domain.1;
        Ok(())
    }

    pub fn set_range(&mut self, range: (f64, f64)) -> SparkResult<()> {
        validate_interval(range, "range")?;
        self.range_start = range.0;
        self.range_end = range.1;
        Ok(())
    }

    /// Maps a domain value into the range.
    ///
    /// With clamping enabled the input is first clipped into the domain,
    /// tolerating either domain order. `apply(d0) == r0` and
    /// `apply(d1) == r1` hold exactly for non-degenerate domains.
    #[must_use]
    pub fn apply(self, value: f64) -> f64 {
        if self.domain_start == self.domain_end {
            return self.range_start;
        }

        let value = if self.clamp {
            let lower = self.domain_start.min(self.domain_end);
            let upper = self.domain_start.max(self.domain_end);
            value.clamp(lower, upper)
        } else {
            value
        };

        let span = self.domain_end - self.domain_start;
        let normalized = (value - self.domain_start) / span;
        // Two-sided interpolation keeps apply(d0) == r0 and apply(d1) == r1
        // exact for every bound pair.
        self.range_start * (1.0 - normalized) + self.range_end * normalized
    }
}

fn validate_interval(interval: (f64, f64), name: &str) -> SparkResult<()> {
    if !interval.0.is_finite() || !interval.1.is_finite() {
        return Err(SparkError::InvalidData(format!(
            "scale {name} bounds must be finite"
        )));
    }
    Ok(())
}
