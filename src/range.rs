use crate::error::Error;

/// The empirically measured bounds of the raw input signal.
///
/// Established by an external calibration procedure and immutable
/// afterwards. Construction rejects degenerate bounds, so every range
/// held by the crate satisfies `high > low`.
///
/// # Examples
///
/// ```
/// use adc_blend::CalibratedRange;
///
/// let calibrated = CalibratedRange::new(900, 2800).unwrap();
/// assert_eq!(calibrated.span(), 1900);
///
/// assert!(CalibratedRange::new(50, 50).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct CalibratedRange {
    low: i32,
    high: i32,
}

impl CalibratedRange {
    /// Returns a range with the given bounds, or
    /// [`Error::DegenerateRange`] if `high <= low`.
    pub const fn new(low: i32, high: i32) -> Result<Self, Error> {
        if high <= low {
            return Err(Error::DegenerateRange { low, high });
        }

        Ok(Self { low, high })
    }

    pub const fn low(&self) -> i32 {
        self.low
    }

    pub const fn high(&self) -> i32 {
        self.high
    }

    /// Width of the range. Widened to `i64` so arithmetic on extreme
    /// bounds cannot overflow.
    pub const fn span(&self) -> i64 {
        self.high as i64 - self.low as i64
    }
}

/// The target bounds the mapped output must occupy.
///
/// Typically a compile-time constant; both constructors are `const fn`
/// so a range can live in a `static`.
///
/// # Examples
///
/// ```
/// use adc_blend::ExpectedRange;
///
/// let expected = ExpectedRange::new(1000, 3000).unwrap();
/// assert_eq!(expected.low(), 1000);
/// assert_eq!(expected.high(), 3000);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ExpectedRange {
    low: i32,
    high: i32,
}

impl ExpectedRange {
    /// Returns a range with the given bounds, or
    /// [`Error::DegenerateRange`] if `high <= low`.
    pub const fn new(low: i32, high: i32) -> Result<Self, Error> {
        if high <= low {
            return Err(Error::DegenerateRange { low, high });
        }

        Ok(Self { low, high })
    }

    pub const fn low(&self) -> i32 {
        self.low
    }

    pub const fn high(&self) -> i32 {
        self.high
    }

    /// Width of the range. Widened to `i64` so arithmetic on extreme
    /// bounds cannot overflow.
    pub const fn span(&self) -> i64 {
        self.high as i64 - self.low as i64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accessors() {
        let calibrated = CalibratedRange::new(900, 2800).unwrap();
        assert_eq!(calibrated.low(), 900);
        assert_eq!(calibrated.high(), 2800);
        assert_eq!(calibrated.span(), 1900);
    }

    #[test]
    fn rejects_empty_range() {
        assert_eq!(
            CalibratedRange::new(50, 50),
            Err(Error::DegenerateRange { low: 50, high: 50 })
        );
        assert_eq!(
            ExpectedRange::new(100, 100),
            Err(Error::DegenerateRange { low: 100, high: 100 })
        );
    }

    #[test]
    fn rejects_inverted_range() {
        assert!(CalibratedRange::new(2800, 900).is_err());
        assert!(ExpectedRange::new(3000, 1000).is_err());
    }

    #[test]
    fn negative_bounds() {
        let range = ExpectedRange::new(-1000, 1000).unwrap();
        assert_eq!(range.span(), 2000);
    }

    #[test]
    fn extreme_bounds_do_not_overflow_span() {
        let range = CalibratedRange::new(i32::MIN, i32::MAX).unwrap();
        assert_eq!(range.span(), u32::MAX as i64);
    }
}
