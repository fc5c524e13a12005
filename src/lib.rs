#![cfg_attr(not(test), no_std)]

mod error;
mod fraction;
mod interpolate;
mod lane;
mod range;

pub use error::Error;
pub use fraction::{Fraction, FRACTION_BITS, FRACTION_MAX};
pub use interpolate::{interpolate, Interpolation};
pub use lane::Lane;
pub use range::{CalibratedRange, ExpectedRange};

/// Maps a raw sample from its calibrated range onto the expected range.
///
/// Composes [`Fraction::encode`] and [`interpolate`]: the sample's
/// position within `calibrated` is quantized to a fractional
/// coefficient, which then blends the bounds of `expected`.
///
/// # Examples
///
/// ```
/// use adc_blend::{map_value, CalibratedRange, ExpectedRange};
///
/// let calibrated = CalibratedRange::new(900, 2800).unwrap();
/// let expected = ExpectedRange::new(1000, 3000).unwrap();
///
/// let result = map_value(1500, calibrated, expected);
/// assert_eq!(result.raw, 1627);
/// assert_eq!(result.corrected, 1633);
/// ```
pub fn map_value(raw: i32, calibrated: CalibratedRange, expected: ExpectedRange) -> Interpolation {
    interpolate(Fraction::encode(raw, calibrated), expected)
}

/// Maps raw samples from a calibrated range onto an expected range.
///
/// Holds the two ranges for the lifetime of the configuration, so the
/// sampling path only supplies the raw value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct BlendInterpolator {
    calibrated: CalibratedRange,
    expected: ExpectedRange,
}

impl BlendInterpolator {
    /// Returns an interpolator mapping `calibrated` onto `expected`.
    ///
    /// # Examples
    ///
    /// ```
    /// use adc_blend::{BlendInterpolator, CalibratedRange, ExpectedRange};
    ///
    /// let interpolator = BlendInterpolator::new(
    ///     CalibratedRange::new(900, 2800).unwrap(),
    ///     ExpectedRange::new(1000, 3000).unwrap(),
    /// );
    ///
    /// assert_eq!(interpolator.map(1500).corrected, 1633);
    /// ```
    pub const fn new(calibrated: CalibratedRange, expected: ExpectedRange) -> Self {
        Self {
            calibrated,
            expected,
        }
    }

    /// Maps a raw sample onto the expected range.
    ///
    /// Samples outside the calibrated range clamp to the nearest bound.
    pub fn map(&self, raw: i32) -> Interpolation {
        map_value(raw, self.calibrated, self.expected)
    }

    /// Returns the smallest value that [`map`](BlendInterpolator::map)
    /// can produce in [`Interpolation::raw`].
    pub const fn min_value(&self) -> i32 {
        self.expected.low()
    }

    /// Returns the largest value that [`map`](BlendInterpolator::map)
    /// can produce in [`Interpolation::raw`].
    pub const fn max_value(&self) -> i32 {
        self.expected.high()
    }
}
