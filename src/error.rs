use thiserror::Error;

/// Configuration errors. Raised when a mapper is built from a degenerate
/// range; the numeric operations themselves cannot fail.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error {
    /// A range was supplied with `high <= low`.
    #[error("degenerate range: high ({high}) must be greater than low ({low})")]
    DegenerateRange { low: i32, high: i32 },
}
