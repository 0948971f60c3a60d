use core::fmt;

/// Strand configuration errors
///
/// Color inputs never fail (they are normalized), so the only errors are
/// constraint violations caught while constructing a strand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrandError {
    /// Pixel count is zero
    EmptyStrand,
    /// Pixel count exceeds the frame capacity of the strand
    TooManyPixels { requested: usize, capacity: usize },
    /// Brightness range bounds or step are out of `0..=100`
    InvalidBrightnessRange,
}

impl fmt::Display for StrandError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyStrand => f.write_str("strand must have at least one pixel"),
            Self::TooManyPixels {
                requested,
                capacity,
            } => write!(
                f,
                "strand of {} pixels exceeds frame capacity of {}",
                requested, capacity
            ),
            Self::InvalidBrightnessRange => f.write_str("invalid brightness range"),
        }
    }
}

impl core::error::Error for StrandError {}
