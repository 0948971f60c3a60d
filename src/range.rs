use crate::error::StrandError;

const DEFAULT_MIN: f32 = 5.0;
const DEFAULT_MAX: f32 = 100.0;
const DEFAULT_STEP: f32 = 1.0;

/// Allowed brightness range (percent) with a step size
///
/// The host framework reports brightness within this range; the strand
/// snaps every incoming value onto it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BrightnessRange {
    min: f32,
    max: f32,
    step: f32,
}

impl Default for BrightnessRange {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl BrightnessRange {
    /// 5% to 100% in steps of 1%
    pub const DEFAULT: Self = Self {
        min: DEFAULT_MIN,
        max: DEFAULT_MAX,
        step: DEFAULT_STEP,
    };

    /// Full 0% to 100% range in steps of 1%
    pub const FULL: Self = Self {
        min: 0.0,
        max: DEFAULT_MAX,
        step: DEFAULT_STEP,
    };

    /// Create a new brightness range
    ///
    /// Requires `0 <= min <= max <= 100` and a step in `(0, 100]`.
    pub fn new(min: f32, max: f32, step: f32) -> Result<Self, StrandError> {
        let bounds_valid = (0.0..=100.0).contains(&min) && (min..=100.0).contains(&max);
        let step_valid = step > 0.0 && step <= 100.0;
        if !bounds_valid || !step_valid {
            return Err(StrandError::InvalidBrightnessRange);
        }
        Ok(Self { min, max, step })
    }

    pub const fn min(self) -> f32 {
        self.min
    }

    pub const fn max(self) -> f32 {
        self.max
    }

    pub const fn step(self) -> f32 {
        self.step
    }

    /// Clamp a brightness into the range and snap it to the nearest step
    ///
    /// Steps are counted from `min`. NaN reads as `min`.
    pub fn apply(self, brightness: f32) -> f32 {
        if brightness.is_nan() {
            return self.min;
        }
        let clamped = brightness.clamp(self.min, self.max);
        let steps = libm::roundf((clamped - self.min) / self.step);
        (self.min + steps * self.step).min(self.max)
    }
}
