/// Coldest supported color temperature (mired)
pub const MIRED_MIN: f32 = 140.0;
/// Warmest supported color temperature (mired)
pub const MIRED_MAX: f32 = 500.0;

/// Map a color temperature to a simulated hue
///
/// Strands without a tunable white emitter fake the temperature with a
/// splash of color between blue (coldest, 240°) and green (warmest, 120°).
/// The temperature is clamped into `[MIRED_MIN, MIRED_MAX]`.
#[inline]
pub fn mired_to_hue(mired: f32) -> f32 {
    let mired = if mired.is_nan() {
        MIRED_MIN
    } else {
        mired.clamp(MIRED_MIN, MIRED_MAX)
    };
    240.0 - (mired - MIRED_MIN) / 3.0
}
