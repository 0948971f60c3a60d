/// Wrap a hue in degrees into `[0, 360)`
///
/// Non-finite hues read as 0.
pub fn wrap_hue(hue: f32) -> f32 {
    if !hue.is_finite() {
        return 0.0;
    }
    let mut wrapped = libm::fmodf(hue, 360.0);
    if wrapped < 0.0 {
        wrapped += 360.0;
    }
    // tiny negative inputs round up to exactly 360 after the shift
    if wrapped >= 360.0 { 0.0 } else { wrapped }
}

/// Clamp a fraction into `[0, 1]`, reading NaN as 0
#[inline]
pub fn unit(value: f32) -> f32 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, 1.0)
    }
}

/// Convert a percentage (0-100) into a clamped fraction
#[inline]
pub fn percent(value: f32) -> f32 {
    unit(value / 100.0)
}

/// Scale a fraction to a rounded 8-bit channel
#[inline]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn unit_to_u8(value: f32) -> u8 {
    libm::roundf(unit(value) * 255.0) as u8
}

/// Round an already scaled channel value into `[0, 255]`
#[inline]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub(crate) fn channel(value: f32) -> u8 {
    if value.is_nan() {
        return 0;
    }
    libm::roundf(value.clamp(0.0, 255.0)) as u8
}

/// Map a brightness fraction to a two-wire drive level (0-31)
#[inline]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn drive_level(value: f32) -> u8 {
    libm::roundf(unit(value) * f32::from(super::DRIVE_MAX)) as u8
}
