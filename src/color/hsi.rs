//! Sector-based HSI to RGBW conversion
//!
//! The hue circle is split into three 120° sectors. Inside a sector only two
//! color emitters are lit and the achromatic part of the color goes to the
//! white emitter, so `r + g + b` scales with `saturation * intensity` while
//! `w` carries the complement.

use core::f32::consts::{FRAC_PI_3, PI};

use super::utils::{channel, unit, wrap_hue};
use super::{Rgbw, rgbw};

const SECTOR_DEGREES: f32 = 120.0;
const DEG_TO_RAD: f32 = PI / 180.0;

/// Channel pair `(a, b)` lit inside a sector at local angle `theta` (degrees)
fn sector_channels(theta: f32, scale: f32) -> (f32, f32) {
    let theta = theta * DEG_TO_RAD;
    // cos(60° - θ) stays >= 0.5 for θ in [0°, 120°)
    let ratio = libm::cosf(theta) / libm::cosf(FRAC_PI_3 - theta);
    (scale * (1.0 + ratio), scale * (1.0 + (1.0 - ratio)))
}

/// Convert HSI to RGBW
///
/// # Arguments
/// * `hue` - Hue in degrees, wrapped into `[0, 360)`
/// * `saturation` - Saturation fraction, clamped into `[0, 1]`
/// * `intensity` - Intensity fraction, clamped into `[0, 1]`
///
/// Sectors are half-open: a hue exactly on a boundary belongs to the sector
/// starting there.
pub fn hsi_to_rgbw(hue: f32, saturation: f32, intensity: f32) -> Rgbw {
    let hue = wrap_hue(hue);
    let saturation = unit(saturation);
    let intensity = unit(intensity);

    let scale = saturation * 255.0 * intensity / 3.0;
    let white = channel(255.0 * (1.0 - saturation) * intensity);

    if hue < SECTOR_DEGREES {
        let (a, b) = sector_channels(hue, scale);
        rgbw(channel(a), channel(b), 0, white)
    } else if hue < SECTOR_DEGREES * 2.0 {
        let (a, b) = sector_channels(hue - SECTOR_DEGREES, scale);
        rgbw(0, channel(a), channel(b), white)
    } else {
        let (a, b) = sector_channels(hue - SECTOR_DEGREES * 2.0, scale);
        rgbw(channel(b), 0, channel(a), white)
    }
}
