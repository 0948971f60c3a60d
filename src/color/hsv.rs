use super::utils::{unit, unit_to_u8, wrap_hue};
use super::{Rgb, Rgbw, rgbw};

/// Convert HSV to RGB
///
/// # Arguments
/// * `hue` - Hue in degrees, wrapped into `[0, 360)`
/// * `saturation` - Saturation fraction, clamped into `[0, 1]`
/// * `value` - Value fraction, clamped into `[0, 1]`
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn hsv_to_rgb(hue: f32, saturation: f32, value: f32) -> Rgb {
    let hue = wrap_hue(hue);
    let saturation = unit(saturation);
    let value = unit(value);

    let chroma = value * saturation;
    let sector = hue / 60.0;
    let secondary = chroma * (1.0 - libm::fabsf(libm::fmodf(sector, 2.0) - 1.0));
    let offset = value - chroma;

    let (r, g, b) = match sector as u8 {
        0 => (chroma, secondary, 0.0),
        1 => (secondary, chroma, 0.0),
        2 => (0.0, chroma, secondary),
        3 => (0.0, secondary, chroma),
        4 => (secondary, 0.0, chroma),
        _ => (chroma, 0.0, secondary),
    };

    Rgb {
        r: unit_to_u8(r + offset),
        g: unit_to_u8(g + offset),
        b: unit_to_u8(b + offset),
    }
}

/// Convert HSV to RGBW with an independent white boost
///
/// The color channels come from [`hsv_to_rgb`]; the white emitter is driven
/// by `white` (fraction, clamped into `[0, 1]`).
pub fn hsv_to_rgbw(hue: f32, saturation: f32, value: f32, white: f32) -> Rgbw {
    let color = hsv_to_rgb(hue, saturation, value);
    rgbw(color.r, color.g, color.b, unit_to_u8(white))
}
