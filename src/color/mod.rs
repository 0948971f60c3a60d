//! Color types and perceptual color-space conversions
//!
//! All conversions are pure and allocation-free. Inputs are normalized
//! (hue wrapped, fractions clamped) instead of rejected, so they never fail.

mod hsi;
mod hsv;
mod temperature;
mod utils;

use smart_leds::{RGB8, RGBW, White};

pub use hsi::hsi_to_rgbw;
pub use hsv::{hsv_to_rgb, hsv_to_rgbw};
pub use temperature::{MIRED_MAX, MIRED_MIN, mired_to_hue};
pub use utils::{drive_level, percent, unit, unit_to_u8, wrap_hue};

pub type Rgb = RGB8;
pub type Rgbw = RGBW<u8>;

/// Maximum drive (global current limit) level of a two-wire pixel
pub const DRIVE_MAX: u8 = 31;

/// A hardware-ready pixel value
pub trait PixelColor: Copy + core::fmt::Debug {
    /// Fully dark pixel
    const BLACK: Self;
}

impl PixelColor for Rgb {
    const BLACK: Self = Rgb { r: 0, g: 0, b: 0 };
}

impl PixelColor for Rgbw {
    const BLACK: Self = rgbw(0, 0, 0, 0);
}

/// Two-wire (APA102 / SK9822 style) pixel value
///
/// Besides the color channels these pixels carry a 5-bit drive level that
/// limits the LED current independently of the channel magnitudes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DotColor {
    pub rgb: Rgb,
    /// Drive level (0-31)
    pub drive: u8,
}

impl DotColor {
    /// Create a new two-wire color, saturating `drive` at [`DRIVE_MAX`]
    pub const fn new(rgb: Rgb, drive: u8) -> Self {
        let drive = if drive > DRIVE_MAX { DRIVE_MAX } else { drive };
        Self { rgb, drive }
    }
}

/// Fold the drive level into the channels for drivers without one
///
/// Drivers that only take RGB send every pixel at full drive, so the
/// channels are scaled by `drive / 31` to keep the same brightness.
impl From<DotColor> for Rgb {
    #[allow(clippy::cast_possible_truncation)]
    fn from(color: DotColor) -> Self {
        let drive = u16::from(color.drive);
        let max = u16::from(DRIVE_MAX);
        let scale = |value: u8| ((u16::from(value) * drive + max / 2) / max) as u8;
        Rgb {
            r: scale(color.rgb.r),
            g: scale(color.rgb.g),
            b: scale(color.rgb.b),
        }
    }
}

impl PixelColor for DotColor {
    const BLACK: Self = Self {
        rgb: Rgb { r: 0, g: 0, b: 0 },
        drive: 0,
    };
}

/// Build an RGBW color from its four channels
pub const fn rgbw(r: u8, g: u8, b: u8, w: u8) -> Rgbw {
    Rgbw {
        r,
        g,
        b,
        a: White(w),
    }
}
