//! Two-wire RGB strand with a static rainbow
//!
//! Pixel `k` of an `N` pixel strand gets hue `base + k * 360 / N`, so the
//! strand spans the full hue circle exactly once, anchored at the base hue.

use super::{Shader, StrandConfig, StrandController, StrandMode};
use crate::PixelSink;
use crate::color::{DRIVE_MAX, DotColor, drive_level, hsv_to_rgb, percent, wrap_hue};
use crate::error::StrandError;
use crate::sink::{SinkConfig, Wiring};
use crate::state::LightState;

/// How brightness is applied to two-wire pixels
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum GradientDimming {
    /// Color channels stay at full value, brightness sets the drive level
    #[default]
    CurrentLimit,
    /// Brightness scales the color channels, drive stays at maximum
    Pwm,
}

/// Rainbow gradient shader
#[derive(Debug, Clone, Copy, Default)]
pub struct Gradient {
    dimming: GradientDimming,
}

impl Gradient {
    pub const fn new(dimming: GradientDimming) -> Self {
        Self { dimming }
    }

    pub const fn dimming(&self) -> GradientDimming {
        self.dimming
    }
}

/// Hue of pixel `index` on a strand of `pixel_count` pixels
#[allow(clippy::cast_precision_loss)]
pub fn gradient_hue(base_hue: f32, index: usize, pixel_count: usize) -> f32 {
    let hue_step = 360.0 / pixel_count.max(1) as f32;
    wrap_hue(base_hue + index as f32 * hue_step)
}

impl Shader for Gradient {
    type Color = DotColor;
    const MODE: StrandMode = StrandMode::GradientRgb;
    // two-wire strands need a refresh right after power-up
    const INITIAL_UPDATES: usize = 2;

    fn render(&self, state: &LightState, leds: &mut [DotColor]) {
        let pixel_count = leds.len();
        let saturation = percent(state.saturation());
        let brightness = percent(state.brightness());

        for (index, led) in leds.iter_mut().enumerate() {
            let hue = gradient_hue(state.hue(), index, pixel_count);
            *led = match self.dimming {
                GradientDimming::Pwm => {
                    DotColor::new(hsv_to_rgb(hue, saturation, brightness), DRIVE_MAX)
                }
                GradientDimming::CurrentLimit => {
                    DotColor::new(hsv_to_rgb(hue, saturation, 1.0), drive_level(brightness))
                }
            };
        }
    }
}

/// Configuration for a gradient strand
#[derive(Debug, Clone, Copy)]
pub struct GradientConfig {
    pub strand: StrandConfig,
    pub dimming: GradientDimming,
}

impl GradientConfig {
    pub const fn new(pixel_count: usize) -> Self {
        Self {
            strand: StrandConfig::new(pixel_count),
            dimming: GradientDimming::CurrentLimit,
        }
    }

    #[must_use]
    pub const fn with_dimming(mut self, dimming: GradientDimming) -> Self {
        self.dimming = dimming;
        self
    }
}

pub type GradientStrand<S, const MAX_PIXELS: usize> = StrandController<Gradient, S, MAX_PIXELS>;

impl<S: PixelSink<DotColor>, const MAX_PIXELS: usize> StrandController<Gradient, S, MAX_PIXELS> {
    /// Create a two-wire gradient strand on `data_pin` / `clock_pin`
    pub fn new(
        data_pin: u8,
        clock_pin: u8,
        config: &GradientConfig,
        open: impl FnOnce(&SinkConfig) -> S,
    ) -> Result<Self, StrandError> {
        Self::from_parts(
            Gradient::new(config.dimming),
            Wiring::TwoWire {
                data_pin,
                clock_pin,
            },
            &config.strand,
            open,
        )
    }
}
