//! Single-wire RGB strand with one HSV color on every pixel

use super::{Shader, StrandConfig, StrandController, StrandMode};
use crate::PixelSink;
use crate::color::{Rgb, hsv_to_rgb, percent};
use crate::error::StrandError;
use crate::sink::{SinkConfig, Wiring};
use crate::state::LightState;

/// Uniform HSV shader
#[derive(Debug, Clone, Copy, Default)]
pub struct UniformRgb;

impl Shader for UniformRgb {
    type Color = Rgb;
    const MODE: StrandMode = StrandMode::UniformRgb;

    fn render(&self, state: &LightState, leds: &mut [Rgb]) {
        let color = hsv_to_rgb(
            state.hue(),
            percent(state.saturation()),
            percent(state.brightness()),
        );
        leds.fill(color);
    }
}

pub type UniformRgbStrand<S, const MAX_PIXELS: usize> = StrandController<UniformRgb, S, MAX_PIXELS>;

impl<S: PixelSink<Rgb>, const MAX_PIXELS: usize> StrandController<UniformRgb, S, MAX_PIXELS> {
    /// Create a single-wire RGB strand on `pin`
    pub fn new(
        pin: u8,
        config: &StrandConfig,
        open: impl FnOnce(&SinkConfig) -> S,
    ) -> Result<Self, StrandError> {
        Self::from_parts(
            UniformRgb,
            Wiring::SingleWire { pin, rgbw: false },
            config,
            open,
        )
    }
}
