//! Single-wire RGBW strand with simulated color temperature
//!
//! The white emitter carries the brightness while a fully saturated hue
//! between blue and green adds the cold/warm tint.

use super::{Shader, StrandConfig, StrandController, StrandMode};
use crate::PixelSink;
use crate::color::{Rgbw, hsv_to_rgbw, mired_to_hue, percent};
use crate::error::StrandError;
use crate::sink::{SinkConfig, Wiring};
use crate::state::LightState;

/// Temperature shader
#[derive(Debug, Clone, Copy, Default)]
pub struct RgbwTemperature;

impl Shader for RgbwTemperature {
    type Color = Rgbw;
    const MODE: StrandMode = StrandMode::RgbwTemperature;

    fn render(&self, state: &LightState, leds: &mut [Rgbw]) {
        let hue = mired_to_hue(state.color_temperature());
        // brightness drives both the color value and the white boost
        let brightness = percent(state.brightness());
        leds.fill(hsv_to_rgbw(hue, 1.0, brightness, brightness));
    }
}

pub type RgbwTemperatureStrand<S, const MAX_PIXELS: usize> =
    StrandController<RgbwTemperature, S, MAX_PIXELS>;

impl<S: PixelSink<Rgbw>, const MAX_PIXELS: usize>
    StrandController<RgbwTemperature, S, MAX_PIXELS>
{
    /// Create a single-wire RGBW temperature strand on `pin`
    pub fn new(
        pin: u8,
        config: &StrandConfig,
        open: impl FnOnce(&SinkConfig) -> S,
    ) -> Result<Self, StrandError> {
        Self::from_parts(
            RgbwTemperature,
            Wiring::SingleWire { pin, rgbw: true },
            config,
            open,
        )
    }
}
