use super::{Shader, StrandConfig, StrandController, StrandMode};
use crate::PixelSink;
use crate::color::{Rgbw, hsi_to_rgbw, percent};
use crate::error::StrandError;
use crate::sink::{SinkConfig, Wiring};
use crate::state::LightState;

/// Full HSI shader for RGBW pixels
#[derive(Debug, Clone, Copy, Default)]
pub struct RgbwFull;

impl Shader for RgbwFull {
    type Color = Rgbw;
    const MODE: StrandMode = StrandMode::RgbwFull;

    fn render(&self, state: &LightState, leds: &mut [Rgbw]) {
        let color = hsi_to_rgbw(
            state.hue(),
            percent(state.saturation()),
            percent(state.brightness()),
        );
        leds.fill(color);
    }
}

pub type RgbwFullStrand<S, const MAX_PIXELS: usize> = StrandController<RgbwFull, S, MAX_PIXELS>;

impl<S: PixelSink<Rgbw>, const MAX_PIXELS: usize> StrandController<RgbwFull, S, MAX_PIXELS> {
    /// Create a single-wire RGBW strand with full color control on `pin`
    pub fn new(
        pin: u8,
        config: &StrandConfig,
        open: impl FnOnce(&SinkConfig) -> S,
    ) -> Result<Self, StrandError> {
        Self::from_parts(
            RgbwFull,
            Wiring::SingleWire { pin, rgbw: true },
            config,
            open,
        )
    }
}
