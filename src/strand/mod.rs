//! Strand controllers
//!
//! A [`StrandController`] owns the light state of one physical strand and its
//! pixel sink. Every parameter change re-resolves a full frame through the
//! strand's [`Shader`] and hands it to the sink. The four supported strand
//! kinds differ only in their shader:
//! - [`UniformRgb`]: single-wire RGB, one HSV color on every pixel
//! - [`RgbwTemperature`]: single-wire RGBW, simulated color temperature
//! - [`RgbwFull`]: single-wire RGBW, full HSI control
//! - [`Gradient`]: two-wire RGB, static rainbow across the strand

mod gradient;
mod rgbw_full;
mod rgbw_temperature;
mod uniform_rgb;

use heapless::Vec;

#[cfg(feature = "esp32-log")]
use esp_println::println;

pub use gradient::{Gradient, GradientConfig, GradientDimming, GradientStrand, gradient_hue};
pub use rgbw_full::{RgbwFull, RgbwFullStrand};
pub use rgbw_temperature::{RgbwTemperature, RgbwTemperatureStrand};
pub use uniform_rgb::{UniformRgb, UniformRgbStrand};

use crate::PixelSink;
use crate::color::PixelColor;
use crate::error::StrandError;
use crate::range::BrightnessRange;
use crate::sink::{SinkConfig, Wiring};
use crate::state::{LightChange, LightState};

const MODE_NAME_UNIFORM_RGB: &str = "uniform_rgb";
const MODE_NAME_RGBW_TEMPERATURE: &str = "rgbw_temperature";
const MODE_NAME_RGBW_FULL: &str = "rgbw_full";
const MODE_NAME_GRADIENT_RGB: &str = "gradient_rgb";

/// Known strand modes
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StrandMode {
    UniformRgb,
    RgbwTemperature,
    RgbwFull,
    GradientRgb,
}

impl StrandMode {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::UniformRgb => MODE_NAME_UNIFORM_RGB,
            Self::RgbwTemperature => MODE_NAME_RGBW_TEMPERATURE,
            Self::RgbwFull => MODE_NAME_RGBW_FULL,
            Self::GradientRgb => MODE_NAME_GRADIENT_RGB,
        }
    }
}

/// Resolves perceptual state into pixel colors
pub trait Shader {
    /// Pixel color produced by this shader
    type Color: PixelColor;

    /// Mode reported for external observation
    const MODE: StrandMode;

    /// Frames pushed right after construction
    const INITIAL_UPDATES: usize = 1;

    /// Resolve colors for every pixel of `leds`
    ///
    /// Called without regard to power; the controller gates the result.
    fn render(&self, state: &LightState, leds: &mut [Self::Color]);
}

/// Configuration for a strand controller
#[derive(Debug, Clone, Copy)]
pub struct StrandConfig {
    /// Number of pixels on the strand
    pub pixel_count: usize,
    /// Range the brightness is snapped onto
    pub brightness_range: BrightnessRange,
    /// State restored at construction
    pub initial: LightState,
}

impl StrandConfig {
    /// Config with the default brightness range and initial state
    pub const fn new(pixel_count: usize) -> Self {
        Self {
            pixel_count,
            brightness_range: BrightnessRange::DEFAULT,
            initial: LightState::new(),
        }
    }

    #[must_use]
    pub const fn with_brightness_range(mut self, range: BrightnessRange) -> Self {
        self.brightness_range = range;
        self
    }

    #[must_use]
    pub const fn with_initial(mut self, initial: LightState) -> Self {
        self.initial = initial;
        self
    }
}

/// Strand controller - owns the state and the sink of one strand
///
/// `MAX_PIXELS` bounds the frame resolved on every update.
pub struct StrandController<E: Shader, S, const MAX_PIXELS: usize> {
    shader: E,
    sink: S,
    sink_config: SinkConfig,
    brightness_range: BrightnessRange,
    state: LightState,
}

impl<E, S, const MAX_PIXELS: usize> StrandController<E, S, MAX_PIXELS>
where
    E: Shader,
    S: PixelSink<E::Color>,
{
    /// Create a controller from its parts and push the initial frame(s)
    ///
    /// `open` receives the sink parameters unchanged and builds the sink.
    pub fn from_parts(
        shader: E,
        wiring: Wiring,
        config: &StrandConfig,
        open: impl FnOnce(&SinkConfig) -> S,
    ) -> Result<Self, StrandError> {
        let pixel_count = config.pixel_count;
        if pixel_count == 0 {
            return Err(StrandError::EmptyStrand);
        }
        if pixel_count > MAX_PIXELS {
            return Err(StrandError::TooManyPixels {
                requested: pixel_count,
                capacity: MAX_PIXELS,
            });
        }

        let sink_config = SinkConfig {
            wiring,
            pixel_count,
        };
        let mut state = config.initial;
        state.set_brightness(config.brightness_range.apply(state.brightness()));

        let mut strand = Self {
            shader,
            sink: open(&sink_config),
            sink_config,
            brightness_range: config.brightness_range,
            state,
        };
        for _ in 0..E::INITIAL_UPDATES {
            strand.update();
        }
        Ok(strand)
    }

    /// Resolve the full frame and hand it to the sink
    ///
    /// Identical state always yields an identical frame.
    pub fn update(&mut self) {
        let mut frame: Vec<E::Color, MAX_PIXELS> = Vec::new();
        let black = <E::Color as PixelColor>::BLACK;
        if frame.resize(self.sink_config.pixel_count, black).is_err() {
            return;
        }

        self.shader.render(&self.state, &mut frame);
        gate(self.state.power(), &mut frame);

        #[cfg(feature = "esp32-log")]
        println!(
            "[StrandController.update] {} power={} first={:?}",
            E::MODE.as_str(),
            self.state.power(),
            frame.first()
        );

        self.sink.set(&frame);
    }

    /// Apply a parameter change and update once
    pub fn apply(&mut self, change: &LightChange) {
        self.state.apply(change);
        if change.brightness.is_some() {
            self.snap_brightness();
        }
        self.update();
    }

    pub fn set_power(&mut self, power: bool) {
        self.state.set_power(power);
        self.update();
    }

    /// Set the hue in degrees
    pub fn set_hue(&mut self, hue: f32) {
        self.state.set_hue(hue);
        self.update();
    }

    /// Set the saturation in percent
    pub fn set_saturation(&mut self, saturation: f32) {
        self.state.set_saturation(saturation);
        self.update();
    }

    /// Set the brightness in percent, snapped onto the brightness range
    pub fn set_brightness(&mut self, brightness: f32) {
        self.state.set_brightness(brightness);
        self.snap_brightness();
        self.update();
    }

    /// Set the color temperature in mired
    pub fn set_color_temperature(&mut self, mired: f32) {
        self.state.set_color_temperature(mired);
        self.update();
    }

    fn snap_brightness(&mut self) {
        let snapped = self.brightness_range.apply(self.state.brightness());
        self.state.set_brightness(snapped);
    }
}

impl<E: Shader, S, const MAX_PIXELS: usize> StrandController<E, S, MAX_PIXELS> {
    pub const fn state(&self) -> &LightState {
        &self.state
    }

    pub const fn pixel_count(&self) -> usize {
        self.sink_config.pixel_count
    }

    pub const fn mode(&self) -> StrandMode {
        E::MODE
    }

    pub const fn shader(&self) -> &E {
        &self.shader
    }

    pub const fn brightness_range(&self) -> BrightnessRange {
        self.brightness_range
    }

    /// Parameters the sink was built from
    pub const fn sink_config(&self) -> &SinkConfig {
        &self.sink_config
    }

    pub const fn sink(&self) -> &S {
        &self.sink
    }

    pub fn into_sink(self) -> S {
        self.sink
    }
}

/// Force every pixel dark when the strand is powered off
fn gate<C: PixelColor>(power: bool, frame: &mut [C]) {
    if !power {
        frame.fill(C::BLACK);
    }
}
