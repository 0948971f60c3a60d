#![no_std]

pub mod color;
pub mod error;
pub mod range;
pub mod sink;
pub mod state;
pub mod strand;

pub use error::StrandError;
pub use range::BrightnessRange;
pub use sink::{SinkConfig, SmartLedsSink, Wiring};
pub use state::{LightChange, LightState};
pub use strand::{
    Gradient, GradientConfig, GradientDimming, GradientStrand, RgbwFull, RgbwFullStrand,
    RgbwTemperature, RgbwTemperatureStrand, Shader, StrandConfig, StrandController, StrandMode,
    UniformRgb, UniformRgbStrand,
};

pub use color::{DotColor, PixelColor, Rgb, Rgbw};

/// Abstract pixel transmission trait
///
/// Implement this trait to drive a strand on a specific platform.
/// Strand controllers are generic over this trait.
pub trait PixelSink<C> {
    /// Transmit colors to the strand, one per pixel in pixel order
    fn set(&mut self, colors: &[C]);
}

impl<C, S: PixelSink<C> + ?Sized> PixelSink<C> for &mut S {
    fn set(&mut self, colors: &[C]) {
        (**self).set(colors);
    }
}
