//! Perceptual light state and parameter change notifications

use crate::color::{MIRED_MAX, MIRED_MIN, wrap_hue};

/// Perceptual parameters of a strand
///
/// Values are normalized when stored: hue is wrapped into `[0, 360)`,
/// saturation and brightness are clamped into `[0, 100]` and the color
/// temperature into `[140, 500]` mired.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LightState {
    power: bool,
    hue: f32,
    saturation: f32,
    brightness: f32,
    color_temperature: f32,
}

impl Default for LightState {
    fn default() -> Self {
        Self::new()
    }
}

impl LightState {
    /// Power off, hue 0°, saturation 0%, brightness 100%, coldest temperature
    pub const fn new() -> Self {
        Self {
            power: false,
            hue: 0.0,
            saturation: 0.0,
            brightness: 100.0,
            color_temperature: MIRED_MIN,
        }
    }

    #[must_use]
    pub fn with_power(mut self, power: bool) -> Self {
        self.set_power(power);
        self
    }

    #[must_use]
    pub fn with_hue(mut self, hue: f32) -> Self {
        self.set_hue(hue);
        self
    }

    #[must_use]
    pub fn with_saturation(mut self, saturation: f32) -> Self {
        self.set_saturation(saturation);
        self
    }

    #[must_use]
    pub fn with_brightness(mut self, brightness: f32) -> Self {
        self.set_brightness(brightness);
        self
    }

    #[must_use]
    pub fn with_color_temperature(mut self, mired: f32) -> Self {
        self.set_color_temperature(mired);
        self
    }

    pub const fn power(&self) -> bool {
        self.power
    }

    /// Hue in degrees
    pub const fn hue(&self) -> f32 {
        self.hue
    }

    /// Saturation in percent
    pub const fn saturation(&self) -> f32 {
        self.saturation
    }

    /// Brightness in percent
    pub const fn brightness(&self) -> f32 {
        self.brightness
    }

    /// Color temperature in mired
    pub const fn color_temperature(&self) -> f32 {
        self.color_temperature
    }

    pub fn set_power(&mut self, power: bool) {
        self.power = power;
    }

    pub fn set_hue(&mut self, hue: f32) {
        self.hue = wrap_hue(hue);
    }

    pub fn set_saturation(&mut self, saturation: f32) {
        self.saturation = clamp_or(saturation, 0.0, 100.0, 0.0);
    }

    pub fn set_brightness(&mut self, brightness: f32) {
        self.brightness = clamp_or(brightness, 0.0, 100.0, 0.0);
    }

    pub fn set_color_temperature(&mut self, mired: f32) {
        self.color_temperature = clamp_or(mired, MIRED_MIN, MIRED_MAX, MIRED_MIN);
    }

    /// Store every present field of a change
    pub fn apply(&mut self, change: &LightChange) {
        if let Some(power) = change.power {
            self.set_power(power);
        }
        if let Some(hue) = change.hue {
            self.set_hue(hue);
        }
        if let Some(saturation) = change.saturation {
            self.set_saturation(saturation);
        }
        if let Some(brightness) = change.brightness {
            self.set_brightness(brightness);
        }
        if let Some(mired) = change.color_temperature {
            self.set_color_temperature(mired);
        }
    }
}

fn clamp_or(value: f32, min: f32, max: f32, fallback: f32) -> f32 {
    if value.is_nan() {
        fallback
    } else {
        value.clamp(min, max)
    }
}

/// Parameter change delivered by the host framework
///
/// Only present fields are changed. Fields a strand does not use (e.g. hue
/// on a temperature strand) are stored but do not affect its output.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct LightChange {
    pub power: Option<bool>,
    /// Hue in degrees (0-360)
    pub hue: Option<f32>,
    /// Saturation in percent (0-100)
    pub saturation: Option<f32>,
    /// Brightness in percent (0-100)
    pub brightness: Option<f32>,
    /// Color temperature in mired (140-500)
    pub color_temperature: Option<f32>,
}
