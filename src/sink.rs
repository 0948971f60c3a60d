//! Pixel sink construction parameters and the `smart-leds` adapter

use smart_leds::SmartLedsWrite;

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::PixelSink;

/// Physical wiring of a strand
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Wiring {
    /// Clockless single-wire strand (WS2812, SK6812)
    SingleWire {
        pin: u8,
        /// Pixels carry a dedicated white emitter
        rgbw: bool,
    },
    /// Clocked two-wire strand (APA102, SK9822)
    TwoWire { data_pin: u8, clock_pin: u8 },
}

/// Parameters handed unchanged to the sink constructor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SinkConfig {
    pub wiring: Wiring,
    pub pixel_count: usize,
}

/// [`PixelSink`] over any `smart-leds` driver
///
/// Transmit errors belong to the driver; they are logged and dropped.
#[derive(Debug)]
pub struct SmartLedsSink<W> {
    driver: W,
}

impl<W> SmartLedsSink<W> {
    pub const fn new(driver: W) -> Self {
        Self { driver }
    }

    pub fn driver(&self) -> &W {
        &self.driver
    }

    pub fn into_inner(self) -> W {
        self.driver
    }
}

impl<W, C> PixelSink<C> for SmartLedsSink<W>
where
    W: SmartLedsWrite,
    C: Copy + Into<W::Color>,
{
    fn set(&mut self, colors: &[C]) {
        let result = self.driver.write(colors.iter().copied());
        #[cfg(feature = "esp32-log")]
        if result.is_err() {
            println!(
                "[SmartLedsSink.set] failed to write {} pixels",
                colors.len()
            );
        }
        #[cfg(not(feature = "esp32-log"))]
        let _ = result;
    }
}
