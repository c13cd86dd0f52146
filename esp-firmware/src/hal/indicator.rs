// Status-Anzeige über das RMT Peripheral (WS2812/Neopixel)
//
// Die Onboard-SmartLED übernimmt die Rolle der farbigen
// Status-Anzeige: rot = LED an, gedimmtes Grau = LED aus.

use esp_hal::Blocking;
use esp_hal::rmt::Rmt;
use esp_hal::time::Rate;
use esp_hal_smartled::SmartLedsAdapter;
use rgb::RGB8;
use smart_leds_trait::SmartLedsWrite;

use esp_core::{IndicatorWriter, LedError};

// Buffer-Größe für 1 LED (3 Farben * 8 Bits + 1 Reset)
pub const INDICATOR_BUFFER_SIZE: usize = 25;

/// Status-Anzeige auf der Onboard-SmartLED
///
/// Nutzt das ESP32 RMT Peripheral um die WS2812 anzusteuern.
///
/// Hinweis: Der Buffer muss 'static sein, daher wird er im Task erstellt
/// und als Parameter übergeben statt im Constructor allokiert.
pub struct RmtIndicator<'a> {
    led: SmartLedsAdapter<'a, INDICATOR_BUFFER_SIZE>,
}

impl<'a> RmtIndicator<'a> {
    /// Erstellt einen neuen RmtIndicator
    ///
    /// # Parameter
    /// - `gpio8`: GPIO8 Peripheral für die LED-Datenleitung
    /// - `rmt_peripheral`: RMT Peripheral
    /// - `rmt_clock_mhz`: RMT Clock Frequenz in MHz (z.B. 80)
    /// - `buffer`: Buffer für LED-Daten (erstellt mit smart_led_buffer!(1) Macro)
    pub fn new(
        gpio8: esp_hal::peripherals::GPIO8<'a>,
        rmt_peripheral: esp_hal::peripherals::RMT<'a>,
        rmt_clock_mhz: u32,
        buffer: &'a mut [esp_hal::rmt::PulseCode; INDICATOR_BUFFER_SIZE],
    ) -> Self {
        // RMT initialisieren
        let rmt: Rmt<'a, Blocking> =
            Rmt::new(rmt_peripheral, Rate::from_mhz(rmt_clock_mhz)).unwrap();

        // SmartLED Adapter erstellen
        let led = SmartLedsAdapter::new(rmt.channel0, gpio8, buffer);

        Self { led }
    }
}

impl<'a> IndicatorWriter for RmtIndicator<'a> {
    fn write(&mut self, color: RGB8) -> Result<(), LedError> {
        self.led
            .write([color].into_iter())
            .map_err(|_| LedError::WriteFailed)
    }
}
