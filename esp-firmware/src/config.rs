// Projekt-Konfiguration: Konstanten und Hardware-Zuordnungen
#![allow(dead_code)]

use esp_core::{IndicatorPalette, PinConfig};
use rgb::RGB8;

// ============================================================================
// GPIO Konfiguration
// ============================================================================

/// GPIO-Pin für den Taster (Eingang, Pull-Up, schaltet gegen GND)
pub const BUTTON_GPIO_PIN: u8 = 5;

/// GPIO-Pin für die LED (Ausgang, active-low verdrahtet)
pub const LED_GPIO_PIN: u8 = 6;

/// Entprell-Fenster für den Taster in Millisekunden
pub const DEBOUNCE_MS: u64 = 50;

/// Gesammelte Pin-Konfiguration für den Pin Controller
pub const PIN_CONFIG: PinConfig = PinConfig {
    button_pin: BUTTON_GPIO_PIN,
    led_pin: LED_GPIO_PIN,
    debounce_ms: DEBOUNCE_MS,
};

// ============================================================================
// Status-Anzeige Konfiguration
// ============================================================================

/// GPIO-Pin für die Status-LED (WS2812/Neopixel)
pub const INDICATOR_GPIO_PIN: u8 = 8;

/// RMT Taktfrequenz in MHz
/// 80 MHz ist optimal für WS2812 LED-Timing
pub const RMT_CLOCK_MHZ: u32 = 80;

/// Helligkeits-Level für die Status-LED (0-255)
/// Wert ist gedimmt für Augenschonung
pub const INDICATOR_BRIGHTNESS: u8 = 16;

/// Farb-Palette der Status-Anzeige
///
/// Rot = LED an (Hervorhebung), gedimmtes Grau = LED aus (neutral).
pub const INDICATOR_PALETTE: IndicatorPalette = IndicatorPalette {
    highlight: RGB8 {
        r: INDICATOR_BRIGHTNESS,
        g: 0,
        b: 0,
    },
    neutral: RGB8 { r: 2, g: 2, b: 2 },
};
