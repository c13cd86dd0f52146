//! Core Types für die Taster/LED-Steuerung
//!
//! Datenstrukturen ohne Hardware-Dependencies

use rgb::RGB8;

/// Logischer Pegel einer digitalen Leitung
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PinLevel {
    Low,
    High,
}

/// Entprellte Flankenrichtung am Taster-Pin
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Edge {
    /// Pegel Low → High (Taster losgelassen bei Pull-Up-Beschaltung)
    Rising,
    /// Pegel High → Low (Taster gedrückt bei Pull-Up-Beschaltung)
    Falling,
}

/// Treiber-Modus eines GPIO-Pins
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DriveMode {
    Input,
    InputPullUp,
    Output,
}

/// Logischer LED-Zustand
///
/// Die LED ist active-low verdrahtet: `On` entspricht Pegel `Low`,
/// `Off` entspricht Pegel `High`. Startzustand ist `Off`, der
/// Ausgangs-Pin wird also vor dem ersten Tastendruck auf High gelegt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LedState {
    #[default]
    Off,
    On,
}

impl LedState {
    /// Gibt den umgeschalteten Zustand zurück
    pub fn toggled(self) -> Self {
        match self {
            LedState::Off => LedState::On,
            LedState::On => LedState::Off,
        }
    }

    /// Pegel für den Ausgangs-Pin (active-low Verdrahtung)
    pub fn level(self) -> PinLevel {
        match self {
            LedState::Off => PinLevel::High,
            LedState::On => PinLevel::Low,
        }
    }

    pub fn is_on(self) -> bool {
        matches!(self, LedState::On)
    }
}

/// Pin-Zuordnung und Entprell-Fenster
///
/// Wird einmalig bei der Initialisierung übergeben und ist danach
/// nicht mehr veränderbar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PinConfig {
    /// Numerische Pin-Nummer des Taster-Eingangs
    pub button_pin: u8,
    /// Numerische Pin-Nummer des LED-Ausgangs
    pub led_pin: u8,
    /// Entprell-Fenster in Millisekunden
    pub debounce_ms: u64,
}

/// Darstellungs-Stil der Status-Anzeige
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum IndicatorStyle {
    /// LED ist an: Anzeige hervorheben
    Highlight,
    /// LED ist aus: neutrale Anzeige
    Neutral,
}

/// Farb-Palette für die Status-Anzeige
///
/// Konkrete Farbwerte legt die Firmware fest (siehe config.rs dort).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndicatorPalette {
    pub highlight: RGB8,
    pub neutral: RGB8,
}

impl IndicatorPalette {
    /// Löst einen Stil in die konkrete Farbe auf
    pub fn color_for(&self, style: IndicatorStyle) -> RGB8 {
        match style {
            IndicatorStyle::Highlight => self.highlight,
            IndicatorStyle::Neutral => self.neutral,
        }
    }
}

/// UI-Update Message für Channel-Kommunikation
///
/// Wird vom Taster-Task (Callback-Kontext) an den UI-Task geschickt.
/// Der LED-Zustand ist zum Sendezeitpunkt bereits auf den Ausgangs-Pin
/// geschrieben, der Empfänger liest also einen stabilen Wert.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UiUpdate {
    pub edge: Edge,
    pub led: LedState,
}

impl UiUpdate {
    /// Status-Text für die Anzeige
    pub fn status_text(&self) -> &'static str {
        match self.edge {
            Edge::Falling => "Button pressed",
            Edge::Rising => "Button released",
        }
    }

    /// Anzeige-Stil für die Status-LED
    ///
    /// Nur eine fallende Flanke ändert die Anzeige. Eine steigende
    /// Flanke liefert `None`: Status-Text ohne Farbwechsel.
    pub fn indicator(&self) -> Option<IndicatorStyle> {
        match self.edge {
            Edge::Falling if self.led.is_on() => Some(IndicatorStyle::Highlight),
            Edge::Falling => Some(IndicatorStyle::Neutral),
            Edge::Rising => None,
        }
    }
}

// ============================================================================
// defmt::Format Implementations (optional feature)
// ============================================================================

#[cfg(feature = "defmt")]
impl defmt::Format for UiUpdate {
    fn format(&self, fmt: defmt::Formatter) {
        defmt::write!(
            fmt,
            "UiUpdate {{ edge: {}, led: {}, status: {} }}",
            self.edge,
            self.led,
            self.status_text()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_led_state_levels_are_active_low() {
        assert_eq!(LedState::Off.level(), PinLevel::High);
        assert_eq!(LedState::On.level(), PinLevel::Low);
    }

    #[test]
    fn test_ui_update_falling_edge_on() {
        let update = UiUpdate {
            edge: Edge::Falling,
            led: LedState::On,
        };
        assert_eq!(update.status_text(), "Button pressed");
        assert_eq!(update.indicator(), Some(IndicatorStyle::Highlight));
    }

    #[test]
    fn test_ui_update_falling_edge_off() {
        let update = UiUpdate {
            edge: Edge::Falling,
            led: LedState::Off,
        };
        assert_eq!(update.status_text(), "Button pressed");
        assert_eq!(update.indicator(), Some(IndicatorStyle::Neutral));
    }

    #[test]
    fn test_ui_update_rising_edge_keeps_indicator() {
        let update = UiUpdate {
            edge: Edge::Rising,
            led: LedState::On,
        };
        assert_eq!(update.status_text(), "Button released");
        assert_eq!(update.indicator(), None);
    }
}
