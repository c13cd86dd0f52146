//! Pin Controller - besitzt die beiden Pins und den LED-Zustand
//!
//! Kapselt die komplette Steuerungs-Logik hinter den Hardware-Traits:
//! Initialisierung (Provider, Pins, Entprellung) und die Reaktion auf
//! entprellte Flanken. Dadurch auf dem Host testbar (Mocks).

use crate::logic::next_state;
use crate::traits::{ButtonInput, GpioProvider, InitError, LedError, LedWriter};
use crate::types::{DriveMode, Edge, LedState, PinConfig, UiUpdate};

/// Besitzer des LED-Ausgangs und des gespiegelten LED-Zustands
///
/// Der generische Parameter `L: LedWriter` ermöglicht:
/// - Real Hardware (GpioLedPin) im Production-Code
/// - Mock Implementation (MockLedWriter) in Unit Tests
pub struct PinController<L: LedWriter> {
    led: L,
    state: LedState,
}

impl<L: LedWriter> PinController<L> {
    /// Initialisiert die GPIO-Seite der Anwendung
    ///
    /// Ablauf:
    /// 1. Provider übernehmen - `None` heißt: kein GPIO-Controller auf
    ///    diesem Gerät. Dann bricht die Initialisierung mit
    ///    `InitError::NoController` ab und es wird kein Pin geöffnet.
    /// 2. Ausgangs-Pin öffnen, Startpegel High (LED aus, active-low)
    ///    noch bevor der Pin die Leitung treibt.
    /// 3. Capability-Check: Pull-Up-Eingang verwenden wenn unterstützt,
    ///    sonst Fallback auf einfachen Input-Modus. Kein Fehlerfall.
    /// 4. Entprell-Fenster auf dem Eingangs-Pin konfigurieren.
    ///
    /// Gibt den Controller und den geöffneten Taster-Pin zurück; die
    /// Flanken-Schleife auf dem Taster ist Sache des Aufrufers.
    pub fn initialize<P>(
        provider: Option<P>,
        config: &PinConfig,
    ) -> Result<(Self, P::Input), InitError>
    where
        P: GpioProvider<Output = L>,
    {
        let mut provider = provider.ok_or(InitError::NoController)?;

        // LED auf AUS (High) initialisieren, weil active-low verdrahtet
        let led = provider.open_output(config.led_pin, LedState::Off.level());

        // Prüfen ob interne Pull-Up-Widerstände unterstützt werden
        let mode = if provider.is_drive_mode_supported(config.button_pin, DriveMode::InputPullUp) {
            DriveMode::InputPullUp
        } else {
            DriveMode::Input
        };
        let mut button = provider.open_input(config.button_pin, mode);

        button.set_debounce_timeout(config.debounce_ms);

        let controller = PinController {
            led,
            state: LedState::Off,
        };
        Ok((controller, button))
    }

    /// Verarbeitet eine entprellte Flanke vom Taster
    ///
    /// Fallende Flanke: LED-Zustand umschalten und den neuen Pegel
    /// synchron auf den Ausgangs-Pin schreiben (minimale Latenz, noch
    /// im Callback-Kontext). Steigende Flanke: nur Status-Update.
    ///
    /// Das zurückgegebene `UiUpdate` trägt den bereits geschriebenen
    /// Zustand und wird vom Aufrufer an den UI-Task übergeben.
    pub fn handle_edge(&mut self, edge: Edge) -> Result<UiUpdate, LedError> {
        let state = next_state(self.state, edge);
        if state != self.state {
            self.led.write(state.level())?;
            self.state = state;
        }
        Ok(UiUpdate {
            edge,
            led: self.state,
        })
    }

    /// Aktueller gespiegelter LED-Zustand
    pub fn led_state(&self) -> LedState {
        self.state
    }

    /// Zugriff auf den LED-Ausgang (Diagnose und Host-Tests)
    pub fn output(&self) -> &L {
        &self.led
    }
}
