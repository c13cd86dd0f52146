//! Hardware Abstraction Traits
//!
//! Diese Traits definieren Schnittstellen für Hardware-Zugriff
//! ohne konkrete Implementierung.

use rgb::RGB8;

use crate::types::{DriveMode, PinLevel};

/// Fehler-Typ für die Initialisierung
///
/// Die einzige fatale Bedingung: es gibt keinen GPIO-Controller.
/// In dem Fall werden keine Pins geöffnet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum InitError {
    NoController,
}

/// Fehler-Typ für LED-Schreiboperationen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LedError {
    WriteFailed,
}

/// Trait für den LED-Ausgangs-Pin
///
/// # Implementierungen
/// - **Production:** GpioLedPin (esp-hal Output)
/// - **Testing:** MockLedWriter (in-memory Mock)
pub trait LedWriter: Send {
    /// Schreibt einen Pegel auf den Ausgangs-Pin
    ///
    /// # Fehlerbehandlung
    /// Gibt `LedError::WriteFailed` zurück wenn Hardware-Zugriff fehlschlägt
    fn write(&mut self, level: PinLevel) -> Result<(), LedError>;
}

/// Trait für den Taster-Eingangs-Pin
///
/// Die Flanken-Erkennung selbst ist Sache der Plattform (async in der
/// Firmware, injizierte Flanken im Test). Hier steht nur, was der
/// Controller bei der Initialisierung konfigurieren muss.
pub trait ButtonInput {
    /// Setzt das Entprell-Fenster in Millisekunden
    fn set_debounce_timeout(&mut self, timeout_ms: u64);

    /// Aktueller (entprellter) Pegel des Eingangs
    fn level(&mut self) -> PinLevel;
}

/// Trait für den GPIO-Provider der Plattform
///
/// Entspricht dem "default GPIO controller" des Zielsystems: öffnet
/// Pins über ihre numerische Kennung und beantwortet Capability-Fragen.
/// Alle open-Operationen gelten als erfolgreich sobald ein Provider
/// existiert; die Abwesenheit des Providers ist der einzige Fehlerfall
/// und wird vor dem ersten open behandelt.
pub trait GpioProvider {
    type Output: LedWriter;
    type Input: ButtonInput;

    /// Prüft ob ein Pin den gewünschten Treiber-Modus unterstützt
    fn is_drive_mode_supported(&self, pin: u8, mode: DriveMode) -> bool;

    /// Öffnet einen Ausgangs-Pin
    ///
    /// `initial` wird gesetzt bevor der Pin die Leitung treibt, damit
    /// beim Umschalten auf Output kein Glitch entsteht.
    fn open_output(&mut self, pin: u8, initial: PinLevel) -> Self::Output;

    /// Öffnet einen Eingangs-Pin im angegebenen Modus
    fn open_input(&mut self, pin: u8, mode: DriveMode) -> Self::Input;
}

/// Trait für die Status-Anzeige (Farb-Indikator)
///
/// # Implementierungen
/// - **Production:** RmtIndicator (ESP32 RMT Peripheral, WS2812)
/// - **Testing:** MockIndicator (in-memory Mock)
pub trait IndicatorWriter: Send {
    /// Schreibt eine RGB-Farbe auf die Status-LED
    fn write(&mut self, color: RGB8) -> Result<(), LedError>;
}
