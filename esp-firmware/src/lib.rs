// Library-Root: Wiederverwendbare Logik und Module
// Keine Standard-Bibliothek (Embedded System)
#![no_std]

// Module
pub mod config;
pub mod hal;
pub mod tasks;

// Re-exports von esp-core
pub use esp_core::{
    Edge, InitError, LedError, LedState, PinConfig, PinController, PinLevel, UiUpdate,
};

// Embassy Channel-Typen
use embassy_sync::blocking_mutex::raw::NoopRawMutex;
use embassy_sync::channel::{Channel, Receiver, Sender};

// ============================================================================
// Type-Aliase für Channel-Typen
// ============================================================================
//
// Diese Type-Aliase vereinfachen die Lesbarkeit der Funktionssignaturen.
// Statt:  Sender<'static, NoopRawMutex, UiUpdate, 4>
// Nutze:  UiEventSender

/// Channel für UI-Updates (Taster-Task → UI-Task)
/// - 4: Nachrichten-Kapazität; Events werden FIFO abgearbeitet, bei
///   vollem Channel wartet der Produzent statt Events zu verwerfen
pub type UiEventChannel = Channel<NoopRawMutex, UiUpdate, 4>;

/// Sender für UI-Updates (Taster-Task → UI-Task)
/// Erzeugt aus UiEventChannel
pub type UiEventSender = Sender<'static, NoopRawMutex, UiUpdate, 4>;

/// Receiver für UI-Updates (UI-Task empfängt)
/// Empfängt Updates von UiEventSender
pub type UiEventReceiver = Receiver<'static, NoopRawMutex, UiUpdate, 4>;
