// UI-Task - Präsentations-Seite der Anwendung
//
// Einziger Konsument des UI-Channels. Empfängt Updates in
// Sende-Reihenfolge (FIFO) und spiegelt den LED-Zustand auf die
// Status-LED und den Status-Text. Hardware-Zugriff auf die Anzeige
// passiert ausschließlich hier.

use defmt::{error, info};
use esp_hal_smartled::smart_led_buffer;

use crate::UiEventReceiver;
use crate::config::{INDICATOR_PALETTE, RMT_CLOCK_MHZ};
use crate::hal::RmtIndicator;
use esp_core::IndicatorWriter;

/// UI Logic - von der Hardware-Initialisierung getrennte Schleife
///
/// Der generische Parameter `W: IndicatorWriter` ermöglicht:
/// - Real Hardware (RmtIndicator) im Production-Code
/// - Mock Implementation (MockIndicator) in Unit Tests
///
/// # Parameter
/// - `indicator`: Status-LED Writer (Hardware oder Mock)
/// - `receiver`: Channel Receiver für UI-Updates
pub async fn ui_logic<W: IndicatorWriter>(mut indicator: W, receiver: UiEventReceiver) {
    // Grundzustand anzeigen: LED ist aus, Anzeige neutral
    if indicator.write(INDICATOR_PALETTE.neutral).is_err() {
        error!("Failed to write status indicator");
    }

    loop {
        let update = receiver.receive().await;

        // Farbwechsel nur wenn das Update einen Stil mitbringt
        // (steigende Flanke = nur Status-Text)
        if let Some(style) = update.indicator() {
            let color = INDICATOR_PALETTE.color_for(style);
            if let Err(_e) = indicator.write(color) {
                error!("Failed to write status indicator");
            }
        }

        info!("{}", update.status_text());
    }
}

/// UI-Task - Embassy Task für parallele Ausführung
///
/// Dieser Task übernimmt die Hardware-Initialisierung und ruft dann
/// die `ui_logic()` Schleife auf.
///
/// # Parameter
/// - `gpio8`: GPIO8 Peripheral für die Status-LED
/// - `rmt_peripheral`: RMT Peripheral für präzises Timing
/// - `receiver`: Channel Receiver für UI-Updates
#[embassy_executor::task]
pub async fn ui_task(
    gpio8: esp_hal::peripherals::GPIO8<'static>,
    rmt_peripheral: esp_hal::peripherals::RMT<'static>,
    receiver: UiEventReceiver,
) {
    // Buffer für SmartLED Daten erstellen (1 LED)
    // Macro allokiert Speicher im richtigen Format für RMT
    let mut rmt_buffer = smart_led_buffer!(1);

    // Hardware initialisieren: RmtIndicator kapselt RMT + SmartLED
    let indicator = RmtIndicator::new(gpio8, rmt_peripheral, RMT_CLOCK_MHZ, &mut rmt_buffer);

    ui_logic(indicator, receiver).await;
}
