// Taster-Task - Callback-Kontext der Anwendung
//
// Wartet auf entprellte Flanken, schaltet die LED über den Pin
// Controller und reicht das UI-Update per Channel an den UI-Task
// weiter. Der Pin-Schreibzugriff passiert synchron hier im Task
// (minimale Latenz), die Anzeige folgt asynchron.

use defmt::error;

use crate::UiEventSender;
use crate::hal::{GpioButtonPin, GpioLedPin};
use esp_core::PinController;

/// Taster-Task - Embassy Task für parallele Ausführung
///
/// # Parameter
/// - `button`: entprellter Taster-Pin (vom Pin Controller geöffnet)
/// - `controller`: Pin Controller mit LED-Ausgang und Zustand
/// - `ui_sender`: Channel Sender für UI-Updates
#[embassy_executor::task]
pub async fn button_task(
    mut button: GpioButtonPin<'static>,
    mut controller: PinController<GpioLedPin<'static>>,
    ui_sender: UiEventSender,
) {
    loop {
        // Auf die nächste entprellte Flanke warten
        let edge = button.wait_for_edge().await;

        // LED-Zustand umschalten (nur bei fallender Flanke) und das
        // Update für die Anzeige erzeugen
        match controller.handle_edge(edge) {
            Ok(update) => {
                // FIFO-Handoff an den UI-Task; bei vollem Channel
                // wartet der Produzent, es geht kein Event verloren
                ui_sender.send(update).await;
            }
            Err(_e) => error!("Failed to write LED pin"),
        }
    }
}
