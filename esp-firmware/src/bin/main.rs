// Keine Standard-Bibliothek verwenden (Embedded System)
#![no_std]
// Kein normaler main() Einstiegspunkt (wird von esp_rtos bereitgestellt)
#![no_main]
// Verbiete mem::forget - gefährlich bei ESP HAL Types mit DMA-Buffern
#![deny(
    clippy::mem_forget,
    reason = "mem::forget is generally not safe to do with esp_hal types, especially those \
    holding buffers for the duration of a data transfer."
)]
// Verbiete große Stack-Frames (Stack ist auf Embedded Systemen begrenzt)
#![deny(clippy::large_stack_frames)]

// Embassy Async Runtime
use embassy_executor::Spawner;
use embassy_time::{Duration, Timer};

// ESP32-C6 HAL
use esp_hal::clock::CpuClock;
use esp_hal::timer::timg::TimerGroup;

// Backtrace bei Panic und println!() Support
use {esp_backtrace as _, esp_println as _};

use defmt::{error, info};

// Projekt-Module und Konfiguration
use esp_taster_steuerung::config::{BUTTON_GPIO_PIN, LED_GPIO_PIN, PIN_CONFIG};
use esp_taster_steuerung::hal::BoardGpio;
use esp_taster_steuerung::tasks::{button_task, ui_task};
use esp_taster_steuerung::{InitError, PinController, UiEventChannel};

// ESP-IDF App Descriptor - erforderlich für den Bootloader!
// Ohne diesen schlägt das Flashen mit "ESP-IDF App Descriptor missing" fehl
esp_bootloader_esp_idf::esp_app_desc!();

/// Main Entry Point
///
/// Initialisiert Hardware und GPIO-Pins, startet die Embassy Runtime
/// und spawnt Taster- und UI-Task. Danach schläft main().
#[esp_rtos::main]
async fn main(spawner: Spawner) -> ! {
    // ESP32-C6 Konfiguration: CPU auf maximale Taktfrequenz (160 MHz)
    let config = esp_hal::Config::default().with_cpu_clock(CpuClock::max());
    let peripherals = esp_hal::init(config);

    // Embassy Runtime initialisieren (Timer + Software Interrupt)
    let timg0 = TimerGroup::new(peripherals.TIMG0);
    let sw_interrupt =
        esp_hal::interrupt::software::SoftwareInterruptControl::new(peripherals.SW_INTERRUPT);
    esp_rtos::start(timg0.timer0, sw_interrupt.software_interrupt0);

    // GPIO-Provider mit Taster- und LED-Pin erstellen
    let gpio = BoardGpio::new(
        BUTTON_GPIO_PIN,
        peripherals.GPIO5,
        LED_GPIO_PIN,
        peripherals.GPIO6,
    );

    // Pin Controller initialisieren: öffnet LED-Ausgang (High = aus,
    // active-low) und Taster-Eingang (Pull-Up wenn unterstützt) und
    // konfiguriert das Entprell-Fenster
    let (controller, button) = match PinController::initialize(Some(gpio), &PIN_CONFIG) {
        Ok(v) => v,
        Err(InitError::NoController) => {
            // Einziger fataler Fehlerfall: kein GPIO-Controller.
            // Keine Pins geöffnet, keine Tasks - nur schlafen.
            error!("There's no GPIO controller on this device");
            loop {
                Timer::after(Duration::from_secs(3600)).await;
            }
        }
    };
    info!("GPIO pins initialized correctly");

    // UI-Channel erstellen (Taster-Task → UI-Task, FIFO)
    static UI_CHANNEL: static_cell::StaticCell<UiEventChannel> = static_cell::StaticCell::new();
    let ui_channel = UI_CHANNEL.init(UiEventChannel::new());

    // Spawn Taster-Task (Produzent) und UI-Task (Konsument)
    spawner
        .spawn(button_task(button, controller, ui_channel.sender()))
        .unwrap();
    spawner
        .spawn(ui_task(
            peripherals.GPIO8,
            peripherals.RMT,
            ui_channel.receiver(),
        ))
        .unwrap();

    // Main-Loop: schläft (alle Arbeit läuft in Tasks)
    loop {
        Timer::after(Duration::from_secs(3600)).await;
    }
}
