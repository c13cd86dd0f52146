// GPIO Provider und Pin-Implementierungen für den ESP32-C6
//
// BoardGpio setzt den GpioProvider-Trait aus esp-core auf die
// esp-hal GPIO-Typen um: Pins werden über ihre numerische Kennung
// geöffnet, wie es der Pin Controller erwartet.

use embassy_time::{Duration, Timer};
use esp_hal::gpio::{AnyPin, Input, InputConfig, Level, Output, OutputConfig, Pull};

use esp_core::{ButtonInput, DriveMode, Edge, GpioProvider, LedError, LedWriter, PinLevel};

fn to_level(level: PinLevel) -> Level {
    match level {
        PinLevel::Low => Level::Low,
        PinLevel::High => Level::High,
    }
}

/// GPIO-Provider des Boards
///
/// Hält die beiden konkreten Pins bis der Pin Controller sie über
/// ihre Nummer anfordert. Jeder Pin kann nur einmal geöffnet werden.
pub struct BoardGpio<'d> {
    button: Option<(u8, AnyPin<'d>)>,
    led: Option<(u8, AnyPin<'d>)>,
}

impl<'d> BoardGpio<'d> {
    pub fn new(
        button_id: u8,
        button: impl Into<AnyPin<'d>>,
        led_id: u8,
        led: impl Into<AnyPin<'d>>,
    ) -> Self {
        Self {
            button: Some((button_id, button.into())),
            led: Some((led_id, led.into())),
        }
    }

    fn take_pin(&mut self, pin: u8) -> AnyPin<'d> {
        if self.button.as_ref().is_some_and(|(id, _)| *id == pin) {
            return self.button.take().unwrap().1;
        }
        if self.led.as_ref().is_some_and(|(id, _)| *id == pin) {
            return self.led.take().unwrap().1;
        }
        panic!("GPIO {} ist nicht verfügbar oder bereits geöffnet", pin);
    }
}

impl<'d> GpioProvider for BoardGpio<'d> {
    type Output = GpioLedPin<'d>;
    type Input = GpioButtonPin<'d>;

    fn is_drive_mode_supported(&self, _pin: u8, mode: DriveMode) -> bool {
        // Alle ESP32-C6 GPIOs haben interne Pull-Up-Widerstände
        matches!(
            mode,
            DriveMode::Input | DriveMode::InputPullUp | DriveMode::Output
        )
    }

    fn open_output(&mut self, pin: u8, initial: PinLevel) -> GpioLedPin<'d> {
        GpioLedPin::new(self.take_pin(pin), initial)
    }

    fn open_input(&mut self, pin: u8, mode: DriveMode) -> GpioButtonPin<'d> {
        GpioButtonPin::new(self.take_pin(pin), mode)
    }
}

/// LED-Ausgangs-Pin
///
/// `Output::new` setzt den Startpegel bevor der Treiber die Leitung
/// übernimmt - die active-low LED bleibt beim Einschalten dunkel.
pub struct GpioLedPin<'d> {
    pin: Output<'d>,
}

impl<'d> GpioLedPin<'d> {
    pub fn new(pin: AnyPin<'d>, initial: PinLevel) -> Self {
        let pin = Output::new(pin, to_level(initial), OutputConfig::default());
        Self { pin }
    }
}

impl<'d> LedWriter for GpioLedPin<'d> {
    fn write(&mut self, level: PinLevel) -> Result<(), LedError> {
        self.pin.set_level(to_level(level));
        Ok(())
    }
}

/// Taster-Eingangs-Pin mit Entprellung
///
/// Die Flanken-Erkennung läuft in zwei Stufen: auf eine Hardware-Flanke
/// warten, das Entprell-Fenster abwarten, dann den beruhigten Pegel mit
/// dem letzten stabilen Pegel vergleichen. Nur ein echter Wechsel wird
/// als Flanke gemeldet, Prellen innerhalb des Fensters verschwindet.
pub struct GpioButtonPin<'d> {
    pin: Input<'d>,
    stable: PinLevel,
    debounce: Duration,
}

impl<'d> GpioButtonPin<'d> {
    pub fn new(pin: AnyPin<'d>, mode: DriveMode) -> Self {
        let pull = match mode {
            DriveMode::InputPullUp => Pull::Up,
            _ => Pull::None,
        };
        let pin = Input::new(pin, InputConfig::default().with_pull(pull));
        let stable = if pin.is_high() {
            PinLevel::High
        } else {
            PinLevel::Low
        };
        Self {
            pin,
            stable,
            debounce: Duration::from_millis(0),
        }
    }

    /// Wartet auf die nächste entprellte Flanke
    pub async fn wait_for_edge(&mut self) -> Edge {
        loop {
            self.pin.wait_for_any_edge().await;

            // Entprell-Fenster abwarten, dann erneut abtasten
            Timer::after(self.debounce).await;

            let level = self.sample();
            if level != self.stable {
                self.stable = level;
                return match level {
                    PinLevel::Low => Edge::Falling,
                    PinLevel::High => Edge::Rising,
                };
            }
            // Pegel wieder auf dem stabilen Wert: Prellen, verwerfen
        }
    }

    fn sample(&self) -> PinLevel {
        if self.pin.is_high() {
            PinLevel::High
        } else {
            PinLevel::Low
        }
    }
}

impl<'d> ButtonInput for GpioButtonPin<'d> {
    fn set_debounce_timeout(&mut self, timeout_ms: u64) {
        self.debounce = Duration::from_millis(timeout_ms);
    }

    fn level(&mut self) -> PinLevel {
        self.sample()
    }
}
