//! Integration Tests für die Taster/LED-Steuerung
//!
//! Diese Tests laufen auf dem Host (x86_64) und nutzen Mock-Pins

use esp_core::{
    ButtonInput, DriveMode, Edge, GpioProvider, IndicatorPalette, IndicatorStyle, IndicatorWriter,
    InitError, LedError, LedState, LedWriter, PinConfig, PinController, PinLevel, UiUpdate,
};
use rgb::RGB8;

const TEST_CONFIG: PinConfig = PinConfig {
    button_pin: 5,
    led_pin: 6,
    debounce_ms: 50,
};

const TEST_PALETTE: IndicatorPalette = IndicatorPalette {
    highlight: RGB8 { r: 16, g: 0, b: 0 },
    neutral: RGB8 { r: 2, g: 2, b: 2 },
};

// ============================================================================
// Mock GPIO Provider und Pins
// ============================================================================

pub struct MockLedWriter {
    /// Pin-Nummer mit der der Ausgang geöffnet wurde
    pub pin: u8,
    /// Pegel der vor dem Umschalten auf Output gesetzt wurde
    pub initial: PinLevel,
    /// Alle seither geschriebenen Pegel (für Assertions in Tests)
    pub writes: Vec<PinLevel>,
    /// Simuliere Fehler bei jedem write()
    pub fail_writes: bool,
}

impl LedWriter for MockLedWriter {
    fn write(&mut self, level: PinLevel) -> Result<(), LedError> {
        if self.fail_writes {
            return Err(LedError::WriteFailed);
        }
        self.writes.push(level);
        Ok(())
    }
}

pub struct MockButtonPin {
    /// Pin-Nummer mit der der Eingang geöffnet wurde
    pub pin: u8,
    /// Treiber-Modus der beim Öffnen gewählt wurde
    pub mode: DriveMode,
    /// Konfiguriertes Entprell-Fenster (None = nie gesetzt)
    pub debounce_ms: Option<u64>,
    /// Simulierter Pegel
    pub level: PinLevel,
}

impl ButtonInput for MockButtonPin {
    fn set_debounce_timeout(&mut self, timeout_ms: u64) {
        self.debounce_ms = Some(timeout_ms);
    }

    fn level(&mut self) -> PinLevel {
        self.level
    }
}

pub struct MockGpioProvider {
    /// Unterstützt der simulierte Controller Pull-Up-Eingänge?
    pub pull_up_supported: bool,
    /// Erzeuge LED-Writer deren write() fehlschlägt
    pub fail_led_writes: bool,
}

impl MockGpioProvider {
    pub fn new() -> Self {
        Self {
            pull_up_supported: true,
            fail_led_writes: false,
        }
    }
}

impl GpioProvider for MockGpioProvider {
    type Output = MockLedWriter;
    type Input = MockButtonPin;

    fn is_drive_mode_supported(&self, _pin: u8, mode: DriveMode) -> bool {
        match mode {
            DriveMode::InputPullUp => self.pull_up_supported,
            DriveMode::Input | DriveMode::Output => true,
        }
    }

    fn open_output(&mut self, pin: u8, initial: PinLevel) -> MockLedWriter {
        MockLedWriter {
            pin,
            initial,
            writes: Vec::new(),
            fail_writes: self.fail_led_writes,
        }
    }

    fn open_input(&mut self, pin: u8, mode: DriveMode) -> MockButtonPin {
        MockButtonPin {
            pin,
            mode,
            debounce_ms: None,
            // Pull-Up: Ruhepegel High, Taster zieht auf Low
            level: PinLevel::High,
        }
    }
}

#[derive(Default)]
pub struct MockIndicator {
    pub writes: Vec<RGB8>,
    pub fail_next_write: bool,
}

impl IndicatorWriter for MockIndicator {
    fn write(&mut self, color: RGB8) -> Result<(), LedError> {
        if self.fail_next_write {
            self.fail_next_write = false;
            return Err(LedError::WriteFailed);
        }
        self.writes.push(color);
        Ok(())
    }
}

fn init_with(provider: MockGpioProvider) -> (PinController<MockLedWriter>, MockButtonPin) {
    PinController::initialize(Some(provider), &TEST_CONFIG).expect("initialization failed")
}

// ============================================================================
// Tests: Initialisierung
// ============================================================================

#[test]
fn test_initialize_without_controller_fails() {
    let result = PinController::initialize(None::<MockGpioProvider>, &TEST_CONFIG);
    // Kein Provider: typisierter Fehler, keine Pins geöffnet
    assert_eq!(result.err(), Some(InitError::NoController));
}

#[test]
fn test_initialize_opens_configured_pins() {
    let (controller, button) = init_with(MockGpioProvider::new());
    assert_eq!(controller.output().pin, 6);
    assert_eq!(button.pin, 5);
}

#[test]
fn test_initialize_sets_led_off_before_output_mode() {
    let (controller, _button) = init_with(MockGpioProvider::new());
    // Active-low: AUS heißt High, gesetzt bevor der Pin treibt
    assert_eq!(controller.output().initial, PinLevel::High);
    assert!(controller.output().writes.is_empty());
    assert_eq!(controller.led_state(), LedState::Off);
}

#[test]
fn test_initialize_selects_pull_up_when_supported() {
    let (_controller, button) = init_with(MockGpioProvider::new());
    assert_eq!(button.mode, DriveMode::InputPullUp);
}

#[test]
fn test_initialize_falls_back_to_plain_input() {
    let mut provider = MockGpioProvider::new();
    provider.pull_up_supported = false;
    // Capability-Check, kein Fehlerfall: Fallback auf Input
    let (_controller, button) = init_with(provider);
    assert_eq!(button.mode, DriveMode::Input);
}

#[test]
fn test_initialize_configures_debounce_timeout() {
    let (_controller, button) = init_with(MockGpioProvider::new());
    assert_eq!(button.debounce_ms, Some(50));
}

// ============================================================================
// Tests: Zustands-Maschine
// ============================================================================

#[test]
fn test_falling_edges_alternate_state() {
    let (mut controller, _button) = init_with(MockGpioProvider::new());

    // Nach N Drücken: An bei ungeradem N, Aus bei geradem N
    for n in 1..=7 {
        controller.handle_edge(Edge::Falling).unwrap();
        let expected = if n % 2 == 1 {
            LedState::On
        } else {
            LedState::Off
        };
        assert_eq!(controller.led_state(), expected, "after {} presses", n);
    }
}

#[test]
fn test_rising_edge_never_changes_state() {
    let (mut controller, _button) = init_with(MockGpioProvider::new());

    let update = controller.handle_edge(Edge::Rising).unwrap();
    assert_eq!(controller.led_state(), LedState::Off);
    assert_eq!(update.status_text(), "Button released");

    controller.handle_edge(Edge::Falling).unwrap();
    let update = controller.handle_edge(Edge::Rising).unwrap();
    assert_eq!(controller.led_state(), LedState::On);
    assert_eq!(update.status_text(), "Button released");
    // Steigende Flanke schreibt nichts auf den Ausgang
    assert_eq!(controller.output().writes, vec![PinLevel::Low]);
}

// ============================================================================
// Tests: Szenarien
// ============================================================================

#[test]
fn test_press_scenario() {
    let (mut controller, _button) = init_with(MockGpioProvider::new());

    let update = controller.handle_edge(Edge::Falling).unwrap();

    // Aus → An, Ausgang auf Low getrieben (active-low)
    assert_eq!(controller.led_state(), LedState::On);
    assert_eq!(controller.output().writes, vec![PinLevel::Low]);
    assert_eq!(update.status_text(), "Button pressed");
    assert_eq!(update.indicator(), Some(IndicatorStyle::Highlight));
}

#[test]
fn test_release_scenario() {
    let (mut controller, _button) = init_with(MockGpioProvider::new());
    controller.handle_edge(Edge::Falling).unwrap();

    let update = controller.handle_edge(Edge::Rising).unwrap();

    // Zustand unverändert, nur Status-Text, kein Farbwechsel
    assert_eq!(controller.led_state(), LedState::On);
    assert_eq!(update.status_text(), "Button released");
    assert_eq!(update.indicator(), None);
}

#[test]
fn test_double_press_returns_to_off() {
    let (mut controller, _button) = init_with(MockGpioProvider::new());

    controller.handle_edge(Edge::Falling).unwrap();
    let update = controller.handle_edge(Edge::Falling).unwrap();

    // Aus → An → Aus, Leitung am Ende wieder High
    assert_eq!(controller.led_state(), LedState::Off);
    assert_eq!(
        controller.output().writes,
        vec![PinLevel::Low, PinLevel::High]
    );
    assert_eq!(update.indicator(), Some(IndicatorStyle::Neutral));
}

#[test]
fn test_failed_write_keeps_state() {
    let mut provider = MockGpioProvider::new();
    provider.fail_led_writes = true;
    let (mut controller, _button) = init_with(provider);

    let result = controller.handle_edge(Edge::Falling);

    // Fehler wird gemeldet, Zustand und Schreib-Log bleiben unberührt
    assert_eq!(result, Err(LedError::WriteFailed));
    assert_eq!(controller.led_state(), LedState::Off);
    assert!(controller.output().writes.is_empty());
}

// ============================================================================
// Tests: Status-Anzeige
// ============================================================================

#[test]
fn test_palette_resolves_styles() {
    assert_eq!(
        TEST_PALETTE.color_for(IndicatorStyle::Highlight),
        RGB8 { r: 16, g: 0, b: 0 }
    );
    assert_eq!(
        TEST_PALETTE.color_for(IndicatorStyle::Neutral),
        RGB8 { r: 2, g: 2, b: 2 }
    );
}

#[test]
fn test_indicator_follows_press_sequence() {
    let (mut controller, _button) = init_with(MockGpioProvider::new());
    let mut indicator = MockIndicator::default();

    // Drücken, Loslassen, Drücken - wie der UI-Task rendern würde
    for edge in [Edge::Falling, Edge::Rising, Edge::Falling] {
        let update = controller.handle_edge(edge).unwrap();
        if let Some(style) = update.indicator() {
            indicator.write(TEST_PALETTE.color_for(style)).unwrap();
        }
    }

    // Steigende Flanke erzeugt keinen Farbwechsel
    assert_eq!(
        indicator.writes,
        vec![TEST_PALETTE.highlight, TEST_PALETTE.neutral]
    );
}

#[test]
fn test_mock_indicator_fail_recovers() {
    let mut indicator = MockIndicator {
        fail_next_write: true,
        ..Default::default()
    };

    let result = indicator.write(TEST_PALETTE.highlight);
    assert_eq!(result, Err(LedError::WriteFailed));
    assert!(indicator.writes.is_empty());

    indicator.write(TEST_PALETTE.neutral).unwrap();
    assert_eq!(indicator.writes, vec![TEST_PALETTE.neutral]);
}

// ============================================================================
// Tests: UiUpdate
// ============================================================================

#[test]
fn test_ui_update_texts_match_edges() {
    let pressed = UiUpdate {
        edge: Edge::Falling,
        led: LedState::On,
    };
    let released = UiUpdate {
        edge: Edge::Rising,
        led: LedState::On,
    };
    assert_eq!(pressed.status_text(), "Button pressed");
    assert_eq!(released.status_text(), "Button released");
}
