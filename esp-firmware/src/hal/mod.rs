// Hardware Abstraction Layer (HAL) Module
//
// Dieses Modul implementiert die esp-core Traits für die ESP32-C6
// Hardware. Host-Tests nutzen stattdessen Mocks (siehe esp-tests).

pub mod gpio;
pub mod indicator;

pub use gpio::{BoardGpio, GpioButtonPin, GpioLedPin};
pub use indicator::RmtIndicator;
