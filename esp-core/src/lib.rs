//! ESP Core - Platform-agnostic Logic and Traits
//!
//! Diese Crate enthält KEINE Hardware-Dependencies.
//! Sie definiert Traits, Types und die Pin-Controller-Logik.

#![no_std]

pub mod controller;
pub mod logic;
pub mod traits;
pub mod types;

// Re-exports für einfachen Zugriff
pub use controller::PinController;
pub use logic::next_state;
pub use traits::{ButtonInput, GpioProvider, IndicatorWriter, InitError, LedError, LedWriter};
pub use types::{
    DriveMode, Edge, IndicatorPalette, IndicatorStyle, LedState, PinConfig, PinLevel, UiUpdate,
};
