//! Pure Business Logic Functions
//!
//! Funktionen ohne Hardware-Dependencies (testbar!)

use crate::types::{Edge, LedState};

/// Zustandsübergang der LED bei einer entprellten Flanke
///
/// Nur eine fallende Flanke (Tastendruck) schaltet den Zustand um.
/// Eine steigende Flanke (Loslassen) lässt den Zustand unverändert.
///
/// # Beispiele
///
/// ```
/// # use esp_core::{next_state, Edge, LedState};
/// let state = LedState::Off;
/// let state = next_state(state, Edge::Falling); // Druck → An
/// assert_eq!(state, LedState::On);
/// let state = next_state(state, Edge::Rising);  // Loslassen → unverändert
/// assert_eq!(state, LedState::On);
/// ```
pub fn next_state(state: LedState, edge: Edge) -> LedState {
    match edge {
        Edge::Falling => state.toggled(),
        Edge::Rising => state,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_falling_edge_turns_on_from_off() {
        assert_eq!(next_state(LedState::Off, Edge::Falling), LedState::On);
    }

    #[test]
    fn test_falling_edge_turns_off_from_on() {
        assert_eq!(next_state(LedState::On, Edge::Falling), LedState::Off);
    }

    #[test]
    fn test_rising_edge_keeps_state() {
        assert_eq!(next_state(LedState::Off, Edge::Rising), LedState::Off);
        assert_eq!(next_state(LedState::On, Edge::Rising), LedState::On);
    }

    #[test]
    fn test_press_count_parity() {
        // Nach N Tastendrücken: An bei ungeradem N, Aus bei geradem N
        let mut state = LedState::Off;
        for n in 1..=8 {
            state = next_state(state, Edge::Falling);
            if n % 2 == 1 {
                assert_eq!(state, LedState::On);
            } else {
                assert_eq!(state, LedState::Off);
            }
        }
    }
}
