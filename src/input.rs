//! Keyboard handling for the flight screen.
//!
//! Most terminals only deliver key presses (plus auto-repeat presses while a
//! key is held), never releases. Terminals that support the keyboard
//! enhancement protocol report releases too. [`ThrustLatch`] turns either
//! stream into clean press/release pairs for the flight controller.

use crate::constants::INPUT_HOLD_MS;
use crate::flight::FlightInput;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind};

/// What a key means on the flight screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    Flight(FlightInput),
    Quit,
    None,
}

/// Turns raw thrust-key events into single ThrustOn/ThrustOff inputs.
#[derive(Debug, Clone)]
pub struct ThrustLatch {
    /// Whether the terminal reports key releases.
    pub reports_release: bool,
    pub held: bool,
    /// Time left before an unrefreshed hold counts as released.
    pub hold_remaining_ms: u64,
}

impl ThrustLatch {
    pub fn new(reports_release: bool) -> Self {
        Self {
            reports_release,
            held: false,
            hold_remaining_ms: 0,
        }
    }

    /// Feed a thrust key event. Returns an input only on a state change.
    pub fn on_key(&mut self, kind: KeyEventKind) -> Option<FlightInput> {
        match kind {
            KeyEventKind::Release => {
                if self.held {
                    self.held = false;
                    return Some(FlightInput::ThrustOff);
                }
                None
            }
            KeyEventKind::Press | KeyEventKind::Repeat => {
                self.hold_remaining_ms = INPUT_HOLD_MS;
                if self.held {
                    return None;
                }
                self.held = true;
                Some(FlightInput::ThrustOn)
            }
        }
    }

    /// Expire a hold nobody refreshed. Only applies when the terminal never
    /// reports releases.
    pub fn tick(&mut self, dt_ms: u64) -> Option<FlightInput> {
        if self.reports_release || !self.held {
            return None;
        }
        self.hold_remaining_ms = self.hold_remaining_ms.saturating_sub(dt_ms);
        if self.hold_remaining_ms == 0 {
            self.held = false;
            return Some(FlightInput::ThrustOff);
        }
        None
    }

    pub fn clear(&mut self) {
        self.held = false;
        self.hold_remaining_ms = 0;
    }
}

fn is_thrust_key(code: KeyCode) -> bool {
    matches!(code, KeyCode::Char(' ') | KeyCode::Up)
}

/// Map a key event to an action. Thrust keys go through the latch; on the
/// pad they launch instead.
pub fn map_key(key: &KeyEvent, launched: bool, latch: &mut ThrustLatch) -> KeyAction {
    if is_thrust_key(key.code) {
        if !launched {
            return match key.kind {
                KeyEventKind::Press => KeyAction::Flight(FlightInput::Launch),
                _ => KeyAction::None,
            };
        }
        return match latch.on_key(key.kind) {
            Some(input) => KeyAction::Flight(input),
            None => KeyAction::None,
        };
    }

    // Releases of every other key are noise
    if key.kind != KeyEventKind::Press {
        return KeyAction::None;
    }

    match key.code {
        KeyCode::Enter => KeyAction::Flight(FlightInput::Launch),
        KeyCode::Char('r') | KeyCode::Char('R') => {
            latch.clear();
            KeyAction::Flight(FlightInput::Reset)
        }
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => KeyAction::Quit,
        _ => KeyAction::None,
    }
}
