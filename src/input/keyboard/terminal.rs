//! [`KeyboardEvent`] adapter for crossterm key events.
//!
//! Terminals have no default action to prevent and no element tree to
//! propagate through. The adapter records the requests instead so that the
//! host can decide whether to run its own fallback handling (e.g. only let
//! the global keymap see keys whose default was not prevented).

use ::crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers, ModifierKeyCode};
use ::std::borrow::Cow;

use super::{event::Suppression, KeyboardEvent};

/// Identifier reported for keys which have no standard identifier.
const UNIDENTIFIED: &str = "Unidentified";

/// A crossterm key press, seen as a keydown.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TerminalKeyDown {
    event: KeyEvent,
    suppression: Suppression,
}

impl TerminalKeyDown {
    /// Adapts a crossterm key event. Returns `None` for key releases, which
    /// are only reported by terminals with keyboard enhancement enabled.
    pub fn new(event: KeyEvent) -> Option<Self> {
        (event.kind != KeyEventKind::Release).then_some(Self {
            event,
            suppression: Suppression::default(),
        })
    }

    /// The underlying crossterm event.
    pub fn event(&self) -> &KeyEvent {
        &self.event
    }

    pub fn is_default_prevented(&self) -> bool {
        self.suppression.default_prevented
    }

    pub fn is_propagation_stopped(&self) -> bool {
        self.suppression.propagation_stopped
    }

    pub fn is_immediate_propagation_stopped(&self) -> bool {
        self.suppression.immediate_propagation_stopped
    }
}

impl KeyboardEvent for TerminalKeyDown {
    fn key(&self) -> Cow<'_, str> {
        match self.event.code {
            KeyCode::Backspace => "Backspace".into(),
            KeyCode::Enter => "Enter".into(),
            KeyCode::Left => "ArrowLeft".into(),
            KeyCode::Right => "ArrowRight".into(),
            KeyCode::Up => "ArrowUp".into(),
            KeyCode::Down => "ArrowDown".into(),
            KeyCode::Home => "Home".into(),
            KeyCode::End => "End".into(),
            KeyCode::PageUp => "PageUp".into(),
            KeyCode::PageDown => "PageDown".into(),
            // Shift is reported through the modifiers.
            KeyCode::Tab | KeyCode::BackTab => "Tab".into(),
            KeyCode::Delete => "Delete".into(),
            KeyCode::Insert => "Insert".into(),
            KeyCode::F(n) => format!("F{n}").into(),
            KeyCode::Char(c) => c.to_string().into(),
            KeyCode::Esc => "Escape".into(),
            KeyCode::CapsLock => "CapsLock".into(),
            KeyCode::Modifier(modifier) => match modifier {
                ModifierKeyCode::LeftShift | ModifierKeyCode::RightShift => "Shift".into(),
                ModifierKeyCode::LeftControl | ModifierKeyCode::RightControl => "Control".into(),
                ModifierKeyCode::LeftAlt | ModifierKeyCode::RightAlt => "Alt".into(),
                ModifierKeyCode::LeftSuper
                | ModifierKeyCode::RightSuper
                | ModifierKeyCode::LeftMeta
                | ModifierKeyCode::RightMeta => "Meta".into(),
                _ => UNIDENTIFIED.into(),
            },
            _ => UNIDENTIFIED.into(),
        }
    }

    fn ctrl_key(&self) -> bool {
        self.event.modifiers.contains(KeyModifiers::CONTROL)
    }

    fn shift_key(&self) -> bool {
        self.event.modifiers.contains(KeyModifiers::SHIFT)
    }

    fn alt_key(&self) -> bool {
        self.event.modifiers.contains(KeyModifiers::ALT)
    }

    fn prevent_default(&mut self) {
        self.suppression.default_prevented = true;
    }

    fn stop_propagation(&mut self) {
        self.suppression.propagation_stopped = true;
    }

    fn stop_immediate_propagation(&mut self) {
        self.suppression.immediate_propagation_stopped = true;
    }
}
