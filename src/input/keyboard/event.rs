//! The keyboard event boundary between hosts and the keydown dispatcher.

use ::std::borrow::Cow;

use super::Key;

/// A platform keydown event, as seen by [`KeydownHandler`].
///
/// The trait mirrors the parts of the DOM `KeyboardEvent` interface which the
/// dispatcher needs: the key identifier, the modifier flags and the three
/// imperative methods which suppress default behavior and propagation.
///
/// Implementations are provided for [`KeyDown`], and behind cargo features
/// for `web_sys::KeyboardEvent` (`web`) and crossterm key events
/// (`crossterm`).
///
/// [`KeydownHandler`]: crate::input::keyboard::KeydownHandler
pub trait KeyboardEvent {
    /// The key identifier, e.g. `"Enter"` or `"a"`.
    fn key(&self) -> Cow<'_, str>;

    /// Whether the control key was held.
    fn ctrl_key(&self) -> bool;

    /// Whether the shift key was held.
    fn shift_key(&self) -> bool;

    /// Whether the alt key was held.
    fn alt_key(&self) -> bool;

    /// Suppress the default action of the host for this event.
    fn prevent_default(&mut self);

    /// Stop the event from reaching handlers of ancestor elements.
    fn stop_propagation(&mut self);

    /// Stop the event from reaching any further handler, including handlers
    /// of the same element.
    fn stop_immediate_propagation(&mut self);
}

/// Records which of the suppression methods of [`KeyboardEvent`] were called.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub(crate) struct Suppression {
    pub(crate) default_prevented: bool,
    pub(crate) propagation_stopped: bool,
    pub(crate) immediate_propagation_stopped: bool,
}

/// A host-independent keydown event.
///
/// Useful for hosts which deliver keys in some other form (or not at all,
/// such as scripted input and unit tests). After dispatch, the host inspects
/// [`is_default_prevented`] and friends to decide whether to run its own
/// fallback behavior.
///
/// ```
/// use ::keynav::input::keyboard::{Key, KeyDown, KeyboardEvent};
///
/// let mut event = KeyDown::new(Key::Enter).with_ctrl(true);
/// assert_eq!(event.key(), "Enter");
/// assert!(event.ctrl_key());
///
/// event.prevent_default();
/// assert!(event.is_default_prevented());
/// ```
///
/// [`is_default_prevented`]: Self::is_default_prevented
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct KeyDown {
    key: Cow<'static, str>,
    ctrl: bool,
    shift: bool,
    alt: bool,
    suppression: Suppression,
}

impl KeyDown {
    /// Construct a keydown for one of the keys in the [`Key`] table without
    /// any modifiers held.
    pub fn new(key: Key) -> Self {
        Self {
            key: Cow::Borrowed(key.as_str()),
            ..Default::default()
        }
    }

    /// Construct a keydown for an arbitrary key identifier, including
    /// identifiers outside of the [`Key`] table.
    pub fn from_identifier(identifier: impl AsRef<str>) -> Self {
        Self {
            key: Cow::Owned(identifier.as_ref().to_owned()),
            ..Default::default()
        }
    }

    /// Set whether the control key is held.
    pub fn with_ctrl(self, ctrl: bool) -> Self {
        Self { ctrl, ..self }
    }

    /// Set whether the shift key is held.
    pub fn with_shift(self, shift: bool) -> Self {
        Self { shift, ..self }
    }

    /// Set whether the alt key is held.
    pub fn with_alt(self, alt: bool) -> Self {
        Self { alt, ..self }
    }

    /// Whether [`prevent_default`] was called.
    ///
    /// [`prevent_default`]: KeyboardEvent::prevent_default
    pub fn is_default_prevented(&self) -> bool {
        self.suppression.default_prevented
    }

    /// Whether [`stop_propagation`] was called.
    ///
    /// [`stop_propagation`]: KeyboardEvent::stop_propagation
    pub fn is_propagation_stopped(&self) -> bool {
        self.suppression.propagation_stopped
    }

    /// Whether [`stop_immediate_propagation`] was called.
    ///
    /// [`stop_immediate_propagation`]: KeyboardEvent::stop_immediate_propagation
    pub fn is_immediate_propagation_stopped(&self) -> bool {
        self.suppression.immediate_propagation_stopped
    }
}

impl From<Key> for KeyDown {
    fn from(key: Key) -> Self {
        Self::new(key)
    }
}

impl KeyboardEvent for KeyDown {
    fn key(&self) -> Cow<'_, str> {
        Cow::Borrowed(&self.key)
    }

    fn ctrl_key(&self) -> bool {
        self.ctrl
    }

    fn shift_key(&self) -> bool {
        self.shift
    }

    fn alt_key(&self) -> bool {
        self.alt
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
