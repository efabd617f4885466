//! Declarative keydown dispatch.
//!
//! A [`KeyActionMap`] binds keys to actions, and [`create_keydown_handler`]
//! turns the map into a single reusable [`KeydownHandler`] which a widget
//! installs as its keydown listener.

use ::std::{
    collections::{btree_map, BTreeMap},
    fmt,
};
use ::strum::Display;
use ::tracing::trace;

use super::{Key, KeyboardEvent};
use crate::errors::{Context, Result};

/// A consumer-supplied callback which receives the triggering event.
pub type Callback<E> = Box<dyn Fn(&mut E)>;

/// The behavior bound to a single key.
pub enum KeyAction<E> {
    /// Bound to nothing. Dispatching the key is a no-op.
    None,

    /// A plain callback. It is invoked for every press of the key regardless
    /// of modifiers and never prevents default behavior or stops propagation.
    Simple(Callback<E>),

    /// A callback with default-prevention, propagation control and modifier
    /// gates. See [`GuardedAction`].
    Guarded(GuardedAction<E>),
}

impl<E> KeyAction<E> {
    /// Wrap a plain callback.
    pub fn simple(handler: impl Fn(&mut E) + 'static) -> Self {
        Self::Simple(Box::new(handler))
    }

    /// Wrap a guarded action.
    pub fn guarded(action: GuardedAction<E>) -> Self {
        Self::Guarded(action)
    }
}

impl<E> From<GuardedAction<E>> for KeyAction<E> {
    fn from(action: GuardedAction<E>) -> Self {
        Self::Guarded(action)
    }
}

impl<E> fmt::Debug for KeyAction<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::None => f.write_str("None"),
            Self::Simple(_) => f.write_str("Simple(..)"),
            Self::Guarded(action) => f.debug_tuple("Guarded").field(action).finish(),
        }
    }
}

/// A callback together with the options which control how, and whether, it
/// is invoked.
///
/// When the key is pressed, the suppression options are applied to the
/// event first and the modifier gates are checked afterwards. A press which
/// fails a modifier gate therefore still has its default behavior prevented
/// (and propagation stopped, if requested) even though the callback does not
/// run.
///
/// ```
/// use ::keynav::input::keyboard::{GuardedAction, KeyDown};
///
/// let action = GuardedAction::<KeyDown>::new(|_| println!("saved"))
///     .with_ctrl(true)
///     .with_stop_propagation(true);
///
/// assert!(action.prevent_default());
/// assert!(action.stop_propagation());
/// assert!(action.ctrl());
/// assert!(!action.shift());
/// ```
pub struct GuardedAction<E> {
    handler: Callback<E>,
    prevent_default: bool,
    stop_propagation: bool,
    stop_immediate_propagation: bool,
    ctrl: bool,
    shift: bool,
    alt: bool,
}

impl<E> GuardedAction<E> {
    /// Construct a guarded action which prevents default behavior and has no
    /// modifier gates.
    pub fn new(handler: impl Fn(&mut E) + 'static) -> Self {
        Self {
            handler: Box::new(handler),
            prevent_default: true,
            stop_propagation: false,
            stop_immediate_propagation: false,
            ctrl: false,
            shift: false,
            alt: false,
        }
    }

    /// Set whether to prevent the default behavior of the event.
    ///
    /// Defaults to `true` if not set.
    pub fn with_prevent_default(self, prevent_default: bool) -> Self {
        Self {
            prevent_default,
            ..self
        }
    }

    /// Set whether to stop propagation of the event.
    ///
    /// Defaults to `false` if not set.
    pub fn with_stop_propagation(self, stop_propagation: bool) -> Self {
        Self {
            stop_propagation,
            ..self
        }
    }

    /// Set whether to stop immediate propagation of the event.
    ///
    /// Defaults to `false` if not set.
    pub fn with_stop_immediate_propagation(self, stop_immediate_propagation: bool) -> Self {
        Self {
            stop_immediate_propagation,
            ..self
        }
    }

    /// Set whether to only invoke the handler while ctrl is held.
    ///
    /// Defaults to `false` if not set.
    pub fn with_ctrl(self, ctrl: bool) -> Self {
        Self { ctrl, ..self }
    }

    /// Set whether to only invoke the handler while shift is held.
    ///
    /// Defaults to `false` if not set.
    pub fn with_shift(self, shift: bool) -> Self {
        Self { shift, ..self }
    }

    /// Set whether to only invoke the handler while alt is held.
    ///
    /// Defaults to `false` if not set.
    pub fn with_alt(self, alt: bool) -> Self {
        Self { alt, ..self }
    }

    pub fn prevent_default(&self) -> bool {
        self.prevent_default
    }

    pub fn stop_propagation(&self) -> bool {
        self.stop_propagation
    }

    pub fn stop_immediate_propagation(&self) -> bool {
        self.stop_immediate_propagation
    }

    pub fn ctrl(&self) -> bool {
        self.ctrl
    }

    pub fn shift(&self) -> bool {
        self.shift
    }

    pub fn alt(&self) -> bool {
        self.alt
    }
}

impl<E> fmt::Debug for GuardedAction<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GuardedAction")
            .field("prevent_default", &self.prevent_default)
            .field("stop_propagation", &self.stop_propagation)
            .field(
                "stop_immediate_propagation",
                &self.stop_immediate_propagation,
            )
            .field("ctrl", &self.ctrl)
            .field("shift", &self.shift)
            .field("alt", &self.alt)
            .finish_non_exhaustive()
    }
}

/// A mapping from key to action, with at most one action per key.
///
/// ```
/// use ::keynav::input::keyboard::{GuardedAction, Key, KeyAction, KeyActionMap, KeyDown};
///
/// let map = KeyActionMap::<KeyDown>::new()
///     .bind(Key::Enter, KeyAction::simple(|_: &mut KeyDown| println!("select")))
///     .bind(Key::Escape, GuardedAction::new(|_: &mut KeyDown| println!("close")));
///
/// assert_eq!(map.len(), 2);
/// assert!(map.contains_key(Key::Escape));
/// ```
pub struct KeyActionMap<E> {
    actions: BTreeMap<Key, KeyAction<E>>,
}

impl<E> Default for KeyActionMap<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> KeyActionMap<E> {
    /// Construct an empty map.
    pub fn new() -> Self {
        Self {
            actions: BTreeMap::new(),
        }
    }

    /// Bind `action` to `key`, replacing any previous binding.
    pub fn bind(mut self, key: Key, action: impl Into<KeyAction<E>>) -> Self {
        self.insert(key, action);
        self
    }

    /// Bind `action` to the key with the given identifier string, replacing
    /// any previous binding.
    ///
    /// Fails if the identifier is not in the [`Key`] table.
    pub fn try_bind(self, identifier: &str, action: impl Into<KeyAction<E>>) -> Result<Self> {
        let key = identifier
            .parse::<Key>()
            .context(format!("Failed to bind keydown action to {identifier:?}"))?;
        Ok(self.bind(key, action))
    }

    /// Bind `action` to `key`, returning the action previously bound to it.
    pub fn insert(&mut self, key: Key, action: impl Into<KeyAction<E>>) -> Option<KeyAction<E>> {
        self.actions.insert(key, action.into())
    }

    pub fn get(&self, key: Key) -> Option<&KeyAction<E>> {
        self.actions.get(&key)
    }

    pub fn contains_key(&self, key: Key) -> bool {
        self.actions.contains_key(&key)
    }

    pub fn len(&self) -> usize {
        self.actions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }

    /// The bound keys, in [`Key`] order.
    pub fn keys(&self) -> impl Iterator<Item = Key> + '_ {
        self.actions.keys().copied()
    }
}

impl<E> FromIterator<(Key, KeyAction<E>)> for KeyActionMap<E> {
    fn from_iter<I: IntoIterator<Item = (Key, KeyAction<E>)>>(iter: I) -> Self {
        Self {
            actions: iter.into_iter().collect(),
        }
    }
}

impl<E> Extend<(Key, KeyAction<E>)> for KeyActionMap<E> {
    fn extend<I: IntoIterator<Item = (Key, KeyAction<E>)>>(&mut self, iter: I) {
        self.actions.extend(iter);
    }
}

impl<E> IntoIterator for KeyActionMap<E> {
    type Item = (Key, KeyAction<E>);
    type IntoIter = btree_map::IntoIter<Key, KeyAction<E>>;

    fn into_iter(self) -> Self::IntoIter {
        self.actions.into_iter()
    }
}

impl<E> fmt::Debug for KeyActionMap<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.actions.iter()).finish()
    }
}

/// A modifier key which a [`GuardedAction`] may require.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Display)]
pub enum Modifier {
    Ctrl,
    Shift,
    Alt,
}

/// The outcome of dispatching one event through a [`KeydownHandler`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Dispatch {
    /// The key is not bound in the map (or not in the [`Key`] table at all).
    /// The event was left untouched.
    Unmapped,
    /// The key is bound to [`KeyAction::None`]. The event was left untouched.
    Ignored,
    /// The callback ran.
    Invoked,
    /// A required modifier was not held, so the callback did not run. Any
    /// requested suppression was still applied to the event.
    Gated(Modifier),
}

/// A keydown listener built from a [`KeyActionMap`] by
/// [`create_keydown_handler`].
///
/// The handler keeps no state between events. Dispatching two identical
/// events has identical effects.
pub struct KeydownHandler<E> {
    actions: KeyActionMap<E>,
}

impl<E> fmt::Debug for KeydownHandler<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KeydownHandler")
            .field("actions", &self.actions)
            .finish()
    }
}

/// Build a keydown listener from a map of key actions.
///
/// ```
/// use ::keynav::input::keyboard::{
///     create_keydown_handler, Dispatch, GuardedAction, Key, KeyActionMap, KeyDown, Modifier,
/// };
///
/// let handler = create_keydown_handler(
///     KeyActionMap::new().bind(Key::A, GuardedAction::new(|_: &mut KeyDown| {}).with_ctrl(true)),
/// );
///
/// let mut select_all = KeyDown::new(Key::A).with_ctrl(true);
/// assert_eq!(handler.handle(&mut select_all), Dispatch::Invoked);
/// assert!(select_all.is_default_prevented());
///
/// let mut plain_a = KeyDown::new(Key::A);
/// assert_eq!(handler.handle(&mut plain_a), Dispatch::Gated(Modifier::Ctrl));
/// assert!(plain_a.is_default_prevented());
/// ```
pub fn create_keydown_handler<E>(actions: KeyActionMap<E>) -> KeydownHandler<E>
where
    E: KeyboardEvent,
{
    KeydownHandler { actions }
}

impl<E> KeydownHandler<E>
where
    E: KeyboardEvent,
{
    /// Dispatch a keydown event to the action bound to its key.
    pub fn handle(&self, event: &mut E) -> Dispatch {
        let key = {
            let identifier = event.key();
            match identifier.parse::<Key>() {
                Ok(key) => key,
                Err(_) => {
                    trace!("Ignoring keydown for unknown key identifier {identifier:?}");
                    return Dispatch::Unmapped;
                }
            }
        };

        let action = match self.actions.get(key) {
            Some(KeyAction::None) => {
                trace!("Keydown {key:?} is bound to nothing");
                return Dispatch::Ignored;
            }
            Some(KeyAction::Simple(handler)) => {
                trace!("Invoking simple keydown action for {key:?}");
                handler(event);
                return Dispatch::Invoked;
            }
            Some(KeyAction::Guarded(action)) => action,
            None => {
                trace!("No keydown action bound to {key:?}");
                return Dispatch::Unmapped;
            }
        };

        if action.prevent_default {
            event.prevent_default();
        }
        if action.stop_propagation {
            event.stop_propagation();
        }
        if action.stop_immediate_propagation {
            event.stop_immediate_propagation();
        }

        if let Some(modifier) = Self::unsatisfied_modifier(action, event) {
            trace!("Keydown action for {key:?} requires {modifier}, skipping");
            return Dispatch::Gated(modifier);
        }

        trace!("Invoking guarded keydown action for {key:?}");
        (action.handler)(event);
        Dispatch::Invoked
    }

    /// Consume the handler and return it as a plain closure, for hosts which
    /// register listeners as `Fn(&mut E)`.
    pub fn into_fn(self) -> impl Fn(&mut E) {
        move |event: &mut E| {
            self.handle(event);
        }
    }

    /// The map the handler dispatches to.
    pub fn actions(&self) -> &KeyActionMap<E> {
        &self.actions
    }

    /// Returns the first modifier gate of `action` which `event` fails, in
    /// the order ctrl, shift, alt.
    fn unsatisfied_modifier(action: &GuardedAction<E>, event: &E) -> Option<Modifier> {
        if action.ctrl && !event.ctrl_key() {
            Some(Modifier::Ctrl)
        } else if action.shift && !event.shift_key() {
            Some(Modifier::Shift)
        } else if action.alt && !event.alt_key() {
            Some(Modifier::Alt)
        } else {
            None
        }
    }
}
