//! Key sets for navigation within lists, such as select, menu, and combobox.

use super::Key;

/// Keys which move focus to the first item of a list when it opens.
pub const FIRST_KEYS: &[Key] = &[Key::ArrowDown, Key::PageUp, Key::Home];

/// Keys which move focus to the last item of a list when it opens.
pub const LAST_KEYS: &[Key] = &[Key::ArrowUp, Key::PageDown, Key::End];

/// [`FIRST_KEYS`] followed by [`LAST_KEYS`].
pub const FIRST_LAST_KEYS: &[Key] = &[
    Key::ArrowDown,
    Key::PageUp,
    Key::Home,
    Key::ArrowUp,
    Key::PageDown,
    Key::End,
];

/// Keys which select the focused item.
pub const SELECTION_KEYS: &[Key] = &[Key::Enter, Key::Space];

/// Returns `true` if `key` is one of the [`FIRST_KEYS`].
pub fn is_first_key(key: Key) -> bool {
    FIRST_KEYS.contains(&key)
}

/// Returns `true` if `key` is one of the [`LAST_KEYS`].
pub fn is_last_key(key: Key) -> bool {
    LAST_KEYS.contains(&key)
}

/// Returns `true` if `key` is one of the [`FIRST_LAST_KEYS`].
pub fn is_first_last_key(key: Key) -> bool {
    FIRST_LAST_KEYS.contains(&key)
}

/// Returns `true` if `key` is one of the [`SELECTION_KEYS`].
pub fn is_selection_key(key: Key) -> bool {
    SELECTION_KEYS.contains(&key)
}
