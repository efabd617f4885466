//! The key identifier vocabulary shared by all widgets.

use ::lazy_static::lazy_static;
use ::std::{collections::HashMap, str::FromStr};
use ::strum::{AsRefStr, Display, EnumCount, EnumIter, IntoEnumIterator, IntoStaticStr};

use crate::errors::{Error, ErrorKind};

lazy_static! {
    static ref IDENTIFIERS: HashMap<&'static str, Key> =
        Key::iter().map(|key| (key.as_str(), key)).collect();
}

/// The keys which widgets in this crate react to, named after the standard
/// key identifier strings reported by keyboard events (the `key` attribute
/// of a DOM `KeyboardEvent`).
///
/// Each variant maps to exactly one identifier string. The mapping is
/// case-sensitive and hosts depend on exact string equality, so the letter
/// helpers [`Key::A`] and [`Key::P`] are the lowercase identifiers `"a"` and
/// `"p"`, and [`Key::Space`] is a literal space character.
///
/// ```
/// use ::keynav::input::keyboard::Key;
///
/// assert_eq!(Key::Enter.as_str(), "Enter");
/// assert_eq!(Key::Space.as_str(), " ");
/// assert_eq!("ArrowDown".parse::<Key>().unwrap(), Key::ArrowDown);
/// assert!("arrowdown".parse::<Key>().is_err());
/// ```
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    AsRefStr,
    Display,
    EnumCount,
    EnumIter,
    IntoStaticStr,
)]
pub enum Key {
    Alt,
    ArrowDown,
    ArrowLeft,
    ArrowRight,
    ArrowUp,
    Backspace,
    CapsLock,
    /// The control key. Also available under the shorter alias [`Key::CTRL`].
    Control,
    Delete,
    End,
    Enter,
    Escape,
    F1,
    F2,
    F3,
    F4,
    F5,
    F6,
    F7,
    F8,
    F9,
    F10,
    F11,
    F12,
    Home,
    /// The platform meta key (command on macOS, the Windows key elsewhere).
    Meta,
    PageDown,
    PageUp,
    Shift,
    #[strum(serialize = " ")]
    Space,
    Tab,
    #[strum(serialize = "*")]
    Asterisk,
    #[strum(serialize = "a")]
    A,
    #[strum(serialize = "p")]
    P,
}

impl Key {
    /// Alias for [`Key::Control`]. Both names share the `"Control"`
    /// identifier.
    pub const CTRL: Key = Key::Control;

    /// Returns the exact key identifier string for this key.
    pub fn as_str(self) -> &'static str {
        self.into()
    }

    /// Returns `true` for the four arrow keys.
    pub const fn is_arrow(self) -> bool {
        matches!(
            self,
            Key::ArrowDown | Key::ArrowLeft | Key::ArrowRight | Key::ArrowUp
        )
    }

    /// Returns `true` for the function keys F1 through F12.
    pub const fn is_function(self) -> bool {
        matches!(
            self,
            Key::F1
                | Key::F2
                | Key::F3
                | Key::F4
                | Key::F5
                | Key::F6
                | Key::F7
                | Key::F8
                | Key::F9
                | Key::F10
                | Key::F11
                | Key::F12
        )
    }

    /// Returns `true` for keys which only modify other key presses.
    pub const fn is_modifier(self) -> bool {
        matches!(
            self,
            Key::Alt | Key::CapsLock | Key::Control | Key::Meta | Key::Shift
        )
    }
}

impl FromStr for Key {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        IDENTIFIERS
            .get(s)
            .copied()
            .ok_or_else(|| ErrorKind::UnknownKey(s.to_owned()).into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use ::pretty_assertions::assert_eq;
    use ::std::collections::HashSet;

    #[test]
    fn test_identifiers() {
        let expected = [
            (Key::Alt, "Alt"),
            (Key::ArrowDown, "ArrowDown"),
            (Key::ArrowLeft, "ArrowLeft"),
            (Key::ArrowRight, "ArrowRight"),
            (Key::ArrowUp, "ArrowUp"),
            (Key::Backspace, "Backspace"),
            (Key::CapsLock, "CapsLock"),
            (Key::Control, "Control"),
            (Key::Delete, "Delete"),
            (Key::End, "End"),
            (Key::Enter, "Enter"),
            (Key::Escape, "Escape"),
            (Key::F1, "F1"),
            (Key::F2, "F2"),
            (Key::F3, "F3"),
            (Key::F4, "F4"),
            (Key::F5, "F5"),
            (Key::F6, "F6"),
            (Key::F7, "F7"),
            (Key::F8, "F8"),
            (Key::F9, "F9"),
            (Key::F10, "F10"),
            (Key::F11, "F11"),
            (Key::F12, "F12"),
            (Key::Home, "Home"),
            (Key::Meta, "Meta"),
            (Key::PageDown, "PageDown"),
            (Key::PageUp, "PageUp"),
            (Key::Shift, "Shift"),
            (Key::Space, " "),
            (Key::Tab, "Tab"),
            (Key::Asterisk, "*"),
            (Key::A, "a"),
            (Key::P, "p"),
        ];

        assert_eq!(expected.len(), Key::COUNT);
        for (key, identifier) in expected {
            assert_eq!(key.as_str(), identifier);
            assert_eq!(key.to_string(), identifier);
            assert_eq!(key.as_ref(), identifier);
        }
    }

    #[test]
    fn test_ctrl_alias() {
        assert_eq!(Key::CTRL, Key::Control);
        assert_eq!(Key::CTRL.as_str(), "Control");
    }

    #[test]
    fn test_identifiers_are_unique() {
        let identifiers: HashSet<_> = Key::iter().map(Key::as_str).collect();
        assert_eq!(identifiers.len(), Key::COUNT);
    }

    #[test]
    fn test_parse_every_key() {
        for key in Key::iter() {
            assert_eq!(key.as_str().parse::<Key>(), Ok(key));
        }
    }

    #[test]
    fn test_parse_is_case_sensitive() {
        for identifier in ["enter", "ESCAPE", "A", "P", "f1", "space", ""] {
            let err = identifier.parse::<Key>().unwrap_err();
            assert_eq!(err.kind(), &ErrorKind::UnknownKey(identifier.to_owned()));
        }
    }

    #[test]
    fn test_classification() {
        let arrows: Vec<_> = Key::iter().filter(|k| k.is_arrow()).collect();
        assert_eq!(
            arrows,
            [Key::ArrowDown, Key::ArrowLeft, Key::ArrowRight, Key::ArrowUp]
        );

        assert_eq!(Key::iter().filter(|k| k.is_function()).count(), 12);
        assert!(!Key::Enter.is_function());

        let modifiers: Vec<_> = Key::iter().filter(|k| k.is_modifier()).collect();
        assert_eq!(
            modifiers,
            [Key::Alt, Key::CapsLock, Key::Control, Key::Meta, Key::Shift]
        );
    }
}
