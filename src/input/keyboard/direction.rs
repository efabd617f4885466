//! Direction-aware resolution of the "next" and "previous" navigation keys.
//!
//! A horizontal list laid out right-to-left advances with the left arrow
//! rather than the right arrow. Vertical lists are unaffected by reading
//! direction.

use ::std::str::FromStr;
use ::strum::{Display, EnumIter};

use super::Key;
use crate::errors::{Error, ErrorKind};

/// Reading direction of the UI.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Display, EnumIter)]
pub enum Direction {
    /// Left-to-right.
    #[default]
    #[strum(serialize = "ltr")]
    Ltr,
    /// Right-to-left.
    #[strum(serialize = "rtl")]
    Rtl,
}

impl FromStr for Direction {
    type Err = Error;

    /// Parses the values of the HTML `dir` attribute.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ltr" => Ok(Self::Ltr),
            "rtl" => Ok(Self::Rtl),
            _ => Err(ErrorKind::InvalidDirection(s.to_owned()).into()),
        }
    }
}

/// Layout axis of a navigable list.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Display, EnumIter)]
pub enum Orientation {
    #[default]
    #[strum(serialize = "horizontal")]
    Horizontal,
    #[strum(serialize = "vertical")]
    Vertical,
}

impl FromStr for Orientation {
    type Err = Error;

    /// Parses the values of the `aria-orientation` attribute.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "horizontal" => Ok(Self::Horizontal),
            "vertical" => Ok(Self::Vertical),
            _ => Err(ErrorKind::InvalidOrientation(s.to_owned()).into()),
        }
    }
}

/// The pair of keys returned by [`directional_keys`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct DirectionalKeys {
    /// Key which moves focus to the next item.
    pub next_key: Key,
    /// Key which moves focus to the previous item.
    pub prev_key: Key,
}

/// Returns the key which moves focus to the next item.
///
/// Vertical lists always advance with [`Key::ArrowDown`]. Horizontal lists
/// advance with [`Key::ArrowRight`], or [`Key::ArrowLeft`] when the reading
/// direction is right-to-left.
///
/// ```
/// use ::keynav::input::keyboard::{next_key, Direction, Key, Orientation};
///
/// assert_eq!(next_key(Direction::Rtl, Orientation::Horizontal), Key::ArrowLeft);
/// assert_eq!(next_key(Direction::default(), Orientation::default()), Key::ArrowRight);
/// ```
pub const fn next_key(direction: Direction, orientation: Orientation) -> Key {
    match (orientation, direction) {
        (Orientation::Vertical, _) => Key::ArrowDown,
        (Orientation::Horizontal, Direction::Ltr) => Key::ArrowRight,
        (Orientation::Horizontal, Direction::Rtl) => Key::ArrowLeft,
    }
}

/// Returns the key which moves focus to the previous item. Mirrors
/// [`next_key`].
pub const fn prev_key(direction: Direction, orientation: Orientation) -> Key {
    match (orientation, direction) {
        (Orientation::Vertical, _) => Key::ArrowUp,
        (Orientation::Horizontal, Direction::Ltr) => Key::ArrowLeft,
        (Orientation::Horizontal, Direction::Rtl) => Key::ArrowRight,
    }
}

/// Resolves both navigation keys at once.
pub const fn directional_keys(direction: Direction, orientation: Orientation) -> DirectionalKeys {
    DirectionalKeys {
        next_key: next_key(direction, orientation),
        prev_key: prev_key(direction, orientation),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use ::pretty_assertions::assert_eq;
    use ::strum::IntoEnumIterator;

    #[test]
    fn test_next_key() {
        use Direction::*;
        use Orientation::*;

        assert_eq!(next_key(Ltr, Horizontal), Key::ArrowRight);
        assert_eq!(next_key(Rtl, Horizontal), Key::ArrowLeft);
        assert_eq!(next_key(Ltr, Vertical), Key::ArrowDown);
        assert_eq!(next_key(Rtl, Vertical), Key::ArrowDown);
    }

    #[test]
    fn test_prev_key() {
        use Direction::*;
        use Orientation::*;

        assert_eq!(prev_key(Ltr, Horizontal), Key::ArrowLeft);
        assert_eq!(prev_key(Rtl, Horizontal), Key::ArrowRight);
        assert_eq!(prev_key(Ltr, Vertical), Key::ArrowUp);
        assert_eq!(prev_key(Rtl, Vertical), Key::ArrowUp);
    }

    #[test]
    fn test_defaults() {
        assert_eq!(Direction::default(), Direction::Ltr);
        assert_eq!(Orientation::default(), Orientation::Horizontal);
        assert_eq!(
            directional_keys(Default::default(), Default::default()),
            DirectionalKeys {
                next_key: Key::ArrowRight,
                prev_key: Key::ArrowLeft,
            }
        );
    }

    #[test]
    fn test_directional_keys_agree_with_individual_functions() {
        for direction in Direction::iter() {
            for orientation in Orientation::iter() {
                assert_eq!(
                    directional_keys(direction, orientation),
                    DirectionalKeys {
                        next_key: next_key(direction, orientation),
                        prev_key: prev_key(direction, orientation),
                    }
                );
            }
        }
    }

    #[test]
    fn test_parse_attribute_values() {
        assert_eq!("rtl".parse::<Direction>(), Ok(Direction::Rtl));
        assert_eq!("vertical".parse::<Orientation>(), Ok(Orientation::Vertical));
        assert_eq!(Direction::Rtl.to_string(), "rtl");
        assert_eq!(Orientation::Horizontal.to_string(), "horizontal");

        assert_eq!(
            "RTL".parse::<Direction>().unwrap_err().kind(),
            &ErrorKind::InvalidDirection("RTL".to_owned())
        );
        assert_eq!(
            "diagonal".parse::<Orientation>().unwrap_err().kind(),
            &ErrorKind::InvalidOrientation("diagonal".to_owned())
        );
    }
}
