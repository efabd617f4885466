//! Keyboard input utilities for interactive widgets.
//!
//! `keynav` provides a shared vocabulary of key identifiers ([`Key`]), the
//! key sets used by list-like widgets (select, menu, combobox) to jump to
//! the first or last item, direction-aware resolution of the "next" and
//! "previous" arrow keys, and a declarative keydown dispatcher.
//!
//! # Example
//!
//! ```
//! use ::keynav::input::keyboard::{
//!     create_keydown_handler, directional_keys, Direction, GuardedAction, Key, KeyAction,
//!     KeyActionMap, KeyDown, Orientation,
//! };
//!
//! // A horizontal tab list in a right-to-left document.
//! let keys = directional_keys(Direction::Rtl, Orientation::Horizontal);
//! assert_eq!(keys.next_key, Key::ArrowLeft);
//!
//! let handler = create_keydown_handler(
//!     KeyActionMap::new()
//!         .bind(keys.next_key, GuardedAction::new(|_: &mut KeyDown| println!("next tab")))
//!         .bind(keys.prev_key, GuardedAction::new(|_: &mut KeyDown| println!("previous tab")))
//!         .bind(Key::Escape, KeyAction::simple(|_: &mut KeyDown| println!("blur"))),
//! );
//!
//! let mut event = KeyDown::new(Key::ArrowLeft);
//! handler.handle(&mut event);
//! assert!(event.is_default_prevented());
//! ```
//!
//! [`Key`]: crate::input::keyboard::Key

pub mod errors;
pub mod input;
