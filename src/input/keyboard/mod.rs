//! Keyboard vocabulary, navigation helpers and keydown dispatch.

mod codes;
mod direction;
mod event;
mod handler;
mod sets;
#[cfg(feature = "crossterm")]
mod terminal;
#[cfg(feature = "web")]
mod web;

pub use codes::*;
pub use direction::*;
pub use event::*;
pub use handler::*;
pub use sets::*;
#[cfg(feature = "crossterm")]
pub use terminal::*;
