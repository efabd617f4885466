//! Input handling for interactive widgets.

pub mod keyboard;
