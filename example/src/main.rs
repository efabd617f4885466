//! Drives a keydown handler for a vertical listbox with a scripted sequence
//! of key presses. Run with `RUST_LOG=keynav=trace` to see the dispatcher's
//! decisions.

use ::keynav::input::keyboard::{
    create_keydown_handler, directional_keys, Direction, GuardedAction, Key, KeyAction,
    KeyActionMap, KeyDown, KeyboardEvent, Orientation, FIRST_KEYS, LAST_KEYS, SELECTION_KEYS,
};
use ::std::{cell::Cell, rc::Rc};
use ::tracing::info;
use ::tracing_subscriber::{fmt, prelude::*, EnvFilter};

const ITEMS: &[&str] = &["Apple", "Banana", "Cherry", "Damson"];

pub fn main() {
    ::tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::from_default_env())
        .init();

    let focused = Rc::new(Cell::new(0usize));
    let keys = directional_keys(Direction::Ltr, Orientation::Vertical);

    let mut actions = KeyActionMap::new()
        .bind(keys.next_key, {
            let focused = Rc::clone(&focused);
            GuardedAction::new(move |_: &mut KeyDown| {
                focused.set((focused.get() + 1).min(ITEMS.len() - 1))
            })
        })
        .bind(keys.prev_key, {
            let focused = Rc::clone(&focused);
            GuardedAction::new(move |_: &mut KeyDown| focused.set(focused.get().saturating_sub(1)))
        })
        .bind(Key::Escape, KeyAction::simple(|_: &mut KeyDown| info!("Closing listbox")));

    // Home and End jump to either end of the list. The arrow keys in the
    // same sets are already bound above.
    for &key in FIRST_KEYS.iter().chain(LAST_KEYS).filter(|key| !key.is_arrow()) {
        let focused = Rc::clone(&focused);
        let target = if FIRST_KEYS.contains(&key) { 0 } else { ITEMS.len() - 1 };
        actions.insert(key, GuardedAction::new(move |_: &mut KeyDown| focused.set(target)));
    }

    for &key in SELECTION_KEYS {
        let focused = Rc::clone(&focused);
        actions.insert(
            key,
            GuardedAction::new(move |_: &mut KeyDown| info!("Selected {}", ITEMS[focused.get()])),
        );
    }

    // Select everything only with ctrl held.
    actions.insert(
        Key::A,
        GuardedAction::new(|_: &mut KeyDown| info!("Selected all items")).with_ctrl(true),
    );

    let handler = create_keydown_handler(actions);

    let script = [
        KeyDown::new(Key::ArrowDown),
        KeyDown::new(Key::ArrowDown),
        KeyDown::new(Key::Enter),
        KeyDown::new(Key::End),
        KeyDown::new(Key::ArrowUp),
        KeyDown::new(Key::Space),
        KeyDown::new(Key::A),
        KeyDown::new(Key::A).with_ctrl(true),
        KeyDown::from_identifier("Insert"),
        KeyDown::new(Key::Escape),
    ];

    for mut event in script {
        let outcome = handler.handle(&mut event);
        println!(
            "{:>12?} -> {outcome:?} (default prevented: {}, focused: {})",
            event.key(),
            event.is_default_prevented(),
            ITEMS[focused.get()],
        );
    }
}
