//! End-to-end keydown scenarios through the public API.

use ::keynav::input::keyboard::{
    create_keydown_handler, directional_keys, next_key, prev_key, Direction, Dispatch,
    GuardedAction, Key, KeyAction, KeyActionMap, KeyDown, Modifier, Orientation,
    FIRST_LAST_KEYS, SELECTION_KEYS,
};
use ::pretty_assertions::assert_eq;
use ::std::{cell::RefCell, rc::Rc};

/// Collects the keys whose callbacks ran.
#[derive(Clone, Default)]
struct Log(Rc<RefCell<Vec<String>>>);

impl Log {
    fn record(&self, entry: &str) -> impl Fn(&mut KeyDown) + 'static {
        let log = Rc::clone(&self.0);
        let entry = entry.to_owned();
        move |_: &mut KeyDown| log.borrow_mut().push(entry.clone())
    }

    fn entries(&self) -> Vec<String> {
        self.0.borrow().clone()
    }
}

#[test]
fn test_plain_callback_scenario() {
    let log = Log::default();
    let handler = create_keydown_handler(
        KeyActionMap::new().bind(Key::Enter, KeyAction::simple(log.record("enter"))),
    );

    let mut enter = KeyDown::new(Key::Enter);
    assert_eq!(handler.handle(&mut enter), Dispatch::Invoked);
    assert!(!enter.is_default_prevented());

    let mut escape = KeyDown::new(Key::Escape);
    assert_eq!(handler.handle(&mut escape), Dispatch::Unmapped);

    assert_eq!(log.entries(), ["enter"]);
}

/// Default-prevention happens before the modifier gates are checked, so a
/// press without ctrl still has its default prevented.
#[test]
fn test_ctrl_gate_scenario() {
    let log = Log::default();
    let handler = create_keydown_handler(KeyActionMap::new().bind(
        Key::Enter,
        GuardedAction::new(log.record("ctrl+enter")).with_ctrl(true),
    ));

    let mut event = KeyDown::new(Key::Enter).with_ctrl(false);
    assert_eq!(handler.handle(&mut event), Dispatch::Gated(Modifier::Ctrl));
    assert!(event.is_default_prevented());
    assert!(log.entries().is_empty());
}

#[test]
fn test_stop_propagation_scenario() {
    let log = Log::default();
    let handler = create_keydown_handler(KeyActionMap::new().bind(
        Key::A,
        GuardedAction::new(log.record("a"))
            .with_prevent_default(false)
            .with_stop_propagation(true),
    ));

    let mut event = KeyDown::from_identifier("a");
    assert_eq!(handler.handle(&mut event), Dispatch::Invoked);
    assert!(event.is_propagation_stopped());
    assert!(!event.is_default_prevented());
    assert!(!event.is_immediate_propagation_stopped());
    assert_eq!(log.entries(), ["a"]);
}

#[test]
fn test_identical_events_have_identical_effects() {
    let log = Log::default();
    let handler = create_keydown_handler(
        KeyActionMap::new()
            .bind(
                Key::Home,
                GuardedAction::new(log.record("home")).with_stop_immediate_propagation(true),
            )
            .bind(Key::End, KeyAction::simple(log.record("end"))),
    );

    for key in [Key::Home, Key::End] {
        let mut first = KeyDown::new(key).with_shift(true);
        let mut second = KeyDown::new(key).with_shift(true);

        let first_outcome = handler.handle(&mut first);
        let second_outcome = handler.handle(&mut second);

        assert_eq!(first_outcome, second_outcome);
        assert_eq!(first, second);
    }

    assert_eq!(log.entries(), ["home", "home", "end", "end"]);
}

/// A listbox wires every first/last key and both navigation keys of its
/// orientation through a single handler.
#[test]
fn test_listbox_keymap() {
    let log = Log::default();
    let keys = directional_keys(Direction::Rtl, Orientation::Vertical);

    let mut actions = KeyActionMap::new();
    for &key in FIRST_LAST_KEYS.iter().chain(SELECTION_KEYS) {
        actions.insert(key, GuardedAction::new(log.record(key.as_str())));
    }
    actions.insert(keys.next_key, GuardedAction::new(log.record("next")));
    actions.insert(keys.prev_key, GuardedAction::new(log.record("prev")));
    assert_eq!(actions.len(), FIRST_LAST_KEYS.len() + SELECTION_KEYS.len());

    let handler = create_keydown_handler(actions);
    for key in [Key::ArrowDown, Key::ArrowUp, Key::PageUp, Key::Space, Key::ArrowLeft] {
        handler.handle(&mut KeyDown::new(key));
    }

    assert_eq!(log.entries(), ["next", "prev", "PageUp", " "]);
}

#[test]
fn test_direction_table() {
    use Direction::*;
    use Orientation::*;

    let table = [
        (Ltr, Horizontal, Key::ArrowRight, Key::ArrowLeft),
        (Rtl, Horizontal, Key::ArrowLeft, Key::ArrowRight),
        (Ltr, Vertical, Key::ArrowDown, Key::ArrowUp),
        (Rtl, Vertical, Key::ArrowDown, Key::ArrowUp),
    ];

    for (direction, orientation, next, prev) in table {
        assert_eq!(next_key(direction, orientation), next);
        assert_eq!(prev_key(direction, orientation), prev);

        let keys = directional_keys(direction, orientation);
        assert_eq!((keys.next_key, keys.prev_key), (next, prev));
    }
}

#[test]
fn test_direction_from_attributes() {
    let direction: Direction = "rtl".parse().unwrap();
    let orientation: Orientation = "horizontal".parse().unwrap();

    assert_eq!(next_key(direction, orientation), Key::ArrowLeft);
    assert!("sideways".parse::<Orientation>().is_err());
}
