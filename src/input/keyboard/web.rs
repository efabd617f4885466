//! [`KeyboardEvent`] for DOM keyboard events.
//!
//! ```ignore
//! let handler = create_keydown_handler(actions);
//! let listener = Closure::<dyn FnMut(_)>::new(move |mut event: web_sys::KeyboardEvent| {
//!     handler.handle(&mut event);
//! });
//! element.add_event_listener_with_callback("keydown", listener.as_ref().unchecked_ref())?;
//! ```

use ::std::borrow::Cow;
use ::web_sys::Event;

use super::KeyboardEvent;

impl KeyboardEvent for ::web_sys::KeyboardEvent {
    fn key(&self) -> Cow<'_, str> {
        Cow::Owned(::web_sys::KeyboardEvent::key(self))
    }

    fn ctrl_key(&self) -> bool {
        ::web_sys::KeyboardEvent::ctrl_key(self)
    }

    fn shift_key(&self) -> bool {
        ::web_sys::KeyboardEvent::shift_key(self)
    }

    fn alt_key(&self) -> bool {
        ::web_sys::KeyboardEvent::alt_key(self)
    }

    fn prevent_default(&mut self) {
        AsRef::<Event>::as_ref(&*self).prevent_default();
    }

    fn stop_propagation(&mut self) {
        AsRef::<Event>::as_ref(&*self).stop_propagation();
    }

    fn stop_immediate_propagation(&mut self) {
        AsRef::<Event>::as_ref(&*self).stop_immediate_propagation();
    }
}
