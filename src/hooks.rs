#[cfg(target_arch = "wasm32")]
use dioxus::prelude::*;
#[cfg(target_arch = "wasm32")]
use std::rc::Rc;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::{closure::Closure, JsCast};

#[cfg(target_arch = "wasm32")]
pub struct ListenerHandle {
    target: Option<web_sys::EventTarget>,
    event: &'static str,
    closure: Closure<dyn FnMut(web_sys::Event)>,
}

#[cfg(target_arch = "wasm32")]
impl Drop for ListenerHandle {
    fn drop(&mut self) {
        if let Some(target) = &self.target {
            let _ = target.remove_event_listener_with_callback(
                self.event,
                self.closure.as_ref().unchecked_ref(),
            );
        }
    }
}

/// Attaches `handler` to a window event for the lifetime of the calling
/// component. The listener is removed when the component drops.
#[cfg(target_arch = "wasm32")]
pub fn use_window_listener(event: &'static str, handler: impl FnMut(web_sys::Event) + 'static) {
    let target = web_sys::window().map(web_sys::EventTarget::from);
    use_event_listener(target, event, handler);
}

/// Same as [`use_window_listener`], but for document-level events.
#[cfg(target_arch = "wasm32")]
pub fn use_document_listener(event: &'static str, handler: impl FnMut(web_sys::Event) + 'static) {
    let target = web_sys::window()
        .and_then(|window| window.document())
        .map(web_sys::EventTarget::from);
    use_event_listener(target, event, handler);
}

#[cfg(target_arch = "wasm32")]
fn use_event_listener(
    target: Option<web_sys::EventTarget>,
    event: &'static str,
    handler: impl FnMut(web_sys::Event) + 'static,
) {
    use_hook(move || {
        let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(web_sys::Event)>);
        if let Some(target) = &target {
            tracing::debug!("hooks: attach {event} listener");
            let _ = target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
        }
        Rc::new(ListenerHandle {
            target,
            event,
            closure,
        })
    });
}
