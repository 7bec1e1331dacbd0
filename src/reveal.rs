#[cfg(target_arch = "wasm32")]
use dioxus::prelude::*;
#[cfg(target_arch = "wasm32")]
use std::rc::Rc;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::{closure::Closure, JsCast, JsValue};

/// Fraction of an element that must be visible before it reveals.
#[cfg(target_arch = "wasm32")]
const REVEAL_THRESHOLD: f64 = 0.12;
/// How long a section keeps its sweep animation class.
#[cfg(target_arch = "wasm32")]
const SWEEP_MS: u32 = 1200;

#[cfg(target_arch = "wasm32")]
pub struct ObserverHandle {
    observer: web_sys::IntersectionObserver,
    _closure: Rc<Closure<dyn FnMut(js_sys::Array, web_sys::IntersectionObserver)>>,
}

#[cfg(target_arch = "wasm32")]
impl ObserverHandle {
    pub fn disconnect(&self) {
        self.observer.disconnect();
    }
}

/// Observes every `.reveal` element in `document` and marks each one
/// `show` the first time it intersects the viewport. The element is
/// unobserved immediately after, so a reveal never repeats. The first
/// reveal inside a `section.sweep` also triggers the section sweep.
#[cfg(target_arch = "wasm32")]
pub fn observe_reveals(document: &web_sys::Document) -> Option<ObserverHandle> {
    let Ok(targets) = document.query_selector_all(".reveal") else {
        return None;
    };
    if targets.length() == 0 {
        return None;
    }
    tracing::debug!("reveal: observing {} elements", targets.length());

    let closure = Rc::new(Closure::wrap(Box::new(
        move |entries: js_sys::Array, observer: web_sys::IntersectionObserver| {
            for entry in entries.iter() {
                let entry: web_sys::IntersectionObserverEntry = entry.unchecked_into();
                if !entry.is_intersecting() {
                    continue;
                }
                let target = entry.target();
                let _ = target.class_list().add_1("show");
                start_section_sweep(&target);
                observer.unobserve(&target);
            }
        },
    )
        as Box<dyn FnMut(js_sys::Array, web_sys::IntersectionObserver)>));

    let options = web_sys::IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(REVEAL_THRESHOLD));
    let Ok(observer) = web_sys::IntersectionObserver::new_with_options(
        closure.as_ref().as_ref().unchecked_ref(),
        &options,
    ) else {
        return None;
    };

    for index in 0..targets.length() {
        let Some(node) = targets.item(index) else {
            continue;
        };
        if let Ok(element) = node.dyn_into::<web_sys::Element>() {
            observer.observe(&element);
        }
    }

    Some(ObserverHandle {
        observer,
        _closure: closure,
    })
}

/// Marks the enclosing sweep section as animating and clears the mark
/// after the animation window. A section mid-sweep is left alone.
#[cfg(target_arch = "wasm32")]
fn start_section_sweep(target: &web_sys::Element) {
    let Ok(Some(section)) = target.closest("section.sweep") else {
        return;
    };
    let class_list = section.class_list();
    if class_list.contains("revealed") {
        return;
    }
    let _ = class_list.add_1("revealed");
    wasm_bindgen_futures::spawn_local(async move {
        gloo_timers::future::TimeoutFuture::new(SWEEP_MS).await;
        let _ = class_list.remove_1("revealed");
    });
}

/// Component-scoped wrapper: sets the observer up once after first
/// render and disconnects it when the page unmounts.
pub fn use_reveal_observer() {
    #[cfg(target_arch = "wasm32")]
    {
        let mut handle = use_signal(|| None::<ObserverHandle>);
        use_effect(move || {
            if handle.read().is_some() {
                return;
            }
            let Some(document) = web_sys::window().and_then(|window| window.document()) else {
                return;
            };
            if let Some(observer) = observe_reveals(&document) {
                handle.set(Some(observer));
            }
        });
        let handle = handle;
        use_drop(move || {
            if let Some(observer) = handle.read().as_ref() {
                observer.disconnect();
            }
        });
    }
}
