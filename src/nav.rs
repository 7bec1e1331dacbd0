use dioxus::prelude::*;
#[cfg(target_arch = "wasm32")]
use std::rc::Rc;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::{closure::Closure, JsCast};

use crate::theme::ThemeToggle;

/// Page sections in document order. Active-link tracking walks this list
/// top to bottom, so order matters.
pub const SECTION_IDS: [&str; 5] = ["home", "about", "projects", "resume", "contact"];

/// A section counts as current once its top passes 35% of the viewport.
const ACTIVE_ZONE_RATIO: f64 = 0.35;
#[cfg(target_arch = "wasm32")]
const RESIZE_SETTLE_MS: i32 = 150;

pub fn nav_label(id: &str) -> &'static str {
    match id {
        "home" => "Home",
        "about" => "About",
        "projects" => "Projects",
        "resume" => "Resume",
        _ => "Contact",
    }
}

/// Picks the last section whose top offset sits above the scroll
/// position plus the active zone. Falls back to the first section.
pub fn active_section<'a>(
    scroll_y: f64,
    viewport_height: f64,
    section_tops: &[(&'a str, f64)],
) -> &'a str {
    let offset = scroll_y + viewport_height * ACTIVE_ZONE_RATIO;
    let mut current = SECTION_IDS[0];
    for (id, top) in section_tops.iter().copied() {
        if top <= offset {
            current = id;
        }
    }
    current
}

/// Smooth-scrolls the section with `id` into view. Missing sections are
/// skipped silently.
pub fn scroll_to_section(id: &str) {
    #[cfg(target_arch = "wasm32")]
    {
        let Some(document) = web_sys::window().and_then(|window| window.document()) else {
            return;
        };
        let Some(element) = document.get_element_by_id(id) else {
            return;
        };
        let options = web_sys::ScrollIntoViewOptions::new();
        options.set_behavior(web_sys::ScrollBehavior::Smooth);
        options.set_block(web_sys::ScrollLogicalPosition::Start);
        element.scroll_into_view_with_scroll_into_view_options(&options);
    }
    #[cfg(not(target_arch = "wasm32"))]
    let _ = id;
}

#[cfg(target_arch = "wasm32")]
struct TimeoutHandle {
    id: i32,
    _closure: Rc<Closure<dyn FnMut()>>,
}

#[cfg(target_arch = "wasm32")]
fn measure_section_tops(document: &web_sys::Document) -> Vec<(&'static str, f64)> {
    SECTION_IDS
        .iter()
        .filter_map(|id| {
            let element = document.get_element_by_id(id)?;
            let element: web_sys::HtmlElement = element.dyn_into().ok()?;
            Some((*id, f64::from(element.offset_top())))
        })
        .collect()
}

#[cfg(target_arch = "wasm32")]
fn update_active(mut active: Signal<String>) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let Some(document) = window.document() else {
        return;
    };
    let scroll_y = window.scroll_y().unwrap_or(0.0);
    let viewport = window
        .inner_height()
        .ok()
        .and_then(|value| value.as_f64())
        .unwrap_or(0.0);
    let tops = measure_section_tops(&document);
    let next = active_section(scroll_y, viewport, &tops);
    if *active.peek() != next {
        active.set(next.to_string());
    }
}

/// Re-measures after the viewport settles. A fresh resize cancels the
/// pending recompute, so only the last one runs.
#[cfg(target_arch = "wasm32")]
fn schedule_active_recompute(active: Signal<String>, mut debounce: Signal<Option<TimeoutHandle>>) {
    let Some(window) = web_sys::window() else {
        return;
    };
    if let Some(handle) = debounce.read().as_ref() {
        window.clear_timeout_with_handle(handle.id);
    }
    let closure = Rc::new(Closure::wrap(Box::new(move || {
        update_active(active);
    }) as Box<dyn FnMut()>));
    let Ok(id) = window.set_timeout_with_callback_and_timeout_and_arguments_0(
        closure.as_ref().as_ref().unchecked_ref(),
        RESIZE_SETTLE_MS,
    ) else {
        return;
    };
    debounce.set(Some(TimeoutHandle { id, _closure: closure }));
}

#[component]
pub fn NavBar(drawer_open: Signal<bool>) -> Element {
    let active = use_signal(|| SECTION_IDS[0].to_string());
    let mut drawer_open = drawer_open;

    #[cfg(target_arch = "wasm32")]
    {
        let debounce = use_signal(|| None::<TimeoutHandle>);
        let active_for_scroll = active;
        crate::hooks::use_window_listener("scroll", move |_event| {
            update_active(active_for_scroll);
        });
        let active_for_resize = active;
        crate::hooks::use_window_listener("resize", move |_event| {
            schedule_active_recompute(active_for_resize, debounce);
        });
        use_effect(move || update_active(active));
        use_drop(move || {
            if let Some(handle) = debounce.read().as_ref() {
                if let Some(window) = web_sys::window() {
                    window.clear_timeout_with_handle(handle.id);
                }
            }
        });
    }

    rsx! {
        header { class: "site-nav",
            a {
                class: "brand",
                href: "#home",
                onclick: move |event| {
                    event.prevent_default();
                    scroll_to_section("home");
                },
                "AV"
            }
            nav { class: "nav-links", aria_label: "Section navigation",
                for id in SECTION_IDS {
                    a {
                        key: "{id}",
                        class: if active() == id { "nav-link active" } else { "nav-link" },
                        href: "#{id}",
                        onclick: move |event| {
                            event.prevent_default();
                            scroll_to_section(id);
                            if *drawer_open.peek() {
                                drawer_open.set(false);
                            }
                        },
                        {nav_label(id)}
                    }
                }
            }
            div { class: "nav-actions",
                ThemeToggle {}
                button {
                    id: "menuBtn",
                    r#type: "button",
                    class: "menu-button",
                    aria_label: "Open menu",
                    onclick: move |_| drawer_open.set(true),
                    "☰"
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{active_section, nav_label, SECTION_IDS};

    fn tops() -> Vec<(&'static str, f64)> {
        SECTION_IDS
            .iter()
            .enumerate()
            .map(|(index, id)| (*id, index as f64 * 800.0))
            .collect()
    }

    #[test]
    fn defaults_to_home_at_the_top() {
        assert_eq!(active_section(0.0, 900.0, &tops()), "home");
    }

    #[test]
    fn picks_the_last_section_above_the_active_zone() {
        // scroll_y + 35% of viewport = 2000 + 315, past projects (1600)
        // but short of resume (2400).
        assert_eq!(active_section(2000.0, 900.0, &tops()), "projects");
    }

    #[test]
    fn boundary_is_inclusive() {
        // offset_top == scroll_y + 0.35 * viewport selects the section.
        let viewport = 1000.0;
        let scroll_y = 800.0 - viewport * 0.35;
        assert_eq!(active_section(scroll_y, viewport, &tops()), "about");
        assert_eq!(active_section(scroll_y - 1.0, viewport, &tops()), "home");
    }

    #[test]
    fn deep_scroll_lands_on_the_last_section() {
        assert_eq!(active_section(10_000.0, 900.0, &tops()), "contact");
    }

    #[test]
    fn missing_sections_are_skipped() {
        let partial = [("home", 0.0), ("contact", 3200.0)];
        assert_eq!(active_section(1000.0, 900.0, &partial), "home");
    }

    #[test]
    fn every_section_has_a_label() {
        for id in SECTION_IDS {
            assert!(!nav_label(id).is_empty());
        }
    }
}
