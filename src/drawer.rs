use dioxus::prelude::*;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::JsCast;

use crate::nav::{nav_label, scroll_to_section, SECTION_IDS};

/// Off-canvas navigation panel for small viewports. Closed by the close
/// button, the backdrop, Escape, or following any link.
#[component]
pub fn MobileDrawer(open: Signal<bool>) -> Element {
    let mut open = open;

    #[cfg(target_arch = "wasm32")]
    crate::hooks::use_document_listener("keyup", move |event| {
        let Some(key_event) = event.dyn_ref::<web_sys::KeyboardEvent>() else {
            return;
        };
        if key_event.key() == "Escape" && *open.peek() {
            open.set(false);
        }
    });

    rsx! {
        div {
            id: "mobileDrawer",
            class: if open() { "drawer" } else { "drawer hidden" },
            aria_hidden: if open() { "false" } else { "true" },
            div {
                id: "drawerBg",
                class: "drawer-bg",
                onclick: move |_| open.set(false),
            }
            aside { class: "drawer-panel", aria_label: "Mobile navigation",
                button {
                    id: "closeDrawer",
                    r#type: "button",
                    class: "drawer-close",
                    aria_label: "Close menu",
                    onclick: move |_| open.set(false),
                    "✕"
                }
                nav { class: "drawer-links",
                    for id in SECTION_IDS {
                        a {
                            key: "drawer-{id}",
                            class: "nav-link",
                            href: "#{id}",
                            onclick: move |event| {
                                event.prevent_default();
                                scroll_to_section(id);
                                open.set(false);
                            },
                            {nav_label(id)}
                        }
                    }
                }
            }
        }
    }
}
