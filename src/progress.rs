use dioxus::prelude::*;

/// Back-to-top appears once scrolled past this fraction of the viewport.
const TO_TOP_RATIO: f64 = 0.6;

/// Percentage of the scrollable range covered, clamped to [0, 100].
/// A page with nothing to scroll reports 0.
pub fn scroll_progress(scroll_y: f64, scroll_height: f64, viewport_height: f64) -> f64 {
    let total = scroll_height - viewport_height;
    if total <= 0.0 {
        return 0.0;
    }
    (scroll_y / total * 100.0).clamp(0.0, 100.0)
}

pub fn to_top_visible(scroll_y: f64, viewport_height: f64) -> bool {
    scroll_y > viewport_height * TO_TOP_RATIO
}

#[cfg(target_arch = "wasm32")]
fn measure_progress() -> f64 {
    let Some(window) = web_sys::window() else {
        return 0.0;
    };
    let Some(root) = window.document().and_then(|document| document.document_element()) else {
        return 0.0;
    };
    let scroll_y = window.scroll_y().unwrap_or(0.0);
    let viewport = window
        .inner_height()
        .ok()
        .and_then(|value| value.as_f64())
        .unwrap_or(0.0);
    scroll_progress(scroll_y, f64::from(root.scroll_height()), viewport)
}

#[cfg(target_arch = "wasm32")]
fn measure_to_top() -> bool {
    let Some(window) = web_sys::window() else {
        return false;
    };
    let scroll_y = window.scroll_y().unwrap_or(0.0);
    let viewport = window
        .inner_height()
        .ok()
        .and_then(|value| value.as_f64())
        .unwrap_or(0.0);
    to_top_visible(scroll_y, viewport)
}

fn scroll_to_origin() {
    #[cfg(target_arch = "wasm32")]
    {
        let Some(window) = web_sys::window() else {
            return;
        };
        let options = web_sys::ScrollToOptions::new();
        options.set_top(0.0);
        options.set_behavior(web_sys::ScrollBehavior::Smooth);
        window.scroll_to_with_scroll_to_options(&options);
    }
}

/// Thin bar pinned to the top of the viewport tracking scroll position.
#[component]
pub fn ProgressBar() -> Element {
    let mut pct = use_signal(|| 0.0f64);

    #[cfg(target_arch = "wasm32")]
    {
        let mut pct_for_scroll = pct;
        crate::hooks::use_window_listener("scroll", move |_event| {
            pct_for_scroll.set(measure_progress());
        });
        use_effect(move || pct.set(measure_progress()));
    }

    rsx! {
        div { id: "progress", class: "scroll-progress", style: "width: {pct()}%" }
    }
}

#[component]
pub fn BackToTop() -> Element {
    let mut visible = use_signal(|| false);

    #[cfg(target_arch = "wasm32")]
    {
        let mut visible_for_scroll = visible;
        crate::hooks::use_window_listener("scroll", move |_event| {
            visible_for_scroll.set(measure_to_top());
        });
        use_effect(move || visible.set(measure_to_top()));
    }

    rsx! {
        button {
            id: "toTop",
            r#type: "button",
            class: if visible() { "to-top" } else { "to-top hidden" },
            aria_label: "Back to top",
            onclick: move |_| scroll_to_origin(),
            "↑"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{scroll_progress, to_top_visible};

    #[test]
    fn zero_at_the_top() {
        assert_eq!(scroll_progress(0.0, 3000.0, 900.0), 0.0);
    }

    #[test]
    fn full_at_the_bottom() {
        assert_eq!(scroll_progress(2100.0, 3000.0, 900.0), 100.0);
    }

    #[test]
    fn proportional_in_between() {
        let pct = scroll_progress(1050.0, 3000.0, 900.0);
        assert!((pct - 50.0).abs() < 1e-9);
    }

    #[test]
    fn unscrollable_page_reports_zero() {
        assert_eq!(scroll_progress(0.0, 900.0, 900.0), 0.0);
        assert_eq!(scroll_progress(0.0, 500.0, 900.0), 0.0);
    }

    #[test]
    fn overscroll_is_clamped() {
        assert_eq!(scroll_progress(5000.0, 3000.0, 900.0), 100.0);
        assert_eq!(scroll_progress(-50.0, 3000.0, 900.0), 0.0);
    }

    #[test]
    fn to_top_threshold_is_sixty_percent_of_viewport() {
        assert!(!to_top_visible(540.0, 900.0));
        assert!(to_top_visible(540.1, 900.0));
        assert!(!to_top_visible(0.0, 900.0));
    }
}
