use dioxus::prelude::*;

/// Placement entry for one decorative background blob.
#[derive(Clone, Copy, Debug)]
pub struct Blob {
    pub left: &'static str,
    pub top: &'static str,
    pub size: u32,
    pub color: &'static str,
}

pub const BLOBS: [Blob; 3] = [
    Blob { left: "5%", top: "70%", size: 380, color: "rgba(124,58,237,0.07)" },
    Blob { left: "88%", top: "10%", size: 320, color: "rgba(6,182,212,0.06)" },
    Blob { left: "10%", top: "10%", size: 260, color: "rgba(124,58,237,0.05)" },
];

/// Deeper blobs drift faster, one notch per index.
pub fn blob_speed(index: usize) -> f64 {
    0.06 + index as f64 * 0.02
}

pub fn blob_transform(scroll_y: f64, index: usize) -> String {
    format!("translateY({}px)", scroll_y * blob_speed(index))
}

/// Fixed, non-interactive gradient blobs behind the content, shifted a
/// fraction of the scroll distance for a parallax depth illusion. Never
/// removed once mounted.
#[component]
pub fn ParallaxBlobs() -> Element {
    let scroll_y = use_signal(|| 0.0f64);

    #[cfg(target_arch = "wasm32")]
    {
        let mut scroll_for_listener = scroll_y;
        crate::hooks::use_window_listener("scroll", move |_event| {
            let Some(window) = web_sys::window() else {
                return;
            };
            scroll_for_listener.set(window.scroll_y().unwrap_or(0.0));
        });
    }

    let offset = scroll_y();
    rsx! {
        for (index, blob) in BLOBS.iter().enumerate() {
            div {
                key: "blob-{index}",
                class: "parallax-blob",
                aria_hidden: "true",
                style: "left: {blob.left}; top: {blob.top}; width: {blob.size}px; height: {blob.size}px; background: radial-gradient(circle at 30% 30%, {blob.color}, transparent 30%); transform: {blob_transform(offset, index)};",
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{blob_speed, blob_transform, BLOBS};

    #[test]
    fn speeds_step_linearly_per_blob() {
        assert!((blob_speed(0) - 0.06).abs() < 1e-12);
        assert!((blob_speed(1) - 0.08).abs() < 1e-12);
        assert!((blob_speed(2) - 0.10).abs() < 1e-12);
    }

    #[test]
    fn transform_scales_with_scroll() {
        assert_eq!(blob_transform(0.0, 0), "translateY(0px)");
        assert_eq!(blob_transform(100.0, 0), "translateY(6px)");
        assert_eq!(
            blob_transform(250.0, 1),
            format!("translateY({}px)", 250.0 * blob_speed(1))
        );
    }

    #[test]
    fn three_blobs_configured() {
        assert_eq!(BLOBS.len(), 3);
        assert!(BLOBS.windows(2).all(|pair| pair[0].size > pair[1].size));
    }
}
