use dioxus::prelude::*;

pub const TYPED_LINE: &str = "I build fast, reliable software for the web.";
#[cfg(target_arch = "wasm32")]
const TYPE_START_DELAY_MS: u32 = 500;
#[cfg(target_arch = "wasm32")]
const TYPE_SPEED_MS: u32 = 50;

/// First `chars_shown` characters of `full`, char-boundary safe.
pub fn typed_prefix(full: &str, chars_shown: usize) -> &str {
    match full.char_indices().nth(chars_shown) {
        Some((index, _)) => &full[..index],
        None => full,
    }
}

/// Hero line revealed one character at a time after a short delay. Runs
/// once; never restarts.
#[component]
pub fn TypedIntro() -> Element {
    let mut shown = use_signal(|| 0usize);
    let mut started = use_signal(|| false);

    use_effect(move || {
        if started() {
            return;
        }
        started.set(true);
        spawn(async move {
            #[cfg(target_arch = "wasm32")]
            {
                use gloo_timers::future::TimeoutFuture;

                let total = TYPED_LINE.chars().count();
                TimeoutFuture::new(TYPE_START_DELAY_MS).await;
                while *shown.peek() < total {
                    TimeoutFuture::new(TYPE_SPEED_MS).await;
                    shown.set(*shown.peek() + 1);
                }
            }
            #[cfg(not(target_arch = "wasm32"))]
            shown.set(TYPED_LINE.chars().count());
        });
    });

    rsx! {
        p { id: "typed-line", class: "typed-line", {typed_prefix(TYPED_LINE, shown())} }
    }
}

#[cfg(test)]
mod tests {
    use super::{typed_prefix, TYPED_LINE};

    #[test]
    fn starts_empty() {
        assert_eq!(typed_prefix(TYPED_LINE, 0), "");
    }

    #[test]
    fn grows_one_character_per_step() {
        assert_eq!(typed_prefix("abc", 1), "a");
        assert_eq!(typed_prefix("abc", 2), "ab");
        assert_eq!(typed_prefix("abc", 3), "abc");
    }

    #[test]
    fn saturates_past_the_end() {
        assert_eq!(typed_prefix("abc", 10), "abc");
        let total = TYPED_LINE.chars().count();
        assert_eq!(typed_prefix(TYPED_LINE, total + 5), TYPED_LINE);
    }

    #[test]
    fn respects_multibyte_boundaries() {
        assert_eq!(typed_prefix("héllo", 2), "hé");
    }
}
