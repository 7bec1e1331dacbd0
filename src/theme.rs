use dioxus::prelude::*;
#[cfg(target_arch = "wasm32")]
use gloo_storage::{LocalStorage, Storage};

pub const THEME_STORAGE_KEY: &str = "site-theme";
#[cfg(target_arch = "wasm32")]
const LIGHT_THEME_CLASS: &str = "light-theme";
#[cfg(target_arch = "wasm32")]
const PULSE_MS: u32 = 420;

/// Visual theme. Dark is the default set of CSS variables; light is
/// opted into via a class on the document root.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    Light,
    #[default]
    Dark,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// Anything other than a stored "light" means dark.
    pub fn from_stored(value: Option<&str>) -> Self {
        match value {
            Some("light") => Theme::Light,
            _ => Theme::Dark,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

pub fn load_theme() -> Theme {
    #[cfg(target_arch = "wasm32")]
    {
        let stored = LocalStorage::raw().get_item(THEME_STORAGE_KEY).ok().flatten();
        Theme::from_stored(stored.as_deref())
    }
    #[cfg(not(target_arch = "wasm32"))]
    Theme::default()
}

pub fn store_theme(theme: Theme) {
    #[cfg(target_arch = "wasm32")]
    {
        let _ = LocalStorage::raw().set_item(THEME_STORAGE_KEY, theme.as_str());
    }
    #[cfg(not(target_arch = "wasm32"))]
    let _ = theme;
}

/// Toggles the light-theme class on the document root to match `theme`.
pub fn apply_theme(theme: Theme) {
    #[cfg(target_arch = "wasm32")]
    {
        let Some(root) = web_sys::window()
            .and_then(|window| window.document())
            .and_then(|document| document.document_element())
        else {
            return;
        };
        let class_list = root.class_list();
        let result = match theme {
            Theme::Light => class_list.add_1(LIGHT_THEME_CLASS),
            Theme::Dark => class_list.remove_1(LIGHT_THEME_CLASS),
        };
        if result.is_err() {
            tracing::debug!("theme: failed to update root class");
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    let _ = theme;
}

#[component]
pub fn ThemeToggle() -> Element {
    let mut theme = use_context::<Signal<Theme>>();
    let mut pulsing = use_signal(|| false);

    rsx! {
        button {
            id: "themeToggle",
            r#type: "button",
            class: if pulsing() { "theme-toggle pulse" } else { "theme-toggle" },
            aria_label: "Toggle color theme",
            onclick: move |_| {
                let next = theme().toggled();
                theme.set(next);
                store_theme(next);
                tracing::debug!("theme: switched to {}", next.as_str());
                if *pulsing.peek() {
                    return;
                }
                pulsing.set(true);
                spawn(async move {
                    #[cfg(target_arch = "wasm32")]
                    gloo_timers::future::TimeoutFuture::new(PULSE_MS).await;
                    pulsing.set(false);
                });
            },
            if theme() == Theme::Light { "☀" } else { "☾" }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Theme;

    #[test]
    fn stored_light_maps_to_light() {
        assert_eq!(Theme::from_stored(Some("light")), Theme::Light);
    }

    #[test]
    fn missing_or_unknown_values_default_to_dark() {
        assert_eq!(Theme::from_stored(None), Theme::Dark);
        assert_eq!(Theme::from_stored(Some("dark")), Theme::Dark);
        assert_eq!(Theme::from_stored(Some("solarized")), Theme::Dark);
    }

    #[test]
    fn round_trips_through_stored_form() {
        for theme in [Theme::Light, Theme::Dark] {
            assert_eq!(Theme::from_stored(Some(theme.as_str())), theme);
        }
    }

    #[test]
    fn toggle_flips_between_the_two_states() {
        assert_eq!(Theme::Dark.toggled(), Theme::Light);
        assert_eq!(Theme::Light.toggled(), Theme::Dark);
        assert_eq!(Theme::Dark.toggled().toggled(), Theme::Dark);
    }
}
