use dioxus::prelude::*;
use dioxus_router::{Link, Routable, Router};

use crate::blobs::ParallaxBlobs;
use crate::contact::ContactSection;
use crate::date::current_year;
use crate::drawer::MobileDrawer;
use crate::nav::NavBar;
use crate::progress::{BackToTop, ProgressBar};
use crate::reveal::use_reveal_observer;
use crate::sections::{AboutSection, HeroSection, ProjectsSection, ResumeSection};
use crate::theme;

const FAVICON: Asset = asset!("/assets/favicon.svg");
const MAIN_CSS: Asset = asset!("/assets/main.css");

#[component]
pub fn App() -> Element {
    let theme = use_signal(theme::load_theme);
    use_context_provider(|| theme);
    use_effect(move || theme::apply_theme(theme()));

    rsx! {
        document::Link { rel: "icon", href: FAVICON }
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        document::Meta { name: "theme-color", content: "#7c3aed" }
        Router::<Route> {}
    }
}

#[derive(Clone, PartialEq, Routable)]
pub enum Route {
    #[route("/")]
    Home {},
    #[route("/:..route")]
    NotFound { route: Vec<String> },
}

#[component]
fn Home() -> Element {
    let drawer_open = use_signal(|| false);
    use_reveal_observer();

    rsx! {
        document::Title { "Alex Vega — Portfolio" }
        document::Meta {
            name: "description",
            content: "Systems engineer. Projects, resume, and a way to get in touch.",
        }
        ProgressBar {}
        NavBar { drawer_open }
        MobileDrawer { open: drawer_open }
        ParallaxBlobs {}
        main { class: "page",
            HeroSection {}
            AboutSection {}
            ProjectsSection {}
            ResumeSection {}
            ContactSection {}
        }
        BackToTop {}
        footer { class: "site-footer",
            p {
                "© " span { id: "year", "{current_year()}" } " Alex Vega · built with a static page and too much coffee"
            }
        }
    }
}

#[component]
fn NotFound(route: Vec<String>) -> Element {
    let path = route.join("/");
    rsx! {
        document::Title { "Not Found — Alex Vega" }
        div { class: "page not-found",
            h1 { "404" }
            p { "Nothing lives at /{path}." }
            Link { to: Route::Home {}, class: "nav-link", "Back home" }
        }
    }
}
