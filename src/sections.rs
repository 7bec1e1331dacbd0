use dioxus::prelude::*;

use crate::nav::scroll_to_section;
use crate::typed::TypedIntro;

#[derive(Clone, Copy, Debug)]
pub struct Project {
    pub name: &'static str,
    pub summary: &'static str,
    pub stack: &'static [&'static str],
    pub link: &'static str,
}

pub const PROJECTS: &[Project] = &[
    Project {
        name: "ledgerline",
        summary: "Plain-text double-entry bookkeeping with a streaming importer and a reconciliation TUI.",
        stack: &["Rust", "SQLite", "ratatui"],
        link: "https://github.com/alexvega/ledgerline",
    },
    Project {
        name: "hopscotch",
        summary: "Latency-aware reverse proxy that hops traffic between regional backends during incidents.",
        stack: &["Rust", "tokio", "QUIC"],
        link: "https://github.com/alexvega/hopscotch",
    },
    Project {
        name: "inkwell-notes",
        summary: "Offline-first markdown notebook that syncs over WebRTC when peers are reachable.",
        stack: &["TypeScript", "CRDTs", "IndexedDB"],
        link: "https://github.com/alexvega/inkwell-notes",
    },
    Project {
        name: "gantry",
        summary: "Declarative homelab deployments: one TOML file in, systemd units and backups out.",
        stack: &["Rust", "systemd", "restic"],
        link: "https://github.com/alexvega/gantry",
    },
];

#[derive(Clone, Copy, Debug)]
pub struct ResumeEntry {
    pub period: &'static str,
    pub role: &'static str,
    pub company: &'static str,
    pub summary: &'static str,
}

pub const RESUME: &[ResumeEntry] = &[
    ResumeEntry {
        period: "2023 — present",
        role: "Senior Platform Engineer",
        company: "Driftworks",
        summary: "Own the edge-routing tier; cut p99 latency 40% and led the move to signed deploy artifacts.",
    },
    ResumeEntry {
        period: "2020 — 2023",
        role: "Backend Engineer",
        company: "Fernwood Labs",
        summary: "Built ingestion pipelines handling 2B events/day and the on-call tooling the team still swears by.",
    },
    ResumeEntry {
        period: "2017 — 2020",
        role: "Software Engineer",
        company: "Quarry",
        summary: "Full-stack product work; shipped the customer billing portal and its audit trail.",
    },
];

#[component]
pub fn HeroSection() -> Element {
    rsx! {
        section { id: "home", class: "section hero sweep",
            div { class: "section-inner",
                p { class: "hero-kicker reveal", "Hi, I'm Alex Vega." }
                h1 { class: "hero-title reveal", "Systems engineer & tinkerer" }
                TypedIntro {}
                div { class: "hero-actions reveal",
                    button {
                        r#type: "button",
                        class: "cta",
                        onclick: move |_| scroll_to_section("projects"),
                        "See my work"
                    }
                    button {
                        r#type: "button",
                        class: "cta ghost",
                        onclick: move |_| scroll_to_section("contact"),
                        "Get in touch"
                    }
                }
            }
        }
    }
}

#[component]
pub fn AboutSection() -> Element {
    rsx! {
        section { id: "about", class: "section sweep",
            div { class: "section-inner",
                h2 { class: "section-title reveal", "About" }
                p { class: "section-lead reveal",
                    "I spend my days keeping distributed systems honest and my evenings "
                    "breaking them on purpose in a homelab that has long outgrown its shelf."
                }
                div { class: "about-grid",
                    div { class: "about-card reveal",
                        h3 { "What I do" }
                        p {
                            "Network services, storage plumbing, and the observability to "
                            "prove they work. Mostly Rust and Go, with whatever the job needs on top."
                        }
                    }
                    div { class: "about-card reveal",
                        h3 { "What I care about" }
                        p {
                            "Boring deploys, readable failure modes, and documentation written "
                            "before the incident, not after."
                        }
                    }
                    div { class: "about-card reveal",
                        h3 { "Elsewhere" }
                        p {
                            "I write occasional field notes on self-hosting and review patches "
                            "for a couple of small open-source projects."
                        }
                    }
                }
            }
        }
    }
}

#[component]
pub fn ProjectsSection() -> Element {
    rsx! {
        section { id: "projects", class: "section sweep",
            div { class: "section-inner",
                h2 { class: "section-title reveal", "Projects" }
                div { class: "project-grid",
                    for project in PROJECTS {
                        article { key: "{project.name}", class: "project-card reveal",
                            h3 { "{project.name}" }
                            p { "{project.summary}" }
                            ul { class: "stack-tags",
                                for tag in project.stack {
                                    li { key: "{project.name}-{tag}", "{tag}" }
                                }
                            }
                            a {
                                href: "{project.link}",
                                target: "_blank",
                                rel: "noopener noreferrer",
                                class: "project-link",
                                "Source ↗"
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
pub fn ResumeSection() -> Element {
    rsx! {
        section { id: "resume", class: "section sweep",
            div { class: "section-inner",
                h2 { class: "section-title reveal", "Resume" }
                ol { class: "resume-list",
                    for entry in RESUME {
                        li { key: "{entry.company}", class: "resume-entry reveal",
                            span { class: "resume-period", "{entry.period}" }
                            div {
                                h3 { "{entry.role} · {entry.company}" }
                                p { "{entry.summary}" }
                            }
                        }
                    }
                }
                p { class: "resume-download reveal",
                    "A printable copy is available on request."
                }
            }
        }
    }
}
