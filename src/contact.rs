use dioxus::prelude::*;

#[cfg(target_arch = "wasm32")]
const SEND_DELAY_MS: u32 = 900;
#[cfg(target_arch = "wasm32")]
const SENT_NOTICE: &str =
    "Thank you! This is a demo form — integrate a backend or email service for live messages.";

#[derive(Clone, Debug, Default, PartialEq)]
struct ContactForm {
    name: String,
    email: String,
    message: String,
}

/// Contact section with a simulated submission: no network, just a short
/// pending state, a confirmation dialog, and a field reset.
#[component]
pub fn ContactSection() -> Element {
    let mut form = use_signal(ContactForm::default);
    let mut sending = use_signal(|| false);

    rsx! {
        section { id: "contact", class: "section sweep",
            div { class: "section-inner reveal",
                h2 { class: "section-title", "Contact" }
                p { class: "section-lead",
                    "Have a project in mind, or just want to say hello? Drop a line below."
                }
                form {
                    id: "contactForm",
                    class: "contact-form",
                    onsubmit: move |event| {
                        event.prevent_default();
                        if *sending.peek() {
                            return;
                        }
                        sending.set(true);
                        tracing::debug!("contact: simulated submit");
                        spawn(async move {
                            #[cfg(target_arch = "wasm32")]
                            gloo_timers::future::TimeoutFuture::new(SEND_DELAY_MS).await;
                            sending.set(false);
                            notify_sent();
                            form.set(ContactForm::default());
                        });
                    },
                    div { class: "form-row",
                        label { r#for: "contact-name", "Name" }
                        input {
                            id: "contact-name",
                            r#type: "text",
                            value: "{form().name}",
                            autocomplete: "name",
                            required: true,
                            oninput: move |event| {
                                let mut next = form();
                                next.name = event.value();
                                form.set(next);
                            },
                        }
                    }
                    div { class: "form-row",
                        label { r#for: "contact-email", "Email" }
                        input {
                            id: "contact-email",
                            r#type: "email",
                            value: "{form().email}",
                            autocomplete: "email",
                            required: true,
                            oninput: move |event| {
                                let mut next = form();
                                next.email = event.value();
                                form.set(next);
                            },
                        }
                    }
                    div { class: "form-row",
                        label { r#for: "contact-message", "Message" }
                        textarea {
                            id: "contact-message",
                            rows: "6",
                            value: "{form().message}",
                            required: true,
                            oninput: move |event| {
                                let mut next = form();
                                next.message = event.value();
                                form.set(next);
                            },
                        }
                    }
                    button {
                        r#type: "submit",
                        class: "contact-submit",
                        disabled: sending(),
                        if sending() { "Sending..." } else { "Send Message" }
                    }
                }
            }
        }
    }
}

fn notify_sent() {
    #[cfg(target_arch = "wasm32")]
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(SENT_NOTICE);
    }
}
