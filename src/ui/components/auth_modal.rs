use dioxus::prelude::*;
use std::time::Duration;

use crate::core::auth::{self, AuthFormDraft, AuthMode};

/// Sign-in / registration dialog.
///
/// Mounted only while open, so every opening starts from an empty draft in
/// `initial_mode`. On submit it waits out the simulated round trip, then
/// reports the resolved display name through `on_success`.
#[component]
pub fn AuthModal(
    initial_mode: AuthMode,
    delay: Duration,
    on_close: EventHandler<()>,
    on_success: EventHandler<String>,
) -> Element {
    let mut mode = use_signal(|| initial_mode);
    let mut draft = use_signal(AuthFormDraft::default);
    let mut is_loading = use_signal(|| false);

    let (title, subtitle, submit_label, switch_label) = match mode() {
        AuthMode::Login => (
            "Welcome Back",
            "Log in to track your institutional impact.",
            "Sign In",
            "New here? Create an account",
        ),
        AuthMode::Register => (
            "Join EcoCampus",
            "Create an account to join the sustainability movement.",
            "Create Account",
            "Already registered? Sign In",
        ),
    };

    let onsubmit = move |evt: FormEvent| {
        evt.prevent_default();
        if is_loading() {
            return;
        }
        is_loading.set(true);
        let form = draft();
        spawn(async move {
            let name = auth::submit(form, delay).await;
            is_loading.set(false);
            on_success.call(name);
        });
    };

    rsx! {
        div { class: "modal-backdrop",
            div { class: "modal glass-panel", role: "dialog", aria_modal: "true",
                div { class: "modal-header",
                    div { class: "brand-badge", "🌿" }
                    button {
                        class: "icon-button",
                        aria_label: "Close",
                        onclick: move |_| on_close.call(()),
                        "✕"
                    }
                }

                h2 { class: "modal-title", "{title}" }
                p { class: "modal-subtitle", "{subtitle}" }

                form { class: "auth-form", onsubmit,
                    if mode() == AuthMode::Register {
                        input {
                            r#type: "text",
                            placeholder: "Full Name",
                            required: true,
                            value: "{draft.read().name}",
                            oninput: move |evt| draft.write().name = evt.value(),
                        }
                    }
                    input {
                        r#type: "email",
                        placeholder: "University Email",
                        required: true,
                        value: "{draft.read().email}",
                        oninput: move |evt| draft.write().email = evt.value(),
                    }
                    input {
                        r#type: "password",
                        placeholder: "Password",
                        required: true,
                        value: "{draft.read().password}",
                        oninput: move |evt| draft.write().password = evt.value(),
                    }
                    button {
                        class: "primary-button wide",
                        r#type: "submit",
                        disabled: is_loading(),
                        if is_loading() {
                            span { class: "spinner small" }
                        } else {
                            "{submit_label} →"
                        }
                    }
                }

                div { class: "demo-box",
                    p { class: "eyebrow", "Demo Access" }
                    button {
                        class: "link-button",
                        r#type: "button",
                        onclick: move |_| draft.write().fill_demo(),
                        "Click here to pre-fill test credentials."
                    }
                }

                div { class: "modal-footer",
                    button {
                        class: "link-button strong",
                        r#type: "button",
                        onclick: move |_| {
                            let next = mode().toggled();
                            mode.set(next);
                        },
                        "{switch_label}"
                    }
                }
            }
        }
    }
}
