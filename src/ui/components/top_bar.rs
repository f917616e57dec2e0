//! Header bar and the full-screen mobile menu.

use dioxus::prelude::*;

use crate::core::auth::AuthMode;
use crate::core::routes::View;
use crate::core::session::SessionSnapshot;

#[component]
pub fn TopBar(
    snapshot: SessionSnapshot,
    on_toggle_menu: EventHandler<()>,
    on_brand_click: EventHandler<()>,
    on_toggle_dropdown: EventHandler<()>,
    on_logout: EventHandler<()>,
    on_open_auth: EventHandler<AuthMode>,
) -> Element {
    let menu_icon = if snapshot.flags.mobile_menu_open { "✕" } else { "☰" };

    rsx! {
        nav { class: "top-bar glass-panel",
            div { class: "left-section",
                if snapshot.is_authenticated() {
                    button {
                        class: "menu-button",
                        aria_label: "Toggle menu",
                        onclick: move |_| on_toggle_menu.call(()),
                        "{menu_icon}"
                    }
                }
                div {
                    class: "brand",
                    onclick: move |_| on_brand_click.call(()),
                    span { class: "brand-leaf", "🌿" }
                    span { class: "brand-name", "EcoCampus" }
                }
                if snapshot.is_authenticated() {
                    div { class: "search",
                        input { r#type: "text", placeholder: "Search campus data..." }
                    }
                }
            }

            div { class: "right-section",
                if let Some(name) = snapshot.user_name.clone() {
                    button { class: "icon-button bell", aria_label: "Notifications",
                        "🔔"
                        span { class: "bell-dot" }
                    }
                    div { class: "divider" }
                    div { class: "user-menu",
                        div {
                            class: "user-chip",
                            onclick: move |_| on_toggle_dropdown.call(()),
                            span { class: "user-name", "{name}" }
                            div { class: "avatar user", "👤" }
                        }
                        if snapshot.flags.user_dropdown_open {
                            div { class: "dropdown glass-panel",
                                button {
                                    class: "dropdown-item danger",
                                    onclick: move |_| on_logout.call(()),
                                    "⎋ Sign Out"
                                }
                            }
                        }
                    }
                } else {
                    button {
                        class: "link-button",
                        onclick: move |_| on_open_auth.call(AuthMode::Login),
                        "Login"
                    }
                    button {
                        class: "primary-button pill-button",
                        onclick: move |_| on_open_auth.call(AuthMode::Register),
                        "Get Started"
                    }
                }
            }
        }
    }
}

/// Full-screen navigation overlay for narrow windows. Items are addressed by
/// view id.
#[component]
pub fn MobileMenu(
    current: View,
    on_select: EventHandler<&'static str>,
    on_brand_click: EventHandler<()>,
    on_close: EventHandler<()>,
) -> Element {
    rsx! {
        div { class: "mobile-menu",
            div { class: "mobile-menu-header",
                div {
                    class: "brand",
                    onclick: move |_| on_brand_click.call(()),
                    span { class: "brand-leaf", "🌿" }
                    span { class: "brand-name", "EcoCampus" }
                }
                button { class: "icon-button", onclick: move |_| on_close.call(()), "✕" }
            }
            div { class: "mobile-menu-items",
                for view in View::ALL {
                    button {
                        key: "{view}",
                        class: if view == current { "mobile-item active" } else { "mobile-item" },
                        onclick: move |_| on_select.call(view.id()),
                        span { class: "capitalize", "{view}" }
                    }
                }
            }
            p { class: "mobile-menu-footer", "EcoCampus v1.0 • Built for the Planet" }
        }
    }
}
