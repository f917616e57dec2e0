//! Sidebar navigation.

use dioxus::prelude::*;

use crate::core::campus_data::NAVIGATION_ITEMS;
use crate::core::routes::View;

#[component]
pub fn Sidebar(
    current: View,
    on_navigate: EventHandler<View>,
    on_brand_click: EventHandler<()>,
) -> Element {
    rsx! {
        aside { class: "sidebar",
            div {
                class: "sidebar-brand",
                onclick: move |_| on_brand_click.call(()),
                div { class: "brand-badge", "🌿" }
                h1 { class: "brand-name", "EcoCampus" }
            }

            nav { class: "sidebar-nav",
                for item in NAVIGATION_ITEMS.iter() {
                    NavButton {
                        key: "{item.view}",
                        label: item.label,
                        icon: item.icon,
                        active: item.view == current,
                        onclick: {
                            let view = item.view;
                            move |_| on_navigate.call(view)
                        },
                    }
                }
            }

            div { class: "sidebar-footer",
                div { class: "performance-card",
                    p { class: "eyebrow", "My Performance" }
                    div { class: "performance-row",
                        span { "Eco Score" }
                        span { class: "performance-score", "842" }
                    }
                    div { class: "progress",
                        div { class: "progress-fill", style: "width: 70%;" }
                    }
                    p { class: "performance-note", "Top 5% on Campus" }
                }
            }
        }
    }
}

#[component]
fn NavButton(
    label: &'static str,
    icon: &'static str,
    active: bool,
    onclick: EventHandler<MouseEvent>,
) -> Element {
    let class = if active { "nav-item active" } else { "nav-item" };

    rsx! {
        button {
            class: "{class}",
            onclick: move |evt| onclick.call(evt),
            span { class: "nav-icon", "{icon}" }
            span { class: "nav-label", "{label}" }
            if active {
                span { class: "nav-dot" }
            }
        }
    }
}
