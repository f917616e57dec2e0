use dioxus::prelude::*;

use crate::core::session::ThemeColor;

/// Blob colours for each theme: primary, secondary, tertiary.
pub fn blob_colors(theme: ThemeColor) -> [&'static str; 3] {
    match theme {
        ThemeColor::Amber => ["rgba(253, 230, 138, 0.4)", "rgba(254, 215, 170, 0.3)", "rgba(254, 240, 138, 0.3)"],
        ThemeColor::Blue => ["rgba(191, 219, 254, 0.4)", "rgba(186, 230, 253, 0.3)", "rgba(199, 210, 254, 0.3)"],
        ThemeColor::Emerald => ["rgba(167, 243, 208, 0.4)", "rgba(191, 219, 254, 0.3)", "rgba(253, 230, 138, 0.3)"],
    }
}

/// Decorative animated backdrop tinted by the current theme.
#[component]
pub fn LiquidBackground(theme: ThemeColor) -> Element {
    let [primary, secondary, tertiary] = blob_colors(theme);
    let class = format!("liquid-bg theme-{}", theme.as_str());

    rsx! {
        div { class: "{class}", aria_hidden: "true",
            div { class: "blob blob-primary", style: "background: {primary};" }
            div { class: "blob blob-secondary", style: "background: {secondary};" }
            div { class: "blob blob-tertiary", style: "background: {tertiary};" }
        }
    }
}
