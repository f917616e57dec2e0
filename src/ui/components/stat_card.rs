use dioxus::prelude::*;

use crate::core::campus_data::StatTone;

pub fn tone_icon(tone: StatTone) -> &'static str {
    match tone {
        StatTone::Positive => "♻",
        StatTone::Info => "⚡",
        StatTone::Warning => "⚠",
        StatTone::Water => "💧",
    }
}

fn tone_class(tone: StatTone) -> &'static str {
    match tone {
        StatTone::Positive => "tone-positive",
        StatTone::Info => "tone-info",
        StatTone::Warning => "tone-warning",
        StatTone::Water => "tone-water",
    }
}

/// Floating headline metric. `index` staggers the float animation.
#[component]
pub fn StatCard(label: &'static str, value: &'static str, tone: StatTone, index: usize) -> Element {
    let delay = format!("animation-delay: {:.1}s;", index as f64 * 0.5);
    let icon_class = format!("stat-icon {}", tone_class(tone));
    let icon = tone_icon(tone);

    rsx! {
        div { class: "stat-card glass-panel float", style: "{delay}",
            div {
                p { class: "eyebrow", "{label}" }
                p { class: "stat-value", "{value}" }
            }
            div { class: "{icon_class}", "{icon}" }
        }
    }
}

/// Larger metric tile with a caption line, used by the module pages.
#[component]
pub fn MetricTile(icon: &'static str, title: &'static str, value: &'static str, caption: &'static str) -> Element {
    rsx! {
        div { class: "metric-tile glass-panel",
            div { class: "metric-tile-header",
                span { class: "metric-tile-icon", "{icon}" }
                h4 { "{title}" }
            }
            div {
                p { class: "metric-tile-value", "{value}" }
                p { class: "metric-tile-caption", "{caption}" }
            }
        }
    }
}
