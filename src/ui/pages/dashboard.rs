use dioxus::prelude::*;

use crate::core::campus_data::{palette, CAMPUS_STATS, WASTE_DATA};
use crate::gateway::EcoGateway;
use crate::ui::components::chart::{LineChart, Series};
use crate::ui::components::stat_card::StatCard;

/// Overview page: headline stats, the waste trend, and the AI "Campus Pulse".
#[component]
pub fn Dashboard() -> Element {
    let gateway = use_context::<EcoGateway>();

    // Generated once per mount.
    let insight = use_resource(move || {
        let gateway = gateway.clone();
        async move { gateway.proactive_insight().await }
    });

    let labels: Vec<&'static str> = WASTE_DATA.iter().map(|r| r.date).collect();
    let series = vec![
        Series {
            label: "Dry",
            color: palette::DRY,
            values: WASTE_DATA.iter().map(|r| r.dry as f64).collect(),
        },
        Series {
            label: "Wet",
            color: palette::WET,
            values: WASTE_DATA.iter().map(|r| r.wet as f64).collect(),
        },
    ];

    rsx! {
        div { class: "page",
            header { class: "page-header",
                h2 { "Campus Intelligence" }
                p { "Aggregated real-time metrics and AI forecasts." }
            }

            div { class: "stat-grid",
                for (index, stat) in CAMPUS_STATS.iter().enumerate() {
                    StatCard {
                        key: "{stat.label}",
                        label: stat.label,
                        value: stat.value,
                        tone: stat.tone,
                        index,
                    }
                }
            }

            div { class: "dashboard-grid",
                div { class: "glass-panel wide-card",
                    LineChart { title: "Resource Efficiency Trends", labels, series }
                }

                div { class: "glass-panel pulse-card",
                    div { class: "pulse-header",
                        div { class: "pulse-badge", "✦" }
                        div {
                            h3 { "Campus Pulse" }
                            span { class: "eyebrow accent", "Deep AI Reasoning" }
                        }
                    }

                    div { class: "pulse-body",
                        match &*insight.read_unchecked() {
                            Some(text) => rsx! {
                                p { class: "pulse-text", "{text}" }
                                div { class: "priority-task",
                                    p { class: "eyebrow accent", "Priority Task" }
                                    p { "Review building B sensor battery levels before the weekend peak." }
                                }
                            },
                            None => rsx! {
                                div { class: "loading-container", aria_busy: "true",
                                    div { class: "spinner" }
                                    p { class: "eyebrow", "Synthesizing Data..." }
                                }
                            },
                        }
                    }
                }
            }

            div { class: "hackathon-banner",
                div { class: "banner-copy",
                    span { class: "pill", "Limited Time" }
                    h3 { "Campus Eco-Hackathon" }
                    p {
                        "Collaborate with peers to develop the next generation of smart sensors. "
                        "Winners receive full project funding and mentorship."
                    }
                    div { class: "banner-actions",
                        button { class: "primary-button", "Join the Lab" }
                        button { class: "ghost-button", "View Schedule" }
                    }
                }
                div { class: "banner-art", "🌿" }
            }
        }
    }
}
