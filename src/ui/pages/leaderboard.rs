use dioxus::prelude::*;

use crate::core::campus_data::{BuildingScore, Trend, LEADERBOARD_DATA};

const PODIUM_SIZE: usize = 3;

/// Thousands-separated score, e.g. `2,840`.
pub fn format_score(score: u32) -> String {
    let digits = score.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// Energy delta from the building's point of view: savings read as a reduction.
pub fn energy_label(saved: i32) -> String {
    if saved >= 0 {
        format!("-{}kW", saved)
    } else {
        format!("+{}kW", saved.unsigned_abs())
    }
}

fn trend_badge(trend: Trend) -> (&'static str, &'static str) {
    match trend {
        Trend::Up => ("trend trend-up", "↗"),
        Trend::Down => ("trend trend-down", "↘"),
        Trend::Neutral => ("trend trend-neutral", "–"),
    }
}

fn medal_class(place: usize) -> &'static str {
    match place {
        0 => "medal medal-gold",
        1 => "medal medal-silver",
        _ => "medal medal-bronze",
    }
}

#[component]
pub fn Leaderboard() -> Element {
    let podium = &LEADERBOARD_DATA[..PODIUM_SIZE.min(LEADERBOARD_DATA.len())];

    rsx! {
        div { class: "page",
            header { class: "page-header",
                h2 { "Campus Leaderboard" }
                p { "Monthly sustainability championship between buildings." }
            }

            div { class: "podium",
                for (place, entry) in podium.iter().enumerate() {
                    PodiumCard { key: "{entry.name}", entry: *entry, place }
                }
            }

            div { class: "glass-panel table-card",
                table { class: "ranking-table",
                    thead {
                        tr {
                            th { "Rank" }
                            th { "Building Name" }
                            th { "Monthly Eco Score" }
                            th { "Trend" }
                        }
                    }
                    tbody {
                        for entry in LEADERBOARD_DATA.iter() {
                            RankingRow { key: "{entry.name}", entry: *entry }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn PodiumCard(entry: BuildingScore, place: usize) -> Element {
    let card_class = if place == 0 { "podium-card glass-panel leader" } else { "podium-card glass-panel" };
    let score = format_score(entry.score);
    let energy = energy_label(entry.energy_saved);

    rsx! {
        div { class: "{card_class}",
            div { class: "medal-wrap",
                div { class: medal_class(place), "🏅" }
                div { class: "rank-bubble", "{entry.rank}" }
            }
            h3 { "{entry.name}" }
            p { class: "podium-score", "{score} pts" }
            div { class: "podium-stats",
                div { class: "podium-stat",
                    span { "🌿" }
                    span { "{entry.waste_diverted}kg" }
                }
                div { class: "podium-stat",
                    span { "⚡" }
                    span { "{energy}" }
                }
            }
        }
    }
}

#[component]
fn RankingRow(entry: BuildingScore) -> Element {
    let score = format_score(entry.score);
    let (trend_class, trend_icon) = trend_badge(entry.trend);

    rsx! {
        tr {
            td { class: "rank-cell", "#{entry.rank}" }
            td { class: "name-cell", "{entry.name}" }
            td {
                span { class: "score-pill", "{score}" }
            }
            td {
                span { class: "{trend_class}", "{trend_icon}" }
            }
        }
    }
}
