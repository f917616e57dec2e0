use base64::{engine::general_purpose::STANDARD, Engine as _};
use dioxus::prelude::*;
use tracing::{info, warn};

use crate::core::campus_data::{latest_waste, palette};
use crate::gateway::EcoGateway;
use crate::ui::components::chart::{DonutChart, Segment};
use crate::ui::components::stat_card::MetricTile;

/// Guesses an image MIME type from the file extension.
pub fn mime_for_name(name: &str) -> &'static str {
    let ext = name
        .rsplit_once('.')
        .map(|(_, ext)| ext.to_ascii_lowercase())
        .unwrap_or_default();
    match ext.as_str() {
        "png" => "image/png",
        "gif" => "image/gif",
        "webp" => "image/webp",
        "bmp" => "image/bmp",
        _ => "image/jpeg",
    }
}

pub fn to_data_uri(name: &str, bytes: &[u8]) -> String {
    format!("data:{};base64,{}", mime_for_name(name), STANDARD.encode(bytes))
}

/// Breakdown of the newest waste record.
fn composition() -> Vec<Segment> {
    let Some(record) = latest_waste() else {
        return Vec::new();
    };
    vec![
        Segment { label: "Dry Waste", color: palette::DRY, value: record.dry as f64 },
        Segment { label: "Wet Waste", color: palette::WET, value: record.wet as f64 },
        Segment { label: "Recyclable", color: palette::RECYCLABLE, value: record.recyclable as f64 },
    ]
}

#[component]
pub fn WasteModule() -> Element {
    let gateway = use_context::<EcoGateway>();
    let mut preview = use_signal(|| None::<String>);
    let mut result = use_signal(|| None::<String>);
    let mut is_analyzing = use_signal(|| false);

    let onchange = move |evt: FormEvent| {
        let Some(file) = evt.files().into_iter().next() else {
            return;
        };
        let gateway = gateway.clone();
        spawn(async move {
            let name = file.name();
            let bytes = match file.read_bytes().await {
                Ok(bytes) => bytes,
                Err(e) => {
                    warn!("Could not read {}: {}", name, e);
                    return;
                }
            };
            info!("Classifying {} ({} bytes)", name, bytes.len());

            let uri = to_data_uri(&name, &bytes);
            preview.set(Some(uri.clone()));
            is_analyzing.set(true);
            let verdict = gateway.classify_waste_image(&uri).await;
            result.set(Some(verdict));
            is_analyzing.set(false);
        });
    };

    rsx! {
        div { class: "page",
            header { class: "page-header",
                h2 { "Waste Intelligence" }
                p { "Real-time segregation tracking and AI analysis." }
            }

            div { class: "glass-panel vision-card",
                label { class: "upload-box",
                    if let Some(src) = preview() {
                        img { class: "upload-preview", src: "{src}" }
                    } else {
                        div { class: "upload-placeholder",
                            span { class: "upload-icon", "📷" }
                            p { "Snap a photo of your waste" }
                        }
                    }
                    input {
                        class: "hidden",
                        r#type: "file",
                        accept: "image/*",
                        multiple: false,
                        onchange,
                    }
                    span { class: "upload-hint", "Upload Image" }
                }

                div { class: "vision-copy",
                    h3 { "✦ AI Segregator" }
                    p {
                        "Not sure where it goes? Our AI vision model identifies trash items and ensures "
                        "they end up in the right bin to maximize campus recycling."
                    }
                    div { class: "vision-result",
                        if is_analyzing() {
                            div { class: "loading-container",
                                div { class: "spinner" }
                                p { class: "eyebrow accent", "Analyzing Material..." }
                            }
                        } else if let Some(text) = result() {
                            div {
                                p { class: "eyebrow accent", "✔ Analysis Complete" }
                                p { class: "vision-text", "{text}" }
                            }
                        } else {
                            p { class: "muted", "Upload an image to start analysis" }
                        }
                    }
                }
            }

            div { class: "module-grid",
                div { class: "glass-panel",
                    h3 { class: "card-title", "Current Composition" }
                    DonutChart { segments: composition() }
                }
                div { class: "tile-pair",
                    MetricTile {
                        icon: "♻",
                        title: "Recycling Rate",
                        value: "32.4%",
                        caption: "↗ +2.1% this month",
                    }
                    MetricTile {
                        icon: "🌿",
                        title: "Organic Waste",
                        value: "420kg",
                        caption: "Diverted to Composting",
                    }
                }
            }
        }
    }
}
