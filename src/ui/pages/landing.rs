use dioxus::prelude::*;
use std::time::Duration;

use crate::gateway::EcoGateway;

const SLIDE_INTERVAL: Duration = Duration::from_secs(7);

/// Index of the slide after `current`. Stays put unless there is something
/// to rotate through.
pub fn next_slide(current: usize, count: usize) -> usize {
    if count < 2 { 0 } else { (current + 1) % count }
}

/// Public front page shown while signed out.
#[component]
pub fn Landing(on_start: EventHandler<()>, on_login: EventHandler<()>) -> Element {
    let gateway = use_context::<EcoGateway>();
    let mut slide = use_signal(|| 0usize);

    let images = use_resource(move || {
        let gateway = gateway.clone();
        async move { gateway.hero_images().await }
    });

    use_future(move || async move {
        loop {
            tokio::time::sleep(SLIDE_INTERVAL).await;
            let count = images.read().as_ref().map(Vec::len).unwrap_or(0);
            if count > 1 {
                slide.set(next_slide(slide(), count));
            }
        }
    });

    rsx! {
        div { class: "landing",
            div { class: "hero-backdrop",
                match &*images.read_unchecked() {
                    None => rsx! {
                        div { class: "hero-loading",
                            div { class: "spinner large" }
                            p { class: "eyebrow", "Generating AI Campus Visuals..." }
                        }
                    },
                    Some(list) if list.is_empty() => rsx! {
                        div { class: "hero-gradient" }
                    },
                    Some(list) => rsx! {
                        for (index, src) in list.iter().enumerate() {
                            div {
                                key: "{index}",
                                class: if index == slide() { "hero-slide active" } else { "hero-slide" },
                                img { src: "{src}", alt: "Slide {index}" }
                                div { class: "hero-veil" }
                            }
                        }
                    },
                }
            }

            div { class: "landing-content",
                div { class: "pill floating", "🌐 Sustainable Campus AI" }
                div { class: "glass-panel hero-card",
                    h1 { class: "hero-title",
                        "Smart Campus "
                        br {}
                        span { class: "accent", "Sustainability" }
                        " Assistant"
                    }
                    p { class: "hero-subtitle",
                        "Harnessing the power of AI to transform institutional waste, energy, and engagement "
                        "into a unified, eco-friendly experience."
                    }
                    div { class: "hero-actions",
                        button {
                            class: "primary-button large",
                            onclick: move |_| on_start.call(()),
                            "Get Started Now →"
                        }
                        button {
                            class: "ghost-button large",
                            onclick: move |_| on_login.call(()),
                            "Sign In to Dashboard"
                        }
                    }
                }

                div { class: "feature-grid",
                    FeatureCard {
                        icon: "📊",
                        title: "Energy Analysis",
                        desc: "AI-driven anomaly detection for campus energy networks.",
                    }
                    FeatureCard {
                        icon: "🌿",
                        title: "Smart Waste",
                        desc: "Predictive modeling for waste collection and recycling.",
                    }
                    FeatureCard {
                        icon: "🛡",
                        title: "Eco Rewards",
                        desc: "Gamified student participation for campus-wide impact.",
                    }
                }
            }
        }
    }
}

#[component]
fn FeatureCard(icon: &'static str, title: &'static str, desc: &'static str) -> Element {
    rsx! {
        div { class: "feature-card glass-panel float",
            div { class: "feature-icon", "{icon}" }
            h3 { "{title}" }
            p { "{desc}" }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next_slide_wraps() {
        assert_eq!(next_slide(0, 3), 1);
        assert_eq!(next_slide(2, 3), 0);
    }

    #[test]
    fn test_next_slide_without_rotation() {
        assert_eq!(next_slide(0, 0), 0);
        assert_eq!(next_slide(0, 1), 0);
    }
}
