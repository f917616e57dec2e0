use chrono::Local;
use dioxus::prelude::*;
use tracing::debug;

use crate::core::chat_data::{can_send, ChatMessage, ChatRole, ChatThread, SUGGESTED_PROMPTS};
use crate::gateway::EcoGateway;

/// Assistant chat. One request per send; the user's message lands in the
/// thread immediately and the reply once it arrives.
#[component]
pub fn AIChat() -> Element {
    let gateway = use_context::<EcoGateway>();
    let mut thread = use_signal(ChatThread::new);
    let mut input = use_signal(String::new);
    let mut is_loading = use_signal(|| false);

    let send = use_callback(move |()| {
        let prompt = input();
        if !can_send(&prompt, is_loading()) {
            return;
        }
        thread.write().push_user(prompt.clone());
        input.set(String::new());
        is_loading.set(true);

        let gateway = gateway.clone();
        spawn(async move {
            let reply = gateway.chat(&prompt).await;
            debug!("Assistant replied with {} chars", reply.len());
            thread.write().push_model(reply);
            is_loading.set(false);
        });
    });

    let send_enabled = can_send(&input.read(), is_loading());

    rsx! {
        div { class: "chat-panel glass-panel",
            div { class: "chat-header",
                div { class: "chat-title",
                    div { class: "pulse-badge", "✦" }
                    div {
                        h3 { "Sustainability AI" }
                        div { class: "live-indicator",
                            span { class: "live-dot" }
                            span { class: "eyebrow accent", "Live Analysis" }
                        }
                    }
                }
                button {
                    class: "icon-button danger",
                    title: "Clear Chat",
                    onclick: move |_| thread.write().clear(),
                    "🗑"
                }
            }

            div { class: "chat-messages",
                for (index, message) in thread.read().messages().iter().enumerate() {
                    MessageBubble { key: "{index}", message: message.clone() }
                }
                if is_loading() {
                    div { class: "message-row model",
                        div { class: "avatar model", "🤖" }
                        div { class: "typing",
                            span { class: "typing-dot" }
                            span { class: "typing-dot" }
                            span { class: "typing-dot" }
                        }
                    }
                }
            }

            div { class: "suggested-prompts",
                for prompt in SUGGESTED_PROMPTS.iter() {
                    button {
                        key: "{prompt}",
                        class: "prompt-chip",
                        onclick: move |_| input.set(prompt.to_string()),
                        "{prompt}"
                    }
                }
            }

            div { class: "chat-input",
                input {
                    r#type: "text",
                    placeholder: "How can we optimize building 4?",
                    value: "{input}",
                    oninput: move |evt| input.set(evt.value()),
                    onkeydown: move |evt: KeyboardEvent| {
                        if evt.key() == Key::Enter {
                            send.call(());
                        }
                    },
                }
                button {
                    class: "send-button",
                    disabled: !send_enabled,
                    onclick: move |_| send.call(()),
                    "➤"
                }
            }
        }
    }
}

#[component]
fn MessageBubble(message: ChatMessage) -> Element {
    let (row_class, avatar) = match message.role {
        ChatRole::User => ("message-row user", "👤"),
        ChatRole::Model => ("message-row model", "🤖"),
    };
    let time = message.timestamp.with_timezone(&Local).format("%H:%M").to_string();

    rsx! {
        div { class: "{row_class}",
            div { class: "avatar", "{avatar}" }
            div { class: "bubble",
                p { "{message.text}" }
                span { class: "bubble-time", "{time}" }
            }
        }
    }
}
