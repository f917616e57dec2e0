//! AI gateway for the dashboard.
//!
//! Every operation is a single request against the generative backend. Any
//! failure is logged once and replaced by a fixed fallback literal, so
//! callers always receive displayable content and never an error.

use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, error, instrument};

use crate::config::{AppConfig, ModelConfig};
use crate::core::campus_data::{ENERGY_DATA, WASTE_DATA};

pub mod gemini;
pub mod prompts;

use gemini::GeminiClient;

pub const CHAT_EMPTY_REPLY: &str = "I'm sorry, I couldn't process that request at the moment.";
pub const CHAT_FALLBACK: &str =
    "The Eco Assistant is having trouble reaching the brain center. Please try again in a moment.";
pub const CLASSIFY_EMPTY_REPLY: &str = "Could not identify item.";
pub const CLASSIFY_FALLBACK: &str = "Error analyzing image. Please try again.";
pub const INSIGHT_FALLBACK: &str = "Focus on reducing lighting in the Academic block today!";

const CHAT_TEMPERATURE: f32 = 0.7;
const CHAT_THINKING_BUDGET: u32 = 1000;
const CLASSIFY_TEMPERATURE: f32 = 0.4;
const INSIGHT_THINKING_BUDGET: u32 = 2000;
const UPLOAD_MIME_TYPE: &str = "image/jpeg";

#[derive(Debug, Clone, PartialEq, Error)]
pub enum GatewayError {
    #[error("Gemini API key is not configured")]
    MissingApiKey,
    #[error("Gemini request failed: {0}")]
    Transport(String),
    #[error("Gemini returned HTTP {status}: {message}")]
    Status { status: u16, message: String },
    #[error("Failed to decode Gemini response: {0}")]
    Decode(String),
}

/// One piece of request content.
#[derive(Clone, Debug, PartialEq)]
pub enum Part {
    Text(String),
    InlineData { mime_type: String, data: String },
}

/// Backend-neutral description of a single generation call.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct GenerateRequest {
    pub model: String,
    pub parts: Vec<Part>,
    pub system_instruction: Option<String>,
    pub temperature: Option<f32>,
    pub thinking_budget: Option<u32>,
}

impl GenerateRequest {
    pub fn new(model: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            ..Self::default()
        }
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.parts.push(Part::Text(text.into()));
        self
    }

    pub fn with_inline_data(mut self, mime_type: impl Into<String>, data: impl Into<String>) -> Self {
        self.parts.push(Part::InlineData {
            mime_type: mime_type.into(),
            data: data.into(),
        });
        self
    }

    pub fn with_system_instruction(mut self, instruction: impl Into<String>) -> Self {
        self.system_instruction = Some(instruction.into());
        self
    }

    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = Some(temperature);
        self
    }

    pub fn with_thinking_budget(mut self, budget: u32) -> Self {
        self.thinking_budget = Some(budget);
        self
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct InlineImage {
    pub mime_type: String,
    pub data: String,
}

impl InlineImage {
    pub fn to_data_uri(&self) -> String {
        format!("data:{};base64,{}", self.mime_type, self.data)
    }
}

/// What came back from one call: the text parts in order and any inline images.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct GenerateResponse {
    pub texts: Vec<String>,
    pub images: Vec<InlineImage>,
}

impl GenerateResponse {
    pub fn text(&self) -> Option<String> {
        let joined = self.texts.concat();
        if joined.trim().is_empty() {
            None
        } else {
            Some(joined)
        }
    }
}

/// Transport seam between the gateway and the hosted model.
#[async_trait]
pub trait GenerativeBackend: Send + Sync {
    async fn generate(&self, request: GenerateRequest) -> Result<GenerateResponse, GatewayError>;
}

/// Shared handle provided to the views through context.
#[derive(Clone)]
pub struct EcoGateway {
    backend: Arc<dyn GenerativeBackend>,
    models: ModelConfig,
}

impl EcoGateway {
    pub fn new(backend: Arc<dyn GenerativeBackend>, models: ModelConfig) -> Self {
        Self { backend, models }
    }

    pub fn from_config(config: &AppConfig) -> Self {
        let client = GeminiClient::new(config.api_key.clone(), config.base_url.clone());
        Self::new(Arc::new(client), config.models.clone())
    }

    /// Free-text answer grounded on the last week of campus data.
    #[instrument(skip(self, prompt), fields(prompt_len = prompt.len()))]
    pub async fn chat(&self, prompt: &str) -> String {
        let request = GenerateRequest::new(&self.models.chat)
            .with_text(prompt)
            .with_system_instruction(prompts::chat_context(WASTE_DATA, ENERGY_DATA))
            .with_temperature(CHAT_TEMPERATURE)
            .with_thinking_budget(CHAT_THINKING_BUDGET);

        match self.backend.generate(request).await {
            Ok(response) => response.text().unwrap_or_else(|| CHAT_EMPTY_REPLY.to_string()),
            Err(e) => {
                error!("Gemini API error: {}", e);
                CHAT_FALLBACK.to_string()
            }
        }
    }

    /// Bin classification for an uploaded photo given as a data URI.
    #[instrument(skip(self, image_data_uri))]
    pub async fn classify_waste_image(&self, image_data_uri: &str) -> String {
        let request = GenerateRequest::new(&self.models.vision)
            .with_inline_data(UPLOAD_MIME_TYPE, strip_data_uri(image_data_uri))
            .with_text(prompts::CLASSIFY_INSTRUCTION)
            .with_temperature(CLASSIFY_TEMPERATURE);

        match self.backend.generate(request).await {
            Ok(response) => response.text().unwrap_or_else(|| CLASSIFY_EMPTY_REPLY.to_string()),
            Err(e) => {
                error!("Vision API error: {}", e);
                CLASSIFY_FALLBACK.to_string()
            }
        }
    }

    #[instrument(skip(self))]
    pub async fn proactive_insight(&self) -> String {
        let request = GenerateRequest::new(&self.models.insight)
            .with_text(prompts::insight_prompt(WASTE_DATA, ENERGY_DATA))
            .with_thinking_budget(INSIGHT_THINKING_BUDGET);

        match self.backend.generate(request).await {
            Ok(response) => response.text().unwrap_or_else(|| {
                debug!("Insight reply carried no text");
                INSIGHT_FALLBACK.to_string()
            }),
            Err(e) => {
                error!("Insight generation failed: {}", e);
                INSIGHT_FALLBACK.to_string()
            }
        }
    }

    /// Landing-page visuals. All prompts are sent at once; if any call fails
    /// the whole set is dropped and the page keeps its plain background.
    #[instrument(skip(self))]
    pub async fn hero_images(&self) -> Vec<String> {
        let calls = prompts::HERO_IMAGE_PROMPTS.iter().map(|prompt| {
            let request = GenerateRequest::new(&self.models.image).with_text(*prompt);
            self.backend.generate(request)
        });

        let mut images = Vec::new();
        for result in futures::future::join_all(calls).await {
            match result {
                Ok(response) => {
                    if let Some(image) = response.images.first() {
                        images.push(image.to_data_uri());
                    }
                }
                Err(e) => {
                    error!("Failed to generate hero images: {}", e);
                    return Vec::new();
                }
            }
        }
        debug!("Generated {} hero images", images.len());
        images
    }
}

/// Drops the `data:<mime>;base64,` prefix. Input without a prefix is returned as is.
pub fn strip_data_uri(uri: &str) -> &str {
    uri.split_once(',').map(|(_, payload)| payload).unwrap_or(uri)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::VecDeque;
    use std::sync::Mutex;

    /// Replays canned results and records what it was asked.
    struct ScriptedBackend {
        replies: Mutex<VecDeque<Result<GenerateResponse, GatewayError>>>,
        requests: Mutex<Vec<GenerateRequest>>,
    }

    impl ScriptedBackend {
        fn new(replies: Vec<Result<GenerateResponse, GatewayError>>) -> Arc<Self> {
            Arc::new(Self {
                replies: Mutex::new(replies.into()),
                requests: Mutex::new(Vec::new()),
            })
        }

        fn requests(&self) -> Vec<GenerateRequest> {
            self.requests.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl GenerativeBackend for ScriptedBackend {
        async fn generate(&self, request: GenerateRequest) -> Result<GenerateResponse, GatewayError> {
            self.requests.lock().unwrap().push(request);
            self.replies
                .lock()
                .unwrap()
                .pop_front()
                .unwrap_or_else(|| Err(GatewayError::Transport("no scripted reply".into())))
        }
    }

    fn text_reply(text: &str) -> Result<GenerateResponse, GatewayError> {
        Ok(GenerateResponse {
            texts: vec![text.to_string()],
            images: Vec::new(),
        })
    }

    fn image_reply(data: &str) -> Result<GenerateResponse, GatewayError> {
        Ok(GenerateResponse {
            texts: Vec::new(),
            images: vec![InlineImage {
                mime_type: "image/png".to_string(),
                data: data.to_string(),
            }],
        })
    }

    fn network_error() -> Result<GenerateResponse, GatewayError> {
        Err(GatewayError::Transport("connection refused".into()))
    }

    fn gateway(backend: &Arc<ScriptedBackend>) -> EcoGateway {
        EcoGateway::new(backend.clone(), ModelConfig::default())
    }

    #[tokio::test]
    async fn test_chat_returns_model_text() {
        let backend = ScriptedBackend::new(vec![text_reply("Turn off the lab lights.")]);
        let reply = gateway(&backend).chat("hello").await;
        assert_eq!(reply, "Turn off the lab lights.");
    }

    #[tokio::test]
    async fn test_chat_request_carries_recent_context() {
        let backend = ScriptedBackend::new(vec![text_reply("ok")]);
        gateway(&backend).chat("hello").await;

        let requests = backend.requests();
        assert_eq!(requests.len(), 1);
        let request = &requests[0];
        assert_eq!(request.model, "gemini-3-flash-preview");
        assert_eq!(request.parts, vec![Part::Text("hello".to_string())]);
        assert_eq!(request.temperature, Some(0.7));
        assert_eq!(request.thinking_budget, Some(1000));

        let system = request.system_instruction.as_deref().unwrap();
        assert!(system.contains("\"date\":\"2023-10-27\""));
        assert!(system.contains("\"building\":\"Academic Block\""));
    }

    #[tokio::test]
    async fn test_chat_network_failure_uses_fallback() {
        let backend = ScriptedBackend::new(vec![network_error()]);
        let reply = gateway(&backend).chat("hello").await;
        assert_eq!(reply, CHAT_FALLBACK);
    }

    #[tokio::test]
    async fn test_chat_status_failure_uses_same_fallback() {
        let backend = ScriptedBackend::new(vec![Err(GatewayError::Status {
            status: 429,
            message: "RESOURCE_EXHAUSTED".into(),
        })]);
        assert_eq!(gateway(&backend).chat("hello").await, CHAT_FALLBACK);
    }

    #[tokio::test]
    async fn test_chat_empty_reply() {
        let backend = ScriptedBackend::new(vec![text_reply("   ")]);
        assert_eq!(gateway(&backend).chat("hello").await, CHAT_EMPTY_REPLY);
    }

    #[tokio::test]
    async fn test_chat_failure_lands_in_thread() {
        use crate::core::chat_data::{ChatRole, ChatThread};

        let backend = ScriptedBackend::new(vec![network_error()]);
        let mut thread = ChatThread::new();
        thread.push_user("hello");
        thread.push_model(gateway(&backend).chat("hello").await);

        let last = thread.messages().last().unwrap();
        assert_eq!(last.role, ChatRole::Model);
        assert_eq!(last.text, CHAT_FALLBACK);
    }

    #[tokio::test]
    async fn test_classify_strips_prefix_and_sends_instruction() {
        let backend = ScriptedBackend::new(vec![text_reply("BIN: RECYCLABLE. Reason: PET bottle.")]);
        let reply = gateway(&backend)
            .classify_waste_image("data:image/png;base64,iVBORw0KGgo=")
            .await;
        assert_eq!(reply, "BIN: RECYCLABLE. Reason: PET bottle.");

        let request = &backend.requests()[0];
        assert_eq!(request.temperature, Some(0.4));
        assert_eq!(
            request.parts,
            vec![
                Part::InlineData {
                    mime_type: "image/jpeg".to_string(),
                    data: "iVBORw0KGgo=".to_string(),
                },
                Part::Text(prompts::CLASSIFY_INSTRUCTION.to_string()),
            ]
        );
    }

    #[tokio::test]
    async fn test_classify_fallbacks() {
        let backend = ScriptedBackend::new(vec![network_error(), text_reply("")]);
        let gateway = gateway(&backend);
        assert_eq!(gateway.classify_waste_image("data:,").await, CLASSIFY_FALLBACK);
        assert_eq!(gateway.classify_waste_image("data:,").await, CLASSIFY_EMPTY_REPLY);
    }

    #[tokio::test]
    async fn test_insight_uses_full_datasets() {
        let backend = ScriptedBackend::new(vec![text_reply("Insight. Action.")]);
        assert_eq!(gateway(&backend).proactive_insight().await, "Insight. Action.");

        let request = &backend.requests()[0];
        assert_eq!(request.model, "gemini-3-pro-preview");
        assert_eq!(request.thinking_budget, Some(2000));
        assert!(request.system_instruction.is_none());
        let Part::Text(prompt) = &request.parts[0] else {
            panic!("insight prompt should be text");
        };
        assert!(prompt.contains("2023-10-21"));
        assert!(prompt.contains("\"date\":\"Mon\""));
    }

    #[tokio::test]
    async fn test_insight_fallback() {
        let backend = ScriptedBackend::new(vec![Err(GatewayError::Decode("eof".into()))]);
        assert_eq!(gateway(&backend).proactive_insight().await, INSIGHT_FALLBACK);

        let backend = ScriptedBackend::new(vec![text_reply("")]);
        assert_eq!(gateway(&backend).proactive_insight().await, INSIGHT_FALLBACK);
    }

    #[tokio::test]
    async fn test_hero_images_collects_data_uris() {
        let backend = ScriptedBackend::new(vec![image_reply("AAA"), text_reply("no image"), image_reply("CCC")]);
        let images = gateway(&backend).hero_images().await;

        assert_eq!(
            images,
            vec!["data:image/png;base64,AAA".to_string(), "data:image/png;base64,CCC".to_string()]
        );
        assert_eq!(backend.requests().len(), prompts::HERO_IMAGE_PROMPTS.len());
        assert!(backend.requests().iter().all(|r| r.model == "gemini-2.5-flash-image"));
    }

    #[tokio::test]
    async fn test_hero_images_any_failure_yields_none() {
        let backend = ScriptedBackend::new(vec![image_reply("AAA"), network_error(), image_reply("CCC")]);
        assert!(gateway(&backend).hero_images().await.is_empty());
    }

    #[tokio::test]
    async fn test_missing_key_degrades_to_fallback() {
        let gateway = EcoGateway::from_config(&AppConfig::default());
        assert_eq!(gateway.chat("hello").await, CHAT_FALLBACK);
        assert_eq!(gateway.proactive_insight().await, INSIGHT_FALLBACK);
    }

    #[test]
    fn test_strip_data_uri() {
        assert_eq!(strip_data_uri("data:image/jpeg;base64,/9j/4AAQ"), "/9j/4AAQ");
        assert_eq!(strip_data_uri("/9j/4AAQ"), "/9j/4AAQ");
        assert_eq!(strip_data_uri("data:,"), "");
    }

    #[test]
    fn test_response_text_concatenates_parts() {
        let response = GenerateResponse {
            texts: vec!["BIN: WET. ".into(), "Reason: food scraps.".into()],
            images: Vec::new(),
        };
        assert_eq!(response.text().as_deref(), Some("BIN: WET. Reason: food scraps."));
        assert_eq!(GenerateResponse::default().text(), None);
    }
}
