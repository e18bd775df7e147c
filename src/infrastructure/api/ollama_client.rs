use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::application::ports::{ChatService, ChatServiceError};
use crate::domain::Message;

pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:11434";
pub const DEFAULT_MODEL: &str = "deepseek-r1:14b";
pub const DEFAULT_TIMEOUT_SECS: u64 = 60;

/// Chat adapter for an Ollama-compatible inference server. The endpoint is
/// stateless, so every request carries the full conversation history and
/// always asks for the complete reply in one response (`stream: false`).
pub struct OllamaChatService {
    client: Client,
    base_url: String,
    model: String,
}

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ApiMessage<'a>>,
    stream: bool,
}

#[derive(Serialize)]
struct ApiMessage<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Deserialize)]
struct ChatResponse {
    message: ResponseMessage,
}

#[derive(Deserialize)]
struct ResponseMessage {
    content: String,
}

impl OllamaChatService {
    pub fn new(
        base_url: impl Into<String>,
        model: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, ChatServiceError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ChatServiceError::Transport(e.to_string()))?;

        Ok(Self {
            client,
            base_url: base_url.into(),
            model: model.into(),
        })
    }

    fn chat_url(&self) -> Result<reqwest::Url, ChatServiceError> {
        let raw = format!("{}/api/chat", self.base_url.trim_end_matches('/'));
        reqwest::Url::parse(&raw).map_err(|_| ChatServiceError::InvalidEndpoint(raw))
    }

    fn build_body<'a>(&'a self, history: &'a [Message]) -> ChatRequest<'a> {
        ChatRequest {
            model: &self.model,
            messages: history
                .iter()
                .map(|m| ApiMessage {
                    role: m.role.as_str(),
                    content: &m.content,
                })
                .collect(),
            stream: false,
        }
    }
}

#[async_trait]
impl ChatService for OllamaChatService {
    async fn send_chat(&self, history: &[Message]) -> Result<String, ChatServiceError> {
        let url = self.chat_url()?;
        let body = self.build_body(history);

        tracing::debug!(model = %self.model, messages = history.len(), "POST /api/chat");

        let response = self
            .client
            .post(url)
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    ChatServiceError::Timeout
                } else {
                    ChatServiceError::Transport(e.to_string())
                }
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(ChatServiceError::Transport(format!(
                "HTTP {}: {}",
                status, body
            )));
        }

        let chat_response: ChatResponse = response
            .json()
            .await
            .map_err(|e| ChatServiceError::MalformedResponse(e.to_string()))?;

        Ok(chat_response.message.content)
    }
}
