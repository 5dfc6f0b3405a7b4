use async_trait::async_trait;
use reqwest::Client;

use crate::{
    config::Config,
    error::{AppError, Result},
    models::completion::{CompletionRequest, CompletionResponse},
};

/// An OpenAI-compatible chat completion endpoint.
#[async_trait]
pub trait CompletionApi: Send + Sync {
    async fn complete(&self, api_key: &str, request: &CompletionRequest) -> Result<CompletionResponse>;
}

pub struct GroqClient {
    http: Client,
    endpoint: String,
    debug_raw: bool,
}

impl GroqClient {
    pub fn new(config: &Config) -> Result<Self> {
        let http = Client::builder().timeout(config.timeout).build()?;
        Ok(Self {
            http,
            endpoint: config.api_url.clone(),
            debug_raw: config.debug_raw,
        })
    }
}

#[async_trait]
impl CompletionApi for GroqClient {
    async fn complete(&self, api_key: &str, request: &CompletionRequest) -> Result<CompletionResponse> {
        if self.debug_raw {
            debug_log_preview(request);
        }

        let resp = self
            .http
            .post(&self.endpoint)
            .bearer_auth(api_key)
            .json(request)
            .send()
            .await?;

        let status = resp.status().as_u16();
        if !resp.status().is_success() {
            let body = match resp.text().await {
                Ok(body) => {
                    tracing::error!(status, body = %body, "Groq API error");
                    body
                }
                Err(err) => {
                    tracing::error!(status, read_error = %err, "Groq API error; body unreadable");
                    String::new()
                }
            };
            return Err(AppError::Upstream { status, body });
        }

        Ok(resp.json::<CompletionResponse>().await?)
    }
}

fn debug_log_preview(request: &CompletionRequest) {
    let last = request.messages.last().map(|m| m.content.as_str()).unwrap_or_default();
    tracing::debug!(
        model = %request.model,
        messages = request.messages.len(),
        user.len = last.len(),
        user.preview = %last.chars().take(80).collect::<String>(),
        "outbound completion request"
    );
}
