use crate::{
    clients::groq::CompletionApi,
    config::Config,
    error::{AppError, Result},
    models::{chat::ChatRequest, completion::CompletionRequest},
    prompt::{self, APOLOGY},
};

/// Turns one visitor message into one assistant reply.
pub struct ChatService<C> {
    config: Config,
    upstream: C,
}

impl<C: CompletionApi> ChatService<C> {
    pub fn new(config: Config, upstream: C) -> Self {
        Self { config, upstream }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub async fn reply(&self, req: &ChatRequest) -> Result<String> {
        let message = req.validate()?;
        let api_key = self.config.api_key.as_deref().ok_or(AppError::MissingApiKey)?;

        let request = CompletionRequest {
            model: self.config.model.clone(),
            messages: prompt::build_messages(req.history(), message),
            temperature: self.config.temperature,
            max_tokens: self.config.max_tokens,
            top_p: self.config.top_p,
        };

        let response = tokio::time::timeout(self.config.timeout, self.upstream.complete(api_key, &request))
            .await
            .map_err(|_| AppError::Timeout(self.config.timeout))??;

        Ok(response.first_content().unwrap_or(APOLOGY).to_string())
    }
}

#[cfg(test)]
mod tests {
    use std::{
        sync::{Arc, Mutex},
        time::Duration,
    };

    use async_trait::async_trait;

    use super::*;
    use crate::models::completion::{CompletionResponse, Role};

    #[derive(Clone, Default)]
    struct Recorder {
        calls: Arc<Mutex<Vec<(String, CompletionRequest)>>>,
        reply: Option<String>,
        delay: Option<Duration>,
    }

    #[async_trait]
    impl CompletionApi for Recorder {
        async fn complete(&self, api_key: &str, request: &CompletionRequest) -> Result<CompletionResponse> {
            self.calls.lock().unwrap().push((api_key.to_string(), request.clone()));
            if let Some(delay) = self.delay {
                tokio::time::sleep(delay).await;
            }
            Ok(match &self.reply {
                Some(text) => CompletionResponse::from_content(text.clone()),
                None => CompletionResponse::default(),
            })
        }
    }

    fn keyed_config() -> Config {
        Config { api_key: Some("gsk_test".into()), ..Config::default() }
    }

    fn request(message: &str) -> ChatRequest {
        ChatRequest { message: Some(message.into()), conversation_history: None }
    }

    #[tokio::test]
    async fn forwards_key_and_fixed_parameters() {
        let upstream = Recorder { reply: Some("Hello!".into()), ..Default::default() };
        let service = ChatService::new(keyed_config(), upstream.clone());

        assert_eq!(service.reply(&request("hi")).await.unwrap(), "Hello!");

        let calls = upstream.calls.lock().unwrap();
        assert_eq!(calls.len(), 1);
        let (key, sent) = &calls[0];
        assert_eq!(key, "gsk_test");
        assert_eq!(sent.model, "llama-3.3-70b-versatile");
        assert_eq!(sent.temperature, 0.7);
        assert_eq!(sent.max_tokens, 500);
        assert_eq!(sent.top_p, 0.9);
        assert_eq!(sent.messages.len(), 2);
        assert_eq!(sent.messages[0].role, Role::System);
        assert_eq!(sent.messages[1].content, "hi");
    }

    #[tokio::test]
    async fn missing_message_is_checked_before_key() {
        let upstream = Recorder::default();
        let service = ChatService::new(Config::default(), upstream.clone());

        let err = service.reply(&ChatRequest::default()).await.unwrap_err();
        assert!(matches!(err, AppError::MissingMessage));
        assert!(upstream.calls.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn missing_key_never_calls_upstream() {
        let upstream = Recorder::default();
        let service = ChatService::new(Config::default(), upstream.clone());

        let err = service.reply(&request("hi")).await.unwrap_err();
        assert!(matches!(err, AppError::MissingApiKey));
        assert!(upstream.calls.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn empty_completion_falls_back_to_apology() {
        let service = ChatService::new(keyed_config(), Recorder::default());
        assert_eq!(service.reply(&request("hi")).await.unwrap(), APOLOGY);
    }

    #[tokio::test]
    async fn slow_upstream_times_out() {
        let config = Config { timeout: Duration::from_millis(20), ..keyed_config() };
        let upstream = Recorder {
            reply: Some("late".into()),
            delay: Some(Duration::from_secs(5)),
            ..Default::default()
        };
        let service = ChatService::new(config, upstream);

        let err = service.reply(&request("hi")).await.unwrap_err();
        assert!(matches!(err, AppError::Timeout(d) if d == Duration::from_millis(20)));
        assert_eq!(err.to_string(), "AI service did not answer within 20ms");
    }
}
