use vercel_runtime::{Body, Error, Request, Response, StatusCode};

use crate::{
    clients::groq::CompletionApi,
    error::{AppError, Result},
    http::response::{error_response, json_response},
    models::chat::{ChatReply, ChatRequest},
    services::chat::ChatService,
};

/// The `/api/chat` function. Every outcome becomes a JSON response; only a
/// failure to build that response is returned to the runtime as an error.
pub struct ChatHandler<C> {
    service: ChatService<C>,
}

impl<C: CompletionApi> ChatHandler<C> {
    pub fn new(service: ChatService<C>) -> Self {
        Self { service }
    }

    pub async fn handle(&self, req: Request) -> std::result::Result<Response<Body>, Error> {
        let origin = self.service.config().allow_origin.as_str();
        match self.respond(&req).await {
            Ok(reply) => Ok(json_response(StatusCode::OK, &reply, origin)?),
            Err(err) => {
                if err.is_client_error() {
                    tracing::warn!(method = %req.method(), error = %err, "rejected chat request");
                } else {
                    tracing::error!(error = ?err, "Error in chat handler");
                }
                let (status, body) = error_response(&err);
                Ok(json_response(status, &body, origin)?)
            }
        }
    }

    async fn respond(&self, req: &Request) -> Result<ChatReply> {
        if req.method().as_str() != "POST" {
            return Err(AppError::MethodNotAllowed);
        }
        let chat = ChatRequest::from_body(req.body())?;
        let response = self.service.reply(&chat).await?;
        tracing::info!(
            history = chat.history().len(),
            reply.len = response.len(),
            "chat reply sent"
        );
        Ok(ChatReply::new(response))
    }
}
