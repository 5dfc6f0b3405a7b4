use serde::{Deserialize, Serialize};

use crate::error::{AppError, Result};

/// One prior turn as the website widget sends it. Both fields are optional on
/// the wire; `prompt::build_messages` decides what to do with partial entries.
#[derive(Deserialize, Debug, Clone, Default, PartialEq)]
pub struct HistoryEntry {
    #[serde(default)]
    pub sender: Option<String>,
    #[serde(default)]
    pub text: Option<String>,
}

impl HistoryEntry {
    pub fn is_from_user(&self) -> bool {
        self.sender.as_deref() == Some("user")
    }
}

#[derive(Deserialize, Debug, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct ChatRequest {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub conversation_history: Option<Vec<HistoryEntry>>,
}

impl ChatRequest {
    /// Parses a raw request body. An empty body is a request without a message.
    pub fn from_body(body: &[u8]) -> Result<Self> {
        if body.iter().all(u8::is_ascii_whitespace) {
            return Ok(Self::default());
        }
        serde_json::from_slice(body).map_err(|e| AppError::InvalidBody(e.to_string()))
    }

    pub fn validate(&self) -> Result<&str> {
        match self.message.as_deref() {
            Some(m) if !m.is_empty() => Ok(m),
            _ => Err(AppError::MissingMessage),
        }
    }

    pub fn history(&self) -> &[HistoryEntry] {
        self.conversation_history.as_deref().unwrap_or_default()
    }
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct ChatReply {
    pub response: String,
    pub success: bool,
}

impl ChatReply {
    pub fn new(response: String) -> Self {
        Self { response, success: true }
    }
}
