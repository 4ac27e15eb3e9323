use serde::{Deserialize, Serialize};

/// Message forwarded by the chat platform to the webhook.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ChatMessage {
    pub content: String,
    pub author: ChatAuthor,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ChatAuthor {
    pub display_name: String,
    pub avatar_url: Option<String>,
}
