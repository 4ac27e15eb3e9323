use serde::{Deserialize, Serialize};

/// Outgoing chat message. `reply` marks an answer threaded to the request
/// instead of a plain channel post.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reply {
    pub content: Option<String>,
    pub embeds: Vec<Embed>,
    pub reply: bool,
}

impl Reply {
    pub fn text(content: String) -> Self {
        Reply {
            content: Some(content),
            embeds: vec![],
            reply: false,
        }
    }

    pub fn reply_to(content: String) -> Self {
        Reply {
            content: Some(content),
            embeds: vec![],
            reply: true,
        }
    }

    pub fn embed(embed: Embed) -> Self {
        Reply {
            content: None,
            embeds: vec![embed],
            reply: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Embed {
    pub color: u32,
    pub title: String,
    pub url: String,
    pub thumbnail: EmbedMedia,
    pub fields: Vec<EmbedField>,
    pub footer: EmbedFooter,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmbedMedia {
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmbedFooter {
    pub text: String,
    pub icon_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmbedField {
    pub name: String,
    pub value: String,
    pub inline: bool,
}

impl EmbedField {
    pub fn new(name: &str, value: String) -> Self {
        EmbedField {
            name: format!("**{}**", name),
            value,
            inline: true,
        }
    }

    /// Empty inline cell used to pad a row to three columns.
    pub fn spacer() -> Self {
        EmbedField {
            name: String::new(),
            value: String::new(),
            inline: true,
        }
    }

    pub fn line_break() -> Self {
        EmbedField {
            name: String::new(),
            value: String::new(),
            inline: false,
        }
    }
}
