//! What the editor asked for

use std::fmt;

use serde::Serialize;

use crate::config::consts::limits;
use crate::error::{AiWriterError, Result};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(into = "String")]
pub enum ContentType {
    BlogPost,
    Article,
    SocialMedia,
    Email,
    ProductDescription,
    /// Anything else; prompted with the generic guide
    Other(String),
}

impl ContentType {
    pub fn parse(value: &str) -> Self {
        match normalize(value).as_str() {
            "" | "blog-post" => ContentType::BlogPost,
            "article" => ContentType::Article,
            "social-media" => ContentType::SocialMedia,
            "email" => ContentType::Email,
            "product-description" => ContentType::ProductDescription,
            other => ContentType::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            ContentType::BlogPost => "blog-post",
            ContentType::Article => "article",
            ContentType::SocialMedia => "social-media",
            ContentType::Email => "email",
            ContentType::ProductDescription => "product-description",
            ContentType::Other(raw) => raw,
        }
    }

    /// "blog-post" -> "Blog Post"
    pub fn label(&self) -> String {
        self.as_str()
            .replace('-', " ")
            .split(' ')
            .map(capitalize)
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl From<ContentType> for String {
    fn from(value: ContentType) -> Self {
        value.as_str().to_string()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentLength {
    Short,
    #[default]
    Medium,
    Long,
}

impl ContentLength {
    /// Unknown values fall back to medium
    pub fn parse(value: &str) -> Self {
        match normalize(value).as_str() {
            "short" => ContentLength::Short,
            "long" => ContentLength::Long,
            "medium" => ContentLength::Medium,
            other => {
                if !other.is_empty() {
                    tracing::debug!(length = other, "unknown length, using medium");
                }
                ContentLength::Medium
            }
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ContentLength::Short => "short",
            ContentLength::Medium => "medium",
            ContentLength::Long => "long",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(into = "String")]
pub enum Tone {
    Professional,
    Casual,
    Friendly,
    Formal,
    Creative,
    /// Echoed into the prompt as given
    Other(String),
}

impl Tone {
    pub fn parse(value: &str) -> Self {
        match normalize(value).as_str() {
            "" | "professional" => Tone::Professional,
            "casual" => Tone::Casual,
            "friendly" => Tone::Friendly,
            "formal" => Tone::Formal,
            "creative" => Tone::Creative,
            _ => Tone::Other(value.trim().to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Tone::Professional => "professional",
            Tone::Casual => "casual",
            Tone::Friendly => "friendly",
            Tone::Formal => "formal",
            Tone::Creative => "creative",
            Tone::Other(raw) => raw,
        }
    }

    /// "friendly" -> "Friendly"
    pub fn label(&self) -> String {
        capitalize(self.as_str())
    }
}

impl From<Tone> for String {
    fn from(value: Tone) -> Self {
        value.as_str().to_string()
    }
}

impl fmt::Display for Tone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A validated generation request.
///
/// Only constructible through [`GenerationRequest::new`], so holding one
/// means the topic passed validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GenerationRequest {
    topic: String,
    content_type: ContentType,
    length: ContentLength,
    tone: Tone,
}

impl GenerationRequest {
    pub fn new(topic: &str, content_type: &str, length: &str, tone: &str) -> Result<Self> {
        let topic = topic.trim();

        if topic.is_empty() {
            return Err(AiWriterError::Validation(
                "Please enter a topic for content generation.".to_string(),
            ));
        }

        if topic.chars().count() < limits::MIN_TOPIC_CHARS {
            return Err(AiWriterError::Validation(format!(
                "Topic must be at least {} characters long.",
                limits::MIN_TOPIC_CHARS
            )));
        }

        Ok(Self {
            topic: topic.to_string(),
            content_type: ContentType::parse(content_type),
            length: ContentLength::parse(length),
            tone: Tone::parse(tone),
        })
    }

    pub fn topic(&self) -> &str {
        &self.topic
    }

    pub fn content_type(&self) -> &ContentType {
        &self.content_type
    }

    pub fn length(&self) -> ContentLength {
        self.length
    }

    pub fn tone(&self) -> &Tone {
        &self.tone
    }
}

fn normalize(value: &str) -> String {
    value.trim().to_lowercase()
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
