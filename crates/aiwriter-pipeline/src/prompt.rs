//! Prompt construction

use aiwriter_core::{ContentLength, ContentType, GenerationRequest};

pub const SYSTEM_PROMPT: &str = "You are an expert content writer and SEO specialist. You create high-quality, \
engaging, and SEO-optimized content. IMPORTANT: You MUST respond with valid JSON \
format exactly as specified in the user prompt. The JSON must contain both 'title' \
and 'content' fields. Format content with proper HTML tags including headings (h2, h3), \
paragraphs (p), lists (ul, ol, li), and emphasis (strong, em) where appropriate. \
Never include h1 tags as that will be the title. Focus on creating valuable, \
actionable content that provides real insights to readers.";

const JSON_INSTRUCTIONS: &str = "IMPORTANT: Please provide your response in the following JSON format:
{
  \"title\": \"SEO-optimized title for the content (60 characters or less)\",
  \"content\": \"Full HTML content with proper formatting\"
}

CRITICAL: Respond ONLY with the JSON object above. Do not include any markdown formatting, \
code blocks, or additional text. Start your response with { and end with }.";

/// System instruction plus user message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prompt {
    pub system: String,
    pub user: String,
}

pub fn build_prompt(request: &GenerationRequest) -> Prompt {
    let content_type = request.content_type();
    let tone = request.tone().as_str();
    let length_guide = length_guide(request.length());
    let topic = request.topic();

    let user = format!(
        "Create a {kind} about '{topic}' with the following specifications:

Content Type: {label}
Length: {length_guide}
Tone: {tone_label}
Topic: {topic}

{type_guide}

{length_guide}

{JSON_INSTRUCTIONS}

Requirements for the title:
- SEO-friendly and attention-grabbing
- Include relevant keywords naturally
- Keep under 60 characters for optimal SEO
- Match the {tone} tone

Requirements for the content:
- Use proper HTML formatting with headings (h2, h3), paragraphs, and lists
- Make it SEO-friendly with natural keyword usage
- Include a compelling introduction and conclusion
- Use subheadings to break up the content
- Write in {tone} tone
- Ensure the content is original, engaging, and valuable to readers
- Include actionable insights where appropriate
- Never include h1 tags (title will be separate)",
        kind = content_type.as_str(),
        label = content_type.label(),
        tone_label = request.tone().label(),
        type_guide = content_type_guide(content_type),
    );

    Prompt {
        system: SYSTEM_PROMPT.to_string(),
        user,
    }
}

pub fn length_guide(length: ContentLength) -> &'static str {
    match length {
        ContentLength::Short => "Approximately 300-500 words (brief but comprehensive)",
        ContentLength::Medium => "Approximately 800-1200 words (detailed and thorough)",
        ContentLength::Long => "Approximately 1500-2500 words (comprehensive and in-depth)",
    }
}

pub fn content_type_guide(content_type: &ContentType) -> &'static str {
    match content_type {
        ContentType::BlogPost => {
            "Structure as a blog post with introduction, main sections with subheadings, and conclusion. Include practical tips and examples."
        }
        ContentType::Article => {
            "Write as an informative article with clear sections, data-driven insights, and authoritative tone."
        }
        ContentType::SocialMedia => {
            "Create engaging social media content that is concise, attention-grabbing, and shareable."
        }
        ContentType::Email => {
            "Format as an email with compelling subject line suggestions, clear call-to-action, and personal tone."
        }
        ContentType::ProductDescription => {
            "Focus on benefits, features, and compelling reasons to choose this product. Include technical details where relevant."
        }
        ContentType::Other(_) => {
            "Structure with clear sections, practical insights, and engaging narrative flow."
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(content_type: &str, length: &str, tone: &str) -> GenerationRequest {
        GenerationRequest::new("Rust ownership", content_type, length, tone).unwrap()
    }

    #[test]
    fn test_prompt_header_and_fields() {
        let prompt = build_prompt(&request("blog-post", "short", "friendly"));
        assert!(prompt.user.starts_with(
            "Create a blog-post about 'Rust ownership' with the following specifications:\n\n\
             Content Type: Blog Post\n\
             Length: Approximately 300-500 words (brief but comprehensive)\n\
             Tone: Friendly\n\
             Topic: Rust ownership\n\n\
             Structure as a blog post"
        ));
        assert!(prompt.user.contains("- Match the friendly tone\n"));
        assert!(prompt.user.contains("- Write in friendly tone\n"));
        assert!(prompt.user.ends_with("- Never include h1 tags (title will be separate)"));
        assert_eq!(prompt.system, SYSTEM_PROMPT);
    }

    #[test]
    fn test_prompt_demands_bare_json() {
        let prompt = build_prompt(&request("article", "medium", "formal"));
        assert!(prompt.user.contains("\"title\": \"SEO-optimized title"));
        assert!(prompt.user.contains("Start your response with { and end with }."));
        assert!(prompt.system.contains("'title' and 'content' fields"));
        assert!(prompt.system.contains("Never include h1 tags"));
    }

    #[test]
    fn test_unknown_type_uses_generic_guide() {
        let prompt = build_prompt(&request("newsletter", "epic", "Witty"));
        assert!(prompt.user.contains("Content Type: Newsletter\n"));
        assert!(prompt.user.contains(
            "Structure with clear sections, practical insights, and engaging narrative flow."
        ));
        assert!(prompt.user.contains("Length: Approximately 800-1200 words"));
        assert!(prompt.user.contains("Tone: Witty\n"));
    }
}
