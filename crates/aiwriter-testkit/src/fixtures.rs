//! Canned OpenAI response bodies

use serde_json::json;

/// A chat completion whose message content is `content`
pub fn completion_body(content: &str) -> String {
    json!({
        "id": "chatcmpl-test",
        "object": "chat.completion",
        "choices": [{
            "index": 0,
            "message": {"role": "assistant", "content": content},
            "finish_reason": "stop"
        }],
        "usage": {"prompt_tokens": 120, "completion_tokens": 80, "total_tokens": 200}
    })
    .to_string()
}

/// A completion whose content is the structured `{"title","content"}` reply
pub fn structured_completion_body(title: &str, content: &str) -> String {
    let reply = json!({"title": title, "content": content}).to_string();
    completion_body(&reply)
}

/// A model listing with the given ids
pub fn models_body(ids: &[&str]) -> String {
    let data: Vec<_> = ids
        .iter()
        .map(|id| json!({"id": id, "object": "model", "owned_by": "openai"}))
        .collect();
    json!({"object": "list", "data": data}).to_string()
}

/// `{"error":{"message":..}}`
pub fn error_body(message: &str) -> String {
    json!({"error": {"message": message, "type": "invalid_request_error"}}).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_structured_body_nests_json_string() {
        let body: serde_json::Value =
            serde_json::from_str(&structured_completion_body("T", "<p>x</p>")).unwrap();
        let content = body["choices"][0]["message"]["content"].as_str().unwrap();
        let inner: serde_json::Value = serde_json::from_str(content).unwrap();
        assert_eq!(inner["title"], "T");
        assert_eq!(body["usage"]["total_tokens"], 200);
    }

    #[test]
    fn test_models_body() {
        let body: serde_json::Value = serde_json::from_str(&models_body(&["a", "b"])).unwrap();
        assert_eq!(body["data"].as_array().unwrap().len(), 2);
        assert_eq!(body["data"][1]["id"], "b");
    }
}
