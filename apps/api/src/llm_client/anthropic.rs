//! Messages API request and response shapes.

use serde::{Deserialize, Serialize};

pub const DEFAULT_API_URL: &str = "https://api.anthropic.com/v1/messages";
pub const ANTHROPIC_VERSION: &str = "2023-06-01";
const MAX_TOKENS: u32 = 1024;

#[derive(Debug, Serialize)]
pub struct MessagesRequest<'a> {
    model: &'a str,
    max_tokens: u32,
    messages: Vec<Message<'a>>,
}

#[derive(Debug, Serialize)]
struct Message<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
pub struct MessagesResponse {
    #[serde(default)]
    content: Vec<ContentBlock>,
}

#[derive(Debug, Deserialize)]
struct ContentBlock {
    text: Option<String>,
}

impl<'a> MessagesRequest<'a> {
    pub fn new(model: &'a str, prompt: &'a str) -> Self {
        Self {
            model,
            max_tokens: MAX_TOKENS,
            messages: vec![Message {
                role: "user",
                content: prompt,
            }],
        }
    }
}

impl MessagesResponse {
    /// Text of the first content block that carries any.
    pub fn into_text(self) -> Option<String> {
        self.content.into_iter().find_map(|b| b.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_request_shape() {
        let request = MessagesRequest::new("claude-3-opus", "Write three comments");
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["model"], "claude-3-opus");
        assert_eq!(json["max_tokens"], 1024);
        assert_eq!(json["messages"].as_array().unwrap().len(), 1);
        assert_eq!(json["messages"][0]["role"], "user");
        assert!(json.get("system").is_none());
        assert!(json.get("temperature").is_none());
    }

    #[test]
    fn test_response_text_skips_blocks_without_text() {
        let json = r#"{"content":[{"type":"tool_use","id":"t1"},{"type":"text","text":"[BOLD]\nNo."}]}"#;
        let response: MessagesResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.into_text().as_deref(), Some("[BOLD]\nNo."));
    }

    #[test]
    fn test_empty_content_has_no_text() {
        let response: MessagesResponse = serde_json::from_str(r#"{"content":[]}"#).unwrap();
        assert!(response.into_text().is_none());
    }
}
