//! Chat-completions request and response shapes.

use serde::{Deserialize, Serialize};

use crate::llm_client::prompts::SYSTEM_PROMPT;

pub const DEFAULT_API_URL: &str = "https://api.openai.com/v1/chat/completions";
const TEMPERATURE: f64 = 0.7;

#[derive(Debug, Serialize)]
pub struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    temperature: f64,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
pub struct ChatResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: Option<ChoiceMessage>,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    content: Option<String>,
}

impl<'a> ChatRequest<'a> {
    pub fn new(model: &'a str, prompt: &'a str) -> Self {
        Self {
            model,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: SYSTEM_PROMPT,
                },
                ChatMessage {
                    role: "user",
                    content: prompt,
                },
            ],
            temperature: TEMPERATURE,
        }
    }
}

impl ChatResponse {
    /// Text of the first choice, if the response has one.
    pub fn into_text(self) -> Option<String> {
        self.choices
            .into_iter()
            .next()
            .and_then(|c| c.message)
            .and_then(|m| m.content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chat_request_shape() {
        let request = ChatRequest::new("gpt-4-turbo", "Write three comments");
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["model"], "gpt-4-turbo");
        assert_eq!(json["temperature"], 0.7);
        assert_eq!(json["messages"][0]["role"], "system");
        assert_eq!(json["messages"][0]["content"], SYSTEM_PROMPT);
        assert_eq!(json["messages"][1]["role"], "user");
        assert_eq!(json["messages"][1]["content"], "Write three comments");
        assert!(json.get("max_tokens").is_none());
    }

    #[test]
    fn test_response_text_from_first_choice() {
        let json = r#"{"choices":[{"message":{"role":"assistant","content":"[PROFESSIONAL]\nHi"}},{"message":{"content":"second"}}]}"#;
        let response: ChatResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.into_text().as_deref(), Some("[PROFESSIONAL]\nHi"));
    }

    #[test]
    fn test_response_without_choices_has_no_text() {
        let response: ChatResponse = serde_json::from_str(r#"{"id":"chatcmpl-1"}"#).unwrap();
        assert!(response.into_text().is_none());

        let response: ChatResponse =
            serde_json::from_str(r#"{"choices":[{"message":{"content":null}}]}"#).unwrap();
        assert!(response.into_text().is_none());
    }
}
