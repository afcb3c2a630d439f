use super::InferenceConnector;
use crate::configuration::InferenceSettings;
use crate::connectors::errors::ConnectorError;
use crate::models::{
    GenerationParams, GenerationResult, Message, ModelDescriptor, RequestFormat, Role,
    TaskCategory,
};
use async_trait::async_trait;
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use serde::Serialize;
use serde_json::Value;
use std::time::Duration;
use tracing::Instrument;

/// Messages sent to chat-completion models.
const CHAT_HISTORY_LIMIT: usize = 10;
/// Messages flattened into the text-generation transcript.
const TRANSCRIPT_HISTORY_LIMIT: usize = 6;
const TOP_P: f32 = 0.9;

#[derive(Debug, Serialize)]
struct ChatTurn<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Serialize)]
struct ChatCompletionRequest<'a> {
    messages: Vec<ChatTurn<'a>>,
    max_tokens: u32,
    temperature: f32,
    top_p: f32,
    stream: bool,
}

#[derive(Debug, Serialize)]
struct TextGenerationParameters {
    max_new_tokens: u32,
    temperature: f32,
    top_p: f32,
    return_full_text: bool,
}

#[derive(Debug, Serialize)]
struct TextGenerationRequest {
    inputs: String,
    parameters: TextGenerationParameters,
}

/// HTTP client for Hugging Face style inference endpoints
pub struct InferenceClient {
    base_url: String,
    api_key: String,
    http_client: reqwest::Client,
}

impl InferenceClient {
    pub fn new(settings: &InferenceSettings) -> Result<Self, ConnectorError> {
        let timeout = Duration::from_secs(settings.timeout_secs.max(1));
        let http_client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|err| ConnectorError::Transport(format!("HTTP client error: {}", err)))?;

        Ok(Self {
            base_url: settings.base_url.trim_end_matches('/').to_string(),
            api_key: settings.api_key.clone(),
            http_client,
        })
    }

    fn chat_url(&self, model: &ModelDescriptor) -> String {
        format!("{}/{}/v1/chat/completions", self.base_url, model.remote_id)
    }

    fn standard_url(&self, model: &ModelDescriptor) -> String {
        format!("{}/{}", self.base_url, model.remote_id)
    }

    async fn post<T: Serialize>(&self, url: &str, payload: &T) -> Result<Value, ConnectorError> {
        let resp = self
            .http_client
            .post(url)
            .bearer_auth(&self.api_key)
            .header(CONTENT_TYPE, "application/json")
            .header(ACCEPT, "application/json")
            .json(payload)
            .send()
            .await?;

        let status = resp.status().as_u16();
        if status != 200 {
            let body = resp.text().await.unwrap_or_default();
            tracing::warn!(status, body = %body.chars().take(200).collect::<String>(), "Inference API returned an error status");
            return Err(ConnectorError::from_status(status));
        }

        resp.json::<Value>()
            .await
            .map_err(|_| ConnectorError::EmptyResponse)
    }

    async fn call_chat(
        &self,
        model: &ModelDescriptor,
        history: &[Message],
        params: GenerationParams,
    ) -> Result<String, ConnectorError> {
        let payload = ChatCompletionRequest {
            messages: recent(history, CHAT_HISTORY_LIMIT)
                .iter()
                .map(|m| ChatTurn {
                    role: m.role.as_str(),
                    content: &m.content,
                })
                .collect(),
            max_tokens: params.max_tokens,
            temperature: params.temperature,
            top_p: TOP_P,
            stream: false,
        };

        let body = self.post(&self.chat_url(model), &payload).await?;
        parse_chat_completion(&body).ok_or(ConnectorError::EmptyResponse)
    }

    async fn call_standard(
        &self,
        model: &ModelDescriptor,
        history: &[Message],
        params: GenerationParams,
    ) -> Result<String, ConnectorError> {
        let payload = TextGenerationRequest {
            inputs: build_transcript(history),
            parameters: TextGenerationParameters {
                max_new_tokens: params.max_tokens,
                temperature: params.temperature,
                top_p: TOP_P,
                return_full_text: false,
            },
        };

        let body = self.post(&self.standard_url(model), &payload).await?;
        parse_generated_text(&body).ok_or(ConnectorError::EmptyResponse)
    }
}

#[async_trait]
impl InferenceConnector for InferenceClient {
    async fn generate(
        &self,
        model: &ModelDescriptor,
        history: &[Message],
        params: GenerationParams,
        task: TaskCategory,
    ) -> GenerationResult {
        let span = tracing::info_span!(
            "inference_generate",
            model = %model.key,
            remote_id = %model.remote_id,
            task = %task
        );

        let outcome = match model.format {
            RequestFormat::Chat => self.call_chat(model, history, params).instrument(span).await,
            RequestFormat::Standard => {
                self.call_standard(model, history, params)
                    .instrument(span)
                    .await
            }
        };

        match outcome {
            Ok(content) => GenerationResult::success(content, model, task),
            Err(err) => {
                tracing::error!(model = %model.key, error = %err, "Remote generation failed");
                err.into_result(&model.key)
            }
        }
    }
}

fn recent(history: &[Message], limit: usize) -> &[Message] {
    &history[history.len().saturating_sub(limit)..]
}

/// `User: ...` / `Assistant: ...` lines ending with an open `Assistant:` turn.
pub(crate) fn build_transcript(history: &[Message]) -> String {
    let mut transcript = String::new();
    for message in recent(history, TRANSCRIPT_HISTORY_LIMIT) {
        let speaker = match message.role {
            Role::User => "User",
            Role::Assistant => "Assistant",
        };
        transcript.push_str(speaker);
        transcript.push_str(": ");
        transcript.push_str(&message.content);
        transcript.push('\n');
    }
    transcript.push_str("Assistant:");
    transcript
}

/// `choices[0].message.content`, trimmed; `None` when missing or blank.
pub(crate) fn parse_chat_completion(body: &Value) -> Option<String> {
    body["choices"][0]["message"]["content"]
        .as_str()
        .map(str::trim)
        .filter(|content| !content.is_empty())
        .map(str::to_string)
}

/// `generated_text` from either `[{"generated_text": ..}]` or
/// `{"generated_text": ..}`, with any over-generated `User:` turn cut off.
pub(crate) fn parse_generated_text(body: &Value) -> Option<String> {
    let generated = match body {
        Value::Array(items) => items.first()?.get("generated_text")?.as_str()?,
        Value::Object(_) => body.get("generated_text")?.as_str()?,
        _ => return None,
    };

    let generated = generated.trim();
    let cleaned = match generated.find("\nUser:") {
        Some(cut) => generated[..cut].trim(),
        None => generated,
    };

    if cleaned.is_empty() {
        None
    } else {
        Some(cleaned.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn history(len: usize) -> Vec<Message> {
        (0..len)
            .map(|i| {
                if i % 2 == 0 {
                    Message::user(format!("question {}", i))
                } else {
                    Message::assistant(format!("answer {}", i), "gpt2", "fast_response")
                }
            })
            .collect()
    }

    #[test]
    fn transcript_uses_last_six_messages() {
        let transcript = build_transcript(&history(8));
        assert!(!transcript.contains("question 0"));
        assert!(!transcript.contains("answer 1"));
        assert!(transcript.starts_with("User: question 2\nAssistant: answer 3\n"));
        assert!(transcript.ends_with("User: question 6\nAssistant: answer 7\nAssistant:"));
    }

    #[test]
    fn transcript_of_single_message() {
        let transcript = build_transcript(&[Message::user("hi")]);
        assert_eq!(transcript, "User: hi\nAssistant:");
    }

    #[test]
    fn chat_payload_keeps_last_ten_messages() {
        let messages = history(13);
        let turns = recent(&messages, CHAT_HISTORY_LIMIT);
        assert_eq!(turns.len(), 10);
        assert_eq!(turns[0].content, "answer 3");
        assert_eq!(recent(&messages[..4], CHAT_HISTORY_LIMIT).len(), 4);
    }

    #[test]
    fn chat_completion_content_is_trimmed() {
        let body = json!({"choices": [{"message": {"role": "assistant", "content": "  Hi!  "}}]});
        assert_eq!(parse_chat_completion(&body), Some("Hi!".to_string()));
    }

    #[test]
    fn chat_completion_without_content() {
        assert_eq!(parse_chat_completion(&json!({"choices": []})), None);
        assert_eq!(parse_chat_completion(&json!({"error": "boom"})), None);
        let blank = json!({"choices": [{"message": {"content": "   "}}]});
        assert_eq!(parse_chat_completion(&blank), None);
    }

    #[test]
    fn generated_text_from_list_and_object() {
        let list = json!([{"generated_text": " Paris. "}]);
        let object = json!({"generated_text": "Paris."});
        assert_eq!(parse_generated_text(&list), Some("Paris.".to_string()));
        assert_eq!(parse_generated_text(&object), Some("Paris.".to_string()));
        assert_eq!(parse_generated_text(&json!("Paris")), None);
        assert_eq!(parse_generated_text(&json!([])), None);
    }

    #[test]
    fn over_generated_user_turn_is_stripped() {
        let body = json!([{"generated_text": "Sure, here it is.\nUser: thanks\nAssistant: np"}]);
        assert_eq!(parse_generated_text(&body), Some("Sure, here it is.".to_string()));
    }

    #[test]
    fn base_url_trailing_slash_is_ignored() {
        let settings = InferenceSettings {
            base_url: "http://localhost:9999/models/".to_string(),
            ..InferenceSettings::default()
        };
        let client = InferenceClient::new(&settings).unwrap();
        let model = crate::services::ModelRegistry::builtin()
            .get("gpt2")
            .cloned()
            .unwrap();
        assert_eq!(
            client.standard_url(&model),
            "http://localhost:9999/models/openai-community/gpt2"
        );
        assert_eq!(
            client.chat_url(&model),
            "http://localhost:9999/models/openai-community/gpt2/v1/chat/completions"
        );
    }
}
