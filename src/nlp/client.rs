use serde::{Deserialize, Serialize};

use crate::{
    config::LlmSettings,
    core::errors::{Result, TrackerError},
};

/// Text-completion service used by the intake flow.
pub trait LlmClient {
    /// Sends `prompt` and returns the model's free-form text reply.
    fn generate(&self, prompt: &str) -> Result<String>;

    /// Names of the models available to the configured account.
    fn list_models(&self) -> Result<Vec<String>>;
}

/// Blocking client for the Gemini `generateContent` REST API.
///
/// Single attempt per call; no timeout or retry is applied.
#[derive(Debug, Clone)]
pub struct GeminiClient {
    settings: LlmSettings,
    api_key: String,
    client: reqwest::blocking::Client,
}

#[derive(Serialize)]
struct GenerateRequest<'a> {
    contents: Vec<Content<'a>>,
}

#[derive(Serialize)]
struct Content<'a> {
    parts: Vec<Part<'a>>,
}

#[derive(Serialize)]
struct Part<'a> {
    text: &'a str,
}

#[derive(Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Deserialize)]
struct CandidatePart {
    #[serde(default)]
    text: Option<String>,
}

#[derive(Deserialize)]
struct ModelList {
    #[serde(default)]
    models: Vec<ModelInfo>,
}

#[derive(Deserialize)]
struct ModelInfo {
    name: String,
}

impl GeminiClient {
    /// Creates a client, reading the API key from the configured environment variable.
    pub fn from_settings(settings: LlmSettings) -> Result<Self> {
        let api_key = settings.api_key()?;
        Ok(Self::new(settings, api_key))
    }

    pub fn new(settings: LlmSettings, api_key: String) -> Self {
        Self {
            settings,
            api_key,
            client: reqwest::blocking::Client::new(),
        }
    }

    fn endpoint(&self, suffix: &str) -> String {
        format!("{}/{}", self.settings.api_base.trim_end_matches('/'), suffix)
    }

    fn check_status(response: reqwest::blocking::Response) -> Result<reqwest::blocking::Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let body = response.text().unwrap_or_default();
        Err(TrackerError::Llm(format!("API error {status}: {body}")))
    }
}

impl LlmClient for GeminiClient {
    fn generate(&self, prompt: &str) -> Result<String> {
        let request = GenerateRequest {
            contents: vec![Content {
                parts: vec![Part { text: prompt }],
            }],
        };
        let url = self.endpoint(&format!("models/{}:generateContent", self.settings.model));
        tracing::debug!(model = %self.settings.model, "sending intake prompt");
        let response = self
            .client
            .post(url)
            .header("x-goog-api-key", &self.api_key)
            .json(&request)
            .send()?;
        let parsed: GenerateResponse = Self::check_status(response)?.json()?;
        extract_text(parsed)
    }

    fn list_models(&self) -> Result<Vec<String>> {
        let response = self
            .client
            .get(self.endpoint("models"))
            .header("x-goog-api-key", &self.api_key)
            .send()?;
        let parsed: ModelList = Self::check_status(response)?.json()?;
        Ok(parsed.models.into_iter().map(|model| model.name).collect())
    }
}

fn extract_text(response: GenerateResponse) -> Result<String> {
    let text: String = response
        .candidates
        .into_iter()
        .next()
        .and_then(|candidate| candidate.content)
        .map(|content| {
            content
                .parts
                .into_iter()
                .filter_map(|part| part.text)
                .collect()
        })
        .unwrap_or_default();
    if text.is_empty() {
        return Err(TrackerError::Llm("no response text from model".into()));
    }
    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_joins_without_double_slash() {
        let settings = LlmSettings {
            api_base: "https://example.test/v1beta/".into(),
            ..LlmSettings::default()
        };
        let client = GeminiClient::new(settings, "key".into());
        assert_eq!(
            client.endpoint("models/gemini-2.5-flash:generateContent"),
            "https://example.test/v1beta/models/gemini-2.5-flash:generateContent"
        );
    }

    #[test]
    fn candidate_parts_are_concatenated() {
        let response: GenerateResponse = serde_json::from_str(
            r#"{"candidates":[{"content":{"parts":[{"text":"[{\"a\":"},{"text":"1}]"}]}}]}"#,
        )
        .unwrap();
        assert_eq!(extract_text(response).unwrap(), "[{\"a\":1}]");
    }

    #[test]
    fn empty_candidates_is_an_error() {
        let response: GenerateResponse = serde_json::from_str(r#"{"candidates":[]}"#).unwrap();
        assert!(matches!(extract_text(response), Err(TrackerError::Llm(_))));
    }
}
