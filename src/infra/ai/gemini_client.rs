// =============================================================================
// GEMINI CLIENT - Google AI Studio API Integration
// =============================================================================
//
// This module implements `PuzzleGenerator` on top of Google's Gemini API
// (https://ai.google.dev/gemini-api/docs).
//
// **Structured output:**
// The request sets `responseMimeType = application/json` together with a
// `responseSchema` describing the puzzle, so the model replies with JSON text
// at `candidates[0].content.parts[0].text`. That text is then parsed and
// validated by the core (`parse_puzzle`), since the schema is a request, not a
// guarantee.
//
// **Authentication:**
// The API key is passed as a query parameter (`?key=API_KEY`).

use crate::config::GeminiConfig;
use crate::core::puzzle::{
    build_prompt, parse_puzzle, GeneratorError, Puzzle, PuzzleGenerator, PuzzleId,
    QUESTIONS_PER_PUZZLE,
};
use crate::core::retry::RetryPolicy;
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::json;

// =============================================================================
// GEMINI API DATA STRUCTURES
// =============================================================================
//
// See: https://ai.google.dev/api/generate-content

/// A single part of content. Only text is used here.
#[derive(Debug, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
struct Part {
    #[serde(skip_serializing_if = "Option::is_none")]
    text: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Default)]
#[serde(default)]
struct Content {
    /// "user" or "model"
    role: String,
    parts: Vec<Part>,
}

/// Generation configuration, including the structured-output directive.
/// See: https://ai.google.dev/gemini-api/docs/structured-output
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    response_mime_type: String,
    response_schema: serde_json::Value,
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest {
    contents: Vec<Content>,
    generation_config: GenerationConfig,
}

/// A candidate response from the model.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Candidate {
    #[serde(default)]
    content: Content,

    /// Why the model stopped generating (e.g., "STOP", "SAFETY").
    finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentResponse {
    /// Usually just one.
    candidates: Option<Vec<Candidate>>,
}

/// Error response from the Gemini API.
#[derive(Debug, Deserialize)]
struct GeminiErrorDetail {
    message: String,
}

#[derive(Debug, Deserialize)]
struct GeminiErrorResponse {
    error: GeminiErrorDetail,
}

// =============================================================================
// GEMINI CLIENT IMPLEMENTATION
// =============================================================================

/// Client for generating puzzles with Google's Gemini API.
pub struct GeminiClient {
    client: Client,
    config: GeminiConfig,
    retry: RetryPolicy,
}

impl GeminiClient {
    pub fn new(client: Client, config: GeminiConfig, retry: RetryPolicy) -> Self {
        Self {
            client,
            config,
            retry,
        }
    }

    /// Endpoint for the configured model, without the key.
    fn endpoint(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.config.base_url.trim_end_matches('/'),
            self.config.model
        )
    }

    /// JSON schema the model's reply must follow.
    fn puzzle_schema() -> serde_json::Value {
        json!({
            "type": "OBJECT",
            "properties": {
                "questions": {
                    "type": "ARRAY",
                    "minItems": QUESTIONS_PER_PUZZLE,
                    "maxItems": QUESTIONS_PER_PUZZLE,
                    "items": {
                        "type": "OBJECT",
                        "properties": {
                            "t": { "type": "STRING" },
                            "a": { "type": "STRING" },
                            "h": { "type": "STRING" }
                        },
                        "required": ["t", "a", "h"]
                    }
                },
                "link": { "type": "STRING" },
                "link_hint": { "type": "STRING" }
            },
            "required": ["questions", "link", "link_hint"]
        })
    }

    fn build_request(id: PuzzleId) -> GenerateContentRequest {
        GenerateContentRequest {
            contents: vec![Content {
                role: "user".to_string(),
                parts: vec![Part {
                    text: Some(build_prompt(id)),
                }],
            }],
            generation_config: GenerationConfig {
                response_mime_type: "application/json".to_string(),
                response_schema: Self::puzzle_schema(),
                temperature: Some(1.0),
            },
        }
    }

    /// Turns a non-2xx reply into an error, preferring Gemini's own message.
    fn api_error(status: u16, body: &str) -> GeneratorError {
        let message = serde_json::from_str::<GeminiErrorResponse>(body)
            .map(|e| e.error.message)
            .unwrap_or_else(|_| body.to_string());
        GeneratorError::Api { status, message }
    }

    /// Extracts the JSON text from the first candidate.
    fn candidate_text(body: &str) -> Result<String, GeneratorError> {
        let response: GenerateContentResponse = serde_json::from_str(body)?;

        let candidate = response
            .candidates
            .unwrap_or_default()
            .into_iter()
            .next()
            .ok_or(GeneratorError::EmptyCandidate)?;

        let text: String = candidate
            .content
            .parts
            .into_iter()
            .filter_map(|p| p.text)
            .collect();

        if text.trim().is_empty() {
            tracing::warn!(
                finish_reason = candidate.finish_reason.as_deref().unwrap_or("unknown"),
                "Gemini candidate had no text"
            );
            return Err(GeneratorError::EmptyCandidate);
        }

        Ok(text)
    }

    async fn generate_once(&self, id: PuzzleId) -> Result<Puzzle, GeneratorError> {
        let request = Self::build_request(id);

        // Never log the URL with the key attached.
        tracing::debug!(model = %self.config.model, puzzle_id = %id, "Sending Gemini request");

        let response = self
            .client
            .post(self.endpoint())
            .query(&[("key", self.config.api_key.as_str())])
            .json(&request)
            .send()
            .await
            .map_err(|e| GeneratorError::Transport(e.without_url().to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| GeneratorError::Transport(e.without_url().to_string()))?;

        if !status.is_success() {
            tracing::error!(status = status.as_u16(), %body, "Gemini API error");
            return Err(Self::api_error(status.as_u16(), &body));
        }

        let text = Self::candidate_text(&body)?;
        parse_puzzle(&text)
    }
}

#[async_trait]
impl PuzzleGenerator for GeminiClient {
    async fn generate(&self, id: PuzzleId) -> Result<Puzzle, GeneratorError> {
        let puzzle = self
            .retry
            .run("Gemini generateContent", GeneratorError::is_transient, || {
                self.generate_once(id)
            })
            .await?;

        tracing::info!(puzzle_id = %id, link = %puzzle.link, "Generated puzzle");
        Ok(puzzle)
    }
}

// =============================================================================
// TESTS
// =============================================================================
