// Puzzle authoring is delegated to a language model. The core only knows how to
// phrase the request and what a usable answer looks like; the transport lives
// in the infra layer (see `infra::ai::GeminiClient`).

use super::puzzle_id::PuzzleId;
use super::puzzle_models::{Puzzle, PuzzleShapeError, QUESTIONS_PER_PUZZLE};
use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum GeneratorError {
    #[error("AI API error ({status}): {message}")]
    Api { status: u16, message: String },
    #[error("AI response contained no candidate text")]
    EmptyCandidate,
    #[error("AI response was not valid puzzle JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("Generated puzzle failed validation: {0}")]
    Validation(#[from] PuzzleShapeError),
    #[error("Transport error: {0}")]
    Transport(String),
}

impl GeneratorError {
    pub fn is_transient(&self) -> bool {
        match self {
            GeneratorError::Api { status, .. } => *status == 429 || *status >= 500,
            GeneratorError::Transport(_) => true,
            _ => false,
        }
    }
}

#[async_trait]
pub trait PuzzleGenerator: Send + Sync {
    /// Produces a validated puzzle for the given day.
    async fn generate(&self, id: PuzzleId) -> Result<Puzzle, GeneratorError>;
}

/// Builds the instruction sent to the model for one puzzle day.
pub fn build_prompt(id: PuzzleId) -> String {
    format!(
        "Generate a \"LinkLoom\" daily puzzle, number {id}. \
         Write exactly {QUESTIONS_PER_PUZZLE} trivia questions. Each answer must be a \
         single common English word. All {QUESTIONS_PER_PUZZLE} answers must share a \
         hidden connection that is itself a single word (the \"link\"), for example \
         words that can each be combined with the link to form a compound word or \
         well-known phrase. For each question give the question text as \"t\", the \
         one-word answer as \"a\" and a short hint as \"h\" that helps without giving \
         the answer away. Then give the link word as \"link\" and a hint for the link \
         as \"link_hint\". Keep the questions suitable for a general audience, vary \
         the topics, and make this puzzle different from any other day's puzzle. \
         Respond only with JSON."
    )
}

/// Parses the model's text output and enforces the puzzle shape.
pub fn parse_puzzle(text: &str) -> Result<Puzzle, GeneratorError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(GeneratorError::EmptyCandidate);
    }

    let puzzle: Puzzle = serde_json::from_str(trimmed)?;
    puzzle.validate()?;
    Ok(puzzle)
}
