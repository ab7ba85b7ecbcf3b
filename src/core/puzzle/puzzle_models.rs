// Domain models for the daily LinkLoom puzzle.
//
// The serde field names are the wire format shared by the AI response schema,
// the stored document, and the game client, so they stay terse (`t`, `a`, `h`).

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Number of clue/answer pairs in every puzzle.
pub const QUESTIONS_PER_PUZZLE: usize = 3;

/// One clue in the puzzle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    /// Prompt text shown to the player.
    pub t: String,
    /// Single-word answer.
    pub a: String,
    /// Hint revealed on request.
    pub h: String,
}

/// The generated content for one day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Puzzle {
    pub questions: Vec<Question>,
    /// The word connecting all three answers.
    pub link: String,
    pub link_hint: String,
}

/// Ways a parsed puzzle can break the expected shape.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PuzzleShapeError {
    #[error("expected exactly 3 questions, got {0}")]
    QuestionCount(usize),
    #[error("field `{0}` is empty")]
    EmptyField(String),
    #[error("field `{field}` must be a single word, got {value:?}")]
    NotSingleWord { field: String, value: String },
}

impl Puzzle {
    /// Checks the invariants the prompt asks the model to honour.
    ///
    /// The provider's response schema is not trusted on its own: a puzzle that
    /// slips through with the wrong number of questions or a multi-word answer
    /// is rejected here before it can be stored.
    pub fn validate(&self) -> Result<(), PuzzleShapeError> {
        if self.questions.len() != QUESTIONS_PER_PUZZLE {
            return Err(PuzzleShapeError::QuestionCount(self.questions.len()));
        }

        for (i, q) in self.questions.iter().enumerate() {
            require_non_empty(&format!("questions[{i}].t"), &q.t)?;
            require_single_word(&format!("questions[{i}].a"), &q.a)?;
            require_non_empty(&format!("questions[{i}].h"), &q.h)?;
        }

        require_single_word("link", &self.link)?;
        require_non_empty("link_hint", &self.link_hint)?;

        Ok(())
    }
}

fn require_non_empty(field: &str, value: &str) -> Result<(), PuzzleShapeError> {
    if value.trim().is_empty() {
        return Err(PuzzleShapeError::EmptyField(field.to_string()));
    }
    Ok(())
}

fn require_single_word(field: &str, value: &str) -> Result<(), PuzzleShapeError> {
    require_non_empty(field, value)?;
    if value.trim().split_whitespace().count() != 1 {
        return Err(PuzzleShapeError::NotSingleWord {
            field: field.to_string(),
            value: value.to_string(),
        });
    }
    Ok(())
}

#[cfg(test)]
pub(crate) fn sample_puzzle() -> Puzzle {
    Puzzle {
        questions: vec![
            Question {
                t: "Opposite of night".to_string(),
                a: "Day".to_string(),
                h: "When the sun is up".to_string(),
            },
            Question {
                t: "Camera burst of light".to_string(),
                a: "Flash".to_string(),
                h: "Also means very quick".to_string(),
            },
            Question {
                t: "Earth's natural satellite".to_string(),
                a: "Moon".to_string(),
                h: "It has phases".to_string(),
            },
        ],
        link: "Light".to_string(),
        link_hint: "What each answer gives off, or can be followed by".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_puzzle_passes() {
        assert_eq!(sample_puzzle().validate(), Ok(()));
    }

    #[test]
    fn test_wrong_question_count_rejected() {
        let mut puzzle = sample_puzzle();
        puzzle.questions.pop();
        assert_eq!(puzzle.validate(), Err(PuzzleShapeError::QuestionCount(2)));

        let mut puzzle = sample_puzzle();
        puzzle.questions.push(puzzle.questions[0].clone());
        assert_eq!(puzzle.validate(), Err(PuzzleShapeError::QuestionCount(4)));
    }

    #[test]
    fn test_multi_word_link_rejected() {
        let mut puzzle = sample_puzzle();
        puzzle.link = "Street light".to_string();
        assert!(matches!(
            puzzle.validate(),
            Err(PuzzleShapeError::NotSingleWord { ref field, .. }) if field == "link"
        ));
    }

    #[test]
    fn test_empty_answer_rejected() {
        let mut puzzle = sample_puzzle();
        puzzle.questions[1].a = "  ".to_string();
        assert_eq!(
            puzzle.validate(),
            Err(PuzzleShapeError::EmptyField("questions[1].a".to_string()))
        );
    }

    #[test]
    fn test_wire_field_names() {
        let json = serde_json::to_value(sample_puzzle()).unwrap();
        assert!(json.get("link_hint").is_some());
        assert_eq!(json["questions"][0]["a"], "Day");
        assert!(json["questions"][0].get("t").is_some());
        assert!(json["questions"][0].get("h").is_some());
    }
}
