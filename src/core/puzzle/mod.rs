pub mod puzzle_generator;
pub mod puzzle_id;
pub mod puzzle_models;
pub mod puzzle_store;

pub use puzzle_generator::{build_prompt, parse_puzzle, GeneratorError, PuzzleGenerator};
pub use puzzle_id::{Clock, FixedClock, PuzzleId, SystemClock};
pub use puzzle_models::{Puzzle, PuzzleShapeError, Question, QUESTIONS_PER_PUZZLE};
pub use puzzle_store::{PuzzleStore, StoreError};
