// Library interface for wordle-game
// This allows integration tests to access internal modules

pub mod cli;
pub mod feedback;
pub mod game_state;
pub mod logging;
pub mod wordbank;

// Re-export the core types for easier use in tests and front ends
pub use feedback::{Feedback, LetterMark, evaluate};
pub use game_state::{GameError, GameSession, WordSource};
pub use wordbank::{WordBank, load_wordbank_from_file, load_wordbank_from_str};

/// Number of letters in every secret and guess
pub const WORD_LENGTH: usize = 5;

/// Guesses allowed per game
pub const MAX_ATTEMPTS: u32 = 6;
