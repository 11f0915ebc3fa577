use crate::debug_log;
use crate::feedback::{Feedback, evaluate};
use crate::{MAX_ATTEMPTS, WORD_LENGTH};

/// Everything `submit_guess` or `restart` can fail with. All three guess
/// errors leave the session untouched, so the caller may retry with
/// corrected input.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GameError {
    #[error("game already ended")]
    GameAlreadyOver,

    #[error("guess must be exactly {WORD_LENGTH} letters")]
    InvalidGuessShape,

    #[error("word not found in dictionary: {0}")]
    UnknownWord(String),

    #[error("word bank has no words to draw from")]
    EmptyWordBank,
}

/// Supplies secrets and answers membership queries. The session consumes
/// this; it never inspects the vocabulary directly.
pub trait WordSource {
    /// Draw a secret word of `WORD_LENGTH` uppercase letters, or `None` if
    /// the vocabulary is empty.
    fn random_word(&mut self) -> Option<String>;

    /// Exact membership test against the vocabulary. `candidate` is already
    /// uppercase; substring or prefix matches must not count.
    fn is_valid_word(&self, candidate: &str) -> bool;
}

/// One game: a secret, a guess budget, and an over flag. `submit_guess` is
/// the only place state transitions happen.
pub struct GameSession<W: WordSource> {
    source: W,
    secret: String,
    attempts_used: u32,
    max_attempts: u32,
    over: bool,
}

impl<W: WordSource> GameSession<W> {
    /// Start a session with a freshly drawn secret.
    pub fn new(source: W) -> Result<Self, GameError> {
        let mut session = GameSession {
            source,
            secret: String::new(),
            attempts_used: 0,
            max_attempts: MAX_ATTEMPTS,
            over: false,
        };
        session.restart()?;
        Ok(session)
    }

    /// Draw a new secret and reset attempts and the over flag.
    pub fn restart(&mut self) -> Result<(), GameError> {
        self.secret = self
            .source
            .random_word()
            .ok_or(GameError::EmptyWordBank)?;
        self.attempts_used = 0;
        self.over = false;
        debug_log!("new game started, secret drawn");
        Ok(())
    }

    /// Validate a guess, score it, and advance the state machine.
    ///
    /// The game ends on the call that either produces an all-Correct
    /// feedback or uses the last budgeted attempt; a finished game rejects
    /// every further guess until `restart`.
    pub fn submit_guess(&mut self, guess: &str) -> Result<Feedback, GameError> {
        if self.over {
            return Err(GameError::GameAlreadyOver);
        }

        let guess = guess.trim().to_uppercase();
        if guess.len() != WORD_LENGTH || !guess.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(GameError::InvalidGuessShape);
        }

        if !self.source.is_valid_word(&guess) {
            return Err(GameError::UnknownWord(guess));
        }

        self.attempts_used += 1;
        let feedback = evaluate(&self.secret, &guess);

        if feedback.is_correct() {
            self.over = true;
            debug_log!("secret guessed in {} attempts", self.attempts_used);
        } else if self.attempts_used == self.max_attempts {
            self.over = true;
            debug_log!("guess budget exhausted");
        }

        Ok(feedback)
    }

    /// Whether the game is over. Reads the flag set by `submit_guess`;
    /// never recomputed from the attempt count.
    pub fn is_finished(&self) -> bool {
        self.over
    }

    pub fn attempts(&self) -> u32 {
        self.attempts_used
    }

    /// The secret word. For debugging and end-of-game display.
    pub fn reveal_secret(&self) -> &str {
        &self.secret
    }
}
