// Integration tests for the wordle-game crate
// These drive full games through the public GameSession API

use std::io::Cursor;
use wordle_game::cli::game_loop;
use wordle_game::{
    GameError, GameSession, LetterMark, MAX_ATTEMPTS, WordBank, WordSource,
};

/// Deals a fixed secret while validating guesses against a full vocabulary.
struct ScriptedBank {
    secret: String,
    vocab: WordBank,
}

impl ScriptedBank {
    fn new(secret: &str, vocab: &[&str]) -> Self {
        ScriptedBank {
            secret: secret.to_uppercase(),
            vocab: WordBank::new(vocab.iter().map(|w| w.to_string()).collect()),
        }
    }
}

impl WordSource for ScriptedBank {
    fn random_word(&mut self) -> Option<String> {
        Some(self.secret.clone())
    }

    fn is_valid_word(&self, candidate: &str) -> bool {
        self.vocab.is_valid_word(candidate)
    }
}

fn game_with_secret(secret: &str, vocab: &[&str]) -> GameSession<ScriptedBank> {
    GameSession::new(ScriptedBank::new(secret, vocab)).unwrap()
}

#[test]
fn test_correct_first_guess_ends_game() {
    let mut game = game_with_secret("CRANE", &["CRANE", "SLATE"]);
    let fb = game.submit_guess("CRANE").unwrap();
    assert_eq!(fb.marks(), &[LetterMark::Correct; 5]);
    assert!(game.is_finished());
    assert_eq!(game.attempts(), 1);
}

#[test]
fn test_duplicate_letter_disambiguation() {
    let mut game = game_with_secret("ALLOW", &["ALLOW", "LOLLY"]);
    let fb = game.submit_guess("LOLLY").unwrap();
    use LetterMark::{Absent, Correct, Present};
    assert_eq!(fb.marks(), &[Present, Present, Correct, Absent, Absent]);
    assert!(!game.is_finished());
}

#[test]
fn test_budget_exhaustion_then_rejection() {
    let mut game = game_with_secret("MANGO", &["MANGO", "SLATE", "CRANE"]);
    for _ in 0..MAX_ATTEMPTS {
        let fb = game.submit_guess("SLATE").unwrap();
        assert!(!fb.is_correct());
    }
    assert!(game.is_finished());
    assert_eq!(game.attempts(), MAX_ATTEMPTS);
    assert_eq!(game.submit_guess("CRANE"), Err(GameError::GameAlreadyOver));
    assert_eq!(game.attempts(), MAX_ATTEMPTS);
}

#[test]
fn test_invalid_shape_leaves_attempts_unchanged() {
    let mut game = game_with_secret("CRANE", &["CRANE"]);
    assert_eq!(game.submit_guess("AB"), Err(GameError::InvalidGuessShape));
    assert_eq!(game.attempts(), 0);
    assert!(!game.is_finished());
}

#[test]
fn test_unknown_word_leaves_attempts_unchanged() {
    let mut game = game_with_secret("CRANE", &["CRANE", "SLATE"]);
    assert_eq!(
        game.submit_guess("ZZZZZ"),
        Err(GameError::UnknownWord("ZZZZZ".to_string()))
    );
    assert_eq!(game.attempts(), 0);
    assert!(!game.is_finished());
}

#[test]
fn test_case_insensitive_guessing() {
    let mut lower_game = game_with_secret("CRANE", &["CRANE", "SLATE"]);
    let mut upper_game = game_with_secret("CRANE", &["CRANE", "SLATE"]);
    let lower = lower_game.submit_guess("slate").unwrap();
    let upper = upper_game.submit_guess("SLATE").unwrap();
    assert_eq!(lower.marks(), upper.marks());
    assert_eq!(lower_game.attempts(), upper_game.attempts());
    assert_eq!(lower_game.is_finished(), upper_game.is_finished());
}

#[test]
fn test_full_game_against_embedded_bank() {
    // Play an entire game with real vocabulary and a drawn secret: keep
    // guessing the secret itself after one wrong opener.
    let bank = WordBank::embedded();
    let mut game = GameSession::new(bank).unwrap();

    let opener = if game.reveal_secret() == "SLATE" {
        "CRANE"
    } else {
        "SLATE"
    };
    let fb = game.submit_guess(opener).unwrap();
    assert!(!fb.is_correct());

    let secret = game.reveal_secret().to_string();
    let fb = game.submit_guess(&secret).unwrap();
    assert!(fb.is_correct());
    assert!(game.is_finished());
    assert_eq!(game.attempts(), 2);
}

#[test]
fn test_restart_produces_fresh_session() {
    let mut game = game_with_secret("CRANE", &["CRANE", "SLATE"]);
    game.submit_guess("CRANE").unwrap();
    assert!(game.is_finished());

    game.restart().unwrap();
    assert!(!game.is_finished());
    assert_eq!(game.attempts(), 0);
    let fb = game.submit_guess("SLATE").unwrap();
    assert!(!fb.is_correct());
    assert_eq!(game.attempts(), 1);
}

#[test]
fn test_game_loop_win_transcript() {
    let game = game_with_secret("CRANE", &["CRANE", "SLATE"]);
    let input = "slate\ncrane\nexit\n";
    game_loop(game, Cursor::new(input)).unwrap();
}

#[test]
fn test_game_loop_loss_and_new_game_transcript() {
    let game = game_with_secret("MANGO", &["MANGO", "SLATE", "CRANE"]);
    // Six misses lose the game, a seventh is turned away, 'new' restarts,
    // then win the fresh game.
    let input =
        "slate\nslate\nslate\nslate\nslate\nslate\nslate\nnew\nmango\nexit\n";
    game_loop(game, Cursor::new(input)).unwrap();
}

#[test]
fn test_game_loop_rejects_bad_input_without_spending_attempts() {
    let game = game_with_secret("CRANE", &["CRANE"]);
    // Bad shape, unknown word, then the win on the first spent attempt.
    let input = "ab\nzzzzz\ncrane\nexit\n";
    game_loop(game, Cursor::new(input)).unwrap();
}
