use crate::feedback::Feedback;
use crate::{MAX_ATTEMPTS, WORD_LENGTH};
use crate::game_state::{GameError, GameSession, WordSource};
use clap::Parser;
use std::io::BufRead;

/// Wordle game CLI options
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to a newline-delimited word-list file (defaults to the
    /// embedded word bank)
    #[arg(short = 'i', long = "input")]
    pub wordbank_path: Option<String>,
}

#[must_use]
pub fn parse_cli() -> Cli {
    Cli::parse()
}

enum PlayerInput {
    Guess(String),
    Exit,
    NewGame,
}

fn read_input<R: BufRead>(
    reader: &mut R,
    finished: bool,
    attempts_left: u32,
) -> Option<PlayerInput> {
    if finished {
        println!("\nGame over. Enter 'new' to restart or 'exit' to quit:");
    } else {
        println!("\nEnter your guess ({attempts_left} left, or 'exit' to quit, or 'new' to restart):");
    }
    let mut input = String::new();
    if reader.read_line(&mut input).ok()? == 0 {
        return Some(PlayerInput::Exit);
    }
    let input = input.trim().to_string();

    match input.to_uppercase().as_str() {
        "EXIT" => Some(PlayerInput::Exit),
        "NEW" => Some(PlayerInput::NewGame),
        _ => Some(PlayerInput::Guess(input)),
    }
}

fn display_feedback(feedback: &Feedback) {
    println!("{}", feedback.guess());
    println!("{feedback}");
}

fn display_error(err: &GameError) {
    println!("{err}. Try again.");
}

fn display_win(attempts: u32) {
    println!("You guessed it in {attempts} attempts!");
}

fn display_loss(secret: &str) {
    println!("Out of guesses. The word was {secret}.");
}

/// Interactive game loop over any `BufRead`, so tests can drive it with a
/// `Cursor`. Returns when the player exits or input runs dry.
pub fn game_loop<W: WordSource, R: BufRead>(
    mut game: GameSession<W>,
    mut reader: R,
) -> Result<(), GameError> {
    println!("Guess the {WORD_LENGTH}-letter word. {MAX_ATTEMPTS} attempts.");

    loop {
        let attempts_left = MAX_ATTEMPTS - game.attempts();
        let guess = match read_input(&mut reader, game.is_finished(), attempts_left) {
            None | Some(PlayerInput::Exit) => {
                println!("Exiting.");
                return Ok(());
            }
            Some(PlayerInput::NewGame) => {
                game.restart()?;
                println!("New game started.");
                continue;
            }
            Some(PlayerInput::Guess(g)) => g,
        };

        match game.submit_guess(&guess) {
            Ok(feedback) => {
                display_feedback(&feedback);
                if feedback.is_correct() {
                    display_win(game.attempts());
                } else if game.is_finished() {
                    display_loss(game.reveal_secret());
                }
            }
            // Covers shape/vocabulary rejections and the finished game
            // turning away further guesses until 'new'.
            Err(err) => display_error(&err),
        }
    }
}
