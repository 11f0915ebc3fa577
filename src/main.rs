use std::io;
use wordle_game::cli::{game_loop, parse_cli};
use wordle_game::game_state::GameSession;
use wordle_game::info_log;
use wordle_game::wordbank::WordBank;

fn main() {
    env_logger::init();

    let cli = parse_cli();
    let bank = match &cli.wordbank_path {
        Some(path) => match WordBank::from_file(path) {
            Ok(bank) => bank,
            Err(e) => {
                eprintln!("Failed to load word bank from '{path}': {e}");
                return;
            }
        },
        None => WordBank::embedded(),
    };
    info_log!("loaded {} words", bank.len());
    println!("Loaded {} words.", bank.len());

    let game = match GameSession::new(bank) {
        Ok(game) => game,
        Err(e) => {
            eprintln!("Could not start a game: {e}");
            return;
        }
    };

    let stdin = io::stdin();
    if let Err(e) = game_loop(game, stdin.lock()) {
        eprintln!("Game ended unexpectedly: {e}");
    }
}
