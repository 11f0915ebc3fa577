use crate::WORD_LENGTH;
use crate::game_state::WordSource;
use rand::seq::SliceRandom;
use std::collections::HashSet;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

pub const EMBEDDED_WORDBANK: &str = include_str!("resources/wordbank.txt");

fn is_playable(word: &str) -> bool {
    word.len() == WORD_LENGTH && word.chars().all(|c| c.is_ascii_alphabetic())
}

pub fn load_wordbank_from_str(data: &str) -> Vec<String> {
    data.lines()
        .map(|line| line.trim().to_uppercase())
        .filter(|word| is_playable(word))
        .collect()
}

pub fn load_wordbank_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<String>> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);
    let mut words = Vec::new();
    for line in reader.lines() {
        let word = line?.trim().to_uppercase();
        if is_playable(&word) {
            words.push(word);
        }
    }
    Ok(words)
}

/// A vocabulary of five-letter words: secrets are drawn uniformly from it
/// and guesses are checked against it as exact full entries.
pub struct WordBank {
    words: Vec<String>,
    index: HashSet<String>,
}

impl WordBank {
    /// Build a bank from already-loaded words. Entries are normalized to
    /// uppercase; malformed ones are dropped.
    pub fn new(words: Vec<String>) -> Self {
        let words: Vec<String> = words
            .into_iter()
            .map(|w| w.trim().to_uppercase())
            .filter(|w| is_playable(w))
            .collect();
        let index = words.iter().cloned().collect();
        WordBank { words, index }
    }

    pub fn embedded() -> Self {
        WordBank::new(load_wordbank_from_str(EMBEDDED_WORDBANK))
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> io::Result<Self> {
        Ok(WordBank::new(load_wordbank_from_file(path)?))
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl WordSource for WordBank {
    fn random_word(&mut self) -> Option<String> {
        self.words.choose(&mut rand::thread_rng()).cloned()
    }

    fn is_valid_word(&self, candidate: &str) -> bool {
        self.index.contains(candidate)
    }
}
