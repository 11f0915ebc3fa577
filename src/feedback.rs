//! Per-letter feedback for a guess against the secret word.

use crate::WORD_LENGTH;

/// Verdict for a single guess position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LetterMark {
    /// Right letter, right position (green)
    Correct,
    /// Letter occurs elsewhere in the secret (yellow)
    Present,
    /// Letter not in the secret, or all its instances already matched (gray)
    Absent,
}

impl LetterMark {
    pub fn to_char(self) -> char {
        match self {
            LetterMark::Correct => 'G',
            LetterMark::Present => 'Y',
            LetterMark::Absent => 'X',
        }
    }
}

/// The result of evaluating one guess: the guess text, one mark per
/// position, and the secret it was scored against.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Feedback {
    guess: String,
    marks: [LetterMark; WORD_LENGTH],
    secret: String,
}

impl Feedback {
    pub fn guess(&self) -> &str {
        &self.guess
    }

    pub fn marks(&self) -> &[LetterMark; WORD_LENGTH] {
        &self.marks
    }

    /// The secret this feedback was computed against. For debugging and
    /// tests only; gameplay code should not need it.
    pub fn secret(&self) -> &str {
        &self.secret
    }

    pub fn is_correct(&self) -> bool {
        self.marks.iter().all(|&m| m == LetterMark::Correct)
    }

    /// Render the marks as a G/Y/X row, e.g. "GYXXG".
    pub fn pattern(&self) -> String {
        self.marks.iter().map(|m| m.to_char()).collect()
    }
}

impl std::fmt::Display for Feedback {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.pattern())
    }
}

/// Score `guess` against `secret` with the standard two-pass rules.
///
/// Pass 1 marks exact matches and consumes those secret positions. Pass 2
/// scans the remaining secret positions left to right for each unmarked
/// guess letter, so each secret letter instance satisfies at most one guess
/// position and exact matches always win over misplaced ones.
///
/// Both inputs must already be uppercase and exactly `WORD_LENGTH` bytes;
/// the session validates before calling.
pub fn evaluate(secret: &str, guess: &str) -> Feedback {
    let secret_bytes = secret.as_bytes();
    let guess_bytes = guess.as_bytes();
    debug_assert_eq!(secret_bytes.len(), WORD_LENGTH);
    debug_assert_eq!(guess_bytes.len(), WORD_LENGTH);

    let mut marks = [LetterMark::Absent; WORD_LENGTH];
    let mut consumed = [false; WORD_LENGTH];

    for i in 0..WORD_LENGTH {
        if guess_bytes[i] == secret_bytes[i] {
            marks[i] = LetterMark::Correct;
            consumed[i] = true;
        }
    }

    for i in 0..WORD_LENGTH {
        if marks[i] == LetterMark::Correct {
            continue;
        }
        let found = (0..WORD_LENGTH)
            .find(|&j| !consumed[j] && secret_bytes[j] == guess_bytes[i]);
        if let Some(j) = found {
            marks[i] = LetterMark::Present;
            consumed[j] = true;
        }
    }

    Feedback {
        guess: guess.to_string(),
        marks,
        secret: secret.to_string(),
    }
}
