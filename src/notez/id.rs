//! Note id generation.
//!
//! Ids are short base-36 tokens (`k3j9x0a`). Randomness comes from a v4 UUID,
//! so two tokens can still collide; [`fresh_id`] checks every candidate
//! against the live collection and retries.

use crate::error::{NotezError, Result};
use crate::model::Note;
use uuid::Uuid;

pub const DEFAULT_ID_LENGTH: usize = 7;
pub const MIN_ID_LENGTH: usize = 4;
pub const MAX_ID_LENGTH: usize = 16;
pub const MAX_ID_ATTEMPTS: usize = 32;

const ALPHABET: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Source of candidate ids. Uniqueness is not its concern.
pub trait IdGenerator {
    fn next_token(&mut self) -> String;
}

#[derive(Debug, Clone)]
pub struct RandomTokens {
    len: usize,
}

impl RandomTokens {
    pub fn new(len: usize) -> Self {
        Self {
            len: len.clamp(MIN_ID_LENGTH, MAX_ID_LENGTH),
        }
    }

    pub fn token_len(&self) -> usize {
        self.len
    }
}

impl Default for RandomTokens {
    fn default() -> Self {
        Self::new(DEFAULT_ID_LENGTH)
    }
}

impl IdGenerator for RandomTokens {
    fn next_token(&mut self) -> String {
        let digits = to_base36(Uuid::new_v4().as_u128());
        let start = digits.len().saturating_sub(self.len);
        format!("{:0>width$}", &digits[start..], width = self.len)
    }
}

fn to_base36(mut value: u128) -> String {
    if value == 0 {
        return "0".to_string();
    }
    let mut out = Vec::new();
    while value > 0 {
        out.push(ALPHABET[(value % 36) as usize]);
        value /= 36;
    }
    out.reverse();
    // Every byte comes from ALPHABET
    String::from_utf8(out).unwrap_or_default()
}

/// Draws tokens until one is not already used by `notes`.
pub fn fresh_id<G: IdGenerator + ?Sized>(ids: &mut G, notes: &[Note]) -> Result<String> {
    for attempt in 1..=MAX_ID_ATTEMPTS {
        let candidate = ids.next_token();
        if !candidate.is_empty() && !notes.iter().any(|n| n.id == candidate) {
            return Ok(candidate);
        }
        log::debug!("id collision on attempt {}: {}", attempt, candidate);
    }
    Err(NotezError::IdSpaceExhausted(MAX_ID_ATTEMPTS))
}

/// Replays a fixed list of tokens, cycling when exhausted.
#[cfg(any(test, feature = "test_utils"))]
#[derive(Debug, Clone)]
pub struct ScriptedIds {
    tokens: Vec<String>,
    cursor: usize,
}

#[cfg(any(test, feature = "test_utils"))]
impl ScriptedIds {
    pub fn new<I, T>(tokens: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        Self {
            tokens: tokens.into_iter().map(Into::into).collect(),
            cursor: 0,
        }
    }
}

#[cfg(any(test, feature = "test_utils"))]
impl IdGenerator for ScriptedIds {
    fn next_token(&mut self) -> String {
        if self.tokens.is_empty() {
            return String::new();
        }
        let token = self.tokens[self.cursor % self.tokens.len()].clone();
        self.cursor += 1;
        token
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn random_tokens_have_requested_length_and_alphabet() {
        let mut ids = RandomTokens::default();
        for _ in 0..50 {
            let token = ids.next_token();
            assert_eq!(token.len(), DEFAULT_ID_LENGTH);
            assert!(token.bytes().all(|b| ALPHABET.contains(&b)));
        }
    }

    #[test]
    fn length_is_clamped() {
        assert_eq!(RandomTokens::new(1).token_len(), MIN_ID_LENGTH);
        assert_eq!(RandomTokens::new(99).token_len(), MAX_ID_LENGTH);
    }

    #[test]
    fn base36_encoding() {
        assert_eq!(to_base36(0), "0");
        assert_eq!(to_base36(35), "z");
        assert_eq!(to_base36(36), "10");
    }

    #[test]
    fn fresh_id_skips_taken_tokens() {
        let notes = vec![Note::untitled("aaaa".into())];
        let mut ids = ScriptedIds::new(["aaaa", "aaaa", "bbbb"]);
        assert_eq!(fresh_id(&mut ids, &notes).unwrap(), "bbbb");
    }

    #[test]
    fn fresh_id_gives_up_eventually() {
        let notes = vec![Note::untitled("aaaa".into())];
        let mut ids = ScriptedIds::new(["aaaa"]);
        let err = fresh_id(&mut ids, &notes).unwrap_err();
        assert!(matches!(err, NotezError::IdSpaceExhausted(MAX_ID_ATTEMPTS)));
    }
}
