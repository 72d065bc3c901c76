//! Bounds-checked token cursor for text decoding

use crate::error::{Result, Section, StarfieldError};

/// Cursor over a sequence of trimmed tokens, one logical value each.
///
/// Framing is by token rather than by byte width, so exhaustion and
/// unparsable tokens are distinct failures: running out of tokens is
/// `UnexpectedEof` (with required/available counts), a non-numeric token
/// where a number is expected is `InvalidToken`.
pub struct TokenCursor<'a> {
    tokens: &'a [&'a str],
    pos: usize,
    section: Section,
}

impl<'a> TokenCursor<'a> {
    pub fn new(tokens: &'a [&'a str]) -> Self {
        TokenCursor {
            tokens,
            pos: 0,
            section: Section::Header,
        }
    }

    /// Set the section reported by subsequent failures.
    pub fn enter(&mut self, section: Section) {
        self.section = section;
    }

    /// Current token index.
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Tokens left in the sequence.
    pub fn remaining(&self) -> usize {
        self.tokens.len() - self.pos
    }

    /// Check that `needed` tokens remain before consuming any of them.
    pub fn require(&self, needed: u64) -> Result<()> {
        if needed > self.remaining() as u64 {
            return Err(StarfieldError::UnexpectedEof {
                section: self.section,
                offset: self.pos,
                needed,
                available: self.remaining() as u64,
            });
        }
        Ok(())
    }

    /// Take the next token verbatim.
    pub fn next(&mut self) -> Result<&'a str> {
        self.require(1)?;
        let token = self.tokens[self.pos];
        self.pos += 1;
        Ok(token)
    }

    /// Take the next token as an unsigned integer.
    pub fn next_u64(&mut self) -> Result<u64> {
        let index = self.pos;
        let token = self.next()?;
        token
            .parse::<u64>()
            .map_err(|_| StarfieldError::InvalidToken {
                token: token.to_string(),
                expected: "unsigned integer",
                index,
            })
    }

    /// Take the next token as a floating-point value.
    pub fn next_f64(&mut self) -> Result<f64> {
        let index = self.pos;
        let token = self.next()?;
        token
            .parse::<f64>()
            .map_err(|_| StarfieldError::InvalidToken {
                token: token.to_string(),
                expected: "float",
                index,
            })
    }
}
