//! Lookahead over a token stream.

use std::collections::VecDeque;

use crate::lexer::{Token, TokenKind};

/// Wraps a token iterator with arbitrary-depth peeking.
///
/// Peeked tokens are cached at the back of a queue and handed out from the
/// front, so the order of the underlying stream is preserved. Peeking never
/// consumes: a token is only removed by [`Iterator::next`].
pub struct TokenBuffer<'a, I>
where
    I: Iterator<Item = Token<'a>>,
{
    source: I,
    peeked: VecDeque<Token<'a>>,
}

impl<'a, I> TokenBuffer<'a, I>
where
    I: Iterator<Item = Token<'a>>,
{
    pub fn new(source: I) -> Self {
        Self {
            source,
            peeked: VecDeque::new(),
        }
    }

    /// Look at the token `n` positions ahead (0 is the next one to be
    /// consumed), pulling from the source as needed.
    ///
    /// Returns `None` once the stream ends before offset `n`.
    pub fn peek(&mut self, n: usize) -> Option<&Token<'a>> {
        while self.peeked.len() <= n {
            let token = self.source.next()?;
            self.peeked.push_back(token);
        }
        self.peeked.get(n)
    }

    /// Kind of the token `n` positions ahead.
    pub fn peek_kind(&mut self, n: usize) -> Option<TokenKind> {
        self.peek(n).map(|t| t.kind)
    }

    /// Check if the token `n` positions ahead is of the given kind.
    pub fn peek_is(&mut self, n: usize, kind: TokenKind) -> bool {
        self.peek_kind(n) == Some(kind)
    }

    /// Number of tokens pulled from the source but not yet consumed.
    pub fn buffered(&self) -> usize {
        self.peeked.len()
    }
}

impl<'a, I> Iterator for TokenBuffer<'a, I>
where
    I: Iterator<Item = Token<'a>>,
{
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        self.peeked.pop_front().or_else(|| self.source.next())
    }
}
