//! An explicit read position over a layer's tokens.
//!
//! Classifiers never hold an iterator across slot decisions; they peek,
//! decide, and advance, so a sub-scan (position `/` size, a repeat pair)
//! can look ahead without consuming what it does not claim.

use crate::values::ValueToken;

/// A cursor over a borrowed token slice.
#[derive(Debug, Clone)]
pub struct TokenCursor<'a> {
    tokens: &'a [ValueToken],
    position: usize,
}

impl<'a> TokenCursor<'a> {
    /// A cursor at the first token of `tokens`.
    #[must_use]
    pub const fn new(tokens: &'a [ValueToken]) -> Self {
        Self {
            tokens,
            position: 0,
        }
    }

    /// The token under the cursor.
    #[must_use]
    pub fn peek(&self) -> Option<&'a ValueToken> {
        self.tokens.get(self.position)
    }

    /// The token `offset` places after the cursor.
    #[must_use]
    pub fn peek_at(&self, offset: usize) -> Option<&'a ValueToken> {
        self.tokens.get(self.position + offset)
    }

    /// Consume and return the token under the cursor.
    pub fn advance(&mut self) -> Option<&'a ValueToken> {
        let token = self.tokens.get(self.position)?;
        self.position += 1;
        Some(token)
    }

    /// Consume the token under the cursor only if `predicate` accepts it.
    pub fn next_if(&mut self, predicate: impl FnOnce(&ValueToken) -> bool) -> Option<&'a ValueToken> {
        let token = self.peek()?;
        if predicate(token) {
            self.position += 1;
            Some(token)
        } else {
            None
        }
    }

    /// True once every token has been consumed.
    #[must_use]
    pub const fn is_done(&self) -> bool {
        self.position >= self.tokens.len()
    }

    /// Index of the token under the cursor.
    #[must_use]
    pub const fn position(&self) -> usize {
        self.position
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ident(name: &str) -> ValueToken {
        ValueToken::Identifier(name.to_string())
    }

    #[test]
    fn next_if_only_consumes_accepted_tokens() {
        let tokens = [ident("left"), ValueToken::Operator('/'), ident("cover")];
        let mut cursor = TokenCursor::new(&tokens);

        assert!(cursor.next_if(|t| t.is_operator('/')).is_none());
        assert_eq!(cursor.position(), 0);
        assert_eq!(cursor.next_if(|t| t.is_ident("left")), Some(&tokens[0]));
        assert_eq!(cursor.peek_at(1), Some(&tokens[2]));
        assert_eq!(cursor.advance(), Some(&tokens[1]));
        assert_eq!(cursor.advance(), Some(&tokens[2]));
        assert!(cursor.is_done());
        assert_eq!(cursor.advance(), None);
        assert_eq!(cursor.position(), 3);
    }
}
