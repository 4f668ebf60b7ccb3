//! CSS Token types per [§ 4 Tokenization](https://www.w3.org/TR/css-syntax-3/#tokenization).
//!
//! Only the token types that can occur inside a declaration value matter to
//! the shorthand engine, but the full set is kept so that malformed input is
//! reported as the token it actually is instead of being folded into a delim.

use core::fmt;

/// A half-open byte range `[start, end)` into the tokenized input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Span {
    /// Byte offset of the first code point of the token.
    pub start: usize,
    /// Byte offset one past the last code point of the token.
    pub end: usize,
}

impl Span {
    /// Create a span covering `start..end`.
    #[must_use]
    pub const fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// The text this span covers in `source`.
    ///
    /// Returns an empty string if the span does not fall on `source`'s
    /// character boundaries.
    #[must_use]
    pub fn slice<'a>(&self, source: &'a str) -> &'a str {
        source.get(self.start..self.end).unwrap_or_default()
    }
}

/// [§ 4.2 Definitions](https://www.w3.org/TR/css-syntax-3/#token-diagrams)
///
/// "A `<hash-token>` with the type flag set to 'id'... or 'unrestricted'."
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HashType {
    /// "id" - the hash token's value is a valid identifier
    Id,
    /// "unrestricted" - the hash token's value is not a valid identifier
    Unrestricted,
}

/// [§ 4.2 Definitions](https://www.w3.org/TR/css-syntax-3/#token-diagrams)
///
/// CSS tokens as defined by the CSS Syntax Module Level 3 specification.
#[derive(Debug, Clone, PartialEq)]
pub enum CSSToken {
    /// "`<ident-token>`"
    Ident(String),

    /// "`<function-token>`" - the name, without the opening parenthesis.
    Function(String),

    /// "`<at-keyword-token>`"
    AtKeyword(String),

    /// "`<hash-token>`"
    Hash {
        /// "a value composed of one or more code points"
        value: String,
        /// "a type flag set to either 'id' or 'unrestricted'"
        hash_type: HashType,
    },

    /// "`<string-token>`"
    String(String),

    /// "`<bad-string-token>`"
    BadString,

    /// "`<url-token>`"
    Url(String),

    /// "`<bad-url-token>`"
    BadUrl,

    /// "`<delim-token>`"
    Delim(char),

    /// "`<number-token>`"
    Number {
        /// "a numeric value"
        value: f64,
        /// "a type flag set to either 'integer' or 'number'"
        integer: bool,
    },

    /// "`<percentage-token>`"
    Percentage {
        /// "a numeric value"
        value: f64,
    },

    /// "`<dimension-token>`"
    Dimension {
        /// "a numeric value"
        value: f64,
        /// "a unit"
        unit: String,
    },

    /// "`<whitespace-token>`"
    Whitespace,

    /// "`<colon-token>`"
    Colon,

    /// "`<semicolon-token>`"
    Semicolon,

    /// "`<comma-token>`"
    Comma,

    /// `<[-token>`
    LeftBracket,

    /// `<]-token>`
    RightBracket,

    /// `<(-token>`
    LeftParen,

    /// `<)-token>`
    RightParen,

    /// `<{-token>`
    LeftBrace,

    /// `<}-token>`
    RightBrace,

    /// End of input
    EOF,
}

impl CSSToken {
    /// Returns true if this is an EOF token.
    #[must_use]
    pub const fn is_eof(&self) -> bool {
        matches!(self, Self::EOF)
    }

    /// Returns true if this token opens a nesting level that a matching
    /// closing token must end (`(`, `[`, `{`, or a function).
    #[must_use]
    pub const fn opens_block(&self) -> bool {
        matches!(
            self,
            Self::Function(_) | Self::LeftParen | Self::LeftBracket | Self::LeftBrace
        )
    }

    /// Returns true if this token closes a nesting level.
    #[must_use]
    pub const fn closes_block(&self) -> bool {
        matches!(self, Self::RightParen | Self::RightBracket | Self::RightBrace)
    }
}

impl fmt::Display for CSSToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ident(v) => write!(f, "<ident:{v}>"),
            Self::Function(v) => write!(f, "<function:{v}(>"),
            Self::AtKeyword(v) => write!(f, "<at-keyword:@{v}>"),
            Self::Hash { value, hash_type } => {
                let t = match hash_type {
                    HashType::Id => "id",
                    HashType::Unrestricted => "unrestricted",
                };
                write!(f, "<hash:#{value} ({t})>")
            }
            Self::String(v) => write!(f, "<string:\"{v}\">"),
            Self::BadString => write!(f, "<bad-string>"),
            Self::Url(v) => write!(f, "<url:{v}>"),
            Self::BadUrl => write!(f, "<bad-url>"),
            Self::Delim(c) => write!(f, "<delim:{c}>"),
            Self::Number { value, .. } => write!(f, "<number:{value}>"),
            Self::Percentage { value } => write!(f, "<percentage:{value}%>"),
            Self::Dimension { value, unit } => write!(f, "<dimension:{value}{unit}>"),
            Self::Whitespace => write!(f, "<whitespace>"),
            Self::Colon => write!(f, "<colon>"),
            Self::Semicolon => write!(f, "<semicolon>"),
            Self::Comma => write!(f, "<comma>"),
            Self::LeftBracket => write!(f, "<[>"),
            Self::RightBracket => write!(f, "<]>"),
            Self::LeftParen => write!(f, "<(>"),
            Self::RightParen => write!(f, "<)>"),
            Self::LeftBrace => write!(f, "<{{>"),
            Self::RightBrace => write!(f, "<}}>"),
            Self::EOF => write!(f, "<EOF>"),
        }
    }
}

/// A token together with the span of input it was consumed from.
#[derive(Debug, Clone, PartialEq)]
pub struct SpannedToken {
    /// The token.
    pub token: CSSToken,
    /// Where in the input the token came from.
    pub span: Span,
}
