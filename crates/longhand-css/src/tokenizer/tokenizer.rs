use super::token::{CSSToken, HashType, Span, SpannedToken};

/// [§ 4.3 Tokenizer Algorithms](https://www.w3.org/TR/css-syntax-3/#tokenizer-algorithms)
///
/// CSS tokenizer following the CSS Syntax Module Level 3 specification.
///
/// Works directly on the borrowed input and records the byte span of every
/// token, so callers can recover the exact source text of a function's
/// arguments without re-serializing nested tokens.
pub struct CSSTokenizer<'a> {
    /// The input being tokenized
    input: &'a str,
    /// Current byte position in the input
    position: usize,
    /// Byte length of the most recently consumed code point (for reconsume)
    last_len: usize,
    /// Collected tokens
    tokens: Vec<SpannedToken>,
}

impl<'a> CSSTokenizer<'a> {
    /// Create a new CSS tokenizer over the given input.
    #[must_use]
    pub const fn new(input: &'a str) -> Self {
        Self {
            input,
            position: 0,
            last_len: 0,
            tokens: Vec::new(),
        }
    }

    /// Tokenize `input` in one call and return the tokens (ending with EOF).
    #[must_use]
    pub fn tokenize(input: &'a str) -> Vec<SpannedToken> {
        let mut tokenizer = Self::new(input);
        tokenizer.run();
        tokenizer.into_tokens()
    }

    /// [§ 4.3.1 Consume a token](https://www.w3.org/TR/css-syntax-3/#consume-token)
    ///
    /// Consume tokens until EOF. The EOF token is the last one collected.
    pub fn run(&mut self) {
        loop {
            // "Consume comments."
            self.consume_comments();
            let start = self.position;
            let token = self.consume_token();
            let is_eof = token.is_eof();
            self.tokens.push(SpannedToken {
                token,
                span: Span::new(start, self.position),
            });
            if is_eof {
                break;
            }
        }
    }

    /// Return the collected tokens.
    #[must_use]
    pub fn into_tokens(self) -> Vec<SpannedToken> {
        self.tokens
    }

    /// [§ 4.3.1 Consume a token](https://www.w3.org/TR/css-syntax-3/#consume-token)
    fn consume_token(&mut self) -> CSSToken {
        let Some(c) = self.consume() else {
            return CSSToken::EOF;
        };

        match c {
            // "whitespace"
            c if is_whitespace(c) => {
                self.consume_whitespace();
                CSSToken::Whitespace
            }

            '"' | '\'' => self.consume_string_token(c),

            // "U+0023 NUMBER SIGN (#)"
            '#' => {
                if self.peek().is_some_and(is_ident_code_point)
                    || is_valid_escape(self.peek(), self.peek_at(1))
                {
                    // "If the next 3 input code points would start an ident sequence,
                    // set the <hash-token>'s type flag to 'id'."
                    let hash_type = if self.would_start_ident_sequence() {
                        HashType::Id
                    } else {
                        HashType::Unrestricted
                    };
                    let value = self.consume_ident_sequence();
                    CSSToken::Hash { value, hash_type }
                } else {
                    CSSToken::Delim('#')
                }
            }

            '(' => CSSToken::LeftParen,
            ')' => CSSToken::RightParen,
            ',' => CSSToken::Comma,
            ':' => CSSToken::Colon,
            ';' => CSSToken::Semicolon,
            '[' => CSSToken::LeftBracket,
            ']' => CSSToken::RightBracket,
            '{' => CSSToken::LeftBrace,
            '}' => CSSToken::RightBrace,

            // "U+002B PLUS SIGN (+)" / "U+002E FULL STOP (.)"
            '+' | '.' => {
                if self.would_start_number_with(c) {
                    self.reconsume();
                    self.consume_numeric_token()
                } else {
                    CSSToken::Delim(c)
                }
            }

            // "U+002D HYPHEN-MINUS (-)"
            '-' => {
                if self.would_start_number_with('-') {
                    self.reconsume();
                    self.consume_numeric_token()
                } else if would_start_ident_sequence('-', self.peek(), self.peek_at(1)) {
                    self.reconsume();
                    self.consume_ident_like_token()
                } else {
                    CSSToken::Delim('-')
                }
            }

            // "U+0040 COMMERCIAL AT (@)"
            '@' => {
                if self.would_start_ident_sequence() {
                    CSSToken::AtKeyword(self.consume_ident_sequence())
                } else {
                    CSSToken::Delim('@')
                }
            }

            // "U+005C REVERSE SOLIDUS (\)"
            '\\' => {
                if is_valid_escape(Some('\\'), self.peek()) {
                    self.reconsume();
                    self.consume_ident_like_token()
                } else {
                    // "This is a parse error."
                    CSSToken::Delim('\\')
                }
            }

            c if c.is_ascii_digit() => {
                self.reconsume();
                self.consume_numeric_token()
            }

            c if is_ident_start_code_point(c) => {
                self.reconsume();
                self.consume_ident_like_token()
            }

            // "anything else"
            c => CSSToken::Delim(c),
        }
    }

    /// [§ 4.3.2 Consume comments](https://www.w3.org/TR/css-syntax-3/#consume-comment)
    fn consume_comments(&mut self) {
        while self.peek() == Some('/') && self.peek_at(1) == Some('*') {
            self.skip(2);
            loop {
                match self.consume() {
                    Some('*') if self.peek() == Some('/') => {
                        self.skip(1);
                        break;
                    }
                    Some(_) => {}
                    None => break,
                }
            }
        }
    }

    fn consume_whitespace(&mut self) {
        while self.peek().is_some_and(is_whitespace) {
            self.skip(1);
        }
    }

    /// [§ 4.3.4 Consume a string token](https://www.w3.org/TR/css-syntax-3/#consume-string-token)
    fn consume_string_token(&mut self, ending_code_point: char) -> CSSToken {
        let mut value = String::new();

        loop {
            match self.consume() {
                // "EOF: This is a parse error. Return the <string-token>."
                None => return CSSToken::String(value),
                Some(c) if c == ending_code_point => return CSSToken::String(value),
                // "newline: This is a parse error. Reconsume the current input
                // code point, create a <bad-string-token>, and return it."
                Some('\n') => {
                    self.reconsume();
                    return CSSToken::BadString;
                }
                Some('\\') => match self.peek() {
                    None => {}
                    Some('\n') => self.skip(1),
                    Some(_) => value.push(self.consume_escaped_code_point()),
                },
                Some(c) => value.push(c),
            }
        }
    }

    /// [§ 4.3.5 Consume a numeric token](https://www.w3.org/TR/css-syntax-3/#consume-numeric-token)
    fn consume_numeric_token(&mut self) -> CSSToken {
        let (value, integer) = self.consume_number();

        if self.would_start_ident_sequence() {
            let unit = self.consume_ident_sequence();
            CSSToken::Dimension { value, unit }
        } else if self.peek() == Some('%') {
            self.skip(1);
            CSSToken::Percentage { value }
        } else {
            CSSToken::Number { value, integer }
        }
    }

    /// [§ 4.3.6 Consume an ident-like token](https://www.w3.org/TR/css-syntax-3/#consume-ident-like-token)
    fn consume_ident_like_token(&mut self) -> CSSToken {
        let string = self.consume_ident_sequence();

        if self.peek() != Some('(') {
            return CSSToken::Ident(string);
        }
        self.skip(1);

        if !string.eq_ignore_ascii_case("url") {
            return CSSToken::Function(string);
        }

        // "While the next two input code points are whitespace, consume the
        // next input code point."
        while self.peek().is_some_and(is_whitespace) && self.peek_at(1).is_some_and(is_whitespace)
        {
            self.skip(1);
        }

        // "If the next one or two input code points are U+0022 QUOTATION MARK,
        // U+0027 APOSTROPHE, or whitespace followed by U+0022 QUOTATION MARK or
        // U+0027 APOSTROPHE, then create a <function-token>."
        let quoted = |c: Option<char>| matches!(c, Some('"' | '\''));
        if quoted(self.peek()) || (self.peek().is_some_and(is_whitespace) && quoted(self.peek_at(1)))
        {
            CSSToken::Function(string)
        } else {
            self.consume_url_token()
        }
    }

    /// [§ 4.3.7 Consume a url token](https://www.w3.org/TR/css-syntax-3/#consume-url-token)
    fn consume_url_token(&mut self) -> CSSToken {
        let mut value = String::new();
        self.consume_whitespace();

        loop {
            match self.consume() {
                Some(')') | None => return CSSToken::Url(value),
                Some(c) if is_whitespace(c) => {
                    self.consume_whitespace();
                    return match self.peek() {
                        Some(')') => {
                            self.skip(1);
                            CSSToken::Url(value)
                        }
                        None => CSSToken::Url(value),
                        Some(_) => {
                            self.consume_bad_url_remnants();
                            CSSToken::BadUrl
                        }
                    };
                }
                Some('"' | '\'' | '(') => {
                    self.consume_bad_url_remnants();
                    return CSSToken::BadUrl;
                }
                Some('\\') => {
                    if is_valid_escape(Some('\\'), self.peek()) {
                        value.push(self.consume_escaped_code_point());
                    } else {
                        self.consume_bad_url_remnants();
                        return CSSToken::BadUrl;
                    }
                }
                Some(c) => value.push(c),
            }
        }
    }

    /// [§ 4.3.14 Consume the remnants of a bad url](https://www.w3.org/TR/css-syntax-3/#consume-remnants-of-bad-url)
    fn consume_bad_url_remnants(&mut self) {
        loop {
            match self.consume() {
                Some(')') | None => return,
                Some('\\') if is_valid_escape(Some('\\'), self.peek()) => {
                    let _ = self.consume_escaped_code_point();
                }
                Some(_) => {}
            }
        }
    }

    /// [§ 4.3.11 Consume an ident sequence](https://www.w3.org/TR/css-syntax-3/#consume-name)
    fn consume_ident_sequence(&mut self) -> String {
        let mut result = String::new();

        loop {
            match self.consume() {
                Some(c) if is_ident_code_point(c) => result.push(c),
                Some('\\') if is_valid_escape(Some('\\'), self.peek()) => {
                    result.push(self.consume_escaped_code_point());
                }
                Some(_) => {
                    self.reconsume();
                    return result;
                }
                None => return result,
            }
        }
    }

    /// [§ 4.3.12 Consume a number](https://www.w3.org/TR/css-syntax-3/#consume-number)
    ///
    /// Returns the numeric value and whether the type flag is "integer".
    fn consume_number(&mut self) -> (f64, bool) {
        let start = self.position;
        let mut integer = true;

        if matches!(self.peek(), Some('+' | '-')) {
            self.skip(1);
        }
        self.consume_digits();

        // "If the next 2 input code points are U+002E FULL STOP (.) followed by a digit..."
        if self.peek() == Some('.') && self.peek_at(1).is_some_and(|c| c.is_ascii_digit()) {
            self.skip(2);
            self.consume_digits();
            integer = false;
        }

        // "If the next 2 or 3 input code points are (E or e), optionally followed
        // by (- or +), followed by a digit..."
        if matches!(self.peek(), Some('e' | 'E')) {
            let has_sign = matches!(self.peek_at(1), Some('+' | '-'));
            let digit_at = if has_sign { 2 } else { 1 };
            if self.peek_at(digit_at).is_some_and(|c| c.is_ascii_digit()) {
                self.skip(digit_at + 1);
                self.consume_digits();
                integer = false;
            }
        }

        // "Convert repr to a number."
        let repr = &self.input[start..self.position];
        (repr.parse().unwrap_or(0.0), integer)
    }

    fn consume_digits(&mut self) {
        while self.peek().is_some_and(|c| c.is_ascii_digit()) {
            self.skip(1);
        }
    }

    /// [§ 4.3.13 Consume an escaped code point](https://www.w3.org/TR/css-syntax-3/#consume-escaped-code-point)
    ///
    /// Assumes the backslash has already been consumed.
    fn consume_escaped_code_point(&mut self) -> char {
        match self.consume() {
            Some(c) if c.is_ascii_hexdigit() => {
                let mut hex = String::from(c);
                // "Consume as many hex digits as possible, but no more than 5."
                while hex.len() < 6 {
                    match self.peek() {
                        Some(d) if d.is_ascii_hexdigit() => {
                            hex.push(d);
                            self.skip(1);
                        }
                        _ => break,
                    }
                }
                if self.peek().is_some_and(is_whitespace) {
                    self.skip(1);
                }
                let code_point = u32::from_str_radix(&hex, 16).unwrap_or(0);
                // "If this number is zero, or is for a surrogate, or is greater than the
                // maximum allowed code point, return U+FFFD REPLACEMENT CHARACTER."
                if code_point == 0 {
                    char::REPLACEMENT_CHARACTER
                } else {
                    char::from_u32(code_point).unwrap_or(char::REPLACEMENT_CHARACTER)
                }
            }
            // "EOF: This is a parse error. Return U+FFFD REPLACEMENT CHARACTER."
            None => char::REPLACEMENT_CHARACTER,
            Some(c) => c,
        }
    }

    /// [§ 4.3.9 Check if three code points would start an ident sequence](https://www.w3.org/TR/css-syntax-3/#would-start-an-identifier)
    fn would_start_ident_sequence(&self) -> bool {
        self.peek()
            .is_some_and(|first| would_start_ident_sequence(first, self.peek_at(1), self.peek_at(2)))
    }

    /// [§ 4.3.10 Check if three code points would start a number](https://www.w3.org/TR/css-syntax-3/#starts-with-a-number)
    ///
    /// `first` is the code point that was just consumed; the lookahead is the
    /// remaining input.
    fn would_start_number_with(&self, first: char) -> bool {
        let second = self.peek();
        match first {
            '+' | '-' => {
                second.is_some_and(|c| c.is_ascii_digit())
                    || (second == Some('.') && self.peek_at(1).is_some_and(|c| c.is_ascii_digit()))
            }
            '.' => second.is_some_and(|c| c.is_ascii_digit()),
            c => c.is_ascii_digit(),
        }
    }

    /// Consume and return the next code point.
    fn consume(&mut self) -> Option<char> {
        let c = self.input[self.position..].chars().next()?;
        self.last_len = c.len_utf8();
        self.position += self.last_len;
        Some(c)
    }

    /// Consume `count` code points, discarding them.
    fn skip(&mut self, count: usize) {
        for _ in 0..count {
            if self.consume().is_none() {
                break;
            }
        }
    }

    /// Put back the last consumed code point.
    fn reconsume(&mut self) {
        self.position -= self.last_len;
        self.last_len = 0;
    }

    /// Peek at the next code point without consuming it.
    fn peek(&self) -> Option<char> {
        self.peek_at(0)
    }

    /// Peek at a code point `offset` positions past the current one.
    fn peek_at(&self, offset: usize) -> Option<char> {
        self.input[self.position..].chars().nth(offset)
    }
}

/// [§ 4.3.8 Check if two code points are a valid escape](https://www.w3.org/TR/css-syntax-3/#starts-with-a-valid-escape)
fn is_valid_escape(first: Option<char>, second: Option<char>) -> bool {
    first == Some('\\') && second.is_some_and(|c| c != '\n')
}

/// [§ 4.3.9 Check if three code points would start an ident sequence](https://www.w3.org/TR/css-syntax-3/#would-start-an-identifier)
fn would_start_ident_sequence(first: char, second: Option<char>, third: Option<char>) -> bool {
    match first {
        '-' => {
            second.is_some_and(|c| is_ident_start_code_point(c) || c == '-')
                || is_valid_escape(second, third)
        }
        '\\' => is_valid_escape(Some('\\'), second),
        c => is_ident_start_code_point(c),
    }
}

/// [§ 4.2 Definitions - whitespace](https://www.w3.org/TR/css-syntax-3/#whitespace)
pub(crate) const fn is_whitespace(c: char) -> bool {
    matches!(c, '\n' | '\t' | ' ' | '\r' | '\x0C')
}

/// [§ 4.2 Definitions - ident-start code point](https://www.w3.org/TR/css-syntax-3/#ident-start-code-point)
///
/// "A letter, a non-ASCII code point, or U+005F LOW LINE (_)."
const fn is_ident_start_code_point(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_' || !c.is_ascii()
}

/// [§ 4.2 Definitions - ident code point](https://www.w3.org/TR/css-syntax-3/#ident-code-point)
///
/// "An ident-start code point, a digit, or U+002D HYPHEN-MINUS (-)."
const fn is_ident_code_point(c: char) -> bool {
    is_ident_start_code_point(c) || c.is_ascii_digit() || c == '-'
}
