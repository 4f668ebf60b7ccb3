//! The value-level token the shorthand classifiers work on.
//!
//! Unlike [`crate::tokenizer::CSSToken`], a [`ValueToken`] never nests:
//! a function call carries its argument text verbatim, so commas and
//! parentheses inside `cubic-bezier(0, 0, 1, 1)` or `url(a,b.png)` can never
//! be mistaken for layer separators.

use core::fmt;

use super::keywords::{self, contains};

/// One component of a declaration value.
#[derive(Debug, Clone, PartialEq)]
pub enum ValueToken {
    /// A bare identifier: `center`, `no-repeat`, `spin`.
    Identifier(String),
    /// A number with a unit: `10px`, `1.5s`.
    Dimension {
        /// Numeric part.
        value: f64,
        /// Unit, escapes decoded.
        unit: String,
        /// The token as written.
        text: String,
    },
    /// A percentage: `50%`.
    Percentage {
        /// Numeric part.
        value: f64,
        /// The token as written.
        text: String,
    },
    /// A unitless number: `0`, `2.5`.
    Number {
        /// Numeric value.
        value: f64,
        /// The token as written.
        text: String,
    },
    /// A quoted string, unescaped.
    StringLiteral(String),
    /// A hash token without the `#`: `fff`, `a0b1c2`.
    Hash(String),
    /// A function call with its arguments as opaque source text.
    FunctionCall {
        /// Function name as written, without `(`.
        name: String,
        /// Everything between the outer parentheses, trimmed.
        args: String,
    },
    /// A significant delimiter; in practice `/`.
    Operator(char),
}

impl ValueToken {
    /// The identifier text, if this is an identifier.
    #[must_use]
    pub fn ident(&self) -> Option<&str> {
        match self {
            Self::Identifier(name) => Some(name),
            _ => None,
        }
    }

    /// True if this is an identifier matching `keyword` (ASCII case-insensitive).
    #[must_use]
    pub fn is_ident(&self, keyword: &str) -> bool {
        self.ident().is_some_and(|name| name.eq_ignore_ascii_case(keyword))
    }

    /// True if this is an identifier from `list`.
    #[must_use]
    pub fn is_ident_in(&self, list: &[&str]) -> bool {
        self.ident().is_some_and(|name| contains(list, name))
    }

    /// The function name, if this is a function call.
    #[must_use]
    pub fn function_name(&self) -> Option<&str> {
        match self {
            Self::FunctionCall { name, .. } => Some(name),
            _ => None,
        }
    }

    /// True if this is a call to one of the functions in `list`.
    #[must_use]
    pub fn is_function_in(&self, list: &[&str]) -> bool {
        self.function_name().is_some_and(|name| contains(list, name))
    }

    /// True if this is the operator `symbol`.
    #[must_use]
    pub fn is_operator(&self, symbol: char) -> bool {
        matches!(self, Self::Operator(c) if *c == symbol)
    }

    /// `<length>`: a dimension with a length unit, a unitless zero, or a math function.
    #[must_use]
    pub fn is_length(&self) -> bool {
        match self {
            Self::Dimension { unit, .. } => keywords::is_length_unit(unit),
            Self::Number { value, .. } => *value == 0.0,
            _ => self.is_function_in(keywords::MATH_FUNCTIONS),
        }
    }

    /// `<length-percentage>`.
    #[must_use]
    pub fn is_length_percentage(&self) -> bool {
        matches!(self, Self::Percentage { .. }) || self.is_length()
    }

    /// `<time>`: a dimension in `s` or `ms`.
    #[must_use]
    pub fn is_time(&self) -> bool {
        matches!(self, Self::Dimension { unit, .. } if keywords::is_time_unit(unit))
    }

    /// A non-negative unitless number.
    #[must_use]
    pub fn non_negative_number(&self) -> Option<f64> {
        match self {
            Self::Number { value, .. } if *value >= 0.0 => Some(*value),
            _ => None,
        }
    }
}

/// Numeric tokens are written back as the author wrote them; identifiers and
/// hash names are re-escaped so the output reads back as the same token.
impl fmt::Display for ValueToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Identifier(name) => write_escaped(f, name, true),
            Self::Dimension { text, .. } | Self::Percentage { text, .. } | Self::Number { text, .. } => {
                f.write_str(text)
            }
            Self::StringLiteral(text) => {
                f.write_str("\"")?;
                for c in text.chars() {
                    match c {
                        '"' | '\\' => write!(f, "\\{c}")?,
                        '\n' => f.write_str("\\a ")?,
                        c => write!(f, "{c}")?,
                    }
                }
                f.write_str("\"")
            }
            Self::Hash(value) => {
                f.write_str("#")?;
                write_escaped(f, value, false)
            }
            Self::FunctionCall { name, args } => write!(f, "{name}({args})"),
            Self::Operator(symbol) => write!(f, "{symbol}"),
        }
    }
}

/// [CSSOM § 2.1 serialize an identifier](https://drafts.csswg.org/cssom/#serialize-an-identifier)
///
/// With `identifier` false the leading-digit and lone-hyphen rules are
/// skipped, which is how the name of a hash token is written.
fn write_escaped(f: &mut fmt::Formatter<'_>, text: &str, identifier: bool) -> fmt::Result {
    let starts_with_hyphen = text.starts_with('-');
    for (index, c) in text.chars().enumerate() {
        // "If the character is in the range [0-9] and it is the first
        // character, or the second character and the first is '-'"
        let leading_digit = identifier
            && c.is_ascii_digit()
            && (index == 0 || (index == 1 && starts_with_hyphen));
        match c {
            '\0' => f.write_str("\u{FFFD}")?,
            '\u{1}'..='\u{1f}' | '\u{7f}' => write!(f, "\\{:x} ", u32::from(c))?,
            _ if leading_digit => write!(f, "\\{:x} ", u32::from(c))?,
            '-' if identifier && text == "-" => f.write_str("\\-")?,
            c if !c.is_ascii() || c == '-' || c == '_' || c.is_ascii_alphanumeric() => {
                write!(f, "{c}")?;
            }
            c => write!(f, "\\{c}")?,
        }
    }
    Ok(())
}

/// Join tokens with single spaces, the canonical separator of every slot value.
#[must_use]
pub fn join_tokens(tokens: &[ValueToken]) -> String {
    tokens
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}
