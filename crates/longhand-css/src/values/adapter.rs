//! Turning raw value text into [`ValueToken`]s.
//!
//! The CSS tokenizer does the lexing; this adapter flattens its output into
//! the shape the classifiers want. A function token swallows everything up to
//! its matching `)` and keeps it as source text, so nested commas and
//! parentheses are never seen by the layer logic.

use crate::error::{Result, ShorthandError};
use crate::tokenizer::{CSSToken, CSSTokenizer, SpannedToken};

use super::token::ValueToken;

/// Tokenize one layer (or one whole single-layer value) into value tokens.
///
/// Whitespace and commas are separators and are dropped. Every other
/// delimiter becomes an [`ValueToken::Operator`]. Blocks, at-keywords,
/// colons, semicolons, bad strings and bad urls are rejected, as is any
/// function or closing token that does not balance.
///
/// # Errors
///
/// [`ShorthandError::UnbalancedValue`] for an unclosed function, string, or
/// url, or a stray closing token; [`ShorthandError::InvalidToken`] for a
/// token that can never be part of a shorthand value.
pub fn tokenize_value(source: &str) -> Result<Vec<ValueToken>> {
    let tokens = CSSTokenizer::tokenize(source);
    let mut out = Vec::new();
    let mut index = 0;
    let written = |spanned: &SpannedToken| spanned.span.slice(source).to_string();

    while let Some(spanned) = tokens.get(index) {
        index += 1;
        let value = match &spanned.token {
            CSSToken::EOF => break,
            CSSToken::Whitespace | CSSToken::Comma => continue,
            CSSToken::Ident(name) => ValueToken::Identifier(name.clone()),
            CSSToken::Function(name) => {
                let (args, next) = function_arguments(source, &tokens, index)?;
                index = next;
                ValueToken::FunctionCall {
                    name: name.clone(),
                    args,
                }
            }
            CSSToken::Url(url) => {
                // The tokenizer also ends a url at EOF; only a written `)` closes it.
                if !spanned.span.slice(source).ends_with(')') {
                    return Err(ShorthandError::UnbalancedValue);
                }
                ValueToken::FunctionCall {
                    name: "url".to_string(),
                    args: url.clone(),
                }
            }
            CSSToken::Hash { value, .. } => ValueToken::Hash(value.clone()),
            CSSToken::String(text) => {
                if !closes_string(spanned.span.slice(source)) {
                    return Err(ShorthandError::UnbalancedValue);
                }
                ValueToken::StringLiteral(text.clone())
            }
            CSSToken::Delim(symbol) => ValueToken::Operator(*symbol),
            CSSToken::Number { value, .. } => ValueToken::Number {
                value: *value,
                text: written(spanned),
            },
            CSSToken::Percentage { value } => ValueToken::Percentage {
                value: *value,
                text: written(spanned),
            },
            CSSToken::Dimension { value, unit } => ValueToken::Dimension {
                value: *value,
                unit: unit.clone(),
                text: written(spanned),
            },
            CSSToken::BadString => return Err(ShorthandError::UnbalancedValue),
            token if token.closes_block() => return Err(ShorthandError::UnbalancedValue),
            _ => return Err(ShorthandError::invalid(spanned.span.slice(source).trim())),
        };
        out.push(value);
    }

    Ok(out)
}

/// Find the argument text of the function whose name token ends just before
/// `tokens[start]`, returning it with the index after the closing `)`.
fn function_arguments(
    source: &str,
    tokens: &[SpannedToken],
    start: usize,
) -> Result<(String, usize)> {
    let Some(open) = start.checked_sub(1).and_then(|i| tokens.get(i)) else {
        return Err(ShorthandError::UnbalancedValue);
    };
    let mut depth = 1usize;

    for (index, spanned) in tokens.iter().enumerate().skip(start) {
        let token = &spanned.token;
        if token.is_eof() || matches!(token, CSSToken::BadString) {
            break;
        }
        if token.opens_block() {
            depth += 1;
        } else if token.closes_block() {
            depth -= 1;
            if depth == 0 {
                let args = source
                    .get(open.span.end..spanned.span.start)
                    .unwrap_or_default()
                    .trim()
                    .to_string();
                return Ok((args, index + 1));
            }
        }
    }

    Err(ShorthandError::UnbalancedValue)
}

/// A string token's source text ends with the quote it opened with.
fn closes_string(text: &str) -> bool {
    let mut chars = text.chars();
    match (chars.next(), chars.next_back()) {
        (Some(open), Some(close)) => open == close && text.len() >= 2,
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nested_function_arguments_stay_opaque() {
        let tokens = tokenize_value("linear-gradient(rgb(0, 0, 0), red) 10px").unwrap();
        assert_eq!(
            tokens,
            vec![
                ValueToken::FunctionCall {
                    name: "linear-gradient".into(),
                    args: "rgb(0, 0, 0), red".into(),
                },
                ValueToken::Dimension {
                    value: 10.0,
                    unit: "px".into(),
                    text: "10px".into(),
                },
            ]
        );
    }

    #[test]
    fn unclosed_input_is_unbalanced() {
        assert_eq!(tokenize_value("url(a.png"), Err(ShorthandError::UnbalancedValue));
        assert_eq!(tokenize_value("calc(1px + 2px"), Err(ShorthandError::UnbalancedValue));
        assert_eq!(tokenize_value("'open"), Err(ShorthandError::UnbalancedValue));
        assert_eq!(tokenize_value("a)"), Err(ShorthandError::UnbalancedValue));
    }

    #[test]
    fn blocks_are_rejected() {
        assert!(matches!(
            tokenize_value("[a] b"),
            Err(ShorthandError::InvalidToken { .. })
        ));
        assert!(matches!(
            tokenize_value("a; b"),
            Err(ShorthandError::InvalidToken { .. })
        ));
    }
}
