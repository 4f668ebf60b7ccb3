//! [CSS Flexbox § 7.1 'flex'](https://www.w3.org/TR/css-flexbox-1/#flex-property)
//!
//! "Value: none | [ <'flex-grow'> <'flex-shrink'>? || <'flex-basis'> ]"
//!
//! "When omitted from the flex shorthand, its specified value is 1" (grow and
//! shrink) and "When omitted from the flex shorthand, its specified value is
//! 0" (basis, written here as `0%`).

use crate::cursor::TokenCursor;
use crate::error::{Result, ShorthandError};
use crate::values::{ValueToken, keywords, tokenize_value};

use super::{
    Longhands, PropertyDefaults, ShorthandMeta, collapse_global, expand_global, layer_tokens,
    require_longhands, single_layer,
};

/// `flex` and its longhands with their initial values.
pub static META: ShorthandMeta = ShorthandMeta {
    shorthand: "flex",
    longhands: &["flex-grow", "flex-shrink", "flex-basis"],
    defaults: Some(PropertyDefaults::new(&[
        ("flex-grow", "0"),
        ("flex-shrink", "1"),
        ("flex-basis", "auto"),
    ])),
};

/// Basis used when the shorthand gives numbers but no basis.
const OMITTED_BASIS: &str = "0%";

fn is_basis(token: &ValueToken) -> bool {
    token.is_ident_in(keywords::FLEX_BASIS_KEYWORDS) || token.is_length_percentage()
}

fn longhands(grow: &str, shrink: &str, basis: &str) -> Longhands {
    [grow, shrink, basis]
        .iter()
        .zip(META.longhands)
        .map(|(value, name)| ((*name).to_string(), (*value).to_string()))
        .collect()
}

/// Expand a `flex` value into grow, shrink, and basis.
///
/// # Errors
///
/// A negative or misplaced number, a second basis, or any other token.
pub fn expand(value: &str) -> Result<Longhands> {
    if let Some(global) = expand_global(&META, value) {
        return Ok(global);
    }
    let tokens = layer_tokens(single_layer(value)?)?;

    // [§ 7.1.1 Basic Values of flex](https://www.w3.org/TR/css-flexbox-1/#flex-common)
    match tokens.as_slice() {
        [only] if only.is_ident("none") => return Ok(longhands("0", "0", "auto")),
        [only] if only.is_ident("auto") => return Ok(longhands("1", "1", "auto")),
        _ => {}
    }

    let mut grow: Option<String> = None;
    let mut shrink: Option<String> = None;
    let mut basis: Option<String> = None;
    let mut cursor = TokenCursor::new(&tokens);

    while let Some(token) = cursor.advance() {
        if token.non_negative_number().is_some() && grow.is_none() {
            grow = Some(token.to_string());
            if let Some(next) = cursor.next_if(|t| t.non_negative_number().is_some()) {
                shrink = Some(next.to_string());
            }
        } else if shrink.is_some() && basis.is_none() && matches!(token, ValueToken::Number { value, .. } if *value == 0.0) {
            // `g s 0`: the third number can only be the basis.
            basis = Some(token.to_string());
        } else if token.non_negative_number().is_some() {
            return Err(ShorthandError::AmbiguousOrder {
                reason: "flex-grow and flex-shrink must be adjacent",
            });
        } else if is_basis(token) {
            if basis.is_some() {
                return Err(ShorthandError::DuplicateSlot { slot: "flex-basis" });
            }
            basis = Some(token.to_string());
        } else {
            return Err(ShorthandError::invalid(token.to_string()));
        }
    }

    let result = match (grow, shrink, basis) {
        (None, _, Some(basis)) => longhands("1", "1", &basis),
        (Some(grow), shrink, basis) => longhands(
            &grow,
            shrink.as_deref().unwrap_or("1"),
            basis.as_deref().unwrap_or(OMITTED_BASIS),
        ),
        (None, _, None) => return Err(ShorthandError::EmptyValue),
    };
    classify_trace!("[CLASSIFY flex] {:?}", result);
    Ok(result)
}

fn parse_number(value: &str, reason: &'static str) -> Result<f64> {
    match tokenize_value(value)?.as_slice() {
        [ValueToken::Number { value, .. }] if *value >= 0.0 => Ok(*value),
        _ => Err(ShorthandError::Uncollapsible { reason }),
    }
}

/// Collapse grow, shrink, and basis into the shortest `flex` value.
///
/// # Errors
///
/// [`ShorthandError::IncompleteLonghandSet`] if a longhand is missing and
/// [`ShorthandError::Uncollapsible`] if grow or shrink is not a number.
#[allow(clippy::float_cmp)]
pub fn collapse(longhands: &Longhands) -> Result<String> {
    let values = require_longhands(&META, longhands)?;
    if let Some(global) = collapse_global(&values)? {
        return Ok(global);
    }
    let [grow, shrink, basis] = [values[0], values[1], values[2]];
    let grow_n = parse_number(grow, "flex-grow is not a non-negative number")?;
    let shrink_n = parse_number(shrink, "flex-shrink is not a non-negative number")?;
    let basis_is_auto = basis.eq_ignore_ascii_case("auto");

    let collapsed = if basis_is_auto && grow_n == 0.0 && shrink_n == 0.0 {
        "none".to_string()
    } else if basis_is_auto && grow_n == 1.0 && shrink_n == 1.0 {
        "auto".to_string()
    } else if matches!(tokenize_value(basis)?.as_slice(), [ValueToken::Number { .. }]) {
        // A unitless basis would otherwise be read as flex-shrink.
        format!("{grow} {shrink} {basis}")
    } else if basis.eq_ignore_ascii_case(OMITTED_BASIS) {
        if shrink_n == 1.0 {
            grow.to_string()
        } else {
            format!("{grow} {shrink}")
        }
    } else if shrink_n == 1.0 {
        format!("{grow} {basis}")
    } else {
        format!("{grow} {shrink} {basis}")
    };

    classify_trace!("[COLLAPSE flex] {} {} {} -> '{}'", grow, shrink, basis, collapsed);
    Ok(collapsed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn third_zero_is_the_basis() {
        let expanded = expand("2 3 0").unwrap();
        assert_eq!(expanded["flex-basis"], "0");
        assert_eq!(expanded["flex-shrink"], "3");
    }

    #[test]
    fn separated_numbers_are_rejected() {
        assert!(matches!(expand("1 10px 2"), Err(ShorthandError::AmbiguousOrder { .. })));
    }
}
