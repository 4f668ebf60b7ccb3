//! [CSS Backgrounds § 5.1 'border-radius'](https://www.w3.org/TR/css-backgrounds-3/#border-radius)
//!
//! "Value: `<length-percentage [0,∞]>`{1,4} [ / `<length-percentage [0,∞]>`{1,4} ]?"
//!
//! "The values are set in the order top-left, top-right, bottom-right,
//! bottom-left. If bottom-left is omitted it is the same as top-right. If
//! bottom-right is omitted it is the same as top-left. If top-right is
//! omitted it is the same as top-left."
//!
//! "If values are given before and after the slash, then the values before
//! the slash set the horizontal radius and the values after the slash set the
//! vertical radius. If there is no slash, then the values set both radii
//! equally."

use crate::error::{Result, ShorthandError};
use crate::values::{ValueToken, join_tokens, tokenize_value};

use super::{
    Longhands, PropertyDefaults, ShorthandMeta, collapse_global, expand_global, expand_sides,
    layer_tokens, minimal_sides, require_longhands, single_layer,
};

/// `border-radius` and its corner longhands.
pub static META: ShorthandMeta = ShorthandMeta {
    shorthand: "border-radius",
    longhands: &[
        "border-top-left-radius",
        "border-top-right-radius",
        "border-bottom-right-radius",
        "border-bottom-left-radius",
    ],
    defaults: Some(PropertyDefaults::new(&[
        ("border-top-left-radius", "0"),
        ("border-top-right-radius", "0"),
        ("border-bottom-right-radius", "0"),
        ("border-bottom-left-radius", "0"),
    ])),
};

fn is_radius(token: &ValueToken) -> bool {
    token.is_length_percentage()
        && !matches!(
            token,
            ValueToken::Dimension { value, .. } | ValueToken::Percentage { value, .. } if *value < 0.0
        )
}

/// One side of the slash: one to four radii spread over the corners.
fn corner_values(tokens: &[ValueToken]) -> Result<[ValueToken; 4]> {
    if tokens.is_empty() {
        return Err(ShorthandError::invalid("/"));
    }
    if let Some(bad) = tokens.iter().find(|&token| !is_radius(token)) {
        return Err(ShorthandError::invalid(bad.to_string()));
    }
    expand_sides(tokens).ok_or(ShorthandError::TooManyValues {
        slot: "border-radius",
        max: 4,
    })
}

/// Expand `border-radius` into its four corners. A corner is `h` when both
/// radii agree and `h v` otherwise.
///
/// # Errors
///
/// More than four radii on either side of the slash, a second slash, an
/// empty side, or a negative or non-length value.
pub fn expand(value: &str) -> Result<Longhands> {
    if let Some(global) = expand_global(&META, value) {
        return Ok(global);
    }
    let tokens = layer_tokens(single_layer(value)?)?;

    let mut halves = tokens.split(|token| token.is_operator('/'));
    let horizontal = corner_values(halves.next().unwrap_or_default())?;
    let vertical = match halves.next() {
        Some(after) => corner_values(after)?,
        None => horizontal.clone(),
    };
    if halves.next().is_some() {
        return Err(ShorthandError::invalid("/"));
    }

    Ok(META
        .longhands
        .iter()
        .zip(horizontal.iter().zip(&vertical))
        .map(|(&name, (h, v))| {
            let corner = if h == v {
                h.to_string()
            } else {
                format!("{h} {v}")
            };
            (name.to_string(), corner)
        })
        .collect())
}

/// Collapse the four corners into the shortest `border-radius` value.
///
/// # Errors
///
/// [`ShorthandError::IncompleteLonghandSet`] if a corner is missing and
/// [`ShorthandError::Uncollapsible`] if a corner is not one or two radii.
pub fn collapse(longhands: &Longhands) -> Result<String> {
    let values = require_longhands(&META, longhands)?;
    if let Some(global) = collapse_global(&values)? {
        return Ok(global);
    }

    let mut horizontal = Vec::with_capacity(4);
    let mut vertical = Vec::with_capacity(4);
    for value in &values {
        match tokenize_value(value)?.as_slice() {
            [both] => {
                horizontal.push(both.clone());
                vertical.push(both.clone());
            }
            [h, v] => {
                horizontal.push(h.clone());
                vertical.push(v.clone());
            }
            _ => {
                return Err(ShorthandError::Uncollapsible {
                    reason: "a corner holds more than two radii",
                });
            }
        }
    }

    let (Ok(horizontal), Ok(vertical)) = (
        <[ValueToken; 4]>::try_from(horizontal),
        <[ValueToken; 4]>::try_from(vertical),
    ) else {
        return Err(ShorthandError::IncompleteLonghandSet {
            missing: META.shorthand.to_string(),
        });
    };

    let h = join_tokens(minimal_sides(&horizontal));
    if horizontal == vertical {
        Ok(h)
    } else {
        Ok(format!("{h} / {}", join_tokens(minimal_sides(&vertical))))
    }
}
