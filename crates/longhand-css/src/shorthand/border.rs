//! [CSS Backgrounds § 4.4 Border Shorthand Properties](https://www.w3.org/TR/css-backgrounds-3/#border-shorthands)
//!
//! "Value: `<line-width>` || `<line-style>` || `<color>`"
//!
//! "The 'border-top', 'border-right', 'border-bottom', 'border-left' properties
//! are shorthand properties for setting the width, style, and color of the
//! top, right, bottom, and left border of a box."
//!
//! "The 'border' property is a shorthand property for setting the same width,
//! color, and style for all four borders of a box."

use crate::error::{Result, ShorthandError};
use crate::values::{ValueToken, is_color, keywords};

use super::{
    Longhands, PropertyDefaults, ShorthandMeta, collapse_global, expand_global, is_default_value,
    layer_tokens, require_longhands, single_layer,
};

/// Initial width, style, and color of one border side.
const SIDE_DEFAULTS: [&str; 3] = ["medium", "none", "currentcolor"];

const PART_NAMES: [&str; 3] = ["width", "style", "color"];

/// `border` and its twelve longhands, grouped by side.
pub static META: ShorthandMeta = ShorthandMeta {
    shorthand: "border",
    longhands: &[
        "border-top-width",
        "border-top-style",
        "border-top-color",
        "border-right-width",
        "border-right-style",
        "border-right-color",
        "border-bottom-width",
        "border-bottom-style",
        "border-bottom-color",
        "border-left-width",
        "border-left-style",
        "border-left-color",
    ],
    defaults: Some(PropertyDefaults::new(&[
        ("border-top-width", "medium"),
        ("border-top-style", "none"),
        ("border-top-color", "currentcolor"),
        ("border-right-width", "medium"),
        ("border-right-style", "none"),
        ("border-right-color", "currentcolor"),
        ("border-bottom-width", "medium"),
        ("border-bottom-style", "none"),
        ("border-bottom-color", "currentcolor"),
        ("border-left-width", "medium"),
        ("border-left-style", "none"),
        ("border-left-color", "currentcolor"),
    ])),
};

macro_rules! side_meta {
    ($name:ident, $side:literal) => {
        #[doc = concat!("`border-", $side, "` and its width, style, and color longhands.")]
        pub static $name: ShorthandMeta = ShorthandMeta {
            shorthand: concat!("border-", $side),
            longhands: &[
                concat!("border-", $side, "-width"),
                concat!("border-", $side, "-style"),
                concat!("border-", $side, "-color"),
            ],
            defaults: Some(PropertyDefaults::new(&[
                (concat!("border-", $side, "-width"), "medium"),
                (concat!("border-", $side, "-style"), "none"),
                (concat!("border-", $side, "-color"), "currentcolor"),
            ])),
        };
    };
}

side_meta!(TOP_META, "top");
side_meta!(RIGHT_META, "right");
side_meta!(BOTTOM_META, "bottom");
side_meta!(LEFT_META, "left");

/// [§ 4.3 'border-width'](https://www.w3.org/TR/css-backgrounds-3/#border-width)
///
/// "`<line-width>` = `<length [0,∞]>` | thin | medium | thick"
pub(crate) fn is_line_width(token: &ValueToken) -> bool {
    token.is_ident_in(keywords::LINE_WIDTH_KEYWORDS)
        || (token.is_length() && !matches!(token, ValueToken::Dimension { value, .. } if *value < 0.0))
}

/// [§ 4.2 'border-style'](https://www.w3.org/TR/css-backgrounds-3/#border-style)
pub(crate) fn is_line_style(token: &ValueToken) -> bool {
    token.is_ident_in(keywords::LINE_STYLES)
}

/// Width, style, and color of one side, each defaulted if absent.
fn parse_side(value: &str) -> Result<[String; 3]> {
    let tokens = layer_tokens(single_layer(value)?)?;
    let mut parts: [Option<String>; 3] = [None, None, None];

    for token in &tokens {
        let index = if is_line_width(token) {
            0
        } else if is_line_style(token) {
            1
        } else if is_color(token) {
            2
        } else {
            return Err(ShorthandError::invalid(token.to_string()));
        };
        if parts[index].is_some() {
            return Err(ShorthandError::DuplicateSlot {
                slot: PART_NAMES[index],
            });
        }
        parts[index] = Some(token.to_string());
    }

    let [width, style, color] = parts;
    Ok([
        width.unwrap_or_else(|| SIDE_DEFAULTS[0].to_string()),
        style.unwrap_or_else(|| SIDE_DEFAULTS[1].to_string()),
        color.unwrap_or_else(|| SIDE_DEFAULTS[2].to_string()),
    ])
}

/// The shortest value for one side's width, style, and color.
fn collapse_parts(parts: [&str; 3]) -> String {
    let written: Vec<&str> = parts
        .iter()
        .zip(SIDE_DEFAULTS)
        .filter(|(value, default)| !is_default_value(value, default))
        .map(|(value, _)| *value)
        .collect();
    if written.is_empty() {
        "none".to_string()
    } else {
        written.join(" ")
    }
}

/// Expand `border` into all twelve side longhands.
///
/// # Errors
///
/// A token that is not a width, style, or color, or a part given twice.
pub fn expand(value: &str) -> Result<Longhands> {
    if let Some(global) = expand_global(&META, value) {
        return Ok(global);
    }
    let parts = parse_side(value)?;
    Ok(META
        .longhands
        .iter()
        .enumerate()
        .map(|(index, &name)| (name.to_string(), parts[index % 3].clone()))
        .collect())
}

/// Collapse the twelve side longhands into `border`.
///
/// # Errors
///
/// [`ShorthandError::IncompleteLonghandSet`] if a longhand is missing, and
/// [`ShorthandError::Uncollapsible`] unless all four sides match exactly.
pub fn collapse(longhands: &Longhands) -> Result<String> {
    let values = require_longhands(&META, longhands)?;
    if let Some(global) = collapse_global(&values)? {
        return Ok(global);
    }

    let (top, rest) = values.split_at(3);
    for side in rest.chunks(3) {
        let same = side
            .iter()
            .zip(top)
            .all(|(a, b)| a.eq_ignore_ascii_case(b));
        if !same {
            return Err(ShorthandError::Uncollapsible {
                reason: "border sides differ",
            });
        }
    }

    let collapsed = collapse_parts([top[0], top[1], top[2]]);
    classify_trace!("[COLLAPSE border] {:?} -> '{}'", top, collapsed);
    Ok(collapsed)
}

/// Expand one of `border-top|right|bottom|left` described by `meta`.
///
/// # Errors
///
/// As [`expand`].
pub fn expand_side(meta: &ShorthandMeta, value: &str) -> Result<Longhands> {
    if let Some(global) = expand_global(meta, value) {
        return Ok(global);
    }
    let parts = parse_side(value)?;
    Ok(meta
        .longhands
        .iter()
        .zip(parts)
        .map(|(&name, part)| (name.to_string(), part))
        .collect())
}

/// Collapse one side's width, style, and color.
///
/// # Errors
///
/// [`ShorthandError::IncompleteLonghandSet`] if a longhand is missing.
pub fn collapse_side(meta: &ShorthandMeta, longhands: &Longhands) -> Result<String> {
    let values = require_longhands(meta, longhands)?;
    if let Some(global) = collapse_global(&values)? {
        return Ok(global);
    }
    match values.as_slice() {
        [width, style, color] => Ok(collapse_parts([*width, *style, *color])),
        _ => Err(ShorthandError::IncompleteLonghandSet {
            missing: meta.shorthand.to_string(),
        }),
    }
}
