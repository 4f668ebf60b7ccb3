//! Box-side shorthands: one to four values mapped onto top, right, bottom,
//! and left.
//!
//! [CSS Box § 6.1 'margin'](https://www.w3.org/TR/css-box-4/#margin-shorthand),
//! [§ 6.2 'padding'](https://www.w3.org/TR/css-box-4/#padding-shorthand),
//! [CSS Backgrounds § 4.1-4.3](https://www.w3.org/TR/css-backgrounds-3/#borders)
//! ('border-color', 'border-style', 'border-width').

use crate::error::{Result, ShorthandError};
use crate::values::{ValueToken, is_color, join_tokens, tokenize_value};

use super::border::{is_line_style, is_line_width};
use super::{
    Longhands, PropertyDefaults, ShorthandMeta, collapse_global, expand_global, expand_sides,
    layer_tokens, minimal_sides, require_longhands, single_layer,
};

/// A box-side family: its descriptor and the test every side value must pass.
#[derive(Debug)]
pub struct SideFamily {
    /// Shorthand and longhands, in top, right, bottom, left order.
    pub meta: &'static ShorthandMeta,
    accepts: fn(&ValueToken) -> bool,
}

/// "`<margin-width>` = `<length-percentage>` | auto"
fn is_margin(token: &ValueToken) -> bool {
    token.is_ident("auto") || token.is_length_percentage()
}

/// Padding is `<length-percentage [0,∞]>`.
fn is_padding(token: &ValueToken) -> bool {
    token.is_length_percentage()
        && !matches!(
            token,
            ValueToken::Dimension { value, .. } | ValueToken::Percentage { value, .. } if *value < 0.0
        )
}

macro_rules! side_family {
    ($family:ident, $meta:ident, $name:literal, [$($longhand:literal),+], $accepts:path) => {
        side_family!(@define $family, $meta, $name, [$($longhand),+], $accepts, None);
    };
    ($family:ident, $meta:ident, $name:literal, [$($longhand:literal),+], $accepts:path, $initial:literal) => {
        side_family!(
            @define $family, $meta, $name, [$($longhand),+], $accepts,
            Some(PropertyDefaults::new(&[$(($longhand, $initial)),+]))
        );
    };
    (@define $family:ident, $meta:ident, $name:literal, [$($longhand:literal),+], $accepts:path, $defaults:expr) => {
        #[doc = concat!("`", $name, "` and its four side longhands.")]
        pub static $meta: ShorthandMeta = ShorthandMeta {
            shorthand: $name,
            longhands: &[$($longhand),+],
            defaults: $defaults,
        };

        #[doc = concat!("The `", $name, "` family.")]
        pub static $family: SideFamily = SideFamily {
            meta: &$meta,
            accepts: $accepts,
        };
    };
}

side_family!(
    MARGIN,
    MARGIN_META,
    "margin",
    ["margin-top", "margin-right", "margin-bottom", "margin-left"],
    is_margin
);
side_family!(
    PADDING,
    PADDING_META,
    "padding",
    ["padding-top", "padding-right", "padding-bottom", "padding-left"],
    is_padding
);
side_family!(
    BORDER_WIDTH,
    BORDER_WIDTH_META,
    "border-width",
    ["border-top-width", "border-right-width", "border-bottom-width", "border-left-width"],
    is_line_width,
    "medium"
);
side_family!(
    BORDER_STYLE,
    BORDER_STYLE_META,
    "border-style",
    ["border-top-style", "border-right-style", "border-bottom-style", "border-left-style"],
    is_line_style,
    "none"
);
side_family!(
    BORDER_COLOR,
    BORDER_COLOR_META,
    "border-color",
    ["border-top-color", "border-right-color", "border-bottom-color", "border-left-color"],
    is_color,
    "currentcolor"
);

impl SideFamily {
    /// Expand one to four side values.
    ///
    /// # Errors
    ///
    /// More than four values, or a value the family does not accept.
    pub fn expand(&self, value: &str) -> Result<Longhands> {
        if let Some(global) = expand_global(self.meta, value) {
            return Ok(global);
        }
        let tokens = layer_tokens(single_layer(value)?)?;
        if let Some(bad) = tokens.iter().find(|&token| !(self.accepts)(token)) {
            return Err(ShorthandError::invalid(bad.to_string()));
        }
        let sides = expand_sides(&tokens).ok_or(ShorthandError::TooManyValues {
            slot: self.meta.shorthand,
            max: 4,
        })?;

        Ok(self
            .meta
            .longhands
            .iter()
            .zip(sides)
            .map(|(&name, token)| (name.to_string(), token.to_string()))
            .collect())
    }

    /// Collapse the four sides into the shortest one-to-four value form.
    ///
    /// # Errors
    ///
    /// [`ShorthandError::IncompleteLonghandSet`] if a side is missing and
    /// [`ShorthandError::Uncollapsible`] if a side holds more than one value.
    pub fn collapse(&self, longhands: &Longhands) -> Result<String> {
        let values = require_longhands(self.meta, longhands)?;
        if let Some(global) = collapse_global(&values)? {
            return Ok(global);
        }

        let mut sides: [Option<ValueToken>; 4] = [None, None, None, None];
        for (side, value) in sides.iter_mut().zip(&values) {
            match tokenize_value(value)?.as_slice() {
                [token] => *side = Some(token.clone()),
                _ => {
                    return Err(ShorthandError::Uncollapsible {
                        reason: "a side holds more than one value",
                    });
                }
            }
        }
        let [Some(top), Some(right), Some(bottom), Some(left)] = sides else {
            return Err(ShorthandError::Uncollapsible {
                reason: "a side holds more than one value",
            });
        };

        Ok(join_tokens(minimal_sides(&[top, right, bottom, left])))
    }
}
