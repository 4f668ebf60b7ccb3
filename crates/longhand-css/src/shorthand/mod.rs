//! Shorthand families and the machinery they share.
//!
//! [CSS Cascade § 1.2 Shorthand Properties](https://www.w3.org/TR/css-cascade-5/#shorthand)
//!
//! "Some properties are shorthand properties, meaning that they allow authors
//! to specify the values of several properties with a single property. A
//! shorthand property sets all of its longhand sub-properties, exactly as if
//! expanded in place."
//!
//! Every family module exposes a `META` descriptor plus `expand(value)` and
//! `collapse(longhands)`. Multi-layer families describe a layer with a
//! [`LayerRecord`] and use [`serialize_layers`] / [`records_from_aligned`]
//! to go between records and longhand lists.

use indexmap::IndexMap;
use serde::{Serialize, Serializer};

use crate::error::{Result, ShorthandError};
use crate::layers::{AlignedLayers, split_layers};
use crate::values::{ValueToken, join_tokens, keywords, tokenize_value};

/// `animation`.
pub mod animation;
/// `background`.
pub mod background;
/// `border` and `border-top|right|bottom|left`.
pub mod border;
/// `border-radius`.
pub mod border_radius;
/// `flex`.
pub mod flex;
mod image_layer;
/// `mask`.
pub mod mask;
/// `margin`, `padding`, `border-width`, `border-style`, `border-color`.
pub mod sides;
mod timing;
/// `transition`.
pub mod transition;

/// Longhand name to value, in the family's longhand order.
pub type Longhands = IndexMap<String, String>;

/// [CSS Cascade § 7.1 Initial Values](https://www.w3.org/TR/css-cascade-5/#initial-values)
///
/// Longhand name to initial value, in longhand order. Static and never
/// mutated; classifiers borrow it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PropertyDefaults(&'static [(&'static str, &'static str)]);

impl PropertyDefaults {
    /// Wrap a static table.
    #[must_use]
    pub const fn new(table: &'static [(&'static str, &'static str)]) -> Self {
        Self(table)
    }

    /// The initial value of `longhand`.
    #[must_use]
    pub fn get(&self, longhand: &str) -> Option<&'static str> {
        self.0
            .iter()
            .find(|(name, _)| name.eq_ignore_ascii_case(longhand))
            .map(|&(_, value)| value)
    }

    /// The initial value of the `index`-th longhand.
    #[must_use]
    pub fn value_at(&self, index: usize) -> &'static str {
        self.0.get(index).map_or("", |&(_, value)| value)
    }

    /// Every `(longhand, initial value)` pair.
    #[must_use]
    pub const fn entries(&self) -> &'static [(&'static str, &'static str)] {
        self.0
    }
}

impl Serialize for PropertyDefaults {
    fn serialize<S: Serializer>(&self, serializer: S) -> core::result::Result<S::Ok, S::Error> {
        serializer.collect_map(self.0.iter().copied())
    }
}

/// Describes one shorthand family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ShorthandMeta {
    /// The shorthand property name.
    pub shorthand: &'static str,
    /// Its longhands, in serialization order.
    pub longhands: &'static [&'static str],
    /// Initial values, for families whose longhands have a shared default.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub defaults: Option<PropertyDefaults>,
}

impl ShorthandMeta {
    /// The initial value of the `index`-th longhand, or `""` if the family
    /// carries no defaults.
    #[must_use]
    pub fn default_at(&self, index: usize) -> &'static str {
        self.defaults.map_or("", |defaults| defaults.value_at(index))
    }
}

// ============================================================================
// Layer records
// ============================================================================

/// A family's per-layer slots, addressed by longhand index.
///
/// `None` means "unspecified in this layer", which is distinct from the
/// default written out explicitly.
pub(crate) trait LayerRecord: Default {
    /// The value of slot `index`, if set.
    fn slot(&self, index: usize) -> Option<&str>;

    /// Mutable access to slot `index`.
    fn slot_mut(&mut self, index: usize) -> Option<&mut Option<String>>;
}

/// [CSS Backgrounds § 2.2](https://www.w3.org/TR/css-backgrounds-3/#layering)
///
/// Default-fill every slot and join each longhand's per-layer values with
/// `", "`, in layer order.
pub(crate) fn serialize_layers<R: LayerRecord>(meta: &ShorthandMeta, layers: &[R]) -> Longhands {
    meta.longhands
        .iter()
        .enumerate()
        .map(|(index, &longhand)| {
            let value = layers
                .iter()
                .map(|layer| layer.slot(index).unwrap_or_else(|| meta.default_at(index)))
                .collect::<Vec<_>>()
                .join(", ");
            (longhand.to_string(), value)
        })
        .collect()
}

/// Build one record per aligned layer. Slots past a longhand's own list
/// stay unset.
pub(crate) fn records_from_aligned<R: LayerRecord>(aligned: &AlignedLayers<'_>) -> Vec<R> {
    (0..aligned.layer_count())
        .map(|layer| {
            let mut record = R::default();
            let mut index = 0;
            while let Some(slot) = record.slot_mut(index) {
                *slot = aligned.slot(index, layer).map(str::to_string);
                index += 1;
            }
            record
        })
        .collect()
}

// ============================================================================
// Shared expand helpers
// ============================================================================

/// [CSS Cascade § 7.3](https://www.w3.org/TR/css-cascade-5/#defaulting-keywords)
///
/// If `value` is exactly one CSS-wide keyword, every longhand takes it.
pub(crate) fn expand_global(meta: &ShorthandMeta, value: &str) -> Option<Longhands> {
    let keyword = value.trim();
    if !keywords::is_global_keyword(keyword) {
        return None;
    }
    let keyword = keyword.to_ascii_lowercase();
    Some(
        meta.longhands
            .iter()
            .map(|&longhand| (longhand.to_string(), keyword.clone()))
            .collect(),
    )
}

/// Tokenize one layer. CSS-wide keywords are only valid on their own, so one
/// found among other tokens is rejected here for every family.
pub(crate) fn layer_tokens(layer: &str) -> Result<Vec<ValueToken>> {
    let tokens = tokenize_value(layer)?;
    if tokens.is_empty() {
        return Err(ShorthandError::EmptyValue);
    }
    if let Some(global) = tokens.iter().find(|t| t.is_ident_in(keywords::GLOBAL_KEYWORDS)) {
        return Err(ShorthandError::invalid(global.to_string()));
    }
    Ok(tokens)
}

/// The value of a family that has no layers: exactly one comma-free segment.
pub(crate) fn single_layer(value: &str) -> Result<&str> {
    match split_layers(value)?.as_slice() {
        [] => Err(ShorthandError::EmptyValue),
        [layer] => Ok(*layer),
        _ => Err(ShorthandError::invalid(",")),
    }
}

/// Split a multi-layer value, rejecting an empty one.
pub(crate) fn value_layers(value: &str) -> Result<Vec<&str>> {
    let layers = split_layers(value)?;
    if layers.is_empty() {
        return Err(ShorthandError::EmptyValue);
    }
    Ok(layers)
}

/// Store `value` in `slot`, rejecting a second assignment.
pub(crate) fn fill_slot(slot: &mut Option<String>, name: &'static str, value: String) -> Result<()> {
    if slot.is_some() {
        return Err(ShorthandError::DuplicateSlot { slot: name });
    }
    *slot = Some(value);
    Ok(())
}

/// [CSS Box § 6.1](https://www.w3.org/TR/css-box-4/#margin-shorthand)
///
/// "If there is only one component value, it applies to all sides. If there
/// are two values, the top and bottom ... are set to the first value and the
/// right and left ... are set to the second. If there are three values, the
/// top is set to the first value, the left and right are set to the second,
/// and the bottom is set to the third. If there are four values, they apply
/// to the top, right, bottom, and left, respectively."
pub(crate) fn expand_sides<T: Clone>(values: &[T]) -> Option<[T; 4]> {
    match values {
        [all] => Some([all.clone(), all.clone(), all.clone(), all.clone()]),
        [vertical, horizontal] => Some([
            vertical.clone(),
            horizontal.clone(),
            vertical.clone(),
            horizontal.clone(),
        ]),
        [top, horizontal, bottom] => Some([
            top.clone(),
            horizontal.clone(),
            bottom.clone(),
            horizontal.clone(),
        ]),
        [top, right, bottom, left] => {
            Some([top.clone(), right.clone(), bottom.clone(), left.clone()])
        }
        _ => None,
    }
}

/// The shortest 1-4 value list that [`expand_sides`] reads back as `sides`.
pub(crate) fn minimal_sides<T: PartialEq>(sides: &[T; 4]) -> &[T] {
    let [top, right, bottom, left] = sides;
    if right != left {
        &sides[..]
    } else if top != bottom {
        &sides[..3]
    } else if top != right {
        &sides[..2]
    } else {
        &sides[..1]
    }
}

// ============================================================================
// Shared collapse helpers
// ============================================================================

/// Look `longhand` up, falling back to an ASCII case-insensitive match.
pub(crate) fn lookup<'a>(longhands: &'a Longhands, longhand: &str) -> Option<&'a str> {
    longhands
        .get(longhand)
        .or_else(|| {
            longhands
                .iter()
                .find(|(name, _)| name.eq_ignore_ascii_case(longhand))
                .map(|(_, value)| value)
        })
        .map(String::as_str)
}

/// Every longhand of `meta`, in order, or the first missing one.
pub(crate) fn require_longhands<'a>(
    meta: &ShorthandMeta,
    longhands: &'a Longhands,
) -> Result<Vec<&'a str>> {
    meta.longhands
        .iter()
        .map(|&name| {
            lookup(longhands, name)
                .map(str::trim)
                .ok_or_else(|| ShorthandError::IncompleteLonghandSet {
                    missing: name.to_string(),
                })
        })
        .collect()
}

/// [CSS Cascade § 7.3](https://www.w3.org/TR/css-cascade-5/#defaulting-keywords)
///
/// `Some(keyword)` if every value is the same CSS-wide keyword, `None` if
/// none is one.
pub(crate) fn collapse_global(values: &[&str]) -> Result<Option<String>> {
    let globals = values
        .iter()
        .filter(|value| keywords::is_global_keyword(value))
        .count();
    if globals == 0 {
        return Ok(None);
    }
    let first = values.first().copied().unwrap_or_default();
    if globals == values.len() && values.iter().all(|v| v.eq_ignore_ascii_case(first)) {
        return Ok(Some(first.to_ascii_lowercase()));
    }
    Err(ShorthandError::Uncollapsible {
        reason: "a CSS-wide keyword is set on only some longhands",
    })
}

/// Lowercase and collapse internal whitespace.
fn squash(value: &str) -> String {
    value
        .split_ascii_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_ascii_lowercase()
}

/// True if `value` means the same as the initial value `default`.
///
/// Beyond a case-insensitive match this knows the spellings a longhand list
/// commonly carries for its initial value: `auto` for `auto auto`, `0ms` for
/// `0s`, and any pair of zero offsets (`0`, `0px`, `0%`, `left`, `top`) for
/// `0% 0%`.
#[must_use]
pub fn is_default_value(value: &str, default: &str) -> bool {
    let value = squash(value);
    let default = squash(default);
    if value == default {
        return true;
    }

    match default.as_str() {
        "auto" | "auto auto" => {
            let parts: Vec<_> = value.split(' ').collect();
            (1..=2).contains(&parts.len()) && parts.iter().all(|p| *p == "auto")
        }
        "0s" => value == "0ms",
        "0% 0%" => {
            const ZERO_OFFSETS: &[&str] = &["0", "0%", "0px", "left", "top"];
            let parts: Vec<_> = value.split(' ').collect();
            parts.len() == 2 && parts.iter().all(|p| ZERO_OFFSETS.contains(p))
        }
        _ => false,
    }
}

/// Canonical text of one layer, for comparing values written differently.
fn canonical_layer(layer: &str) -> String {
    tokenize_value(layer).map_or_else(|_| squash(layer), |tokens| join_tokens(&tokens).to_ascii_lowercase())
}

/// True if two longhand lists carry the same values layer by layer, treating
/// a missing trailing layer as `default`.
#[must_use]
pub fn same_list(left: &str, right: &str, default: &str) -> bool {
    let (Ok(a), Ok(b)) = (split_layers(left), split_layers(right)) else {
        return squash(left) == squash(right);
    };
    let count = a.len().max(b.len());
    (0..count).all(|index| {
        let x = a.get(index).copied().unwrap_or(default);
        let y = b.get(index).copied().unwrap_or(default);
        canonical_layer(x) == canonical_layer(y)
            || (!default.is_empty() && is_default_value(x, default) && is_default_value(y, default))
    })
}
