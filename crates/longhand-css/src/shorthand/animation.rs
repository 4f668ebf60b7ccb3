//! [CSS Animations § 3.10 'animation'](https://www.w3.org/TR/css-animations-1/#animation)
//!
//! "`<single-animation>` = `<time>` || `<easing-function>` || `<time>` ||
//! `<single-animation-iteration-count>` || `<single-animation-direction>` ||
//! `<single-animation-fill-mode>` || `<single-animation-play-state>` ||
//! [ none | `<keyframes-name>` ]"
//!
//! Slots are assigned by token type. Keywords are tried before the name, and
//! the easing check comes before everything else so `ease-in` is never read
//! as a keyframes name.

use crate::error::{Result, ShorthandError};
use crate::layers::align_layers;
use crate::values::{ValueToken, keywords};

use super::timing::{TimePair, collapse_times, is_easing, is_time_bearing};
use super::{
    LayerRecord, Longhands, PropertyDefaults, ShorthandMeta, collapse_global, expand_global,
    fill_slot, is_default_value, layer_tokens, records_from_aligned, require_longhands,
    serialize_layers, value_layers,
};

/// `animation` and its longhands with their initial values.
pub static META: ShorthandMeta = ShorthandMeta {
    shorthand: "animation",
    longhands: &[
        "animation-name",
        "animation-duration",
        "animation-timing-function",
        "animation-delay",
        "animation-iteration-count",
        "animation-direction",
        "animation-fill-mode",
        "animation-play-state",
    ],
    defaults: Some(PropertyDefaults::new(&[
        ("animation-name", "none"),
        ("animation-duration", "0s"),
        ("animation-timing-function", "ease"),
        ("animation-delay", "0s"),
        ("animation-iteration-count", "1"),
        ("animation-direction", "normal"),
        ("animation-fill-mode", "none"),
        ("animation-play-state", "running"),
    ])),
};

/// One `<single-animation>`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
struct AnimationLayer {
    name: Option<String>,
    times: TimePair,
    timing_function: Option<String>,
    iteration_count: Option<String>,
    direction: Option<String>,
    fill_mode: Option<String>,
    play_state: Option<String>,
}

impl LayerRecord for AnimationLayer {
    fn slot(&self, index: usize) -> Option<&str> {
        match index {
            0 => self.name.as_deref(),
            1 => self.times.duration.as_deref(),
            2 => self.timing_function.as_deref(),
            3 => self.times.delay.as_deref(),
            4 => self.iteration_count.as_deref(),
            5 => self.direction.as_deref(),
            6 => self.fill_mode.as_deref(),
            7 => self.play_state.as_deref(),
            _ => None,
        }
    }

    fn slot_mut(&mut self, index: usize) -> Option<&mut Option<String>> {
        Some(match index {
            0 => &mut self.name,
            1 => &mut self.times.duration,
            2 => &mut self.timing_function,
            3 => &mut self.times.delay,
            4 => &mut self.iteration_count,
            5 => &mut self.direction,
            6 => &mut self.fill_mode,
            7 => &mut self.play_state,
            _ => return None,
        })
    }
}

/// `<single-animation-iteration-count>` = infinite | `<number [0,∞]>`
fn is_iteration_count(token: &ValueToken) -> bool {
    token.is_ident("infinite") || token.non_negative_number().is_some()
}

const INFINITE: &[&str] = &["infinite"];

/// A name that a reader would take for some other slot.
fn is_reserved_name(name: &str) -> bool {
    [
        keywords::TIMING_KEYWORDS,
        keywords::ANIMATION_DIRECTIONS,
        keywords::ANIMATION_FILL_MODES,
        keywords::ANIMATION_PLAY_STATES,
        INFINITE,
    ]
    .iter()
    .any(|list| keywords::contains(list, name))
}

fn classify(tokens: &[ValueToken]) -> Result<AnimationLayer> {
    let mut layer = AnimationLayer::default();

    for token in tokens {
        let value = token.to_string();

        let claimed = if is_easing(token) {
            classify_trace!("[CLASSIFY animation] timing-function <- '{}'", value);
            if layer.timing_function.is_none() {
                layer.timing_function = Some(value);
                continue;
            }
            // A repeated easing keyword can still be the keyframes name.
            token.ident().is_none()
        } else if is_time_bearing(token) {
            classify_trace!("[CLASSIFY animation] time <- '{}'", value);
            layer.times.push(token)?;
            continue;
        } else if is_iteration_count(token) {
            classify_trace!("[CLASSIFY animation] iteration-count <- '{}'", value);
            fill_slot(&mut layer.iteration_count, "iteration-count", value)?;
            continue;
        } else {
            let keyword_slot = if token.is_ident_in(keywords::ANIMATION_DIRECTIONS) {
                Some(&mut layer.direction)
            } else if token.is_ident_in(keywords::ANIMATION_FILL_MODES) {
                Some(&mut layer.fill_mode)
            } else if token.is_ident_in(keywords::ANIMATION_PLAY_STATES) {
                Some(&mut layer.play_state)
            } else {
                None
            };
            if let Some(slot) = keyword_slot.filter(|slot| slot.is_none()) {
                classify_trace!("[CLASSIFY animation] keyword <- '{}'", value);
                *slot = Some(value);
                continue;
            }
            false
        };

        if claimed {
            return Err(ShorthandError::DuplicateSlot {
                slot: "timing-function",
            });
        }

        // Whatever is left must be the keyframes name.
        if !matches!(
            token,
            ValueToken::Identifier(_) | ValueToken::StringLiteral(_)
        ) {
            return Err(ShorthandError::invalid(value));
        }
        classify_trace!("[CLASSIFY animation] name <- '{}'", value);
        fill_slot(&mut layer.name, "name", value)?;
    }

    Ok(layer)
}

/// Expand an `animation` value into its eight longhands.
///
/// # Errors
///
/// A token that fits no slot, a slot filled twice, or a third time value.
pub fn expand(value: &str) -> Result<Longhands> {
    if let Some(global) = expand_global(&META, value) {
        return Ok(global);
    }

    let records = value_layers(value)?
        .into_iter()
        .map(|layer| classify(&layer_tokens(layer)?))
        .collect::<Result<Vec<_>>>()?;

    Ok(serialize_layers(&META, &records))
}

/// Collapse the eight `animation` longhands into one value.
///
/// # Errors
///
/// [`ShorthandError::IncompleteLonghandSet`] if a longhand is missing,
/// [`ShorthandError::AmbiguousOrder`] if a name would read back as a keyword,
/// [`ShorthandError::Uncollapsible`] if a layer has only initial values.
pub fn collapse(longhands: &Longhands) -> Result<String> {
    let values = require_longhands(&META, longhands)?;
    if let Some(global) = collapse_global(&values)? {
        return Ok(global);
    }

    let lists: Vec<_> = values.iter().copied().map(Some).collect();
    let records: Vec<AnimationLayer> = records_from_aligned(&align_layers(&lists)?);
    if records.is_empty() {
        return Err(ShorthandError::EmptyValue);
    }

    let layers = records
        .iter()
        .map(collapse_layer)
        .collect::<Result<Vec<_>>>()?;
    Ok(layers.join(", "))
}

fn collapse_layer(layer: &AnimationLayer) -> Result<String> {
    let value_of = |index| layer.slot(index).unwrap_or_else(|| META.default_at(index));
    let non_default = |index| !is_default_value(value_of(index), META.default_at(index));
    let mut parts = Vec::new();

    if non_default(0) {
        let name = value_of(0);
        if is_reserved_name(name) {
            return Err(ShorthandError::AmbiguousOrder {
                reason: "animation name reads back as a keyword",
            });
        }
        parts.push(name.to_string());
    }

    let mut times = collapse_times(value_of(1), value_of(3), META.default_at(1), META.default_at(3));
    if !times.is_empty() {
        parts.push(times.remove(0));
    }
    if non_default(2) {
        parts.push(value_of(2).to_string());
    }
    parts.extend(times);

    for index in 4..=7 {
        if non_default(index) {
            parts.push(value_of(index).to_string());
        }
    }

    classify_trace!("[COLLAPSE animation] layer -> {:?}", parts);
    if parts.is_empty() {
        return Err(ShorthandError::Uncollapsible {
            reason: "an animation layer has only initial values",
        });
    }
    Ok(parts.join(" "))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::values::tokenize_value;

    fn layer(value: &str) -> Result<AnimationLayer> {
        classify(&tokenize_value(value).unwrap())
    }

    #[test]
    fn repeated_keyword_falls_back_to_name() {
        let parsed = layer("reverse alternate").unwrap();
        assert_eq!(parsed.direction.as_deref(), Some("reverse"));
        assert_eq!(parsed.name.as_deref(), Some("alternate"));
    }

    #[test]
    fn quoted_names_are_kept_quoted() {
        let parsed = layer("\"slide in\" 2s").unwrap();
        assert_eq!(parsed.name.as_deref(), Some("\"slide in\""));
    }

    #[test]
    fn second_name_is_a_duplicate() {
        assert_eq!(
            layer("spin fade"),
            Err(ShorthandError::DuplicateSlot { slot: "name" })
        );
    }

    #[test]
    fn repeated_easing_function_is_a_duplicate() {
        assert_eq!(
            layer("steps(2) cubic-bezier(0, 0, 1, 1)"),
            Err(ShorthandError::DuplicateSlot {
                slot: "timing-function"
            })
        );
    }
}
