//! [CSS Transitions § 2.5 'transition'](https://www.w3.org/TR/css-transitions-1/#transition-shorthand-property)
//!
//! "`<single-transition>` = [ none | `<single-transition-property>` ] ||
//! `<time>` || `<easing-function>` || `<time>`"
//!
//! "If there is more than one `<single-transition>` in the shorthand, and
//! any of the transitions has none as the `<single-transition-property>`,
//! then the declaration is invalid."

use crate::error::{Result, ShorthandError};
use crate::layers::align_layers;
use crate::values::ValueToken;

use super::timing::{TimePair, collapse_times, is_easing, is_time_bearing};
use super::{
    LayerRecord, Longhands, PropertyDefaults, ShorthandMeta, collapse_global, expand_global,
    fill_slot, is_default_value, layer_tokens, records_from_aligned, require_longhands,
    serialize_layers, value_layers,
};

/// `transition` and its longhands with their initial values.
pub static META: ShorthandMeta = ShorthandMeta {
    shorthand: "transition",
    longhands: &[
        "transition-property",
        "transition-duration",
        "transition-timing-function",
        "transition-delay",
    ],
    defaults: Some(PropertyDefaults::new(&[
        ("transition-property", "all"),
        ("transition-duration", "0s"),
        ("transition-timing-function", "ease"),
        ("transition-delay", "0s"),
    ])),
};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
struct TransitionLayer {
    property: Option<String>,
    times: TimePair,
    timing_function: Option<String>,
}

impl LayerRecord for TransitionLayer {
    fn slot(&self, index: usize) -> Option<&str> {
        match index {
            0 => self.property.as_deref(),
            1 => self.times.duration.as_deref(),
            2 => self.timing_function.as_deref(),
            3 => self.times.delay.as_deref(),
            _ => None,
        }
    }

    fn slot_mut(&mut self, index: usize) -> Option<&mut Option<String>> {
        Some(match index {
            0 => &mut self.property,
            1 => &mut self.times.duration,
            2 => &mut self.timing_function,
            3 => &mut self.times.delay,
            _ => return None,
        })
    }
}

fn classify(tokens: &[ValueToken], single: bool) -> Result<TransitionLayer> {
    let mut layer = TransitionLayer::default();

    for token in tokens {
        let value = token.to_string();
        if is_easing(token) {
            fill_slot(&mut layer.timing_function, "timing-function", value)?;
        } else if is_time_bearing(token) {
            layer.times.push(token)?;
        } else if token.ident().is_some() {
            if token.is_ident("none") && !single {
                return Err(ShorthandError::invalid(value));
            }
            fill_slot(&mut layer.property, "property", value)?;
        } else {
            return Err(ShorthandError::invalid(value));
        }
    }

    classify_trace!("[CLASSIFY transition] {:?}", layer);
    Ok(layer)
}

/// Expand a `transition` value into its four longhands.
///
/// # Errors
///
/// A token that fits no slot, a slot filled twice, a third time value, or
/// `none` in a list of several transitions.
pub fn expand(value: &str) -> Result<Longhands> {
    if let Some(global) = expand_global(&META, value) {
        return Ok(global);
    }

    let layers = value_layers(value)?;
    let single = layers.len() == 1;
    let records = layers
        .into_iter()
        .map(|layer| classify(&layer_tokens(layer)?, single))
        .collect::<Result<Vec<_>>>()?;

    Ok(serialize_layers(&META, &records))
}

/// Collapse the four `transition` longhands into one value.
///
/// # Errors
///
/// [`ShorthandError::IncompleteLonghandSet`] if a longhand is missing,
/// [`ShorthandError::AmbiguousOrder`] if a property name reads back as an
/// easing keyword, [`ShorthandError::Uncollapsible`] if a layer has only
/// initial values.
pub fn collapse(longhands: &Longhands) -> Result<String> {
    let values = require_longhands(&META, longhands)?;
    if let Some(global) = collapse_global(&values)? {
        return Ok(global);
    }

    let lists: Vec<_> = values.iter().copied().map(Some).collect();
    let records: Vec<TransitionLayer> = records_from_aligned(&align_layers(&lists)?);
    if records.is_empty() {
        return Err(ShorthandError::EmptyValue);
    }

    let layers = records
        .iter()
        .map(collapse_layer)
        .collect::<Result<Vec<_>>>()?;
    Ok(layers.join(", "))
}

fn collapse_layer(layer: &TransitionLayer) -> Result<String> {
    let value_of = |index| layer.slot(index).unwrap_or_else(|| META.default_at(index));
    let mut parts = Vec::new();

    let property = value_of(0);
    if !is_default_value(property, META.default_at(0)) {
        if is_easing(&ValueToken::Identifier(property.to_string())) {
            return Err(ShorthandError::AmbiguousOrder {
                reason: "transition property reads back as an easing keyword",
            });
        }
        parts.push(property.to_string());
    }

    let mut times = collapse_times(value_of(1), value_of(3), META.default_at(1), META.default_at(3));
    if !times.is_empty() {
        parts.push(times.remove(0));
    }
    if !is_default_value(value_of(2), META.default_at(2)) {
        parts.push(value_of(2).to_string());
    }
    parts.extend(times);

    if parts.is_empty() {
        return Err(ShorthandError::Uncollapsible {
            reason: "a transition layer has only initial values",
        });
    }
    Ok(parts.join(" "))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::values::tokenize_value;

    #[test]
    fn times_are_positional_around_the_easing() {
        let layer = classify(&tokenize_value("opacity 200ms ease-out 1s").unwrap(), true).unwrap();
        assert_eq!(layer.property.as_deref(), Some("opacity"));
        assert_eq!(layer.times.duration.as_deref(), Some("200ms"));
        assert_eq!(layer.timing_function.as_deref(), Some("ease-out"));
        assert_eq!(layer.times.delay.as_deref(), Some("1s"));
    }

    #[test]
    fn none_needs_a_single_layer() {
        assert!(classify(&tokenize_value("none 1s").unwrap(), true).is_ok());
        assert_eq!(
            classify(&tokenize_value("none 1s").unwrap(), false),
            Err(ShorthandError::invalid("none"))
        );
    }
}
