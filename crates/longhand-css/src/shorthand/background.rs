//! [CSS Backgrounds § 3.10 'background'](https://www.w3.org/TR/css-backgrounds-3/#background)
//!
//! "The 'background' property is a shorthand property for setting most
//! background properties at the same place in the style sheet."
//!
//! "`<final-bg-layer>` = `<bg-image>` || `<bg-position>` [ / `<bg-size>` ]? ||
//! `<repeat-style>` || `<attachment>` || `<visual-box>` || `<visual-box>` ||
//! `<'background-color'>`"
//!
//! Every longhand except `background-color` is a comma-separated list with
//! one entry per layer. The color belongs to the final layer only.

use crate::error::{Result, ShorthandError};
use crate::layers::{align_layers, split_layers};
use crate::values::keywords;

use super::image_layer::{
    ImageLayerProfile, ImageLayerSlots, ImageSlot, classify_layer, collapse_layer,
};
use super::{
    LayerRecord, Longhands, PropertyDefaults, ShorthandMeta, collapse_global, expand_global,
    is_default_value, layer_tokens, records_from_aligned, require_longhands, serialize_layers,
    value_layers,
};

/// `background` and its longhands with their initial values.
pub static META: ShorthandMeta = ShorthandMeta {
    shorthand: "background",
    longhands: &[
        "background-image",
        "background-position",
        "background-size",
        "background-repeat",
        "background-attachment",
        "background-origin",
        "background-clip",
        "background-color",
    ],
    defaults: Some(PropertyDefaults::new(&[
        ("background-image", "none"),
        ("background-position", "0% 0%"),
        ("background-size", "auto auto"),
        ("background-repeat", "repeat"),
        ("background-attachment", "scroll"),
        ("background-origin", "padding-box"),
        ("background-clip", "border-box"),
        ("background-color", "transparent"),
    ])),
};

static SLOTS: [ImageSlot; 8] = [
    ImageSlot::Image,
    ImageSlot::Position,
    ImageSlot::Size,
    ImageSlot::Repeat,
    ImageSlot::Attachment,
    ImageSlot::Origin,
    ImageSlot::Clip,
    ImageSlot::Color,
];

/// Index of `background-color` in [`META`].
const COLOR: usize = 7;

static PROFILE: ImageLayerProfile = ImageLayerProfile {
    family: "background",
    meta: &META,
    slots: &SLOTS,
    boxes: keywords::BACKGROUND_BOXES,
    allow_attachment: true,
    allow_color: true,
    allow_mode_composite: false,
    allow_no_clip: false,
};

/// One background layer. The color is not part of any layer's lists.
#[derive(Debug, Default)]
struct BackgroundLayer(ImageLayerSlots);

impl LayerRecord for BackgroundLayer {
    fn slot(&self, index: usize) -> Option<&str> {
        match SLOTS.get(index)? {
            ImageSlot::Color => None,
            &slot => self.0.get(slot),
        }
    }

    fn slot_mut(&mut self, index: usize) -> Option<&mut Option<String>> {
        match SLOTS.get(index)? {
            ImageSlot::Color => None,
            &slot => Some(self.0.field_mut(slot)),
        }
    }
}

/// Expand a `background` value into its eight longhands.
///
/// # Errors
///
/// Any token no slot accepts, a slot given twice, a color outside the final
/// layer, or an image after the color.
pub fn expand(value: &str) -> Result<Longhands> {
    if let Some(global) = expand_global(&META, value) {
        return Ok(global);
    }

    let layers = value_layers(value)?;
    let last = layers.len().saturating_sub(1);
    let mut records = Vec::with_capacity(layers.len());
    let mut color = None;

    for (index, layer) in layers.iter().enumerate() {
        let tokens = layer_tokens(layer)?;
        let mut slots = classify_layer(&PROFILE, &tokens, index == last)?;
        if let Some(found) = slots.color.take() {
            color = Some(found);
        }
        records.push(BackgroundLayer(slots));
    }

    let mut longhands = serialize_layers(&META, &records);
    let _ = longhands.insert(
        META.longhands[COLOR].to_string(),
        color.unwrap_or_else(|| META.default_at(COLOR).to_string()),
    );
    Ok(longhands)
}

/// Collapse the eight `background` longhands into one value.
///
/// A layer whose slots are all initial is written `none`; the color, when
/// not `transparent`, ends the final layer.
///
/// # Errors
///
/// [`ShorthandError::IncompleteLonghandSet`] if a longhand is missing,
/// [`ShorthandError::Uncollapsible`] if `background-color` holds a list.
pub fn collapse(longhands: &Longhands) -> Result<String> {
    let values = require_longhands(&META, longhands)?;
    if let Some(global) = collapse_global(&values)? {
        return Ok(global);
    }

    let color = values[COLOR];
    if split_layers(color)?.len() != 1 {
        return Err(ShorthandError::Uncollapsible {
            reason: "background-color is a single value",
        });
    }

    let lists: Vec<_> = values[..COLOR].iter().copied().map(Some).collect();
    let aligned = align_layers(&lists)?;
    let records: Vec<BackgroundLayer> = records_from_aligned(&aligned);
    if records.is_empty() {
        return Err(ShorthandError::EmptyValue);
    }

    let last = records.len() - 1;
    let layers: Vec<String> = records
        .iter()
        .enumerate()
        .map(|(index, record)| {
            let mut parts = collapse_layer(&PROFILE, &record.0);
            if index == last && !is_default_value(color, META.default_at(COLOR)) {
                parts.push(color.to_string());
            }
            if parts.is_empty() {
                parts.push("none".to_string());
            }
            parts.join(" ")
        })
        .collect();

    Ok(layers.join(", "))
}
