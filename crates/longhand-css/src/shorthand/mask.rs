//! [CSS Masking § 7.1 'mask'](https://www.w3.org/TR/css-masking-1/#the-mask)
//!
//! "`<mask-layer>` = `<mask-reference>` || `<position>` [ / `<bg-size>` ]? ||
//! `<repeat-style>` || `<geometry-box>` || [ `<geometry-box>` | no-clip ] ||
//! `<compositing-operator>` || `<masking-mode>`"
//!
//! Shares the layer scanner with `background`. Differences: no attachment or
//! color, a wider set of geometry boxes, `no-clip`, and the mode and
//! composite slots.
//!
//! With one geometry box the box sets `mask-origin` and `mask-clip` keeps its
//! own initial value `border-box`, the same as for `background`. Whenever
//! the two are equal on collapse they are written once.

use crate::error::{Result, ShorthandError};
use crate::layers::align_layers;
use crate::values::keywords;

use super::image_layer::{
    ImageLayerProfile, ImageLayerSlots, ImageSlot, classify_layer, collapse_layer,
};
use super::{
    LayerRecord, Longhands, PropertyDefaults, ShorthandMeta, collapse_global, expand_global,
    layer_tokens, records_from_aligned, require_longhands, serialize_layers, value_layers,
};

/// `mask` and its longhands with their initial values.
pub static META: ShorthandMeta = ShorthandMeta {
    shorthand: "mask",
    longhands: &[
        "mask-image",
        "mask-mode",
        "mask-position",
        "mask-size",
        "mask-repeat",
        "mask-origin",
        "mask-clip",
        "mask-composite",
    ],
    defaults: Some(PropertyDefaults::new(&[
        ("mask-image", "none"),
        ("mask-mode", "match-source"),
        ("mask-position", "0% 0%"),
        ("mask-size", "auto"),
        ("mask-repeat", "repeat"),
        ("mask-origin", "border-box"),
        ("mask-clip", "border-box"),
        ("mask-composite", "add"),
    ])),
};

static SLOTS: [ImageSlot; 8] = [
    ImageSlot::Image,
    ImageSlot::Mode,
    ImageSlot::Position,
    ImageSlot::Size,
    ImageSlot::Repeat,
    ImageSlot::Origin,
    ImageSlot::Clip,
    ImageSlot::Composite,
];

static PROFILE: ImageLayerProfile = ImageLayerProfile {
    family: "mask",
    meta: &META,
    slots: &SLOTS,
    boxes: keywords::MASK_BOXES,
    allow_attachment: false,
    allow_color: false,
    allow_mode_composite: true,
    allow_no_clip: true,
};

#[derive(Debug, Default)]
struct MaskLayer(ImageLayerSlots);

impl LayerRecord for MaskLayer {
    fn slot(&self, index: usize) -> Option<&str> {
        self.0.get(*SLOTS.get(index)?)
    }

    fn slot_mut(&mut self, index: usize) -> Option<&mut Option<String>> {
        Some(self.0.field_mut(*SLOTS.get(index)?))
    }
}

/// Expand a `mask` value into its eight longhands.
///
/// # Errors
///
/// Any token no slot accepts, a slot given twice, or more than two boxes.
pub fn expand(value: &str) -> Result<Longhands> {
    if let Some(global) = expand_global(&META, value) {
        return Ok(global);
    }

    let records = value_layers(value)?
        .into_iter()
        .map(|layer| {
            let tokens = layer_tokens(layer)?;
            classify_layer(&PROFILE, &tokens, true).map(MaskLayer)
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(serialize_layers(&META, &records))
}

/// Collapse the eight `mask` longhands into one value.
///
/// # Errors
///
/// [`ShorthandError::IncompleteLonghandSet`] if a longhand is missing, and
/// [`ShorthandError::Uncollapsible`] if any layer has only initial values.
pub fn collapse(longhands: &Longhands) -> Result<String> {
    let values = require_longhands(&META, longhands)?;
    if let Some(global) = collapse_global(&values)? {
        return Ok(global);
    }

    let lists: Vec<_> = values.iter().copied().map(Some).collect();
    let aligned = align_layers(&lists)?;
    let records: Vec<MaskLayer> = records_from_aligned(&aligned);
    if records.is_empty() {
        return Err(ShorthandError::EmptyValue);
    }

    let layers = records
        .iter()
        .map(|record| {
            let parts = collapse_layer(&PROFILE, &record.0);
            if parts.is_empty() {
                Err(ShorthandError::Uncollapsible {
                    reason: "a mask layer has only initial values",
                })
            } else {
                Ok(parts.join(" "))
            }
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(layers.join(", "))
}
