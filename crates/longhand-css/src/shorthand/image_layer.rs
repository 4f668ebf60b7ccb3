//! The layer classifier shared by `background` and `mask`.
//!
//! [CSS Backgrounds § 3.10](https://www.w3.org/TR/css-backgrounds-3/#background)
//!
//! "`<bg-layer>` = `<bg-image>` || `<bg-position>` [ / `<bg-size>` ]? ||
//! `<repeat-style>` || `<attachment>` || `<visual-box>` || `<visual-box>`"
//!
//! [CSS Masking § 7.1](https://www.w3.org/TR/css-masking-1/#the-mask)
//!
//! "`<mask-layer>` = `<mask-reference>` || `<position>` [ / `<bg-size>` ]? ||
//! `<repeat-style>` || `<geometry-box>` || [ `<geometry-box>` | no-clip ] ||
//! `<compositing-operator>` || `<masking-mode>`"
//!
//! Both grammars are unordered juxtapositions, so a layer is classified in one
//! pass: each token routes the scanner to the state that owns it, that state
//! claims one or more tokens, and a slot may only be claimed once.

use crate::cursor::TokenCursor;
use crate::error::{Result, ShorthandError};
use crate::values::keywords;
use crate::values::{ValueToken, is_color, join_tokens};

use super::{ShorthandMeta, fill_slot, is_default_value};

/// One slot of an image layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ImageSlot {
    Image,
    Mode,
    Position,
    Size,
    Repeat,
    Attachment,
    Origin,
    Clip,
    Composite,
    Color,
}

/// What a family's layers may contain.
#[derive(Debug)]
pub(crate) struct ImageLayerProfile {
    /// Family name used in traces.
    pub family: &'static str,
    /// The family descriptor; its defaults are the slot defaults.
    pub meta: &'static ShorthandMeta,
    /// Slot of each longhand in `meta.longhands` order.
    pub slots: &'static [ImageSlot],
    /// Keywords legal for `origin` and `clip`.
    pub boxes: &'static [&'static str],
    pub allow_attachment: bool,
    pub allow_color: bool,
    pub allow_mode_composite: bool,
    pub allow_no_clip: bool,
}

impl ImageLayerProfile {
    /// Initial value of `slot` for this family.
    pub fn default_of(&self, slot: ImageSlot) -> &'static str {
        self.slots
            .iter()
            .position(|&s| s == slot)
            .map_or("", |index| self.meta.default_at(index))
    }

    /// Longhand index of `slot`, if the family has it.
    pub fn index_of(&self, slot: ImageSlot) -> Option<usize> {
        self.slots.iter().position(|&s| s == slot)
    }
}

/// Every slot a background or mask layer can set. `None` is unspecified.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct ImageLayerSlots {
    pub image: Option<String>,
    pub mode: Option<String>,
    pub position: Option<String>,
    pub size: Option<String>,
    pub repeat: Option<String>,
    pub attachment: Option<String>,
    pub origin: Option<String>,
    pub clip: Option<String>,
    pub composite: Option<String>,
    pub color: Option<String>,
}

impl ImageLayerSlots {
    pub fn get(&self, slot: ImageSlot) -> Option<&str> {
        self.field(slot).as_deref()
    }

    const fn field(&self, slot: ImageSlot) -> &Option<String> {
        match slot {
            ImageSlot::Image => &self.image,
            ImageSlot::Mode => &self.mode,
            ImageSlot::Position => &self.position,
            ImageSlot::Size => &self.size,
            ImageSlot::Repeat => &self.repeat,
            ImageSlot::Attachment => &self.attachment,
            ImageSlot::Origin => &self.origin,
            ImageSlot::Clip => &self.clip,
            ImageSlot::Composite => &self.composite,
            ImageSlot::Color => &self.color,
        }
    }

    pub const fn field_mut(&mut self, slot: ImageSlot) -> &mut Option<String> {
        match slot {
            ImageSlot::Image => &mut self.image,
            ImageSlot::Mode => &mut self.mode,
            ImageSlot::Position => &mut self.position,
            ImageSlot::Size => &mut self.size,
            ImageSlot::Repeat => &mut self.repeat,
            ImageSlot::Attachment => &mut self.attachment,
            ImageSlot::Origin => &mut self.origin,
            ImageSlot::Clip => &mut self.clip,
            ImageSlot::Composite => &mut self.composite,
            ImageSlot::Color => &mut self.color,
        }
    }
}

/// Scanner states. Each `Seek*` state owns the slot(s) it names.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScanState {
    Start,
    SeekImage,
    SeekPositionSize,
    SeekRepeat,
    SeekAttachment,
    SeekOriginClip,
    SeekModeComposite,
    SeekColor,
    Invalid,
}

/// `<image>` or `none`.
fn is_image(token: &ValueToken) -> bool {
    token.is_function_in(keywords::IMAGE_FUNCTIONS) || token.is_ident("none")
}

/// A token that can start or continue a `<position>`.
fn is_position_token(token: &ValueToken) -> bool {
    token.is_ident_in(keywords::POSITION_KEYWORDS) || token.is_length_percentage()
}

/// A token that can be one `<bg-size>` value.
fn is_size_token(token: &ValueToken) -> bool {
    token.is_ident_in(keywords::SIZE_KEYWORDS) || token.is_length_percentage()
}

/// Pick the state that owns `token`.
fn route(profile: &ImageLayerProfile, token: &ValueToken) -> ScanState {
    if is_image(token) {
        ScanState::SeekImage
    } else if token.is_operator('/') || is_position_token(token) {
        ScanState::SeekPositionSize
    } else if token.is_ident_in(keywords::REPEAT_KEYWORDS) {
        ScanState::SeekRepeat
    } else if profile.allow_attachment && token.is_ident_in(keywords::ATTACHMENT_KEYWORDS) {
        ScanState::SeekAttachment
    } else if token.is_ident_in(profile.boxes) || (profile.allow_no_clip && token.is_ident("no-clip")) {
        ScanState::SeekOriginClip
    } else if profile.allow_mode_composite
        && (token.is_ident_in(keywords::MASK_MODES) || token.is_ident_in(keywords::MASK_COMPOSITES))
    {
        ScanState::SeekModeComposite
    } else if profile.allow_color && is_color(token) {
        ScanState::SeekColor
    } else {
        ScanState::Invalid
    }
}

/// Classify one layer's tokens into slots.
///
/// `is_final` is true for the last layer of the value: only there may a
/// color appear.
pub(crate) fn classify_layer(
    profile: &ImageLayerProfile,
    tokens: &[ValueToken],
    is_final: bool,
) -> Result<ImageLayerSlots> {
    let mut slots = ImageLayerSlots::default();
    let mut cursor = TokenCursor::new(tokens);
    let mut state = ScanState::Start;

    while let Some(token) = cursor.peek() {
        let next = route(profile, token);
        classify_trace!(
            "[CLASSIFY {}] {:?} -> {:?} on '{}'",
            profile.family,
            state,
            next,
            token
        );

        match next {
            ScanState::SeekImage => {
                // [§ 3.10](https://www.w3.org/TR/css-backgrounds-3/#background)
                //
                // "`<final-bg-layer>` = ... || `<'background-color'>`": the color
                // closes the layer list, so an image read after it is out of order.
                if slots.color.is_some() {
                    return Err(ShorthandError::AmbiguousOrder {
                        reason: "image after color",
                    });
                }
                let _ = cursor.advance();
                fill_slot(&mut slots.image, "image", token.to_string())?;
            }
            ScanState::SeekPositionSize => scan_position_size(&mut cursor, &mut slots)?,
            ScanState::SeekRepeat => {
                if slots.repeat.is_some() {
                    return Err(if state == ScanState::SeekRepeat {
                        ShorthandError::TooManyValues {
                            slot: "repeat",
                            max: 2,
                        }
                    } else {
                        ShorthandError::DuplicateSlot { slot: "repeat" }
                    });
                }
                scan_repeat(&mut cursor, &mut slots);
            }
            ScanState::SeekAttachment => {
                let _ = cursor.advance();
                fill_slot(&mut slots.attachment, "attachment", token.to_string())?;
            }
            ScanState::SeekOriginClip => {
                let _ = cursor.advance();
                fill_box(&mut slots, token)?;
            }
            ScanState::SeekModeComposite => {
                let _ = cursor.advance();
                if token.is_ident_in(keywords::MASK_MODES) {
                    fill_slot(&mut slots.mode, "mode", token.to_string())?;
                } else {
                    fill_slot(&mut slots.composite, "composite", token.to_string())?;
                }
            }
            ScanState::SeekColor => {
                if !is_final {
                    return Err(ShorthandError::AmbiguousOrder {
                        reason: "color is only allowed in the final layer",
                    });
                }
                let _ = cursor.advance();
                fill_slot(&mut slots.color, "color", token.to_string())?;
            }
            ScanState::Start | ScanState::Invalid => {
                return Err(ShorthandError::invalid(token.to_string()));
            }
        }
        state = next;
    }

    Ok(slots)
}

/// `<position> [ / <bg-size> ]?`, starting at a position token or `/`.
fn scan_position_size(cursor: &mut TokenCursor<'_>, slots: &mut ImageLayerSlots) -> Result<()> {
    if slots.position.is_some() {
        return Err(ShorthandError::DuplicateSlot { slot: "position" });
    }

    let mut position = Vec::new();
    while let Some(token) = cursor.next_if(is_position_token) {
        position.push(token.clone());
    }
    if position.is_empty() {
        // A size needs the position it is paired with.
        return Err(ShorthandError::invalid("/"));
    }
    check_position(&position)?;
    slots.position = Some(join_tokens(&position));

    if cursor.next_if(|t| t.is_operator('/')).is_none() {
        return Ok(());
    }

    let mut size = Vec::new();
    while let Some(token) = cursor.next_if(is_size_token) {
        size.push(token.clone());
    }
    match size.as_slice() {
        [] => {
            let after = cursor.peek().map_or_else(|| "/".to_string(), ToString::to_string);
            return Err(ShorthandError::invalid(after));
        }
        [_, _, _, ..] => return Err(ShorthandError::TooManyValues { slot: "size", max: 2 }),
        [_, _] => {
            if let Some(sole) = size.iter().find(|t| t.is_ident_in(keywords::SOLE_SIZE_KEYWORDS)) {
                return Err(ShorthandError::invalid(sole.to_string()));
            }
        }
        [_] => {}
    }
    slots.size = Some(join_tokens(&size));
    Ok(())
}

/// [CSS Values § 8.3](https://www.w3.org/TR/css-values-4/#position)
///
/// One or two values. With two, the first names the horizontal axis unless
/// both are keywords and the pair reads naturally only swapped (`top left`).
fn check_position(position: &[ValueToken]) -> Result<()> {
    let is_horizontal = |t: &ValueToken| t.is_ident_in(keywords::HORIZONTAL_KEYWORDS);
    let is_vertical = |t: &ValueToken| t.is_ident_in(keywords::VERTICAL_KEYWORDS);

    match position {
        [_] => Ok(()),
        [first, second] => {
            let conflict = (is_horizontal(first) && is_horizontal(second))
                || (is_vertical(first) && is_vertical(second))
                || (is_vertical(first) && second.is_length_percentage())
                || (first.is_length_percentage() && is_horizontal(second));
            if conflict {
                Err(ShorthandError::AmbiguousOrder {
                    reason: "position values name the same axis",
                })
            } else {
                Ok(())
            }
        }
        _ => Err(ShorthandError::TooManyValues {
            slot: "position",
            max: 2,
        }),
    }
}

/// [CSS Backgrounds § 3.4](https://www.w3.org/TR/css-backgrounds-3/#background-repeat)
///
/// "`<repeat-style>` = repeat-x | repeat-y | [repeat | space | round | no-repeat]{1,2}"
fn scan_repeat(cursor: &mut TokenCursor<'_>, slots: &mut ImageLayerSlots) {
    let Some(first) = cursor.advance() else {
        return;
    };
    let mut value = first.to_string();
    if !first.is_ident_in(keywords::SOLE_REPEAT_KEYWORDS) {
        let pairable =
            |t: &ValueToken| t.is_ident_in(keywords::REPEAT_KEYWORDS) && !t.is_ident_in(keywords::SOLE_REPEAT_KEYWORDS);
        if let Some(second) = cursor.next_if(pairable) {
            value.push(' ');
            value.push_str(&second.to_string());
        }
    }
    slots.repeat = Some(value);
}

/// The first box sets `origin`, the second `clip`. With only one box, `clip`
/// keeps its own initial value.
fn fill_box(slots: &mut ImageLayerSlots, token: &ValueToken) -> Result<()> {
    let value = token.to_string();
    if token.is_ident("no-clip") {
        return fill_slot(&mut slots.clip, "clip", value);
    }
    if slots.origin.is_none() {
        slots.origin = Some(value);
        Ok(())
    } else if slots.clip.is_none() {
        slots.clip = Some(value);
        Ok(())
    } else {
        Err(ShorthandError::TooManyValues { slot: "box", max: 2 })
    }
}

// ============================================================================
// Collapse
// ============================================================================

/// The shorthand tokens for one layer, in canonical order, with default
/// slots dropped. The color slot is left to the caller.
pub(crate) fn collapse_layer(profile: &ImageLayerProfile, slots: &ImageLayerSlots) -> Vec<String> {
    let value_of = |slot| slots.get(slot).unwrap_or_else(|| profile.default_of(slot));
    let non_default = |slot| {
        profile.index_of(slot).is_some() && !is_default_value(value_of(slot), profile.default_of(slot))
    };
    let mut parts = Vec::new();

    if non_default(ImageSlot::Image) {
        parts.push(value_of(ImageSlot::Image).to_string());
    }

    // A size can only be written after a position.
    if non_default(ImageSlot::Size) {
        parts.push(format!(
            "{} / {}",
            value_of(ImageSlot::Position),
            value_of(ImageSlot::Size)
        ));
    } else if non_default(ImageSlot::Position) {
        parts.push(value_of(ImageSlot::Position).to_string());
    }

    for slot in [ImageSlot::Repeat, ImageSlot::Attachment] {
        if non_default(slot) {
            parts.push(value_of(slot).to_string());
        }
    }

    if non_default(ImageSlot::Origin) || non_default(ImageSlot::Clip) {
        let origin = value_of(ImageSlot::Origin);
        let clip = value_of(ImageSlot::Clip);
        // One box reads back as origin with clip at border-box, so equal
        // boxes other than border-box stay two tokens.
        if clip.eq_ignore_ascii_case("border-box") {
            parts.push(origin.to_string());
        } else {
            parts.push(format!("{origin} {clip}"));
        }
        classify_trace!(
            "[COLLAPSE {}] origin '{}' clip '{}' -> '{}'",
            profile.family,
            origin,
            clip,
            parts.last().map_or("", String::as_str)
        );
    }

    for slot in [ImageSlot::Composite, ImageSlot::Mode] {
        if non_default(slot) {
            parts.push(value_of(slot).to_string());
        }
    }

    parts
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shorthand::PropertyDefaults;
    use crate::values::tokenize_value;

    static TEST_META: ShorthandMeta = ShorthandMeta {
        shorthand: "test",
        longhands: &["i", "p", "s", "r", "o", "c"],
        defaults: Some(PropertyDefaults::new(&[
            ("i", "none"),
            ("p", "0% 0%"),
            ("s", "auto"),
            ("r", "repeat"),
            ("o", "border-box"),
            ("c", "border-box"),
        ])),
    };

    static PROFILE: ImageLayerProfile = ImageLayerProfile {
        family: "test",
        meta: &TEST_META,
        slots: &[
            ImageSlot::Image,
            ImageSlot::Position,
            ImageSlot::Size,
            ImageSlot::Repeat,
            ImageSlot::Origin,
            ImageSlot::Clip,
        ],
        boxes: keywords::MASK_BOXES,
        allow_attachment: false,
        allow_color: false,
        allow_mode_composite: false,
        allow_no_clip: true,
    };

    fn classify(value: &str) -> Result<ImageLayerSlots> {
        classify_layer(&PROFILE, &tokenize_value(value).unwrap(), true)
    }

    #[test]
    fn position_and_size_split_at_slash() {
        let slots = classify("center / 50% auto").unwrap();
        assert_eq!(slots.position.as_deref(), Some("center"));
        assert_eq!(slots.size.as_deref(), Some("50% auto"));
    }

    #[test]
    fn repeat_pairs_and_overflows() {
        assert_eq!(classify("repeat no-repeat").unwrap().repeat.as_deref(), Some("repeat no-repeat"));
        assert_eq!(
            classify("repeat space round"),
            Err(ShorthandError::TooManyValues { slot: "repeat", max: 2 })
        );
        assert_eq!(
            classify("repeat-x left repeat"),
            Err(ShorthandError::DuplicateSlot { slot: "repeat" })
        );
    }

    #[test]
    fn position_rejects_same_axis_pairs() {
        assert!(classify("top left").is_ok());
        assert!(matches!(classify("left right"), Err(ShorthandError::AmbiguousOrder { .. })));
        assert!(matches!(classify("top 10px"), Err(ShorthandError::AmbiguousOrder { .. })));
        assert!(matches!(classify("10px left"), Err(ShorthandError::AmbiguousOrder { .. })));
    }

    #[test]
    fn no_clip_only_fills_clip() {
        let slots = classify("no-clip fill-box").unwrap();
        assert_eq!(slots.clip.as_deref(), Some("no-clip"));
        assert_eq!(slots.origin.as_deref(), Some("fill-box"));
    }

    #[test]
    fn size_requires_position_and_a_value() {
        assert_eq!(classify("/ cover"), Err(ShorthandError::invalid("/")));
        assert!(classify("left /").is_err());
        assert!(matches!(classify("0 0 / cover auto"), Err(ShorthandError::InvalidToken { .. })));
    }

    #[test]
    fn collapse_drops_defaults_and_pairs_size_with_position() {
        let slots = ImageLayerSlots {
            size: Some("cover".into()),
            origin: Some("content-box".into()),
            clip: Some("border-box".into()),
            ..ImageLayerSlots::default()
        };
        assert_eq!(collapse_layer(&PROFILE, &slots), vec!["0% 0% / cover", "content-box"]);
    }
}
