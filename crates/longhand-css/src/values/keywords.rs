//! Keyword tables shared by the shorthand classifiers.
//!
//! All lookups are ASCII case-insensitive, per
//! [CSS Values § 2.1](https://www.w3.org/TR/css-values-4/#keywords):
//! "keywords are ASCII case-insensitive".

/// True if `list` contains `word`, ignoring ASCII case.
#[must_use]
pub fn contains(list: &[&str], word: &str) -> bool {
    list.iter().any(|k| k.eq_ignore_ascii_case(word))
}

/// [CSS Cascade § 7.3](https://www.w3.org/TR/css-cascade-5/#defaulting-keywords)
///
/// CSS-wide keywords: valid for every property, only on their own.
pub const GLOBAL_KEYWORDS: &[&str] = &["inherit", "initial", "unset", "revert", "revert-layer"];

/// True if `word` is a CSS-wide keyword.
#[must_use]
pub fn is_global_keyword(word: &str) -> bool {
    contains(GLOBAL_KEYWORDS, word)
}

/// [CSS Values § 6](https://www.w3.org/TR/css-values-4/#lengths) absolute,
/// font-relative, and viewport-relative length units.
const LENGTH_UNITS: &[&str] = &[
    "px", "em", "rem", "ex", "rex", "ch", "rch", "cap", "rcap", "ic", "ric", "lh", "rlh", "vw",
    "vh", "vi", "vb", "vmin", "vmax", "svw", "svh", "svi", "svb", "svmin", "svmax", "lvw", "lvh",
    "lvi", "lvb", "lvmin", "lvmax", "dvw", "dvh", "dvi", "dvb", "dvmin", "dvmax", "cqw", "cqh",
    "cqi", "cqb", "cqmin", "cqmax", "cm", "mm", "q", "in", "pt", "pc",
];

/// True if `unit` is a length unit.
#[must_use]
pub fn is_length_unit(unit: &str) -> bool {
    contains(LENGTH_UNITS, unit)
}

/// True if `unit` is a `<time>` unit.
#[must_use]
pub fn is_time_unit(unit: &str) -> bool {
    unit.eq_ignore_ascii_case("s") || unit.eq_ignore_ascii_case("ms")
}

/// Math functions that can stand in for a length, percentage, or number.
pub const MATH_FUNCTIONS: &[&str] = &["calc", "min", "max", "clamp"];

// ============================================================================
// Backgrounds and masks
// ============================================================================

/// `<image>` functions per [CSS Images § 2](https://www.w3.org/TR/css-images-4/#image-values).
pub const IMAGE_FUNCTIONS: &[&str] = &[
    "url",
    "src",
    "image",
    "image-set",
    "-webkit-image-set",
    "cross-fade",
    "element",
    "paint",
    "linear-gradient",
    "radial-gradient",
    "conic-gradient",
    "repeating-linear-gradient",
    "repeating-radial-gradient",
    "repeating-conic-gradient",
    "-webkit-linear-gradient",
    "-webkit-radial-gradient",
    "-webkit-repeating-linear-gradient",
    "-webkit-repeating-radial-gradient",
    "-webkit-gradient",
];

/// `<position>` keywords.
pub const POSITION_KEYWORDS: &[&str] = &["left", "center", "right", "top", "bottom"];

/// Position keywords that can only name the horizontal axis.
pub const HORIZONTAL_KEYWORDS: &[&str] = &["left", "right"];

/// Position keywords that can only name the vertical axis.
pub const VERTICAL_KEYWORDS: &[&str] = &["top", "bottom"];

/// Keywords allowed in `<bg-size>` besides lengths.
pub const SIZE_KEYWORDS: &[&str] = &["auto", "cover", "contain"];

/// Size keywords that must be the only size value.
pub const SOLE_SIZE_KEYWORDS: &[&str] = &["cover", "contain"];

/// `<repeat-style>` keywords.
pub const REPEAT_KEYWORDS: &[&str] = &["repeat", "no-repeat", "space", "round", "repeat-x", "repeat-y"];

/// Repeat keywords that name both axes at once and cannot be paired.
pub const SOLE_REPEAT_KEYWORDS: &[&str] = &["repeat-x", "repeat-y"];

/// `<attachment>` keywords.
pub const ATTACHMENT_KEYWORDS: &[&str] = &["scroll", "fixed", "local"];

/// `<visual-box>` keywords accepted by `background-origin` / `background-clip`.
pub const BACKGROUND_BOXES: &[&str] = &["border-box", "padding-box", "content-box"];

/// `<geometry-box>` keywords accepted by `mask-origin` / `mask-clip`.
pub const MASK_BOXES: &[&str] = &[
    "border-box",
    "padding-box",
    "content-box",
    "fill-box",
    "stroke-box",
    "view-box",
];

/// `<masking-mode>` keywords.
pub const MASK_MODES: &[&str] = &["alpha", "luminance", "match-source"];

/// `<compositing-operator>` keywords.
pub const MASK_COMPOSITES: &[&str] = &["add", "subtract", "intersect", "exclude"];

// ============================================================================
// Animations and transitions
// ============================================================================

/// `<easing-function>` keywords.
pub const TIMING_KEYWORDS: &[&str] = &[
    "ease",
    "linear",
    "ease-in",
    "ease-out",
    "ease-in-out",
    "step-start",
    "step-end",
];

/// `<easing-function>` functions.
pub const EASING_FUNCTIONS: &[&str] = &["cubic-bezier", "steps", "linear"];

/// `<single-animation-direction>`.
pub const ANIMATION_DIRECTIONS: &[&str] = &["normal", "reverse", "alternate", "alternate-reverse"];

/// `<single-animation-fill-mode>`.
pub const ANIMATION_FILL_MODES: &[&str] = &["none", "forwards", "backwards", "both"];

/// `<single-animation-play-state>`.
pub const ANIMATION_PLAY_STATES: &[&str] = &["running", "paused"];

// ============================================================================
// Borders and flex
// ============================================================================

/// `<line-style>` keywords.
pub const LINE_STYLES: &[&str] = &[
    "none", "hidden", "dotted", "dashed", "solid", "double", "groove", "ridge", "inset", "outset",
];

/// `<line-width>` keywords.
pub const LINE_WIDTH_KEYWORDS: &[&str] = &["thin", "medium", "thick"];

/// `flex-basis` keywords besides `<length-percentage>`.
pub const FLEX_BASIS_KEYWORDS: &[&str] = &["auto", "content", "max-content", "min-content", "fit-content"];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookups_ignore_case() {
        assert!(is_global_keyword("INHERIT"));
        assert!(is_length_unit("PX"));
        assert!(is_time_unit("Ms"));
        assert!(contains(MASK_BOXES, "View-Box"));
        assert!(!contains(BACKGROUND_BOXES, "fill-box"));
    }
}
