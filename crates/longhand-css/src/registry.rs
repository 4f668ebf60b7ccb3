//! The shorthand dispatch table and the declaration-level entry points.
//!
//! [`ShorthandKind`] is the closed set of families. Lookup by name goes
//! through `strum`, dispatch is a plain `match`.

use longhand_common::warning::warn_once;
use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter, EnumString, IntoStaticStr};

use crate::error::{Result, ShorthandError};
use crate::shorthand::{
    Longhands, ShorthandMeta, animation, background, border, border_radius, flex, lookup, mask,
    same_list, sides, transition,
};

/// Every supported shorthand.
///
/// Variant order is the order [`compact`] tries families in: wider families
/// come before the narrower ones that share their longhands.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, EnumString, Display, EnumIter, IntoStaticStr,
)]
#[strum(serialize_all = "kebab-case", ascii_case_insensitive)]
pub enum ShorthandKind {
    /// `background`
    Background,
    /// `mask`
    Mask,
    /// `animation`
    Animation,
    /// `transition`
    Transition,
    /// `flex`
    Flex,
    /// `border`
    Border,
    /// `border-top`
    BorderTop,
    /// `border-right`
    BorderRight,
    /// `border-bottom`
    BorderBottom,
    /// `border-left`
    BorderLeft,
    /// `border-width`
    BorderWidth,
    /// `border-style`
    BorderStyle,
    /// `border-color`
    BorderColor,
    /// `border-radius`
    BorderRadius,
    /// `margin`
    Margin,
    /// `padding`
    Padding,
}

impl ShorthandKind {
    /// Look a family up by shorthand name (ASCII case-insensitive).
    ///
    /// # Errors
    ///
    /// [`ShorthandError::UnknownShorthand`] if no family has that name; the
    /// first miss for each name is also reported on stderr.
    pub fn from_name(name: &str) -> Result<Self> {
        name.trim().parse().map_err(|_| {
            let _ = warn_once("CSS", &format!("unknown shorthand '{name}'"));
            ShorthandError::UnknownShorthand {
                name: name.to_string(),
            }
        })
    }

    /// The family's descriptor.
    #[must_use]
    pub fn meta(self) -> &'static ShorthandMeta {
        match self {
            Self::Background => &background::META,
            Self::Mask => &mask::META,
            Self::Animation => &animation::META,
            Self::Transition => &transition::META,
            Self::Flex => &flex::META,
            Self::Border => &border::META,
            Self::BorderTop => &border::TOP_META,
            Self::BorderRight => &border::RIGHT_META,
            Self::BorderBottom => &border::BOTTOM_META,
            Self::BorderLeft => &border::LEFT_META,
            Self::BorderWidth => &sides::BORDER_WIDTH_META,
            Self::BorderStyle => &sides::BORDER_STYLE_META,
            Self::BorderColor => &sides::BORDER_COLOR_META,
            Self::BorderRadius => &border_radius::META,
            Self::Margin => &sides::MARGIN_META,
            Self::Padding => &sides::PADDING_META,
        }
    }

    /// Expand `value` (without `!important`) into every longhand.
    ///
    /// # Errors
    ///
    /// Whatever the family rejects; no partial map is ever returned.
    pub fn expand(self, value: &str) -> Result<Longhands> {
        match self {
            Self::Background => background::expand(value),
            Self::Mask => mask::expand(value),
            Self::Animation => animation::expand(value),
            Self::Transition => transition::expand(value),
            Self::Flex => flex::expand(value),
            Self::Border => border::expand(value),
            Self::BorderTop | Self::BorderRight | Self::BorderBottom | Self::BorderLeft => {
                border::expand_side(self.meta(), value)
            }
            Self::BorderWidth => sides::BORDER_WIDTH.expand(value),
            Self::BorderStyle => sides::BORDER_STYLE.expand(value),
            Self::BorderColor => sides::BORDER_COLOR.expand(value),
            Self::BorderRadius => border_radius::expand(value),
            Self::Margin => sides::MARGIN.expand(value),
            Self::Padding => sides::PADDING.expand(value),
        }
    }

    /// Collapse a complete longhand set into the shorthand value.
    ///
    /// The result is expanded again and compared with the input, so a value
    /// returned here always reads back as the same longhands.
    ///
    /// # Errors
    ///
    /// [`ShorthandError::IncompleteLonghandSet`] if a longhand is missing;
    /// [`ShorthandError::Uncollapsible`] or [`ShorthandError::AmbiguousOrder`]
    /// if the shorthand cannot represent the set exactly.
    pub fn collapse(self, longhands: &Longhands) -> Result<String> {
        let collapsed = self.collapse_unchecked(longhands)?;

        let reread = self
            .expand(&collapsed)
            .map_err(|_| ShorthandError::Uncollapsible {
                reason: "collapsed value does not parse",
            })?;
        let meta = self.meta();
        for (index, &name) in meta.longhands.iter().enumerate() {
            let original = lookup(longhands, name).unwrap_or_default();
            let again = reread.get(name).map_or("", String::as_str);
            if !same_list(original, again, meta.default_at(index)) {
                classify_trace!(
                    "[COLLAPSE {}] '{}' reads back '{}' for {}",
                    self,
                    collapsed,
                    again,
                    name
                );
                return Err(ShorthandError::Uncollapsible {
                    reason: "collapsed value reads back differently",
                });
            }
        }

        Ok(collapsed)
    }

    fn collapse_unchecked(self, longhands: &Longhands) -> Result<String> {
        match self {
            Self::Background => background::collapse(longhands),
            Self::Mask => mask::collapse(longhands),
            Self::Animation => animation::collapse(longhands),
            Self::Transition => transition::collapse(longhands),
            Self::Flex => flex::collapse(longhands),
            Self::Border => border::collapse(longhands),
            Self::BorderTop | Self::BorderRight | Self::BorderBottom | Self::BorderLeft => {
                border::collapse_side(self.meta(), longhands)
            }
            Self::BorderWidth => sides::BORDER_WIDTH.collapse(longhands),
            Self::BorderStyle => sides::BORDER_STYLE.collapse(longhands),
            Self::BorderColor => sides::BORDER_COLOR.collapse(longhands),
            Self::BorderRadius => border_radius::collapse(longhands),
            Self::Margin => sides::MARGIN.collapse(longhands),
            Self::Padding => sides::PADDING.collapse(longhands),
        }
    }
}

/// Expand `value` for the shorthand named `property`.
///
/// # Errors
///
/// [`ShorthandError::UnknownShorthand`] for an unsupported name, otherwise
/// as [`ShorthandKind::expand`].
pub fn expand(property: &str, value: &str) -> Result<Longhands> {
    ShorthandKind::from_name(property)?.expand(value)
}

/// Collapse `longhands` into the shorthand named `property`.
///
/// # Errors
///
/// [`ShorthandError::UnknownShorthand`] for an unsupported name, otherwise
/// as [`ShorthandKind::collapse`].
pub fn collapse(property: &str, longhands: &Longhands) -> Result<String> {
    ShorthandKind::from_name(property)?.collapse(longhands)
}

/// The descriptor of the shorthand named `property`.
///
/// # Errors
///
/// [`ShorthandError::UnknownShorthand`] for an unsupported name.
pub fn meta(property: &str) -> Result<&'static ShorthandMeta> {
    ShorthandKind::from_name(property).map(ShorthandKind::meta)
}

/// [CSS Cascade § 6.4 Important Declarations](https://www.w3.org/TR/css-cascade-5/#importance)
///
/// Split a trailing `!important` off a declaration value. Returns the
/// trimmed value and whether the flag was present.
#[must_use]
pub fn split_important(value: &str) -> (&str, bool) {
    let trimmed = value.trim();
    if let Some(bang) = trimmed.rfind('!') {
        let (head, tail) = trimmed.split_at(bang);
        if tail[1..].trim().eq_ignore_ascii_case("important") {
            return (head.trim_end(), true);
        }
    }
    (trimmed, false)
}

/// Replace every complete, collapsible longhand group in `declarations` with
/// its shorthand, in place of the group's first longhand.
///
/// A group is skipped when a longhand is missing, when `!important` is set
/// on some longhands but not all, or when the family cannot collapse it.
/// Everything else is left as it was.
#[must_use]
pub fn compact(declarations: &Longhands) -> Longhands {
    let mut out = declarations.clone();

    for kind in ShorthandKind::iter() {
        let meta = kind.meta();
        let Some(positions) = meta
            .longhands
            .iter()
            .map(|name| out.keys().position(|key| key.eq_ignore_ascii_case(name)))
            .collect::<Option<Vec<_>>>()
        else {
            continue;
        };

        let mut group = Longhands::with_capacity(positions.len());
        let mut flags = Vec::with_capacity(positions.len());
        for (&name, &position) in meta.longhands.iter().zip(&positions) {
            let Some((_, value)) = out.get_index(position) else {
                continue;
            };
            let (value, important) = split_important(value);
            flags.push(important);
            let _ = group.insert(name.to_string(), value.to_string());
        }
        let important = flags.first().copied().unwrap_or(false);
        if group.len() != meta.longhands.len() || flags.iter().any(|&flag| flag != important) {
            continue;
        }

        let Ok(shorthand) = kind.collapse(&group) else {
            continue;
        };
        classify_trace!("[COMPACT] {} -> '{}'", kind, shorthand);

        let first = positions.iter().copied().min().unwrap_or(0);
        let mut removed: Vec<usize> = positions;
        removed.sort_unstable_by(|a, b| b.cmp(a));
        for position in removed {
            let _ = out.shift_remove_index(position);
        }
        let value = if important {
            format!("{shorthand} !important")
        } else {
            shorthand
        };
        let _ = out.shift_insert(first.min(out.len()), meta.shorthand.to_string(), value);
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn important_is_split_off() {
        assert_eq!(split_important("red !important"), ("red", true));
        assert_eq!(split_important("red ! IMPORTANT "), ("red", true));
        assert_eq!(split_important("url(a!b.png)"), ("url(a!b.png)", false));
        assert_eq!(split_important("  red "), ("red", false));
    }

    #[test]
    fn names_are_kebab_case() {
        assert_eq!(ShorthandKind::BorderRadius.to_string(), "border-radius");
        assert_eq!("Border-Top".parse::<ShorthandKind>(), Ok(ShorthandKind::BorderTop));
        let name: &'static str = ShorthandKind::Mask.into();
        assert_eq!(name, "mask");
    }

    #[test]
    fn every_kind_names_its_own_meta() {
        for kind in ShorthandKind::iter() {
            assert_eq!(kind.meta().shorthand, kind.to_string());
        }
    }
}
