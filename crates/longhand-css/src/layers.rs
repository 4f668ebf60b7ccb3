//! Comma-separated layers.
//!
//! [CSS Backgrounds § 2.2 Layering Multiple Background Images](https://www.w3.org/TR/css-backgrounds-3/#layering)
//!
//! "The background of a box can have multiple layers ... The number of layers
//! is determined by the number of comma-separated values in the
//! 'background-image' property."
//!
//! The splitter is shared by every multi-layer family. On the collapse path
//! every longhand's list is split and the lists are lined up by index.

use crate::error::{Result, ShorthandError};

/// [§ 5.4.7 Consume a comma-separated list](https://www.w3.org/TR/css-syntax-3/#parse-comma-separated-list-of-component-values)
///
/// Split `value` at commas that are not nested inside parentheses, brackets,
/// braces, strings, or comments. Each segment is trimmed.
///
/// An empty (all-whitespace) value has zero layers. A value with an empty
/// segment (`a, , b`, `a,`) is rejected rather than read as fewer layers.
///
/// # Errors
///
/// [`ShorthandError::EmptyLayer`] for an empty segment and
/// [`ShorthandError::UnbalancedValue`] if nesting or quoting does not close.
pub fn split_layers(value: &str) -> Result<Vec<&str>> {
    if value.trim().is_empty() {
        return Ok(Vec::new());
    }

    let mut layers = Vec::new();
    let mut depth = 0usize;
    let mut quote: Option<char> = None;
    let mut segment_start = 0;
    let mut chars = value.char_indices().peekable();

    while let Some((offset, c)) = chars.next() {
        if let Some(open) = quote {
            match c {
                '\\' => {
                    let _ = chars.next();
                }
                c if c == open => quote = None,
                _ => {}
            }
            continue;
        }

        match c {
            '"' | '\'' => quote = Some(c),
            '\\' => {
                let _ = chars.next();
            }
            '/' if chars.peek().is_some_and(|&(_, next)| next == '*') => {
                let _ = chars.next();
                let mut previous = '\0';
                let mut closed = false;
                for (_, inner) in chars.by_ref() {
                    if previous == '*' && inner == '/' {
                        closed = true;
                        break;
                    }
                    previous = inner;
                }
                if !closed {
                    return Err(ShorthandError::UnbalancedValue);
                }
            }
            '(' | '[' | '{' => depth += 1,
            ')' | ']' | '}' => {
                depth = depth
                    .checked_sub(1)
                    .ok_or(ShorthandError::UnbalancedValue)?;
            }
            ',' if depth == 0 => {
                push_segment(&mut layers, &value[segment_start..offset])?;
                segment_start = offset + c.len_utf8();
            }
            _ => {}
        }
    }

    if depth != 0 || quote.is_some() {
        return Err(ShorthandError::UnbalancedValue);
    }
    push_segment(&mut layers, &value[segment_start..])?;
    Ok(layers)
}

fn push_segment<'a>(layers: &mut Vec<&'a str>, segment: &'a str) -> Result<()> {
    let trimmed = segment.trim();
    if trimmed.is_empty() {
        return Err(ShorthandError::EmptyLayer {
            index: layers.len(),
        });
    }
    layers.push(trimmed);
    Ok(())
}

/// Several longhand lists lined up by layer index.
#[derive(Debug, Clone, Default)]
pub struct AlignedLayers<'a> {
    lists: Vec<Vec<&'a str>>,
    count: usize,
}

impl<'a> AlignedLayers<'a> {
    /// The effective layer count: the longest list's length.
    #[must_use]
    pub const fn layer_count(&self) -> usize {
        self.count
    }

    /// The value of property `property` (by input index) in layer `layer`.
    ///
    /// `None` past the end of that property's own list. Alignment never
    /// substitutes defaults.
    #[must_use]
    pub fn slot(&self, property: usize, layer: usize) -> Option<&'a str> {
        self.lists.get(property)?.get(layer).copied()
    }

    /// How many segments property `property` had.
    #[must_use]
    pub fn len_of(&self, property: usize) -> usize {
        self.lists.get(property).map_or(0, Vec::len)
    }
}

/// Split every present value and line the lists up.
///
/// An absent value (`None`) contributes no layers.
///
/// # Errors
///
/// Propagates the first [`split_layers`] failure.
pub fn align_layers<'a>(values: &[Option<&'a str>]) -> Result<AlignedLayers<'a>> {
    let lists = values
        .iter()
        .map(|value| value.map_or_else(|| Ok(Vec::new()), split_layers))
        .collect::<Result<Vec<_>>>()?;
    let count = lists.iter().map(Vec::len).max().unwrap_or(0);
    Ok(AlignedLayers { lists, count })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn commas_inside_functions_do_not_split() {
        assert_eq!(
            split_layers("url(a,b.png) left, linear-gradient(red, blue)").unwrap(),
            vec!["url(a,b.png) left", "linear-gradient(red, blue)"]
        );
        assert_eq!(
            split_layers("'a, b' x, c").unwrap(),
            vec!["'a, b' x", "c"]
        );
        assert_eq!(split_layers("a /* , */ b").unwrap(), vec!["a /* , */ b"]);
    }

    #[test]
    fn empty_input_has_no_layers() {
        assert!(split_layers("   ").unwrap().is_empty());
    }

    #[test]
    fn empty_segments_are_rejected() {
        assert_eq!(split_layers("a, , b"), Err(ShorthandError::EmptyLayer { index: 1 }));
        assert_eq!(split_layers("a,"), Err(ShorthandError::EmptyLayer { index: 1 }));
        assert_eq!(split_layers(", a"), Err(ShorthandError::EmptyLayer { index: 0 }));
    }

    #[test]
    fn unbalanced_nesting_is_rejected() {
        assert_eq!(split_layers("calc(1px, b"), Err(ShorthandError::UnbalancedValue));
        assert_eq!(split_layers("a), b"), Err(ShorthandError::UnbalancedValue));
        assert_eq!(split_layers("'a, b"), Err(ShorthandError::UnbalancedValue));
    }

    #[test]
    fn shorter_lists_leave_later_layers_unset() {
        let aligned = align_layers(&[Some("a, b, c"), Some("x"), None]).unwrap();
        assert_eq!(aligned.layer_count(), 3);
        assert_eq!(aligned.slot(0, 2), Some("c"));
        assert_eq!(aligned.slot(1, 0), Some("x"));
        assert_eq!(aligned.slot(1, 1), None);
        assert_eq!(aligned.slot(2, 0), None);
        assert_eq!(aligned.len_of(0), 3);
    }
}
