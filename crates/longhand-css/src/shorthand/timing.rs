//! Pieces shared by `animation` and `transition`: easing functions and the
//! duration-then-delay time pair.

use crate::error::{Result, ShorthandError};
use crate::values::{ValueToken, keywords};

use super::is_default_value;

/// [CSS Easing § 2](https://www.w3.org/TR/css-easing-1/#easing-functions)
///
/// An `<easing-function>` keyword or function.
pub(crate) fn is_easing(token: &ValueToken) -> bool {
    token.is_ident_in(keywords::TIMING_KEYWORDS) || token.is_function_in(keywords::EASING_FUNCTIONS)
}

/// A `<time>`, or a function that is not an easing function and so may
/// compute to one (`var()`, `calc()`, `env()`).
pub(crate) fn is_time_bearing(token: &ValueToken) -> bool {
    token.is_time() || (token.function_name().is_some() && !is_easing(token))
}

/// [CSS Animations § 3.10](https://www.w3.org/TR/css-animations-1/#animation)
///
/// "Note that order is important within each animation definition: the first
/// value in each `<single-animation>` that can be parsed as a `<time>` is
/// assigned to the animation-duration, and the second value in each
/// `<single-animation>` that can be parsed as a `<time>` is assigned to
/// animation-delay."
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct TimePair {
    pub duration: Option<String>,
    pub delay: Option<String>,
}

impl TimePair {
    /// Assign the next time value.
    pub fn push(&mut self, token: &ValueToken) -> Result<()> {
        if self.duration.is_none() {
            self.duration = Some(token.to_string());
        } else if self.delay.is_none() {
            self.delay = Some(token.to_string());
        } else {
            return Err(ShorthandError::TooManyValues { slot: "time", max: 2 });
        }
        Ok(())
    }
}

/// The time tokens to write for one layer. Time values are positional, so a
/// non-initial delay forces the duration out even when it is initial.
pub(crate) fn collapse_times(
    duration: &str,
    delay: &str,
    duration_default: &str,
    delay_default: &str,
) -> Vec<String> {
    if !is_default_value(delay, delay_default) {
        vec![duration.to_string(), delay.to_string()]
    } else if !is_default_value(duration, duration_default) {
        vec![duration.to_string()]
    } else {
        Vec::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::values::tokenize_value;

    #[test]
    fn easing_functions_are_not_time_bearing() {
        let tokens = tokenize_value("steps(4, end) var(--t) 2s ease-out").unwrap();
        assert!(is_easing(&tokens[0]));
        assert!(!is_time_bearing(&tokens[0]));
        assert!(is_time_bearing(&tokens[1]));
        assert!(is_time_bearing(&tokens[2]));
        assert!(is_easing(&tokens[3]));
    }

    #[test]
    fn third_time_value_overflows() {
        let tokens = tokenize_value("1s 2s 3s").unwrap();
        let mut pair = TimePair::default();
        pair.push(&tokens[0]).unwrap();
        pair.push(&tokens[1]).unwrap();
        assert_eq!(
            pair.push(&tokens[2]),
            Err(ShorthandError::TooManyValues { slot: "time", max: 2 })
        );
        assert_eq!(pair.duration.as_deref(), Some("1s"));
        assert_eq!(pair.delay.as_deref(), Some("2s"));
    }

    #[test]
    fn delay_forces_duration() {
        assert_eq!(collapse_times("0s", "1s", "0s", "0s"), vec!["0s", "1s"]);
        assert_eq!(collapse_times("2s", "0ms", "0s", "0s"), vec!["2s"]);
        assert!(collapse_times("0s", "0s", "0s", "0s").is_empty());
    }
}
