//! Errors returned by shorthand expansion and collapse.
//!
//! Any error anywhere in a layer invalidates the whole call: there is no
//! partial result. Callers keep the original declaration(s) untouched.

use strum_macros::{Display, IntoStaticStr};
use thiserror::Error;

/// Why an `expand` or `collapse` call was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShorthandError {
    /// A token that no slot of the family accepts.
    #[error("unrecognized token '{token}'")]
    InvalidToken {
        /// Source text of the offending token.
        token: String,
    },

    /// A second value for a slot that takes one.
    #[error("'{slot}' given more than once")]
    DuplicateSlot {
        /// The slot that was already filled.
        slot: &'static str,
    },

    /// More values than a slot or value list can hold.
    #[error("too many values for '{slot}' (at most {max})")]
    TooManyValues {
        /// The overflowing slot.
        slot: &'static str,
        /// How many values the slot accepts.
        max: usize,
    },

    /// Tokens appear in an order the grammar does not allow, or the output
    /// would be read back differently than it was written.
    #[error("ambiguous or misordered value: {reason}")]
    AmbiguousOrder {
        /// What was out of place.
        reason: &'static str,
    },

    /// A longhand the family needs is absent from the collapse input.
    #[error("missing longhand '{missing}'")]
    IncompleteLonghandSet {
        /// Name of the first missing longhand.
        missing: String,
    },

    /// The value is empty after trimming.
    #[error("empty value")]
    EmptyValue,

    /// A comma-separated segment is empty (`a, , b` or a trailing comma).
    #[error("layer {index} is empty")]
    EmptyLayer {
        /// Zero-based index of the empty layer.
        index: usize,
    },

    /// A function, parenthesis, bracket, or string is not closed.
    #[error("unbalanced parentheses or brackets")]
    UnbalancedValue,

    /// The longhands are well formed but cannot be written as the shorthand.
    #[error("cannot collapse: {reason}")]
    Uncollapsible {
        /// Why the shorthand form would lose information.
        reason: &'static str,
    },

    /// No family is registered under this shorthand name.
    #[error("unknown shorthand '{name}'")]
    UnknownShorthand {
        /// The requested name.
        name: String,
    },
}

/// The error taxonomy without payloads, for callers that only branch on kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, IntoStaticStr)]
#[strum(serialize_all = "kebab-case")]
pub enum ErrorKind {
    /// See [`ShorthandError::InvalidToken`].
    InvalidToken,
    /// See [`ShorthandError::DuplicateSlot`].
    DuplicateSlot,
    /// See [`ShorthandError::TooManyValues`].
    TooManyValues,
    /// See [`ShorthandError::AmbiguousOrder`].
    AmbiguousOrder,
    /// See [`ShorthandError::IncompleteLonghandSet`].
    IncompleteLonghandSet,
    /// Empty value, empty layer, or unbalanced nesting.
    Malformed,
    /// See [`ShorthandError::Uncollapsible`].
    Uncollapsible,
    /// See [`ShorthandError::UnknownShorthand`].
    UnknownShorthand,
}

impl ShorthandError {
    /// Shorthand for building an [`ShorthandError::InvalidToken`].
    pub fn invalid(token: impl Into<String>) -> Self {
        Self::InvalidToken {
            token: token.into(),
        }
    }

    /// The payload-free kind of this error.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidToken { .. } => ErrorKind::InvalidToken,
            Self::DuplicateSlot { .. } => ErrorKind::DuplicateSlot,
            Self::TooManyValues { .. } => ErrorKind::TooManyValues,
            Self::AmbiguousOrder { .. } => ErrorKind::AmbiguousOrder,
            Self::IncompleteLonghandSet { .. } => ErrorKind::IncompleteLonghandSet,
            Self::EmptyValue | Self::EmptyLayer { .. } | Self::UnbalancedValue => {
                ErrorKind::Malformed
            }
            Self::Uncollapsible { .. } => ErrorKind::Uncollapsible,
            Self::UnknownShorthand { .. } => ErrorKind::UnknownShorthand,
        }
    }
}

/// Result alias used throughout the engine.
pub type Result<T> = core::result::Result<T, ShorthandError>;
