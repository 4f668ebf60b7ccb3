//! CSS shorthand expansion and collapse.
//!
//! # Scope
//!
//! This crate implements:
//! - **CSS Tokenizer** ([§ 4 Tokenization](https://www.w3.org/TR/css-syntax-3/#tokenization))
//!   - All token types, with the byte span each token was read from
//!   - Comment handling
//!   - Escape sequences
//!
//! - **Value tokens** ([CSS Values Level 4](https://www.w3.org/TR/css-values-4/))
//!   - Identifiers, dimensions, percentages, numbers, strings, hashes
//!   - Function calls carried with opaque argument text
//!   - Keyword tables and `<color>` recognition
//!
//! - **Layers** ([CSS Backgrounds § 2.2](https://www.w3.org/TR/css-backgrounds-3/#layering))
//!   - Splitting at top-level commas
//!   - Lining up several longhand lists by layer index
//!
//! - **Shorthand families**
//!   - Multi-layer: `background`, `mask`, `animation`, `transition`
//!   - Single value: `flex`, `border`, `border-top|right|bottom|left`,
//!     `border-width`, `border-style`, `border-color`, `border-radius`,
//!     `margin`, `padding`
//!
//! Each family expands a value into every longhand (filling initial values)
//! and collapses a complete longhand set back into the shortest value that
//! reads back the same.
//!
//! # Example
//!
//! ```
//! let longhands = longhand_css::expand("background", "url(a.png) no-repeat, url(b.png)").unwrap();
//! assert_eq!(longhands["background-repeat"], "no-repeat, repeat");
//!
//! let shorthand = longhand_css::collapse("background", &longhands).unwrap();
//! assert_eq!(shorthand, "url(a.png) no-repeat, url(b.png)");
//! ```
//!
//! # Not Yet Implemented
//!
//! - Fixed-arity shorthands without layering (`flex-flow`, `gap`,
//!   `place-items`, `grid-row`, `columns`)
//! - Three- and four-value `<position>` syntax

/// Print a classifier or collapse trace line when the `classify-trace`
/// feature is enabled.
macro_rules! classify_trace {
    ($($arg:tt)*) => {
        if cfg!(feature = "classify-trace") {
            eprintln!($($arg)*);
        }
    };
}

/// Token cursor used by the classifiers.
pub mod cursor;
/// Errors returned by every entry point.
pub mod error;
/// Comma-separated layer splitting and alignment.
pub mod layers;
/// Name-based dispatch, `compact`, and `!important` handling.
pub mod registry;
/// Shorthand families.
pub mod shorthand;
/// CSS tokenizer per [§ 4 Tokenization](https://www.w3.org/TR/css-syntax-3/#tokenization).
pub mod tokenizer;
/// Value tokens, keyword tables, and colors.
pub mod values;

pub use error::{ErrorKind, Result, ShorthandError};
pub use layers::{AlignedLayers, align_layers, split_layers};
pub use registry::{ShorthandKind, collapse, compact, expand, meta, split_important};
pub use shorthand::{Longhands, PropertyDefaults, ShorthandMeta, is_default_value};
pub use tokenizer::{CSSToken, CSSTokenizer};
pub use values::{ValueToken, tokenize_value};
