//! Value-level tokens and the keyword knowledge the classifiers share.
//!
//! [CSS Values and Units Level 4](https://www.w3.org/TR/css-values-4/)

mod adapter;
/// `<color>` recognition per [CSS Color Level 4](https://www.w3.org/TR/css-color-4/).
pub mod color;
/// Keyword tables, grouped by property family.
pub mod keywords;
mod token;

pub use adapter::tokenize_value;
pub use color::is_color;
pub use token::{ValueToken, join_tokens};
