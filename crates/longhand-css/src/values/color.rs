//! Recognizing `<color>` tokens.
//!
//! [CSS Color Level 4](https://www.w3.org/TR/css-color-4/)
//!
//! The engine never needs the RGBA value of a color, only whether a token
//! can occupy a color slot, so this module classifies and does not convert.

use super::keywords::contains;
use super::token::ValueToken;

/// [§ 4 Color syntax](https://www.w3.org/TR/css-color-4/#color-syntax) color functions.
const COLOR_FUNCTIONS: &[&str] = &[
    "rgb",
    "rgba",
    "hsl",
    "hsla",
    "hwb",
    "lab",
    "lch",
    "oklab",
    "oklch",
    "color",
    "color-mix",
    "light-dark",
    "device-cmyk",
];

/// Color keywords that are not in the named color table.
const SPECIAL_COLOR_KEYWORDS: &[&str] = &["transparent", "currentcolor"];

/// [§ 6.1 Named Colors](https://www.w3.org/TR/css-color-4/#named-colors), sorted.
const NAMED_COLORS: &[&str] = &[
    "aliceblue", "antiquewhite", "aqua", "aquamarine", "azure", "beige", "bisque", "black",
    "blanchedalmond", "blue", "blueviolet", "brown", "burlywood", "cadetblue", "chartreuse",
    "chocolate", "coral", "cornflowerblue", "cornsilk", "crimson", "cyan", "darkblue", "darkcyan",
    "darkgoldenrod", "darkgray", "darkgreen", "darkgrey", "darkkhaki", "darkmagenta",
    "darkolivegreen", "darkorange", "darkorchid", "darkred", "darksalmon", "darkseagreen",
    "darkslateblue", "darkslategray", "darkslategrey", "darkturquoise", "darkviolet", "deeppink",
    "deepskyblue", "dimgray", "dimgrey", "dodgerblue", "firebrick", "floralwhite", "forestgreen",
    "fuchsia", "gainsboro", "ghostwhite", "gold", "goldenrod", "gray", "green", "greenyellow",
    "grey", "honeydew", "hotpink", "indianred", "indigo", "ivory", "khaki", "lavender",
    "lavenderblush", "lawngreen", "lemonchiffon", "lightblue", "lightcoral", "lightcyan",
    "lightgoldenrodyellow", "lightgray", "lightgreen", "lightgrey", "lightpink", "lightsalmon",
    "lightseagreen", "lightskyblue", "lightslategray", "lightslategrey", "lightsteelblue",
    "lightyellow", "lime", "limegreen", "linen", "magenta", "maroon", "mediumaquamarine",
    "mediumblue", "mediumorchid", "mediumpurple", "mediumseagreen", "mediumslateblue",
    "mediumspringgreen", "mediumturquoise", "mediumvioletred", "midnightblue", "mintcream",
    "mistyrose", "moccasin", "navajowhite", "navy", "oldlace", "olive", "olivedrab", "orange",
    "orangered", "orchid", "palegoldenrod", "palegreen", "paleturquoise", "palevioletred",
    "papayawhip", "peachpuff", "peru", "pink", "plum", "powderblue", "purple", "rebeccapurple",
    "red", "rosybrown", "royalblue", "saddlebrown", "salmon", "sandybrown", "seagreen",
    "seashell", "sienna", "silver", "skyblue", "slateblue", "slategray", "slategrey", "snow",
    "springgreen", "steelblue", "tan", "teal", "thistle", "tomato", "turquoise", "violet",
    "wheat", "white", "whitesmoke", "yellow", "yellowgreen",
];

/// True if `token` is a `<color>`.
#[must_use]
pub fn is_color(token: &ValueToken) -> bool {
    match token {
        // [§ 5.2 The RGB hexadecimal notations](https://www.w3.org/TR/css-color-4/#hex-notation)
        //
        // "The syntax of a <hex-color> is a <hash-token> token whose value
        // consists of 3, 4, 6, or 8 hexadecimal digits."
        ValueToken::Hash(value) => {
            matches!(value.len(), 3 | 4 | 6 | 8) && value.chars().all(|c| c.is_ascii_hexdigit())
        }
        ValueToken::Identifier(name) => is_named_color(name),
        ValueToken::FunctionCall { name, .. } => contains(COLOR_FUNCTIONS, name),
        _ => false,
    }
}

/// True if `name` is a named color or one of the special color keywords.
#[must_use]
pub fn is_named_color(name: &str) -> bool {
    if contains(SPECIAL_COLOR_KEYWORDS, name) {
        return true;
    }
    let lower = name.to_ascii_lowercase();
    NAMED_COLORS.binary_search(&lower.as_str()).is_ok()
}
