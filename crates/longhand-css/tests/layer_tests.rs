//! Integration tests for value tokens, layer splitting, and layer alignment.

use longhand_css::{
    ShorthandError, ValueToken, align_layers, collapse, expand, split_layers, tokenize_value,
};

#[test]
fn test_value_tokens_by_kind() {
    let tokens = tokenize_value("center 10px 50% 2 'a b' #fff / linear-gradient(red, blue)").unwrap();
    assert_eq!(tokens.len(), 8);
    assert_eq!(tokens[0], ValueToken::Identifier("center".into()));
    match &tokens[1] {
        ValueToken::Dimension { value, unit, text } => {
            assert!((value - 10.0).abs() < f64::EPSILON);
            assert_eq!(unit, "px");
            assert_eq!(text, "10px");
        }
        _ => panic!("Expected Dimension token"),
    }
    assert!(matches!(&tokens[2], ValueToken::Percentage { value, .. } if (value - 50.0).abs() < f64::EPSILON));
    assert!(matches!(&tokens[3], ValueToken::Number { value, .. } if (value - 2.0).abs() < f64::EPSILON));
    assert_eq!(tokens[4], ValueToken::StringLiteral("a b".into()));
    assert_eq!(tokens[5], ValueToken::Hash("fff".into()));
    assert_eq!(tokens[6], ValueToken::Operator('/'));
    match &tokens[7] {
        ValueToken::FunctionCall { name, args } => {
            assert_eq!(name, "linear-gradient");
            assert_eq!(args, "red, blue");
        }
        _ => panic!("Expected FunctionCall token"),
    }
}

#[test]
fn test_numbers_are_written_back_as_authored() {
    let tokens = tokenize_value("1e999px 0.1234567890123456789px +2 50.0%").unwrap();
    let written: Vec<String> = tokens.iter().map(ToString::to_string).collect();
    assert_eq!(written, ["1e999px", "0.1234567890123456789px", "+2", "50.0%"]);

    let margin = expand("margin", "0.1234567890123456789px").unwrap();
    assert!(margin.values().all(|value| value == "0.1234567890123456789px"));
}

#[test]
fn test_huge_position_round_trips() {
    let expanded = expand("background", "1e999px 0").unwrap();
    assert_eq!(expanded["background-position"], "1e999px 0");
    assert_eq!(collapse("background", &expanded).unwrap(), "1e999px 0");
}

#[test]
fn test_escaped_identifier_stays_an_identifier() {
    let tokens = tokenize_value("\\31 0px").unwrap();
    assert_eq!(tokens, [ValueToken::Identifier("10px".into())]);
    assert_eq!(tokens[0].to_string(), "\\31 0px");

    let expanded = expand("transition", "\\31 0px 1s").unwrap();
    assert_eq!(expanded["transition-property"], "\\31 0px");
    let collapsed = collapse("transition", &expanded).unwrap();
    assert_eq!(collapsed, "\\31 0px 1s");
    assert_eq!(expand("transition", &collapsed).unwrap(), expanded);
}

#[test]
fn test_identifier_escapes() {
    let written = |source: &str| tokenize_value(source).unwrap()[0].to_string();
    assert_eq!(written("-\\31 a"), "-\\31 a");
    assert_eq!(written("a\\.b"), "a\\.b");
    assert_eq!(written("\\-"), "\\-");
    assert_eq!(written("#\\31 0"), "#10");
}

#[test]
fn test_function_arguments_stay_opaque() {
    let tokens = tokenize_value("cubic-bezier(0.1, 0.7, calc(1 - 0.5), 0.1)").unwrap();
    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens[0].to_string(), "cubic-bezier(0.1, 0.7, calc(1 - 0.5), 0.1)");
}

#[test]
fn test_url_becomes_a_function_call() {
    let tokens = tokenize_value("url(a.png)").unwrap();
    assert_eq!(
        tokens[0],
        ValueToken::FunctionCall {
            name: "url".into(),
            args: "a.png".into()
        }
    );
}

#[test]
fn test_unbalanced_function_is_rejected() {
    assert_eq!(tokenize_value("calc(1px + 2px"), Err(ShorthandError::UnbalancedValue));
    assert_eq!(tokenize_value("url(a.png"), Err(ShorthandError::UnbalancedValue));
}

#[test]
fn test_blocks_are_rejected() {
    assert!(tokenize_value("{ color: red }").is_err());
    assert!(tokenize_value("@media").is_err());
}

#[test]
fn test_split_ignores_nested_commas() {
    let layers = split_layers("url(a.png) 0 0 / cover, linear-gradient(rgba(0, 0, 0, 0.5), red)").unwrap();
    assert_eq!(layers, vec!["url(a.png) 0 0 / cover", "linear-gradient(rgba(0, 0, 0, 0.5), red)"]);
}

#[test]
fn test_split_empty_and_blank() {
    assert!(split_layers("").unwrap().is_empty());
    assert_eq!(split_layers("a,,b"), Err(ShorthandError::EmptyLayer { index: 1 }));
}

#[test]
fn test_split_trims_each_layer() {
    assert_eq!(split_layers("  a  ,   b c ").unwrap(), vec!["a", "b c"]);
}

#[test]
fn test_align_uses_the_longest_list() {
    let aligned = align_layers(&[Some("a, b, c"), Some("x"), None]).unwrap();
    assert_eq!(aligned.layer_count(), 3);
    assert_eq!(aligned.slot(0, 2), Some("c"));
    assert_eq!(aligned.slot(1, 0), Some("x"));
    assert_eq!(aligned.slot(1, 1), None);
    assert_eq!(aligned.slot(2, 0), None);
    assert_eq!(aligned.len_of(0), 3);
    assert_eq!(aligned.len_of(2), 0);
}

#[test]
fn test_align_propagates_split_errors() {
    assert_eq!(
        align_layers(&[Some("a"), Some("b,")]).map(|aligned| aligned.layer_count()),
        Err(ShorthandError::EmptyLayer { index: 1 })
    );
}
