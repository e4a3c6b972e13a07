use darts501::board::Target;
use darts501::error::DartsError;
use darts501::input::{parse_aim, parse_percentage, parse_target};
use proptest::prelude::*;
use regex::Regex;
use rstest::rstest;

#[rstest]
#[case("t20", Target::triple(20).unwrap())]
#[case("d19", Target::double(19).unwrap())]
#[case("s16", Target::single(16).unwrap())]
#[case("s1", Target::single(1).unwrap())]
#[case("ob", Target::OUTER_BULL)]
#[case("db", Target::INNER_BULL)]
#[case("  T20 ", Target::triple(20).unwrap())]
#[case("DB", Target::INNER_BULL)]
fn test_parse_valid(#[case] input: &str, #[case] expected: Target) {
    assert_eq!(parse_target(input).unwrap(), expected);
}

#[rstest]
#[case("")]
#[case("t")]
#[case("t0")]
#[case("t21")]
#[case("t05")]
#[case("t+5")]
#[case("x20")]
#[case("tb")]
#[case("t25")]
#[case("s 5")]
#[case("bull")]
#[case("t200")]
fn test_parse_invalid(#[case] input: &str) {
    assert!(matches!(parse_target(input), Err(DartsError::Parse(_))));
}

#[test]
fn test_empty_aim_defaults_to_treble_twenty() {
    assert_eq!(parse_aim("").unwrap(), Target::TREBLE_TWENTY);
    assert_eq!(parse_aim("   \n").unwrap(), Target::TREBLE_TWENTY);
    assert_eq!(parse_aim("d8").unwrap(), Target::double(8).unwrap());
}

#[test]
fn test_from_str_round_trips_code() {
    for code in ["t20", "d1", "s13", "ob", "db"] {
        let target: Target = code.parse().unwrap();
        assert_eq!(target.code(), code);
    }
}

#[rstest]
#[case("", 80.0, 80.0)]
#[case("  ", 15.0, 15.0)]
#[case("1", 80.0, 1.0)]
#[case("100", 80.0, 100.0)]
#[case("42.5", 80.0, 42.5)]
fn test_parse_percentage_valid(#[case] input: &str, #[case] default: f64, #[case] expected: f64) {
    assert_eq!(parse_percentage(input, default).unwrap(), expected);
}

#[rstest]
#[case("0")]
#[case("0.5")]
#[case("100.1")]
#[case("-5")]
#[case("abc")]
#[case("NaN")]
fn test_parse_percentage_invalid(#[case] input: &str) {
    assert!(parse_percentage(input, 80.0).is_err());
}

proptest! {
    #[test]
    fn test_parser_agrees_with_grammar(input in "[sdtobx0-9]{0,4}") {
        let grammar = Regex::new(r"^(ob|db|[sdt]([1-9]|1[0-9]|20))$").unwrap();
        prop_assert_eq!(
            parse_target(&input).is_ok(),
            grammar.is_match(&input),
            "input {:?}",
            input
        );
    }
}
