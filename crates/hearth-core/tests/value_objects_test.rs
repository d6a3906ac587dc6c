//! Value-object macro behaviour: normalisation, bounds, closed sets and JSON input

use assert_matches::assert_matches;
use hearth_core::{bounded_string, closed_set, InvalidValue, InvalidValueKind};
use proptest::prelude::*;
use serde_json::json;

bounded_string!(
    /// Five to twenty characters
    ShortName,
    "short_name",
    5,
    20
);

closed_set!(
    /// Door colours
    Colour, "colour" {
        Red => "Red",
        Green => "Green",
    }
);

#[test]
fn bounded_string_trims_and_round_trips() {
    let name = ShortName::try_new("   Maple Court  ").unwrap();
    assert_eq!(name.value_of(), "Maple Court");
    assert_eq!(name.to_string(), "Maple Court");
}

#[test]
fn bounded_string_reports_bound_that_failed() {
    assert_matches!(
        ShortName::try_new("abcd"),
        Err(InvalidValue { kind: InvalidValueKind::TooShort, .. })
    );
    assert_matches!(
        ShortName::try_new("a".repeat(21)),
        Err(InvalidValue { kind: InvalidValueKind::TooLong, .. })
    );
}

#[test]
fn whitespace_does_not_count_towards_length() {
    assert_matches!(
        ShortName::try_new("  ab  "),
        Err(InvalidValue { kind: InvalidValueKind::TooShort, .. })
    );
}

#[test]
fn json_input_must_be_a_string() {
    assert_matches!(
        ShortName::from_json(&json!(null)),
        Err(InvalidValue { kind: InvalidValueKind::WrongType, .. })
    );
    assert_matches!(
        ShortName::from_json(&json!(12345)),
        Err(InvalidValue { kind: InvalidValueKind::WrongType, .. })
    );
    assert_eq!(
        ShortName::from_json(&json!("Elm Street")).unwrap().value_of(),
        "Elm Street"
    );
}

#[test]
fn closed_set_rejects_unknown_codes() {
    assert_eq!(Colour::try_new(" Red ").unwrap(), Colour::Red);
    assert_matches!(
        Colour::try_new("red"),
        Err(InvalidValue { kind: InvalidValueKind::NotInSet, .. })
    );
    assert_matches!(
        Colour::from_json(&json!(true)),
        Err(InvalidValue { kind: InvalidValueKind::WrongType, .. })
    );
}

#[test]
fn deserialization_revalidates() {
    let parsed: Result<ShortName, _> = serde_json::from_str("\"abc\"");
    assert!(parsed.is_err());
    let colour: Colour = serde_json::from_str("\"Green\"").unwrap();
    assert_eq!(colour, Colour::Green);
    assert_eq!(serde_json::to_string(&colour).unwrap(), "\"Green\"");
}

proptest! {
    #[test]
    fn any_in_bounds_string_is_accepted(raw in "[a-z]{5,20}") {
        let name = ShortName::try_new(&raw).unwrap();
        prop_assert_eq!(name.value_of(), raw.as_str());
    }

    #[test]
    fn any_overlong_string_is_too_long(raw in "[a-z]{21,60}") {
        let err = ShortName::try_new(&raw).unwrap_err();
        prop_assert_eq!(err.kind, InvalidValueKind::TooLong);
    }
}
