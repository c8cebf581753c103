//! Unit tests for categories, errors and error lists.

use std::{collections::HashSet, io};

use rstest::rstest;

use super::{EmptyErrorList, Error, ErrorCategory, ErrorList, defaults};

#[rstest]
#[case(0, ErrorCategory::Unexpected)]
#[case(1, ErrorCategory::Failure)]
#[case(2, ErrorCategory::Validation)]
#[case(3, ErrorCategory::NotFound)]
#[case(4, ErrorCategory::Conflict)]
#[case(5, ErrorCategory::Unauthorized)]
#[case(6, ErrorCategory::Forbidden)]
#[case(7, ErrorCategory::Invalid)]
#[case(42, ErrorCategory::Custom(42))]
#[case(-1, ErrorCategory::Custom(-1))]
fn category_round_trips_through_integer(#[case] code: i32, #[case] expected: ErrorCategory) {
    let category = ErrorCategory::from_code(code);
    assert_eq!(category, expected);
    assert_eq!(category.code(), code);
}

#[test]
fn custom_category_aliasing_a_named_value_is_the_named_category() {
    let aliased = ErrorCategory::Custom(ErrorCategory::NOT_FOUND);
    assert_eq!(aliased, ErrorCategory::NotFound);
    assert!(!aliased.is_custom());
    assert_eq!(aliased.to_string(), "NotFound");

    let mut seen = HashSet::new();
    seen.insert(ErrorCategory::NotFound);
    assert!(seen.contains(&aliased), "hash must follow the integer value");
}

#[rstest]
#[case("NotFound", ErrorCategory::NotFound)]
#[case("not_found", ErrorCategory::NotFound)]
#[case("not-found", ErrorCategory::NotFound)]
#[case("VALIDATION", ErrorCategory::Validation)]
#[case(" unauthorized ", ErrorCategory::Unauthorized)]
#[case("42", ErrorCategory::Custom(42))]
#[case("7", ErrorCategory::Invalid)]
fn parses_category_names_and_values(#[case] input: &str, #[case] expected: ErrorCategory) {
    assert_eq!(input.parse::<ErrorCategory>(), Ok(expected));
}

#[test]
fn rejects_unknown_category_names() {
    let err = "teapot"
        .parse::<ErrorCategory>()
        .expect_err("unknown names must not parse");
    assert_eq!(err.input, "teapot");
    assert_eq!(err.to_string(), "unknown error category 'teapot'");
}

#[test]
fn custom_category_displays_its_value() {
    assert_eq!(ErrorCategory::Custom(99).to_string(), "Custom(99)");
}

#[rstest]
#[case(Error::unexpected("c", "m"), ErrorCategory::Unexpected)]
#[case(Error::failure("c", "m"), ErrorCategory::Failure)]
#[case(Error::validation("c", "m"), ErrorCategory::Validation)]
#[case(Error::not_found("c", "m"), ErrorCategory::NotFound)]
#[case(Error::conflict("c", "m"), ErrorCategory::Conflict)]
#[case(Error::unauthorized("c", "m"), ErrorCategory::Unauthorized)]
#[case(Error::forbidden("c", "m"), ErrorCategory::Forbidden)]
#[case(Error::invalid("c", "m"), ErrorCategory::Invalid)]
#[case(Error::custom("c", "m", 1001), ErrorCategory::Custom(1001))]
fn factories_assign_their_category(#[case] error: Error, #[case] expected: ErrorCategory) {
    assert_eq!(error.category(), expected);
    assert_eq!(error.code(), "c");
    assert_eq!(error.message(), "m");
}

#[test]
fn errors_compare_structurally() {
    let a = Error::conflict("Member.EmailInUse", "email already in use");
    let b = Error::conflict("Member.EmailInUse", "email already in use");
    let c = Error::conflict("Member.EmailInUse", "different message");
    assert_eq!(a, b);
    assert_ne!(a, c);
    assert_ne!(a, Error::invalid("Member.EmailInUse", "email already in use"));
}

#[test]
fn error_serialises_category_as_integer() {
    let err = Error::not_found("Member.NotFound", "missing");
    let value = serde_json::to_value(&err).expect("serialise error");
    assert_eq!(
        value,
        serde_json::json!({"category": 3, "code": "Member.NotFound", "message": "missing"})
    );
    let back: Error = serde_json::from_value(value).expect("deserialise error");
    assert_eq!(back, err);
}

#[test]
fn exception_conversion_uses_unhandled_exception_code() {
    let io = io::Error::other("boom");
    let err = Error::from_exception(&io);
    assert_eq!(err, defaults::unhandled_exception("boom"));

    let coded = Error::from_exception_with_code("Repo.Io", &io);
    assert_eq!(coded.code(), "Repo.Io");
    assert_eq!(coded.category(), ErrorCategory::Unexpected);
}

#[rstest]
#[case(Box::new("static message") as Box<dyn std::any::Any + Send>, "static message")]
#[case(Box::new(String::from("owned message")) as Box<dyn std::any::Any + Send>, "owned message")]
#[case(Box::new(7_u8) as Box<dyn std::any::Any + Send>, "panic with a non-string payload")]
fn panic_payloads_become_messages(
    #[case] payload: Box<dyn std::any::Any + Send>,
    #[case] expected: &str,
) {
    let err = Error::from_panic(payload.as_ref());
    assert_eq!(err.message(), expected);
    assert_eq!(err.code(), defaults::UNHANDLED_EXCEPTION_CODE);
}

#[test]
fn error_list_rejects_empty_input() {
    assert!(ErrorList::try_new(Vec::new()).is_none());
    assert_eq!(ErrorList::try_from(Vec::new()), Err(EmptyErrorList));
}

#[test]
fn error_list_new_panics_on_empty() {
    let result = std::panic::catch_unwind(|| ErrorList::new(Vec::new()));
    assert!(result.is_err());
}

#[test]
fn error_list_preserves_order_and_reports_first() {
    let errors = vec![
        Error::validation("FirstName.Empty", "first name is required"),
        Error::validation("Email.Empty", "email is required"),
    ];
    let list = ErrorList::new(errors.clone());
    assert_eq!(list, errors);
    assert_eq!(list.first().code(), "FirstName.Empty");
    assert_eq!(list.len(), 2);
    assert!(!list.is_empty());
    let codes: Vec<_> = list.iter().map(Error::code).collect();
    assert_eq!(codes, ["FirstName.Empty", "Email.Empty"]);
}

#[test]
fn error_list_clones_share_storage() {
    let list = ErrorList::single(defaults::conflict());
    let copy = list.clone();
    assert!(list.shares_allocation(&copy));
    let rebuilt = ErrorList::new(list.to_vec());
    assert_eq!(rebuilt, list);
    assert!(!rebuilt.shares_allocation(&list));
}

#[test]
fn error_list_display_numbers_each_error() {
    let list = ErrorList::new([Error::invalid("X", "y"), Error::not_found("Z", "w")]);
    assert_eq!(
        list.to_string(),
        "1: Error (X [Invalid]): y\n2: Error (Z [NotFound]): w"
    );
}

#[test]
fn error_list_deserialisation_requires_an_error() {
    let parsed: Result<ErrorList, _> = serde_json::from_str("[]");
    assert!(parsed.is_err());

    let list = ErrorList::single(Error::invalid("X", "y"));
    let json = serde_json::to_string(&list).expect("serialise list");
    let back: ErrorList = serde_json::from_str(&json).expect("deserialise list");
    assert_eq!(back, list);
}
