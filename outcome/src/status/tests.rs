//! Unit tests for the status table and its configuration loaders.

use figment::{Figment, Jail, providers::Serialized};
use rstest::rstest;

use super::{DEFAULT_FALLBACK_STATUS, StatusMap, StatusMapConfig, StatusMapError};
use crate::{Error, ErrorCategory};

#[rstest]
#[case(ErrorCategory::Unexpected, 500)]
#[case(ErrorCategory::Failure, 400)]
#[case(ErrorCategory::Validation, 400)]
#[case(ErrorCategory::NotFound, 404)]
#[case(ErrorCategory::Conflict, 409)]
#[case(ErrorCategory::Unauthorized, 401)]
#[case(ErrorCategory::Forbidden, 403)]
#[case(ErrorCategory::Invalid, 422)]
#[case(ErrorCategory::Custom(42), 500)]
fn default_table_resolves_conventional_statuses(
    #[case] category: ErrorCategory,
    #[case] expected: u16,
) {
    assert_eq!(StatusMap::default().resolve(category), expected);
}

#[test]
fn empty_table_falls_back_for_everything() {
    let statuses = StatusMap::empty();
    assert!(statuses.is_empty());
    assert_eq!(statuses.resolve(ErrorCategory::NotFound), DEFAULT_FALLBACK_STATUS);
}

#[test]
fn tables_are_independent_values() {
    let shared = StatusMap::default();
    let custom = shared.clone().with(ErrorCategory::NotFound, 410).with_fallback(503);
    assert_eq!(shared.resolve(ErrorCategory::NotFound), 404);
    assert_eq!(custom.resolve(ErrorCategory::NotFound), 410);
    assert_eq!(custom.resolve(ErrorCategory::Custom(99)), 503);
}

#[test]
fn custom_values_inside_the_taxonomy_resolve_as_named_categories() {
    let statuses = StatusMap::default().with_fallback(503);
    assert_eq!(statuses.resolve(ErrorCategory::Custom(7)), 422);
    assert_eq!(
        statuses.resolve(ErrorCategory::Custom(7)),
        statuses.resolve(ErrorCategory::Invalid)
    );
}

#[test]
fn edits_report_previous_entries() {
    let mut statuses = StatusMap::default();
    assert_eq!(statuses.insert(ErrorCategory::Conflict, 412), Some(409));
    assert_eq!(statuses.remove(ErrorCategory::Forbidden), Some(403));
    assert!(!statuses.contains(ErrorCategory::Forbidden));
    assert_eq!(statuses.resolve(ErrorCategory::Forbidden), 500);

    statuses.clear();
    assert_eq!(statuses.len(), 0);
    assert_eq!(statuses.fallback(), DEFAULT_FALLBACK_STATUS);
}

#[test]
fn extend_adds_custom_categories() {
    let mut statuses = StatusMap::empty();
    statuses.extend([(ErrorCategory::Custom(42), 418), (ErrorCategory::NotFound, 404)]);
    let entries: Vec<_> = statuses.iter().collect();
    assert_eq!(
        entries,
        [(ErrorCategory::NotFound, 404), (ErrorCategory::Custom(42), 418)]
    );
}

#[rstest]
#[case(Vec::new(), 500)]
#[case(vec![Error::not_found("Member.NotFound", "missing")], 404)]
#[case(
    vec![
        Error::validation("Email.Empty", "email is required"),
        Error::conflict("Member.EmailInUse", "taken"),
    ],
    400
)]
fn first_error_decides_the_status(#[case] errors: Vec<Error>, #[case] expected: u16) {
    assert_eq!(StatusMap::default().resolve_errors(&errors), expected);
}

#[test]
fn load_without_statuses_keeps_defaults() {
    let config = StatusMapConfig {
        fallback: Some(503),
        statuses: None,
    };
    let statuses = StatusMap::load(&Figment::from(Serialized::defaults(config)))
        .expect("configuration should load");
    assert_eq!(statuses, StatusMap::default().with_fallback(503));
}

#[cfg(feature = "toml")]
#[test]
fn toml_statuses_replace_defaults() {
    let statuses = StatusMap::from_toml_str(
        r#"
fallback = 599

[statuses]
not_found = 410
Conflict = 409
42 = 418
"#,
    )
    .expect("toml should load");
    assert_eq!(statuses.len(), 3);
    assert_eq!(statuses.resolve(ErrorCategory::NotFound), 410);
    assert_eq!(statuses.resolve(ErrorCategory::Conflict), 409);
    assert_eq!(statuses.resolve(ErrorCategory::Custom(42)), 418);
    assert_eq!(statuses.resolve(ErrorCategory::Unauthorized), 599);
}

#[cfg(feature = "toml")]
#[test]
fn toml_rejects_unknown_category_keys() {
    let err = StatusMap::from_toml_str("[statuses]\nteapot = 418\n")
        .expect_err("unknown category keys must be rejected");
    assert!(matches!(err, StatusMapError::Category(ref parse) if parse.input == "teapot"));
}

#[cfg(feature = "json")]
#[test]
fn json_documents_load() {
    let statuses = StatusMap::from_json_str(r#"{"statuses": {"3": 404, "invalid": 400}}"#)
        .expect("json should load");
    assert_eq!(statuses.resolve(ErrorCategory::NotFound), 404);
    assert_eq!(statuses.resolve(ErrorCategory::Invalid), 400);
    assert_eq!(statuses.fallback(), DEFAULT_FALLBACK_STATUS);
}

#[cfg(feature = "json")]
#[test]
fn malformed_statuses_are_extraction_errors() {
    let err = StatusMap::from_json_str(r#"{"fallback": "soon"}"#)
        .expect_err("non-numeric fallback must be rejected");
    assert!(matches!(err, StatusMapError::Extract(_)));
}

#[test]
fn environment_overrides_entries_and_fallback() {
    Jail::expect_with(|jail| {
        jail.set_env("OUTCOME_FALLBACK", "503");
        jail.set_env("OUTCOME_STATUSES__NOT_FOUND", "410");
        let statuses = StatusMap::from_env("OUTCOME_").map_err(|e| e.to_string())?;
        assert_eq!(statuses.fallback(), 503);
        assert_eq!(statuses.resolve(ErrorCategory::NotFound), 410);
        assert_eq!(statuses.resolve(ErrorCategory::Conflict), 503);
        Ok(())
    });
}

#[test]
fn environment_without_overrides_uses_defaults() {
    Jail::expect_with(|_| {
        let statuses = StatusMap::from_env("OUTCOME_").map_err(|e| e.to_string())?;
        assert_eq!(statuses, StatusMap::default());
        Ok(())
    });
}
