use fmp_rs::fields::resolve_fields_with;
use fmp_rs::{FieldList, FmpError, KeyPolicy, resolve_fields};

use crate::common;

#[test]
fn explicit_list_is_returned_verbatim() {
    let explicit = common::fields(&["volume", "missing", "date"]);
    let fields = resolve_fields(&common::historical_prices(), Some(&explicit));
    assert_eq!(fields, explicit);

    let union = resolve_fields_with(&common::holders(), Some(&explicit), KeyPolicy::Union);
    assert_eq!(union, explicit);
}

#[test]
fn explicit_list_wins_even_for_empty_payloads() {
    let explicit = common::fields(&["a", "b"]);
    assert_eq!(resolve_fields(&common::empty(), Some(&explicit)), explicit);
}

#[test]
fn duplicate_names_are_rejected() {
    let err = FieldList::new(["a", "b", "a"]).unwrap_err();
    assert!(matches!(err, FmpError::InvalidArgument(ref msg) if msg.contains("`a`")), "{err}");
}

#[test]
fn field_list_deserializes_and_rejects_duplicates() {
    let ok: FieldList = serde_json::from_str(r#"["symbol","price"]"#).unwrap();
    assert_eq!(ok.as_slice(), ["symbol", "price"]);

    let dup = serde_json::from_str::<FieldList>(r#"["symbol","symbol"]"#);
    assert!(dup.is_err());
}
