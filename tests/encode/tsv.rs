use fmp_rs::encode::to_tsv_with;
use fmp_rs::{Encoded, KeyPolicy, Mode, encode, to_tsv};
use serde_json::json;

use crate::common;

#[test]
fn explicit_fields_fix_column_order() {
    let payload = common::payload(json!([{"a": 1, "b": 2}]));
    let out = to_tsv(&payload, Some(&common::fields(&["b", "a"])));
    assert_eq!(out, "b\ta\n2\t1");
}

#[test]
fn missing_field_is_an_empty_cell() {
    let payload = common::payload(json!([{"a": 1}]));
    let out = to_tsv(&payload, Some(&common::fields(&["a", "b"])));
    assert_eq!(out, "a\tb\n1\t");
}

#[test]
fn extra_fields_are_projected_away() {
    let payload = common::payload(json!([{"a": 1, "b": 2, "c": 3}]));
    let out = to_tsv(&payload, Some(&common::fields(&["a", "c"])));
    assert_eq!(out, "a\tc\n1\t3");
}

#[test]
fn empty_payload_is_empty_text_without_header() {
    let out = to_tsv(&common::empty(), Some(&common::fields(&["a", "b"])));
    assert_eq!(out, "");
    assert_eq!(to_tsv(&common::empty(), None), "");
}

#[test]
fn implicit_fields_follow_first_record() {
    let out = to_tsv(&common::historical_prices(), None);
    assert_eq!(
        out,
        "date\topen\tclose\tvolume\n\
         2024-01-02\t187.15\t185.64\t82488700\n\
         2024-01-03\t184.22\t184.25\t58414500"
    );
}

#[test]
fn union_policy_fills_gaps_with_empty_cells() {
    let out = to_tsv_with(&common::holders(), None, KeyPolicy::Union);
    assert_eq!(
        out,
        "holder\tshares\tchange\nVanguard\t1300000000\t\nBlackRock\t1000000000\t-2.5"
    );
}

#[test]
fn single_record_is_one_row() {
    let out = to_tsv(&common::market_status(), None);
    assert_eq!(out, "exchange\tisTheStockMarketOpen\topeningHour\nNASDAQ\ttrue\t");
}

#[test]
fn no_trailing_newline() {
    let out = to_tsv(&common::historical_prices(), None);
    assert!(!out.ends_with('\n'));
    assert_eq!(out.lines().count(), 3);
}

#[test]
fn encode_dispatches_to_tsv() {
    let payload = common::payload(json!([{"a": 1, "b": 2}]));
    let out = encode(&payload, Some(&common::fields(&["b", "a"])), Mode::Tsv);
    assert_eq!(out, Encoded::Text("b\ta\n2\t1".to_string()));
    assert_eq!(out.as_text(), Some("b\ta\n2\t1"));
    assert!(out.as_table().is_none());
}
