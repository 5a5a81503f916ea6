use fmp_rs::precision::round_number;
use fmp_rs::{Payload, Precision, apply_precision};
use serde_json::{Number, Value, json};

use crate::common;

fn rounded(value: Value, digits: u32) -> Value {
    let payload = common::payload(json!({ "v": value }));
    let out = apply_precision(payload, Precision::Digits(digits));
    out.records()[0]["v"].clone()
}

#[test]
fn rounds_half_up_to_target_digits() {
    assert_eq!(rounded(json!(1.23456), 3), json!("1.235"));
    assert_eq!(rounded(json!(0.125), 2), json!("0.13"));
    assert_eq!(rounded(json!(2.5), 0), json!("3"));
}

#[test]
fn negative_ties_round_away_from_zero() {
    assert_eq!(rounded(json!(-1.005), 2), json!("-1.01"));
    assert_eq!(rounded(json!(-2.5), 0), json!("-3"));
}

#[test]
fn never_pads_past_native_digits() {
    assert_eq!(rounded(json!(1.2), 5), json!("1.2"));
    assert_eq!(rounded(json!(1.0), 3), json!("1.0"));
}

#[test]
fn integers_are_unchanged_text() {
    assert_eq!(rounded(json!(2), 4), json!("2"));
    assert_eq!(rounded(json!(-17), 0), json!("-17"));
    assert_eq!(rounded(json!(82488700_u64), 2), json!("82488700"));
}

#[test]
fn zero_digits_drops_the_decimal_point() {
    assert_eq!(rounded(json!(185.64), 0), json!("186"));
    assert_eq!(rounded(json!(0.4), 0), json!("0"));
}

#[test]
fn exponent_forms_are_understood() {
    assert_eq!(rounded(json!(1e-7), 10), json!("0.0000001"));
    assert_eq!(rounded(json!(1.5e-7), 7), json!("0.0000002"));
}

#[test]
fn tiny_exponent_values_become_text() {
    assert_eq!(rounded(json!(1.5e-30), 2), json!("0.00"));
    assert_eq!(rounded(json!(5e-3), 2), json!("0.01"));
    assert_eq!(rounded(json!(4.6e-3), 2), json!("0.00"));
}

#[test]
fn digits_past_decimal_scale_limit_are_kept() {
    assert_eq!(
        rounded(json!(1.2345e-25), 30),
        json!("0.00000000000000000000000012345")
    );
    assert_eq!(
        rounded(json!(-1.2345e-25), 28),
        json!("-0.0000000000000000000000001235")
    );
}

#[test]
fn out_of_range_numbers_pass_through() {
    assert_eq!(rounded(json!(1e300), 2), json!(1e300));
}

#[test]
fn kept_digits_are_min_of_native_and_target() {
    let samples = [1.5, 12.25, 0.123456, 99.999, 3.14159265];
    let tiny: [(f64, usize); 3] = [(1.5e-30, 31), (1.2345e-25, 29), (2e-9, 9)];
    for target in 0..8_u32 {
        for sample in samples {
            let native = Number::from_f64(sample).unwrap().to_string();
            let native_digits = native.split_once('.').map_or(0, |(_, frac)| frac.len());
            let expected = native_digits.min(target as usize);

            let out = round_number(&Number::from_f64(sample).unwrap(), target).unwrap();
            let got = out.split_once('.').map_or(0, |(_, frac)| frac.len());
            assert_eq!(got, expected, "{sample} at {target} digits gave {out}");
        }
    }
    for target in [0_u32, 3, 9, 29, 40] {
        for (sample, native_digits) in tiny {
            let out = round_number(&Number::from_f64(sample).unwrap(), target).unwrap();
            let got = out.split_once('.').map_or(0, |(_, frac)| frac.len());
            assert_eq!(got, native_digits.min(target as usize), "{sample} at {target} digits gave {out}");
        }
    }
}

#[test]
fn unlimited_is_identity() {
    let payload = common::historical_prices();
    assert_eq!(apply_precision(payload.clone(), Precision::Unlimited), payload);
}

#[test]
fn applying_twice_matches_applying_once() {
    for digits in [0, 1, 2, 6] {
        let once = apply_precision(common::historical_prices(), Precision::Digits(digits));
        let twice = apply_precision(once.clone(), Precision::Digits(digits));
        assert_eq!(once, twice, "digits = {digits}");
    }
}

#[test]
fn rounds_every_record_of_a_sequence() {
    let out = apply_precision(common::historical_prices(), Precision::Digits(1));
    let expected: Payload = common::payload(json!([
        {"date": "2024-01-02", "open": "187.2", "close": "185.6", "volume": "82488700"},
        {"date": "2024-01-03", "open": "184.2", "close": "184.3", "volume": "58414500"}
    ]));
    assert_eq!(out, expected);
}
