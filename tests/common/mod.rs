#![allow(dead_code)]

use fmp_rs::{FieldList, Payload, Record};
use serde_json::{Value, json};

pub fn payload(value: Value) -> Payload {
    Payload::from_value(value).unwrap()
}

pub fn record(value: Value) -> Record {
    match value {
        Value::Object(map) => map,
        other => panic!("fixture is not an object: {other}"),
    }
}

pub fn fields(names: &[&str]) -> FieldList {
    FieldList::new(names.iter().copied()).unwrap()
}

pub fn empty() -> Payload {
    Payload::Sequence(Vec::new())
}

/// Two daily bars as the historical-price endpoint returns them.
pub fn historical_prices() -> Payload {
    payload(json!([
        {"date": "2024-01-02", "open": 187.15, "close": 185.64, "volume": 82488700},
        {"date": "2024-01-03", "open": 184.22, "close": 184.25, "volume": 58414500}
    ]))
}

/// Holder rows whose key sets differ.
pub fn holders() -> Payload {
    payload(json!([
        {"holder": "Vanguard", "shares": 1300000000},
        {"holder": "BlackRock", "shares": 1000000000, "change": -2.5}
    ]))
}

/// A lone status object.
pub fn market_status() -> Payload {
    payload(json!({
        "exchange": "NASDAQ",
        "isTheStockMarketOpen": true,
        "openingHour": null
    }))
}
