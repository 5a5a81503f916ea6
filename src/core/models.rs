use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::core::FmpError;

/* ----- RECORDS & PAYLOADS ----- */

/// One decoded record: field name to scalar value.
///
/// Key order follows the JSON text the record was decoded from.
pub type Record = serde_json::Map<String, Value>;

/// A decoded response body, either a lone record or a sequence of records.
///
/// The shape is resolved once, when the payload enters the pipeline; every
/// stage after that works on [`Payload::records`] and never re-inspects it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Payload {
    /// A list of entries (historical rows, holders, ...).
    Sequence(Vec<Record>),
    /// A single object such as a market-status response.
    Single(Record),
}

impl Payload {
    /// Resolves a decoded JSON value into a payload.
    ///
    /// # Errors
    ///
    /// Returns [`FmpError::Data`] if the value is not an object or an array whose
    /// elements are all objects.
    pub fn from_value(value: Value) -> Result<Self, FmpError> {
        match value {
            Value::Object(record) => Ok(Self::Single(record)),
            Value::Array(items) => items
                .into_iter()
                .enumerate()
                .map(|(idx, item)| match item {
                    Value::Object(record) => Ok(record),
                    other => Err(FmpError::Data(format!(
                        "element {idx} is {}, expected an object",
                        json_type_name(&other)
                    ))),
                })
                .collect::<Result<Vec<_>, _>>()
                .map(Self::Sequence),
            other => Err(FmpError::Data(format!(
                "payload is {}, expected an object or an array of objects",
                json_type_name(&other)
            ))),
        }
    }

    /// Decodes JSON text and resolves it into a payload.
    ///
    /// # Errors
    ///
    /// Returns [`FmpError::Json`] for malformed text and [`FmpError::Data`] for
    /// well-formed JSON of the wrong shape.
    pub fn from_json_str(text: &str) -> Result<Self, FmpError> {
        let value: Value = serde_json::from_str(text)?;
        Self::from_value(value)
    }

    /// The records of this payload; a lone record is a one-element slice.
    #[must_use]
    pub fn records(&self) -> &[Record] {
        match self {
            Self::Sequence(records) => records.as_slice(),
            Self::Single(record) => std::slice::from_ref(record),
        }
    }

    #[must_use]
    pub fn into_records(self) -> Vec<Record> {
        match self {
            Self::Sequence(records) => records,
            Self::Single(record) => vec![record],
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records().is_empty()
    }

    /// Converts back into a plain JSON value of the original shape.
    #[must_use]
    pub fn into_value(self) -> Value {
        match self {
            Self::Sequence(records) => {
                Value::Array(records.into_iter().map(Value::Object).collect())
            }
            Self::Single(record) => Value::Object(record),
        }
    }
}

impl From<Vec<Record>> for Payload {
    fn from(records: Vec<Record>) -> Self {
        Self::Sequence(records)
    }
}

impl From<Record> for Payload {
    fn from(record: Record) -> Self {
        Self::Single(record)
    }
}

impl TryFrom<Value> for Payload {
    type Error = FmpError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        Self::from_value(value)
    }
}

const fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/* ----- FIELD LISTS ----- */

/// An ordered list of unique column names.
///
/// Governs both column order and projection when encoding.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<String>", into = "Vec<String>")]
pub struct FieldList(Vec<String>);

impl FieldList {
    /// Builds a field list, keeping the given order.
    ///
    /// # Errors
    ///
    /// Returns [`FmpError::InvalidArgument`] if a name appears more than once.
    pub fn new<I, S>(names: I) -> Result<Self, FmpError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut seen = HashSet::new();
        let mut out = Vec::new();
        for name in names {
            let name = name.into();
            if !seen.insert(name.clone()) {
                return Err(FmpError::InvalidArgument(format!(
                    "duplicate field name `{name}`"
                )));
            }
            out.push(name);
        }
        Ok(Self(out))
    }

    /// Caller guarantees `names` holds no duplicates.
    pub(crate) const fn from_unique(names: Vec<String>) -> Self {
        Self(names)
    }

    #[must_use]
    pub const fn empty() -> Self {
        Self(Vec::new())
    }

    #[must_use]
    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.0.iter()
    }

    #[must_use]
    pub fn into_vec(self) -> Vec<String> {
        self.0
    }
}

impl TryFrom<Vec<String>> for FieldList {
    type Error = FmpError;

    fn try_from(names: Vec<String>) -> Result<Self, Self::Error> {
        Self::new(names)
    }
}

impl From<FieldList> for Vec<String> {
    fn from(fields: FieldList) -> Self {
        fields.0
    }
}

impl<'a> IntoIterator for &'a FieldList {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/* ----- PRECISION ----- */

/// Maximum number of fractional digits kept for numeric values.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "Option<u32>", into = "Option<u32>")]
pub enum Precision {
    /// Leave numbers untouched.
    #[default]
    Unlimited,
    /// Keep at most this many fractional digits.
    Digits(u32),
}

impl Precision {
    /// The digit limit, or `None` when unlimited.
    #[must_use]
    pub const fn limit(self) -> Option<u32> {
        match self {
            Self::Unlimited => None,
            Self::Digits(d) => Some(d),
        }
    }
}

impl From<Option<u32>> for Precision {
    fn from(value: Option<u32>) -> Self {
        value.map_or(Self::Unlimited, Self::Digits)
    }
}

impl From<Precision> for Option<u32> {
    fn from(value: Precision) -> Self {
        value.limit()
    }
}

impl TryFrom<i64> for Precision {
    type Error = FmpError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        u32::try_from(value).map(Self::Digits).map_err(|_| {
            FmpError::InvalidArgument(format!(
                "precision must be between 0 and {}, got {value}",
                u32::MAX
            ))
        })
    }
}

/// Accepts a non-negative digit count, or `none` / `unlimited` / `max`
/// (any case). Blank input is rejected rather than read as unlimited.
impl FromStr for Precision {
    type Err = FmpError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(FmpError::InvalidArgument("precision is blank".into()));
        }
        if s.eq_ignore_ascii_case("none")
            || s.eq_ignore_ascii_case("unlimited")
            || s.eq_ignore_ascii_case("max")
        {
            return Ok(Self::Unlimited);
        }
        let n: i64 = s
            .parse()
            .map_err(|_| FmpError::InvalidArgument(format!("invalid precision `{s}`")))?;
        Self::try_from(n)
    }
}

impl fmt::Display for Precision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unlimited => f.write_str("unlimited"),
            Self::Digits(d) => write!(f, "{d}"),
        }
    }
}

/* ----- VALUE CLASSIFICATION ----- */

/// The kind of a single cell, decided once before any stage acts on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    Null,
    Boolean,
    Integer,
    Float,
    Text,
    /// A nested array or object.
    Composite,
}

impl ValueKind {
    #[must_use]
    pub fn of(value: &Value) -> Self {
        match value {
            Value::Null => Self::Null,
            Value::Bool(_) => Self::Boolean,
            Value::Number(n) if n.is_f64() => Self::Float,
            Value::Number(_) => Self::Integer,
            Value::String(_) => Self::Text,
            Value::Array(_) | Value::Object(_) => Self::Composite,
        }
    }

    #[must_use]
    pub const fn is_numeric(self) -> bool {
        matches!(self, Self::Integer | Self::Float)
    }
}
