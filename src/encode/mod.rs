//! Compact tabular encodings of a payload.
//!
//! Two forms are produced:
//! - TSV: a header line of field names followed by one tab-separated line per
//!   record, joined with `\n` and without a trailing newline.
//! - Tuple table: the field names as the first tuple, then one tuple of cell
//!   text per record.
//!
//! Columns always follow the resolved [`FieldList`]. Fields a record lacks
//! encode as empty cells; fields not in the list are dropped.
//!
//! The two forms disagree on empty input, and callers rely on it: an empty
//! payload is `""` as TSV but a table holding one empty tuple.

mod cell;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize, Serializer};

use crate::core::{FieldList, FmpError, Payload, Record};
use crate::fields::{KeyPolicy, resolve_fields_with};

pub use cell::cell_text;

/// Output form for [`encode`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Mode {
    #[default]
    Tsv,
    Tuple,
}

impl Mode {
    pub(crate) const fn as_str(self) -> &'static str {
        match self {
            Self::Tsv => "tsv",
            Self::Tuple => "tuple",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Mode {
    type Err = FmpError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "tsv" => Ok(Self::Tsv),
            "tuple" | "tuples" => Ok(Self::Tuple),
            other => Err(FmpError::InvalidArgument(format!("unknown encoding mode `{other}`"))),
        }
    }
}

/// A header tuple of field names followed by one tuple of cell text per record.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TupleTable {
    header: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl TupleTable {
    #[must_use]
    pub fn header(&self) -> &[String] {
        &self.header
    }

    #[must_use]
    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    /// Number of data rows, not counting the header.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// The table as a flat sequence with the header tuple first.
    #[must_use]
    pub fn to_tuples(&self) -> Vec<Vec<String>> {
        std::iter::once(&self.header)
            .chain(&self.rows)
            .cloned()
            .collect()
    }

    #[must_use]
    pub fn into_tuples(self) -> Vec<Vec<String>> {
        let mut out = Vec::with_capacity(self.rows.len() + 1);
        out.push(self.header);
        out.extend(self.rows);
        out
    }
}

impl fmt::Display for TupleTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (idx, tuple) in std::iter::once(&self.header).chain(&self.rows).enumerate() {
            if idx > 0 {
                f.write_str("\n")?;
            }
            f.write_str(&tuple.join("\t"))?;
        }
        Ok(())
    }
}

impl Serialize for TupleTable {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(std::iter::once(&self.header).chain(&self.rows))
    }
}

/// The result of running a payload through the encoder.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Encoded {
    /// TSV text.
    Text(String),
    /// Tuple-table form.
    Table(TupleTable),
    /// The payload itself, when condensing was switched off.
    Raw(Payload),
}

impl Encoded {
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text.as_str()),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_table(&self) -> Option<&TupleTable> {
        match self {
            Self::Table(table) => Some(table),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_raw(&self) -> Option<&Payload> {
        match self {
            Self::Raw(payload) => Some(payload),
            _ => None,
        }
    }
}

impl fmt::Display for Encoded {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(text) => f.write_str(text),
            Self::Table(table) => fmt::Display::fmt(table, f),
            Self::Raw(payload) => {
                let json = serde_json::to_string(payload).map_err(|_| fmt::Error)?;
                f.write_str(&json)
            }
        }
    }
}

/// Encodes `payload` in the requested `mode`.
#[must_use]
pub fn encode(payload: &Payload, fields: Option<&FieldList>, mode: Mode) -> Encoded {
    encode_with(payload, fields, mode, KeyPolicy::default())
}

/// Like [`encode`], with the implicit-column policy chosen by the caller.
#[must_use]
pub fn encode_with(
    payload: &Payload,
    fields: Option<&FieldList>,
    mode: Mode,
    policy: KeyPolicy,
) -> Encoded {
    match mode {
        Mode::Tsv => Encoded::Text(to_tsv_with(payload, fields, policy)),
        Mode::Tuple => Encoded::Table(to_tuple_table_with(payload, fields, policy)),
    }
}

/// Encodes `payload` as TSV. An empty payload yields `""` with no header.
#[must_use]
pub fn to_tsv(payload: &Payload, fields: Option<&FieldList>) -> String {
    to_tsv_with(payload, fields, KeyPolicy::default())
}

#[must_use]
pub fn to_tsv_with(payload: &Payload, fields: Option<&FieldList>, policy: KeyPolicy) -> String {
    if payload.is_empty() {
        return String::new();
    }
    let fields = resolve_fields_with(payload, fields, policy);

    let mut lines = Vec::with_capacity(payload.len() + 1);
    lines.push(fields.as_slice().join("\t"));
    lines.extend(
        payload
            .records()
            .iter()
            .map(|record| project(record, &fields).join("\t")),
    );
    lines.join("\n")
}

/// Encodes `payload` as a tuple table. An empty payload yields a table whose
/// only tuple is the empty header.
#[must_use]
pub fn to_tuple_table(payload: &Payload, fields: Option<&FieldList>) -> TupleTable {
    to_tuple_table_with(payload, fields, KeyPolicy::default())
}

#[must_use]
pub fn to_tuple_table_with(
    payload: &Payload,
    fields: Option<&FieldList>,
    policy: KeyPolicy,
) -> TupleTable {
    if payload.is_empty() {
        return TupleTable::default();
    }
    let fields = resolve_fields_with(payload, fields, policy);
    let rows = payload
        .records()
        .iter()
        .map(|record| project(record, &fields))
        .collect();
    TupleTable {
        header: fields.into_vec(),
        rows,
    }
}

/// Tuple-table compaction gated by `condensed`.
///
/// With `condensed == false` the payload is handed back untouched: no text
/// coercion, no projection.
#[must_use]
pub fn condense(payload: Payload, fields: Option<&FieldList>, condensed: bool) -> Encoded {
    condense_with(payload, fields, condensed, KeyPolicy::default())
}

/// Like [`condense`], with the implicit-column policy chosen by the caller.
#[must_use]
pub fn condense_with(
    payload: Payload,
    fields: Option<&FieldList>,
    condensed: bool,
    policy: KeyPolicy,
) -> Encoded {
    if !condensed {
        #[cfg(feature = "tracing")]
        tracing::debug!("condensing disabled, returning payload as-is");
        return Encoded::Raw(payload);
    }
    Encoded::Table(to_tuple_table_with(&payload, fields, policy))
}

fn project(record: &Record, fields: &FieldList) -> Vec<String> {
    fields.iter().map(|name| cell_text(record.get(name))).collect()
}
