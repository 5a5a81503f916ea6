//! Column resolution for payloads encoded without an explicit field list.

use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::core::{FieldList, FmpError, Payload};

/// How implicit columns are derived from a payload.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KeyPolicy {
    /// Columns are the keys of the first record, in that record's order.
    #[default]
    FirstRecord,
    /// Columns are every key seen in any record, in first-seen order.
    Union,
}

impl KeyPolicy {
    pub(crate) const fn as_str(self) -> &'static str {
        match self {
            Self::FirstRecord => "first_record",
            Self::Union => "union",
        }
    }
}

impl fmt::Display for KeyPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for KeyPolicy {
    type Err = FmpError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "first_record" | "first" => Ok(Self::FirstRecord),
            "union" => Ok(Self::Union),
            other => Err(FmpError::InvalidArgument(format!("unknown key policy `{other}`"))),
        }
    }
}

/// Resolves the ordered columns for `payload` using [`KeyPolicy::FirstRecord`].
///
/// An explicit list is returned unchanged, without checking it against the
/// records. An empty payload resolves to an empty list.
#[must_use]
pub fn resolve_fields(payload: &Payload, explicit: Option<&FieldList>) -> FieldList {
    resolve_fields_with(payload, explicit, KeyPolicy::default())
}

/// Like [`resolve_fields`], with the implicit-column policy chosen by the caller.
#[must_use]
pub fn resolve_fields_with(
    payload: &Payload,
    explicit: Option<&FieldList>,
    policy: KeyPolicy,
) -> FieldList {
    if let Some(fields) = explicit {
        return fields.clone();
    }

    let records = payload.records();
    let Some(first) = records.first() else {
        return FieldList::empty();
    };

    let names = match policy {
        KeyPolicy::FirstRecord => first.keys().cloned().collect(),
        KeyPolicy::Union => {
            let mut seen = HashSet::new();
            let mut names = Vec::new();
            for key in records.iter().flat_map(serde_json::Map::keys) {
                if seen.insert(key.as_str()) {
                    names.push(key.clone());
                }
            }
            names
        }
    };

    #[cfg(feature = "tracing")]
    tracing::trace!(policy = %policy, columns = names.len(), "derived implicit field list");

    FieldList::from_unique(names)
}
