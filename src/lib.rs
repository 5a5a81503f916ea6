//! fmp-rs: response normalization for the FMP financial-data client.
//!
//! Endpoint wrappers hand this crate a decoded JSON body; it hands back a
//! compact rendering suited to spreadsheets and LLM prompts. Three stages
//! compose into a pipeline:
//!
//! 1. [`fields`] resolves the ordered column list.
//! 2. [`precision`] rounds numeric values to a digit limit.
//! 3. [`encode`] serializes to TSV text or a tuple table.
//!
//! ```
//! use fmp_rs::{Mode, Normalizer};
//!
//! let normalizer = Normalizer::builder()
//!     .fields(["symbol", "price"])
//!     .precision_digits(2)
//!     .mode(Mode::Tsv)
//!     .build()?;
//!
//! let out = normalizer.run_json(r#"[{"price": 189.98765, "symbol": "AAPL", "volume": 10}]"#)?;
//! assert_eq!(out.to_string(), "symbol\tprice\nAAPL\t189.99");
//! # Ok::<(), fmp_rs::FmpError>(())
//! ```
//!
//! All stages are pure functions over caller-owned data; there is no I/O and
//! no shared state.

pub mod core;
pub mod encode;
pub mod fields;
pub mod pipeline;
pub mod precision;

pub use crate::core::{FieldList, FmpError, Payload, Precision, Record, ValueKind};
pub use encode::{Encoded, Mode, TupleTable, condense, encode, to_tsv, to_tuple_table};
pub use fields::{KeyPolicy, resolve_fields};
pub use pipeline::{NormalizeOptions, Normalizer, NormalizerBuilder};
pub use precision::apply_precision;

#[cfg(feature = "dataframe")]
pub use crate::core::dataframe::ToDataFrame;
