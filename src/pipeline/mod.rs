//! The composed normalization pipeline: precision first, then encoding.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::core::{FieldList, FmpError, Payload, Precision};
use crate::encode::{Encoded, Mode, condense_with, to_tsv_with};
use crate::fields::KeyPolicy;
use crate::precision::apply_precision;

/// Configuration for a [`Normalizer`].
///
/// Deserializable so the endpoint layer can carry it in its own config file;
/// omitted keys take their defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NormalizeOptions {
    /// Explicit columns. `None` derives them with `key_policy`.
    pub fields: Option<FieldList>,
    /// Digit limit applied before encoding.
    pub precision: Precision,
    pub mode: Mode,
    /// Only consulted in [`Mode::Tuple`]; `false` hands the payload back as
    /// [`Encoded::Raw`].
    pub condensed: bool,
    pub key_policy: KeyPolicy,
}

impl Default for NormalizeOptions {
    fn default() -> Self {
        Self {
            fields: None,
            precision: Precision::Unlimited,
            mode: Mode::Tsv,
            condensed: true,
            key_policy: KeyPolicy::FirstRecord,
        }
    }
}

/// Runs payloads through precision rounding and tabular encoding.
///
/// A `Normalizer` holds no state besides its options; one instance can be
/// shared across threads and reused for any number of payloads.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Normalizer {
    options: NormalizeOptions,
}

impl Normalizer {
    #[must_use]
    pub const fn new(options: NormalizeOptions) -> Self {
        Self { options }
    }

    /// Create a new builder.
    #[must_use]
    pub fn builder() -> NormalizerBuilder {
        NormalizerBuilder::default()
    }

    #[must_use]
    pub const fn options(&self) -> &NormalizeOptions {
        &self.options
    }

    /// Normalizes an already-resolved payload.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(skip(self, payload), fields(mode = %self.options.mode, records = payload.len()))
    )]
    #[must_use]
    pub fn run(&self, payload: Payload) -> Encoded {
        let opts = &self.options;
        let payload = apply_precision(payload, opts.precision);

        let fields = opts.fields.as_ref();
        match opts.mode {
            Mode::Tsv => Encoded::Text(to_tsv_with(&payload, fields, opts.key_policy)),
            Mode::Tuple => condense_with(payload, fields, opts.condensed, opts.key_policy),
        }
    }

    /// Resolves a decoded JSON value into a payload and normalizes it.
    ///
    /// # Errors
    ///
    /// Returns [`FmpError::Data`] if `value` is not a record or a sequence of records.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self, value), err))]
    pub fn run_value(&self, value: Value) -> Result<Encoded, FmpError> {
        Ok(self.run(Payload::from_value(value)?))
    }

    /// Decodes JSON text, resolves it into a payload and normalizes it.
    ///
    /// # Errors
    ///
    /// Returns [`FmpError::Json`] for malformed text and [`FmpError::Data`] for
    /// JSON of the wrong shape.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self, text), err, fields(bytes = text.len())))]
    pub fn run_json(&self, text: &str) -> Result<Encoded, FmpError> {
        Ok(self.run(Payload::from_json_str(text)?))
    }
}

#[derive(Debug, Clone)]
enum PrecisionInput {
    Ready(Precision),
    Digits(i64),
}

impl Default for PrecisionInput {
    fn default() -> Self {
        Self::Ready(Precision::Unlimited)
    }
}

/* ----------------------- Builder ----------------------- */

/// Builder for [`Normalizer`]. Arguments are validated in [`build`](Self::build).
#[derive(Debug, Clone, Default)]
pub struct NormalizerBuilder {
    fields: Option<Vec<String>>,
    precision: PrecisionInput,
    mode: Option<Mode>,
    condensed: Option<bool>,
    key_policy: Option<KeyPolicy>,
}

impl NormalizerBuilder {
    /// Seed every setting from an options value; later setters override it.
    #[must_use]
    pub fn options(mut self, options: NormalizeOptions) -> Self {
        self.fields = options.fields.map(FieldList::into_vec);
        self.precision = PrecisionInput::Ready(options.precision);
        self.mode = Some(options.mode);
        self.condensed = Some(options.condensed);
        self.key_policy = Some(options.key_policy);
        self
    }

    /// Fixes the output columns and their order.
    #[must_use]
    pub fn fields<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.fields = Some(names.into_iter().map(Into::into).collect());
        self
    }

    /// Sets the digit limit.
    #[must_use]
    pub const fn precision(mut self, precision: Precision) -> Self {
        self.precision = PrecisionInput::Ready(precision);
        self
    }

    /// Sets the digit limit from a signed count; negative values fail in `build`.
    #[must_use]
    pub const fn precision_digits(mut self, digits: i64) -> Self {
        self.precision = PrecisionInput::Digits(digits);
        self
    }

    #[must_use]
    pub const fn mode(mut self, mode: Mode) -> Self {
        self.mode = Some(mode);
        self
    }

    #[must_use]
    pub const fn condensed(mut self, yes: bool) -> Self {
        self.condensed = Some(yes);
        self
    }

    #[must_use]
    pub const fn key_policy(mut self, policy: KeyPolicy) -> Self {
        self.key_policy = Some(policy);
        self
    }

    /// Build the normalizer.
    ///
    /// # Errors
    ///
    /// Returns [`FmpError::InvalidArgument`] for a negative precision or a
    /// field list with duplicate names.
    pub fn build(self) -> Result<Normalizer, FmpError> {
        let precision = match self.precision {
            PrecisionInput::Ready(p) => p,
            PrecisionInput::Digits(d) => Precision::try_from(d)?,
        };
        let fields = self.fields.map(FieldList::new).transpose()?;

        let defaults = NormalizeOptions::default();
        Ok(Normalizer::new(NormalizeOptions {
            fields,
            precision,
            mode: self.mode.unwrap_or(defaults.mode),
            condensed: self.condensed.unwrap_or(defaults.condensed),
            key_policy: self.key_policy.unwrap_or(defaults.key_policy),
        }))
    }
}
