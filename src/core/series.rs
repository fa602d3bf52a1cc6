use std::fmt;
use std::sync::Arc;

use ordered_float::OrderedFloat;

use crate::error::{SparkError, SparkResult};

/// Value extractor mapping a datum to its numeric value.
///
/// Extractors must be deterministic and side-effect free: one render calls
/// the extractor exactly twice per element (once while the value range and
/// path vertices are assembled, once while markers are decorated), and both
/// calls must agree.
pub struct ValueFn<T>(Arc<dyn Fn(&T) -> f64 + Send + Sync>);

impl<T> ValueFn<T> {
    pub fn new(extract: impl Fn(&T) -> f64 + Send + Sync + 'static) -> Self {
        Self(Arc::new(extract))
    }

    #[must_use]
    pub fn extract(&self, datum: &T) -> f64 {
        (self.0)(datum)
    }
}

impl ValueFn<f64> {
    /// Identity extractor for plain numeric series.
    #[must_use]
    pub fn identity() -> Self {
        Self::new(|value| *value)
    }
}

impl Default for ValueFn<f64> {
    fn default() -> Self {
        Self::identity()
    }
}

impl<T> Clone for ValueFn<T> {
    fn clone(&self) -> Self {
        Self(Arc::clone(&self.0))
    }
}

impl<T> fmt::Debug for ValueFn<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ValueFn(..)")
    }
}

/// Resolves the effective value domain for a render pass.
///
/// Explicit overrides win when finite; otherwise the bound is derived from
/// the data, ignoring non-finite values. An empty series has no defined
/// range and fails fast.
pub fn resolve_value_range(
    values: &[f64],
    min_override: Option<f64>,
    max_override: Option<f64>,
) -> SparkResult<(f64, f64)> {
    if values.is_empty() {
        return Err(SparkError::EmptySeries);
    }

    let explicit_min = min_override.filter(|value| value.is_finite());
    let explicit_max = max_override.filter(|value| value.is_finite());

    match (explicit_min, explicit_max) {
        (Some(min), Some(max)) => Ok((min, max)),
        (explicit_min, explicit_max) => {
            let finite = || {
                values
                    .iter()
                    .copied()
                    .filter(|value| value.is_finite())
                    .map(OrderedFloat)
            };
            let data_min = finite().min().ok_or_else(no_finite_values)?.0;
            let data_max = finite().max().ok_or_else(no_finite_values)?.0;
            Ok((
                explicit_min.unwrap_or(data_min),
                explicit_max.unwrap_or(data_max),
            ))
        }
    }
}

fn no_finite_values() -> SparkError {
    SparkError::InvalidData("value range requires at least one finite value".to_owned())
}

/// Parses a comma-delimited string into numbers with the default parser.
///
/// Parsing is deliberately permissive: empty tokens become `0`, unparseable
/// tokens become `NaN`. Callers that need validation check the result
/// themselves.
#[must_use]
pub fn parse_numbers(text: &str) -> Vec<f64> {
    parse_numbers_with(text, default_number_parser)
}

/// Parses a comma-delimited string, passing each trimmed token through
/// `parser`.
pub fn parse_numbers_with<F>(text: &str, parser: F) -> Vec<f64>
where
    F: Fn(&str) -> f64,
{
    text.split(',').map(|token| parser(token.trim())).collect()
}

fn default_number_parser(token: &str) -> f64 {
    if token.is_empty() {
        return 0.0;
    }
    token.parse().unwrap_or(f64::NAN)
}
