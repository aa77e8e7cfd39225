//! Per-cell normalization.

use super::CanonicalOptions;
use crate::table::Value;

/// Normalize a single cell to its canonical string token.
///
/// - missing (null or NaN) becomes `options.null_token`
/// - integers and floats become fixed-point with `options.float_precision`
///   fractional digits, so `9.8999999999` and `9.9` both read `9.90`
/// - everything else uses its string form, whitespace-collapsed when
///   `options.normalize_whitespace` is set
pub fn normalize_value(value: &Value, options: &CanonicalOptions) -> String {
    if value.is_missing() {
        return options.null_token.clone();
    }

    let text = match value {
        Value::Null => return options.null_token.clone(),
        Value::Int(i) => return format_number(*i as f64, options.float_precision),
        Value::Float(f) => return format_number(*f, options.float_precision),
        Value::Bool(true) => "True",
        Value::Bool(false) => "False",
        Value::Text(s) => s.as_str(),
    };

    if options.normalize_whitespace {
        collapse_whitespace(text)
    } else {
        text.to_string()
    }
}

fn format_number(number: f64, precision: usize) -> String {
    format!("{:.*}", precision, number)
}

/// Collapse every whitespace run to one space and trim both ends.
pub(crate) fn collapse_whitespace(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}
