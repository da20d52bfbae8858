//! Sentinel normalization for values coming from the remote source.

/// Literal the remote source uses to mean "no value".
pub const UNKNOWN_SENTINEL: &str = "unknown";

/// Map the remote `"unknown"` sentinel to `None`.
///
/// Every other value, including the empty string and differently-cased
/// variants such as `"Unknown"`, passes through unchanged.
pub fn strip_unknown(value: Option<String>) -> Option<String> {
    value.filter(|v| v != UNKNOWN_SENTINEL)
}
