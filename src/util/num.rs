/// Converts an `f64` to `i64` by truncating toward zero.
///
/// The fractional part is discarded, never rounded: `2.9` becomes `2` and
/// `-2.9` becomes `-2`. Values beyond the `i64` range saturate at
/// `i64::MIN` and `i64::MAX`, and NaN converts to `0`, following the
/// semantics of Rust's `as` cast.
///
/// # Parameters
/// - `value`: The floating-point value to convert.
///
/// # Returns
/// The truncated integer value.
///
/// # Example
/// ```
/// use formulite::util::num::f64_to_i64_trunc;
///
/// assert_eq!(f64_to_i64_trunc(2.9), 2);
/// assert_eq!(f64_to_i64_trunc(-2.9), -2);
/// assert_eq!(f64_to_i64_trunc(7.0), 7);
/// assert_eq!(f64_to_i64_trunc(1e300), i64::MAX);
/// ```
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn f64_to_i64_trunc(value: f64) -> i64 {
    value as i64
}
