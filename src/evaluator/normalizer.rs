/// Removes every whitespace character from an expression.
///
/// Whitespace is insignificant anywhere in the supported grammar: not only
/// around operators but also inside numbers, so `"1 2 + 3"` normalizes to
/// `"12+3"` and evaluates to `15`. The check uses [`char::is_whitespace`],
/// which covers the full Unicode whitespace set. Normalization is total;
/// it is the only pipeline stage with no failure mode.
///
/// # Parameters
/// - `expression`: The raw expression.
///
/// # Returns
/// The expression with all whitespace removed.
///
/// # Example
/// ```
/// use formulite::evaluator::normalizer::normalize;
///
/// assert_eq!(normalize(" 1.0 + 2.0 "), "1.0+2.0");
/// assert_eq!(normalize("1 2\t+\n3"), "12+3");
/// assert_eq!(normalize(""), "");
/// ```
#[must_use]
pub fn normalize(expression: &str) -> String {
    expression.chars().filter(|c| !c.is_whitespace()).collect()
}
