/// Strips whitespace from raw input.
///
/// Normalization is the first pipeline stage. Whitespace carries no meaning
/// anywhere in the grammar, so it is removed outright before any other
/// stage sees the expression.
pub mod normalizer;

/// Tokenizes normalized expressions.
///
/// The lexer turns an expression into numeric-literal, arithmetic-operator
/// and comparison-operator tokens. Its patterns are the compiled form of
/// the expression grammar; all later stages work on tokens, never on raw
/// characters.
pub mod lexer;

/// Rejects input that does not match the grammar in full.
///
/// The validator checks the arithmetic and comparison grammars against the
/// entire normalized string, anchored at both ends, and enforces the input
/// length bound on untrusted expressions.
pub mod validator;

/// Builds block sequences from validated expressions.
///
/// The builder pairs each operator with the literal that follows it and
/// folds the optional sign of the first literal into its value, producing
/// the ordered sequence the reducer consumes.
pub mod builder;

/// Reduces block sequences to numeric results.
///
/// The reducer is the algorithmic core: two precedence tiers processed in
/// fixed order, each combining the leftmost eligible pair and restarting
/// its scan until no block of the tier remains.
pub mod reducer;

/// Evaluates conditional expressions.
///
/// Splits a conditional at its single comparison operator, evaluates both
/// sides through the arithmetic pipeline, and applies the comparison to
/// the two results.
pub mod comparison;
