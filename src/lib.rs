//! # formulite
//!
//! formulite is a tiny evaluator for flat arithmetic expressions written in
//! Rust. It resolves formulas built from numeric literals and the four
//! operators `+ - * /` under standard two-tier precedence, with no
//! parentheses, variables, or function calls, and conditional expressions
//! joining two such formulas with a comparison operator. Every call is a
//! stateless string-in, value-out transformation.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
)]
#![allow(clippy::missing_errors_doc, clippy::float_cmp)]

use crate::{
    error::EvalResult,
    evaluator::{builder::build_blocks,
                comparison::compare_expression,
                normalizer::normalize,
                reducer::reduce,
                validator::check_expression},
    util::num::f64_to_i64_trunc,
};

/// Defines the intermediate representation of expressions.
///
/// This module declares the `Block` record and the closed `Operator` enum
/// that together represent one operand and the operator combining it with
/// the value accumulated to its left. Ordered block sequences are built by
/// the builder and consumed by the reducer; they are the only intermediate
/// form in the crate.
///
/// # Responsibilities
/// - Defines the operator set and names its two precedence tiers.
/// - Defines the block record that carries one operand through reduction.
/// - Documents the invariants every grammar-valid sequence upholds.
pub mod block;
/// Provides the unified error type for the whole pipeline.
///
/// This module defines every error that evaluation can report, from grammar
/// rejection through arithmetic failures to internal invariant violations.
/// All entry points return the same error enum, so embedders match on one
/// taxonomy regardless of which stage failed.
///
/// # Responsibilities
/// - Defines the error enum covering all failure modes of the pipeline.
/// - Implements human-readable messages for each error kind.
/// - Supports integration with standard error handling traits.
pub mod error;
/// Orchestrates the evaluation pipeline.
///
/// This module ties together normalization, validation, tokenization, block
/// building, reduction, and comparison to turn raw expression strings into
/// numeric or boolean results. Each stage is its own submodule with a
/// single job; the crate-level entry points compose them in fixed order.
///
/// # Responsibilities
/// - Coordinates the pipeline stages: normalizer, lexer, validator,
///   builder, reducer, comparison.
/// - Rejects invalid input before any evaluation work happens.
/// - Manages the flow of values and errors between stages.
pub mod evaluator;
/// General utilities for numeric conversion.
///
/// This module provides the conversion helpers shared by the entry points,
/// currently the truncating float-to-integer cast behind the integer API.
///
/// # Responsibilities
/// - Converts `f64` results to `i64` by truncation toward zero.
/// - Keeps cast policy in one place instead of scattered `as` expressions.
pub mod util;

/// Evaluates an arithmetic expression to its numeric result.
///
/// The input is normalized (all whitespace removed), validated against the
/// grammar, tokenized into a block sequence, and reduced under two-tier
/// precedence: `*` and `/` first, then `+` and `-`, each tier strictly left
/// to right. Every call is independent; no state survives between calls.
///
/// # Parameters
/// - `expression`: The raw expression, such as `"4.0 + 2.0 * 2.0"`.
///
/// # Returns
/// The numeric result of the expression.
///
/// # Errors
/// - [`error::EvalError::InvalidExpression`] if the normalized input does
///   not match the grammar in full or exceeds the length bound.
/// - [`error::EvalError::DivisionByZero`] if a division's right operand is
///   exactly zero.
/// - [`error::EvalError::UnresolvedExpression`] if reduction finishes with
///   more than one block; unreachable for validated input.
///
/// # Example
/// ```
/// use formulite::evaluate;
///
/// assert_eq!(evaluate("4.0+2.0*2.0").unwrap(), 8.0);
/// assert_eq!(evaluate("-3 + 2").unwrap(), -1.0);
/// assert!(evaluate("1/0").is_err());
/// ```
pub fn evaluate(expression: &str) -> EvalResult<f64> {
    let normalized = normalize(expression);
    check_expression(&normalized)?;

    let blocks = build_blocks(&normalized)?;
    reduce(blocks)
}

/// Evaluates an arithmetic expression and truncates the result toward zero.
///
/// The fractional part of the result is discarded, never rounded: `"2.9"`
/// evaluates to `2` and `"-2.9"` to `-2`. Apart from the final conversion
/// this is exactly [`evaluate`], including its error behavior.
///
/// # Parameters
/// - `expression`: The raw expression.
///
/// # Returns
/// The numeric result truncated to an integer.
///
/// # Errors
/// Same as [`evaluate`]; the conversion itself cannot fail.
///
/// # Example
/// ```
/// use formulite::evaluate_int;
///
/// assert_eq!(evaluate_int("2.9").unwrap(), 2);
/// assert_eq!(evaluate_int("-2.9").unwrap(), -2);
/// assert_eq!(evaluate_int("7/2").unwrap(), 3);
/// assert!(evaluate_int("invalid").is_err());
/// ```
pub fn evaluate_int(expression: &str) -> EvalResult<i64> {
    let result = evaluate(expression)?;
    Ok(f64_to_i64_trunc(result))
}

/// Evaluates a conditional expression to its boolean outcome.
///
/// A conditional is two arithmetic expressions joined by exactly one of
/// `<`, `>`, `=`, `<=`, `>=`. Both sides run through the full arithmetic
/// pipeline; an error on either side propagates to the caller instead of
/// being swallowed into a boolean. Equality is exact floating-point
/// equality with no tolerance.
///
/// # Parameters
/// - `expression`: The raw conditional expression, such as `"1+7 = 3+5"`.
///
/// # Returns
/// The outcome of the comparison.
///
/// # Errors
/// - [`error::EvalError::InvalidExpression`] if the conditional or either
///   of its sides fails its grammar, including a bare arithmetic expression
///   with no comparison operator.
/// - Any error from evaluating a side, such as
///   [`error::EvalError::DivisionByZero`].
///
/// # Example
/// ```
/// use formulite::compare;
///
/// assert!(compare("1+7 = 3+5").unwrap());
/// assert!(compare("12 = 3*4").unwrap());
/// assert!(!compare("2+2 = 3+4").unwrap());
/// assert!(compare("1.0").is_err());
/// ```
pub fn compare(expression: &str) -> EvalResult<bool> {
    compare_expression(expression)
}
