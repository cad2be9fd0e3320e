use logos::Logos;

use crate::{
    error::{EvalError, EvalResult},
    evaluator::{builder::build_blocks,
                lexer::Token,
                normalizer::normalize,
                reducer::reduce,
                validator::{check_comparison, check_expression}},
};

/// Represents one of the comparison operators of a conditional expression.
#[derive(Debug, PartialEq, Clone, Copy)]
pub enum ComparisonOperator {
    /// Less than (`<`)
    Less,
    /// Greater than (`>`)
    Greater,
    /// Equal to (`=`)
    Equal,
    /// Less than or equal (`<=`)
    LessEqual,
    /// Greater than or equal (`>=`)
    GreaterEqual,
}

impl std::fmt::Display for ComparisonOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let operator = match self {
            Self::Less => "<",
            Self::Greater => ">",
            Self::Equal => "=",
            Self::LessEqual => "<=",
            Self::GreaterEqual => ">=",
        };
        write!(f, "{operator}")
    }
}

/// Maps a token to its corresponding comparison operator.
///
/// # Parameters
/// - `token`: Token to convert.
///
/// # Returns
/// `Some(ComparisonOperator)` for the five comparison tokens, `None` for
/// every other token.
///
/// # Example
/// ```
/// use formulite::evaluator::{comparison::{ComparisonOperator, token_comparison},
///                            lexer::Token};
///
/// assert_eq!(token_comparison(&Token::LessEqual), Some(ComparisonOperator::LessEqual));
/// assert_eq!(token_comparison(&Token::Plus), None);
/// ```
#[must_use]
pub const fn token_comparison(token: &Token) -> Option<ComparisonOperator> {
    match token {
        Token::Less => Some(ComparisonOperator::Less),
        Token::Greater => Some(ComparisonOperator::Greater),
        Token::Equals => Some(ComparisonOperator::Equal),
        Token::LessEqual => Some(ComparisonOperator::LessEqual),
        Token::GreaterEqual => Some(ComparisonOperator::GreaterEqual),
        _ => None,
    }
}

/// Splits a normalized conditional expression at its comparison operator.
///
/// # Parameters
/// - `expression`: The normalized conditional expression.
///
/// # Returns
/// The left arithmetic sub-expression, the parsed comparison operator, and
/// the right arithmetic sub-expression.
///
/// # Errors
/// [`EvalError::InvalidExpression`] if the expression contains a character
/// no token pattern matches, or its comparison-operator count is not
/// exactly one.
///
/// # Example
/// ```
/// use formulite::evaluator::comparison::{ComparisonOperator, split_comparison};
///
/// let (left, operator, right) = split_comparison("1+7<=3+5").unwrap();
/// assert_eq!(left, "1+7");
/// assert_eq!(operator, ComparisonOperator::LessEqual);
/// assert_eq!(right, "3+5");
/// ```
pub fn split_comparison(expression: &str) -> EvalResult<(&str, ComparisonOperator, &str)> {
    let mut found = None;

    for (token, span) in Token::lexer(expression).spanned() {
        let Ok(token) = token else {
            return Err(EvalError::InvalidExpression { expression: expression.to_string() });
        };

        if let Some(operator) = token_comparison(&token) {
            if found.is_some() {
                // A second comparison operator means a chain like 1<2<3.
                return Err(EvalError::InvalidExpression { expression: expression.to_string() });
            }
            found = Some((operator, span));
        }
    }

    match found {
        Some((operator, span)) => {
            Ok((&expression[..span.start], operator, &expression[span.end..]))
        },
        None => Err(EvalError::InvalidExpression { expression: expression.to_string() }),
    }
}

/// Evaluates a conditional expression to its boolean outcome.
///
/// The raw input is normalized, checked against the comparison grammar and
/// split at its single comparison operator, and both sides run through the
/// full arithmetic pipeline independently. An error from either side
/// propagates to the caller; a failed side is never substituted with a
/// default value, so `1/0=1` reports the division error instead of a
/// boolean.
///
/// # Parameters
/// - `expression`: The raw conditional expression.
///
/// # Returns
/// The outcome of comparing the two sides. Equality is exact floating-point
/// equality with no tolerance.
///
/// # Errors
/// - [`EvalError::InvalidExpression`] if the conditional or either of its
///   sides fails its grammar.
/// - Any error produced while evaluating a side, such as
///   [`EvalError::DivisionByZero`].
///
/// # Example
/// ```
/// use formulite::evaluator::comparison::compare_expression;
///
/// assert!(compare_expression("1+7 = 3+5").unwrap());
/// assert!(!compare_expression("2+2 = 3+4").unwrap());
/// ```
pub fn compare_expression(expression: &str) -> EvalResult<bool> {
    let normalized = normalize(expression);
    check_comparison(&normalized)?;

    let (left, operator, right) = split_comparison(&normalized)?;
    let left = evaluate_side(left)?;
    let right = evaluate_side(right)?;

    Ok(match operator {
           ComparisonOperator::Less => left < right,
           ComparisonOperator::Greater => left > right,
           ComparisonOperator::Equal => left == right,
           ComparisonOperator::LessEqual => left <= right,
           ComparisonOperator::GreaterEqual => left >= right,
       })
}

/// Runs one side of a conditional through the arithmetic pipeline.
fn evaluate_side(expression: &str) -> EvalResult<f64> {
    check_expression(expression)?;

    let blocks = build_blocks(expression)?;
    reduce(blocks)
}
