use crate::{
    error::{EvalError, EvalResult},
    evaluator::lexer::{Token, lex},
};

/// Upper bound on the length of a normalized expression, in bytes.
///
/// Reduction restarts its scan after every combination and is worst-case
/// quadratic in the number of operands, so input length is bounded before
/// any tokenization work is done. Longer expressions are rejected with
/// [`EvalError::InvalidExpression`].
pub const MAX_EXPRESSION_LEN: usize = 4096;

/// Checks a normalized expression against the arithmetic grammar.
///
/// The grammar is matched against the entire string, anchored at both ends;
/// a valid prefix followed by trailing garbage is rejected as a whole:
///
/// ```text
/// number     := digit+ ('.' digit+)?
/// arith_expr := ('+' | '-')? number (('+' | '-' | '*' | '/') number)*
/// ```
///
/// # Parameters
/// - `expression`: The normalized expression to check.
///
/// # Errors
/// [`EvalError::InvalidExpression`] if the expression is empty, longer than
/// [`MAX_EXPRESSION_LEN`], contains an unsupported character, or does not
/// match the grammar in full.
///
/// # Example
/// ```
/// use formulite::evaluator::validator::check_expression;
///
/// assert!(check_expression("-3.0+2.0*4.0").is_ok());
/// assert!(check_expression("1+").is_err());
/// assert!(check_expression("").is_err());
/// ```
pub fn check_expression(expression: &str) -> EvalResult<()> {
    check_length(expression)?;

    let tokens = lex(expression)?;
    if arithmetic_shape(&tokens) {
        Ok(())
    } else {
        Err(EvalError::InvalidExpression { expression: expression.to_string() })
    }
}

/// Checks a normalized conditional expression against the comparison
/// grammar.
///
/// A conditional is exactly one comparison operator separating two complete
/// arithmetic expressions:
///
/// ```text
/// comparison := arith_expr ('<=' | '>=' | '<' | '>' | '=') arith_expr
/// ```
///
/// Chains such as `1<2<3` contain more than one comparison operator and are
/// rejected, as is a bare arithmetic expression with none.
///
/// # Parameters
/// - `expression`: The normalized conditional to check.
///
/// # Errors
/// [`EvalError::InvalidExpression`] if the expression is over-length,
/// contains an unsupported character, has a comparison-operator count other
/// than one, or either side fails the arithmetic grammar.
///
/// # Example
/// ```
/// use formulite::evaluator::validator::check_comparison;
///
/// assert!(check_comparison("1+7=3+5").is_ok());
/// assert!(check_comparison("1<2<3").is_err());
/// assert!(check_comparison("1.0").is_err());
/// ```
pub fn check_comparison(expression: &str) -> EvalResult<()> {
    check_length(expression)?;

    let tokens = lex(expression)?;
    let sides: Vec<&[Token]> = tokens.split(is_comparison_operator).collect();

    if let [left, right] = sides.as_slice()
       && arithmetic_shape(left)
       && arithmetic_shape(right)
    {
        return Ok(());
    }
    Err(EvalError::InvalidExpression { expression: expression.to_string() })
}

/// Determines whether a token is one of the comparison operators.
///
/// # Parameters
/// - `token`: Token to inspect.
///
/// # Returns
/// `true` if the token separates the two sides of a conditional expression.
///
/// # Example
/// ```
/// use formulite::evaluator::{lexer::Token, validator::is_comparison_operator};
///
/// assert!(is_comparison_operator(&Token::LessEqual));
/// assert!(!is_comparison_operator(&Token::Plus));
/// ```
#[must_use]
pub const fn is_comparison_operator(token: &Token) -> bool {
    matches!(token,
             Token::Less | Token::Greater | Token::Equals | Token::LessEqual | Token::GreaterEqual)
}

/// Walks a token sequence and decides whether it matches the arithmetic
/// grammar in full: an optional leading sign, then numeric literals
/// alternating with arithmetic operators, ending on a literal.
fn arithmetic_shape(tokens: &[Token]) -> bool {
    let mut tokens = tokens.iter().peekable();

    // A sign on the first literal is the only place an operator may stand
    // without a literal to its left.
    if matches!(tokens.peek(), Some(Token::Plus | Token::Minus)) {
        tokens.next();
    }

    loop {
        match tokens.next() {
            Some(Token::Number(_)) => {},
            _ => return false,
        }

        match tokens.next() {
            None => return true,
            Some(Token::Plus | Token::Minus | Token::Star | Token::Slash) => {},
            Some(_) => return false,
        }
    }
}

/// Rejects expressions longer than [`MAX_EXPRESSION_LEN`].
fn check_length(expression: &str) -> EvalResult<()> {
    if expression.len() > MAX_EXPRESSION_LEN {
        return Err(EvalError::InvalidExpression { expression: expression.to_string() });
    }
    Ok(())
}
