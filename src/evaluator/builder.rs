use std::iter::Peekable;

use crate::{
    block::{Block, Operator},
    error::{EvalError, EvalResult},
    evaluator::lexer::{Token, lex},
};

/// Maps a token to its corresponding arithmetic operator.
///
/// # Parameters
/// - `token`: Token to convert.
///
/// # Returns
/// `Some(Operator)` for the four arithmetic operator tokens, `None` for
/// every other token.
///
/// # Example
/// ```
/// use formulite::{block::Operator, evaluator::{builder::token_operator, lexer::Token}};
///
/// assert_eq!(token_operator(&Token::Plus), Some(Operator::Add));
/// assert_eq!(token_operator(&Token::Equals), None);
/// ```
#[must_use]
pub const fn token_operator(token: &Token) -> Option<Operator> {
    match token {
        Token::Plus => Some(Operator::Add),
        Token::Minus => Some(Operator::Sub),
        Token::Star => Some(Operator::Mul),
        Token::Slash => Some(Operator::Div),
        _ => None,
    }
}

/// Builds the ordered block sequence for a validated expression.
///
/// The scan proceeds left to right, pairing each operator with the literal
/// that follows it. The first literal is special: a captured sign is folded
/// into the value (negating it for `-`, discarded for `+`) and the block's
/// operator is set to [`Operator::Add`] unconditionally, so the first block
/// of every sequence carries `Add`.
///
/// The builder assumes its input already passed
/// [`check_expression`](crate::evaluator::validator::check_expression). It
/// still matches every token totally and rejects any shape it cannot
/// consume, so calling it on unvalidated input reports the same error kind
/// the validator would.
///
/// # Parameters
/// - `expression`: The normalized, validated expression.
///
/// # Returns
/// A non-empty block sequence in source order.
///
/// # Errors
/// [`EvalError::InvalidExpression`] if the token stream does not alternate
/// between literals and operators as the grammar requires.
///
/// # Example
/// ```
/// use formulite::{block::{Block, Operator}, evaluator::builder::build_blocks};
///
/// let blocks = build_blocks("-3.0+2.0").unwrap();
/// assert_eq!(blocks,
///            vec![Block { operator: Operator::Add, value: -3.0 },
///                 Block { operator: Operator::Add, value: 2.0 }]);
/// ```
pub fn build_blocks(expression: &str) -> EvalResult<Vec<Block>> {
    let tokens = lex(expression)?;
    let mut blocks = Vec::with_capacity(tokens.len() / 2 + 1);
    let mut tokens = tokens.iter().peekable();

    // The sign of the first literal folds into its value, never into the
    // block's operator.
    let negative = match tokens.peek() {
        Some(Token::Minus) => {
            tokens.next();
            true
        },
        Some(Token::Plus) => {
            tokens.next();
            false
        },
        _ => false,
    };

    let value = next_number(&mut tokens, expression)?;
    blocks.push(Block { operator: Operator::Add,
                        value:    if negative { -value } else { value }, });

    while let Some(token) = tokens.next() {
        let Some(operator) = token_operator(token) else {
            return Err(EvalError::InvalidExpression { expression: expression.to_string() });
        };
        let value = next_number(&mut tokens, expression)?;
        blocks.push(Block { operator, value });
    }

    Ok(blocks)
}

/// Consumes the next token, which must be a numeric literal.
fn next_number<'a, I>(tokens: &mut Peekable<I>, expression: &str) -> EvalResult<f64>
    where I: Iterator<Item = &'a Token>
{
    match tokens.next() {
        Some(Token::Number(value)) => Ok(*value),
        _ => Err(EvalError::InvalidExpression { expression: expression.to_string() }),
    }
}
