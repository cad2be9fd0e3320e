use logos::Logos;

use crate::error::{EvalError, EvalResult};

/// Represents a lexical token in a normalized expression.
///
/// This enum defines every token the flat expression grammar recognizes;
/// any other character is a lexing error and fails validation. The token
/// patterns are compiled into a state machine once, at build time, so
/// concurrent callers share immutable tables and no per-call compilation
/// happens.
///
/// The lexer runs on normalized input only, so there is no whitespace-skip
/// pattern: whitespace has already been removed, and a stray whitespace
/// character is treated like any other unsupported character. Two-character
/// comparison operators win over their one-character prefixes by maximal
/// munch, so `1<=2` lexes as `<=` rather than `<` followed by `=`.
#[derive(Logos, Debug, PartialEq, Clone)]
pub enum Token {
    /// Numeric literal tokens, such as `42`, `2.0` or `13.37`.
    #[regex(r"[0-9]+(\.[0-9]+)?", parse_number)]
    Number(f64),
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `<=`
    #[token("<=")]
    LessEqual,
    /// `>=`
    #[token(">=")]
    GreaterEqual,
    /// `<`
    #[token("<")]
    Less,
    /// `>`
    #[token(">")]
    Greater,
    /// `=`
    #[token("=")]
    Equals,
}

/// Parses a numeric literal from the current token slice.
///
/// # Parameters
/// - `lex`: Reference to the lexer positioned at the literal.
///
/// # Returns
/// - `Some(f64)`: The parsed value if successful.
/// - `None`: If the token slice is not a valid number.
fn parse_number(lex: &logos::Lexer<Token>) -> Option<f64> {
    lex.slice().parse().ok()
}

/// Tokenizes a normalized expression in full.
///
/// # Parameters
/// - `expression`: The normalized expression to tokenize.
///
/// # Returns
/// Every token of the expression, in source order.
///
/// # Errors
/// [`EvalError::InvalidExpression`] if the expression contains a character
/// no token pattern matches.
///
/// # Example
/// ```
/// use formulite::evaluator::lexer::{Token, lex};
///
/// let tokens = lex("1+2").unwrap();
/// assert_eq!(tokens, vec![Token::Number(1.0), Token::Plus, Token::Number(2.0)]);
///
/// assert!(lex("1&2").is_err());
/// ```
pub fn lex(expression: &str) -> EvalResult<Vec<Token>> {
    let mut tokens = Vec::new();
    for token in Token::lexer(expression) {
        match token {
            Ok(token) => tokens.push(token),
            Err(()) => {
                return Err(EvalError::InvalidExpression { expression: expression.to_string() });
            },
        }
    }
    Ok(tokens)
}
