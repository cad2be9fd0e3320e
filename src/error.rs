/// Result type used by every stage of the evaluation pipeline.
pub type EvalResult<T> = Result<T, EvalError>;

#[derive(Debug)]
/// Represents all errors that can occur while evaluating an expression.
pub enum EvalError {
    /// The normalized input does not match the supported grammar in full, or
    /// exceeds the input length bound.
    InvalidExpression {
        /// The normalized expression that was rejected.
        expression: String,
    },
    /// A division's right operand was exactly zero.
    DivisionByZero,
    /// The reducer finished both precedence tiers without arriving at a
    /// single value. Unreachable for input that passed validation; reported
    /// instead of panicking so embedders see a diagnosable error.
    UnresolvedExpression {
        /// Number of blocks left after both tiers.
        remaining: usize,
    },
    /// An operator outside the supported set reached the reducer. The
    /// operator set is the closed [`Operator`](crate::block::Operator) enum,
    /// so this cannot currently occur; the variant completes the error
    /// taxonomy for callers that match on kinds.
    InvalidOperator,
}

impl std::fmt::Display for EvalError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidExpression { expression } => {
                write!(f, "Expression '{expression}' does not match the supported grammar.")
            },
            Self::DivisionByZero => write!(f, "Division by zero."),
            Self::UnresolvedExpression { remaining } => {
                write!(f,
                       "Expression could not be reduced to a single value ({remaining} blocks \
                        left).")
            },
            Self::InvalidOperator => write!(f, "Unsupported operator in expression."),
        }
    }
}

impl std::error::Error for EvalError {}
