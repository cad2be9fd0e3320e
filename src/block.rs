/// Represents one of the four supported arithmetic operators.
///
/// Operators fall into two precedence tiers: [`Mul`](Operator::Mul) and
/// [`Div`](Operator::Div) bind tighter than [`Add`](Operator::Add) and
/// [`Sub`](Operator::Sub). The set is closed; the grammar admits nothing
/// else between two numeric literals.
#[derive(Debug, PartialEq, Clone, Copy)]
pub enum Operator {
    /// Addition (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication (`*`)
    Mul,
    /// Division (`/`)
    Div,
}

impl std::fmt::Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let operator = match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
        };
        write!(f, "{operator}")
    }
}

/// Intermediate representation of one operand of an expression.
///
/// A block pairs a numeric value with the operator that combines it with the
/// value accumulated to its left. Ordered block sequences are the only
/// intermediate form in the crate; there is no syntax tree.
///
/// Every sequence built from grammar-valid input upholds two invariants:
/// the first block carries [`Operator::Add`] with any leading sign already
/// folded into `value`, and every later block's operator was explicitly
/// present between two literals in the input.
#[derive(Debug, PartialEq, Clone, Copy)]
pub struct Block {
    /// The operator combining this operand with the accumulated value.
    pub operator: Operator,
    /// The numeric operand.
    pub value:    f64,
}
