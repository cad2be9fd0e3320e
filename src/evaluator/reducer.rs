use crate::{
    block::{Block, Operator},
    error::{EvalError, EvalResult},
};

/// The two precedence tiers, in reduction order: multiplicative operators
/// first, additive operators second.
const TIERS: [&[Operator]; 2] = [&[Operator::Mul, Operator::Div],
                                 &[Operator::Add, Operator::Sub]];

/// Reduces a block sequence to its numeric result.
///
/// A single block is returned as-is; that is the base case for a bare
/// literal. Otherwise both precedence tiers run in fixed order, and each
/// tier repeatedly combines the leftmost eligible pair and restarts its
/// scan. Evaluation within a tier is therefore strictly left to right:
/// `8-3-2` reduces as `(8-3)-2`, never `8-(3-2)`.
///
/// # Parameters
/// - `blocks`: The block sequence to consume.
///
/// # Returns
/// The numeric value of the fully reduced sequence.
///
/// # Errors
/// - [`EvalError::DivisionByZero`] if any division's right operand is
///   exactly zero.
/// - [`EvalError::UnresolvedExpression`] if both tiers finish with a block
///   count other than one. This cannot happen for sequences built from
///   validated input and signals a broken invariant rather than an input
///   problem.
///
/// # Example
/// ```
/// use formulite::evaluator::{builder::build_blocks, reducer::reduce};
///
/// let blocks = build_blocks("4.0+2.0*2.0").unwrap();
/// assert_eq!(reduce(blocks).unwrap(), 8.0);
/// ```
pub fn reduce(mut blocks: Vec<Block>) -> EvalResult<f64> {
    if blocks.len() == 1 {
        return Ok(blocks[0].value);
    }

    for tier in TIERS {
        reduce_tier(&mut blocks, tier)?;
    }

    match blocks.as_slice() {
        [block] => Ok(block.value),
        _ => Err(EvalError::UnresolvedExpression { remaining: blocks.len() }),
    }
}

/// Runs one tier over the sequence until a full scan finds no block whose
/// operator belongs to it.
///
/// Each combination folds the found block into its immediate predecessor.
/// The predecessor's operator survives, since it governs how the combined
/// value participates in the later tier; the found block's operator is the
/// one applied to the two values. The scan restarts from the front after
/// every combination.
fn reduce_tier(blocks: &mut Vec<Block>, tier: &[Operator]) -> EvalResult<()> {
    loop {
        let length = blocks.len();

        for i in 1..blocks.len() {
            if tier.contains(&blocks[i].operator) {
                blocks[i - 1] = Block { operator: blocks[i - 1].operator,
                                        value:    apply(blocks[i].operator,
                                                        blocks[i - 1].value,
                                                        blocks[i].value)?, };
                blocks.remove(i);
                break;
            }
        }

        if blocks.len() == length {
            return Ok(());
        }
    }
}

/// Applies one arithmetic operator to two operands.
///
/// # Parameters
/// - `operator`: The operator of the block being folded.
/// - `left`: The predecessor block's value.
/// - `right`: The folded block's value.
///
/// # Returns
/// The combined value.
///
/// # Errors
/// [`EvalError::DivisionByZero`] if `operator` is [`Operator::Div`] and
/// `right` is exactly `0.0`. No epsilon tolerance is applied; `1/0.0001`
/// is an ordinary division.
///
/// # Example
/// ```
/// use formulite::{block::Operator, evaluator::reducer::apply};
///
/// assert_eq!(apply(Operator::Sub, 8.0, 3.0).unwrap(), 5.0);
/// assert!(apply(Operator::Div, 1.0, 0.0).is_err());
/// ```
pub fn apply(operator: Operator, left: f64, right: f64) -> EvalResult<f64> {
    match operator {
        Operator::Add => Ok(left + right),
        Operator::Sub => Ok(left - right),
        Operator::Mul => Ok(left * right),
        Operator::Div => {
            if right == 0.0 {
                return Err(EvalError::DivisionByZero);
            }
            Ok(left / right)
        },
    }
}
