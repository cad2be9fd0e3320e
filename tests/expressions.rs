use formulite::{block::Operator,
                compare,
                error::EvalError,
                evaluate, evaluate_int,
                evaluator::{builder::build_blocks,
                            reducer::{apply, reduce}}};

fn assert_evaluates(expression: &str, expected: f64) {
    match evaluate(expression) {
        Ok(result) => assert_eq!(result, expected, "wrong result for {expression:?}"),
        Err(e) => panic!("Expression {expression:?} failed: {e}"),
    }
}

fn assert_invalid(expression: &str) {
    assert!(matches!(evaluate(expression), Err(EvalError::InvalidExpression { .. })),
            "Expression {expression:?} should have been rejected");
}

fn assert_compares(expression: &str, expected: bool) {
    match compare(expression) {
        Ok(outcome) => assert_eq!(outcome, expected, "wrong outcome for {expression:?}"),
        Err(e) => panic!("Conditional {expression:?} failed: {e}"),
    }
}

fn assert_invalid_comparison(expression: &str) {
    assert!(matches!(compare(expression), Err(EvalError::InvalidExpression { .. })),
            "Conditional {expression:?} should have been rejected");
}

#[test]
fn single_literals_and_signs() {
    assert_evaluates("1", 1.0);
    assert_evaluates("2.0", 2.0);
    assert_evaluates("13.37", 13.37);
    assert_evaluates("0", 0.0);
    assert_evaluates("-3.0", -3.0);
    assert_evaluates("+4.0", 4.0);
    assert_evaluates("-3", -3.0);
    assert_evaluates("+4", 4.0);

    for value in [0.5, 1.0, 2.25, -100.125, 4096.5, -0.75] {
        assert_evaluates(&value.to_string(), value);
    }
}

#[test]
fn basic_arithmetic() {
    assert_evaluates("1.0+2.0", 3.0);
    assert_evaluates("7.0-2.0", 5.0);
    assert_evaluates("2.0*4.0", 8.0);
    assert_evaluates("9.0/3.0", 3.0);
    assert_evaluates("1.0+2.0+4.0", 7.0);
    assert_evaluates("1.0+8.0-3.0", 6.0);
    assert_evaluates("1+2", 3.0);
    assert_evaluates("0/1", 0.0);
    assert_evaluates("1/0.5", 2.0);
}

#[test]
fn two_tier_precedence() {
    assert_evaluates("4.0*2.0+2.0", 10.0);
    assert_evaluates("4.0+2.0*2.0", 8.0);
    assert_evaluates("4.0/2.0+2.0", 4.0);
    assert_evaluates("4.0+2.0/2.0", 5.0);
    assert_evaluates("4.0*2.0*2.0", 16.0);
    assert_evaluates("4.0*2.0+2.0*3.0", 14.0);
    assert_evaluates("4.0/2.0-2.0*3.0", -4.0);

    // The reducer performs the same f64 operations in the same order as the
    // corresponding Rust expression, so results match exactly.
    let samples = [1.0_f64, 2.0, 3.5, 8.0];
    for a in samples {
        for b in samples {
            for c in samples {
                assert_evaluates(&format!("{a}+{b}*{c}"), a + b * c);
                assert_evaluates(&format!("{a}*{b}-{c}"), a * b - c);
            }
        }
    }
}

#[test]
fn left_to_right_within_tier() {
    assert_evaluates("8-3-2", 3.0);
    assert_evaluates("8.0-3.0-2.0", 3.0);
    assert_evaluates("4.0/2.0/2.0", 1.0);
    assert_evaluates("100/5/2", 10.0);
    assert_evaluates("10-4+2", 8.0);

    let samples = [1.0_f64, 2.0, 4.0, 6.5];
    for a in samples {
        for b in samples {
            for c in samples {
                assert_evaluates(&format!("{a}-{b}-{c}"), a - b - c);
                assert_evaluates(&format!("{a}/{b}/{c}"), a / b / c);
            }
        }
    }
}

#[test]
fn sign_folds_into_first_operand() {
    assert_evaluates("-3.0+2.0", -1.0);
    assert_evaluates("-3.0*2.0", -6.0);
    assert_evaluates("-8-3", -11.0);
    assert_evaluates("+2*3", 6.0);
}

#[test]
fn whitespace_is_insignificant_everywhere() {
    assert_evaluates("1.0 + 2.0", 3.0);
    assert_evaluates(" 1.0+2.0 ", 3.0);
    assert_evaluates("\t7.0 -\n2.0", 5.0);
    assert_evaluates(" - 3.0 + 2.0 ", -1.0);

    // Whitespace is stripped before lexing, so it can fall inside what then
    // becomes a single literal.
    assert_evaluates("1 2+3", 15.0);
    assert_evaluates("1 . 5+1", 2.5);
}

#[test]
fn invalid_expressions_are_rejected() {
    assert_invalid("");
    assert_invalid("   ");
    assert_invalid("invalid");
    assert_invalid("1 + x");
    assert_invalid("+");
    assert_invalid("-");
    assert_invalid("1+");
    assert_invalid("*3");
    assert_invalid("3*");
    assert_invalid("1++2");
    assert_invalid("1+-2");
    assert_invalid("5--3");
    assert_invalid("1/-2");
    assert_invalid(".5");
    assert_invalid("12.");
    assert_invalid("1..2");
    assert_invalid("1.2.3");
    assert_invalid("1e3");
    assert_invalid("(1+2)");
    assert_invalid("1<2");
}

#[test]
fn rejection_carries_the_normalized_expression() {
    match evaluate(" 1 + ") {
        Err(EvalError::InvalidExpression { expression }) => assert_eq!(expression, "1+"),
        other => panic!("Expected a rejection, got {other:?}"),
    }
}

#[test]
fn division_by_zero_is_error() {
    assert!(matches!(evaluate("1/0"), Err(EvalError::DivisionByZero)));
    assert!(matches!(evaluate("1.0/0.0"), Err(EvalError::DivisionByZero)));
    assert!(matches!(evaluate("1/00"), Err(EvalError::DivisionByZero)));
    assert!(matches!(evaluate("5/2/0"), Err(EvalError::DivisionByZero)));

    // The division runs in the first tier, so it fails before any addition
    // is attempted.
    assert!(matches!(evaluate("4.0+1.0/0.0"), Err(EvalError::DivisionByZero)));
}

#[test]
fn integer_results_truncate_toward_zero() {
    match evaluate_int("1") {
        Ok(result) => assert_eq!(result, 1),
        Err(e) => panic!("Expression failed: {e}"),
    }

    let cases = [("2.0", 2), ("2.9", 2), ("-2.9", -2), ("7/2", 3), ("-7/2", -3), ("9/3", 3)];
    for (expression, expected) in cases {
        match evaluate_int(expression) {
            Ok(result) => assert_eq!(result, expected, "wrong result for {expression:?}"),
            Err(e) => panic!("Expression {expression:?} failed: {e}"),
        }
    }

    assert!(matches!(evaluate_int("invalid"), Err(EvalError::InvalidExpression { .. })));
}

#[test]
fn comparison_outcomes() {
    assert_compares("1<2", true);
    assert_compares("1>2", false);
    assert_compares("1=2", false);
    assert_compares("1<=1", true);
    assert_compares("1>=1", true);
    assert_compares("2<=1", false);
    assert_compares("1>=2", false);
    assert_compares("1 = 1", true);
    assert_compares("1 = 2", false);
    assert_compares("1.1=1.1", true);
    assert_compares("1.1=2.1", false);
    assert_compares("1+2=3", true);
    assert_compares("2+2=3", false);
    assert_compares("1+7=3+5", true);
    assert_compares("2+2=3+4", false);
    assert_compares("12=3*4", true);
    assert_compares("2*3>5", true);
    assert_compares("1-3=-2", true);
    assert_compares(" 1 < 2 ", true);
}

#[test]
fn invalid_comparisons_are_rejected() {
    assert_invalid_comparison("");
    assert_invalid_comparison("invalid");
    assert_invalid_comparison("1.0");
    assert_invalid_comparison("1<2<3");
    assert_invalid_comparison("1<2>3");
    assert_invalid_comparison("1==2");
    assert_invalid_comparison("1=<2");
    assert_invalid_comparison("1<>2");
    assert_invalid_comparison("<2");
    assert_invalid_comparison("1<");
    assert_invalid_comparison("1&2");
}

#[test]
fn comparison_side_errors_propagate() {
    assert!(matches!(compare("1/0=1"), Err(EvalError::DivisionByZero)));
    assert!(matches!(compare("1=1/0"), Err(EvalError::DivisionByZero)));
    assert!(matches!(compare("1/0<=1/0"), Err(EvalError::DivisionByZero)));
}

#[test]
fn long_input_is_rejected_before_evaluation() {
    let too_long = "1+".repeat(3000) + "1";
    assert!(matches!(evaluate(&too_long), Err(EvalError::InvalidExpression { .. })));

    let within_bound = "1+".repeat(2000) + "1";
    assert_evaluates(&within_bound, 2001.0);

    // The bound applies to the normalized form, so surrounding whitespace
    // does not count against it.
    let padded = format!("{}1+1", " ".repeat(5000));
    assert_evaluates(&padded, 2.0);
}

#[test]
fn block_sequences_start_with_add() {
    for expression in ["1", "-1", "+1", "-3*2", "5-2"] {
        let blocks = build_blocks(expression).unwrap();
        assert_eq!(blocks[0].operator, Operator::Add, "first block of {expression:?}");
    }
}

#[test]
fn empty_block_sequence_is_unresolved() {
    assert!(matches!(reduce(Vec::new()), Err(EvalError::UnresolvedExpression { remaining: 0 })));
}

#[test]
fn operator_application() {
    assert_eq!(apply(Operator::Add, 2.0, 3.0).unwrap(), 5.0);
    assert_eq!(apply(Operator::Sub, 2.0, 3.0).unwrap(), -1.0);
    assert_eq!(apply(Operator::Mul, 2.0, 3.0).unwrap(), 6.0);
    assert_eq!(apply(Operator::Div, 3.0, 2.0).unwrap(), 1.5);
    assert!(matches!(apply(Operator::Div, 3.0, 0.0), Err(EvalError::DivisionByZero)));
}
