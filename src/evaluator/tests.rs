use std::rc::Rc;

use crate::ast::ast::{BinaryOp, Node, WORD_SIZE};
use crate::ast::statements::Program;
use crate::lexer::lexer::tokenize;
use crate::parser::parser::parse;

use super::evaluator::{evaluate, EvalError, Evaluator};

fn run(source: &str) -> Result<i64, EvalError> {
    let tokens = tokenize(source.to_string(), None).unwrap();
    let program = parse(tokens, Rc::new("shell".to_string())).unwrap();
    evaluate(&program)
}

#[test]
fn test_eval_arithmetic() {
    assert_eq!(run("1 + 2 * 3;"), Ok(7));
    assert_eq!(run("(1 + 2) * 3;"), Ok(9));
    assert_eq!(run("7 / 2;"), Ok(3));
    assert_eq!(run("-7 / 2;"), Ok(-3));
}

#[test]
fn test_eval_left_associative_subtraction() {
    assert_eq!(run("1 - 2 - 3;"), Ok(-4));
}

#[test]
fn test_eval_unary() {
    assert_eq!(run("-5;"), Ok(-5));
    assert_eq!(run("+5;"), Ok(5));
    assert_eq!(run("-(-(3));"), Ok(3));
}

#[test]
fn test_eval_comparisons() {
    assert_eq!(run("1 == 1;"), Ok(1));
    assert_eq!(run("1 != 1;"), Ok(0));
    assert_eq!(run("1 < 2;"), Ok(1));
    assert_eq!(run("2 <= 2;"), Ok(1));
    assert_eq!(run("2 > 1;"), Ok(1));
    assert_eq!(run("1 > 2;"), Ok(0));
    assert_eq!(run("1 >= 2;"), Ok(0));
    assert_eq!(run("2 >= 2;"), Ok(1));
}

#[test]
fn test_eval_assignment_across_statements() {
    assert_eq!(run("a = 1; b = 2; a + b;"), Ok(3));
    assert_eq!(run("a = b = 4; a * b;"), Ok(16));
}

#[test]
fn test_eval_assignment_yields_value() {
    assert_eq!(run("a = 9;"), Ok(9));
}

#[test]
fn test_eval_unassigned_variable_reads_zero() {
    assert_eq!(run("z + 1;"), Ok(1));
}

#[test]
fn test_eval_empty_program() {
    assert_eq!(evaluate(&Program::default()), Ok(0));
}

#[test]
fn test_eval_slots_by_offset() {
    let mut evaluator = Evaluator::new();
    let tokens = tokenize("c = 5;".to_string(), None).unwrap();
    let program = parse(tokens, Rc::new("shell".to_string())).unwrap();

    evaluator.run(&program).unwrap();
    assert_eq!(evaluator.slot(3 * WORD_SIZE), 5);
    assert_eq!(evaluator.slot(WORD_SIZE), 0);
}

#[test]
fn test_eval_wrapping_arithmetic() {
    assert_eq!(run("9223372036854775807 + 1;"), Ok(i64::MIN));
}

#[test]
fn test_eval_division_errors() {
    assert_eq!(run("1 / 0;"), Err(EvalError::DivisionByZero));
    assert_eq!(
        run("a = 0 - 9223372036854775807 - 1; a / -1;"),
        Err(EvalError::Overflow)
    );
}

#[test]
fn test_eval_rejects_hand_built_assignment_to_literal() {
    let node = Node::binary(BinaryOp::Assign, Node::number(1), Node::number(2));

    assert_eq!(
        Evaluator::new().eval(&node),
        Err(EvalError::InvalidAssignmentTarget)
    );
}

#[test]
fn test_eval_long_chain() {
    let source = format!("{};", vec!["1"; 200_000].join("+"));

    assert_eq!(run(&source), Ok(200_000));
}

#[test]
fn test_eval_deep_right_nested_tree() {
    let node = (0..100_000).fold(Node::number(0), |node, _| {
        Node::binary(BinaryOp::Sub, Node::number(1), node)
    });

    // 1 - (1 - (1 - ... 0)) with an even number of ones is 0.
    assert_eq!(Evaluator::new().eval(&node), Ok(0));
}

#[test]
fn test_eval_assignment_inside_operands() {
    assert_eq!(run("(a = 2) * (b = a + 1) + a * b;"), Ok(12));
}
