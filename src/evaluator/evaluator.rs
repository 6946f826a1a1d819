use std::collections::HashMap;

use log::trace;
use thiserror::Error;

use crate::ast::{
    ast::{BinaryOp, Node},
    statements::Program,
};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EvalError {
    #[error("division by zero")]
    DivisionByZero,
    #[error("integer overflow in division")]
    Overflow,
    #[error("left side of assignment is not a variable")]
    InvalidAssignmentTarget,
}

/// Runs programs with the semantics of the generated code: 64-bit wrapping
/// arithmetic, comparisons yielding `1` or `0`, and one slot per variable
/// offset.
#[derive(Debug, Default)]
pub struct Evaluator {
    slots: HashMap<usize, i64>,
}

impl Evaluator {
    pub fn new() -> Self {
        Evaluator::default()
    }

    /// Evaluates every statement in order and returns the value of the last
    /// one, or `0` for an empty program.
    pub fn run(&mut self, program: &Program) -> Result<i64, EvalError> {
        let mut result = 0;

        for stmt in program {
            result = self.eval(stmt)?;
            trace!("{} => {}", stmt, result);
        }

        Ok(result)
    }

    /// Current value stored at `offset`; unassigned slots read as `0`.
    pub fn slot(&self, offset: usize) -> i64 {
        self.slots.get(&offset).copied().unwrap_or(0)
    }

    /// Evaluates one expression tree.
    ///
    /// Walks the tree with an explicit work stack in the same order as the
    /// generated code: left operand, right operand, then the operator.
    pub fn eval(&mut self, node: &Node) -> Result<i64, EvalError> {
        let mut steps = vec![Step::Visit(node)];
        let mut values: Vec<i64> = Vec::new();

        while let Some(step) = steps.pop() {
            match step {
                Step::Visit(node) => match node {
                    Node::Number(value) => values.push(*value),
                    Node::Variable { offset, .. } => values.push(self.slot(*offset)),
                    Node::Binary {
                        op: BinaryOp::Assign,
                        left,
                        right,
                    } => {
                        let Node::Variable { offset, .. } = left.as_ref() else {
                            return Err(EvalError::InvalidAssignmentTarget);
                        };

                        steps.push(Step::Store(*offset));
                        steps.push(Step::Visit(right));
                    }
                    Node::Binary { op, left, right } => {
                        steps.push(Step::Apply(*op));
                        steps.push(Step::Visit(right));
                        steps.push(Step::Visit(left));
                    }
                },
                Step::Apply(op) => {
                    let rhs = values.pop().unwrap_or_default();
                    let lhs = values.pop().unwrap_or_default();
                    values.push(apply(op, lhs, rhs)?);
                }
                Step::Store(offset) => {
                    let value = values.last().copied().unwrap_or_default();
                    self.slots.insert(offset, value);
                }
            }
        }

        Ok(values.pop().unwrap_or_default())
    }
}

enum Step<'a> {
    Visit(&'a Node),
    Apply(BinaryOp),
    Store(usize),
}

fn apply(op: BinaryOp, lhs: i64, rhs: i64) -> Result<i64, EvalError> {
    let value = match op {
        BinaryOp::Add => lhs.wrapping_add(rhs),
        BinaryOp::Sub => lhs.wrapping_sub(rhs),
        BinaryOp::Mul => lhs.wrapping_mul(rhs),
        BinaryOp::Div => {
            if rhs == 0 {
                return Err(EvalError::DivisionByZero);
            }
            lhs.checked_div(rhs).ok_or(EvalError::Overflow)?
        }
        BinaryOp::Equal => (lhs == rhs) as i64,
        BinaryOp::NotEqual => (lhs != rhs) as i64,
        BinaryOp::Less => (lhs < rhs) as i64,
        BinaryOp::LessEqual => (lhs <= rhs) as i64,
        BinaryOp::Assign => return Err(EvalError::InvalidAssignmentTarget),
    };

    Ok(value)
}

/// Convenience wrapper evaluating `program` against fresh slots.
pub fn evaluate(program: &Program) -> Result<i64, EvalError> {
    Evaluator::new().run(program)
}
