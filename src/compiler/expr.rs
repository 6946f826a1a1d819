use crate::ast::ast::{BinaryOp, Node};

use super::compiler::{CodegenError, Compiler};

/// Pending work for `gen_expression`. Children are visited from an explicit
/// stack so tree depth never turns into native recursion.
enum Step<'a> {
    Visit(&'a Node),
    Combine(BinaryOp),
    Store,
}

/// Pushes the address of a variable.
fn gen_address(compiler: &mut Compiler, node: &Node) -> Result<(), CodegenError> {
    let Node::Variable { offset, .. } = node else {
        return Err(CodegenError::InvalidAssignmentTarget);
    };

    compiler.emit("mov rax, rbp")?;
    compiler.emit(&format!("sub rax, {}", offset))?;
    compiler.emit("push rax")
}

/// Generates stack-machine code for the given expression, leaving its value
/// on top of the stack.
pub fn gen_expression(compiler: &mut Compiler, node: &Node) -> Result<(), CodegenError> {
    let mut steps = vec![Step::Visit(node)];

    while let Some(step) = steps.pop() {
        match step {
            Step::Visit(node) => match node {
                Node::Number(value) => {
                    // `push` only takes a 32-bit immediate; `mov` takes all 64 bits.
                    compiler.emit(&format!("mov rax, {}", value))?;
                    compiler.emit("push rax")?;
                }
                Node::Variable { .. } => {
                    gen_address(compiler, node)?;
                    compiler.emit("pop rax")?;
                    compiler.emit("mov rax, [rax]")?;
                    compiler.emit("push rax")?;
                }
                Node::Binary {
                    op: BinaryOp::Assign,
                    left,
                    right,
                } => {
                    gen_address(compiler, left)?;
                    steps.push(Step::Store);
                    steps.push(Step::Visit(right));
                }
                Node::Binary { op, left, right } => {
                    steps.push(Step::Combine(*op));
                    steps.push(Step::Visit(right));
                    steps.push(Step::Visit(left));
                }
            },
            Step::Combine(op) => {
                compiler.emit("pop rdi")?;
                compiler.emit("pop rax")?;
                gen_operator(compiler, op)?;
                compiler.emit("push rax")?;
            }
            Step::Store => {
                compiler.emit("pop rdi")?;
                compiler.emit("pop rax")?;
                compiler.emit("mov [rax], rdi")?;
                compiler.emit("push rdi")?;
            }
        }
    }

    Ok(())
}

/// Combines `rax` (left) and `rdi` (right) into `rax`.
fn gen_operator(compiler: &mut Compiler, op: BinaryOp) -> Result<(), CodegenError> {
    match op {
        BinaryOp::Add => compiler.emit("add rax, rdi"),
        BinaryOp::Sub => compiler.emit("sub rax, rdi"),
        BinaryOp::Mul => compiler.emit("imul rax, rdi"),
        BinaryOp::Div => {
            compiler.emit("cqo")?;
            compiler.emit("idiv rdi")
        }
        BinaryOp::Equal => gen_comparison(compiler, "sete"),
        BinaryOp::NotEqual => gen_comparison(compiler, "setne"),
        BinaryOp::Less => gen_comparison(compiler, "setl"),
        BinaryOp::LessEqual => gen_comparison(compiler, "setle"),
        BinaryOp::Assign => Err(CodegenError::InvalidAssignmentTarget),
    }
}

fn gen_comparison(compiler: &mut Compiler, set: &str) -> Result<(), CodegenError> {
    compiler.emit("cmp rax, rdi")?;
    compiler.emit(&format!("{} al", set))?;
    compiler.emit("movzb rax, al")
}
