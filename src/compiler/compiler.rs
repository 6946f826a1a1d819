//! Program-level code generation.
//!
//! Emits a single `main` function in Intel-syntax x86-64 assembly. Every
//! variable gets a fixed word below `rbp`, and each statement leaves its value
//! on the stack, which is popped into `rax` so the last statement becomes the
//! exit status.

use std::fmt::Write;

use log::debug;
use thiserror::Error;

use crate::ast::{
    ast::{VARIABLE_COUNT, WORD_SIZE},
    statements::Program,
};

use super::expr::gen_expression;

#[derive(Error, Debug)]
pub enum CodegenError {
    #[error("left side of assignment is not a variable")]
    InvalidAssignmentTarget,
    #[error("failed to write assembly: {0}")]
    Format(#[from] std::fmt::Error),
}

/// Holds the assembly emitted so far.
pub struct Compiler {
    pub output: String,
}

impl Compiler {
    pub fn new() -> Self {
        Compiler {
            output: String::new(),
        }
    }

    /// Appends one indented instruction.
    pub fn emit(&mut self, instruction: &str) -> Result<(), CodegenError> {
        writeln!(self.output, "  {}", instruction)?;
        Ok(())
    }

    fn gen_prologue(&mut self) -> Result<(), CodegenError> {
        writeln!(self.output, ".intel_syntax noprefix")?;
        writeln!(self.output, ".globl main")?;
        writeln!(self.output, "main:")?;

        self.emit("push rbp")?;
        self.emit("mov rbp, rsp")?;
        self.emit(&format!("sub rsp, {}", VARIABLE_COUNT * WORD_SIZE))
    }

    fn gen_epilogue(&mut self) -> Result<(), CodegenError> {
        self.emit("mov rsp, rbp")?;
        self.emit("pop rbp")?;
        self.emit("ret")
    }
}

impl Default for Compiler {
    fn default() -> Self {
        Compiler::new()
    }
}

/// Compiles a program into assembly text.
pub fn compile(program: &Program) -> Result<String, CodegenError> {
    let mut compiler = Compiler::new();

    compiler.gen_prologue()?;

    for stmt in program {
        gen_expression(&mut compiler, stmt)?;
        // Leave the statement's value in rax.
        compiler.emit("pop rax")?;
    }

    compiler.gen_epilogue()?;

    debug!(
        "generated {} lines of assembly for {} statements",
        compiler.output.lines().count(),
        program.len()
    );
    Ok(compiler.output)
}
