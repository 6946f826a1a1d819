//! Tree-walking evaluator.
//!
//! Executes a parsed program directly, with the same integer semantics as
//! the assembly the code generator emits. Used by `--emit eval` and to check
//! parses against their expected values.

pub mod evaluator;

#[cfg(test)]
mod tests;
