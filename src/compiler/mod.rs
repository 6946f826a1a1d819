//! Code generation module.
//!
//! This module walks the parsed program and emits x86-64 assembly for a
//! simple stack machine. It handles:
//!
//! - The `main` prologue and epilogue, including the variable frame
//! - Expression evaluation through push/pop sequences
//! - Stores into variable slots for assignment

pub mod compiler;
pub mod expr;
