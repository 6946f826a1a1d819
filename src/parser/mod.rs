//! Parser module for building the program tree.
//!
//! This module contains a recursive-descent parser that transforms a stream
//! of tokens into a `Program`. It handles:
//!
//! - Statement parsing (`expr ";"` sequences up to end of input)
//! - Expression parsing, one function per precedence level
//! - Normalisation of `>`/`>=` and unary operators into the core node kinds
//!
//! Any grammar violation ends the parse with an error; nothing is recovered.

pub mod expr;
pub mod parser;
pub mod stmt;
