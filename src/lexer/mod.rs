//! Lexical analysis module.
//!
//! This module contains the lexer (tokenizer) that converts source text
//! into the token stream the parser walks. It handles:
//!
//! - Tokenization using an ordered table of anchored regex patterns
//! - Recognition of identifiers, integer literals, and operators
//! - Token position tracking for error reporting
//! - Whitespace skipping

pub mod lexer;
pub mod tokens;
