//! Error types and error handling for the front end.
//!
//! This module defines the errors raised while turning source text into a
//! program tree. It includes:
//!
//! - Error structures with source position information
//! - Specific error variants for lexing and parsing
//! - Error names and suggestions used by the diagnostic renderer

pub mod errors;

#[cfg(test)]
mod tests;
