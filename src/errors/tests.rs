//! Unit tests for error handling.
//!
//! This module contains tests for error types and error reporting.

use crate::errors::errors::{Error, ErrorImpl, ErrorTip};
use crate::lexer::tokens::TokenKind;
use crate::Position;
use std::rc::Rc;

#[test]
fn test_error_creation() {
    let error = Error::new(
        ErrorImpl::UnrecognisedToken {
            token: "@".to_string(),
        },
        Position(10, Rc::new("test.expr".to_string())),
    );

    assert_eq!(error.get_error_name(), "UnrecognisedToken");
}

#[test]
fn test_error_position() {
    let pos = Position(42, Rc::new("test.expr".to_string()));
    let error = Error::new(
        ErrorImpl::ExpectedToken {
            expected: TokenKind::CloseParen,
            found: ";".to_string(),
        },
        pos.clone(),
    );

    assert_eq!(error.get_position().0, 42);
    assert_eq!(error.get_position(), &pos);
}

#[test]
fn test_expected_token_error() {
    let error = Error::new(
        ErrorImpl::ExpectedToken {
            expected: TokenKind::Semicolon,
            found: "EOF".to_string(),
        },
        Position(0, Rc::new("test.expr".to_string())),
    );

    assert_eq!(error.get_error_name(), "ExpectedToken");
    assert_eq!(
        error.get_tip().to_string(),
        "expected `Semicolon`, found `EOF`"
    );
}

#[test]
fn test_number_parse_error() {
    let error = Error::new(
        ErrorImpl::NumberParseError {
            token: "99999999999999999999".to_string(),
        },
        Position(0, Rc::new("test.expr".to_string())),
    );

    assert_eq!(error.get_error_name(), "NumberParseError");
}

#[test]
fn test_invalid_identifier_error() {
    let error = Error::new(
        ErrorImpl::InvalidIdentifier {
            identifier: "foo".to_string(),
        },
        Position(0, Rc::new("test.expr".to_string())),
    );

    assert_eq!(error.get_error_name(), "InvalidIdentifier");
    assert!(error.get_tip().to_string().contains("`foo`"));
}

#[test]
fn test_invalid_assignment_target_error() {
    let error = Error::new(
        ErrorImpl::InvalidAssignmentTarget,
        Position(0, Rc::new("test.expr".to_string())),
    );

    assert_eq!(error.get_error_name(), "InvalidAssignmentTarget");
}

#[test]
fn test_error_tip_none() {
    let error = Error::new(
        ErrorImpl::UnrecognisedToken {
            token: "@".to_string(),
        },
        Position(0, Rc::new("test.expr".to_string())),
    );

    assert!(matches!(error.get_tip(), ErrorTip::None));
}

#[test]
fn test_error_tip_display() {
    let tip = ErrorTip::Suggestion("Try this instead".to_string());
    assert_eq!(tip.to_string(), "Try this instead");

    let tip = ErrorTip::None;
    assert_eq!(tip.to_string(), "");
}

#[test]
fn test_error_display() {
    let error = Error::new(
        ErrorImpl::ExpectedToken {
            expected: TokenKind::CloseParen,
            found: "EOF".to_string(),
        },
        Position(7, Rc::new("test.expr".to_string())),
    );

    assert_eq!(
        error.to_string(),
        "expected CloseParen, found \"EOF\" at test.expr:7"
    );
}

#[test]
fn test_nesting_too_deep_error() {
    let error = Error::new(
        ErrorImpl::NestingTooDeep { limit: 128 },
        Position(128, Rc::new("test.expr".to_string())),
    );

    assert_eq!(error.get_error_name(), "NestingTooDeep");
    assert_eq!(
        error.get_tip().to_string(),
        "Expressions may nest at most 128 levels of parentheses or assignments"
    );
    assert_eq!(
        error.to_string(),
        "expression nested deeper than 128 levels at test.expr:128"
    );
}
