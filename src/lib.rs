#![allow(clippy::module_inception)]

use std::{fmt::Display, rc::Rc};

use crate::errors::errors::{Error, ErrorTip};

pub mod ast;
pub mod compiler;
pub mod errors;
pub mod evaluator;
pub mod lexer;
pub mod macros;
pub mod parser;

extern crate regex;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Position(pub u32, pub Rc<String>);

impl Position {
    pub fn null() -> Self {
        Position(0, Rc::new(String::from("<null>")))
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.1, self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    pub start: Position,
    pub end: Position,
}

/// Resolves a byte offset into `(line number, line text, byte column)`.
///
/// An offset at or past the end of the source points just after the last
/// character, which is where end-of-input errors are reported.
pub fn get_line_at_position(content: &str, position: u32) -> (usize, String, usize) {
    let pos = position as usize;

    let mut start = 0;
    let mut line_number = 1;
    let mut last = (1, String::new(), 0);

    for line in content.split_inclusive('\n') {
        let end = start + line.len();

        if (start..end).contains(&pos) {
            return (line_number, line.to_string(), pos - start);
        }

        let trimmed = line.trim_end_matches('\n');
        last = (line_number, trimmed.to_string(), trimmed.len());

        start = end;
        line_number += 1;
    }

    if content.ends_with('\n') {
        return (line_number, String::new(), 0);
    }

    last
}

pub fn render_error(error: &Error, source: &str) -> String {
    /*
        Error: ExpectedToken (expected `Semicolon`, found `EOF`)
        -> main.expr
           |
        1 | a = 1 + 2
           | ---------^
    */

    let position = error.get_position();
    let (line, line_text, line_pos) = get_line_at_position(source, position.0);

    let line_string = line.to_string();
    let padding = line_string.len() + 2;

    let mut out = String::new();

    if let ErrorTip::None = error.get_tip() {
        out.push_str(&format!("Error: {}\n", error.get_error_name()));
    } else {
        out.push_str(&format!(
            "Error: {} ({})\n",
            error.get_error_name(),
            error.get_tip()
        ));
    }
    out.push_str(&format!("-> {}\n", position.1));
    out.push_str(&format!("{:>padding$}\n", "|"));

    let (line_text_removed, removed_whitespace) = remove_starting_whitespace(&line_text);
    out.push_str(&format!("{} | {}\n", line_string, line_text_removed.trim_end()));

    // The caret goes under a character, not a byte.
    let column = line_text
        .get(..line_pos)
        .map_or(line_pos, |prefix| prefix.chars().count());
    let arrows = column.saturating_sub(removed_whitespace) + 1;

    out.push_str(&format!("{:>padding$} {:->arrows$}\n", "|", "^"));
    out
}

fn remove_starting_whitespace(string: &str) -> (String, usize) {
    let start = string.chars().take_while(|c| *c == ' ').count();

    (String::from(&string[start..]), start)
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use crate::errors::errors::{Error, ErrorImpl};
    use crate::lexer::tokens::TokenKind;
    use crate::Position;

    #[test]
    fn test_get_line_at_position() {
        let content = "Hello, world!\nsecond\n\n    Testing { }\n";

        let (line_number, line, line_pos) = super::get_line_at_position(content, 10);
        assert_eq!(line_number, 1);
        assert_eq!(line, "Hello, world!\n");
        assert_eq!(line_pos, 10);

        let (line_number, line, line_pos) = super::get_line_at_position(content, 34);
        assert_eq!(line_number, 4);
        assert_eq!(line, "    Testing { }\n");
        assert_eq!(line_pos, 12);
    }

    #[test]
    fn test_get_line_at_end_of_input() {
        let (line_number, line, line_pos) = super::get_line_at_position("a = 1\nb = 2", 11);
        assert_eq!(line_number, 2);
        assert_eq!(line, "b = 2");
        assert_eq!(line_pos, 5);

        let (line_number, line, line_pos) = super::get_line_at_position("", 0);
        assert_eq!(line_number, 1);
        assert_eq!(line, "");
        assert_eq!(line_pos, 0);
    }

    #[test]
    fn test_render_error() {
        let error = Error::new(
            ErrorImpl::ExpectedToken {
                expected: TokenKind::Semicolon,
                found: "EOF".to_string(),
            },
            Position(5, Rc::new("main.expr".to_string())),
        );

        let rendered = super::render_error(&error, "1 + 2");
        let lines: Vec<&str> = rendered.lines().collect();

        assert_eq!(
            lines[0],
            "Error: ExpectedToken (expected `Semicolon`, found `EOF`)"
        );
        assert_eq!(lines[1], "-> main.expr");
        assert_eq!(lines[2], "  |");
        assert_eq!(lines[3], "1 | 1 + 2");
        assert_eq!(lines[4], "  | -----^");
    }

    #[test]
    fn test_render_error_strips_indentation() {
        let error = Error::new(
            ErrorImpl::UnrecognisedToken {
                token: "@".to_string(),
            },
            Position(6, Rc::new("main.expr".to_string())),
        );

        let rendered = super::render_error(&error, "    a @ 1;");
        let lines: Vec<&str> = rendered.lines().collect();

        assert_eq!(lines[0], "Error: UnrecognisedToken");
        assert_eq!(lines[3], "1 | a @ 1;");
        assert_eq!(lines[4], "  | --^");
    }

    #[test]
    fn test_render_error_counts_characters() {
        let error = Error::new(
            ErrorImpl::UnrecognisedToken {
                token: "@".to_string(),
            },
            Position(5, Rc::new("main.expr".to_string())),
        );

        let rendered = super::render_error(&error, "é + @;");
        let lines: Vec<&str> = rendered.lines().collect();

        assert_eq!(lines[3], "1 | é + @;");
        assert_eq!(lines[4], "  | ----^");
    }
}
