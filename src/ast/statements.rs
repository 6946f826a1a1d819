use std::{fmt::Display, slice::Iter};

use super::ast::Node;

/// The parsed program: one tree per statement, in source order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Program {
    pub body: Vec<Node>,
}

impl Program {
    pub fn iter(&self) -> Iter<'_, Node> {
        self.body.iter()
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }
}

impl<'a> IntoIterator for &'a Program {
    type Item = &'a Node;
    type IntoIter = Iter<'a, Node>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl Display for Program {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for stmt in self.iter() {
            writeln!(f, "{};", stmt)?;
        }
        Ok(())
    }
}
