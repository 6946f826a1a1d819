use std::fmt::Display;

/// Size in bytes of one variable slot.
pub const WORD_SIZE: usize = 8;

/// Number of addressable variables, one per lowercase letter.
pub const VARIABLE_COUNT: usize = 26;

/// Binary operators
///
/// `>` and `>=` have no operator of their own: the parser builds `Less` and
/// `LessEqual` with the operands swapped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryOp {
    Assign,
    Equal,
    NotEqual,
    Less,
    LessEqual,
    Add,
    Sub,
    Mul,
    Div,
}

impl BinaryOp {
    /// The concrete-syntax spelling of the operator.
    pub fn symbol(&self) -> &'static str {
        match self {
            BinaryOp::Assign => "=",
            BinaryOp::Equal => "==",
            BinaryOp::NotEqual => "!=",
            BinaryOp::Less => "<",
            BinaryOp::LessEqual => "<=",
            BinaryOp::Add => "+",
            BinaryOp::Sub => "-",
            BinaryOp::Mul => "*",
            BinaryOp::Div => "/",
        }
    }
}

impl Display for BinaryOp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Tree node
///
/// Children are owned by their parent, so a program is a forest of disjoint
/// binary trees.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Number(i64),
    Variable { name: char, offset: usize },
    Binary {
        op: BinaryOp,
        left: Box<Node>,
        right: Box<Node>,
    },
}

impl Node {
    pub fn number(value: i64) -> Self {
        Node::Number(value)
    }

    /// Builds a variable reference from its spelling.
    ///
    /// Returns `None` unless the spelling is exactly one lowercase ASCII
    /// letter.
    pub fn variable(spelling: &str) -> Option<Self> {
        let mut chars = spelling.chars();
        let name = chars.next()?;
        if chars.next().is_some() {
            return None;
        }

        let offset = variable_offset(name, WORD_SIZE)?;
        Some(Node::Variable { name, offset })
    }

    pub fn binary(op: BinaryOp, left: Node, right: Node) -> Self {
        Node::Binary {
            op,
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    pub fn is_variable(&self) -> bool {
        matches!(self, Node::Variable { .. })
    }
}

/// The storage offset of a single-letter variable: `a` sits one word below the
/// frame base, `b` two words, and so on up to `z`.
pub fn variable_offset(name: char, word_size: usize) -> Option<usize> {
    if !name.is_ascii_lowercase() {
        return None;
    }

    Some((name as usize - 'a' as usize + 1) * word_size)
}

impl Display for Node {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        enum Piece<'a> {
            Node(&'a Node),
            Op(BinaryOp),
            Close,
        }

        let mut pieces = vec![Piece::Node(self)];

        while let Some(piece) = pieces.pop() {
            match piece {
                Piece::Node(Node::Number(value)) => write!(f, "{}", value)?,
                Piece::Node(Node::Variable { name, .. }) => write!(f, "{}", name)?,
                Piece::Node(Node::Binary { op, left, right }) => {
                    write!(f, "(")?;
                    pieces.push(Piece::Close);
                    pieces.push(Piece::Node(right));
                    pieces.push(Piece::Op(*op));
                    pieces.push(Piece::Node(left));
                }
                Piece::Op(op) => write!(f, " {} ", op)?,
                Piece::Close => write!(f, ")")?,
            }
        }

        Ok(())
    }
}

/// Tears trees down from a worklist; the default drop glue would recurse once
/// per level.
impl Drop for Node {
    fn drop(&mut self) {
        let mut pending = Vec::new();
        take_children(self, &mut pending);

        while let Some(mut node) = pending.pop() {
            take_children(&mut node, &mut pending);
        }
    }
}

/// Moves the binary children of `node` onto `pending`, leaving leaves behind.
fn take_children(node: &mut Node, pending: &mut Vec<Node>) {
    if let Node::Binary { left, right, .. } = node {
        for child in [left, right] {
            if let Node::Binary { .. } = child.as_ref() {
                pending.push(std::mem::replace(child.as_mut(), Node::Number(0)));
            }
        }
    }
}
