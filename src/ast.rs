/// An abstract syntax tree (AST) node representing an arithmetic expression.
///
/// Each node owns its children exclusively; the tree is built bottom-up by the
/// parser and consumed once by the evaluator. Every variant records the byte
/// offset of the token it was built from, for error reporting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expr {
    /// A non-negative integer literal. Negative numbers are expressed as
    /// [`Expr::UnaryOp`] over a literal.
    Number {
        /// The literal value.
        value:  i64,
        /// Byte offset of the literal in the source.
        offset: usize,
    },
    /// A unary operation (`+x` or `-x`).
    UnaryOp {
        /// The unary operator to apply.
        op:     UnaryOperator,
        /// The operand expression.
        expr:   Box<Self>,
        /// Byte offset of the sign.
        offset: usize,
    },
    /// A binary operation (addition, subtraction, etc.).
    BinaryOp {
        /// Left operand.
        left:   Box<Self>,
        /// The operator.
        op:     BinaryOperator,
        /// Right operand.
        right:  Box<Self>,
        /// Byte offset of the operator.
        offset: usize,
    },
}

impl Expr {
    /// Returns the byte offset of the token this node was built from.
    #[must_use]
    pub const fn offset(&self) -> usize {
        match self {
            Self::Number { offset, .. }
            | Self::UnaryOp { offset, .. }
            | Self::BinaryOp { offset, .. } => *offset,
        }
    }

    /// Counts the nodes in the tree without recursing.
    ///
    /// # Example
    /// ```
    /// use reckon::parse;
    ///
    /// assert_eq!(parse("-(1 + 2)").unwrap().node_count(), 4);
    /// ```
    #[must_use]
    pub fn node_count(&self) -> usize {
        let mut count = 0;
        let mut pending = vec![self];
        while let Some(expr) = pending.pop() {
            count += 1;
            match expr {
                Self::Number { .. } => {},
                Self::UnaryOp { expr, .. } => pending.push(expr),
                Self::BinaryOp { left, right, .. } => {
                    pending.push(right);
                    pending.push(left);
                },
            }
        }
        count
    }
}

/// Drops the tree iteratively. The derived drop would recurse once per level,
/// and long operator chains build trees as deep as they are long.
impl Drop for Expr {
    fn drop(&mut self) {
        let mut pending = Vec::new();
        detach_children(self, &mut pending);
        while let Some(mut expr) = pending.pop() {
            detach_children(&mut expr, &mut pending);
        }
    }
}

/// Moves the children of `expr` into `pending`, leaving leaves in their place.
fn detach_children(expr: &mut Expr, pending: &mut Vec<Expr>) {
    let leaf = || Expr::Number { value:  0,
                                 offset: 0, };
    match expr {
        Expr::Number { .. } => {},
        Expr::UnaryOp { expr, .. } => pending.push(std::mem::replace(expr.as_mut(), leaf())),
        Expr::BinaryOp { left, right, .. } => {
            pending.push(std::mem::replace(left.as_mut(), leaf()));
            pending.push(std::mem::replace(right.as_mut(), leaf()));
        },
    }
}

/// Represents a binary operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BinaryOperator {
    /// Addition (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication (`*`)
    Mul,
    /// Division (`/`), always real-valued.
    Div,
}

/// Represents a unary operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum UnaryOperator {
    /// Identity (e.g. `+x`).
    Plus,
    /// Arithmetic negation (e.g. `-x`).
    Negate,
}

impl std::fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let operator = match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
        };
        write!(f, "{operator}")
    }
}

impl std::fmt::Display for UnaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Plus => write!(f, "+"),
            Self::Negate => write!(f, "-"),
        }
    }
}

/// A pending piece of output while writing an [`Expr`].
enum Piece<'a> {
    Node(&'a Expr),
    Operator(BinaryOperator),
    Close,
}

/// Writes the expression fully parenthesized, e.g. `((10 - 2) - 3)`.
///
/// Uses an explicit stack, so trees as deep as a long operator chain can be
/// printed and logged.
impl std::fmt::Display for Expr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut pending = vec![Piece::Node(self)];
        while let Some(piece) = pending.pop() {
            match piece {
                Piece::Node(Self::Number { value, .. }) => write!(f, "{value}")?,
                Piece::Node(Self::UnaryOp { op, expr, .. }) => {
                    write!(f, "({op}")?;
                    pending.push(Piece::Close);
                    pending.push(Piece::Node(expr));
                },
                Piece::Node(Self::BinaryOp { left, op, right, .. }) => {
                    write!(f, "(")?;
                    pending.push(Piece::Close);
                    pending.push(Piece::Node(right));
                    pending.push(Piece::Operator(*op));
                    pending.push(Piece::Node(left));
                },
                Piece::Operator(op) => write!(f, " {op} ")?,
                Piece::Close => write!(f, ")")?,
            }
        }
        Ok(())
    }
}
