// AST definitions for the mini language

use std::fmt;

/// Unique identifier for AST nodes, assigned by the parser in creation order.
///
/// The AST → IR lowering reuses these ids, so an execution step, an IR node,
/// and an AST node that describe the same construct share one identity.
pub type NodeId = usize;

/// Source location information for error reporting
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SourceLocation {
    pub line: usize,
    pub column: usize,
}

impl SourceLocation {
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

/// Binary arithmetic operators
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinOp {
    Add,
    Sub,
    Mul,
    Div,
}

impl BinOp {
    pub fn as_str(&self) -> &'static str {
        match self {
            BinOp::Add => "+",
            BinOp::Sub => "-",
            BinOp::Mul => "*",
            BinOp::Div => "/",
        }
    }

    /// Standard IEEE-754 arithmetic; division by zero yields ±∞/NaN.
    pub fn apply(&self, left: f64, right: f64) -> f64 {
        match self {
            BinOp::Add => left + right,
            BinOp::Sub => left - right,
            BinOp::Mul => left * right,
            BinOp::Div => left / right,
        }
    }
}

impl fmt::Display for BinOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// AST nodes representing statements and expressions.
///
/// The tree is pure: every node is owned exactly once by its parent, with
/// [`Program`] as the unowned root.
#[derive(Debug, Clone)]
pub enum AstNode {
    /// `let <name> = <init>;`
    VarDecl {
        id: NodeId,
        name: String,
        init: Box<AstNode>,
        location: SourceLocation,
    },
    BinaryOp {
        id: NodeId,
        op: BinOp,
        left: Box<AstNode>,
        right: Box<AstNode>,
        location: SourceLocation,
    },
    NumberLiteral {
        id: NodeId,
        value: f64,
        raw: String,
        location: SourceLocation,
    },
    Variable {
        id: NodeId,
        name: String,
        location: SourceLocation,
    },
    /// Call expression; the only callee the grammar produces is the built-in
    /// `print`.
    Call {
        id: NodeId,
        callee: String,
        args: Vec<AstNode>,
        location: SourceLocation,
    },
}

impl AstNode {
    /// Get the unique id of this node
    pub fn id(&self) -> NodeId {
        match self {
            AstNode::VarDecl { id, .. }
            | AstNode::BinaryOp { id, .. }
            | AstNode::NumberLiteral { id, .. }
            | AstNode::Variable { id, .. }
            | AstNode::Call { id, .. } => *id,
        }
    }

    /// Get the source location of this node
    pub fn location(&self) -> &SourceLocation {
        match self {
            AstNode::VarDecl { location, .. }
            | AstNode::BinaryOp { location, .. }
            | AstNode::NumberLiteral { location, .. }
            | AstNode::Variable { location, .. }
            | AstNode::Call { location, .. } => location,
        }
    }
}

/// Top-level program structure
#[derive(Debug, Clone, Default)]
pub struct Program {
    pub id: NodeId,
    pub body: Vec<AstNode>,
}

impl Program {
    pub fn new() -> Self {
        Program::default()
    }
}
