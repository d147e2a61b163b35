//! Language-agnostic intermediate representation for visualization
//!
//! Every language front-end, whatever its parsing strategy, emits the same
//! [`IrGraph`]: a node map keyed by id plus a root id.  The graph must be a
//! tree (each node referenced by exactly one parent, no cycles), which is
//! what the layout engine and the rendering layer rely on.
//!
//! [`lower`] contains the mini language's AST → IR lowering; front-ends
//! without an AST construct their graphs through [`builder::GraphBuilder`].

pub mod builder;
pub mod lower;

use crate::parser::ast::NodeId;
use rustc_hash::{FxHashMap, FxHashSet};
use std::fmt;

/// Normalized IR category, coarse enough to be shared across front-ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IrType {
    Program,
    Class,
    Function,
    Type,
    Variable,
    Block,
    Statement,
    Expression,
    Reference,
    Literal,
    Identifier,
    Call,
    List,
}

impl fmt::Display for IrType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            IrType::Program => "IR_Program",
            IrType::Class => "IR_Class",
            IrType::Function => "IR_Function",
            IrType::Type => "IR_Type",
            IrType::Variable => "IR_Variable",
            IrType::Block => "IR_Block",
            IrType::Statement => "IR_Statement",
            IrType::Expression => "IR_Expression",
            IrType::Reference => "IR_Reference",
            IrType::Literal => "IR_Literal",
            IrType::Identifier => "IR_Identifier",
            IrType::Call => "IR_Call",
            IrType::List => "IR_List",
        };
        write!(f, "{}", name)
    }
}

/// What a node means to the program, used for color coding in the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SemanticRole {
    Definition,
    Usage,
    Call,
    Keyword,
    Literal,
    Operator,
    Structure,
}

/// Optional per-node annotations.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct IrMetadata {
    /// e.g. "int", "number", "void"
    pub data_type: Option<String>,
    /// e.g. "global", "function:main"
    pub scope: Option<String>,
    /// e.g. ["public", "static"]
    pub modifiers: Vec<String>,
    /// Literal value, if any
    pub value: Option<String>,
    /// True if the node can be assigned to
    pub lvalue: Option<bool>,
}

/// One node of the visualization graph.
#[derive(Debug, Clone)]
pub struct IrNode {
    pub id: NodeId,
    /// Front-end-specific concrete type name, e.g. a grammar production
    pub node_type: String,
    pub ir_type: IrType,
    /// Display label, e.g. "main", "sum", "+"
    pub label: String,
    /// Ordered child ids; each child has exactly one parent
    pub children: Vec<NodeId>,
    pub role: SemanticRole,
    pub metadata: IrMetadata,
}

/// Root id plus the id → node mapping.  Must be a tree reachable from the
/// root; violating that is a front-end contract breach.
#[derive(Debug, Clone, Default)]
pub struct IrGraph {
    pub root: NodeId,
    pub nodes: FxHashMap<NodeId, IrNode>,
}

impl IrGraph {
    /// The neutral result a front-end degrades to when it cannot parse.
    pub fn empty() -> Self {
        IrGraph::default()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn get(&self, id: NodeId) -> Option<&IrNode> {
        self.nodes.get(&id)
    }

    pub fn insert(&mut self, node: IrNode) {
        self.nodes.insert(node.id, node);
    }

    /// Check the tree/ownership invariant: every node in the map is
    /// reachable from the root exactly once via children, and no node is
    /// its own ancestor.
    pub fn is_tree(&self) -> bool {
        if self.nodes.is_empty() {
            return true;
        }
        if !self.nodes.contains_key(&self.root) {
            return false;
        }

        let mut visited = FxHashSet::default();
        let mut stack = vec![self.root];

        while let Some(id) = stack.pop() {
            if !visited.insert(id) {
                // Reached twice: either a cycle or a shared child.
                return false;
            }
            let Some(node) = self.nodes.get(&id) else {
                return false; // dangling child id
            };
            stack.extend(node.children.iter().copied());
        }

        visited.len() == self.nodes.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn node(id: NodeId, children: Vec<NodeId>) -> IrNode {
        IrNode {
            id,
            node_type: "Test".to_string(),
            ir_type: IrType::Statement,
            label: format!("n{}", id),
            children,
            role: SemanticRole::Structure,
            metadata: IrMetadata::default(),
        }
    }

    #[test]
    fn test_tree_invariant_holds() {
        let mut graph = IrGraph { root: 0, ..IrGraph::default() };
        graph.insert(node(0, vec![1, 2]));
        graph.insert(node(1, vec![3]));
        graph.insert(node(2, vec![]));
        graph.insert(node(3, vec![]));

        assert!(graph.is_tree());
    }

    #[test]
    fn test_shared_child_is_not_a_tree() {
        let mut graph = IrGraph { root: 0, ..IrGraph::default() };
        graph.insert(node(0, vec![1, 2]));
        graph.insert(node(1, vec![3]));
        graph.insert(node(2, vec![3])); // 3 has two parents
        graph.insert(node(3, vec![]));

        assert!(!graph.is_tree());
    }

    #[test]
    fn test_cycle_is_not_a_tree() {
        let mut graph = IrGraph { root: 0, ..IrGraph::default() };
        graph.insert(node(0, vec![1]));
        graph.insert(node(1, vec![0]));

        assert!(!graph.is_tree());
    }

    #[test]
    fn test_orphan_is_not_a_tree() {
        let mut graph = IrGraph { root: 0, ..IrGraph::default() };
        graph.insert(node(0, vec![]));
        graph.insert(node(7, vec![])); // unreachable

        assert!(!graph.is_tree());
    }

    #[test]
    fn test_empty_graph_is_neutral() {
        assert!(IrGraph::empty().is_tree());
        assert!(IrGraph::empty().is_empty());
    }
}
