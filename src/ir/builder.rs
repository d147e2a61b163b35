//! Incremental IR graph construction
//!
//! Front-ends that do not lower from an AST build their graphs with
//! [`GraphBuilder`]: ids are handed out sequentially and parent links are
//! wired at insertion, so the result satisfies the tree invariant by
//! construction as long as each node is added under one parent.

use crate::ir::{IrGraph, IrMetadata, IrNode, IrType, SemanticRole};
use crate::parser::ast::NodeId;

pub struct GraphBuilder {
    pub graph: IrGraph,
    next_id: NodeId,
}

impl GraphBuilder {
    pub fn new() -> Self {
        GraphBuilder {
            graph: IrGraph::default(),
            next_id: 0,
        }
    }

    /// Insert a node, wiring it as the last child of `parent`.  Passing
    /// `None` makes sense only for the root.
    pub fn add(
        &mut self,
        parent: Option<NodeId>,
        node_type: &str,
        ir_type: IrType,
        label: &str,
        role: SemanticRole,
        metadata: IrMetadata,
    ) -> NodeId {
        let id = self.next_id;
        self.next_id += 1;

        self.graph.insert(IrNode {
            id,
            node_type: node_type.to_string(),
            ir_type,
            label: label.to_string(),
            children: Vec::new(),
            role,
            metadata,
        });
        if let Some(parent) = parent {
            if let Some(node) = self.graph.nodes.get_mut(&parent) {
                node.children.push(id);
            }
        }
        id
    }
}

impl Default for GraphBuilder {
    fn default() -> Self {
        Self::new()
    }
}
