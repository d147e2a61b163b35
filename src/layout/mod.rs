//! Deterministic graph layout engine
//!
//! Turns an [`IrGraph`] into positioned nodes and directed edges for the
//! rendering surface.  A breadth-first traversal from the root assigns each
//! node a level (its distance from the root, first visit wins); nodes within
//! a level are centered horizontally in visitation order.  Given the same
//! graph and gap constants the output is bit-identical, which is what makes
//! visual diffing in tests possible.

use crate::ir::IrGraph;
use crate::parser::ast::NodeId;
use rustc_hash::FxHashSet;
use std::collections::VecDeque;

/// Vertical distance between levels.
pub const LEVEL_GAP: f32 = 150.0;
/// Horizontal distance between siblings at one level.
pub const SIBLING_GAP: f32 = 220.0;

/// A node with its assigned position.
#[derive(Debug, Clone, PartialEq)]
pub struct PlacedNode {
    pub id: NodeId,
    pub x: f32,
    pub y: f32,
    pub level: usize,
}

/// One directed parent → child edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayoutEdge {
    pub source: NodeId,
    pub target: NodeId,
}

/// Layout result consumed by the graph-rendering surface.
#[derive(Debug, Clone, Default)]
pub struct Layout {
    pub nodes: Vec<PlacedNode>,
    pub edges: Vec<LayoutEdge>,
}

/// Lay out `graph` with the default gap constants.
pub fn layout(graph: &IrGraph) -> Layout {
    layout_with_gaps(graph, SIBLING_GAP, LEVEL_GAP)
}

/// Lay out `graph` with explicit gap constants.
pub fn layout_with_gaps(
    graph: &IrGraph,
    sibling_gap: f32,
    level_gap: f32,
) -> Layout {
    let mut levels: Vec<Vec<NodeId>> = Vec::new();
    let mut visited: FxHashSet<NodeId> = FxHashSet::default();
    let mut queue: VecDeque<(NodeId, usize)> = VecDeque::new();

    if graph.nodes.contains_key(&graph.root) {
        queue.push_back((graph.root, 0));
    }

    while let Some((id, level)) = queue.pop_front() {
        // A repeat visit means the front-end broke the tree contract; break
        // the cycle by ignoring it.
        if !visited.insert(id) {
            continue;
        }

        if levels.len() <= level {
            levels.resize_with(level + 1, Vec::new);
        }
        levels[level].push(id);

        if let Some(node) = graph.get(id) {
            for child in &node.children {
                if graph.nodes.contains_key(child) {
                    queue.push_back((*child, level + 1));
                }
            }
        }
    }

    let mut result = Layout::default();

    for (level, ids) in levels.iter().enumerate() {
        let start_x = -(ids.len() as f32 * sibling_gap) / 2.0;
        for (index, id) in ids.iter().enumerate() {
            result.nodes.push(PlacedNode {
                id: *id,
                x: start_x + index as f32 * sibling_gap,
                y: level as f32 * level_gap,
                level,
            });
        }
    }

    // One edge per parent → child relation among visited nodes.
    for placed in &result.nodes {
        if let Some(node) = graph.get(placed.id) {
            for child in &node.children {
                if visited.contains(child) {
                    result.edges.push(LayoutEdge {
                        source: placed.id,
                        target: *child,
                    });
                }
            }
        }
    }

    result
}
