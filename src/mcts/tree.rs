//! Arena-based MCTS tree.
//!
//! Nodes live in a flat `Vec<MCTSNode>` and reference each other by `NodeId`
//! index. The whole tree is built fresh for each top-level search and
//! discarded afterwards; `reset` reuses the allocation across calls from the
//! same engine instance.

use serde::{Deserialize, Serialize};

use crate::core::{GameRng, GameState};

use super::node::{MCTSNode, NodeId};

/// Arena-based MCTS tree.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct MCTSTree {
    /// All nodes in the tree.
    nodes: Vec<MCTSNode>,

    /// The root node ID (always 0 after initialization).
    root: NodeId,
}

impl MCTSTree {
    /// Create a new tree with the given position as root.
    pub fn new(root_state: GameState) -> Self {
        let mut tree = Self {
            nodes: Vec::with_capacity(1024),
            root: NodeId::new(0),
        };
        tree.nodes.push(MCTSNode::root(root_state));
        tree
    }

    /// Drop every node and install a fresh root.
    pub fn reset(&mut self, root_state: GameState) {
        self.nodes.clear();
        self.nodes.push(MCTSNode::root(root_state));
        self.root = NodeId::new(0);
    }

    /// Get the root node ID.
    #[inline]
    #[must_use]
    pub fn root(&self) -> NodeId {
        self.root
    }

    /// Get a node by ID.
    #[inline]
    #[must_use]
    pub fn get(&self, id: NodeId) -> &MCTSNode {
        &self.nodes[id.0 as usize]
    }

    /// Get a mutable node by ID.
    #[inline]
    pub fn get_mut(&mut self, id: NodeId) -> &mut MCTSNode {
        &mut self.nodes[id.0 as usize]
    }

    /// Number of nodes in the tree.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Check if the tree is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Expand one child of `id`: pop a uniformly random untried move, apply
    /// it to a clone of the node's state, and allocate the child.
    ///
    /// Returns `None` when no untried moves remain.
    pub fn expand(&mut self, id: NodeId, rng: &mut GameRng) -> Option<NodeId> {
        let (col, child_state, depth) = {
            let node = self.get_mut(id);
            let untried = node.untried_moves();
            if untried.is_empty() {
                return None;
            }
            let idx = rng.gen_range_usize(0..untried.len());
            let col = untried.swap_remove(idx);

            let mut child_state = node.state;
            child_state
                .apply_move(col)
                .expect("untried move came from legal_moves");
            (col, child_state, node.depth + 1)
        };

        let child_id = NodeId::new(self.nodes.len() as u32);
        self.nodes
            .push(MCTSNode::new(child_state, id, Some(col), depth));
        self.get_mut(id).children.push(child_id);
        Some(child_id)
    }

    /// The child of `id` with the best UCT score.
    ///
    /// Ties break to the first maximum in child-insertion order. Insertion
    /// order is randomized by expansion, so tie-breaking inherits that
    /// randomness rather than favoring low columns.
    #[must_use]
    pub fn best_child(&self, id: NodeId, c_param: f64) -> Option<NodeId> {
        let node = self.get(id);
        let parent_visits = node.visits;

        let mut best: Option<(NodeId, f64)> = None;
        for &child_id in &node.children {
            let score = self.get(child_id).uct_score(parent_visits, c_param);
            match best {
                Some((_, best_score)) if score <= best_score => {}
                _ => best = Some((child_id, score)),
            }
        }
        best.map(|(id, _)| id)
    }

    /// The child of `id` with the most visits, first maximum winning ties.
    #[must_use]
    pub fn most_visited_child(&self, id: NodeId) -> Option<NodeId> {
        let node = self.get(id);

        let mut best: Option<(NodeId, u32)> = None;
        for &child_id in &node.children {
            let visits = self.get(child_id).visits;
            match best {
                Some((_, best_visits)) if visits <= best_visits => {}
                _ => best = Some((child_id, visits)),
            }
        }
        best.map(|(id, _)| id)
    }

    /// Get statistics about the tree.
    #[must_use]
    pub fn stats(&self) -> TreeStats {
        let max_depth = self.nodes.iter().map(|n| n.depth).max().unwrap_or(0);
        let total_children: usize = self.nodes.iter().map(|n| n.children.len()).sum();

        TreeStats {
            node_count: self.nodes.len(),
            max_depth,
            total_children,
        }
    }

    /// Iterate over all nodes.
    pub fn iter(&self) -> impl Iterator<Item = (NodeId, &MCTSNode)> {
        self.nodes
            .iter()
            .enumerate()
            .map(|(i, n)| (NodeId::new(i as u32), n))
    }
}

/// Statistics about the MCTS tree.
#[derive(Clone, Copy, Debug, Default)]
pub struct TreeStats {
    /// Total number of nodes.
    pub node_count: usize,

    /// Maximum depth reached.
    pub max_depth: u16,

    /// Total parent→child links.
    pub total_children: usize,
}

impl TreeStats {
    /// Average children per node.
    #[must_use]
    pub fn branching_factor(&self) -> f64 {
        if self.node_count == 0 {
            0.0
        } else {
            self.total_children as f64 / self.node_count as f64
        }
    }
}
