//! MCTS node structure.
//!
//! Uses arena-based allocation with index references (NodeId): the tree owns
//! every node in a flat vector, and the parent link is a non-owning index
//! rather than a pointer, so the parent→child and child→parent directions
//! never form an ownership cycle.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{GameState, MoveList, COLS};

/// Index into the MCTSTree node arena.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NodeId(pub u32);

impl NodeId {
    /// Sentinel value representing no node.
    pub const NONE: NodeId = NodeId(u32::MAX);

    /// Create a new node ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Check if this is the NONE sentinel.
    #[inline]
    #[must_use]
    pub const fn is_none(self) -> bool {
        self.0 == u32::MAX
    }

    /// Get the raw index value.
    #[inline]
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for NodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_none() {
            write!(f, "NodeId(NONE)")
        } else {
            write!(f, "NodeId({})", self.0)
        }
    }
}

/// A node in the MCTS tree: one reachable position plus its statistics.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct MCTSNode {
    /// Position this node represents.
    pub state: GameState,

    /// Parent node (NONE for root).
    pub parent: NodeId,

    /// Column that produced this node from the parent (None for root).
    pub move_col: Option<usize>,

    /// Children, in the order they were expanded.
    pub children: SmallVec<[NodeId; COLS]>,

    /// Legal moves not yet turned into children. `None` until first asked
    /// for; thereafter the same shrinking list.
    untried: Option<MoveList>,

    /// Depth in tree (root = 0). Bounded by the 42 cells of the board.
    pub depth: u16,

    /// Times this node appeared on a backpropagation path.
    pub visits: u32,

    /// Accumulated reward: +1.0 per win for the player who moved into this
    /// node, +0.5 per draw.
    pub wins: f64,
}

impl MCTSNode {
    /// Create a new node.
    pub fn new(state: GameState, parent: NodeId, move_col: Option<usize>, depth: u16) -> Self {
        Self {
            state,
            parent,
            move_col,
            children: SmallVec::new(),
            untried: None,
            depth,
            visits: 0,
            wins: 0.0,
        }
    }

    /// Create a root node.
    pub fn root(state: GameState) -> Self {
        Self::new(state, NodeId::NONE, None, 0)
    }

    /// The untried-move list, lazily initialized from the state's legal
    /// moves on first access. Expansion pops from this list.
    pub fn untried_moves(&mut self) -> &mut MoveList {
        let state = self.state;
        self.untried.get_or_insert_with(|| state.legal_moves())
    }

    /// Check if every legal move has already produced a child.
    ///
    /// Initializes the untried list if it has not been computed yet.
    #[must_use]
    pub fn is_fully_expanded(&mut self) -> bool {
        self.untried_moves().is_empty()
    }

    /// Mean reward per visit. Only meaningful once visited.
    #[must_use]
    pub fn mean_reward(&self) -> f64 {
        if self.visits == 0 {
            0.0
        } else {
            self.wins / self.visits as f64
        }
    }

    /// UCT score of this node as a child of a parent with `parent_visits`
    /// visits.
    ///
    /// `wins / visits + c * sqrt(2 * ln(parent_visits) / visits)`.
    /// Requires `visits > 0`; selection only scores children of fully
    /// expanded nodes, every one of which has been visited at least once.
    #[must_use]
    pub fn uct_score(&self, parent_visits: u32, c_param: f64) -> f64 {
        debug_assert!(self.visits > 0, "UCT scored an unvisited node");
        let exploitation = self.wins / self.visits as f64;
        let exploration =
            c_param * (2.0 * (parent_visits as f64).ln() / self.visits as f64).sqrt();
        exploitation + exploration
    }
}
