//! The A* search loop.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use rustc_hash::FxHashMap;

use rr_core::{GraphModel, GraphResult, NodeId};

use crate::error::{PlanError, PlanResult};
use crate::path::{PathNode, RoutePath};
use crate::state::{NodeState, OpenEntry};

/// Point-to-point A* planner over a shared, immutable graph model.
///
/// Endpoints are fixed at construction by snapping the given coordinates to
/// their nearest graph nodes; [`search`](Self::search) may then be called any
/// number of times.  All per-search state lives inside the planner, so
/// concurrent planners can share one graph without synchronization.
///
/// # Search behavior
///
/// The frontier is ordered by `g + h`, where `h` is the straight-line
/// distance to the end node — an admissible estimate on road graphs.  Each
/// node is committed to its first discovered cost: once a node enters the
/// open set it is never re-opened with a cheaper path.  This keeps the open
/// set duplicate-free and the loop allocation-light, at the cost of
/// occasionally preferring the first-found route over a marginally shorter
/// one when several near-equal routes exist.
///
/// A failed neighbor discovery does not abort the run: the failure is logged
/// at `warn` level and the search continues on the remaining frontier, which
/// may end in [`PlanError::NoPath`] if the failure cut off the only route.
pub struct RoutePlanner<'g, M: GraphModel> {
    model: &'g M,
    start: NodeId,
    end: NodeId,
    /// Per-search annotations, keyed by node.  Cleared on every `search()`.
    state: FxHashMap<NodeId, NodeState>,
    /// Frontier, min-first by `f = g + h` (ties: ascending `NodeId`).
    open: BinaryHeap<Reverse<OpenEntry>>,
}

impl<'g, M: GraphModel> RoutePlanner<'g, M> {
    /// Create a planner for a route between two map positions.
    ///
    /// Coordinates are **percentages of the map extent** (0–100 on each
    /// axis); they are normalized to map fractions and snapped to the
    /// nearest graph node.
    ///
    /// # Errors
    ///
    /// [`PlanError::EmptyGraph`] if the model has no node to snap to.
    pub fn new(
        model: &'g M,
        start_x: f32,
        start_y: f32,
        end_x: f32,
        end_y: f32,
    ) -> PlanResult<Self> {
        // Convert percentage inputs to map fractions.
        let start = model
            .closest_node(start_x * 0.01, start_y * 0.01)
            .ok_or(PlanError::EmptyGraph)?;
        let end = model
            .closest_node(end_x * 0.01, end_y * 0.01)
            .ok_or(PlanError::EmptyGraph)?;

        Ok(Self {
            model,
            start,
            end,
            state: FxHashMap::default(),
            open: BinaryHeap::new(),
        })
    }

    /// The node the start coordinate snapped to.
    pub fn start_node(&self) -> NodeId {
        self.start
    }

    /// The node the end coordinate snapped to.
    pub fn end_node(&self) -> NodeId {
        self.end
    }

    /// Run the search and return the path from start to end.
    ///
    /// # Errors
    ///
    /// [`PlanError::NoPath`] if the end node is unreachable (the frontier
    /// drained first), [`PlanError::BrokenParentChain`] if reconstruction
    /// hits inconsistent bookkeeping.
    pub fn search(&mut self) -> PlanResult<RoutePath> {
        self.seed_start();

        let mut current = self.start;
        while current != self.end {
            if let Err(err) = self.add_neighbors(current) {
                log::warn!("expansion of {current} failed: {err}; continuing without it");
            }
            current = self.next_node().ok_or(PlanError::NoPath {
                from: self.start,
                to: self.end,
            })?;
        }

        self.construct_final_path(current)
    }

    /// Reset per-search state and mark the start node visited.
    pub(crate) fn seed_start(&mut self) {
        self.state.clear();
        self.open.clear();
        self.state.insert(
            self.start,
            NodeState {
                visited: true,
                g: 0.0,
                h: self.h_value(self.start),
                parent: NodeId::INVALID,
            },
        );
    }

    /// Straight-line distance from `node` to the end node.
    fn h_value(&self, node: NodeId) -> f32 {
        self.model.distance(node, self.end)
    }

    /// Expand `current`: discover its neighbors and push every unvisited one
    /// onto the open set with its tentative cost and parent link.
    ///
    /// Marking a neighbor visited at discovery is the duplicate guard: each
    /// node enters the open set at most once.
    pub(crate) fn add_neighbors(&mut self, current: NodeId) -> GraphResult<()> {
        let neighbors = self.model.neighbors(current)?;
        let current_g = self.state.get(&current).map_or(0.0, |s| s.g);

        for neighbor in neighbors {
            if self.state.get(&neighbor).is_some_and(|s| s.visited) {
                continue;
            }
            let h = self.h_value(neighbor);
            let g = current_g + self.model.distance(current, neighbor);
            self.state.insert(
                neighbor,
                NodeState { visited: true, g, h, parent: current },
            );
            self.open.push(Reverse(OpenEntry { f: g + h, node: neighbor }));
        }
        Ok(())
    }

    /// Remove and return the open-set node with the lowest `g + h`, or
    /// `None` if the frontier is exhausted.
    pub(crate) fn next_node(&mut self) -> Option<NodeId> {
        self.open.pop().map(|Reverse(entry)| entry.node)
    }

    #[cfg(test)]
    pub(crate) fn open_len(&self) -> usize {
        self.open.len()
    }

    /// Walk the parent chain backward from `end`, then reverse so the start
    /// node comes first.  Distance is accumulated per hop in map units and
    /// scaled to metres at the end.
    fn construct_final_path(&self, end: NodeId) -> PlanResult<RoutePath> {
        let mut nodes = Vec::new();
        let mut raw_distance = 0.0f32;

        // A well-formed chain steps through each discovered node at most
        // once; anything longer is a cycle.
        let max_hops = self.state.len();
        let mut hops = 0usize;

        let mut current = end;
        while current != self.start {
            let state = self
                .state
                .get(&current)
                .ok_or(PlanError::BrokenParentChain { node: current })?;
            if state.parent == NodeId::INVALID || hops >= max_hops {
                return Err(PlanError::BrokenParentChain { node: current });
            }

            nodes.push(self.copy_node(current));
            raw_distance += self.model.distance(current, state.parent);
            current = state.parent;
            hops += 1;
        }
        nodes.push(self.copy_node(self.start));
        nodes.reverse();

        Ok(RoutePath {
            nodes,
            distance_m: raw_distance * self.model.metric_scale(),
        })
    }

    fn copy_node(&self, id: NodeId) -> PathNode {
        PathNode { id, position: self.model.position(id) }
    }
}
