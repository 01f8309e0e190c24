use gridwalk_core::Point;
use log::{debug, trace};

use crate::distance::euclidean;
use crate::error::GridError;
use crate::frontier::Frontier;
use crate::grid::Grid;
use crate::neighbors::Connectivity;
use crate::path::Path;

const NO_PARENT: usize = usize::MAX;

/// Per-cell A* bookkeeping, valid only while `generation` matches the
/// searcher's current generation.
#[derive(Clone, Debug)]
struct Node {
    g: f64,
    h: f64,
    parent: usize,
    generation: u32,
    closed: bool,
}

impl Default for Node {
    fn default() -> Self {
        Self {
            g: 0.0,
            h: 0.0,
            parent: NO_PARENT,
            generation: 0,
            closed: false,
        }
    }
}

/// Lowest-cost path search (A*) over a [`Grid`] with per-cell movement
/// penalties.
///
/// The searcher owns its node array and open set and reuses them between
/// calls; a generation counter invalidates the previous call's state, so
/// nothing leaks from one search into the next.
///
/// Step cost is the Euclidean distance between cells. Entering a cell adds
/// its `move_penalty` to both the accumulated cost and the heuristic of that
/// cell, which makes the heuristic inadmissible once penalties differ across
/// the grid: paths stay valid but are not guaranteed optimal there.
#[derive(Debug)]
pub struct WeightedSearch {
    connectivity: Connectivity,
    nodes: Vec<Node>,
    generation: u32,
    frontier: Frontier,
    expanded: usize,
}

impl Default for WeightedSearch {
    fn default() -> Self {
        Self::new()
    }
}

impl WeightedSearch {
    /// Create a searcher using 8-way movement.
    pub fn new() -> Self {
        Self {
            connectivity: Connectivity::default(),
            nodes: Vec::new(),
            generation: 0,
            frontier: Frontier::new(),
            expanded: 0,
        }
    }

    /// Use the given neighbour connectivity for subsequent searches.
    #[must_use]
    pub fn with_connectivity(mut self, connectivity: Connectivity) -> Self {
        self.connectivity = connectivity;
        self
    }

    #[inline]
    pub fn connectivity(&self) -> Connectivity {
        self.connectivity
    }

    /// Number of cells closed by the most recent search.
    #[inline]
    pub fn last_expanded(&self) -> usize {
        self.expanded
    }

    /// Compute the lowest-cost path from `start` to `goal`.
    ///
    /// Returns `Ok(None)` when the goal cannot be reached. The returned path
    /// excludes `start` and ends at `goal`; when `start == goal` it is empty.
    pub fn find_path(
        &mut self,
        grid: &Grid,
        start: Point,
        goal: Point,
    ) -> Result<Option<Path>, GridError> {
        self.find_path_with(grid, start, goal, |_, _| true)
    }

    /// Like [`find_path`](Self::find_path), but a move from one cell to an
    /// adjacent one is only considered when `can_step(from, to)` holds.
    pub fn find_path_with(
        &mut self,
        grid: &Grid,
        start: Point,
        goal: Point,
        mut can_step: impl FnMut(Point, Point) -> bool,
    ) -> Result<Option<Path>, GridError> {
        let start_idx = grid.check(start)?;
        let goal_idx = grid.check(goal)?;

        self.prepare(grid.len());

        if start_idx == goal_idx {
            debug!("astar: start {start} is the goal");
            return Ok(Some(Path::default()));
        }
        if !grid.at_index(goal_idx).walkable {
            debug!("astar: goal {goal} is not walkable");
            return Ok(None);
        }

        let cur_gen = self.generation;
        {
            let node = &mut self.nodes[start_idx];
            node.g = 0.0;
            node.h = euclidean(start, goal);
            node.parent = NO_PARENT;
            node.generation = cur_gen;
            node.closed = false;
            self.frontier.push_or_update(start_idx, node.g + node.h, node.h);
        }

        let bounds = grid.bounds();
        let found = 'search: loop {
            let Some(ci) = self.frontier.pop() else {
                break 'search false;
            };
            self.nodes[ci].closed = true;
            self.expanded += 1;

            if ci == goal_idx {
                break 'search true;
            }

            let current = grid.point(ci);
            let current_g = self.nodes[ci].g;
            trace!("astar: expand {current} g={current_g:.3}");

            for next in self.connectivity.neighbors(current, bounds) {
                let ni = grid.index(next);
                let cell = grid.at_index(ni);
                if !cell.walkable {
                    continue;
                }
                let node = &mut self.nodes[ni];
                let seen = node.generation == cur_gen;
                if seen && node.closed {
                    continue;
                }
                if !can_step(current, next) {
                    continue;
                }

                // The penalty-free tentative cost is compared against the
                // stored, penalty-inclusive cost.
                let tentative = current_g + euclidean(current, next);
                if seen && self.frontier.contains(ni) && tentative >= node.g {
                    continue;
                }

                let penalty = f64::from(cell.move_penalty);
                node.generation = cur_gen;
                node.closed = false;
                node.g = tentative + penalty;
                node.h = euclidean(next, goal) + penalty;
                node.parent = ci;
                self.frontier.push_or_update(ni, node.g + node.h, node.h);
            }
        };

        if !found {
            debug!(
                "astar: {start} -> {goal} unreachable after expanding {} cells",
                self.expanded
            );
            return Ok(None);
        }

        let mut steps = Vec::new();
        let mut ci = goal_idx;
        while ci != start_idx {
            steps.push(grid.point(ci));
            ci = self.nodes[ci].parent;
        }
        steps.reverse();

        let cost = self.nodes[goal_idx].g;
        debug!(
            "astar: {start} -> {goal} found {} steps, cost {cost:.3}, expanded {} cells, {} left open",
            steps.len(),
            self.expanded,
            self.frontier.len()
        );
        Ok(Some(Path::new(steps, cost)))
    }

    /// Invalidate the previous call's state and size caches for `len` cells.
    fn prepare(&mut self, len: usize) {
        if self.nodes.len() < len {
            self.nodes.resize(len, Node::default());
        }
        self.generation = self.generation.wrapping_add(1);
        if self.generation == 0 {
            for n in self.nodes.iter_mut() {
                n.generation = 0;
            }
            self.generation = 1;
        }
        self.frontier.reset(len);
        self.expanded = 0;
    }
}
