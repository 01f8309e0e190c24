use std::collections::VecDeque;

use gridwalk_core::{Point, Range};
use log::debug;

use crate::error::GridError;
use crate::grid::{Cell, Grid};
use crate::neighbors::Connectivity;
use crate::path::Path;

/// Sentinel hop count for cells not reached by [`UnweightedSearch::distance_map`].
pub const UNREACHABLE: i32 = i32::MAX;

const NO_PARENT: usize = usize::MAX;

/// A cell reached by [`UnweightedSearch::distance_map`] and its hop count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HopNode {
    pub pos: Point,
    pub hops: i32,
}

/// Breadth-first search over a [`Grid`], terminated by a caller predicate.
///
/// Every step costs one hop and cell walkability is ignored: the search
/// answers "which is the nearest cell matching X", not "how do I walk
/// there". Like [`WeightedSearch`](crate::WeightedSearch), the searcher owns
/// its visited marks and queue and invalidates them per call with a
/// generation counter.
#[derive(Debug)]
pub struct UnweightedSearch {
    connectivity: Connectivity,
    visited: Vec<u32>,
    parent: Vec<usize>,
    generation: u32,
    queue: VecDeque<usize>,
    // distance map caches
    map_bounds: Range,
    map: Vec<i32>,
    map_results: Vec<HopNode>,
}

impl Default for UnweightedSearch {
    fn default() -> Self {
        Self::new()
    }
}

impl UnweightedSearch {
    /// Create a searcher using 8-way movement.
    pub fn new() -> Self {
        Self {
            connectivity: Connectivity::default(),
            visited: Vec::new(),
            parent: Vec::new(),
            generation: 0,
            queue: VecDeque::new(),
            map_bounds: Range::default(),
            map: Vec::new(),
            map_results: Vec::new(),
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

    /// Find the fewest-hop path from `start` to the nearest cell for which
    /// `predicate` holds.
    ///
    /// The path includes `start` and ends at the matching cell. If `start`
    /// itself matches, the path is `[start]`. An empty path means no
    /// reachable cell matches.
    pub fn find_path(
        &mut self,
        grid: &Grid,
        start: Point,
        mut predicate: impl FnMut(Point, Cell) -> bool,
    ) -> Result<Path, GridError> {
        let start_idx = grid.check(start)?;
        self.prepare(grid.len());
        let cur_gen = self.generation;

        self.visited[start_idx] = cur_gen;
        self.parent[start_idx] = NO_PARENT;
        self.queue.push_back(start_idx);

        let bounds = grid.bounds();
        let mut dequeued = 0usize;
        while let Some(ci) = self.queue.pop_front() {
            dequeued += 1;
            let current = grid.point(ci);
            if predicate(current, grid.at_index(ci)) {
                self.queue.clear();
                let path = self.retrace(grid, ci);
                debug!(
                    "bfs: {start} -> {current} in {} hops, {dequeued} cells dequeued",
                    path.cost()
                );
                return Ok(path);
            }

            for next in self.connectivity.neighbors(current, bounds) {
                let ni = grid.index(next);
                if self.visited[ni] == cur_gen {
                    continue;
                }
                self.visited[ni] = cur_gen;
                self.parent[ni] = ci;
                self.queue.push_back(ni);
            }
        }

        debug!("bfs: no match reachable from {start}, {dequeued} cells dequeued");
        Ok(Path::default())
    }

    /// Compute a multi-source hop-count map.
    ///
    /// Sources start at 0 and are always part of the result, even when
    /// `max_hops` is negative or `passable` rejects them. A neighbour is
    /// entered only when `passable` accepts it, and no cell is given more
    /// than `max_hops` hops, so any `max_hops <= 0` yields just the
    /// deduplicated sources. Returns every reached cell in discovery order;
    /// query single cells afterwards with [`distance_at`](Self::distance_at).
    pub fn distance_map(
        &mut self,
        grid: &Grid,
        sources: &[Point],
        max_hops: i32,
        mut passable: impl FnMut(Point, Cell) -> bool,
    ) -> Result<&[HopNode], GridError> {
        let source_idx = sources
            .iter()
            .map(|&p| grid.check(p))
            .collect::<Result<Vec<_>, _>>()?;

        self.map_bounds = grid.bounds();
        self.map.clear();
        self.map.resize(grid.len(), UNREACHABLE);
        self.map_results.clear();
        self.queue.clear();

        for (&src, si) in sources.iter().zip(source_idx) {
            if self.map[si] != UNREACHABLE {
                continue;
            }
            self.map[si] = 0;
            self.queue.push_back(si);
            self.map_results.push(HopNode { pos: src, hops: 0 });
        }

        while let Some(ci) = self.queue.pop_front() {
            let hops = self.map[ci] + 1;
            if hops > max_hops {
                continue;
            }
            let current = grid.point(ci);
            for next in self.connectivity.neighbors(current, self.map_bounds) {
                let ni = grid.index(next);
                if self.map[ni] != UNREACHABLE || !passable(next, grid.at_index(ni)) {
                    continue;
                }
                self.map[ni] = hops;
                self.queue.push_back(ni);
                self.map_results.push(HopNode { pos: next, hops });
            }
        }

        debug!(
            "bfs: distance map from {} sources reached {} cells",
            sources.len(),
            self.map_results.len()
        );
        Ok(&self.map_results)
    }

    /// Hop count at `p` from the last [`distance_map`](Self::distance_map)
    /// call, or [`UNREACHABLE`].
    pub fn distance_at(&self, p: Point) -> i32 {
        if !self.map_bounds.contains(p) {
            return UNREACHABLE;
        }
        let width = self.map_bounds.width() as usize;
        self.map[p.y as usize * width + p.x as usize]
    }

    fn retrace(&self, grid: &Grid, end: usize) -> Path {
        let mut steps = Vec::new();
        let mut ci = end;
        while ci != NO_PARENT {
            steps.push(grid.point(ci));
            ci = self.parent[ci];
        }
        steps.reverse();
        let hops = steps.len() - 1;
        Path::new(steps, hops as f64)
    }

    fn prepare(&mut self, len: usize) {
        if self.visited.len() < len {
            self.visited.resize(len, 0);
            self.parent.resize(len, NO_PARENT);
        }
        self.generation = self.generation.wrapping_add(1);
        if self.generation == 0 {
            self.visited.fill(0);
            self.generation = 1;
        }
        self.queue.clear();
    }
}
