use ahash::RandomState;
use glam::IVec2;
use std::collections::{hash_map::Entry, HashMap, HashSet};

use crate::{min_heap::MinHeap, Grid};

/// The heuristic used for all queries: euclidean distance truncated toward
/// zero.
///
/// Truncation keeps the estimate at or below the true 4-connected
/// distance, so A* stays optimal. On a unit-cost grid the truncated value
/// is also consistent, which lets finalized cells be skipped outright.
#[inline]
pub fn heuristic(a: IVec2, b: IVec2) -> i32 {
    (a - b).as_vec2().length() as i32
}

/// Computes shortest open-path distances between grid cells.
///
/// Maintains internal state so it can be re-used to avoid allocations.
/// The buffers are cleared at the start of every query; `&mut self`
/// guarantees no two in-flight queries can ever share them, which matters
/// because heuristic values are specific to each query's target.
///
/// # Example
/// ```rust
/// use orienteering::*;
///
/// let grid = Grid::from_rows(&["S..", ".#.", "..G"], 3, 3).unwrap();
/// let mut pf = Pathfinder::new();
///
/// assert_eq!(Some(4), pf.distance(&grid, [0, 0], [2, 2]));
/// ```
#[derive(Default)]
pub struct Pathfinder {
    frontier: MinHeap,
    costs: HashMap<IVec2, i32, RandomState>,
    closed: HashSet<IVec2, RandomState>,
}

impl Pathfinder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new pathfinder.
    ///
    /// The `len` parameter determines the initial size of the internal
    /// containers. These containers will grow as needed when running the
    /// search, but setting a reasonable initial size could avoid
    /// performance issues from excessive allocations.
    pub fn with_capacity(len: usize) -> Self {
        Self {
            frontier: MinHeap::with_capacity(len / 4),
            costs: HashMap::with_capacity_and_hasher(len / 4, RandomState::default()),
            closed: HashSet::with_capacity_and_hasher(len / 4, RandomState::default()),
        }
    }

    /// The length of the shortest 4-connected path between two cells, or
    /// `None` if no path exists. A cell is always reachable from itself,
    /// so `from == to` yields `Some(0)`, never `None`.
    ///
    /// Both endpoints must be in-bounds, non-wall cells; the caller is
    /// responsible for never querying to or from a wall.
    pub fn distance(
        &mut self,
        grid: &Grid,
        from: impl Into<IVec2>,
        to: impl Into<IVec2>,
    ) -> Option<i32> {
        self.clear();
        let from = from.into();
        let to = to.into();

        let h = heuristic(from, to);
        self.frontier.push(from, h, h);
        self.costs.insert(from, 0);

        while let Some(curr) = self.frontier.pop() {
            // A duplicate of a cell that was already finalized.
            if self.closed.contains(&curr) {
                continue;
            }

            let curr_cost = self.costs[&curr];

            if curr == to {
                return Some(curr_cost);
            }

            self.closed.insert(curr);

            for next in grid.exits(curr) {
                if self.closed.contains(&next) {
                    continue;
                }

                let new_cost = curr_cost + 1;
                match self.costs.entry(next) {
                    Entry::Occupied(mut entry) => {
                        if new_cost >= *entry.get() {
                            continue;
                        }
                        entry.insert(new_cost);
                    }
                    Entry::Vacant(entry) => {
                        entry.insert(new_cost);
                    }
                }

                let h = heuristic(next, to);
                self.frontier.push(next, new_cost + h, h);
            }
        }

        None
    }

    /// Clear internal data.
    pub fn clear(&mut self) {
        self.frontier.clear();
        self.costs.clear();
        self.closed.clear();
    }

    /// An iterator over all cells enqueued at least once during the last
    /// query.
    pub fn visited(&self) -> impl Iterator<Item = &IVec2> {
        self.costs.keys()
    }
}

/// One-shot version of [Pathfinder::distance] that allocates fresh
/// search state for the query.
pub fn shortest_distance(
    grid: &Grid,
    from: impl Into<IVec2>,
    to: impl Into<IVec2>,
) -> Option<i32> {
    Pathfinder::new().distance(grid, from, to)
}
