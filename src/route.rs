use crate::{DistanceMatrix, Grid};

const UNSET: i32 = i32::MAX;

/// Fill the subset table: `table[mask * k + i]` is the length of the
/// cheapest route that leaves the start, visits exactly the checkpoints
/// in `mask` and is currently standing on checkpoint `i`.
///
/// Masks are processed in ascending numeric order. Since `mask` with bit
/// `i` removed is always numerically smaller than `mask`, every entry a
/// transition reads has already been filled. Entries with `i` outside
/// `mask` stay at `UNSET` and are never read.
fn route_table(matrix: &DistanceMatrix) -> Vec<i32> {
    let k = matrix.checkpoint_count();
    let start = matrix.start_id();
    let masks = 1usize << k;

    let mut table = vec![UNSET; masks * k];
    for mask in 1..masks {
        for i in 0..k {
            if mask & (1 << i) == 0 {
                continue;
            }
            let rest = mask & !(1 << i);

            // First leg straight out of the start.
            if rest == 0 {
                table[mask * k + i] = matrix.get(start, i);
                continue;
            }

            let mut best = UNSET;
            for j in 0..k {
                if rest & (1 << j) == 0 {
                    continue;
                }
                best = best.min(table[rest * k + j] + matrix.get(j, i));
            }
            table[mask * k + i] = best;
        }
    }
    table
}

/// The length of the shortest route from the start through every
/// checkpoint to the goal, given a fully built [DistanceMatrix].
///
/// Exact bitmask dynamic programming over checkpoint subsets, O(k²·2^k).
/// Exponential in the checkpoint count, which the problem bounds small
/// (around 18); exact beats approximate at that size. A built matrix has
/// no unreachable pairs, so the result is always finite.
pub fn solve_route(matrix: &DistanceMatrix) -> i32 {
    let k = matrix.checkpoint_count();
    if k == 0 {
        return matrix.start_to_goal();
    }

    let table = route_table(matrix);
    let goal = matrix.goal_id();
    let full = (1usize << k) - 1;

    (0..k)
        .map(|i| table[full * k + i] + matrix.get(i, goal))
        .min()
        .unwrap_or(UNSET)
}

/// Solve a whole course: extract the points of interest, build the
/// distance matrix and run the route solver.
///
/// Returns `None` when the start or goal marker is missing or when any
/// required pair of points is disconnected. With no checkpoints the
/// answer is the direct start-to-goal distance and the solver is
/// bypassed entirely.
pub fn solve(grid: &Grid) -> Option<i32> {
    let poi = grid.points_of_interest()?;
    let matrix = DistanceMatrix::build(grid, &poi)?;

    if matrix.checkpoint_count() == 0 {
        return Some(matrix.start_to_goal());
    }
    Some(solve_route(&matrix))
}
