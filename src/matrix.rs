use glam::IVec2;

use crate::{grid::PointsOfInterest, Grid, Pathfinder};

/// Pairwise shortest distances between every point of interest.
///
/// Points are identified by index: `0..k` are the checkpoints in the
/// order they were extracted, followed by the start and then the goal.
/// The matrix is symmetric with a zero diagonal and contains no
/// unreachable entries; when any required pair has no connecting path,
/// [DistanceMatrix::build] reports the whole problem unsolvable instead.
pub struct DistanceMatrix {
    dists: Vec<i32>,
    size: usize,
}

impl DistanceMatrix {
    /// Build the matrix by running one A* query per unordered pair of
    /// points. Returns `None` as soon as any pair turns out to be
    /// unreachable, since a single disconnected point of interest makes
    /// the course unsolvable.
    pub fn build(grid: &Grid, poi: &PointsOfInterest) -> Option<Self> {
        let mut points: Vec<IVec2> = poi.checkpoints.clone();
        points.push(poi.start);
        points.push(poi.goal);

        let size = points.len();
        let mut dists = vec![0; size * size];
        let mut pf = Pathfinder::with_capacity(grid.tile_count());

        for i in 0..size {
            for j in i + 1..size {
                let d = pf.distance(grid, points[i], points[j])?;
                dists[i * size + j] = d;
                dists[j * size + i] = d;
            }
        }

        Some(Self { dists, size })
    }

    /// The distance between points `i` and `j`.
    #[inline]
    pub fn get(&self, i: usize, j: usize) -> i32 {
        self.dists[i * self.size + j]
    }

    /// The number of checkpoints covered by the matrix.
    pub fn checkpoint_count(&self) -> usize {
        self.size - 2
    }

    pub fn start_id(&self) -> usize {
        self.size - 2
    }

    pub fn goal_id(&self) -> usize {
        self.size - 1
    }

    /// The direct start-to-goal distance, which is the whole answer when
    /// there are no checkpoints.
    pub fn start_to_goal(&self) -> i32 {
        self.get(self.start_id(), self.goal_id())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn build(rows: &[&str]) -> Option<DistanceMatrix> {
        let grid = Grid::from_rows(rows, rows[0].len(), rows.len()).unwrap();
        let poi = grid.points_of_interest().unwrap();
        DistanceMatrix::build(&grid, &poi)
    }

    #[test]
    fn symmetric_with_zero_diagonal() {
        let matrix = build(&["S.@", "...", "@.G"]).unwrap();

        assert_eq!(4, matrix.size);
        for i in 0..4 {
            assert_eq!(0, matrix.get(i, i));
            for j in 0..4 {
                assert_eq!(matrix.get(i, j), matrix.get(j, i));
            }
        }

        // Checkpoints first, then start, then goal.
        assert_eq!(2, matrix.checkpoint_count());
        assert_eq!(2, matrix.get(matrix.start_id(), 0));
        assert_eq!(2, matrix.get(matrix.start_id(), 1));
        assert_eq!(4, matrix.start_to_goal());
    }

    #[test]
    fn walled_off_checkpoint_fails_globally() {
        assert!(build(&["S.#@", "..#.", "G.#."]).is_none());
    }

    #[test]
    fn no_checkpoints() {
        let matrix = build(&["S...G"]).unwrap();

        assert_eq!(0, matrix.checkpoint_count());
        assert_eq!(4, matrix.start_to_goal());
    }
}
