use std::{error, fmt::Display};

use arrayvec::{ArrayVec, IntoIter};
use glam::{IVec2, UVec2};

/// Probe order for the four cardinal neighbors of a cell.
pub const ADJACENT_4_WAY: [[i32; 2]; 4] = [
    [ 0,-1],
    [ 1, 0],
    [ 0, 1],
    [-1, 0],
];

/// What occupies a single grid cell.
///
/// Derived once from the input characters and never changed afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Terrain {
    Open,
    Wall,
    Checkpoint,
    Start,
    Goal,
}

impl Terrain {
    /// Map an input character to a terrain kind. `#` is a wall, `@` a
    /// checkpoint, `S` the start, `G` the goal. Any other character is
    /// open ground.
    pub fn from_char(c: char) -> Terrain {
        match c {
            '#' => Terrain::Wall,
            '@' => Terrain::Checkpoint,
            'S' => Terrain::Start,
            'G' => Terrain::Goal,
            _ => Terrain::Open,
        }
    }

    pub fn is_wall(&self) -> bool {
        matches!(self, Terrain::Wall)
    }
}

/// Error raised when the input rows don't match the declared dimensions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    RowCountMismatch { expected: usize, found: usize },
    RowWidthMismatch { row: usize, expected: usize, found: usize },
}

impl Display for GridError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GridError::RowCountMismatch { expected, found } => {
                write!(f, "Expected {} rows, given {}.", expected, found)
            }
            GridError::RowWidthMismatch {
                row,
                expected,
                found,
            } => write!(
                f,
                "Expected {} cells in row {}, given {}.",
                expected, row, found
            ),
        }
    }
}

impl error::Error for GridError {}

/// Points a route must connect: the start, the goal and every checkpoint.
#[derive(Debug, Clone)]
pub struct PointsOfInterest {
    pub checkpoints: Vec<IVec2>,
    pub start: IVec2,
    pub goal: IVec2,
}

/// An immutable 2d grid of [Terrain] cells.
///
/// Built once from input rows and never mutated, so it can be read from
/// any number of concurrent queries without locking. Positions are
/// `[x, y]` where `x` is the column and `y` the row.
///
/// # Example
/// ```rust
/// use orienteering::*;
///
/// let grid = Grid::from_rows(&["S.@", "###", "..G"], 3, 3).unwrap();
///
/// assert_eq!(Terrain::Checkpoint, grid.terrain([2, 0]));
/// assert!(grid.terrain([1, 1]).is_wall());
/// ```
#[derive(Debug)]
pub struct Grid {
    terrain: Vec<Terrain>,
    size: UVec2,
}

impl Grid {
    /// Build a grid from `height` rows of `width` characters each.
    ///
    /// Fails if the row count or any row length disagrees with the
    /// declared dimensions.
    pub fn from_rows(
        rows: &[impl AsRef<str>],
        width: usize,
        height: usize,
    ) -> Result<Self, GridError> {
        if rows.len() != height {
            return Err(GridError::RowCountMismatch {
                expected: height,
                found: rows.len(),
            });
        }

        let mut terrain = Vec::with_capacity(width * height);
        for (y, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            let len = row.chars().count();
            if len != width {
                return Err(GridError::RowWidthMismatch {
                    row: y,
                    expected: width,
                    found: len,
                });
            }
            terrain.extend(row.chars().map(Terrain::from_char));
        }

        Ok(Self {
            terrain,
            size: UVec2::new(width as u32, height as u32),
        })
    }

    /// The terrain at a given position. The caller guarantees the
    /// position is in bounds.
    pub fn terrain(&self, xy: impl Into<IVec2>) -> Terrain {
        self.terrain[self.to_index(xy.into())]
    }

    pub fn to_index(&self, xy: IVec2) -> usize {
        xy.y as usize * self.width() + xy.x as usize
    }

    pub fn in_bounds(&self, xy: IVec2) -> bool {
        xy.x >= 0 && xy.x < self.width() as i32 && xy.y >= 0 && xy.y < self.height() as i32
    }

    pub fn width(&self) -> usize {
        self.size.x as usize
    }

    pub fn height(&self) -> usize {
        self.size.y as usize
    }

    pub fn size(&self) -> UVec2 {
        self.size
    }

    pub fn tile_count(&self) -> usize {
        self.width() * self.height()
    }

    /// An iterator over the walkable cardinal neighbors of a position.
    pub fn exits(&self, xy: impl Into<IVec2>) -> IntoIter<IVec2, 4> {
        let xy = xy.into();
        let mut points = ArrayVec::new();
        for dir in ADJACENT_4_WAY {
            let next = xy + IVec2::from(dir);

            if !self.in_bounds(next) {
                continue;
            }

            if !self.terrain[self.to_index(next)].is_wall() {
                points.push(next);
            }
        }
        points.into_iter()
    }

    /// Scan the grid for the start, the goal and every checkpoint.
    ///
    /// Returns `None` if the start or goal marker is missing. Checkpoints
    /// are listed in row-major scan order. Should a marker appear more
    /// than once, the last occurrence wins.
    pub fn points_of_interest(&self) -> Option<PointsOfInterest> {
        let mut checkpoints = Vec::new();
        let mut start = None;
        let mut goal = None;

        for y in 0..self.height() as i32 {
            for x in 0..self.width() as i32 {
                let xy = IVec2::new(x, y);
                match self.terrain(xy) {
                    Terrain::Checkpoint => checkpoints.push(xy),
                    Terrain::Start => start = Some(xy),
                    Terrain::Goal => goal = Some(xy),
                    _ => {}
                }
            }
        }

        Some(PointsOfInterest {
            checkpoints,
            start: start?,
            goal: goal?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse() {
        let grid = Grid::from_rows(&["S.@", "#..", "..G"], 3, 3).unwrap();

        assert_eq!(Terrain::Start, grid.terrain([0, 0]));
        assert_eq!(Terrain::Open, grid.terrain([1, 0]));
        assert_eq!(Terrain::Checkpoint, grid.terrain([2, 0]));
        assert_eq!(Terrain::Wall, grid.terrain([0, 1]));
        assert_eq!(Terrain::Goal, grid.terrain([2, 2]));
    }

    #[test]
    fn unknown_chars_are_open() {
        let grid = Grid::from_rows(&["x?."], 3, 1).unwrap();

        for x in 0..3 {
            assert_eq!(Terrain::Open, grid.terrain([x, 0]));
        }
    }

    #[test]
    fn row_count_mismatch() {
        let err = Grid::from_rows(&["...", "..."], 3, 3).unwrap_err();

        assert_eq!(
            GridError::RowCountMismatch {
                expected: 3,
                found: 2
            },
            err
        );
    }

    #[test]
    fn row_width_mismatch() {
        let err = Grid::from_rows(&["...", "..", "..."], 3, 3).unwrap_err();

        assert_eq!(
            GridError::RowWidthMismatch {
                row: 1,
                expected: 3,
                found: 2
            },
            err
        );
    }

    #[test]
    fn exits_skip_walls_and_bounds() {
        let grid = Grid::from_rows(&["S#.", "...", ".#G"], 3, 3).unwrap();

        let exits: Vec<_> = grid.exits([0, 0]).collect();
        assert_eq!(vec![IVec2::new(0, 1)], exits);

        let exits: Vec<_> = grid.exits([1, 1]).collect();
        assert_eq!(
            vec![IVec2::new(2, 1), IVec2::new(0, 1)],
            exits
        );
    }

    #[test]
    fn points_of_interest_found() {
        let grid = Grid::from_rows(&["S.@", "...", "@.G"], 3, 3).unwrap();
        let poi = grid.points_of_interest().unwrap();

        assert_eq!(IVec2::new(0, 0), poi.start);
        assert_eq!(IVec2::new(2, 2), poi.goal);
        assert_eq!(vec![IVec2::new(2, 0), IVec2::new(0, 2)], poi.checkpoints);
    }

    #[test]
    fn missing_start_or_goal() {
        let grid = Grid::from_rows(&["..G"], 3, 1).unwrap();
        assert!(grid.points_of_interest().is_none());

        let grid = Grid::from_rows(&["S.."], 3, 1).unwrap();
        assert!(grid.points_of_interest().is_none());
    }
}
