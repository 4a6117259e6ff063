use glam::IVec2;
use std::cmp::Ordering;
use std::collections::BinaryHeap;

/// A MinHeap over grid positions for A*, keyed by total estimate `f` with
/// ties broken by the smaller heuristic `h`.
///
/// Duplicate entries for a position are allowed; callers are expected to
/// discard stale ones at pop time. The final tie-break on position keeps
/// pop order fully deterministic.
///
/// # Example
/// ```rust
/// use orienteering::MinHeap;
///
/// let mut heap = MinHeap::new();
/// heap.push([10, 10], 5, 2);
/// heap.push([3, 3], 5, 1);
///
/// assert_eq!([3, 3], heap.pop().unwrap().to_array());
/// ```
#[derive(Debug, Default, Clone)]
pub struct MinHeap {
    heap: BinaryHeap<Cell>,
}

impl MinHeap {
    pub fn new() -> Self {
        Self {
            heap: BinaryHeap::new(),
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            heap: BinaryHeap::with_capacity(capacity),
        }
    }

    pub fn clear(&mut self) {
        self.heap.clear();
    }

    pub fn push(&mut self, xy: impl Into<IVec2>, f: i32, h: i32) {
        self.heap.push(Cell {
            f,
            h,
            pos: xy.into(),
        });
    }

    pub fn pop(&mut self) -> Option<IVec2> {
        self.heap.pop().map(|c| c.pos)
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }
}

/// A cell for our min heap.
#[derive(Eq, PartialEq, Debug, Default, Clone, Copy)]
struct Cell {
    f: i32,
    h: i32,
    pos: IVec2,
}

impl Ord for Cell {
    fn cmp(&self, other: &Self) -> Ordering {
        // order by f, then h, then y, then x
        other
            .f
            .cmp(&self.f)
            .then_with(|| other.h.cmp(&self.h))
            .then_with(|| {
                self.pos
                    .y
                    .cmp(&other.pos.y)
                    .then_with(|| self.pos.x.cmp(&other.pos.x))
            })
    }
}

impl PartialOrd for Cell {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pops_by_f() {
        let mut heap = MinHeap::new();
        heap.push([2, 2], 2, 0);
        heap.push([-10, -10], -10, 0);
        heap.push([1, 1], 1, 0);
        heap.push([5, 5], 5, 0);

        assert_eq!([-10, -10], heap.pop().unwrap().to_array());
        assert_eq!([1, 1], heap.pop().unwrap().to_array());
        assert_eq!([2, 2], heap.pop().unwrap().to_array());
        assert_eq!([5, 5], heap.pop().unwrap().to_array());
    }

    #[test]
    fn f_ties_broken_by_smaller_h() {
        let mut heap = MinHeap::new();
        heap.push([0, 0], 7, 6);
        heap.push([1, 1], 7, 2);
        heap.push([2, 2], 7, 4);

        assert_eq!([1, 1], heap.pop().unwrap().to_array());
        assert_eq!([2, 2], heap.pop().unwrap().to_array());
        assert_eq!([0, 0], heap.pop().unwrap().to_array());
    }

    #[test]
    fn full_ties_pop_deterministically() {
        for _ in 0..10 {
            let mut heap = MinHeap::new();
            heap.push([4, 1], 3, 3);
            heap.push([0, 2], 3, 3);
            heap.push([1, 2], 3, 3);

            assert_eq!([1, 2], heap.pop().unwrap().to_array());
            assert_eq!([0, 2], heap.pop().unwrap().to_array());
            assert_eq!([4, 1], heap.pop().unwrap().to_array());
        }
    }
}
