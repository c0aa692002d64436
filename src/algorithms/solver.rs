use log::debug;
use smallvec::SmallVec;

use crate::{
    array::Array2D,
    dims::Dims,
    gameboard::Grid,
    renderer::{NoRenderer, Renderer},
};

struct Frame {
    pos: Dims,
    neighbors: SmallVec<[Dims; 4]>,
    next: usize,
    found: bool,
}

/// Depth-first search from the entrance to the exit through open walls.
///
/// Exploration doesn't stop at the first success, every branch reachable from the entrance is
/// walked. Each failed branch is reported to the renderer as an undo move.
#[derive(Debug, Default, Clone)]
pub struct Solver {
    expanded: usize,
}

impl Solver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of cells entered by the last search.
    pub fn expanded(&self) -> usize {
        self.expanded
    }

    pub fn solve(&mut self, grid: &mut Grid) -> Option<Vec<Dims>> {
        self.solve_with(grid, &mut NoRenderer)
    }

    /// Finds the path from the entrance to the exit, both included.
    ///
    /// Returns `None` if they aren't connected, walls are left as they are in any case. On
    /// success the path is also recorded on the grid.
    pub fn solve_with<R: Renderer + ?Sized>(
        &mut self,
        grid: &mut Grid,
        renderer: &mut R,
    ) -> Option<Vec<Dims>> {
        grid.reset_visited();
        self.expanded = 0;

        let Dims(w, h) = grid.size();
        let mut next_on_path: Array2D<Option<Dims>> = Array2D::new(None, w as usize, h as usize);

        let entrance = grid.entrance();
        let mut solved = false;
        let mut stack = vec![self.enter(grid, entrance)];
        while let Some(mut frame) = stack.pop() {
            if let Some(&to) = frame.neighbors.get(frame.next) {
                frame.next += 1;
                let from = frame.pos;
                stack.push(frame);

                // a sibling branch could have reached it in the meantime
                if grid[to].is_visited() {
                    continue;
                }

                renderer.on_move(from, to, false);
                let child = self.enter(grid, to);
                stack.push(child);
                continue;
            }

            match stack.last_mut() {
                Some(parent) if frame.found => {
                    parent.found = true;
                    next_on_path[parent.pos].get_or_insert(frame.pos);
                }
                Some(parent) => renderer.on_move(parent.pos, frame.pos, true),
                None => solved = frame.found,
            }
        }

        debug!(
            "search expanded {} of {} cells, solved: {}",
            self.expanded,
            grid.cell_count(),
            solved
        );
        if !solved {
            return None;
        }

        let mut path = vec![entrance];
        let mut current = entrance;
        while let Some(next) = next_on_path[current] {
            path.push(next);
            current = next;
        }

        grid.record_solution(path.clone());
        Some(path)
    }

    fn enter(&mut self, grid: &mut Grid, pos: Dims) -> Frame {
        grid.mark_visited(pos);
        self.expanded += 1;

        let found = pos == grid.exit();
        let neighbors = if found {
            SmallVec::new()
        } else {
            grid.neighbors_open(pos)
        };

        Frame {
            pos,
            neighbors,
            next: 0,
            found,
        }
    }
}
