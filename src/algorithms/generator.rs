use log::{debug, trace};
use rand::{thread_rng, Rng as _, SeedableRng as _};

use super::{Pick, Random};
use crate::{
    gameboard::{Grid, GridError, GridState},
    renderer::{NoRenderer, Renderer},
};

/// Randomized depth-first backtracking carver.
///
/// Starting from the entrance it walks to a random unvisited neighbour, removing the wall
/// between them, and backs up once a cell has no unvisited neighbours left. Each cell is
/// entered exactly once, so the open walls form a spanning tree of the grid: the maze is
/// connected and has exactly one path between any two cells.
#[derive(Debug, Clone)]
pub struct Generator<P: Pick = Random> {
    picker: P,
}

impl Generator<Random> {
    /// Generator seeded with `seed`, or with a random seed if there is none.
    pub fn from_seed(seed: Option<u64>) -> Self {
        let seed = seed.unwrap_or_else(|| thread_rng().gen());
        debug!("carving with seed {}", seed);
        Self::new(Random::seed_from_u64(seed))
    }
}

impl<P: Pick> Generator<P> {
    pub fn new(picker: P) -> Self {
        Self { picker }
    }

    pub fn carve(&mut self, grid: &mut Grid) -> Result<(), GridError> {
        self.carve_with(grid, &mut NoRenderer)
    }

    /// Carves `grid` in place, notifying `renderer` of every changed cell.
    ///
    /// Only an [`GridState::Unbuilt`] grid with every internal wall standing can be carved.
    /// Entrance and exit are opened if the caller didn't do that already. Visit flags are
    /// cleared afterwards.
    pub fn carve_with<R: Renderer + ?Sized>(
        &mut self,
        grid: &mut Grid,
        renderer: &mut R,
    ) -> Result<(), GridError> {
        if grid.state() != GridState::Unbuilt {
            return Err(GridError::AlreadyCarved);
        }
        let open = grid.open_internal_walls();
        if open != 0 {
            return Err(GridError::NotFullyWalled(open));
        }

        if grid.open_entrance_and_exit() {
            for pos in [grid.entrance(), grid.exit()] {
                renderer.on_cell_changed(pos, &grid[pos]);
            }
        }

        let mut stack = Vec::with_capacity(grid.cell_count());
        let mut carved = 0usize;

        let start = grid.entrance();
        grid.mark_visited(start);
        stack.push(start);
        while let Some(current) = stack.pop() {
            let unvisited_neighbors = grid.unvisited_neighbors(current);
            if unvisited_neighbors.is_empty() {
                continue;
            }

            stack.push(current);
            let count = unvisited_neighbors.len();
            let (wall, next) = unvisited_neighbors[self.picker.pick(count).min(count - 1)];
            grid.remove_wall(current, wall)?;
            trace!("carved {:?} {:?} -> {:?}", wall, current, next);
            renderer.on_cell_changed(current, &grid[current]);
            renderer.on_cell_changed(next, &grid[next]);

            grid.mark_visited(next);
            stack.push(next);
            carved += 1;
        }

        grid.reset_visited();
        grid.set_state(GridState::Carved);
        debug!("carved {} walls in {} cells", carved, grid.cell_count());

        Ok(())
    }
}
