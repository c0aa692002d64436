use std::{mem, ops};

use log::{debug, warn};
use smallvec::SmallVec;
use thiserror::Error;

use crate::{
    array::Array2D,
    dims::Dims,
    gameboard::cell::{Cell, CellWall},
};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GridError {
    #[error("invalid maze dimensions {num_cols}x{num_rows}, both have to be positive")]
    InvalidDimension { num_cols: i32, num_rows: i32 },
    #[error("position {0:?} is outside of the grid")]
    OutOfBounds(Dims),
    #[error("grid is already carved")]
    AlreadyCarved,
    #[error("grid has {0} open internal walls, only a fully walled grid can be carved")]
    NotFullyWalled(usize),
    #[error("maze of {num_cols}x{num_rows} cells is too large")]
    TooLarge { num_cols: i32, num_rows: i32 },
}

/// Lifecycle of a [`Grid`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridState {
    /// Fresh grid, only walls removed by hand (if any).
    Unbuilt,
    /// Carved by the generator, visit flags cleared.
    Carved,
    /// Path from the entrance to the exit was found and recorded.
    Solved,
}

/// Rectangular matrix of cells, indexed by `Dims(column, row)`.
///
/// The entrance is the top-left cell, the exit is the bottom-right one.
#[derive(Debug, Clone)]
pub struct Grid {
    cells: Array2D<Cell>,
    state: GridState,
    entrance_open: bool,
    solution: Option<Vec<Dims>>,
}

impl Grid {
    pub fn new(num_cols: i32, num_rows: i32) -> Result<Self, GridError> {
        if !Dims(num_cols, num_rows).all_positive() {
            return Err(GridError::InvalidDimension { num_cols, num_rows });
        }
        let fits = (num_cols as usize)
            .checked_mul(num_rows as usize)
            .and_then(|count| count.checked_mul(mem::size_of::<Cell>()))
            .is_some_and(|bytes| bytes <= isize::MAX as usize);
        if !fits {
            return Err(GridError::TooLarge { num_cols, num_rows });
        }

        debug!("new {}x{} grid", num_cols, num_rows);
        Ok(Grid {
            cells: Array2D::new(Cell::new(), num_cols as usize, num_rows as usize),
            state: GridState::Unbuilt,
            entrance_open: false,
            solution: None,
        })
    }

    pub fn size(&self) -> Dims {
        self.cells.size()
    }

    pub fn num_cols(&self) -> i32 {
        self.size().0
    }

    pub fn num_rows(&self) -> i32 {
        self.size().1
    }

    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    pub fn entrance(&self) -> Dims {
        Dims::ZERO
    }

    pub fn exit(&self) -> Dims {
        self.size() - Dims::ONE
    }

    pub fn state(&self) -> GridState {
        self.state
    }

    /// Path recorded by the last successful solve, entrance and exit included.
    pub fn solution(&self) -> Option<&[Dims]> {
        self.solution.as_deref()
    }

    pub fn is_in_bounds(&self, pos: Dims) -> bool {
        self.cells.get(pos).is_some()
    }

    pub fn get_cell(&self, pos: Dims) -> Option<&Cell> {
        self.cells.get(pos)
    }

    pub fn cells(&self) -> &Array2D<Cell> {
        &self.cells
    }

    pub fn iter_pos(&self) -> impl Iterator<Item = Dims> + '_ {
        self.cells.iter_pos()
    }

    /// Opens the top wall of the entrance and the bottom wall of the exit.
    ///
    /// Returns `false` and leaves the grid untouched if they were already opened.
    pub fn open_entrance_and_exit(&mut self) -> bool {
        if self.entrance_open {
            warn!("entrance and exit are already open");
            return false;
        }

        let (entrance, exit) = (self.entrance(), self.exit());
        self.cells[entrance].remove_wall(CellWall::Top);
        self.cells[exit].remove_wall(CellWall::Bottom);
        self.entrance_open = true;
        true
    }

    pub fn is_entrance_open(&self) -> bool {
        self.entrance_open
    }

    /// Returns the wall of `cell` that is shared with `cell2`, `None` if they aren't adjacent.
    pub fn which_wall_between(cell: Dims, cell2: Dims) -> Option<CellWall> {
        match (cell2.0 - cell.0, cell2.1 - cell.1) {
            (0, -1) => Some(CellWall::Top),
            (-1, 0) => Some(CellWall::Left),
            (1, 0) => Some(CellWall::Right),
            (0, 1) => Some(CellWall::Bottom),
            _ => None,
        }
    }

    /// Removes the wall on both sides of the edge, returns the position on the other side.
    pub fn remove_wall(&mut self, cell: Dims, wall: CellWall) -> Result<Dims, GridError> {
        let other = cell + wall.to_coord();
        for pos in [cell, other] {
            if !self.is_in_bounds(pos) {
                return Err(GridError::OutOfBounds(pos));
            }
        }

        self.cells[cell].remove_wall(wall);
        self.cells[other].remove_wall(wall.reverse_wall());
        Ok(other)
    }

    /// Whether two adjacent cells are connected through an open wall.
    pub fn is_open_between(&self, cell: Dims, cell2: Dims) -> bool {
        let Some(wall) = Self::which_wall_between(cell, cell2) else {
            return false;
        };

        match (self.cells.get(cell), self.cells.get(cell2)) {
            (Some(from), Some(to)) => from.is_open(wall) && to.is_open(wall.reverse_wall()),
            _ => false,
        }
    }

    /// In-bounds neighbours not visited yet, walls are ignored.
    pub fn unvisited_neighbors(&self, cell: Dims) -> SmallVec<[(CellWall, Dims); 4]> {
        CellWall::get_in_order()
            .into_iter()
            .map(|wall| (wall, cell + wall.to_coord()))
            .filter(|(_, pos)| self.cells.get(*pos).is_some_and(|c| !c.is_visited()))
            .collect()
    }

    /// Neighbours reachable through an open wall that are not visited yet.
    pub fn neighbors_open(&self, cell: Dims) -> SmallVec<[Dims; 4]> {
        CellWall::get_in_order()
            .into_iter()
            .map(|wall| cell + wall.to_coord())
            .filter(|&pos| self.cells.get(pos).is_some_and(|c| !c.is_visited()))
            .filter(|&pos| self.is_open_between(cell, pos))
            .collect()
    }

    pub fn reset_visited(&mut self) {
        self.cells
            .iter_mut()
            .for_each(|cell| cell.set_visited(false));
    }

    /// Number of removed walls between two cells of the grid.
    ///
    /// The entrance and the exit don't count, they face outside of the grid.
    pub fn open_internal_walls(&self) -> usize {
        self.iter_pos()
            .flat_map(|pos| {
                [CellWall::Right, CellWall::Bottom]
                    .into_iter()
                    .map(move |wall| (pos, pos + wall.to_coord()))
            })
            .filter(|&(from, to)| self.is_open_between(from, to))
            .count()
    }

    pub(crate) fn mark_visited(&mut self, pos: Dims) {
        self.cells[pos].set_visited(true);
    }

    pub(crate) fn set_state(&mut self, state: GridState) {
        debug!("grid state {:?} -> {:?}", self.state, state);
        self.state = state;
    }

    pub(crate) fn record_solution(&mut self, path: Vec<Dims>) {
        self.solution = Some(path);
        self.set_state(GridState::Solved);
    }
}

impl ops::Index<Dims> for Grid {
    type Output = Cell;

    fn index(&self, index: Dims) -> &Self::Output {
        &self.cells[index]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_dimensions() {
        assert_eq!(
            Grid::new(0, 5).unwrap_err(),
            GridError::InvalidDimension {
                num_cols: 0,
                num_rows: 5
            }
        );
        assert!(matches!(
            Grid::new(3, -1),
            Err(GridError::InvalidDimension { .. })
        ));
    }

    #[test]
    fn oversized_grid_rejected() {
        assert_eq!(
            Grid::new(i32::MAX, i32::MAX).unwrap_err(),
            GridError::TooLarge {
                num_cols: i32::MAX,
                num_rows: i32::MAX
            }
        );
    }

    #[test]
    fn new_grid_is_closed() {
        let grid = Grid::new(3, 2).unwrap();

        assert_eq!(grid.size(), Dims(3, 2));
        assert_eq!(grid.cell_count(), 6);
        assert_eq!(grid.exit(), Dims(2, 1));
        assert_eq!(grid.state(), GridState::Unbuilt);
        assert!(grid.cells().iter().all(|c| c.walls() == [true; 4] && !c.is_visited()));
        assert_eq!(grid.open_internal_walls(), 0);
        assert!(grid.solution().is_none());
    }

    #[test]
    fn entrance_and_exit_open_once() {
        let mut grid = Grid::new(3, 2).unwrap();

        assert!(grid.open_entrance_and_exit());
        assert!(!grid[Dims(0, 0)].has_top_wall());
        assert!(!grid[Dims(2, 1)].has_bottom_wall());
        assert!(grid.is_entrance_open());
        assert!(!grid.open_entrance_and_exit());
        assert_eq!(grid.open_internal_walls(), 0);
    }

    #[test]
    fn single_cell_entrance_is_exit() {
        let mut grid = Grid::new(1, 1).unwrap();
        grid.open_entrance_and_exit();

        assert_eq!(grid.entrance(), grid.exit());
        assert_eq!(grid[Dims::ZERO].walls(), [false, true, true, false]);
    }

    #[test]
    fn remove_wall_both_sides() {
        let mut grid = Grid::new(2, 2).unwrap();

        assert_eq!(grid.remove_wall(Dims(1, 0), CellWall::Bottom), Ok(Dims(1, 1)));
        assert!(!grid[Dims(1, 0)].has_bottom_wall());
        assert!(!grid[Dims(1, 1)].has_top_wall());
        assert!(grid.is_open_between(Dims(1, 1), Dims(1, 0)));
        assert_eq!(grid.open_internal_walls(), 1);
    }

    #[test]
    fn remove_wall_out_of_bounds() {
        let mut grid = Grid::new(2, 2).unwrap();

        assert_eq!(
            grid.remove_wall(Dims(0, 0), CellWall::Left),
            Err(GridError::OutOfBounds(Dims(-1, 0)))
        );
        assert_eq!(
            grid.remove_wall(Dims(5, 0), CellWall::Left),
            Err(GridError::OutOfBounds(Dims(5, 0)))
        );
        assert!(grid[Dims(0, 0)].has_left_wall());
    }

    #[test]
    fn wall_between() {
        assert_eq!(Grid::which_wall_between(Dims(1, 1), Dims(1, 0)), Some(CellWall::Top));
        assert_eq!(Grid::which_wall_between(Dims(1, 1), Dims(0, 1)), Some(CellWall::Left));
        assert_eq!(Grid::which_wall_between(Dims(1, 1), Dims(2, 1)), Some(CellWall::Right));
        assert_eq!(Grid::which_wall_between(Dims(1, 1), Dims(1, 2)), Some(CellWall::Bottom));
        assert_eq!(Grid::which_wall_between(Dims(1, 1), Dims(2, 2)), None);
        assert_eq!(Grid::which_wall_between(Dims(1, 1), Dims(1, 1)), None);
    }

    #[test]
    fn neighbors_respect_walls_and_visits() {
        let mut grid = Grid::new(3, 3).unwrap();
        let center = Dims(1, 1);

        assert_eq!(grid.unvisited_neighbors(center).len(), 4);
        assert!(grid.neighbors_open(center).is_empty());

        grid.remove_wall(center, CellWall::Right).unwrap();
        grid.remove_wall(center, CellWall::Top).unwrap();
        assert_eq!(grid.neighbors_open(center).as_slice(), &[Dims(1, 0), Dims(2, 1)]);

        grid.mark_visited(Dims(1, 0));
        assert_eq!(grid.neighbors_open(center).as_slice(), &[Dims(2, 1)]);
        assert_eq!(grid.unvisited_neighbors(center).len(), 3);

        grid.reset_visited();
        assert!(grid.cells().iter().all(|c| !c.is_visited()));
        assert_eq!(grid.neighbors_open(center).len(), 2);
    }

    #[test]
    fn corner_neighbors_stay_in_bounds() {
        let grid = Grid::new(2, 2).unwrap();
        let neighbors = grid.unvisited_neighbors(Dims(0, 0));

        assert_eq!(
            neighbors.as_slice(),
            &[(CellWall::Right, Dims(1, 0)), (CellWall::Bottom, Dims(0, 1))]
        );
    }
}
