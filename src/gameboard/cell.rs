use crate::dims::Dims;

use CellWall::*;

/// Wall and visit state of a single grid position.
///
/// The position itself is not stored, it's the index of the cell in the [`Grid`](super::Grid).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    left: bool,
    top: bool,
    right: bool,
    bottom: bool,
    visited: bool,
}

impl Cell {
    /// New cell with all four walls and not visited.
    pub fn new() -> Cell {
        Cell {
            left: true,
            top: true,
            right: true,
            bottom: true,
            visited: false,
        }
    }

    pub(crate) fn remove_wall(&mut self, wall: CellWall) {
        match wall {
            Left => self.left = false,
            Top => self.top = false,
            Right => self.right = false,
            Bottom => self.bottom = false,
        }
    }

    pub fn get_wall(&self, wall: CellWall) -> bool {
        match wall {
            Left => self.left,
            Top => self.top,
            Right => self.right,
            Bottom => self.bottom,
        }
    }

    pub fn is_open(&self, wall: CellWall) -> bool {
        !self.get_wall(wall)
    }

    pub fn has_left_wall(&self) -> bool {
        self.left
    }

    pub fn has_top_wall(&self) -> bool {
        self.top
    }

    pub fn has_right_wall(&self) -> bool {
        self.right
    }

    pub fn has_bottom_wall(&self) -> bool {
        self.bottom
    }

    /// Walls in [`CellWall::get_in_order`] order.
    pub fn walls(&self) -> [bool; 4] {
        CellWall::get_in_order().map(|wall| self.get_wall(wall))
    }

    pub fn is_visited(&self) -> bool {
        self.visited
    }

    pub(crate) fn set_visited(&mut self, visited: bool) {
        self.visited = visited;
    }
}

impl Default for Cell {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CellWall {
    Top,
    Left,
    Right,
    Bottom,
}

impl CellWall {
    pub fn to_coord(&self) -> Dims {
        match self {
            Top => Dims(0, -1),
            Left => Dims(-1, 0),
            Right => Dims(1, 0),
            Bottom => Dims(0, 1),
        }
    }

    pub fn reverse_wall(&self) -> CellWall {
        match self {
            Top => Bottom,
            Left => Right,
            Right => Left,
            Bottom => Top,
        }
    }

    /// Canonical enumeration order, up, left, right, down.
    ///
    /// Both the generator and the solver walk neighbours in this order, so a maze is fully
    /// determined by the sequence of choices made by the random source.
    pub const fn get_in_order() -> [CellWall; 4] {
        [Top, Left, Right, Bottom]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_cell_is_closed() {
        let cell = Cell::new();
        assert_eq!(cell.walls(), [true; 4]);
        assert!(!cell.is_visited());
        assert_eq!(cell, Cell::default());
    }

    #[test]
    fn remove_single_wall() {
        let mut cell = Cell::new();
        cell.remove_wall(Right);

        assert!(cell.is_open(Right));
        assert!(!cell.has_right_wall());
        assert!(cell.has_left_wall() && cell.has_top_wall() && cell.has_bottom_wall());
        assert_eq!(cell.walls(), [true, true, false, true]);
    }

    #[test]
    fn reverse_walls_cancel_offsets() {
        for wall in CellWall::get_in_order() {
            assert_eq!(wall.reverse_wall().reverse_wall(), wall);
            assert_eq!(wall.to_coord() + wall.reverse_wall().to_coord(), Dims::ZERO);
            let Dims(x, y) = wall.to_coord();
            assert_eq!(x.abs() + y.abs(), 1);
        }
    }
}
