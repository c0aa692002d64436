use crate::{dims::Dims, gameboard::Cell};

/// Observer of the carving and the solving.
///
/// Calls are synchronous and their outcome never affects the algorithms. Both methods do
/// nothing by default.
pub trait Renderer {
    /// Walls of the cell at `pos` changed.
    fn on_cell_changed(&mut self, _pos: Dims, _cell: &Cell) {}

    /// Solver moved from `from` to `to`, or backed out of a dead end if `undo` is set.
    fn on_move(&mut self, _from: Dims, _to: Dims, _undo: bool) {}
}

#[derive(Debug, Default, Clone, Copy)]
pub struct NoRenderer;

impl Renderer for NoRenderer {}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderEvent {
    CellChanged { pos: Dims, cell: Cell },
    Move { from: Dims, to: Dims, undo: bool },
}

/// Records every notification, in order.
impl Renderer for Vec<RenderEvent> {
    fn on_cell_changed(&mut self, pos: Dims, cell: &Cell) {
        self.push(RenderEvent::CellChanged { pos, cell: *cell });
    }

    fn on_move(&mut self, from: Dims, to: Dims, undo: bool) {
        self.push(RenderEvent::Move { from, to, undo });
    }
}
