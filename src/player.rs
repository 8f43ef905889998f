use crate::board::Board;

/// Interface implemented by automated move sources.
pub trait Player {
    /// Choose the next cell to claim, or `None` if no cell is free.
    fn select_move(&mut self, board: &Board) -> Option<(usize, usize)>;
}
