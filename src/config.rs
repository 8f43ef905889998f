pub const MIN_BOARD_SIZE: usize = 3;
pub const MAX_BOARD_SIZE: usize = 20;

/// Board size of the game that is active when the program starts.
pub const DEFAULT_BOARD_SIZE: usize = 10;
