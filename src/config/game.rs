/// Game configuration constants.
/// 
/// This module defines the board dimensions and the movement reach of each piece family.
pub const GRID_SIZE: usize = 5; // The board is always GRID_SIZE x GRID_SIZE.

/// Number of cells a pawn travels in one move.
pub const PAWN_STEP: usize = 1;

/// Number of cells a hero (straight or diagonal) travels in one move.
pub const HERO_STEP: usize = 2;
