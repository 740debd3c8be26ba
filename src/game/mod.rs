//! Game rules layer: board, movement, captures, and the authoritative state.
//!
//! Nothing in here knows about connections; the server layer drives it.

pub mod types;
pub mod error;
pub mod state;
pub mod grid;
pub mod systems;
