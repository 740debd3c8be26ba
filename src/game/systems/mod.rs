pub mod movement;
pub mod capture;
pub mod rules;

pub use movement::*;
pub use capture::*;
pub use rules::*;
