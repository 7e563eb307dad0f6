pub use global_state::*;

pub mod global_state;
