pub mod rig_state;

pub use rig_state::*;
