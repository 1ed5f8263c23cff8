pub mod keyboard;
pub mod pointer;

pub use keyboard::wire_rebuild_key;
pub use pointer::{wire_orbit_drag, wire_pointer_move};
