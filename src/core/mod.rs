//! Platform-independent animation core.
//!
//! Nothing in here touches the DOM, so the modules are also pulled into the
//! host-side tests under `tests/` directly.

pub mod animation;
pub mod camera;
pub mod config;
pub mod constants;
pub mod figurine;
pub mod pointer;
pub mod registry;
pub mod scene;
pub mod schedule;

pub use animation::*;
pub use camera::{fog_factor, Camera, OrbitControls};
pub use config::*;
pub use pointer::{DragState, PointerState};
pub use registry::{PulseEmitter, PulseTarget, Registries, SwayTarget};
pub use scene::*;
pub use schedule::*;
