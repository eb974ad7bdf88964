//! Platform abstraction layer
//!
//! Browser-independent pieces of the host glue:
//! - Input events to game commands
//! - The frame loop driver (one advance + one render per frame)

pub mod frame_loop;
pub mod input;

pub use frame_loop::{FrameLoop, FrameResult, LoopControl};
pub use input::{InputCommand, InputEvent};
