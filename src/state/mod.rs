//! State Module - Runtime state systems
//!
//! - **Focus** - The cell focus sequencer (the core state machine)
//! - **Keyboard** - Event types consumed by the widget
//! - **Input** - crossterm event conversion and polling

pub mod focus;
pub mod input;
pub mod keyboard;

pub use focus::*;
pub use input::*;
pub use keyboard::*;
