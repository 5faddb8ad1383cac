//! # otp-tui
//!
//! Reactive OTP entry widget for terminal UIs.
//!
//! A fixed row of single-character input cells that together capture a
//! one-time passcode: typing advances focus to the next cell, backspace
//! clears the previous cell and steps back, clicking focuses a cell
//! directly. Built on [spark-signals](https://github.com/RLabs-Inc/spark-signals)
//! for reactive state.
//!
//! ## Architecture
//!
//! The core is the focus sequencer: a state machine tracking which cell is
//! active and answering cell events with focus/clear commands. The widget
//! owns all cell values as the single source of truth and executes those
//! commands against its own handles.
//!
//! ```text
//! terminal event → InputEvent → OtpInput → FocusSequencer → FocusCommand
//!                                    ↑______________________________|
//! ```
//!
//! ## Modules
//!
//! - [`widget`] - The `OtpInput` component and its props
//! - [`state`] - Focus sequencer, keyboard events, crossterm conversion
//! - [`layout`] - Taffy row layout and click hit-testing
//! - [`renderer`] - Drawing the cell row via crossterm commands
//! - [`types`] - Shared types (Rect, Attr, BorderStyle)
//! - [`error`] - Error taxonomy

pub mod error;
pub mod layout;
pub mod renderer;
pub mod state;
pub mod types;
pub mod widget;

// Re-export commonly used items
pub use types::*;

pub use error::{MAX_CELLS, OtpError};

pub use layout::{RowOptions, hit_test, layout_row};

pub use renderer::{RenderStyle, draw};

pub use state::{
    // Focus
    CellEvent, FocusCommand, FocusSequencer,
    // Keyboard
    KeyState, KeyboardEvent, Modifiers,
    // Input
    InputEvent, convert_event, convert_key_event, convert_modifiers,
    disable_mouse, enable_mouse, poll_event, read_event,
};

pub use widget::{ChangeCallback, OtpInput, OtpProps};
