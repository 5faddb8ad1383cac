//! Focus Sequencer - The cell focus state machine
//!
//! Coordinates N single-character cells as one logical input device:
//! - `active_index` signal (currently focused cell, -1 if none)
//! - AdvanceFocus on value entry (never wraps past the last cell)
//! - RetreatFocus on backspace (delete-and-step-back semantics)
//!
//! The sequencer owns nothing but the focus pointer. It consumes
//! [`CellEvent`]s and answers with [`FocusCommand`]s; the parent widget
//! executes those commands against the cell values it owns. Cell indices in
//! events always originate from existing cells, so no transition can error.
//!
//! # Example
//!
//! ```ignore
//! use otp_tui::state::focus::{CellEvent, FocusCommand, FocusSequencer};
//!
//! let seq = FocusSequencer::new(4);
//! seq.apply(CellEvent::Focus(0));
//! assert_eq!(seq.apply(CellEvent::ValueEntered(0)), FocusCommand::Move(1));
//! ```

use spark_signals::{signal, Signal};

// =============================================================================
// EVENTS
// =============================================================================

/// An event raised by a cell.
///
/// Three distinct variants rather than one tagged action parameter: a cell
/// either gained focus, came to hold a non-empty character, or saw the
/// deletion key while focused.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellEvent {
    /// Cell `i` received input focus (click, arrow key, or a focus move).
    Focus(usize),
    /// Cell `i` now holds a non-empty character.
    ValueEntered(usize),
    /// The deletion key was pressed while cell `i` was focused.
    Backspace(usize),
}

// =============================================================================
// COMMANDS
// =============================================================================

/// A side effect the sequencer asks its owner to perform.
///
/// The sequencer never reaches into cell contents itself; clearing a value
/// and moving focus are carried out by the widget on its own cell handles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusCommand {
    /// Nothing to do (boundary no-op or a plain focus update).
    None,
    /// Move input focus to cell `i`.
    Move(usize),
    /// Clear the stored character of cell `clear`, then focus cell `focus`.
    ClearAndMove { clear: usize, focus: usize },
}

// =============================================================================
// SEQUENCER
// =============================================================================

/// The focus-sequencing state machine for a row of cells.
///
/// State is a single tracked index held in a [`Signal`] so renders can bind
/// to it reactively. The index is only ever set by [`CellEvent::Focus`];
/// advance and retreat emit commands whose focus moves re-enter the machine
/// as `Focus` events, the same way moving DOM focus fires the target
/// element's own focus handler.
pub struct FocusSequencer {
    active: Signal<i32>,
    cell_count: usize,
}

impl FocusSequencer {
    /// Create a sequencer for `cell_count` cells. No cell starts focused.
    ///
    /// The caller validates the count; the sequencer assumes it is at least 1.
    pub fn new(cell_count: usize) -> Self {
        Self {
            active: signal(-1),
            cell_count,
        }
    }

    /// Number of cells in the row.
    pub fn cell_count(&self) -> usize {
        self.cell_count
    }

    /// The currently focused cell index (-1 if none).
    pub fn active_index(&self) -> i32 {
        self.active.get()
    }

    /// Check if any cell is focused.
    pub fn has_focus(&self) -> bool {
        self.active_index() >= 0
    }

    /// Check if a specific cell is focused.
    pub fn is_active(&self, index: usize) -> bool {
        self.active_index() == index as i32
    }

    /// The reactive focus pointer, for binding renders or effects.
    pub fn active_signal(&self) -> Signal<i32> {
        self.active.clone()
    }

    /// Clear focus (no cell focused).
    pub fn blur(&self) {
        self.active.set(-1);
    }

    /// Feed one event through the state machine.
    ///
    /// Returns the command the owner must execute. `Focus` updates the
    /// tracked index and commands nothing; `ValueEntered` advances from the
    /// *tracked* index (defaulting to 0 if unset); `Backspace` retreats
    /// from the emitting cell's index.
    pub fn apply(&self, event: CellEvent) -> FocusCommand {
        match event {
            CellEvent::Focus(index) => {
                log::trace!("focus -> cell {index}");
                self.active.set(index as i32);
                FocusCommand::None
            }
            CellEvent::ValueEntered(_) => self.advance(),
            CellEvent::Backspace(index) => self.retreat(index),
        }
    }

    /// AdvanceFocus: move focus one cell right of the tracked index.
    ///
    /// No-op at the last cell - focus does not wrap. Does not update the
    /// tracked index; the resulting `Focus` event does.
    fn advance(&self) -> FocusCommand {
        let current = self.active_index().max(0) as usize;
        if current + 1 >= self.cell_count {
            log::trace!("advance at last cell {current}: no-op");
            return FocusCommand::None;
        }
        log::trace!("advance: cell {current} -> {}", current + 1);
        FocusCommand::Move(current + 1)
    }

    /// RetreatFocus: clear the previous cell's value and focus it.
    ///
    /// No-op at cell 0 - there is nothing to delete before the start.
    fn retreat(&self, index: usize) -> FocusCommand {
        if index == 0 {
            log::trace!("retreat at first cell: no-op");
            return FocusCommand::None;
        }
        log::trace!("retreat: clear and focus cell {}", index - 1);
        FocusCommand::ClearAndMove {
            clear: index - 1,
            focus: index - 1,
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================
