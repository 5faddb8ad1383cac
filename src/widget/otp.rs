//! OTP Input - The passcode entry widget.
//!
//! A fixed row of single-character cells driven by the focus sequencer.
//! The widget owns all cell values (`Vec<Signal<Option<char>>>`) as the
//! single source of truth; cells are pure views of that state at render
//! time. The sequencer answers every [`CellEvent`] with a [`FocusCommand`]
//! which the widget executes against its own handles - no global registry,
//! no cross-cell mutation through the environment.
//!
//! # Example
//!
//! ```ignore
//! use otp_tui::widget::{OtpInput, OtpProps};
//! use otp_tui::state::keyboard::KeyboardEvent;
//!
//! let widget = OtpInput::new(OtpProps { auto_focus: true, ..OtpProps::new(4) })?;
//! widget.handle_key(&KeyboardEvent::new("5"));
//! assert_eq!(widget.active_index(), 1);
//! assert_eq!(widget.value(), "5");
//! ```

use spark_signals::{signal, Signal};

use crate::error::{OtpError, MAX_CELLS};
use crate::layout;
use crate::state::focus::{CellEvent, FocusCommand, FocusSequencer};
use crate::state::keyboard::KeyboardEvent;
use crate::types::Rect;
use super::types::{ChangeCallback, OtpProps};

// =============================================================================
// OTP Input
// =============================================================================

/// A row of single-character input cells acting as one logical input.
pub struct OtpInput {
    values: Vec<Signal<Option<char>>>,
    sequencer: FocusSequencer,
    mask: bool,
    mask_char: char,
    on_change: Option<ChangeCallback>,
}

impl OtpInput {
    /// Create the widget, validating the requested cell count.
    ///
    /// Fails with [`OtpError::InvalidConfiguration`] for counts outside
    /// `1..=10` before any cell state is allocated.
    pub fn new(props: OtpProps) -> Result<Self, OtpError> {
        if props.cell_count == 0 || props.cell_count > MAX_CELLS {
            return Err(OtpError::InvalidConfiguration {
                requested: props.cell_count,
            });
        }

        let values: Vec<Signal<Option<char>>> =
            (0..props.cell_count).map(|_| signal(None)).collect();

        let widget = Self {
            sequencer: FocusSequencer::new(props.cell_count),
            values,
            mask: props.mask,
            mask_char: props.mask_char.unwrap_or('•'),
            on_change: props.on_change,
        };
        log::debug!("otp input created with {} cells", widget.cell_count());

        if props.auto_focus {
            widget.handle_event(CellEvent::Focus(0));
        }
        Ok(widget)
    }

    // =========================================================================
    // ACCESSORS
    // =========================================================================

    /// Number of cells in the row.
    pub fn cell_count(&self) -> usize {
        self.values.len()
    }

    /// The currently focused cell index (-1 if none).
    pub fn active_index(&self) -> i32 {
        self.sequencer.active_index()
    }

    /// Check if a specific cell is focused.
    pub fn is_active(&self, index: usize) -> bool {
        self.sequencer.is_active(index)
    }

    /// Check if any cell is focused.
    pub fn has_focus(&self) -> bool {
        self.sequencer.has_focus()
    }

    /// The character held by cell `index`, if any.
    pub fn char_at(&self, index: usize) -> Option<char> {
        self.values.get(index).and_then(|value| value.get())
    }

    /// The character cell `index` should display (mask-aware).
    pub fn display_char_at(&self, index: usize) -> Option<char> {
        self.char_at(index)
            .map(|ch| if self.mask { self.mask_char } else { ch })
    }

    /// The assembled code: every entered character, in cell order.
    pub fn value(&self) -> String {
        self.values.iter().filter_map(|value| value.get()).collect()
    }

    /// Check if every cell holds a character.
    pub fn is_complete(&self) -> bool {
        self.values.iter().all(|value| value.get().is_some())
    }

    // =========================================================================
    // EVENT INTAKE
    // =========================================================================

    /// Feed a cell event through the sequencer and execute its command.
    pub fn handle_event(&self, event: CellEvent) {
        let command = self.sequencer.apply(event);
        self.execute(command);
    }

    /// Handle a raw keyboard event, mapping it onto cell events.
    ///
    /// A printable character stores into the focused cell (only if empty -
    /// each cell holds at most one character) and raises `ValueEntered`.
    /// Backspace raises `Backspace` for the focused cell. Left/Right arrows
    /// move focus within the row. Returns true if the event was consumed;
    /// with no cell focused, nothing is.
    pub fn handle_key(&self, event: &KeyboardEvent) -> bool {
        if !event.is_press() {
            return false;
        }
        let active = self.sequencer.active_index();

        match event.key.as_str() {
            "Backspace" => {
                if active < 0 {
                    return false;
                }
                self.handle_event(CellEvent::Backspace(active as usize));
                true
            }
            "ArrowLeft" => {
                if active < 0 {
                    return false;
                }
                if active > 0 {
                    self.handle_event(CellEvent::Focus(active as usize - 1));
                }
                true
            }
            "ArrowRight" => {
                if active < 0 {
                    return false;
                }
                let next = active as usize + 1;
                if next < self.cell_count() {
                    self.handle_event(CellEvent::Focus(next));
                }
                true
            }
            _ => {
                let Some(ch) = event.printable() else {
                    return false;
                };
                if active < 0 {
                    return false;
                }
                let index = active as usize;
                // A full cell rejects further input, so no value event fires
                // and no advance happens.
                if self.values[index].get().is_none() {
                    self.set_char(index, Some(ch));
                    self.handle_event(CellEvent::ValueEntered(index));
                }
                true
            }
        }
    }

    /// Handle a mouse click at a coordinate relative to the widget origin.
    ///
    /// Hit-tests against the laid-out cell rects and focuses the cell under
    /// the click. Returns true if a cell was hit.
    pub fn handle_click(&self, x: u16, y: u16, rects: &[Rect]) -> bool {
        match layout::hit_test(rects, x, y) {
            Some(index) => {
                self.handle_event(CellEvent::Focus(index));
                true
            }
            None => false,
        }
    }

    /// Clear every cell and drop focus.
    pub fn reset(&self) {
        let had_value = self.values.iter().any(|value| value.get().is_some());
        for value in &self.values {
            value.set(None);
        }
        self.sequencer.blur();
        if had_value {
            self.notify_change();
        }
    }

    // =========================================================================
    // INTERNAL
    // =========================================================================

    /// Execute a sequencer command against the owned cell state.
    ///
    /// Focus moves re-enter the state machine as `Focus` events, so the
    /// tracked index is only ever updated through the `Focus` transition.
    fn execute(&self, command: FocusCommand) {
        match command {
            FocusCommand::None => {}
            FocusCommand::Move(index) => {
                self.handle_event(CellEvent::Focus(index));
            }
            FocusCommand::ClearAndMove { clear, focus } => {
                self.set_char(clear, None);
                self.handle_event(CellEvent::Focus(focus));
            }
        }
    }

    /// Write a cell's value through the owned state and notify.
    fn set_char(&self, index: usize, ch: Option<char>) {
        log::debug!("cell {index} value -> {ch:?}");
        self.values[index].set(ch);
        self.notify_change();
    }

    fn notify_change(&self) {
        if let Some(ref callback) = self.on_change {
            callback(&self.value());
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::{layout_row, RowOptions};
    use std::cell::RefCell;
    use std::rc::Rc;

    fn widget(cell_count: usize) -> OtpInput {
        OtpInput::new(OtpProps::new(cell_count)).unwrap()
    }

    fn type_char(widget: &OtpInput, ch: char) {
        widget.handle_key(&KeyboardEvent::new(ch.to_string()));
    }

    #[test]
    fn test_construction_in_range() {
        for count in 1..=10 {
            let widget = widget(count);
            assert_eq!(widget.cell_count(), count);
            assert!(!widget.has_focus());
            assert_eq!(widget.value(), "");
        }
    }

    #[test]
    fn test_construction_rejects_out_of_range() {
        for count in [0, 11, 12, 100] {
            match OtpInput::new(OtpProps::new(count)) {
                Err(OtpError::InvalidConfiguration { requested }) => {
                    assert_eq!(requested, count);
                }
                other => panic!("expected InvalidConfiguration, got {:?}", other.is_ok()),
            }
        }
    }

    #[test]
    fn test_forward_sequencing() {
        // Scenario: type "5291" into a 4-cell row starting at cell 0.
        let widget = widget(4);
        widget.handle_event(CellEvent::Focus(0));

        type_char(&widget, '5');
        assert_eq!(widget.active_index(), 1);
        assert_eq!(widget.char_at(0), Some('5'));

        type_char(&widget, '2');
        assert_eq!(widget.active_index(), 2);

        type_char(&widget, '9');
        assert_eq!(widget.active_index(), 3);

        // Last cell: focus stays put.
        type_char(&widget, '1');
        assert_eq!(widget.active_index(), 3);
        assert_eq!(widget.value(), "5291");
        assert!(widget.is_complete());
    }

    #[test]
    fn test_backspace_clears_previous_and_retreats() {
        let widget = widget(4);
        widget.handle_event(CellEvent::Focus(0));
        for ch in ['5', '2', '9', '1'] {
            type_char(&widget, ch);
        }

        widget.handle_key(&KeyboardEvent::new("Backspace"));
        assert_eq!(widget.char_at(2), None);
        assert_eq!(widget.active_index(), 2);

        // The other cells are untouched - including the one that was focused.
        assert_eq!(widget.char_at(0), Some('5'));
        assert_eq!(widget.char_at(1), Some('2'));
        assert_eq!(widget.char_at(3), Some('1'));
    }

    #[test]
    fn test_backspace_no_op_at_first_cell() {
        let widget = widget(3);
        widget.handle_event(CellEvent::Focus(0));
        type_char(&widget, '7');

        // Focus advanced to 1; walk back to 0 and hit the boundary.
        widget.handle_key(&KeyboardEvent::new("Backspace"));
        assert_eq!(widget.active_index(), 0);
        assert_eq!(widget.char_at(0), None);

        for _ in 0..3 {
            widget.handle_key(&KeyboardEvent::new("Backspace"));
            assert_eq!(widget.active_index(), 0);
            assert_eq!(widget.value(), "");
        }
    }

    #[test]
    fn test_backspace_walk_leaves_last_cell_value() {
        // Retreating clears the cell to the LEFT of the focused one, so a
        // full walk from the last cell leaves that cell's character behind.
        let widget = widget(4);
        widget.handle_event(CellEvent::Focus(0));
        for ch in ['1', '2', '3', '4'] {
            type_char(&widget, ch);
        }

        for _ in 0..3 {
            widget.handle_key(&KeyboardEvent::new("Backspace"));
        }
        assert_eq!(widget.active_index(), 0);
        assert_eq!(widget.value(), "4");
        assert_eq!(widget.char_at(3), Some('4'));
    }

    #[test]
    fn test_direct_focus_has_no_side_effects() {
        let widget = widget(4);
        widget.handle_event(CellEvent::Focus(0));
        type_char(&widget, '5');
        let before = widget.value();

        widget.handle_event(CellEvent::Focus(2));
        assert_eq!(widget.active_index(), 2);
        assert_eq!(widget.value(), before);
    }

    #[test]
    fn test_at_most_one_active_cell() {
        let widget = widget(5);
        widget.handle_event(CellEvent::Focus(0));
        type_char(&widget, '1');
        type_char(&widget, '2');
        widget.handle_key(&KeyboardEvent::new("Backspace"));

        let active = widget.active_index();
        for i in 0..widget.cell_count() {
            assert_eq!(widget.is_active(i), i as i32 == active);
        }
    }

    #[test]
    fn test_typing_into_full_cell_is_ignored() {
        let widget = widget(4);
        widget.handle_event(CellEvent::Focus(0));
        type_char(&widget, '5');

        // Walk focus back onto the full cell and type again.
        widget.handle_event(CellEvent::Focus(0));
        let consumed = widget.handle_key(&KeyboardEvent::new("9"));
        assert!(consumed);
        assert_eq!(widget.char_at(0), Some('5'));
        assert_eq!(widget.active_index(), 0); // no advance either
    }

    #[test]
    fn test_keys_without_focus_are_not_consumed() {
        let widget = widget(4);
        assert!(!widget.handle_key(&KeyboardEvent::new("5")));
        assert!(!widget.handle_key(&KeyboardEvent::new("Backspace")));
        assert_eq!(widget.value(), "");
        assert!(!widget.has_focus());
    }

    #[test]
    fn test_arrow_navigation_clamps_to_row() {
        let widget = widget(3);
        widget.handle_event(CellEvent::Focus(0));

        widget.handle_key(&KeyboardEvent::new("ArrowLeft"));
        assert_eq!(widget.active_index(), 0);

        widget.handle_key(&KeyboardEvent::new("ArrowRight"));
        assert_eq!(widget.active_index(), 1);
        widget.handle_key(&KeyboardEvent::new("ArrowRight"));
        widget.handle_key(&KeyboardEvent::new("ArrowRight"));
        assert_eq!(widget.active_index(), 2);
    }

    #[test]
    fn test_click_focuses_cell() {
        let widget = widget(4);
        let rects = layout_row(4, &RowOptions::default()).unwrap();

        assert!(widget.handle_click(rects[2].x + 2, 1, &rects));
        assert_eq!(widget.active_index(), 2);

        // A click in the gap changes nothing.
        assert!(!widget.handle_click(rects[0].right(), 1, &rects));
        assert_eq!(widget.active_index(), 2);
    }

    #[test]
    fn test_auto_focus() {
        let widget = OtpInput::new(OtpProps {
            auto_focus: true,
            ..OtpProps::new(4)
        })
        .unwrap();
        assert_eq!(widget.active_index(), 0);
    }

    #[test]
    fn test_masked_display() {
        let widget = OtpInput::new(OtpProps {
            mask: true,
            auto_focus: true,
            ..OtpProps::new(4)
        })
        .unwrap();
        type_char(&widget, '7');

        assert_eq!(widget.char_at(0), Some('7'));
        assert_eq!(widget.display_char_at(0), Some('•'));
        assert_eq!(widget.value(), "7"); // the real value is never masked
    }

    #[test]
    fn test_custom_mask_char() {
        let widget = OtpInput::new(OtpProps {
            mask: true,
            mask_char: Some('*'),
            auto_focus: true,
            ..OtpProps::new(4)
        })
        .unwrap();
        type_char(&widget, '3');
        assert_eq!(widget.display_char_at(0), Some('*'));
    }

    #[test]
    fn test_on_change_reports_assembled_value() {
        let seen: Rc<RefCell<Vec<String>>> = Rc::new(RefCell::new(Vec::new()));
        let seen_clone = seen.clone();

        let widget = OtpInput::new(OtpProps {
            auto_focus: true,
            on_change: Some(Rc::new(move |value: &str| {
                seen_clone.borrow_mut().push(value.to_string());
            })),
            ..OtpProps::new(4)
        })
        .unwrap();

        type_char(&widget, '1');
        type_char(&widget, '2');
        // Focus advanced to cell 2, so backspace clears cell 1.
        widget.handle_key(&KeyboardEvent::new("Backspace"));

        assert_eq!(*seen.borrow(), vec!["1", "12", "1"]);
    }

    #[test]
    fn test_reset() {
        let widget = widget(4);
        widget.handle_event(CellEvent::Focus(0));
        type_char(&widget, '5');
        type_char(&widget, '2');

        widget.reset();
        assert_eq!(widget.value(), "");
        assert!(!widget.has_focus());
        assert!(!widget.is_complete());
    }

    #[test]
    fn test_injected_value_event_defaults_to_cell_zero() {
        // Directly injected value events still follow the sequencer's
        // default-to-0 rule when nothing is focused.
        let widget = widget(4);
        widget.handle_event(CellEvent::ValueEntered(2));
        assert_eq!(widget.active_index(), 1);
    }
}
