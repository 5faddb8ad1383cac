//! Input Module - Event conversion and polling
//!
//! Bridges crossterm's event system with the crate's keyboard events.
//! Provides event polling, conversion, and mouse-capture control.
//!
//! # API
//!
//! - `convert_key_event` - Convert crossterm KeyEvent to a KeyboardEvent
//! - `poll_event` - Non-blocking event check with timeout
//! - `read_event` - Blocking event read
//! - `enable_mouse` / `disable_mouse` - Control mouse capture
//!
//! # Example
//!
//! ```ignore
//! use otp_tui::state::input::{poll_event, InputEvent};
//! use std::time::Duration;
//!
//! loop {
//!     if let Ok(Some(event)) = poll_event(Duration::from_millis(16)) {
//!         match event {
//!             InputEvent::Key(key) => { /* widget.handle_key(&key) */ }
//!             InputEvent::Click { x, y } => { /* widget.handle_click(...) */ }
//!             _ => {}
//!         }
//!     }
//! }
//! ```

use crossterm::event::{
    DisableMouseCapture, EnableMouseCapture, Event as CrosstermEvent, KeyCode,
    KeyEvent as CrosstermKeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEventKind, poll,
    read,
};
use crossterm::execute;
use std::io::{self, stdout};
use std::time::Duration;

use super::keyboard::{KeyState, KeyboardEvent, Modifiers};

// =============================================================================
// INPUT EVENT ENUM
// =============================================================================

/// Unified event type for the widget.
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    /// Keyboard event (key press, repeat, release)
    Key(KeyboardEvent),
    /// Left mouse button pressed at a terminal coordinate
    Click { x: u16, y: u16 },
    /// Terminal resize event (new width, height)
    Resize(u16, u16),
    /// No event or unhandled event type
    None,
}

// =============================================================================
// KEY EVENT CONVERSION
// =============================================================================

/// Convert crossterm KeyEvent to a KeyboardEvent
pub fn convert_key_event(event: CrosstermKeyEvent) -> KeyboardEvent {
    let key = match event.code {
        KeyCode::Char(c) => c.to_string(),
        KeyCode::Enter => "Enter".to_string(),
        KeyCode::Tab => "Tab".to_string(),
        KeyCode::Backspace => "Backspace".to_string(),
        KeyCode::Delete => "Delete".to_string(),
        KeyCode::Esc => "Escape".to_string(),
        KeyCode::Up => "ArrowUp".to_string(),
        KeyCode::Down => "ArrowDown".to_string(),
        KeyCode::Left => "ArrowLeft".to_string(),
        KeyCode::Right => "ArrowRight".to_string(),
        KeyCode::Home => "Home".to_string(),
        KeyCode::End => "End".to_string(),
        _ => String::new(),
    };

    let state = match event.kind {
        KeyEventKind::Press => KeyState::Press,
        KeyEventKind::Repeat => KeyState::Repeat,
        KeyEventKind::Release => KeyState::Release,
    };

    KeyboardEvent {
        key,
        modifiers: convert_modifiers(event.modifiers),
        state,
    }
}

/// Convert crossterm KeyModifiers to Modifiers
pub fn convert_modifiers(modifiers: KeyModifiers) -> Modifiers {
    Modifiers {
        ctrl: modifiers.contains(KeyModifiers::CONTROL),
        alt: modifiers.contains(KeyModifiers::ALT),
        shift: modifiers.contains(KeyModifiers::SHIFT),
        meta: modifiers.contains(KeyModifiers::SUPER),
    }
}

// =============================================================================
// EVENT CONVERSION
// =============================================================================

/// Convert a crossterm event into an InputEvent.
///
/// Mouse events other than a left-button press are dropped: the widget only
/// reacts to clicks (focus a cell), not hover or scroll.
pub fn convert_event(event: CrosstermEvent) -> InputEvent {
    match event {
        CrosstermEvent::Key(key) => InputEvent::Key(convert_key_event(key)),
        CrosstermEvent::Mouse(mouse) => match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => InputEvent::Click {
                x: mouse.column,
                y: mouse.row,
            },
            _ => InputEvent::None,
        },
        CrosstermEvent::Resize(w, h) => InputEvent::Resize(w, h),
        _ => InputEvent::None,
    }
}

// =============================================================================
// POLLING
// =============================================================================

/// Non-blocking event check. Returns `Ok(None)` if no event arrived within
/// the timeout.
pub fn poll_event(timeout: Duration) -> io::Result<Option<InputEvent>> {
    if poll(timeout)? {
        Ok(Some(convert_event(read()?)))
    } else {
        Ok(None)
    }
}

/// Blocking event read.
pub fn read_event() -> io::Result<InputEvent> {
    Ok(convert_event(read()?))
}

// =============================================================================
// MOUSE CAPTURE
// =============================================================================

/// Enable mouse capture so clicks reach the event stream.
pub fn enable_mouse() -> io::Result<()> {
    execute!(stdout(), EnableMouseCapture)
}

/// Disable mouse capture.
pub fn disable_mouse() -> io::Result<()> {
    execute!(stdout(), DisableMouseCapture)
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_convert_char_key() {
        let event = convert_key_event(CrosstermKeyEvent::new(
            KeyCode::Char('5'),
            KeyModifiers::NONE,
        ));
        assert_eq!(event.key, "5");
        assert!(event.is_press());
        assert_eq!(event.printable(), Some('5'));
    }

    #[test]
    fn test_convert_named_keys() {
        let cases = [
            (KeyCode::Backspace, "Backspace"),
            (KeyCode::Left, "ArrowLeft"),
            (KeyCode::Right, "ArrowRight"),
            (KeyCode::Esc, "Escape"),
            (KeyCode::Enter, "Enter"),
        ];
        for (code, name) in cases {
            let event = convert_key_event(CrosstermKeyEvent::new(code, KeyModifiers::NONE));
            assert_eq!(event.key, name);
        }
    }

    #[test]
    fn test_convert_modifiers() {
        let mods = convert_modifiers(KeyModifiers::CONTROL | KeyModifiers::SHIFT);
        assert!(mods.ctrl);
        assert!(mods.shift);
        assert!(!mods.alt);
        assert!(!mods.meta);
    }

    #[test]
    fn test_convert_key_crossterm_event() {
        let event = convert_event(CrosstermEvent::Key(CrosstermKeyEvent::new(
            KeyCode::Char('a'),
            KeyModifiers::NONE,
        )));
        assert_eq!(event, InputEvent::Key(KeyboardEvent::new("a")));
    }

    #[test]
    fn test_convert_resize() {
        assert_eq!(
            convert_event(CrosstermEvent::Resize(80, 24)),
            InputEvent::Resize(80, 24)
        );
    }
}
