//! Keyboard Module - Keyboard event types
//!
//! The event vocabulary consumed by the widget. Keys are identified by
//! name ("a", "Backspace", "ArrowLeft"); conversion from crossterm lives in
//! the input module. There is no global handler registry - the widget
//! consumes events directly through `OtpInput::handle_key`.

// =============================================================================
// TYPES
// =============================================================================

/// Keyboard modifier state
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Modifiers {
    pub ctrl: bool,
    pub alt: bool,
    pub shift: bool,
    pub meta: bool,
}

impl Modifiers {
    /// Create empty modifiers
    pub fn none() -> Self {
        Self::default()
    }

    /// Create modifiers with ctrl
    pub fn ctrl() -> Self {
        Self { ctrl: true, ..Self::default() }
    }

    /// Create modifiers with shift
    pub fn shift() -> Self {
        Self { shift: true, ..Self::default() }
    }

    /// True when no modifier is held (shift excepted - shifted characters
    /// arrive already uppercased).
    pub fn is_plain(&self) -> bool {
        !self.ctrl && !self.alt && !self.meta
    }
}

/// Key event state (press, repeat, release)
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum KeyState {
    #[default]
    Press,
    Repeat,
    Release,
}

/// Keyboard event
#[derive(Clone, Debug, PartialEq)]
pub struct KeyboardEvent {
    /// The key that was pressed (e.g., "a", "Enter", "ArrowLeft")
    pub key: String,
    /// Modifier keys state
    pub modifiers: Modifiers,
    /// Press/repeat/release state
    pub state: KeyState,
}

impl KeyboardEvent {
    /// Create a simple key press event
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            modifiers: Modifiers::default(),
            state: KeyState::Press,
        }
    }

    /// Create a key press with modifiers
    pub fn with_modifiers(key: impl Into<String>, modifiers: Modifiers) -> Self {
        Self {
            key: key.into(),
            modifiers,
            state: KeyState::Press,
        }
    }

    /// Check if this is a press event
    pub fn is_press(&self) -> bool {
        self.state == KeyState::Press
    }

    /// The single printable character this event carries, if any.
    ///
    /// Named keys ("Backspace", "ArrowLeft") and chords with ctrl/alt/meta
    /// held return `None`.
    pub fn printable(&self) -> Option<char> {
        if !self.modifiers.is_plain() {
            return None;
        }
        let mut chars = self.key.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Some(c),
            _ => None,
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_event() {
        let event = KeyboardEvent::new("a");
        assert_eq!(event.key, "a");
        assert!(event.is_press());
        assert_eq!(event.modifiers, Modifiers::none());
    }

    #[test]
    fn test_printable_single_char() {
        assert_eq!(KeyboardEvent::new("5").printable(), Some('5'));
        assert_eq!(KeyboardEvent::new("a").printable(), Some('a'));
        assert_eq!(KeyboardEvent::new("世").printable(), Some('世'));
    }

    #[test]
    fn test_printable_rejects_named_keys() {
        assert_eq!(KeyboardEvent::new("Backspace").printable(), None);
        assert_eq!(KeyboardEvent::new("ArrowLeft").printable(), None);
        assert_eq!(KeyboardEvent::new("").printable(), None);
    }

    #[test]
    fn test_printable_rejects_chords() {
        let event = KeyboardEvent::with_modifiers("c", Modifiers::ctrl());
        assert_eq!(event.printable(), None);

        // Shift alone is fine - shifted characters arrive uppercased.
        let event = KeyboardEvent::with_modifiers("A", Modifiers::shift());
        assert_eq!(event.printable(), Some('A'));
    }

    #[test]
    fn test_key_state() {
        let mut event = KeyboardEvent::new("a");
        event.state = KeyState::Release;
        assert!(!event.is_press());
    }
}
