//! Core types shared across the crate.
//!
//! - [`Rect`] - Terminal-cell rectangle produced by layout, consumed by
//!   rendering and hit testing
//! - [`Attr`] - Text attributes as a bitfield
//! - [`BorderStyle`] - Border character sets for cell boxes

// =============================================================================
// Rect
// =============================================================================

/// A rectangle in terminal cells.
///
/// Coordinates are 0-based, relative to the widget origin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rect {
    pub x: u16,
    pub y: u16,
    pub width: u16,
    pub height: u16,
}

impl Rect {
    /// Create a new rect.
    pub const fn new(x: u16, y: u16, width: u16, height: u16) -> Self {
        Self { x, y, width, height }
    }

    /// Check whether a terminal coordinate falls inside this rect.
    pub const fn contains(&self, x: u16, y: u16) -> bool {
        x >= self.x && x < self.x + self.width && y >= self.y && y < self.y + self.height
    }

    /// The first column to the right of this rect.
    pub const fn right(&self) -> u16 {
        self.x + self.width
    }

    /// The first row below this rect.
    pub const fn bottom(&self) -> u16 {
        self.y + self.height
    }
}

// =============================================================================
// Cell Attributes (bitflags)
// =============================================================================

bitflags::bitflags! {
    /// Text attributes as a bitfield for efficient storage and comparison.
    ///
    /// Combine with bitwise OR: `Attr::BOLD | Attr::UNDERLINE`
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct Attr: u8 {
        const NONE = 0;
        const BOLD = 1 << 0;
        const DIM = 1 << 1;
        const UNDERLINE = 1 << 2;
        const INVERSE = 1 << 3;
    }
}

// =============================================================================
// Border Styles
// =============================================================================

/// Border style for a cell box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[repr(u8)]
pub enum BorderStyle {
    /// ─ │ ┌ ┐ └ ┘
    #[default]
    Single = 0,
    /// ═ ║ ╔ ╗ ╚ ╝
    Double = 1,
    /// ─ │ ╭ ╮ ╰ ╯
    Rounded = 2,
    /// ━ ┃ ┏ ┓ ┗ ┛
    Bold = 3,
    /// - | + + + +
    Ascii = 4,
}

impl BorderStyle {
    /// Get the border characters for this style.
    ///
    /// Returns: (horizontal, vertical, top_left, top_right, bottom_right, bottom_left)
    pub const fn chars(&self) -> (&'static str, &'static str, &'static str, &'static str, &'static str, &'static str) {
        match self {
            Self::Single => ("─", "│", "┌", "┐", "┘", "└"),
            Self::Double => ("═", "║", "╔", "╗", "╝", "╚"),
            Self::Rounded => ("─", "│", "╭", "╮", "╯", "╰"),
            Self::Bold => ("━", "┃", "┏", "┓", "┛", "┗"),
            Self::Ascii => ("-", "|", "+", "+", "+", "+"),
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
    fn test_rect_contains() {
        let rect = Rect::new(2, 1, 5, 3);

        assert!(rect.contains(2, 1));
        assert!(rect.contains(6, 3));
        assert!(!rect.contains(7, 1)); // one past the right edge
        assert!(!rect.contains(2, 4)); // one past the bottom edge
        assert!(!rect.contains(1, 1));
        assert!(!rect.contains(0, 0));
    }

    #[test]
    fn test_rect_edges() {
        let rect = Rect::new(3, 2, 4, 3);
        assert_eq!(rect.right(), 7);
        assert_eq!(rect.bottom(), 5);
    }

    #[test]
    fn test_attr_combination() {
        let attrs = Attr::BOLD | Attr::UNDERLINE;
        assert!(attrs.contains(Attr::BOLD));
        assert!(attrs.contains(Attr::UNDERLINE));
        assert!(!attrs.contains(Attr::DIM));
    }

    #[test]
    fn test_border_chars() {
        let (h, v, tl, tr, br, bl) = BorderStyle::Single.chars();
        assert_eq!((h, v), ("─", "│"));
        assert_eq!((tl, tr, br, bl), ("┌", "┐", "┘", "└"));

        let (h, v, ..) = BorderStyle::Bold.chars();
        assert_eq!((h, v), ("━", "┃"));
    }
}
