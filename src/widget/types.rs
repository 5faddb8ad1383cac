//! Widget types - Props and callbacks.

use std::rc::Rc;

// =============================================================================
// Callback Types
// =============================================================================

/// Value change callback (Rc for shared ownership in closures).
///
/// Called with the assembled code whenever any cell's content changes.
pub type ChangeCallback = Rc<dyn Fn(&str)>;

// =============================================================================
// Otp Props
// =============================================================================

/// Properties for the OTP input widget.
///
/// The cell count is required and validated at construction; everything
/// else defaults off. Use struct-update syntax for the rest:
///
/// ```ignore
/// use otp_tui::widget::{OtpInput, OtpProps};
///
/// let widget = OtpInput::new(OtpProps {
///     mask: true,
///     auto_focus: true,
///     ..OtpProps::new(6)
/// })?;
/// ```
pub struct OtpProps {
    /// Number of single-character cells, `1..=10`.
    pub cell_count: usize,
    /// Mask entered characters (password-style display).
    pub mask: bool,
    /// Mask character (defaults to '•').
    pub mask_char: Option<char>,
    /// Focus cell 0 at construction.
    pub auto_focus: bool,
    /// Called with the assembled value after any cell content change.
    pub on_change: Option<ChangeCallback>,
}

impl OtpProps {
    /// Create props for a row of `cell_count` cells with default behavior.
    pub fn new(cell_count: usize) -> Self {
        Self {
            cell_count,
            mask: false,
            mask_char: None,
            auto_focus: false,
            on_change: None,
        }
    }
}
