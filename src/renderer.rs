//! Renderer Module - Drawing the cell row
//!
//! Queues crossterm commands drawing each cell as a small bordered box
//! containing its (possibly masked) character. The focused cell renders
//! with a heavier border and bold character - the terminal analog of the
//! momentary focus emphasis in graphical OTP inputs. Pure presentation:
//! nothing here feeds back into the state machine.
//!
//! # Example
//!
//! ```ignore
//! use std::io::stdout;
//! use otp_tui::{draw, layout_row, OtpInput, OtpProps, RenderStyle, RowOptions};
//!
//! let widget = OtpInput::new(OtpProps::new(6))?;
//! let rects = layout_row(widget.cell_count(), &RowOptions::default())?;
//! draw(&mut stdout(), &widget, &rects, (4, 2), &RenderStyle::default())?;
//! ```

use std::io::{self, Write};

use crossterm::cursor::MoveTo;
use crossterm::queue;
use crossterm::style::{Attribute, Color, Print, ResetColor, SetAttribute, SetForegroundColor};

use crate::types::{Attr, BorderStyle, Rect};
use crate::widget::OtpInput;

// =============================================================================
// RENDER STYLE
// =============================================================================

/// Visual treatment of the cell row.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderStyle {
    /// Border style of idle cells.
    pub border: BorderStyle,
    /// Border style of the focused cell.
    pub focus_border: BorderStyle,
    /// Border color of idle cells.
    pub border_color: Color,
    /// Border color of the focused cell.
    pub focus_border_color: Color,
    /// Color of the held character.
    pub text_color: Color,
    /// Attributes of the held character in idle cells.
    pub text_attrs: Attr,
    /// Attributes of the held character in the focused cell.
    pub focus_text_attrs: Attr,
    /// Character shown in empty cells.
    pub placeholder: char,
}

impl Default for RenderStyle {
    fn default() -> Self {
        Self {
            border: BorderStyle::Single,
            focus_border: BorderStyle::Bold,
            border_color: Color::DarkGrey,
            focus_border_color: Color::White,
            text_color: Color::White,
            text_attrs: Attr::NONE,
            focus_text_attrs: Attr::BOLD,
            placeholder: ' ',
        }
    }
}

// =============================================================================
// DRAWING
// =============================================================================

/// Queue draw commands for the whole row at `origin`.
///
/// `rects` are the widget-relative cell rects from [`crate::layout_row`].
/// The caller flushes the writer.
pub fn draw(
    out: &mut impl Write,
    widget: &OtpInput,
    rects: &[Rect],
    origin: (u16, u16),
    style: &RenderStyle,
) -> io::Result<()> {
    for (index, rect) in rects.iter().enumerate().take(widget.cell_count()) {
        draw_cell(out, widget, index, rect, origin, style)?;
    }
    Ok(())
}

/// Draw one cell box and its character.
fn draw_cell(
    out: &mut impl Write,
    widget: &OtpInput,
    index: usize,
    rect: &Rect,
    origin: (u16, u16),
    style: &RenderStyle,
) -> io::Result<()> {
    let focused = widget.is_active(index);
    let (border, border_color) = if focused {
        (style.focus_border, style.focus_border_color)
    } else {
        (style.border, style.border_color)
    };
    let (h, v, tl, tr, br, bl) = border.chars();

    let x = origin.0 + rect.x;
    let y = origin.1 + rect.y;
    let inner = rect.width.saturating_sub(2) as usize;

    queue!(out, SetForegroundColor(border_color))?;
    queue!(out, MoveTo(x, y), Print(format!("{tl}{}{tr}", h.repeat(inner))))?;
    for row in 1..rect.height.saturating_sub(1) {
        queue!(
            out,
            MoveTo(x, y + row),
            Print(format!("{v}{}{v}", " ".repeat(inner)))
        )?;
    }
    queue!(
        out,
        MoveTo(x, y + rect.height.saturating_sub(1)),
        Print(format!("{bl}{}{br}", h.repeat(inner)))
    )?;

    // The held character (or the placeholder), centered in the box.
    let ch = widget.display_char_at(index).unwrap_or(style.placeholder);
    let attrs = if focused {
        style.focus_text_attrs
    } else {
        style.text_attrs
    };
    queue!(out, SetForegroundColor(style.text_color))?;
    apply_attrs(out, attrs)?;
    queue!(
        out,
        MoveTo(x + rect.width / 2, y + rect.height / 2),
        Print(ch)
    )?;
    queue!(out, SetAttribute(Attribute::Reset), ResetColor)?;
    Ok(())
}

fn apply_attrs(out: &mut impl Write, attrs: Attr) -> io::Result<()> {
    if attrs.contains(Attr::BOLD) {
        queue!(out, SetAttribute(Attribute::Bold))?;
    }
    if attrs.contains(Attr::DIM) {
        queue!(out, SetAttribute(Attribute::Dim))?;
    }
    if attrs.contains(Attr::UNDERLINE) {
        queue!(out, SetAttribute(Attribute::Underlined))?;
    }
    if attrs.contains(Attr::INVERSE) {
        queue!(out, SetAttribute(Attribute::Reverse))?;
    }
    Ok(())
}

// =============================================================================
// TESTS
// =============================================================================
