//! Entry Demo - Interactive OTP entry
//!
//! A six-cell passcode row: type to fill, backspace to delete-and-step-back,
//! arrows or mouse clicks to move focus, Escape or Ctrl+C to exit.
//!
//! Run with: cargo run --example entry

use std::error::Error;
use std::io::{Write, stdout};
use std::time::Duration;

use crossterm::cursor::{Hide, MoveTo, Show};
use crossterm::style::Print;
use crossterm::terminal::{
    Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode,
    enable_raw_mode,
};
use crossterm::{execute, queue};

use otp_tui::{
    InputEvent, OtpInput, OtpProps, Rect, RenderStyle, RowOptions, disable_mouse, draw,
    enable_mouse, layout_row, poll_event,
};

const ORIGIN: (u16, u16) = (4, 4);

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let widget = OtpInput::new(OtpProps {
        auto_focus: true,
        ..OtpProps::new(6)
    })?;
    let rects = layout_row(widget.cell_count(), &RowOptions::default())?;
    let style = RenderStyle::default();

    enable_raw_mode()?;
    let mut out = stdout();
    execute!(out, EnterAlternateScreen, Hide)?;
    enable_mouse()?;

    let result = run(&widget, &rects, &style, &mut out);

    disable_mouse()?;
    execute!(out, LeaveAlternateScreen, Show)?;
    disable_raw_mode()?;
    result
}

fn run(
    widget: &OtpInput,
    rects: &[Rect],
    style: &RenderStyle,
    out: &mut impl Write,
) -> Result<(), Box<dyn Error>> {
    redraw(out, widget, rects, style)?;

    loop {
        let Some(event) = poll_event(Duration::from_millis(100))? else {
            continue;
        };
        match event {
            InputEvent::Key(key) => {
                if key.key == "Escape" || (key.modifiers.ctrl && key.key == "c") {
                    return Ok(());
                }
                widget.handle_key(&key);
            }
            InputEvent::Click { x, y } => {
                if x >= ORIGIN.0 && y >= ORIGIN.1 {
                    widget.handle_click(x - ORIGIN.0, y - ORIGIN.1, rects);
                }
            }
            InputEvent::Resize(..) => {
                execute!(out, Clear(ClearType::All))?;
            }
            InputEvent::None => {}
        }
        redraw(out, widget, rects, style)?;
    }
}

fn redraw(
    out: &mut impl Write,
    widget: &OtpInput,
    rects: &[Rect],
    style: &RenderStyle,
) -> Result<(), Box<dyn Error>> {
    queue!(
        out,
        MoveTo(ORIGIN.0, ORIGIN.1 - 3),
        Print("Get authorized via OTP"),
        MoveTo(ORIGIN.0, ORIGIN.1 - 2),
        Print("Type to fill, backspace to delete, click or arrows to move"),
    )?;
    draw(out, widget, rects, ORIGIN, style)?;

    let status = if widget.is_complete() {
        "code complete".to_string()
    } else {
        format!("{} of {} entered", widget.value().chars().count(), widget.cell_count())
    };
    queue!(
        out,
        MoveTo(ORIGIN.0, ORIGIN.1 + 4),
        Clear(ClearType::UntilNewLine),
        Print(status)
    )?;
    out.flush()?;
    Ok(())
}
