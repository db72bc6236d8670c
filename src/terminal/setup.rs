//! Terminal setup and teardown functions.
//!
//! Used by `TerminalManager` and the panic hook.

use crossterm::{
    cursor::{Hide, Show},
    event::{DisableFocusChange, DisableMouseCapture, EnableFocusChange, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use std::io::{self, Write};

use crate::adapters::terminal_capture::{SetPointerShape, DEFAULT_POINTER_SHAPE};

/// Enter TUI mode.
///
/// - Enters alternate screen (preserves original terminal content)
/// - Enables mouse capture (press, drag and release reporting)
/// - Enables focus change reporting (focus loss revokes pointer capture)
/// - Hides the text cursor
///
/// # Errors
///
/// Returns an error if any terminal commands fail.
pub fn enter_tui_mode<W: Write>(writer: &mut W) -> io::Result<()> {
    execute!(
        writer,
        EnterAlternateScreen,
        EnableMouseCapture,
        EnableFocusChange,
        Hide
    )
}

/// Leave TUI mode and restore terminal to normal state.
///
/// Safe to call multiple times; never panics and ignores errors.
pub fn leave_tui_mode<W: Write>(writer: &mut W) {
    let _ = disable_raw_mode();

    // A drag cut short by exit must not leave a resize pointer behind
    let _ = execute!(writer, SetPointerShape(DEFAULT_POINTER_SHAPE));

    let _ = execute!(
        writer,
        DisableFocusChange,
        DisableMouseCapture,
        LeaveAlternateScreen,
        Show
    );
    let _ = writer.flush();
}

/// Restore terminal to a usable state after a panic or error.
pub fn emergency_restore() {
    leave_tui_mode(&mut io::stdout());
}
