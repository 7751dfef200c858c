// Terminal surface for the query screen
//
// The screen runs in the alternate screen with raw mode enabled. Both are
// undone when the guard drops and from the panic hook, so a crash never
// leaves the user's shell in raw mode.

use anyhow::{Context, Result};
use crossterm::{
    cursor, execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};
use std::sync::Once;

mod async_input;
mod status_widget;
mod view;

pub use async_input::{spawn_input_task, InputEvent};
pub use status_widget::{StatusWidget, KEY_HINTS};
pub use view::{draw_frame, screen_layout};

pub type Tui = Terminal<CrosstermBackend<Stdout>>;

static PANIC_HOOK: Once = Once::new();

// ─── TerminalGuard ────────────────────────────────────────────────────────────

/// Owns the ratatui terminal and restores the tty on drop.
pub struct TerminalGuard {
    terminal: Tui,
}

impl TerminalGuard {
    pub fn enter() -> Result<Self> {
        install_panic_hook();

        enable_raw_mode().context("Failed to enable raw mode")?;
        if let Err(e) = execute!(io::stdout(), EnterAlternateScreen) {
            let _ = disable_raw_mode();
            return Err(e).context("Failed to enter alternate screen");
        }

        let terminal = match Terminal::new(CrosstermBackend::new(io::stdout())) {
            Ok(terminal) => terminal,
            Err(e) => {
                restore_terminal();
                return Err(e).context("Failed to create terminal");
            }
        };

        Ok(Self { terminal })
    }

    pub fn terminal(&mut self) -> &mut Tui {
        &mut self.terminal
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        restore_terminal();
    }
}

// ─── Restore helpers ──────────────────────────────────────────────────────────

/// Leave the alternate screen and raw mode. Errors are ignored: this runs on
/// exit paths where there is nothing better to do.
pub fn restore_terminal() {
    let _ = disable_raw_mode();
    let _ = execute!(io::stdout(), LeaveAlternateScreen, cursor::Show);
}

fn install_panic_hook() {
    PANIC_HOOK.call_once(|| {
        let previous = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |info| {
            restore_terminal();
            previous(info);
        }));
    });
}
