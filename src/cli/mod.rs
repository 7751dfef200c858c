// CLI module
// Interactive query screen and one-shot lookup command

mod commands;
mod event_loop;
pub mod session;
pub mod tui;

pub use commands::{print_outcome, run_interactive, run_lookup};
pub use event_loop::EventLoop;
pub use session::{
    format_definition, FrameView, InteractiveSession, KeyAction, SessionState, StatusKind,
    SubmitResult,
};
