// Event loop for the interactive query screen
//
// The only task that touches the session or the terminal. It waits on two
// sources: terminal input from the input task, and completion of the
// session's in-flight lookup. Either one may trigger a redraw.

use anyhow::{Context, Result};
use ratatui::{backend::Backend, Terminal};
use std::time::Duration;
use tokio::sync::mpsc;

use super::session::{InteractiveSession, KeyAction};
use super::tui::{draw_frame, InputEvent};
use crate::config::ColorScheme;

pub struct EventLoop {
    session: InteractiveSession,
    input_rx: mpsc::UnboundedReceiver<InputEvent>,
    colors: ColorScheme,
    /// `host:port`, shown in the input title
    server: String,
    shutdown_grace: Duration,
}

impl EventLoop {
    pub fn new(
        session: InteractiveSession,
        input_rx: mpsc::UnboundedReceiver<InputEvent>,
        colors: ColorScheme,
        server: String,
        shutdown_grace: Duration,
    ) -> Self {
        Self {
            session,
            input_rx,
            colors,
            server,
            shutdown_grace,
        }
    }

    /// Run until the user quits or the input source closes.
    pub async fn run<B: Backend>(mut self, terminal: &mut Terminal<B>) -> Result<()> {
        let mut needs_redraw = true;

        loop {
            if needs_redraw {
                self.draw(terminal)?;
                needs_redraw = false;
            }

            tokio::select! {
                event = self.input_rx.recv() => match event {
                    Some(InputEvent::Key(key)) => match self.session.handle_key(key) {
                        KeyAction::Quit => break,
                        KeyAction::Redraw => needs_redraw = true,
                        KeyAction::Ignore => {}
                    },
                    Some(InputEvent::Resize) => {
                        terminal.autoresize().context("Failed to resize terminal")?;
                        needs_redraw = true;
                    }
                    None => {
                        tracing::warn!("Input channel closed, leaving session");
                        break;
                    }
                },
                outcome = self.session.next_outcome() => {
                    self.session.on_outcome_received(outcome);
                    needs_redraw = true;
                }
            }
        }

        if self.session.is_pending() {
            tracing::info!(
                "Waiting up to {:?} for the pending lookup before exit",
                self.shutdown_grace
            );
        }
        self.session.shutdown(self.shutdown_grace).await;
        Ok(())
    }

    fn draw<B: Backend>(&self, terminal: &mut Terminal<B>) -> Result<()> {
        let view = self.session.render();
        terminal
            .draw(|frame| draw_frame(frame, &view, &self.colors, &self.server))
            .context("Failed to draw frame")?;
        Ok(())
    }
}
