// Async input handler for TUI - keyboard polling off the UI task

use crossterm::event::{Event, KeyCode, KeyEvent};
use std::time::Duration;
use tokio::sync::mpsc;

const POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Terminal events forwarded to the event loop
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputEvent {
    Key(KeyEvent),
    /// The terminal was resized; the frame must be redrawn.
    Resize,
}

/// Drop characters that would corrupt the input line: control characters and
/// private-use code points (terminal image protocols live there).
fn accept_char(c: char) -> bool {
    match c {
        ' '..='~' => true,
        '\u{0080}'..='\u{10FFFF}' => !matches!(
            c,
            '\u{E000}'..='\u{F8FF}' | '\u{F0000}'..='\u{FFFFD}' | '\u{100000}'..='\u{10FFFD}'
        ),
        _ => false,
    }
}

fn should_forward(key: &KeyEvent) -> bool {
    match key.code {
        KeyCode::Char(c) => accept_char(c),
        _ => true,
    }
}

/// Spawn a blocking task that polls the keyboard and forwards events.
///
/// The task stops when the receiver is dropped or reading the terminal fails.
pub fn spawn_input_task() -> mpsc::UnboundedReceiver<InputEvent> {
    let (tx, rx) = mpsc::unbounded_channel();

    tokio::task::spawn_blocking(move || {
        while !tx.is_closed() {
            match crossterm::event::poll(POLL_INTERVAL) {
                Ok(false) => continue,
                Ok(true) => {}
                Err(e) => {
                    tracing::warn!("Failed to poll terminal input: {}", e);
                    break;
                }
            }

            let forwarded = match crossterm::event::read() {
                Ok(Event::Key(key)) if should_forward(&key) => tx.send(InputEvent::Key(key)),
                Ok(Event::Resize(_, _)) => tx.send(InputEvent::Resize),
                Ok(_) => Ok(()),
                Err(e) => {
                    tracing::warn!("Failed to read terminal input: {}", e);
                    break;
                }
            };

            if forwarded.is_err() {
                break;
            }
        }
        tracing::debug!("Input task stopped");
    });

    rx
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    #[test]
    fn test_printable_characters_accepted() {
        assert!(accept_char('a'));
        assert!(accept_char(' '));
        assert!(accept_char('é'));
        assert!(accept_char('🔥'));
    }

    #[test]
    fn test_control_and_private_use_rejected() {
        assert!(!accept_char('\u{1b}'));
        assert!(!accept_char('\u{7}'));
        assert!(!accept_char('\u{E000}'));
    }

    #[test]
    fn test_non_char_keys_forwarded() {
        assert!(should_forward(&KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE)));
        assert!(should_forward(&KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE)));
        assert!(!should_forward(&KeyEvent::new(
            KeyCode::Char('\u{F8FF}'),
            KeyModifiers::NONE
        )));
    }
}
