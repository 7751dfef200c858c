// Render tests for the query screen
//
// Frames are drawn into ratatui's TestBackend and inspected as text, so
// no terminal is needed.

use madslang::cli::tui::{draw_frame, screen_layout};
use madslang::cli::{FrameView, InteractiveSession, StatusKind};
use madslang::client::{QueryOutcome, SlangLookup};
use madslang::config::ColorScheme;
use madslang::protocol::SlangDefinition;
use ratatui::{
    backend::TestBackend,
    layout::{Position, Rect},
    Terminal,
};
use std::sync::Arc;

struct NoLookup;

#[async_trait::async_trait]
impl SlangLookup for NoLookup {
    async fn execute(&self, term: &str) -> QueryOutcome {
        QueryOutcome::NotFound(term.to_string())
    }
}

fn render_lines(view: &FrameView, width: u16, height: u16) -> Vec<String> {
    let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
    let colors = ColorScheme::default();
    terminal
        .draw(|frame| draw_frame(frame, view, &colors, "127.0.0.1:8080"))
        .unwrap();

    let buffer = terminal.backend().buffer();
    (0..height)
        .map(|y| {
            (0..width)
                .map(|x| buffer[(x, y)].symbol().to_string())
                .collect::<String>()
        })
        .collect()
}

#[test]
fn test_idle_screen_shows_prompt_and_server() {
    let session = InteractiveSession::new(Arc::new(NoLookup));
    let lines = render_lines(&session.render(), 80, 12);

    assert!(lines[0].contains("Slang term"));
    assert!(lines[0].contains("127.0.0.1:8080"));
    assert!(lines[11].contains("type a slang term and press Enter"));
}

#[test]
fn test_success_screen_shows_definition() {
    let mut session = InteractiveSession::new(Arc::new(NoLookup));
    session.on_outcome_received(QueryOutcome::Success(SlangDefinition::new(
        "yeet",
        "to throw",
        "internet slang",
    )));

    let lines = render_lines(&session.render(), 80, 12);
    let screen = lines.join("\n");

    assert!(screen.contains("yeet"));
    assert!(screen.contains("to throw"));
    assert!(screen.contains("internet slang"));
    assert!(lines[11].contains("query succeeded"));
}

#[test]
fn test_input_text_is_drawn_inside_field() {
    let view = FrameView {
        input: "no cap".to_string(),
        cursor_col: 6,
        result: String::new(),
        status: "querying: no cap".to_string(),
        status_kind: StatusKind::Busy,
        pending: true,
    };

    let lines = render_lines(&view, 60, 10);

    // Row 1 is inside the bordered input field.
    assert!(lines[1].contains("no cap"));
    assert!(lines[3].contains("waiting for server"));
    assert!(lines[9].contains("querying: no cap"));
}

#[test]
fn test_long_input_scrolls_to_cursor() {
    let input = format!("{}TAIL", "a".repeat(60));
    let view = FrameView {
        cursor_col: input.chars().count(),
        input,
        result: String::new(),
        status: String::new(),
        status_kind: StatusKind::Idle,
        pending: false,
    };

    let mut terminal = Terminal::new(TestBackend::new(40, 10)).unwrap();
    let colors = ColorScheme::default();
    terminal
        .draw(|frame| draw_frame(frame, &view, &colors, "127.0.0.1:8080"))
        .unwrap();

    let buffer = terminal.backend().buffer();
    let row: String = (0..40).map(|x| buffer[(x, 1)].symbol().to_string()).collect();
    assert!(row.contains("TAIL"), "input row: {:?}", row);
    // Cursor sits on the last cell inside the border.
    assert_eq!(terminal.get_cursor_position().unwrap(), Position::new(38, 1));
}

#[test]
fn test_long_definition_wraps_inside_panel() {
    let long = "word ".repeat(40);
    let mut session = InteractiveSession::new(Arc::new(NoLookup));
    session.on_outcome_received(QueryOutcome::Success(SlangDefinition::new(
        "long",
        long.trim(),
        "",
    )));

    let lines = render_lines(&session.render(), 40, 16);
    let result_rows = lines[4..14]
        .iter()
        .filter(|line| line.contains("word"))
        .count();

    assert!(result_rows > 1, "definition should wrap: {:#?}", lines);
}

#[test]
fn test_layout_matches_drawn_regions() {
    let [input, result, status] = screen_layout(Rect::new(0, 0, 80, 12));
    assert_eq!(input.height, 3);
    assert_eq!(result.y, 3);
    assert_eq!(result.height, 8);
    assert_eq!(status.y, 11);
}
