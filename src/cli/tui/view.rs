// Query screen layout: input field, result panel, status line
//
// Drawing is a function of a FrameView and the color scheme only.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Position, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use super::status_widget::StatusWidget;
use crate::cli::session::FrameView;
use crate::config::ColorScheme;

const INPUT_HEIGHT: u16 = 3;
const STATUS_HEIGHT: u16 = 1;

/// Split the screen into (input, result, status) areas.
pub fn screen_layout(area: Rect) -> [Rect; 3] {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(INPUT_HEIGHT),
            Constraint::Min(1),
            Constraint::Length(STATUS_HEIGHT),
        ])
        .split(area);
    [chunks[0], chunks[1], chunks[2]]
}

/// Draw one frame. `server` is shown in the input field's title.
pub fn draw_frame(frame: &mut Frame, view: &FrameView, colors: &ColorScheme, server: &str) {
    let [input_area, result_area, status_area] = screen_layout(frame.area());

    let border_style = Style::default().fg(colors.panel.border.to_color());
    let title_style = Style::default()
        .fg(colors.panel.title.to_color())
        .add_modifier(Modifier::BOLD);

    // Input
    let input_block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style)
        .title_top(Line::from(Span::styled(" Slang term ", title_style)))
        .title_top(
            Line::from(Span::styled(format!(" {} ", server), border_style))
                .alignment(Alignment::Right),
        );
    let input_inner = input_block.inner(input_area);
    let before_cursor: String = view.input.chars().take(view.cursor_col).collect();
    let cursor_x = Line::from(before_cursor).width() as u16;
    let scroll = input_scroll(cursor_x, input_inner.width);
    let input = Paragraph::new(Span::styled(
        view.input.clone(),
        Style::default().fg(colors.panel.input.to_color()),
    ))
    .scroll((0, scroll))
    .block(input_block);
    frame.render_widget(input, input_area);

    if input_inner.width > 0 && input_inner.height > 0 {
        frame.set_cursor_position(Position::new(
            input_inner.x + cursor_x - scroll,
            input_inner.y,
        ));
    }

    // Result
    let result_title = if view.pending {
        " Definition (waiting for server) "
    } else {
        " Definition "
    };
    let result = Paragraph::new(view.result.clone())
        .style(Style::default().fg(colors.panel.result.to_color()))
        .wrap(Wrap { trim: false })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border_style)
                .title_top(Line::from(Span::styled(result_title, title_style))),
        );
    frame.render_widget(result, result_area);

    frame.render_widget(StatusWidget::new(view, colors), status_area);
}

/// Columns to scroll the input so the cursor stays on the last visible cell.
fn input_scroll(cursor_x: u16, width: u16) -> u16 {
    if width == 0 {
        return 0;
    }
    cursor_x.saturating_sub(width - 1)
}
