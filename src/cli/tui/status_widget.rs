// Status Widget - single status line below the result panel
//
// Left: a marker and the session's status text, colored by status kind.
// Right: key hints, dropped when the line is too narrow for both.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::cli::session::{FrameView, StatusKind};
use crate::config::ColorScheme;

pub const KEY_HINTS: &str = "Enter look up · ↑↓ history · Esc or q (empty line) quit";

pub struct StatusWidget<'a> {
    view: &'a FrameView,
    colors: &'a ColorScheme,
}

impl<'a> StatusWidget<'a> {
    pub fn new(view: &'a FrameView, colors: &'a ColorScheme) -> Self {
        Self { view, colors }
    }

    fn style(&self) -> Style {
        let status = &self.colors.status;
        match self.view.status_kind {
            StatusKind::Idle => Style::default().fg(status.idle.to_color()),
            StatusKind::Busy => Style::default()
                .fg(status.busy.to_color())
                .add_modifier(Modifier::BOLD),
            StatusKind::Success => Style::default().fg(status.success.to_color()),
            StatusKind::Notice => Style::default().fg(status.notice.to_color()),
            StatusKind::Error => Style::default()
                .fg(status.error.to_color())
                .add_modifier(Modifier::BOLD),
        }
    }

    fn marker(&self) -> &'static str {
        match self.view.status_kind {
            StatusKind::Idle => "  ",
            StatusKind::Busy => "… ",
            StatusKind::Success => "✓ ",
            StatusKind::Notice => "• ",
            StatusKind::Error => "✗ ",
        }
    }

    fn status_line(&self) -> Line<'static> {
        let style = self.style();
        Line::from(vec![
            Span::styled(self.marker(), style),
            Span::styled(self.view.status.clone(), style),
        ])
    }
}

impl<'a> Widget for StatusWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let status = self.status_line();
        let hints = Line::from(Span::styled(
            KEY_HINTS,
            Style::default().fg(self.colors.status.idle.to_color()),
        ));

        let hints_width = hints.width() as u16;
        if status.width() as u16 + hints_width + 2 > area.width {
            Paragraph::new(status).render(area, buf);
            return;
        }

        let [status_area, hints_area] = Layout::horizontal([
            Constraint::Min(0),
            Constraint::Length(hints_width),
        ])
        .areas(area);
        Paragraph::new(status).render(status_area, buf);
        Paragraph::new(hints)
            .alignment(Alignment::Right)
            .render(hints_area, buf);
    }
}
