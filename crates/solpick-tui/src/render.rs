//! Pure render functions for the demo host screen.
//!
//! Functions here take `&AppState` by immutable reference, draw to a
//! ratatui frame, and never mutate state or return effects.

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::state::AppState;

/// Height of the hint line at the bottom.
const HINTS_HEIGHT: u16 = 1;

pub fn render(app: &AppState, frame: &mut Frame) {
    let area = frame.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(HINTS_HEIGHT)])
        .split(area);

    render_host_panel(app, frame, chunks[0]);
    render_hints(frame, chunks[1]);

    if let Some(picker) = &app.overlay {
        picker.render(frame, area);
    }
}

fn render_host_panel(app: &AppState, frame: &mut Frame, area: Rect) {
    let state = &app.tui;

    let connected = state
        .connected
        .as_ref()
        .map_or_else(|| "(none)".to_string(), ToString::to_string);
    let picker_open = if state.picker_open { "yes" } else { "no" };

    let lines = vec![
        Line::default(),
        Line::from(vec![
            Span::raw("  Wallets offered: "),
            Span::styled(
                state.wallets.len().to_string(),
                Style::default().fg(Color::Cyan),
            ),
        ]),
        Line::from(vec![
            Span::raw("  Connected: "),
            Span::styled(
                connected,
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(vec![
            Span::raw("  Picker open: "),
            Span::styled(picker_open, Style::default().fg(Color::DarkGray)),
        ]),
    ];

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" solpick ")
        .title_style(Style::default().add_modifier(Modifier::BOLD));
    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn render_hints(frame: &mut Frame, area: Rect) {
    let line = Line::from(vec![
        Span::styled("w", Style::default().fg(Color::Cyan)),
        Span::styled(" choose wallet", Style::default().fg(Color::DarkGray)),
        Span::styled(" • ", Style::default().fg(Color::DarkGray)),
        Span::styled("q", Style::default().fg(Color::Cyan)),
        Span::styled(" quit", Style::default().fg(Color::DarkGray)),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}
