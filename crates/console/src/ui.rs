//! Rendering — container list, log overlay, placeholders.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{
        block::{Position, Title},
        Block, Borders, Clear, List, ListItem, ListState, Paragraph, Wrap,
    },
    Frame,
};

use crate::app::state::{AppState, ListFetch, LogView};

pub fn render(frame: &mut Frame, state: &AppState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(frame.size());

    render_title(frame, chunks[0]);
    render_container_list(frame, chunks[1], state);
    render_help(frame, chunks[2]);

    if state.log_view != LogView::Closed {
        render_log_overlay(frame, state);
    }
}

fn render_title(frame: &mut Frame, area: Rect) {
    let title = Paragraph::new("Docker Containers")
        .style(Style::default().add_modifier(Modifier::BOLD))
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(title, area);
}

fn render_container_list(frame: &mut Frame, area: Rect, state: &AppState) {
    let block = Block::default().borders(Borders::ALL);

    match &state.list {
        ListFetch::Loading => {
            let placeholder = Paragraph::new("Loading containers…").block(block);
            frame.render_widget(placeholder, area);
        }
        ListFetch::Failed => {
            let placeholder = Paragraph::new("Could not reach the gateway — press r to retry")
                .style(Style::default().fg(Color::Red))
                .block(block);
            frame.render_widget(placeholder, area);
        }
        ListFetch::Ready(containers) if containers.is_empty() => {
            let placeholder = Paragraph::new("No containers").block(block);
            frame.render_widget(placeholder, area);
        }
        ListFetch::Ready(containers) => {
            let items: Vec<ListItem> = containers
                .iter()
                .map(|c| {
                    let dot_color = if c.is_running() {
                        Color::Green
                    } else {
                        Color::Red
                    };
                    let mut spans = vec![
                        Span::styled("● ", Style::default().fg(dot_color)),
                        Span::styled(
                            c.name.clone(),
                            Style::default().add_modifier(Modifier::BOLD),
                        ),
                        Span::raw(format!("  {}", c.image)),
                    ];
                    let ports = c.ports_label();
                    if !ports.is_empty() {
                        spans.push(Span::styled(
                            format!("  [{}]", ports),
                            Style::default().fg(Color::DarkGray),
                        ));
                    }
                    ListItem::new(Line::from(spans))
                })
                .collect();

            let list = List::new(items)
                .block(block)
                .highlight_style(Style::default().bg(Color::DarkGray))
                .highlight_symbol("> ");

            let mut list_state = ListState::default();
            list_state.select(Some(state.selected));
            frame.render_stateful_widget(list, area, &mut list_state);
        }
    }
}

fn render_help(frame: &mut Frame, area: Rect) {
    let help = Paragraph::new("↑/↓ select   Enter logs   r refresh   q quit")
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(help, area);
}

fn render_log_overlay(frame: &mut Frame, state: &AppState) {
    let area = centered_rect(80, 70, frame.size());
    frame.render_widget(Clear, area);

    let (title, body, style) = match &state.log_view {
        LogView::Loading { name } => (
            format!(" Logs: {} ", name),
            "Loading logs…".to_string(),
            Style::default(),
        ),
        LogView::Shown { name, text } => (
            format!(" Logs: {} ", name),
            if text.is_empty() {
                "(no output)".to_string()
            } else {
                text.clone()
            },
            Style::default(),
        ),
        LogView::Failed { name } => (
            format!(" Logs: {} ", name),
            "Error fetching logs".to_string(),
            Style::default().fg(Color::Red),
        ),
        LogView::Closed => return,
    };

    let paragraph = Paragraph::new(body)
        .style(style)
        .wrap(Wrap { trim: false })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(title)
                .title(Title::from(" Esc to close ").position(Position::Bottom)),
        );
    frame.render_widget(paragraph, area);
}

/// Centered sub-rectangle taking the given percentages of the frame.
fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1])[1]
}
