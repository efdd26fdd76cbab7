//! Game-select menu rendering.

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// Menu entries in display order, with a one-line description each.
pub const MENU_ENTRIES: [(&str, &str); 2] = [
    ("Falling Blocks", "Stack tetrominoes and clear full rows"),
    ("Flappy Bird", "Steer a bird through scrolling pipe gaps"),
];

/// Render the game-select menu with the given entry highlighted.
pub fn render_menu(frame: &mut Frame, area: Rect, selected: usize) {
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" Arcade ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            "Pick a game",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
    ];

    for (i, (name, description)) in MENU_ENTRIES.iter().enumerate() {
        if i == selected {
            lines.push(Line::from(vec![
                Span::styled("\u{25BA} ", Style::default().fg(Color::Yellow)),
                Span::styled(
                    *name,
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD),
                ),
            ]));
        } else {
            lines.push(Line::from(vec![
                Span::raw("  "),
                Span::styled(*name, Style::default().fg(Color::White)),
            ]));
        }
        lines.push(Line::from(Span::styled(
            format!("    {}", description),
            Style::default().fg(Color::DarkGray),
        )));
        lines.push(Line::from(""));
    }

    lines.push(Line::from(vec![
        Span::styled("[\u{2191}\u{2193}]", Style::default().fg(Color::White)),
        Span::styled(" Select  ", Style::default().fg(Color::DarkGray)),
        Span::styled("[Enter]", Style::default().fg(Color::White)),
        Span::styled(" Play  ", Style::default().fg(Color::DarkGray)),
        Span::styled("[q]", Style::default().fg(Color::White)),
        Span::styled(" Quit", Style::default().fg(Color::DarkGray)),
    ]));

    let paragraph = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(paragraph, inner);
}
