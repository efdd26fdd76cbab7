//! UI rendering for the falling-block minigame.

use crate::games::tetris::{TetrisGame, COLS, ROWS};
use crate::ui::game_common::{
    create_game_layout, render_game_over_overlay, render_info_panel_frame, render_status_bar,
};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

const BORDER_H: char = '\u{2500}'; // ─
const BORDER_V: char = '\u{2502}'; // │
const BORDER_TL: char = '\u{250C}'; // ┌
const BORDER_TR: char = '\u{2510}'; // ┐
const BORDER_BL: char = '\u{2514}'; // └
const BORDER_BR: char = '\u{2518}'; // ┘

const BORDER_COLOR: Color = Color::Rgb(80, 80, 80);

/// Render the falling-block game scene.
pub fn render_tetris(frame: &mut Frame, area: Rect, game: &TetrisGame) {
    if game.game_over {
        render_game_over_overlay(
            frame,
            area,
            "GAME OVER",
            &format!("The well filled up after {} pieces.", game.score),
        );
        return;
    }

    let layout = create_game_layout(
        frame,
        area,
        " Falling Blocks ",
        Color::Cyan,
        ROWS as u16 + 2,
        22,
    );

    render_well(frame, layout.content, game);
    render_status_bar(
        frame,
        layout.status_bar,
        &format!("Score: {}", game.score),
        Color::Green,
        &[
            ("[\u{2190}\u{2192}]", "Move"),
            ("[\u{2191}]", "Rotate"),
            ("[\u{2193}]", "Drop"),
            ("[Esc]", "Menu"),
        ],
    );
    render_info_panel(frame, layout.info_panel, game);
}

/// Render the 10x20 well from a board snapshot, two terminal columns per
/// cell, with a box border around the play field.
fn render_well(frame: &mut Frame, area: Rect, game: &TetrisGame) {
    let render_w = (COLS * 2 + 2) as u16;
    let render_h = (ROWS + 2) as u16;
    if area.width < render_w || area.height < 3 {
        return;
    }

    let cells = game.snapshot();
    let x_off = (area.width - render_w) / 2;

    let mut lines = Vec::with_capacity(render_h as usize);
    let pad = " ".repeat(x_off as usize);
    let border_style = Style::default().fg(BORDER_COLOR);

    let top: String = std::iter::once(BORDER_TL)
        .chain(std::iter::repeat(BORDER_H).take(COLS * 2))
        .chain(std::iter::once(BORDER_TR))
        .collect();
    lines.push(Line::from(vec![
        Span::raw(pad.clone()),
        Span::styled(top, border_style),
    ]));

    for row in &cells {
        let mut spans = vec![
            Span::raw(pad.clone()),
            Span::styled(BORDER_V.to_string(), border_style),
        ];
        for &cell in row {
            if cell != 0 {
                spans.push(Span::styled(
                    "\u{2588}\u{2588}",
                    Style::default().fg(Color::White),
                ));
            } else {
                spans.push(Span::raw("  "));
            }
        }
        spans.push(Span::styled(BORDER_V.to_string(), border_style));
        lines.push(Line::from(spans));
    }

    let bottom: String = std::iter::once(BORDER_BL)
        .chain(std::iter::repeat(BORDER_H).take(COLS * 2))
        .chain(std::iter::once(BORDER_BR))
        .collect();
    lines.push(Line::from(vec![
        Span::raw(pad),
        Span::styled(bottom, border_style),
    ]));

    let paragraph = Paragraph::new(lines);
    frame.render_widget(paragraph, area);
}

/// Render the info panel on the right.
fn render_info_panel(frame: &mut Frame, area: Rect, game: &TetrisGame) {
    let inner = render_info_panel_frame(frame, area);

    if inner.height < 2 || inner.width < 4 {
        return;
    }

    let lines = vec![
        Line::from(vec![
            Span::styled(" Score: ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                format!("{}", game.score),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(""),
        Line::from(Span::styled(
            " One point per",
            Style::default().fg(Color::DarkGray),
        )),
        Line::from(Span::styled(
            " locked piece.",
            Style::default().fg(Color::DarkGray),
        )),
    ];

    let paragraph = Paragraph::new(lines);
    frame.render_widget(paragraph, inner);
}
