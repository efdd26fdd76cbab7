//! UI rendering for the flappy bird minigame.

use crate::games::flappy::{
    FlappyGame, BIRD_SIZE, BIRD_X, GAME_HEIGHT, GAME_WIDTH, PIPE_WIDTH, TICK_INTERVAL_MS,
};
use crate::ui::game_common::{create_game_layout, render_info_panel_frame, render_status_bar};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Render the flappy bird game scene.
pub fn render_flappy(frame: &mut Frame, area: Rect, game: &FlappyGame) {
    let layout = create_game_layout(frame, area, " Flappy Bird ", Color::Cyan, 10, 22);

    render_play_area(frame, layout.content, game);
    render_status_bar(
        frame,
        layout.status_bar,
        "Stay between the pipes!",
        Color::Yellow,
        &[("[Space]", "Flap"), ("[Esc]", "Menu")],
    );
    render_info_panel(frame, layout.info_panel, game);
}

/// Render the play area, scaling game coordinates to the display cells.
fn render_play_area(frame: &mut Frame, area: Rect, game: &FlappyGame) {
    let width = area.width as usize;
    let height = area.height as usize;

    if width == 0 || height == 0 {
        return;
    }

    let x_scale = width as f64 / GAME_WIDTH;
    let y_scale = height as f64 / GAME_HEIGHT;

    // Bird center mapped to a display cell
    let bird_row = ((game.bird_y + BIRD_SIZE / 2.0) * y_scale) as usize;
    let bird_col = ((BIRD_X + BIRD_SIZE / 2.0) * x_scale) as usize;

    let bird_char = if game.bird_velocity < -2.0 {
        "\u{25B2}" // Flapping up
    } else if game.bird_velocity > 4.0 {
        "\u{25BC}" // Falling fast
    } else {
        "\u{25BA}" // Neutral
    };

    let mut lines = Vec::with_capacity(height);
    for display_row in 0..height {
        // Game coordinate at this cell's center
        let game_y = (display_row as f64 + 0.5) / y_scale;

        let mut spans = Vec::with_capacity(width);
        for display_col in 0..width {
            if display_row == bird_row && display_col == bird_col {
                spans.push(Span::styled(
                    bird_char,
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD),
                ));
                continue;
            }

            let game_x = (display_col as f64 + 0.5) / x_scale;
            let in_pipe = game.pipes.iter().any(|pipe| {
                game_x >= pipe.x
                    && game_x < pipe.x + PIPE_WIDTH
                    && (game_y < pipe.top || game_y > GAME_HEIGHT - pipe.bottom)
            });

            if in_pipe {
                spans.push(Span::styled(
                    "\u{2588}",
                    Style::default().fg(Color::Green),
                ));
            } else {
                spans.push(Span::raw(" "));
            }
        }

        lines.push(Line::from(spans));
    }

    let paragraph = Paragraph::new(lines);
    frame.render_widget(paragraph, area);
}

/// Render the info panel on the right.
fn render_info_panel(frame: &mut Frame, area: Rect, game: &FlappyGame) {
    let inner = render_info_panel_frame(frame, area);

    if inner.height < 2 || inner.width < 4 {
        return;
    }

    let run_seconds = game.tick_count * TICK_INTERVAL_MS / 1000;

    let lines = vec![
        Line::from(vec![
            Span::styled(" Run: ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                format!("{}s", run_seconds),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(vec![
            Span::styled(" Pipes: ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                format!("{}", game.pipes.len()),
                Style::default().fg(Color::Green),
            ),
        ]),
        Line::from(""),
        Line::from(Span::styled(
            " Crashing restarts",
            Style::default().fg(Color::DarkGray),
        )),
        Line::from(Span::styled(
            " the run.",
            Style::default().fg(Color::DarkGray),
        )),
    ];

    let paragraph = Paragraph::new(lines);
    frame.render_widget(paragraph, inner);
}
