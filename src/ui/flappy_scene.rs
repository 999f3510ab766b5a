//! Scene rendering for the play field and its overlay screens.

use super::{centered_panel, game_over_panel, screen_layout};
use crate::game::types::{FlappyGame, RunState, BIRD_SIZE, BIRD_X, FIELD_HEIGHT, FIELD_WIDTH};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// Render the full game scene.
pub fn render_flappy(frame: &mut Frame, area: Rect, game: &FlappyGame, best_score: u32) {
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" Flappy Bird ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    frame.render_widget(block, area);

    let layout = screen_layout(area);
    render_play_area(frame, layout.play_area, game);
    render_score_overlay(frame, layout.play_area, game);
    render_status_bar(frame, layout.status_bar, game);

    match game.state {
        RunState::NotStarted => render_start_overlay(frame, layout.play_area),
        RunState::Running => {}
        RunState::Over => render_game_over_overlay(frame, layout.play_area, game, best_score),
    }
}

/// Draw the scrolling field: pipes as block pairs, the bird as a glyph that
/// tilts with its velocity.
fn render_play_area(frame: &mut Frame, area: Rect, game: &FlappyGame) {
    let width = area.width as usize;
    let height = area.height as usize;
    if width == 0 || height == 0 {
        return;
    }

    // World units → display cells
    let x_scale = width as f64 / FIELD_WIDTH;
    let y_scale = height as f64 / FIELD_HEIGHT;
    let col_of = |x: f64| (x * x_scale).round() as isize;
    let row_of = |y: f64| (y * y_scale).round() as isize;

    // Bird box in display cells, never smaller than one cell
    let bird_left = col_of(BIRD_X);
    let bird_right = col_of(BIRD_X + BIRD_SIZE).max(bird_left + 1);
    let bird_top = row_of(game.bird_y);
    let bird_bottom = row_of(game.bird_y + BIRD_SIZE).max(bird_top + 1);

    let bird_char = if game.bird_vel < -2.0 {
        "▲" // Climbing after a flap
    } else if game.bird_vel > 4.0 {
        "▼" // Diving
    } else {
        "►"
    };
    let bird_style = Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::BOLD);

    let mut lines = Vec::with_capacity(height);
    for row in 0..height {
        let row = row as isize;
        let mut spans = Vec::with_capacity(width);

        for col in 0..width {
            let col = col as isize;

            if (bird_left..bird_right).contains(&col) && (bird_top..bird_bottom).contains(&row) {
                spans.push(Span::styled(bird_char, bird_style));
                continue;
            }

            let mut cell = Span::raw(" ");
            for pipe in &game.pipes {
                let left = col_of(pipe.x);
                let right = col_of(pipe.trailing_edge());
                if col < left || col >= right {
                    continue;
                }

                let gap_top = row_of(pipe.gap_top);
                let gap_bottom = row_of(pipe.gap_bottom());
                if row < gap_top || row >= gap_bottom {
                    cell = Span::styled("█", Style::default().fg(Color::Green));
                } else if row == gap_top || row + 1 == gap_bottom {
                    cell = Span::styled("░", Style::default().fg(Color::DarkGray));
                }
                break;
            }
            spans.push(cell);
        }

        lines.push(Line::from(spans));
    }

    frame.render_widget(Paragraph::new(lines), area);
}

/// Current score, centered over the top of the field.
fn render_score_overlay(frame: &mut Frame, area: Rect, game: &FlappyGame) {
    if area.height == 0 {
        return;
    }
    let score = Paragraph::new(Span::styled(
        game.score.to_string(),
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD),
    ))
    .alignment(Alignment::Center);
    frame.render_widget(score, Rect { height: 1, ..area });
}

/// Two-line status bar: state message plus live control hints.
fn render_status_bar(frame: &mut Frame, area: Rect, game: &FlappyGame) {
    if area.height < 1 {
        return;
    }

    let (text, color, controls): (String, Color, &[(&str, &str)]) = match game.state {
        RunState::NotStarted => (
            "Press Space or click to start!".to_string(),
            Color::Yellow,
            &[("[Space/Click]", "Flap"), ("[Q]", "Quit")],
        ),
        RunState::Running => (
            format!("Score: {}", game.score),
            Color::Green,
            &[("[Space/Click]", "Flap"), ("[Q]", "Quit")],
        ),
        RunState::Over => (
            format!("Crashed at {}!", game.score),
            Color::Red,
            &[("[R]", "Restart"), ("[Q]", "Quit")],
        ),
    };

    let status = Paragraph::new(text)
        .style(Style::default().fg(color))
        .alignment(Alignment::Center);
    frame.render_widget(status, Rect { height: 1, ..area });

    if area.height >= 2 {
        let mut spans = Vec::new();
        for (i, (key, action)) in controls.iter().enumerate() {
            if i > 0 {
                spans.push(Span::raw("  "));
            }
            spans.push(Span::styled(*key, Style::default().fg(Color::White)));
            spans.push(Span::styled(
                format!(" {}", action),
                Style::default().fg(Color::DarkGray),
            ));
        }
        let controls_line = Paragraph::new(Line::from(spans)).alignment(Alignment::Center);
        frame.render_widget(
            controls_line,
            Rect {
                y: area.y + 1,
                height: 1,
                ..area
            },
        );
    }
}

/// Centered prompt shown before the first flap.
fn render_start_overlay(frame: &mut Frame, area: Rect) {
    let panel = centered_panel(area, 34, 7);
    frame.render_widget(Clear, panel);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Yellow));
    let inner = block.inner(panel);
    frame.render_widget(block, panel);

    let lines = vec![
        Line::from(Span::styled(
            "FLAPPY BIRD",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "Press Space or click to start",
            Style::default().fg(Color::White),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "[Q] Quit",
            Style::default().fg(Color::DarkGray),
        )),
    ];
    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), inner);
}

/// Final score panel with the clickable restart control.
fn render_game_over_overlay(frame: &mut Frame, area: Rect, game: &FlappyGame, best_score: u32) {
    let panel = game_over_panel(area);
    frame.render_widget(Clear, panel);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Red));
    let inner = block.inner(panel);
    frame.render_widget(block, panel);

    let lines = vec![
        Line::from(Span::styled(
            "GAME OVER",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled("Score: ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                game.score.to_string(),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(vec![
            Span::styled("Best: ", Style::default().fg(Color::DarkGray)),
            Span::styled(best_score.to_string(), Style::default().fg(Color::Cyan)),
        ]),
        Line::from(""),
        // Stays on the sixth content line; restart_button() targets that row
        Line::from(Span::styled(
            " [R] Play Again ",
            Style::default()
                .fg(Color::Black)
                .bg(Color::Green)
                .add_modifier(Modifier::BOLD),
        )),
    ];
    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), inner);
}
