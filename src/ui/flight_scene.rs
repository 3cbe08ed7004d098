//! Flight screen rendering.
//!
//! Draws the ramp, rocket sprite and thrust flame into a cell buffer scaled
//! from flight units to terminal rows, plus the HUD, info panel, launch
//! prompt and game over overlay.

use super::game_common::{
    create_game_layout, render_game_over_overlay, render_status_bar, render_too_small,
};
use crate::flight::{FlightController, FlightPhase};
use rand::Rng;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

const MIN_WIDTH: u16 = 40;
const MIN_HEIGHT: u16 = 14;
const INFO_PANEL_WIDTH: u16 = 20;
const FLAME_COLOR: Color = Color::Rgb(255, 165, 0);

/// Render the whole flight screen.
pub fn render_flight_scene(frame: &mut Frame, area: Rect, flight: &FlightController) {
    if area.width < MIN_WIDTH || area.height < MIN_HEIGHT {
        render_too_small(frame, area, MIN_WIDTH, MIN_HEIGHT);
        return;
    }

    let layout = create_game_layout(
        frame,
        area,
        " Rocket Drop ",
        Color::LightBlue,
        8,
        INFO_PANEL_WIDTH,
    );

    render_play_field(frame, layout.content, flight);

    if !flight.is_launched() {
        render_launch_prompt(frame, layout.content);
    }

    render_status(frame, layout.status_bar, flight);
    render_info_panel(frame, layout.info_panel, flight);

    if flight.game_over {
        let message = format!(
            "You hit the ramp after {:.1}s.",
            flight.flight_time_ms as f64 / 1000.0
        );
        render_game_over_overlay(
            frame,
            layout.content,
            "ROCKET DOWN!",
            &message,
            "[R] Play again  [Q] Quit",
        );
    }
}

/// Cell in the render buffer.
#[derive(Clone, Copy)]
struct Cell {
    ch: char,
    fg: Color,
}

impl Default for Cell {
    fn default() -> Self {
        Self {
            ch: ' ',
            fg: Color::Reset,
        }
    }
}

/// Map a flight position (units from the top) to a terminal row.
fn to_row(position: f64, scale: f64) -> i32 {
    (position * scale).round() as i32
}

/// Rocket sprite rows, nose first. Always at least nose and fins.
fn rocket_sprite(rows: usize) -> Vec<&'static str> {
    let mut sprite = vec![" ^ "];
    for _ in 0..rows.saturating_sub(2) {
        sprite.push("[#]");
    }
    sprite.push("/|\\");
    sprite
}

fn render_play_field(frame: &mut Frame, area: Rect, flight: &FlightController) {
    if area.height < 2 || area.width < 10 {
        return;
    }
    let rows = area.height as usize;
    let cols = area.width as usize;
    let config = &flight.config;
    let scale = rows as f64 / config.viewport_height;

    let mut buffer: Vec<Vec<Cell>> = vec![vec![Cell::default(); cols]; rows];
    let put = |buffer: &mut Vec<Vec<Cell>>, row: i32, col: usize, ch: char, fg: Color| {
        if row >= 0 && (row as usize) < rows && col < cols {
            buffer[row as usize][col] = Cell { ch, fg };
        }
    };

    // -- Ramp --
    let ramp_row = to_row(config.viewport_height - config.ramp_offset, scale).min(rows as i32 - 1);
    for col in 0..cols {
        put(&mut buffer, ramp_row, col, '═', Color::White);
    }

    // -- Rocket --
    let center = cols / 2;
    let sprite_rows = ((config.rocket_size * scale).round() as usize).max(2);
    let top = to_row(flight.position(), scale);
    let body_color = if flight.game_over {
        Color::Red
    } else {
        Color::White
    };
    for (i, line) in rocket_sprite(sprite_rows).iter().enumerate() {
        for (j, ch) in line.chars().enumerate() {
            if ch != ' ' {
                put(&mut buffer, top + i as i32, center + j - 1, ch, body_color);
            }
        }
    }

    // -- Thrust flame, longer with more intensity --
    let intensity = flight.thrust_intensity();
    if intensity > 0.05 {
        let mut rng = rand::thread_rng();
        let length = (intensity * 3.0).ceil() as i32;
        let flame_top = top + sprite_rows as i32;
        for i in 0..length {
            let ch = if rng.gen_bool(0.5) { '\'' } else { '"' };
            let fg = if i == 0 { Color::Yellow } else { FLAME_COLOR };
            put(&mut buffer, flame_top + i, center, ch, fg);
        }
    }

    // -- HUD: clearance and thrust gauge (top-left) --
    let hud = [
        (format!("CLEAR {:>5.0}", flight.clearance()), clearance_color(flight)),
        (thrust_gauge(intensity), FLAME_COLOR),
    ];
    for (row, (text, color)) in hud.iter().enumerate() {
        for (col, ch) in text.chars().enumerate() {
            put(&mut buffer, row as i32, col, ch, *color);
        }
    }

    // -- Render buffer to terminal --
    for (row_idx, row_data) in buffer.iter().enumerate() {
        let mut spans: Vec<Span> = Vec::new();
        let mut current_fg = Color::Reset;
        let mut current_text = String::new();

        for &cell in row_data.iter() {
            if cell.fg != current_fg && !current_text.is_empty() {
                spans.push(Span::styled(
                    std::mem::take(&mut current_text),
                    Style::default().fg(current_fg),
                ));
            }
            current_fg = cell.fg;
            current_text.push(cell.ch);
        }
        if !current_text.is_empty() {
            spans.push(Span::styled(current_text, Style::default().fg(current_fg)));
        }

        let row_area = Rect::new(area.x, area.y + row_idx as u16, area.width, 1);
        frame.render_widget(Paragraph::new(Line::from(spans)), row_area);
    }
}

fn clearance_color(flight: &FlightController) -> Color {
    let ratio = flight.clearance() / flight.config.viewport_height;
    if ratio < 0.1 {
        Color::Red
    } else if ratio < 0.25 {
        Color::Yellow
    } else {
        Color::Green
    }
}

/// `THR [||||      ]` with ten segments.
fn thrust_gauge(intensity: f64) -> String {
    let filled = (intensity.clamp(0.0, 1.0) * 10.0).round() as usize;
    format!("THR [{}{}]", "|".repeat(filled), " ".repeat(10 - filled))
}

fn render_launch_prompt(frame: &mut Frame, area: Rect) {
    let lines = vec![
        Line::from(Span::styled(
            "Rocket Drop",
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "Press [Space] or [Enter] to launch",
            Style::default().fg(Color::Yellow),
        )),
    ];
    let y = area.y + area.height.saturating_sub(3) / 2;
    frame.render_widget(
        Paragraph::new(lines).alignment(Alignment::Center),
        Rect::new(area.x, y, area.width, area.height.min(3)),
    );
}

fn render_status(frame: &mut Frame, area: Rect, flight: &FlightController) {
    let (text, color, controls): (&str, Color, &[(&str, &str)]) = match flight.phase {
        FlightPhase::Idle => (
            "Ready for launch",
            Color::Cyan,
            &[("[Space]", "Launch"), ("[Q]", "Quit")],
        ),
        FlightPhase::Descending | FlightPhase::Falling => (
            "Hold to fire the engine!",
            Color::Yellow,
            &[("[Space]", "Thrust"), ("[R]", "Reset"), ("[Q]", "Quit")],
        ),
        FlightPhase::Thrusting => (
            "Engine burning",
            Color::Green,
            &[("[Space]", "Thrust"), ("[R]", "Reset"), ("[Q]", "Quit")],
        ),
        FlightPhase::Crashed => (
            "The rocket hit the ramp",
            Color::Red,
            &[("[R]", "Play again"), ("[Q]", "Quit")],
        ),
    };
    render_status_bar(frame, area, text, color, controls);
}

fn render_info_panel(frame: &mut Frame, area: Rect, flight: &FlightController) {
    let block = ratatui::widgets::Block::default()
        .title(" Flight ")
        .borders(ratatui::widgets::Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let label = Style::default().fg(Color::DarkGray);
    let value = Style::default().fg(Color::White);
    let row = |name: &'static str, text: String| {
        Line::from(vec![Span::styled(name, label), Span::styled(text, value)])
    };

    let lines = vec![
        row("Phase: ", flight.phase.label().to_string()),
        row(
            "Time:  ",
            format!("{:.1}s", flight.flight_time_ms as f64 / 1000.0),
        ),
        row("Burns: ", flight.burns.to_string()),
        row("Alt:   ", format!("{:.0}", flight.position())),
        row(
            "Ramp:  ",
            format!("{:.0}", flight.config.collision_threshold()),
        ),
    ];
    frame.render_widget(Paragraph::new(lines), inner);
}
