use ratatui::{
    layout::{Alignment, Rect},
    style::Style,
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
    Frame,
};

use crate::court::PADDLE_HEIGHT;
use crate::session::{Mode, Snapshot};
use crate::theme::ThemeColors;

/// Draw one session snapshot into `area`: bordered court with scores in the
/// title, dashed center line, both paddles and the ball. Court units are
/// scaled onto the inner cell grid, so any terminal size works.
pub fn draw_court(frame: &mut Frame, area: Rect, snap: &Snapshot, colors: &ThemeColors) {
    let block = Block::default()
        .title(score_title(snap, area.width))
        .borders(Borders::ALL)
        .border_type(BorderType::Thick)
        .style(Style::default().fg(colors.border).bg(colors.background))
        .title_alignment(Alignment::Center);
    frame.render_widget(block, area);

    if area.width < 12 || area.height < 6 {
        return;
    }
    let inner = Rect::new(
        area.x + 1,
        area.y + 1,
        area.width.saturating_sub(2),
        area.height.saturating_sub(2),
    );

    // Wipe the play field every frame. Ratatui alternates two buffers, so any
    // cell not written this frame would bleed through from two frames ago.
    frame.render_widget(Clear, inner);

    // Dashed center line, every other row.
    let net_col = inner.x + inner.width / 2;
    for row in (0..inner.height).step_by(2) {
        let cell = Rect::new(net_col, inner.y + row, 1, 1);
        let dash = Paragraph::new("╎").style(Style::default().fg(colors.net));
        frame.render_widget(dash, cell);
    }

    draw_paddles(frame, inner, snap, colors);
    draw_ball(frame, inner, snap, colors);
}

fn draw_paddles(frame: &mut Frame, inner: Rect, snap: &Snapshot, colors: &ThemeColors) {
    let paddle_cells = scale(PADDLE_HEIGHT, snap.court_height, inner.height).max(1);
    let max_row = inner.height.saturating_sub(paddle_cells);
    // Paddle y lives in [0, H - paddle_height]; map that range to the rows
    // the paddle can occupy.
    let y_range = snap.court_height - PADDLE_HEIGHT;

    for view in [&snap.left, &snap.right] {
        let row = ((view.y / y_range) * max_row as f32).clamp(0.0, max_row as f32) as u16;
        let col = ((view.x / snap.court_width) * inner.width as f32) as u16;
        let bar = Rect::new(
            inner.x + col.min(inner.width.saturating_sub(1)),
            inner.y + row,
            1,
            paddle_cells,
        );
        frame.render_widget(
            Block::default().style(Style::default().bg(colors.paddle)),
            bar,
        );
    }
}

fn draw_ball(frame: &mut Frame, inner: Rect, snap: &Snapshot, colors: &ThemeColors) {
    // Terminal cells are roughly twice as tall as wide, so the ball gets two
    // columns and one row; never smaller than its scaled court size.
    let cells = scale(snap.ball_size, snap.court_width, inner.width).max(2);
    let max_col = inner.width.saturating_sub(cells) as f32;
    let max_row = inner.height.saturating_sub(1) as f32;
    let col = ((snap.ball_x / snap.court_width) * max_col).clamp(0.0, max_col) as u16;
    let row = ((snap.ball_y / snap.court_height) * max_row).clamp(0.0, max_row) as u16;
    let ball = Paragraph::new("█".repeat(cells as usize)).style(Style::default().fg(colors.ball));
    frame.render_widget(ball, Rect::new(inner.x + col, inner.y + row, cells, 1));
}

fn score_title(snap: &Snapshot, width: u16) -> String {
    let left = format!("P1 ({})", snap.left.score);
    let right_name = match snap.mode {
        Mode::SinglePlayer => "CPU",
        Mode::TwoPlayer => "P2",
    };
    let right = format!("({}) {}", snap.right.score, right_name);
    let label = "tui.pong";

    let used = left.len() + label.len() + right.len() + 6;
    let dashes = (width as usize).saturating_sub(used) / 2;
    format!(
        " {} {} {} {} {} ",
        left,
        "─".repeat(dashes),
        label,
        "─".repeat(dashes),
        right,
    )
}

fn scale(value: f32, range: f32, cells: u16) -> u16 {
    ((value / range) * cells as f32).round() as u16
}
