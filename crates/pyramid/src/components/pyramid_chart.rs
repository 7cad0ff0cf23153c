//! The two-sided animated pyramid chart.
//!
//! One text row per age bucket, oldest bucket on top, Male bars growing left
//! of the center line and Female bars growing right. Bar lengths are scaled
//! by the per-location axis (fixed across all years) so the bars never
//! rescale while the animation runs. The tick axis below the bars always
//! reads positive on both sides.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use pyramid_core::model::AGE_GROUPS;
use pyramid_core::scale::{AxisScale, TICK_COUNT};

use super::{Component, EventResult};
use crate::state::AppState;

/// Width reserved for the age-bucket labels on the left edge.
const LABEL_WIDTH: usize = 7;

const MALE_COLOR: Color = Color::Blue;
const FEMALE_COLOR: Color = Color::Red;

pub struct PyramidChart;

impl PyramidChart {
    pub fn new() -> Self {
        Self
    }

    fn render_message(frame: &mut Frame, area: Rect, block: Block, message: &str) {
        let paragraph = Paragraph::new(Line::from(Span::styled(
            message.to_string(),
            Style::default().fg(Color::DarkGray),
        )))
        .block(block);
        frame.render_widget(paragraph, area);
    }

    fn render_bars(
        frame: &mut Frame,
        area: Rect,
        state: &AppState,
        location: &str,
        year: i32,
        scale: &AxisScale,
    ) {
        let width = area.width as usize;
        let half = width.saturating_sub(LABEL_WIDTH + 1) / 2;

        // One magnitude per (sex, age rank) for the displayed frame.
        let mut male = [0.0_f64; AGE_GROUPS.len()];
        let mut female = [0.0_f64; AGE_GROUPS.len()];
        for row in state.dataset.frame_rows(location, year) {
            match row.sex {
                pyramid_core::Sex::Male => male[row.age_rank] += row.value,
                pyramid_core::Sex::Female => female[row.age_rank] += row.value,
                pyramid_core::Sex::Both => {}
            }
        }

        for (display_row, rank) in (0..AGE_GROUPS.len()).rev().enumerate() {
            if display_row as u16 >= area.height {
                break;
            }

            let left = bar_cells(male[rank], scale.range(), half);
            let right = bar_cells(female[rank], scale.range(), half);

            let line = Line::from(vec![
                Span::styled(
                    format!("{:>width$} ", AGE_GROUPS[rank], width = LABEL_WIDTH - 1),
                    Style::default().fg(Color::DarkGray),
                ),
                Span::raw(" ".repeat(half - left)),
                Span::styled("█".repeat(left), Style::default().fg(MALE_COLOR)),
                Span::raw("│"),
                Span::styled("█".repeat(right), Style::default().fg(FEMALE_COLOR)),
            ]);

            let row_area = Rect::new(area.x, area.y + display_row as u16, area.width, 1);
            frame.render_widget(Paragraph::new(line), row_area);
        }
    }

    fn render_axis(frame: &mut Frame, area: Rect, scale: &AxisScale) {
        let width = area.width as usize;
        // Mirror the bar geometry exactly so the zero tick sits under the
        // center line.
        let half = width.saturating_sub(LABEL_WIDTH + 1) / 2;
        let axis_width = 2 * half + 1;

        let line = Line::from(vec![
            Span::raw(" ".repeat(LABEL_WIDTH)),
            Span::styled(
                axis_label_row(&scale.tick_labels, axis_width),
                Style::default().fg(Color::DarkGray),
            ),
        ]);
        frame.render_widget(Paragraph::new(line), area);
    }

    fn render_legend_and_timeline(frame: &mut Frame, area: Rect, state: &AppState, year: i32) {
        let years = state.years();
        let (first, last) = match (years.first(), years.last()) {
            (Some(&first), Some(&last)) => (first, last),
            _ => return,
        };

        let track_width = (area.width as usize).saturating_sub(LABEL_WIDTH + 24);
        let marker = if last > first {
            (year - first) as usize * track_width.saturating_sub(1) / (last - first) as usize
        } else {
            0
        };

        let mut track = String::new();
        for i in 0..track_width {
            track.push(if i == marker { '●' } else { '─' });
        }

        let line = Line::from(vec![
            Span::styled("◀ Male ", Style::default().fg(MALE_COLOR)),
            Span::styled("Female ▶", Style::default().fg(FEMALE_COLOR)),
            Span::raw("  "),
            Span::styled(format!("{first} "), Style::default().fg(Color::DarkGray)),
            Span::styled(track, Style::default().fg(Color::DarkGray)),
            Span::styled(format!(" {last}"), Style::default().fg(Color::DarkGray)),
        ]);
        frame.render_widget(Paragraph::new(line), area);
    }
}

impl Default for PyramidChart {
    fn default() -> Self {
        Self::new()
    }
}

impl Component for PyramidChart {
    fn handle_key(&mut self, key: KeyEvent, state: &mut AppState) -> EventResult {
        match key.code {
            KeyCode::Left | KeyCode::Char('h') => {
                state.playing = false;
                state.step_year(-1);
                EventResult::Handled
            }
            KeyCode::Right | KeyCode::Char('l') => {
                state.playing = false;
                state.step_year(1);
                EventResult::Handled
            }
            KeyCode::Char(' ') => {
                state.toggle_playing();
                EventResult::Handled
            }
            _ => EventResult::NotHandled,
        }
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, state: &AppState) {
        let Some(location) = state.selected_location() else {
            let block = Block::default().borders(Borders::ALL).title(" Pyramid ");
            Self::render_message(frame, area, block, "No location matches the filter");
            return;
        };

        let inputs = match state.dataset.chart_inputs(&location) {
            Ok(inputs) => inputs,
            Err(e) => {
                // Recoverable empty selection: message, no chart, no crash.
                tracing::debug!("selection without data: {e}");
                let block = Block::default().borders(Borders::ALL).title(" Pyramid ");
                Self::render_message(frame, area, block, &e.to_string());
                return;
            }
        };

        let playback = if state.playing { "▶" } else { "⏸" };
        let title = match state.current_year() {
            Some(year) => format!(" {} ({year}) {playback} ", inputs.title),
            None => format!(" {} ", inputs.title),
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .title(Span::styled(title, Style::default().add_modifier(Modifier::BOLD)));

        let Some(year) = state.current_year() else {
            Self::render_message(frame, area, block, "No year selected");
            return;
        };

        let inner = block.inner(area);
        frame.render_widget(block, area);

        // 21 bar rows, one axis row, one legend/timeline row.
        if (inner.height as usize) < AGE_GROUPS.len() + 2 || inner.width < 40 {
            Self::render_message(
                frame,
                inner,
                Block::default(),
                "Area too small for the pyramid",
            );
            return;
        }

        let bars_area = Rect::new(inner.x, inner.y, inner.width, AGE_GROUPS.len() as u16);
        let axis_area = Rect::new(inner.x, inner.y + AGE_GROUPS.len() as u16, inner.width, 1);
        let timeline_area = Rect::new(
            inner.x,
            inner.y + AGE_GROUPS.len() as u16 + 1,
            inner.width,
            1,
        );

        Self::render_bars(frame, bars_area, state, &location, year, &inputs.scale);
        Self::render_axis(frame, axis_area, &inputs.scale);
        Self::render_legend_and_timeline(frame, timeline_area, state, year);
    }
}

/// Number of whole cells a bar occupies for `value` on an axis spanning
/// `range` rendered across `half` cells. Non-zero values always show at
/// least one cell so small bars don't vanish.
fn bar_cells(value: f64, range: f64, half: usize) -> usize {
    if value <= 0.0 || range <= 0.0 || half == 0 {
        return 0;
    }
    let cells = (value / range * half as f64).round() as usize;
    cells.clamp(1, half)
}

/// Lay the nine tick labels out across `width` columns, centered over their
/// tick positions.
fn axis_label_row(labels: &[String; TICK_COUNT], width: usize) -> String {
    let mut out = vec![' '; width];
    if width == 0 {
        return String::new();
    }

    for (i, label) in labels.iter().enumerate() {
        let center = i * (width - 1) / (TICK_COUNT - 1);
        let start = center.saturating_sub(label.len() / 2).min(width.saturating_sub(label.len()));
        for (offset, c) in label.chars().enumerate() {
            if start + offset < width {
                out[start + offset] = c;
            }
        }
    }

    out.into_iter().collect()
}
