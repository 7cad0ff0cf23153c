//! The four metric cells for the selected location and year.

use crossterm::event::KeyEvent;
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use super::{Component, EventResult};
use crate::state::AppState;

const CELL_TITLES: [&str; 4] = [
    " Total Population ",
    " Male Population ",
    " Female Population ",
    " Sex Ratio (M/F) ",
];

pub struct MetricsBar;

impl MetricsBar {
    pub fn new() -> Self {
        Self
    }
}

impl Default for MetricsBar {
    fn default() -> Self {
        Self::new()
    }
}

impl Component for MetricsBar {
    fn handle_key(&mut self, _key: KeyEvent, _state: &mut AppState) -> EventResult {
        EventResult::NotHandled
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, state: &AppState) {
        let cells = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Ratio(1, 4); 4])
            .split(area);

        let values = match (state.selected_location(), state.current_year()) {
            (Some(location), Some(year)) => {
                state.dataset.metrics(&location, year).display_strings()
            }
            // No selection: explicit dashes rather than misleading zeros.
            _ => std::array::from_fn(|_| "—".to_string()),
        };

        for i in 0..4 {
            let value = Line::from(Span::styled(
                format!(" {}", values[i]),
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ));
            let paragraph = Paragraph::new(value)
                .block(Block::default().borders(Borders::ALL).title(CELL_TITLES[i]));
            frame.render_widget(paragraph, cells[i]);
        }
    }
}
