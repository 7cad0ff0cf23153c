//! Location picker panel with incremental search.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState},
};

use super::{Component, EventResult};
use crate::state::AppState;

pub struct LocationList {
    list_state: ListState,
}

impl LocationList {
    pub fn new() -> Self {
        Self {
            list_state: ListState::default(),
        }
    }

    fn title(state: &AppState) -> String {
        if state.searching {
            format!(" Location /{}_ ", state.filter)
        } else if !state.filter.is_empty() {
            format!(" Location /{} ", state.filter)
        } else {
            " Location ".to_string()
        }
    }
}

impl Default for LocationList {
    fn default() -> Self {
        Self::new()
    }
}

impl Component for LocationList {
    fn handle_key(&mut self, key: KeyEvent, state: &mut AppState) -> EventResult {
        if state.searching {
            match key.code {
                KeyCode::Esc => state.clear_filter(),
                KeyCode::Enter => state.searching = false,
                KeyCode::Backspace => state.pop_filter_char(),
                KeyCode::Down => state.select_next(),
                KeyCode::Up => state.select_prev(),
                KeyCode::Char(c) => state.push_filter_char(c),
                _ => return EventResult::NotHandled,
            }
            return EventResult::Handled;
        }

        match key.code {
            KeyCode::Char('/') => {
                state.searching = true;
                EventResult::Handled
            }
            KeyCode::Char('j') | KeyCode::Down => {
                state.select_next();
                EventResult::Handled
            }
            KeyCode::Char('k') | KeyCode::Up => {
                state.select_prev();
                EventResult::Handled
            }
            KeyCode::Esc if !state.filter.is_empty() => {
                state.clear_filter();
                EventResult::Handled
            }
            _ => EventResult::NotHandled,
        }
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, state: &AppState) {
        let locations = state.filtered_locations();

        let items: Vec<ListItem> = locations
            .iter()
            .map(|&location| ListItem::new(Line::from(location.to_string())))
            .collect();

        let block = Block::default()
            .borders(Borders::ALL)
            .title(Self::title(state));

        if items.is_empty() {
            let empty = List::new(vec![ListItem::new(Line::from(Span::styled(
                "no matches",
                Style::default().fg(Color::DarkGray),
            )))])
            .block(block);
            frame.render_widget(empty, area);
            return;
        }

        self.list_state.select(Some(state.selected_index()));

        let list = List::new(items)
            .block(block)
            .highlight_style(
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )
            .highlight_symbol("> ");

        frame.render_stateful_widget(list, area, &mut self.list_state);
    }
}
