use std::io;
use std::path::PathBuf;
use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{
    DefaultTerminal, Frame,
    layout::{Constraint, Direction, Layout, Rect},
};

use pyramid_core::Dataset;

use crate::components::{
    Component, EventResult, location_list::LocationList, metrics_bar::MetricsBar,
    pyramid_chart::PyramidChart, status_bar::StatusBar,
};
use crate::state::AppState;

/// Time between animation frames while playback is running.
const FRAME_DURATION: Duration = Duration::from_millis(200);

/// How long to wait for input when idle before redrawing anyway.
const IDLE_POLL: Duration = Duration::from_millis(250);

pub struct App {
    state: AppState,
    data_path: PathBuf,
    location_list: LocationList,
    chart: PyramidChart,
    metrics_bar: MetricsBar,
    status_bar: StatusBar,
    last_frame: Instant,
}

impl App {
    pub fn new(dataset: Dataset, data_path: PathBuf) -> Self {
        Self {
            state: AppState::new(dataset),
            data_path,
            location_list: LocationList::new(),
            chart: PyramidChart::new(),
            metrics_bar: MetricsBar::new(),
            status_bar: StatusBar::new(),
            last_frame: Instant::now(),
        }
    }

    /// Re-parse the source file, keeping the current selection where the new
    /// data still has it. The only way the cached table is ever invalidated.
    fn reload(&mut self) {
        match Dataset::load_from_path(&self.data_path) {
            Ok(dataset) => {
                tracing::info!(rows = dataset.rows().len(), "dataset reloaded");
                self.state.replace_dataset(dataset);
            }
            Err(e) => {
                tracing::warn!("reload failed: {e}");
                self.state.set_error(format!("reload failed: {e}"));
            }
        }
    }

    /// runs the application's main loop until the user quits
    pub fn run(&mut self, terminal: &mut DefaultTerminal) -> color_eyre::Result<()> {
        while !self.state.exit {
            terminal.draw(|frame| self.draw(frame))?;
            self.handle_events()?;
        }
        Ok(())
    }

    fn draw(&mut self, frame: &mut Frame) {
        // Main layout: content, metrics row, status bar
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(0),    // Content
                Constraint::Length(3), // Metrics
                Constraint::Length(2), // Status bar
            ])
            .split(frame.area());

        self.render_content(frame, chunks[0]);
        self.metrics_bar.render(frame, chunks[1], &self.state);
        self.status_bar.render(frame, chunks[2], &self.state);
    }

    fn render_content(&mut self, frame: &mut Frame, area: Rect) {
        // Location panel on the left, chart on the right
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(32), Constraint::Min(0)])
            .split(area);

        self.location_list.render(frame, columns[0], &self.state);
        self.chart.render(frame, columns[1], &self.state);
    }

    /// Wait for input, advancing the animation while playback runs. The
    /// poll timeout doubles as the animation tick.
    fn handle_events(&mut self) -> io::Result<()> {
        let timeout = if self.state.playing {
            FRAME_DURATION
                .checked_sub(self.last_frame.elapsed())
                .unwrap_or(Duration::ZERO)
        } else {
            IDLE_POLL
        };

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key_event) if key_event.kind == KeyEventKind::Press => {
                    self.handle_key_event(key_event)
                }
                _ => {}
            }
        }

        if self.state.playing && self.last_frame.elapsed() >= FRAME_DURATION {
            self.state.advance_frame();
            self.last_frame = Instant::now();
        }

        Ok(())
    }

    fn handle_key_event(&mut self, key_event: KeyEvent) {
        // While the search prompt is open it owns the keyboard.
        if self.state.searching {
            self.location_list.handle_key(key_event, &mut self.state);
            return;
        }

        // Global key bindings
        match key_event.code {
            KeyCode::Char('q') if key_event.modifiers.is_empty() => {
                self.state.exit = true;
                return;
            }
            KeyCode::Char('c') if key_event.modifiers.contains(KeyModifiers::CONTROL) => {
                self.state.exit = true;
                return;
            }
            KeyCode::Char('r') if key_event.modifiers.is_empty() => {
                self.reload();
                return;
            }
            KeyCode::Esc if self.state.error_message.is_some() => {
                self.state.clear_error();
                return;
            }
            _ => {}
        }

        let result = self.location_list.handle_key(key_event, &mut self.state);
        if result != EventResult::NotHandled {
            return;
        }

        self.chart.handle_key(key_event, &mut self.state);
    }
}
