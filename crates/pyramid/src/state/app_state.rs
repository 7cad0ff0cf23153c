use pyramid_core::Dataset;

/// Year the statistics panel starts on when the data includes it, matching
/// the dataset's reference year.
const DEFAULT_YEAR: i32 = 2024;
/// Location selected at startup when present in the data.
const DEFAULT_LOCATION: &str = "World";

/// All mutable UI state: the cached dataset plus the current selection,
/// search filter, and playback flags. The dataset itself never changes after
/// startup; every interaction is a re-filter over it.
pub struct AppState {
    pub dataset: Dataset,
    pub exit: bool,
    /// Animation playback: when set, the year advances once per tick and
    /// wraps around at the end of the range.
    pub playing: bool,
    /// Whether keystrokes are being routed into the location filter.
    pub searching: bool,
    pub filter: String,
    pub error_message: Option<String>,

    selected: usize,
    years: Vec<i32>,
    year_index: usize,
}

impl AppState {
    pub fn new(dataset: Dataset) -> Self {
        let selected = dataset
            .locations()
            .iter()
            .position(|l| l == DEFAULT_LOCATION)
            .unwrap_or(0);

        let mut state = Self {
            dataset,
            exit: false,
            playing: false,
            searching: false,
            filter: String::new(),
            error_message: None,
            selected,
            years: Vec::new(),
            year_index: 0,
        };
        state.refresh_years(None);
        state
    }

    /// Locations matching the current filter (case-insensitive substring).
    pub fn filtered_locations(&self) -> Vec<&str> {
        let needle = self.filter.to_lowercase();
        self.dataset
            .locations()
            .iter()
            .filter(|l| needle.is_empty() || l.to_lowercase().contains(&needle))
            .map(String::as_str)
            .collect()
    }

    pub fn selected_index(&self) -> usize {
        self.selected
    }

    /// The currently selected location, `None` when the filter matches
    /// nothing.
    pub fn selected_location(&self) -> Option<String> {
        self.filtered_locations()
            .get(self.selected)
            .map(|l| l.to_string())
    }

    pub fn select_next(&mut self) {
        let len = self.filtered_locations().len();
        if len > 0 && self.selected + 1 < len {
            self.selected += 1;
            self.on_location_changed();
        }
    }

    pub fn select_prev(&mut self) {
        if self.selected > 0 {
            self.selected -= 1;
            self.on_location_changed();
        }
    }

    pub fn push_filter_char(&mut self, c: char) {
        self.filter.push(c);
        self.on_filter_changed();
    }

    pub fn pop_filter_char(&mut self) {
        self.filter.pop();
        self.on_filter_changed();
    }

    pub fn clear_filter(&mut self) {
        self.filter.clear();
        self.searching = false;
        self.on_filter_changed();
    }

    /// Years with data for the selected location, ascending.
    pub fn years(&self) -> &[i32] {
        &self.years
    }

    pub fn year_index(&self) -> usize {
        self.year_index
    }

    pub fn current_year(&self) -> Option<i32> {
        self.years.get(self.year_index).copied()
    }

    /// Step the year selection, clamped at the ends of the range.
    pub fn step_year(&mut self, delta: i32) {
        if self.years.is_empty() {
            return;
        }
        let last = self.years.len() - 1;
        self.year_index = self
            .year_index
            .saturating_add_signed(delta as isize)
            .min(last);
    }

    /// Advance one animation frame, wrapping at the end of the year range.
    pub fn advance_frame(&mut self) {
        if self.years.is_empty() {
            return;
        }
        self.year_index = (self.year_index + 1) % self.years.len();
    }

    pub fn toggle_playing(&mut self) {
        self.playing = !self.playing;
    }

    /// Swap in a freshly loaded dataset, re-anchoring the selection to the
    /// same location and year when the new data still has them.
    pub fn replace_dataset(&mut self, dataset: Dataset) {
        let previous_location = self.selected_location();
        let previous_year = self.current_year();

        self.dataset = dataset;
        self.selected = previous_location
            .and_then(|loc| self.filtered_locations().iter().position(|&l| l == loc))
            .unwrap_or(0);
        self.refresh_years(previous_year);
        self.clear_error();
    }

    pub fn set_error(&mut self, message: String) {
        self.error_message = Some(message);
    }

    pub fn clear_error(&mut self) {
        self.error_message = None;
    }

    fn on_filter_changed(&mut self) {
        let len = self.filtered_locations().len();
        if len == 0 {
            self.selected = 0;
        } else if self.selected >= len {
            self.selected = len - 1;
        }
        self.on_location_changed();
    }

    fn on_location_changed(&mut self) {
        let previous_year = self.current_year();
        self.refresh_years(previous_year);
    }

    /// Recompute the selected location's year range, keeping the current
    /// year when the new location also has it, falling back to the default
    /// year, then to the latest year.
    fn refresh_years(&mut self, keep_year: Option<i32>) {
        self.years = match self.selected_location() {
            Some(location) => self.dataset.location_years(&location),
            None => Vec::new(),
        };

        self.year_index = keep_year
            .and_then(|y| self.years.iter().position(|&year| year == y))
            .or_else(|| self.years.iter().position(|&year| year == DEFAULT_YEAR))
            .unwrap_or(self.years.len().saturating_sub(1));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pyramid_core::model::{PopulationRecord, Sex};

    fn row(location: &str, year: i32, sex: Sex, value: f64) -> PopulationRecord {
        PopulationRecord {
            location: location.to_string(),
            iso3: "XXX".to_string(),
            year,
            sex,
            sex_id: if sex == Sex::Male { 1 } else { 2 },
            age_start: 0,
            age_group: "0-4".to_string(),
            value,
        }
    }

    fn fixture() -> Dataset {
        Dataset::from_records(&[
            row("Sweden", 2020, Sex::Male, 1.0),
            row("Sweden", 2021, Sex::Female, 1.0),
            row("World", 2020, Sex::Male, 2.0),
            row("World", 2024, Sex::Female, 2.0),
        ])
        .unwrap()
    }

    #[test]
    fn test_initial_selection_prefers_world_and_default_year() {
        let state = AppState::new(fixture());
        assert_eq!(state.selected_location().as_deref(), Some("World"));
        assert_eq!(state.current_year(), Some(2024));
    }

    #[test]
    fn test_filter_narrows_and_reclamps_selection() {
        let mut state = AppState::new(fixture());
        for c in "swe".chars() {
            state.push_filter_char(c);
        }
        assert_eq!(state.filtered_locations(), vec!["Sweden"]);
        assert_eq!(state.selected_location().as_deref(), Some("Sweden"));
        // Sweden has no 2024; falls back to its latest year.
        assert_eq!(state.current_year(), Some(2021));

        state.clear_filter();
        assert_eq!(state.filtered_locations().len(), 2);
    }

    #[test]
    fn test_filter_matching_nothing() {
        let mut state = AppState::new(fixture());
        state.push_filter_char('z');
        assert!(state.filtered_locations().is_empty());
        assert_eq!(state.selected_location(), None);
        assert_eq!(state.current_year(), None);
        // Stepping with no years must not panic.
        state.step_year(1);
        state.advance_frame();
    }

    #[test]
    fn test_year_stepping_clamps_and_playback_wraps() {
        let mut state = AppState::new(fixture());
        assert_eq!(state.current_year(), Some(2024));

        state.step_year(-1);
        assert_eq!(state.current_year(), Some(2020));
        state.step_year(-1);
        assert_eq!(state.current_year(), Some(2020));

        state.advance_frame();
        assert_eq!(state.current_year(), Some(2024));
        state.advance_frame();
        assert_eq!(state.current_year(), Some(2020));
    }
}
