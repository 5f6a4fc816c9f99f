use kick_lens::data::filter::{FilterSpec, InclusiveRange, Selection};
use kick_lens::data::model::{FixtureTable, KickRecord, KickTable};
use kick_lens::{Config, DatasetStore, FilterOutcome};

use crate::color::{ColorBy, ColorMap};

// ---------------------------------------------------------------------------
// Dropdown vocabularies
// ---------------------------------------------------------------------------

/// Choices offered by the categorical dropdowns, computed once per store.
#[derive(Debug, Clone, Default)]
pub struct FilterOptions {
    pub kicking_teams: Vec<String>,
    pub receiving_teams: Vec<String>,
    pub kick_types: Vec<String>,
    pub outcomes: Vec<String>,
    pub venues: Vec<String>,
    pub ground_conditions: Vec<String>,
    pub weathers: Vec<String>,
}

impl FilterOptions {
    fn from_store(store: &DatasetStore) -> Self {
        let kicks = store.kicks();
        let fixtures = store.fixtures();
        FilterOptions {
            kicking_teams: kicks.kicking_teams(),
            receiving_teams: kicks.receiving_teams(),
            kick_types: kicks.kick_types(),
            outcomes: kicks.outcomes(),
            venues: fixtures.venues(),
            ground_conditions: fixtures.ground_conditions(),
            weathers: fixtures.weathers(),
        }
    }
}

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
pub struct AppState {
    pub config: Config,

    /// Loaded tables (None until kicks are loaded).
    pub store: Option<DatasetStore>,

    /// Current predicates. The tackle predicate is driven by the two fields
    /// below.
    pub spec: FilterSpec,

    /// Slider extent for the round filter.
    pub round_bounds: InclusiveRange<i64>,

    pub tackle_enabled: bool,
    pub tackle_range: InclusiveRange<i64>,

    pub options: FilterOptions,

    /// Result of the last recomputation.
    pub outcome: FilterOutcome,

    pub color_by: ColorBy,
    pub color_map: Option<ColorMap>,

    /// Status / error message shown in the UI.
    pub status_message: Option<String>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let bounds = config.field;
        let round_bounds = bounds.default_rounds.into();
        Self {
            spec: FilterSpec::unrestricted(&bounds, round_bounds),
            round_bounds,
            tackle_enabled: false,
            tackle_range: bounds.tackle_number.into(),
            config,
            store: None,
            options: FilterOptions::default(),
            outcome: FilterOutcome::default(),
            color_by: ColorBy::default(),
            color_map: None,
            status_message: None,
        }
    }

    /// Ingest a newly loaded store, reset filters and colours.
    pub fn set_store(&mut self, store: DatasetStore) {
        log::info!(
            "Using {} kicks and {} fixtures",
            store.kicks().len(),
            store.fixtures().len()
        );
        self.options = FilterOptions::from_store(&store);
        self.color_map = Some(ColorMap::new(self.color_by, store.kicks()));
        self.store = Some(store);
        self.status_message = None;
        self.reset_filters();
    }

    /// Swap in a new kicks table, keeping any fixtures.
    pub fn replace_kicks(&mut self, kicks: KickTable) {
        let store = self.store.take().unwrap_or_default().with_kicks(kicks);
        self.set_store(store);
    }

    /// Swap in a new fixtures table, keeping the kicks.
    pub fn replace_fixtures(&mut self, fixtures: FixtureTable) {
        let store = self.store.take().unwrap_or_default().with_fixtures(fixtures);
        self.set_store(store);
    }

    /// Back to the unrestricted filter.
    pub fn reset_filters(&mut self) {
        let bounds = self.config.field;
        self.round_bounds = match &self.store {
            Some(store) => FilterSpec::round_bounds(store.fixtures(), &bounds),
            None => bounds.default_rounds.into(),
        };
        self.spec = FilterSpec::unrestricted(&bounds, self.round_bounds);
        self.tackle_enabled = false;
        self.tackle_range = bounds.tackle_number.into();
        self.refilter();
    }

    /// Recompute the filtered kicks and fixtures from the current spec.
    pub fn refilter(&mut self) {
        self.spec.tackle_number = self.tackle_enabled.then_some(self.tackle_range);

        let Some(store) = &self.store else {
            self.outcome = FilterOutcome::default();
            return;
        };
        match store.apply(&self.spec) {
            Ok(outcome) => {
                self.outcome = outcome;
                self.status_message = None;
            }
            Err(e) => {
                log::error!("Filtering failed: {e}");
                self.outcome = FilterOutcome::default();
                self.status_message = Some(format!("Data error: {e}"));
            }
        }
    }

    /// Players offered in the player dropdown, narrowed by the kicking team.
    pub fn player_options(&self) -> Vec<String> {
        match &self.store {
            Some(store) => store
                .kicks()
                .players(self.spec.kicking_team.value().map(String::as_str)),
            None => Vec::new(),
        }
    }

    /// Change the kicking team. A selected player who never kicked for the
    /// new team is cleared.
    pub fn set_kicking_team(&mut self, team: Selection<String>) {
        self.spec.kicking_team = team;
        if let Selection::Only(player) = &self.spec.player {
            if !self.player_options().contains(player) {
                self.spec.player = Selection::All;
            }
        }
        self.refilter();
    }

    /// Set colour mode and rebuild the map.
    pub fn set_color_by(&mut self, color_by: ColorBy) {
        self.color_by = color_by;
        if let Some(store) = &self.store {
            self.color_map = Some(ColorMap::new(color_by, store.kicks()));
        }
    }

    /// Kicks passing the current filter, in table order.
    pub fn visible_kicks(&self) -> impl Iterator<Item = &KickRecord> + '_ {
        self.store
            .iter()
            .flat_map(|store| store.visible(&self.outcome.kick_indices))
    }

    pub fn visible_count(&self) -> usize {
        self.outcome.kick_indices.len()
    }
}
