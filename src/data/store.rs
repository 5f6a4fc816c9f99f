use anyhow::Result;

use super::cross_ref::{cross_reference, FixtureCrossRef};
use super::filter::{filtered_kick_indices, FilterError, FilterSpec};
use super::loader::{load_fixtures, load_kicks};
use super::model::{FieldBounds, FixtureTable, KickRecord, KickTable};
use crate::config::DataConfig;

/// Both source tables, loaded once and read-only afterwards.
///
/// Build one at start-up (or when the user opens new files) and hand it to
/// whatever needs the data; nothing is cached globally.
#[derive(Debug, Clone, Default)]
pub struct DatasetStore {
    kicks: KickTable,
    fixtures: FixtureTable,
}

/// Result of one recomputation: the surviving kicks and the fixtures that go
/// with them.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterOutcome {
    /// Indices into the store's kicks table, in table order.
    pub kick_indices: Vec<usize>,
    pub fixtures: FixtureCrossRef,
}

impl DatasetStore {
    /// Load both tables from the configured paths. A missing fixtures file is
    /// not an error.
    pub fn open(config: &DataConfig) -> Result<Self> {
        let kicks = load_kicks(&config.kicks_path)?;
        let fixtures = load_fixtures(&config.fixtures_path)?;
        Ok(Self::from_tables(kicks, fixtures))
    }

    pub fn from_tables(kicks: KickTable, fixtures: FixtureTable) -> Self {
        DatasetStore { kicks, fixtures }
    }

    pub fn kicks(&self) -> &KickTable {
        &self.kicks
    }

    pub fn fixtures(&self) -> &FixtureTable {
        &self.fixtures
    }

    /// Whether round / venue / ground / weather filtering is available.
    pub fn has_fixtures(&self) -> bool {
        !self.fixtures.is_empty()
    }

    /// Replace the fixtures table, keeping the kicks.
    pub fn with_fixtures(self, fixtures: FixtureTable) -> Self {
        DatasetStore { fixtures, ..self }
    }

    /// Replace the kicks table, keeping the fixtures.
    pub fn with_kicks(self, kicks: KickTable) -> Self {
        DatasetStore { kicks, ..self }
    }

    /// A filter that lets every kick through.
    pub fn unrestricted_spec(&self, bounds: &FieldBounds) -> FilterSpec {
        FilterSpec::unrestricted(bounds, FilterSpec::round_bounds(&self.fixtures, bounds))
    }

    /// Run the kicks filter and the fixture cross-reference for one spec.
    pub fn apply(&self, spec: &FilterSpec) -> Result<FilterOutcome, FilterError> {
        let kick_indices = filtered_kick_indices(&self.kicks, &self.fixtures, spec)?;
        let fixtures = cross_reference(&self.fixtures, self.visible(&kick_indices), spec);

        let orphaned = fixtures.orphaned_games(&self.fixtures);
        if self.has_fixtures() && !orphaned.is_empty() {
            log::warn!(
                "{} game(s) have matching kicks but no matching fixture: {:?}",
                orphaned.len(),
                orphaned
            );
        }

        Ok(FilterOutcome {
            kick_indices,
            fixtures,
        })
    }

    /// Kicks at the given indices.
    pub fn visible<'a>(
        &'a self,
        indices: &'a [usize],
    ) -> impl Iterator<Item = &'a KickRecord> + 'a {
        indices.iter().filter_map(|&i| self.kicks.kicks.get(i))
    }
}
