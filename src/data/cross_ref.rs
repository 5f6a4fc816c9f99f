use std::collections::BTreeSet;

use super::filter::{fixture_matches, FilterSpec, Selection};
use super::model::{FixtureRecord, FixtureTable, GameId, KickRecord};

/// Fixtures consistent with a filter, paired with the games that still have
/// kicks after the kicks filter.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FixtureCrossRef {
    /// Indices into the fixtures table, in table order.
    pub fixture_indices: Vec<usize>,
    /// Games with at least one surviving kick.
    pub games_with_kicks: BTreeSet<GameId>,
}

impl FixtureCrossRef {
    pub fn len(&self) -> usize {
        self.fixture_indices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fixture_indices.is_empty()
    }

    pub fn has_kicks(&self, fixture: &FixtureRecord) -> bool {
        self.games_with_kicks.contains(&fixture.game_id)
    }

    /// The retained fixtures.
    pub fn fixtures<'a>(
        &'a self,
        table: &'a FixtureTable,
    ) -> impl Iterator<Item = &'a FixtureRecord> + 'a {
        self.fixture_indices
            .iter()
            .filter_map(|&i| table.fixtures.get(i))
    }

    /// Games that have surviving kicks but no retained fixture.
    ///
    /// Kicks are filtered on the per-kick team roles while fixtures are
    /// filtered on home/away membership, so this is non-empty only when a
    /// kick's teams disagree with its fixture's teams.
    pub fn orphaned_games(&self, table: &FixtureTable) -> Vec<GameId> {
        let retained: BTreeSet<&GameId> = self.fixtures(table).map(|f| &f.game_id).collect();
        self.games_with_kicks
            .iter()
            .filter(|g| !retained.contains(g))
            .cloned()
            .collect()
    }
}

/// A team predicate passes a fixture when the team played either side.
fn team_matches(selection: &Selection<String>, fixture: &FixtureRecord) -> bool {
    match selection {
        Selection::All => true,
        Selection::Only(team) => fixture.involves(team),
    }
}

/// Select the fixtures consistent with `spec` and record which games appear
/// in the already filtered kicks.
///
/// Fixtures pass the same round / venue / ground / weather predicate as the
/// kicks restriction, and both team predicates as home-or-away matches.
pub fn cross_reference<'k>(
    fixtures: &FixtureTable,
    filtered_kicks: impl IntoIterator<Item = &'k KickRecord>,
    spec: &FilterSpec,
) -> FixtureCrossRef {
    let fixture_indices: Vec<usize> = fixtures
        .iter()
        .enumerate()
        .filter(|(_, f)| {
            fixture_matches(f, spec)
                && team_matches(&spec.kicking_team, f)
                && team_matches(&spec.receiving_team, f)
        })
        .map(|(i, _)| i)
        .collect();

    let games_with_kicks: BTreeSet<GameId> =
        filtered_kicks.into_iter().map(|k| k.game_id.clone()).collect();

    log::debug!(
        "Fixture cross-reference: {} of {} fixtures, {} games with kicks",
        fixture_indices.len(),
        fixtures.len(),
        games_with_kicks.len()
    );

    FixtureCrossRef {
        fixture_indices,
        games_with_kicks,
    }
}

/// Human-readable list of the active match-level conditions.
pub fn applied_conditions(spec: &FilterSpec) -> Vec<String> {
    [
        ("Venue", &spec.venue),
        ("Ground", &spec.ground_condition),
        ("Weather", &spec.weather),
        ("Team", &spec.kicking_team),
        ("Opposition", &spec.receiving_team),
    ]
    .into_iter()
    .filter_map(|(label, sel)| sel.value().map(|v| format!("{label}: {v}")))
    .collect()
}
