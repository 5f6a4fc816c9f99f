use std::borrow::Borrow;
use std::collections::HashSet;
use std::fmt;

use thiserror::Error;

use super::loader::kick_columns;
use super::model::{FieldBounds, FixtureRecord, FixtureTable, GameId, KickRecord, KickTable};

// ---------------------------------------------------------------------------
// Predicate building blocks
// ---------------------------------------------------------------------------

/// A categorical predicate: either unrestricted or an exact, case-sensitive
/// match against one value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection<T> {
    All,
    Only(T),
}

impl<T> Default for Selection<T> {
    fn default() -> Self {
        Selection::All
    }
}

impl<T> Selection<T> {
    pub fn is_all(&self) -> bool {
        matches!(self, Selection::All)
    }

    pub fn value(&self) -> Option<&T> {
        match self {
            Selection::All => None,
            Selection::Only(v) => Some(v),
        }
    }

    /// Whether a present attribute passes this predicate.
    pub fn accepts<Q>(&self, candidate: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: PartialEq + ?Sized,
    {
        match self {
            Selection::All => true,
            Selection::Only(v) => v.borrow() == candidate,
        }
    }

    /// Whether an optional attribute passes. An absent attribute only passes
    /// an unrestricted predicate.
    pub fn accepts_opt<Q>(&self, candidate: Option<&Q>) -> bool
    where
        T: Borrow<Q>,
        Q: PartialEq + ?Sized,
    {
        match candidate {
            Some(c) => self.accepts(c),
            None => self.is_all(),
        }
    }
}

impl Selection<String> {
    /// Read a selection from free text (CLI flags, query strings). `All` in
    /// any letter case is the unrestricted value at this boundary only.
    pub fn parse(text: &str) -> Self {
        let text = text.trim();
        if text.is_empty() || text.eq_ignore_ascii_case("all") {
            Selection::All
        } else {
            Selection::Only(text.to_string())
        }
    }
}

impl<T: fmt::Display> fmt::Display for Selection<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Selection::All => write!(f, "All"),
            Selection::Only(v) => write!(f, "{v}"),
        }
    }
}

/// Closed interval `[lo, hi]`. A reversed interval contains nothing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InclusiveRange<T> {
    pub lo: T,
    pub hi: T,
}

impl<T: PartialOrd + Copy> InclusiveRange<T> {
    pub fn new(lo: T, hi: T) -> Self {
        InclusiveRange { lo, hi }
    }

    pub fn contains(&self, value: T) -> bool {
        self.lo <= value && value <= self.hi
    }
}

impl<T: PartialOrd + Copy> From<[T; 2]> for InclusiveRange<T> {
    fn from([lo, hi]: [T; 2]) -> Self {
        InclusiveRange::new(lo, hi)
    }
}

impl<T: fmt::Display> fmt::Display for InclusiveRange<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.lo, self.hi)
    }
}

// ---------------------------------------------------------------------------
// FilterSpec – every predicate for one recomputation
// ---------------------------------------------------------------------------

/// Snapshot of all filter predicates. Built fresh for every recomputation.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterSpec {
    // Fixture-derived predicates
    pub rounds: InclusiveRange<i64>,
    pub venue: Selection<String>,
    pub ground_condition: Selection<String>,
    pub weather: Selection<String>,

    // Categorical kick predicates
    pub kicking_team: Selection<String>,
    pub receiving_team: Selection<String>,
    pub player: Selection<String>,
    pub kick_type: Selection<String>,
    pub kick_outcome: Selection<String>,

    // Numeric kick predicates
    pub start_x: InclusiveRange<f64>,
    pub start_y: InclusiveRange<f64>,
    pub end_x: InclusiveRange<f64>,
    pub end_y: InclusiveRange<f64>,
    pub game_seconds: InclusiveRange<f64>,
    /// Not applied when `None`.
    pub tackle_number: Option<InclusiveRange<i64>>,
}

impl FilterSpec {
    /// Every categorical predicate at `All`, every range at its full bounds,
    /// tackle filter off.
    pub fn unrestricted(bounds: &FieldBounds, rounds: InclusiveRange<i64>) -> Self {
        FilterSpec {
            rounds,
            venue: Selection::All,
            ground_condition: Selection::All,
            weather: Selection::All,
            kicking_team: Selection::All,
            receiving_team: Selection::All,
            player: Selection::All,
            kick_type: Selection::All,
            kick_outcome: Selection::All,
            start_x: bounds.x.into(),
            start_y: bounds.y.into(),
            end_x: bounds.x.into(),
            end_y: bounds.y.into(),
            game_seconds: bounds.game_seconds.into(),
            tackle_number: None,
        }
    }

    /// Round range spanning every loaded fixture, or the configured default
    /// when no fixtures are loaded.
    pub fn round_bounds(fixtures: &FixtureTable, bounds: &FieldBounds) -> InclusiveRange<i64> {
        match fixtures.round_bounds() {
            Some((lo, hi)) => InclusiveRange::new(lo, hi),
            None => bounds.default_rounds.into(),
        }
    }
}

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Optional kick attributes that an active predicate may require.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KickField {
    Player,
    KickType,
    Outcome,
    TackleNumber,
}

impl fmt::Display for KickField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            KickField::Player => "player (PN)",
            KickField::KickType => "kick type (Type)",
            KickField::Outcome => "kick outcome (Outcome)",
            KickField::TackleNumber => "tackle number (TackleNumber)",
        };
        write!(f, "{name}")
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum FilterError {
    #[error("kick row {row} (game {game_id}) has no {field}, but a filter on it is active")]
    MissingAttribute {
        row: usize,
        game_id: GameId,
        field: KickField,
    },

    #[error("kick row {row} (game {game_id}) has an unreadable {field} '{value}', but a filter on it is active")]
    MalformedAttribute {
        row: usize,
        game_id: GameId,
        field: KickField,
        value: String,
    },
}

// ---------------------------------------------------------------------------
// Predicates
// ---------------------------------------------------------------------------

/// Round range plus venue / ground condition / weather. Shared by the kicks
/// restriction and the fixture listing so both always agree.
///
/// A fixture with no recorded venue (or ground, or weather) only passes when
/// that dimension is `All`.
pub fn fixture_matches(fixture: &FixtureRecord, spec: &FilterSpec) -> bool {
    spec.rounds.contains(fixture.round_id)
        && spec.venue.accepts_opt(fixture.venue.as_deref())
        && spec.ground_condition.accepts_opt(fixture.ground_condition.as_deref())
        && spec.weather.accepts_opt(fixture.weather.as_deref())
}

/// Fail if an active predicate needs an attribute this kick does not have.
fn check_attributes(row: usize, kick: &KickRecord, spec: &FilterSpec) -> Result<(), FilterError> {
    let required = [
        (!spec.player.is_all() && kick.player.is_none(), KickField::Player),
        (!spec.kick_type.is_all() && kick.kick_type.is_none(), KickField::KickType),
        (!spec.kick_outcome.is_all() && kick.outcome.is_none(), KickField::Outcome),
        (
            spec.tackle_number.is_some() && kick.tackle_number.is_none(),
            KickField::TackleNumber,
        ),
    ];
    let Some((_, field)) = required.into_iter().find(|(missing, _)| *missing) else {
        return Ok(());
    };

    // The loader keeps a tackle number it could not read as a display field.
    let raw = match field {
        KickField::TackleNumber => kick.display_field(kick_columns::TACKLE_NUMBER),
        _ => None,
    };
    Err(match raw {
        Some(value) => FilterError::MalformedAttribute {
            row,
            game_id: kick.game_id.clone(),
            field,
            value: value.to_string(),
        },
        None => FilterError::MissingAttribute {
            row,
            game_id: kick.game_id.clone(),
            field,
        },
    })
}

/// Categorical and numeric predicates on the kick itself.
fn kick_matches(kick: &KickRecord, spec: &FilterSpec) -> bool {
    spec.kicking_team.accepts(kick.team.as_str())
        && spec.receiving_team.accepts(kick.opposition.as_str())
        && spec.player.accepts_opt(kick.player.as_deref())
        && spec.kick_type.accepts_opt(kick.kick_type.as_deref())
        && spec.kick_outcome.accepts_opt(kick.outcome.as_deref())
        && spec.start_x.contains(kick.start.x)
        && spec.start_y.contains(kick.start.y)
        && spec.end_x.contains(kick.end.x)
        && spec.end_y.contains(kick.end.y)
        && spec.game_seconds.contains(kick.game_seconds)
        && spec
            .tackle_number
            .map_or(true, |r| kick.tackle_number.is_some_and(|t| r.contains(t)))
}

// ---------------------------------------------------------------------------
// Engine
// ---------------------------------------------------------------------------

/// Return indices of kicks that pass every predicate, in table order.
///
/// * With fixtures loaded, a kick must belong to a game whose fixture passes
///   [`fixture_matches`]. Kicks whose game has no fixture are dropped.
/// * With no fixtures loaded, round / venue / ground / weather are inert.
/// * Every kick is checked for the attributes active predicates need, so the
///   error does not depend on which other predicates would have rejected it.
pub fn filtered_kick_indices(
    kicks: &KickTable,
    fixtures: &FixtureTable,
    spec: &FilterSpec,
) -> Result<Vec<usize>, FilterError> {
    let eligible_games: Option<HashSet<&GameId>> = if fixtures.is_empty() {
        None
    } else {
        Some(
            fixtures
                .iter()
                .filter(|f| fixture_matches(f, spec))
                .map(|f| &f.game_id)
                .collect(),
        )
    };

    let mut indices = Vec::new();
    for (row, kick) in kicks.iter().enumerate() {
        check_attributes(row, kick, spec)?;

        if let Some(games) = &eligible_games {
            if !games.contains(&kick.game_id) {
                continue;
            }
        }
        if kick_matches(kick, spec) {
            indices.push(row);
        }
    }

    log::debug!(
        "Filtered kicks: {} of {} pass ({} games eligible{})",
        indices.len(),
        kicks.len(),
        eligible_games.as_ref().map_or(0, HashSet::len),
        if fixtures.is_empty() { ", no fixtures loaded" } else { "" },
    );
    Ok(indices)
}

/// Same as [`filtered_kick_indices`] but returns the surviving records as a
/// new table.
pub fn filter_kicks(
    kicks: &KickTable,
    fixtures: &FixtureTable,
    spec: &FilterSpec,
) -> Result<KickTable, FilterError> {
    let indices = filtered_kick_indices(kicks, fixtures, spec)?;
    Ok(kicks.select(&indices))
}

#[cfg(test)]
pub(crate) mod tests {
    use std::collections::BTreeMap;

    use super::*;
    use crate::data::model::Point;

    pub(crate) fn kick(game: i64, team: &str, start: (f64, f64), end: (f64, f64), outcome: &str) -> KickRecord {
        KickRecord {
            game_id: GameId::from(game),
            team: team.to_string(),
            opposition: if team == "Team A" { "Team B" } else { "Team A" }.to_string(),
            player: Some(format!("{team} kicker")),
            kick_type: Some("Bomb".to_string()),
            outcome: Some(outcome.to_string()),
            start: Point::new(start.0, start.1),
            end: Point::new(end.0, end.1),
            game_seconds: 600.0,
            tackle_number: Some(5),
            extra: BTreeMap::new(),
        }
    }

    pub(crate) fn fixture(game: i64, round_id: i64, home: &str, away: &str) -> FixtureRecord {
        FixtureRecord {
            game_id: GameId::from(game),
            round_id,
            round_name: format!("Round {round_id}"),
            home_team: home.to_string(),
            away_team: away.to_string(),
            home_score: Some(18),
            away_score: Some(12),
            venue: Some("Suncorp Stadium".to_string()),
            ground_condition: Some("Good".to_string()),
            weather: Some("Fine".to_string()),
        }
    }

    /// The three-kick table used throughout: two Team A kicks and one Team B.
    pub(crate) fn three_kicks() -> KickTable {
        KickTable::new(vec![
            kick(1, "Team A", (100.0, 300.0), (400.0, 320.0), "Try"),
            kick(1, "Team A", (50.0, 100.0), (900.0, 650.0), "Kick Error"),
            kick(1, "Team B", (600.0, 200.0), (700.0, 210.0), "Regained"),
        ])
    }

    pub(crate) fn open_spec() -> FilterSpec {
        FilterSpec::unrestricted(&FieldBounds::default(), InclusiveRange::new(1, 30))
    }

    fn run(kicks: &KickTable, fixtures: &FixtureTable, spec: &FilterSpec) -> Vec<usize> {
        filtered_kick_indices(kicks, fixtures, spec).expect("filter should succeed")
    }

    #[test]
    fn test_selection_accepts() {
        let only: Selection<String> = Selection::Only("Try".to_string());
        assert!(only.accepts("Try"));
        assert!(!only.accepts("try"));
        assert!(!only.accepts_opt(None::<&str>));
        assert!(Selection::<String>::All.accepts_opt(None::<&str>));
    }

    #[test]
    fn test_selection_parse_sentinel() {
        assert_eq!(Selection::parse("All"), Selection::All);
        assert_eq!(Selection::parse("aLL"), Selection::All);
        assert_eq!(Selection::parse(""), Selection::All);
        assert_eq!(Selection::parse("Storm"), Selection::Only("Storm".to_string()));
    }

    #[test]
    fn test_real_category_named_all_is_matchable() {
        let mut kicks = three_kicks();
        kicks.kicks[2].kick_type = Some("All".to_string());
        let mut spec = open_spec();
        spec.kick_type = Selection::Only("All".to_string());

        assert_eq!(run(&kicks, &FixtureTable::default(), &spec), vec![2]);
    }

    #[test]
    fn test_kicking_team_keeps_order() {
        let mut spec = open_spec();
        spec.kicking_team = Selection::Only("Team A".to_string());
        let filtered = filter_kicks(&three_kicks(), &FixtureTable::default(), &spec).unwrap();

        assert_eq!(filtered.len(), 2);
        assert_eq!(filtered.kicks[0].outcome.as_deref(), Some("Try"));
        assert_eq!(filtered.kicks[1].outcome.as_deref(), Some("Kick Error"));
    }

    #[test]
    fn test_start_x_range_inclusive() {
        let mut kicks = three_kicks();
        kicks.kicks.push(kick(1, "Team B", (500.0, 10.0), (520.0, 10.0), "Try"));
        let mut spec = open_spec();
        spec.start_x = InclusiveRange::new(0.0, 500.0);

        assert_eq!(run(&kicks, &FixtureTable::default(), &spec), vec![0, 1, 3]);

        spec.start_x = InclusiveRange::new(50.0, 100.0);
        assert_eq!(run(&kicks, &FixtureTable::default(), &spec), vec![0, 1]);
    }

    #[test]
    fn test_end_position_and_time_bounds_inclusive() {
        let mut kicks = three_kicks();
        kicks.kicks[0].game_seconds = 0.0;
        kicks.kicks[1].game_seconds = 4800.0;
        kicks.kicks[2].game_seconds = 4800.5;
        let mut spec = open_spec();
        spec.game_seconds = InclusiveRange::new(0.0, 4800.0);
        assert_eq!(run(&kicks, &FixtureTable::default(), &spec), vec![0, 1]);

        // End points (400, 320), (900, 650), (700, 210)
        let mut spec = open_spec();
        spec.end_x = InclusiveRange::new(400.0, 700.0);
        assert_eq!(run(&kicks, &FixtureTable::default(), &spec), vec![0, 2]);
        spec.end_x = InclusiveRange::new(400.000_1, 699.999);
        assert!(run(&kicks, &FixtureTable::default(), &spec).is_empty());

        let mut spec = open_spec();
        spec.end_y = InclusiveRange::new(210.0, 320.0);
        assert_eq!(run(&kicks, &FixtureTable::default(), &spec), vec![0, 2]);
        spec.end_y = InclusiveRange::new(320.0, 650.0);
        assert_eq!(run(&kicks, &FixtureTable::default(), &spec), vec![0, 1]);
    }

    #[test]
    fn test_round_restricts_games() {
        let kicks = KickTable::new(vec![
            kick(1, "Team A", (0.0, 0.0), (10.0, 10.0), "Try"),
            kick(2, "Team A", (0.0, 0.0), (10.0, 10.0), "Try"),
            kick(1, "Team B", (0.0, 0.0), (10.0, 10.0), "Try"),
        ]);
        let fixtures = FixtureTable::new(vec![fixture(1, 5, "Team A", "Team B")]);
        let mut spec = open_spec();
        spec.rounds = InclusiveRange::new(5, 5);

        assert_eq!(run(&kicks, &fixtures, &spec), vec![0, 2]);

        spec.rounds = InclusiveRange::new(6, 9);
        assert!(run(&kicks, &fixtures, &spec).is_empty());
    }

    #[test]
    fn test_fixture_conditions_restrict_games() {
        let kicks = KickTable::new(vec![
            kick(1, "Team A", (0.0, 0.0), (10.0, 10.0), "Try"),
            kick(2, "Team A", (0.0, 0.0), (10.0, 10.0), "Try"),
            kick(3, "Team A", (0.0, 0.0), (10.0, 10.0), "Try"),
        ]);
        let mut wet = fixture(2, 1, "Team A", "Team B");
        wet.ground_condition = Some("Heavy".to_string());
        wet.weather = Some("Rain".to_string());
        let mut unknown = fixture(3, 1, "Team A", "Team B");
        unknown.weather = None;
        let fixtures = FixtureTable::new(vec![fixture(1, 1, "Team A", "Team B"), wet, unknown]);

        let mut spec = open_spec();
        spec.weather = Selection::Only("Rain".to_string());
        assert_eq!(run(&kicks, &fixtures, &spec), vec![1]);

        spec.weather = Selection::Only("Fine".to_string());
        assert_eq!(run(&kicks, &fixtures, &spec), vec![0]);

        spec.weather = Selection::All;
        spec.ground_condition = Selection::Only("Good".to_string());
        assert_eq!(run(&kicks, &fixtures, &spec), vec![0, 2]);

        spec.ground_condition = Selection::All;
        spec.venue = Selection::Only("Somewhere Else".to_string());
        assert!(run(&kicks, &fixtures, &spec).is_empty());
    }

    #[test]
    fn test_kicks_without_fixture_dropped_when_fixtures_loaded() {
        let kicks = KickTable::new(vec![
            kick(1, "Team A", (0.0, 0.0), (10.0, 10.0), "Try"),
            kick(99, "Team A", (0.0, 0.0), (10.0, 10.0), "Try"),
        ]);
        let fixtures = FixtureTable::new(vec![fixture(1, 1, "Team A", "Team B")]);

        assert_eq!(run(&kicks, &fixtures, &open_spec()), vec![0]);
    }

    #[test]
    fn test_degraded_mode_without_fixtures() {
        let kicks = three_kicks();
        let mut spec = open_spec();
        // Inert with no fixtures loaded
        spec.rounds = InclusiveRange::new(99, 99);
        spec.venue = Selection::Only("Nowhere".to_string());
        spec.weather = Selection::Only("Snow".to_string());
        assert_eq!(run(&kicks, &FixtureTable::default(), &spec), vec![0, 1, 2]);

        spec.kick_outcome = Selection::Only("Regained".to_string());
        assert_eq!(run(&kicks, &FixtureTable::default(), &spec), vec![2]);
    }

    #[test]
    fn test_identity_spec_returns_everything() {
        let kicks = three_kicks();
        let fixtures = FixtureTable::new(vec![fixture(1, 3, "Team A", "Team B")]);
        let spec = FilterSpec::unrestricted(
            &FieldBounds::default(),
            FilterSpec::round_bounds(&fixtures, &FieldBounds::default()),
        );

        let filtered = filter_kicks(&kicks, &fixtures, &spec).unwrap();
        assert_eq!(filtered.kicks, kicks.kicks);
    }

    #[test]
    fn test_idempotent() {
        let kicks = three_kicks();
        let fixtures = FixtureTable::new(vec![fixture(1, 3, "Team A", "Team B")]);
        let mut spec = open_spec();
        spec.end_y = InclusiveRange::new(0.0, 400.0);

        let first = run(&kicks, &fixtures, &spec);
        let second = run(&kicks, &fixtures, &spec);
        assert_eq!(first, second);
        assert_eq!(first, vec![0, 2]);
    }

    #[test]
    fn test_narrowing_never_grows_result() {
        let kicks = three_kicks();
        let fixtures = FixtureTable::new(vec![fixture(1, 3, "Team A", "Team B")]);
        let base = open_spec();
        let base_len = run(&kicks, &fixtures, &base).len();

        let mut narrowed: Vec<FilterSpec> = Vec::new();
        let mut s = base.clone();
        s.start_y = InclusiveRange::new(150.0, 700.0);
        narrowed.push(s.clone());
        s.kicking_team = Selection::Only("Team A".to_string());
        narrowed.push(s.clone());
        s.game_seconds = InclusiveRange::new(0.0, 60.0);
        narrowed.push(s.clone());
        let mut t = base.clone();
        t.tackle_number = Some(InclusiveRange::new(0, 6));
        narrowed.push(t.clone());
        t.rounds = InclusiveRange::new(4, 30);
        narrowed.push(t);

        let mut previous = base_len;
        for (i, spec) in narrowed.iter().take(3).enumerate() {
            let len = run(&kicks, &fixtures, spec).len();
            assert!(len <= previous, "step {i} grew from {previous} to {len}");
            previous = len;
        }
        assert_eq!(previous, 0);

        let tackle = run(&kicks, &fixtures, &narrowed[3]).len();
        assert!(tackle <= base_len);
        assert_eq!(run(&kicks, &fixtures, &narrowed[4]).len(), 0);
    }

    #[test]
    fn test_tackle_range() {
        let mut kicks = three_kicks();
        kicks.kicks[0].tackle_number = Some(1);
        let mut spec = open_spec();
        spec.tackle_number = Some(InclusiveRange::new(5, 6));

        assert_eq!(run(&kicks, &FixtureTable::default(), &spec), vec![1, 2]);
    }

    #[test]
    fn test_missing_attribute_on_active_predicate_is_error() {
        let mut kicks = three_kicks();
        kicks.kicks[1].player = None;

        // Inactive predicate: the gap is never looked at
        assert_eq!(run(&kicks, &FixtureTable::default(), &open_spec()), vec![0, 1, 2]);

        let mut spec = open_spec();
        spec.player = Selection::Only("Team B kicker".to_string());
        let err = filtered_kick_indices(&kicks, &FixtureTable::default(), &spec).unwrap_err();
        assert_eq!(
            err,
            FilterError::MissingAttribute {
                row: 1,
                game_id: GameId::from(1),
                field: KickField::Player,
            }
        );
    }

    #[test]
    fn test_missing_tackle_number_only_fails_when_tackle_filter_active() {
        let mut kicks = three_kicks();
        kicks.kicks[0].tackle_number = None;
        let mut spec = open_spec();
        assert!(filtered_kick_indices(&kicks, &FixtureTable::default(), &spec).is_ok());

        spec.tackle_number = Some(InclusiveRange::new(0, 6));
        let err = filtered_kick_indices(&kicks, &FixtureTable::default(), &spec).unwrap_err();
        assert!(matches!(
            err,
            FilterError::MissingAttribute { row: 0, field: KickField::TackleNumber, .. }
        ));
    }

    #[test]
    fn test_unreadable_tackle_number_only_fails_when_tackle_filter_active() {
        let mut kicks = three_kicks();
        kicks.kicks[1].tackle_number = None;
        kicks.kicks[1].extra.insert(
            kick_columns::TACKLE_NUMBER.to_string(),
            crate::data::model::MetadataValue::String("last".to_string()),
        );
        let mut spec = open_spec();
        assert_eq!(run(&kicks, &FixtureTable::default(), &spec), vec![0, 1, 2]);

        spec.tackle_number = Some(InclusiveRange::new(0, 6));
        let err = filtered_kick_indices(&kicks, &FixtureTable::default(), &spec).unwrap_err();
        assert_eq!(
            err,
            FilterError::MalformedAttribute {
                row: 1,
                game_id: GameId::from(1),
                field: KickField::TackleNumber,
                value: "last".to_string(),
            }
        );
    }

    #[test]
    fn test_unknown_category_yields_empty() {
        let mut spec = open_spec();
        spec.kick_outcome = Selection::Only("Field Goal".to_string());
        assert!(run(&three_kicks(), &FixtureTable::default(), &spec).is_empty());
    }
}
