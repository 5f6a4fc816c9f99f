use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// GameId – join key between kicks and fixtures
// ---------------------------------------------------------------------------

/// Identifier linking a kick to the fixture it was recorded in.
///
/// Kept as text so numeric (`12345`) and prefixed (`G12345`) sources join the
/// same way once normalised by the loader.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct GameId(pub String);

impl fmt::Display for GameId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for GameId {
    fn from(s: &str) -> Self {
        GameId(s.to_string())
    }
}

impl From<i64> for GameId {
    fn from(i: i64) -> Self {
        GameId(i.to_string())
    }
}

// ---------------------------------------------------------------------------
// MetadataValue – a single raw cell
// ---------------------------------------------------------------------------

/// A dynamically-typed cell as read from CSV / JSON / Parquet, before it is
/// assigned to a typed record field. Cells that no record field claims are
/// kept on the record as passthrough display values.
#[derive(Debug, Clone, PartialEq)]
pub enum MetadataValue {
    String(String),
    Integer(i64),
    Float(f64),
    Bool(bool),
    Null,
}

impl fmt::Display for MetadataValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MetadataValue::String(s) => write!(f, "{s}"),
            MetadataValue::Integer(i) => write!(f, "{i}"),
            MetadataValue::Float(v) => write!(f, "{v}"),
            MetadataValue::Bool(b) => write!(f, "{b}"),
            MetadataValue::Null => write!(f, ""),
        }
    }
}

impl MetadataValue {
    /// Numeric view of the cell. NaN counts as absent. Text cells are parsed
    /// on demand so the original text stays available to [`as_text`].
    ///
    /// [`as_text`]: MetadataValue::as_text
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            MetadataValue::Float(v) if !v.is_nan() => Some(*v),
            MetadataValue::Integer(i) => Some(*i as f64),
            MetadataValue::String(s) => s.trim().parse::<f64>().ok().filter(|v| !v.is_nan()),
            _ => None,
        }
    }

    /// Integer view; accepts floats with no fractional part (pandas writes
    /// integer columns containing gaps as `7.0`).
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            MetadataValue::Integer(i) => Some(*i),
            MetadataValue::Float(v) => integral(*v),
            MetadataValue::String(s) => {
                let s = s.trim();
                s.parse::<i64>()
                    .ok()
                    .or_else(|| s.parse::<f64>().ok().and_then(integral))
            }
            _ => None,
        }
    }

    /// Text view of the cell. Empty strings count as absent.
    pub fn as_text(&self) -> Option<String> {
        match self {
            MetadataValue::String(s) if s.is_empty() => None,
            MetadataValue::String(s) => Some(s.clone()),
            MetadataValue::Integer(i) => Some(i.to_string()),
            MetadataValue::Float(v) if v.is_nan() => None,
            MetadataValue::Float(v) => match integral(*v) {
                Some(i) => Some(i.to_string()),
                None => Some(v.to_string()),
            },
            MetadataValue::Bool(b) => Some(b.to_string()),
            MetadataValue::Null => None,
        }
    }

    pub fn is_null(&self) -> bool {
        self.as_text().is_none()
    }
}

fn integral(v: f64) -> Option<i64> {
    (v.is_finite() && v.fract() == 0.0).then_some(v as i64)
}

/// One raw row: column name → cell.
pub type RawRow = BTreeMap<String, MetadataValue>;

// ---------------------------------------------------------------------------
// Kicks
// ---------------------------------------------------------------------------

/// A position in field coordinates (length along `x`, width along `y`).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Point { x, y }
    }
}

/// One attempted kick.
#[derive(Debug, Clone, PartialEq)]
pub struct KickRecord {
    pub game_id: GameId,
    /// Kicking team.
    pub team: String,
    /// Receiving team.
    pub opposition: String,
    pub player: Option<String>,
    pub kick_type: Option<String>,
    pub outcome: Option<String>,
    pub start: Point,
    pub end: Point,
    /// Elapsed game time in seconds.
    pub game_seconds: f64,
    pub tackle_number: Option<i64>,
    /// Columns not claimed above (e.g. `GM`), kept for display.
    pub extra: BTreeMap<String, MetadataValue>,
}

impl KickRecord {
    pub fn outcome_class(&self) -> OutcomeClass {
        OutcomeClass::classify(self.outcome.as_deref())
    }

    /// Look up a passthrough display column.
    pub fn display_field(&self, column: &str) -> Option<&MetadataValue> {
        self.extra.get(column).filter(|v| !v.is_null())
    }
}

/// Coarse grouping of kick outcomes, used for colour coding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum OutcomeClass {
    Try,
    Success,
    Failure,
    Neutral,
}

impl OutcomeClass {
    pub fn classify(outcome: Option<&str>) -> Self {
        match outcome {
            Some("Try") => OutcomeClass::Try,
            Some("Forces Dropout" | "40/20" | "Opp Error" | "Regained") => OutcomeClass::Success,
            Some("Kick Error" | "20m Restart" | "Own Error" | "Out on Full") => {
                OutcomeClass::Failure
            }
            _ => OutcomeClass::Neutral,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            OutcomeClass::Try => "Try",
            OutcomeClass::Success => "Success",
            OutcomeClass::Failure => "Failure",
            OutcomeClass::Neutral => "Other",
        }
    }
}

/// The full kicks table, in source order.
#[derive(Debug, Clone, Default)]
pub struct KickTable {
    pub kicks: Vec<KickRecord>,
}

impl KickTable {
    pub fn new(kicks: Vec<KickRecord>) -> Self {
        KickTable { kicks }
    }

    pub fn len(&self) -> usize {
        self.kicks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.kicks.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, KickRecord> {
        self.kicks.iter()
    }

    /// Build a new table from the given row indices, in the order given.
    pub fn select(&self, indices: &[usize]) -> KickTable {
        KickTable {
            kicks: indices
                .iter()
                .filter_map(|&i| self.kicks.get(i))
                .cloned()
                .collect(),
        }
    }

    pub fn kicking_teams(&self) -> Vec<String> {
        unique_sorted(self.kicks.iter().map(|k| k.team.as_str()))
    }

    pub fn receiving_teams(&self) -> Vec<String> {
        unique_sorted(self.kicks.iter().map(|k| k.opposition.as_str()))
    }

    /// Players, narrowed to one kicking team when `team` is given.
    pub fn players(&self, team: Option<&str>) -> Vec<String> {
        unique_sorted(
            self.kicks
                .iter()
                .filter(|k| team.map_or(true, |t| k.team == t))
                .filter_map(|k| k.player.as_deref()),
        )
    }

    pub fn kick_types(&self) -> Vec<String> {
        unique_sorted(self.kicks.iter().filter_map(|k| k.kick_type.as_deref()))
    }

    pub fn outcomes(&self) -> Vec<String> {
        unique_sorted(self.kicks.iter().filter_map(|k| k.outcome.as_deref()))
    }
}

impl<'a> IntoIterator for &'a KickTable {
    type Item = &'a KickRecord;
    type IntoIter = std::slice::Iter<'a, KickRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.kicks.iter()
    }
}

// ---------------------------------------------------------------------------
// Fixtures
// ---------------------------------------------------------------------------

/// One scheduled match.
#[derive(Debug, Clone, PartialEq)]
pub struct FixtureRecord {
    pub game_id: GameId,
    pub round_id: i64,
    pub round_name: String,
    pub home_team: String,
    pub away_team: String,
    pub home_score: Option<i64>,
    pub away_score: Option<i64>,
    pub venue: Option<String>,
    pub ground_condition: Option<String>,
    pub weather: Option<String>,
}

impl FixtureRecord {
    /// Whether `team` played in this match on either side.
    pub fn involves(&self, team: &str) -> bool {
        self.home_team == team || self.away_team == team
    }
}

/// The full fixtures table. May be empty when no fixtures source exists.
#[derive(Debug, Clone, Default)]
pub struct FixtureTable {
    pub fixtures: Vec<FixtureRecord>,
}

impl FixtureTable {
    pub fn new(fixtures: Vec<FixtureRecord>) -> Self {
        FixtureTable { fixtures }
    }

    pub fn len(&self) -> usize {
        self.fixtures.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fixtures.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, FixtureRecord> {
        self.fixtures.iter()
    }

    /// Lowest and highest round identifier, if any fixtures are loaded.
    pub fn round_bounds(&self) -> Option<(i64, i64)> {
        let min = self.fixtures.iter().map(|f| f.round_id).min()?;
        let max = self.fixtures.iter().map(|f| f.round_id).max()?;
        Some((min, max))
    }

    pub fn venues(&self) -> Vec<String> {
        unique_sorted(self.fixtures.iter().filter_map(|f| f.venue.as_deref()))
    }

    pub fn ground_conditions(&self) -> Vec<String> {
        unique_sorted(self.fixtures.iter().filter_map(|f| f.ground_condition.as_deref()))
    }

    pub fn weathers(&self) -> Vec<String> {
        unique_sorted(self.fixtures.iter().filter_map(|f| f.weather.as_deref()))
    }
}

fn unique_sorted<'a>(values: impl Iterator<Item = &'a str>) -> Vec<String> {
    values
        .filter(|v| !v.is_empty())
        .map(str::to_string)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

// ---------------------------------------------------------------------------
// Field bounds
// ---------------------------------------------------------------------------

/// Extent of every numeric filter dimension. Used as slider limits and to
/// build the unrestricted filter.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FieldBounds {
    /// Field length.
    pub x: [f64; 2],
    /// Field width.
    pub y: [f64; 2],
    pub game_seconds: [f64; 2],
    pub tackle_number: [i64; 2],
    /// Round range offered when no fixtures are loaded.
    pub default_rounds: [i64; 2],
}

impl Default for FieldBounds {
    fn default() -> Self {
        FieldBounds {
            x: [-100.0, 1100.0],
            y: [0.0, 700.0],
            game_seconds: [0.0, 4800.0],
            tackle_number: [0, 6],
            default_rounds: [1, 30],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kick(team: &str, player: Option<&str>) -> KickRecord {
        KickRecord {
            game_id: GameId::from(1),
            team: team.to_string(),
            opposition: "Other".to_string(),
            player: player.map(str::to_string),
            kick_type: None,
            outcome: None,
            start: Point::new(0.0, 0.0),
            end: Point::new(0.0, 0.0),
            game_seconds: 0.0,
            tackle_number: None,
            extra: BTreeMap::new(),
        }
    }

    #[test]
    fn test_metadata_text_normalises_integral_floats() {
        assert_eq!(MetadataValue::Float(7.0).as_text().as_deref(), Some("7"));
        assert_eq!(MetadataValue::Float(7.5).as_text().as_deref(), Some("7.5"));
        assert_eq!(MetadataValue::Float(f64::NAN).as_text(), None);
        assert_eq!(MetadataValue::String(String::new()).as_text(), None);
        assert!(MetadataValue::Null.is_null());
    }

    #[test]
    fn test_metadata_text_cells_keep_source_form() {
        let cell = MetadataValue::String("007".to_string());
        assert_eq!(cell.as_text().as_deref(), Some("007"));
        assert_eq!(cell.as_i64(), Some(7));

        let cell = MetadataValue::String("1e3".to_string());
        assert_eq!(cell.as_text().as_deref(), Some("1e3"));
        assert_eq!(cell.as_f64(), Some(1000.0));

        assert_eq!(MetadataValue::String("7.0".to_string()).as_i64(), Some(7));
        assert_eq!(MetadataValue::String("7.5".to_string()).as_i64(), None);
        assert_eq!(MetadataValue::String("last".to_string()).as_f64(), None);
    }

    #[test]
    fn test_outcome_classes() {
        assert_eq!(OutcomeClass::classify(Some("Try")), OutcomeClass::Try);
        assert_eq!(OutcomeClass::classify(Some("40/20")), OutcomeClass::Success);
        assert_eq!(OutcomeClass::classify(Some("Out on Full")), OutcomeClass::Failure);
        assert_eq!(OutcomeClass::classify(Some("Dead")), OutcomeClass::Neutral);
        assert_eq!(OutcomeClass::classify(None), OutcomeClass::Neutral);
    }

    #[test]
    fn test_players_narrowed_by_team() {
        let table = KickTable::new(vec![
            kick("Storm", Some("Hughes")),
            kick("Storm", Some("Grant")),
            kick("Panthers", Some("Cleary")),
            kick("Panthers", None),
        ]);

        assert_eq!(table.players(None), vec!["Cleary", "Grant", "Hughes"]);
        assert_eq!(table.players(Some("Storm")), vec!["Grant", "Hughes"]);
        assert!(table.players(Some("Broncos")).is_empty());
    }

    #[test]
    fn test_select_preserves_given_order() {
        let table = KickTable::new(vec![
            kick("A", None),
            kick("B", None),
            kick("C", None),
        ]);
        let picked = table.select(&[2, 0, 9]);
        let teams: Vec<_> = picked.iter().map(|k| k.team.as_str()).collect();
        assert_eq!(teams, vec!["C", "A"]);
    }

    #[test]
    fn test_round_bounds() {
        assert_eq!(FixtureTable::default().round_bounds(), None);
        let fixture = |round_id| FixtureRecord {
            game_id: GameId::from(round_id),
            round_id,
            round_name: format!("Round {round_id}"),
            home_team: "A".into(),
            away_team: "B".into(),
            home_score: None,
            away_score: None,
            venue: None,
            ground_condition: None,
            weather: None,
        };
        let table = FixtureTable::new(vec![fixture(4), fixture(1), fixture(9)]);
        assert_eq!(table.round_bounds(), Some((1, 9)));
    }
}
