use std::io::{self, Write};

use crate::data::cross_ref::{applied_conditions, FixtureCrossRef};
use crate::data::filter::FilterSpec;
use crate::data::loader::kick_columns;
use crate::data::model::{FixtureRecord, KickRecord};
use crate::data::store::{DatasetStore, FilterOutcome};

pub const NO_MATCHES: &str = "No matches match the selected criteria.";
pub const NO_KICKS: &str = "No kicks match the selected criteria.";

/// Column headings of the kick listing.
pub const KICK_LISTING_COLUMNS: [&str; 10] = [
    kick_columns::TEAM,
    kick_columns::OPPOSITION,
    kick_columns::PLAYER,
    kick_columns::KICK_TYPE,
    kick_columns::OUTCOME,
    kick_columns::GAME_MINUTE,
    kick_columns::START_X,
    kick_columns::START_Y,
    kick_columns::END_X,
    kick_columns::END_Y,
];

/// Cells of one kick listing row, matching [`KICK_LISTING_COLUMNS`].
pub fn kick_row(kick: &KickRecord) -> [String; 10] {
    let text = |v: &Option<String>| v.clone().unwrap_or_default();
    [
        kick.team.clone(),
        kick.opposition.clone(),
        text(&kick.player),
        text(&kick.kick_type),
        text(&kick.outcome),
        kick.display_field(kick_columns::GAME_MINUTE)
            .map(|v| v.to_string())
            .unwrap_or_default(),
        format_coord(kick.start.x),
        format_coord(kick.start.y),
        format_coord(kick.end.x),
        format_coord(kick.end.y),
    ]
}

fn format_coord(v: f64) -> String {
    if v.fract() == 0.0 {
        format!("{v:.0}")
    } else {
        format!("{v:.1}")
    }
}

/// One line of the match list, e.g.
/// `Round 5: Storm (24) vs Panthers (18) at AAMI Park | Ground: Good | Weather: Fine`.
pub fn fixture_line(fixture: &FixtureRecord) -> String {
    let score = |s: Option<i64>| s.map_or_else(|| "-".to_string(), |s| s.to_string());
    let text = |s: &Option<String>| s.clone().unwrap_or_else(|| "-".to_string());
    format!(
        "{}: {} ({}) vs {} ({}) at {} | Ground: {} | Weather: {}",
        fixture.round_name,
        fixture.home_team,
        score(fixture.home_score),
        fixture.away_team,
        score(fixture.away_score),
        text(&fixture.venue),
        text(&fixture.ground_condition),
        text(&fixture.weather),
    )
}

/// `Matches: N | Kicks: M`
pub fn counts_line(fixtures: &FixtureCrossRef, kick_count: usize) -> String {
    format!("Matches: {} | Kicks: {}", fixtures.len(), kick_count)
}

/// Write the match information and the kick listing as plain text.
pub fn write_report<W: Write>(
    out: &mut W,
    store: &DatasetStore,
    spec: &FilterSpec,
    outcome: &FilterOutcome,
) -> io::Result<()> {
    if store.has_fixtures() {
        writeln!(out, "Match Information")?;
        let conditions = applied_conditions(spec);
        if !conditions.is_empty() {
            writeln!(out, "Applied Conditions: {}", conditions.join(", "))?;
        }
        writeln!(out, "{}", counts_line(&outcome.fixtures, outcome.kick_indices.len()))?;

        if outcome.fixtures.is_empty() {
            writeln!(out, "{NO_MATCHES}")?;
        }
        for fixture in outcome.fixtures.fixtures(store.fixtures()) {
            let marker = if outcome.fixtures.has_kicks(fixture) { "*" } else { " " };
            writeln!(out, "{marker} {}", fixture_line(fixture))?;
        }
        writeln!(out)?;
    }

    writeln!(out, "Kicks")?;
    if outcome.kick_indices.is_empty() {
        writeln!(out, "{NO_KICKS}")?;
        return Ok(());
    }
    writeln!(out, "{}", KICK_LISTING_COLUMNS.join("\t"))?;
    for kick in store.visible(&outcome.kick_indices) {
        writeln!(out, "{}", kick_row(kick).join("\t"))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::filter::tests::{fixture, three_kicks};
    use crate::data::filter::Selection;
    use crate::data::model::{FieldBounds, FixtureTable, MetadataValue};

    fn render(store: &DatasetStore, spec: &FilterSpec) -> String {
        let outcome = store.apply(spec).unwrap();
        let mut out = Vec::new();
        write_report(&mut out, store, spec, &outcome).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_fixture_line_with_missing_values() {
        let mut f = fixture(1, 5, "Storm", "Panthers");
        f.away_score = None;
        f.weather = None;
        assert_eq!(
            fixture_line(&f),
            "Round 5: Storm (18) vs Panthers (-) at Suncorp Stadium | Ground: Good | Weather: -"
        );
    }

    #[test]
    fn test_kick_row() {
        let mut kick = three_kicks().kicks.remove(1);
        kick.extra.insert(
            kick_columns::GAME_MINUTE.to_string(),
            MetadataValue::String("12:30".to_string()),
        );
        kick.start.x = 50.26;
        let row = kick_row(&kick);
        assert_eq!(row[0], "Team A");
        assert_eq!(row[4], "Kick Error");
        assert_eq!(row[5], "12:30");
        assert_eq!(row[6], "50.3");
        assert_eq!(row[9], "650");
    }

    #[test]
    fn test_report_flags_games_with_kicks() {
        let fixtures = FixtureTable::new(vec![
            fixture(1, 1, "Team A", "Team B"),
            fixture(2, 2, "Team B", "Team C"),
        ]);
        let store = DatasetStore::from_tables(three_kicks(), fixtures);
        let mut spec = store.unrestricted_spec(&FieldBounds::default());
        spec.kicking_team = Selection::Only("Team B".to_string());

        let text = render(&store, &spec);
        assert!(text.contains("Applied Conditions: Team: Team B"));
        assert!(text.contains("Matches: 2 | Kicks: 1"));
        assert!(text.contains("* Round 1: Team A (18) vs Team B (12)"));
        assert!(text.contains("  Round 2: Team B (18) vs Team C (12)"));
    }

    #[test]
    fn test_report_empty_states() {
        let fixtures = FixtureTable::new(vec![fixture(1, 1, "Team A", "Team B")]);
        let store = DatasetStore::from_tables(three_kicks(), fixtures);
        let mut spec = store.unrestricted_spec(&FieldBounds::default());
        spec.venue = Selection::Only("Elsewhere".to_string());

        let text = render(&store, &spec);
        assert!(text.contains(NO_MATCHES));
        assert!(text.contains(NO_KICKS));
    }

    #[test]
    fn test_report_without_fixtures_skips_match_information() {
        let store = DatasetStore::from_tables(three_kicks(), FixtureTable::default());
        let text = render(&store, &store.unrestricted_spec(&FieldBounds::default()));
        assert!(!text.contains("Match Information"));
        assert_eq!(text.lines().filter(|l| l.starts_with("Team ")).count(), 3);
    }
}
