use std::path::Path;
use std::sync::Arc;

use anyhow::{bail, Context, Result};
use arrow::array::{
    Array, BooleanArray, Float32Array, Float64Array, Int32Array, Int64Array, LargeStringArray,
    StringArray,
};
use parquet::arrow::arrow_reader::ParquetRecordBatchReaderBuilder;
use serde_json::Value as JsonValue;

use super::model::{
    FixtureRecord, FixtureTable, GameId, KickRecord, KickTable, MetadataValue, Point, RawRow,
};

// ---------------------------------------------------------------------------
// Column names
// ---------------------------------------------------------------------------

/// Kick table columns.
pub mod kick_columns {
    pub const GAME_ID: &str = "GameId";
    pub const TEAM: &str = "TeamName";
    pub const OPPOSITION: &str = "OppositionName";
    pub const PLAYER: &str = "PN";
    pub const KICK_TYPE: &str = "Type";
    pub const OUTCOME: &str = "Outcome";
    pub const START_X: &str = "NX";
    pub const START_Y: &str = "NY";
    pub const END_X: &str = "nEX";
    pub const END_Y: &str = "nEY";
    pub const GAME_SECONDS: &str = "GS";
    pub const TACKLE_NUMBER: &str = "TackleNumber";
    /// Game clock as displayed (passthrough).
    pub const GAME_MINUTE: &str = "GM";
}

/// Fixture table columns.
pub mod fixture_columns {
    pub const ROUND_ID: &str = "roundId";
    pub const ROUND_NAME: &str = "roundName";
    pub const GAME_ID: &str = "gameId";
    pub const HOME_TEAM: &str = "teamName_home";
    pub const AWAY_TEAM: &str = "teamName_away";
    pub const HOME_SCORE: &str = "teamFinalScore_home";
    pub const AWAY_SCORE: &str = "teamFinalScore_away";
    pub const VENUE: &str = "venueName";
    pub const GROUND_CONDITION: &str = "groundConditionName";
    pub const WEATHER: &str = "weatherName";
}

// ---------------------------------------------------------------------------
// Public entry-points
// ---------------------------------------------------------------------------

/// Load the kicks table. Every row must carry the game id, both team names,
/// both positions and the game time.
pub fn load_kicks(path: &Path) -> Result<KickTable> {
    let rows = read_rows(path).with_context(|| format!("loading kicks from {}", path.display()))?;
    let kicks = rows
        .into_iter()
        .enumerate()
        .map(|(row_no, row)| kick_from_row(row_no, row))
        .collect::<Result<Vec<_>>>()
        .with_context(|| format!("reading kicks from {}", path.display()))?;

    log::info!("Loaded {} kicks from {}", kicks.len(), path.display());
    Ok(KickTable::new(kicks))
}

/// Load the fixtures table. A missing or empty file yields an empty table so
/// the dashboard keeps working without match metadata.
pub fn load_fixtures(path: &Path) -> Result<FixtureTable> {
    let is_empty_file = match std::fs::metadata(path) {
        Ok(meta) => meta.len() == 0,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            log::warn!(
                "No fixtures at {}; round, venue, ground and weather filters are disabled",
                path.display()
            );
            return Ok(FixtureTable::default());
        }
        Err(e) => {
            return Err(e).with_context(|| format!("checking fixtures file {}", path.display()))
        }
    };
    if is_empty_file {
        log::warn!("Fixtures file {} is empty", path.display());
        return Ok(FixtureTable::default());
    }

    let rows =
        read_rows(path).with_context(|| format!("loading fixtures from {}", path.display()))?;
    let fixtures = rows
        .into_iter()
        .enumerate()
        .map(|(row_no, row)| fixture_from_row(row_no, row))
        .collect::<Result<Vec<_>>>()
        .with_context(|| format!("reading fixtures from {}", path.display()))?;

    log::info!("Loaded {} fixtures from {}", fixtures.len(), path.display());
    Ok(FixtureTable::new(fixtures))
}

/// Read a file into raw rows. Dispatch by extension.
///
/// Supported formats:
/// * `.csv`     – header row, one record per line (recommended)
/// * `.json`    – `[{ "GameId": 1, "TeamName": "...", ... }, ...]`
/// * `.parquet` – flat columns of strings / integers / floats / booleans
pub fn read_rows(path: &Path) -> Result<Vec<RawRow>> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    match ext.as_str() {
        "csv" => read_csv(path),
        "json" => read_json(path),
        "parquet" | "pq" => read_parquet(path),
        other => bail!("Unsupported file extension: .{other}"),
    }
}

// ---------------------------------------------------------------------------
// Typed records
// ---------------------------------------------------------------------------

fn take(row: &mut RawRow, col: &str) -> MetadataValue {
    row.remove(col).unwrap_or(MetadataValue::Null)
}

fn required_text(row: &mut RawRow, row_no: usize, col: &str) -> Result<String> {
    take(row, col)
        .as_text()
        .with_context(|| format!("Row {row_no}: missing value for '{col}'"))
}

fn required_f64(row: &mut RawRow, row_no: usize, col: &str) -> Result<f64> {
    let value = take(row, col);
    value
        .as_f64()
        .with_context(|| format!("Row {row_no}: '{col}' is not a number (got '{value}')"))
}

fn required_i64(row: &mut RawRow, row_no: usize, col: &str) -> Result<i64> {
    let value = take(row, col);
    value
        .as_i64()
        .with_context(|| format!("Row {row_no}: '{col}' is not an integer (got '{value}')"))
}

/// Absent or not an integer gives `None`. A malformed cell is handed back so
/// the caller can keep it for display.
fn lenient_i64(
    row: &mut RawRow,
    row_no: usize,
    col: &str,
) -> (Option<i64>, Option<MetadataValue>) {
    let value = take(row, col);
    if value.is_null() {
        return (None, None);
    }
    match value.as_i64() {
        Some(i) => (Some(i), None),
        None => {
            log::warn!("Row {row_no}: '{col}' is not an integer (got '{value}'), treating as absent");
            (None, Some(value))
        }
    }
}

/// Join key. Integral float text (`112.0`, as pandas writes id columns with
/// gaps) is reduced to its integer form; any other text is kept verbatim.
fn game_id(row: &mut RawRow, row_no: usize, col: &str) -> Result<GameId> {
    let text = required_text(row, row_no, col)?;
    let id = match text.split_once('.') {
        Some((whole, frac))
            if !whole.is_empty()
                && whole.bytes().all(|b| b.is_ascii_digit())
                && frac.bytes().all(|b| b == b'0') =>
        {
            whole.to_string()
        }
        _ => text,
    };
    Ok(GameId(id))
}

fn optional_text(row: &mut RawRow, col: &str) -> Option<String> {
    take(row, col).as_text()
}

/// Convert one raw row into a kick. Unclaimed columns become passthrough
/// display fields.
pub fn kick_from_row(row_no: usize, mut row: RawRow) -> Result<KickRecord> {
    use kick_columns::*;

    let game_id = game_id(&mut row, row_no, GAME_ID)?;
    let team = required_text(&mut row, row_no, TEAM)?;
    let opposition = required_text(&mut row, row_no, OPPOSITION)?;
    let start = Point::new(
        required_f64(&mut row, row_no, START_X)?,
        required_f64(&mut row, row_no, START_Y)?,
    );
    let end = Point::new(
        required_f64(&mut row, row_no, END_X)?,
        required_f64(&mut row, row_no, END_Y)?,
    );
    let game_seconds = required_f64(&mut row, row_no, GAME_SECONDS)?;
    // A malformed tackle number stays on the row so the filter can report it.
    let (tackle_number, malformed) = lenient_i64(&mut row, row_no, TACKLE_NUMBER);
    if let Some(raw) = malformed {
        row.insert(TACKLE_NUMBER.to_string(), raw);
    }

    Ok(KickRecord {
        game_id,
        team,
        opposition,
        player: optional_text(&mut row, PLAYER),
        kick_type: optional_text(&mut row, KICK_TYPE),
        outcome: optional_text(&mut row, OUTCOME),
        start,
        end,
        game_seconds,
        tackle_number,
        extra: row,
    })
}

/// Convert one raw row into a fixture.
pub fn fixture_from_row(row_no: usize, mut row: RawRow) -> Result<FixtureRecord> {
    use fixture_columns::*;

    let game_id = game_id(&mut row, row_no, GAME_ID)?;
    let round_id = required_i64(&mut row, row_no, ROUND_ID)?;
    let round_name =
        optional_text(&mut row, ROUND_NAME).unwrap_or_else(|| format!("Round {round_id}"));

    Ok(FixtureRecord {
        game_id,
        round_id,
        round_name,
        home_team: required_text(&mut row, row_no, HOME_TEAM)?,
        away_team: required_text(&mut row, row_no, AWAY_TEAM)?,
        home_score: lenient_i64(&mut row, row_no, HOME_SCORE).0,
        away_score: lenient_i64(&mut row, row_no, AWAY_SCORE).0,
        venue: optional_text(&mut row, VENUE),
        ground_condition: optional_text(&mut row, GROUND_CONDITION),
        weather: optional_text(&mut row, WEATHER),
    })
}

// ---------------------------------------------------------------------------
// CSV reader
// ---------------------------------------------------------------------------

fn read_csv(path: &Path) -> Result<Vec<RawRow>> {
    let mut reader = csv::Reader::from_path(path).context("opening CSV")?;
    let headers: Vec<String> = reader
        .headers()
        .context("reading CSV headers")?
        .iter()
        .map(|h| h.trim().to_string())
        .collect();

    let mut rows = Vec::new();
    for (row_no, result) in reader.records().enumerate() {
        let record = result.with_context(|| format!("CSV row {row_no}"))?;
        let row: RawRow = headers
            .iter()
            .zip(record.iter())
            .map(|(col, value)| (col.clone(), csv_cell(value)))
            .collect();
        rows.push(row);
    }
    Ok(rows)
}

/// CSV cells stay text; numeric fields parse them when the record is built.
/// Blank and `nan` cells are missing values.
fn csv_cell(s: &str) -> MetadataValue {
    let s = s.trim();
    if s.is_empty() || s.eq_ignore_ascii_case("nan") {
        MetadataValue::Null
    } else {
        MetadataValue::String(s.to_string())
    }
}

// ---------------------------------------------------------------------------
// JSON reader
// ---------------------------------------------------------------------------

/// Records-oriented JSON, the default `df.to_json(orient='records')`.
fn read_json(path: &Path) -> Result<Vec<RawRow>> {
    let text = std::fs::read_to_string(path).context("reading JSON file")?;
    let root: JsonValue = serde_json::from_str(&text).context("parsing JSON")?;

    let records = root.as_array().context("Expected top-level JSON array")?;

    records
        .iter()
        .enumerate()
        .map(|(i, rec)| {
            let obj = rec
                .as_object()
                .with_context(|| format!("Row {i} is not a JSON object"))?;
            Ok(obj
                .iter()
                .map(|(key, val)| (key.clone(), json_to_metadata(val)))
                .collect())
        })
        .collect()
}

fn json_to_metadata(val: &JsonValue) -> MetadataValue {
    match val {
        JsonValue::String(s) => MetadataValue::String(s.clone()),
        JsonValue::Number(n) => {
            if let Some(i) = n.as_i64() {
                MetadataValue::Integer(i)
            } else if let Some(f) = n.as_f64() {
                MetadataValue::Float(f)
            } else {
                MetadataValue::String(n.to_string())
            }
        }
        JsonValue::Bool(b) => MetadataValue::Bool(*b),
        JsonValue::Null => MetadataValue::Null,
        other => MetadataValue::String(other.to_string()),
    }
}

// ---------------------------------------------------------------------------
// Parquet reader
// ---------------------------------------------------------------------------

/// Flat Parquet table as written by **Pandas** (`df.to_parquet()`) or
/// **Polars** (`df.write_parquet()`).
fn read_parquet(path: &Path) -> Result<Vec<RawRow>> {
    let file = std::fs::File::open(path).context("opening parquet file")?;
    let builder =
        ParquetRecordBatchReaderBuilder::try_new(file).context("reading parquet metadata")?;
    let reader = builder.build().context("building parquet reader")?;

    let mut rows = Vec::new();
    for batch_result in reader {
        let batch = batch_result.context("reading parquet record batch")?;
        let schema = batch.schema();
        let names: Vec<String> = schema.fields().iter().map(|f| f.name().clone()).collect();

        for row in 0..batch.num_rows() {
            let raw: RawRow = names
                .iter()
                .enumerate()
                .map(|(col_idx, name)| (name.clone(), extract_value(batch.column(col_idx), row)))
                .collect();
            rows.push(raw);
        }
    }
    Ok(rows)
}

/// Extract a single cell from an Arrow column. Unsupported types are kept as
/// their debug text so they can still be displayed.
fn extract_value(col: &Arc<dyn Array>, row: usize) -> MetadataValue {
    if col.is_null(row) {
        return MetadataValue::Null;
    }
    let any = col.as_any();
    if let Some(arr) = any.downcast_ref::<StringArray>() {
        MetadataValue::String(arr.value(row).to_string())
    } else if let Some(arr) = any.downcast_ref::<LargeStringArray>() {
        MetadataValue::String(arr.value(row).to_string())
    } else if let Some(arr) = any.downcast_ref::<Int64Array>() {
        MetadataValue::Integer(arr.value(row))
    } else if let Some(arr) = any.downcast_ref::<Int32Array>() {
        MetadataValue::Integer(i64::from(arr.value(row)))
    } else if let Some(arr) = any.downcast_ref::<Float64Array>() {
        MetadataValue::Float(arr.value(row))
    } else if let Some(arr) = any.downcast_ref::<Float32Array>() {
        MetadataValue::Float(f64::from(arr.value(row)))
    } else if let Some(arr) = any.downcast_ref::<BooleanArray>() {
        MetadataValue::Bool(arr.value(row))
    } else {
        MetadataValue::String(format!("{:?}", col.data_type()))
    }
}
