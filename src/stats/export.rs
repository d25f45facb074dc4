use super::filter::{weekday_name, SolvedPuzzle};
use anyhow::{Context, Result};
use chrono::NaiveDate;
use serde::Serialize;
use std::path::Path;

/// Column order of the output file. The row struct's field order must
/// stay in sync.
pub const HEADERS: [&str; 6] = [
    "solved",
    "puzzle_date",
    "day_of_week",
    "time_taken",
    "completed_at_et",
    "constructor",
];

/// One CSV row. Field order defines the column order.
#[derive(Debug, Serialize, PartialEq)]
pub struct StatsRow {
    pub solved: bool,
    pub puzzle_date: NaiveDate,
    pub day_of_week: &'static str,
    pub time_taken: Option<u32>,
    pub completed_at_et: i64,
    pub constructor: Option<String>,
}

impl From<&SolvedPuzzle> for StatsRow {
    fn from(puzzle: &SolvedPuzzle) -> Self {
        StatsRow {
            solved: true,
            puzzle_date: puzzle.print_date,
            day_of_week: weekday_name(puzzle.day_of_week),
            time_taken: puzzle.seconds_spent_solving,
            completed_at_et: puzzle.first_solved,
            constructor: puzzle.author.clone(),
        }
    }
}

/// Write a header row plus one row per puzzle, overwriting `path`. Rows are
/// written in the order given (ascending publication date, since the filter
/// preserves overview order).
pub fn write_csv(path: &Path, puzzles: &[SolvedPuzzle]) -> Result<()> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_path(path)
        .with_context(|| format!("Failed to open output file: {}", path.display()))?;

    writer.write_record(HEADERS)?;
    for puzzle in puzzles {
        writer.serialize(StatsRow::from(puzzle))?;
    }
    writer
        .flush()
        .with_context(|| format!("Failed to flush output file: {}", path.display()))?;
    Ok(())
}
