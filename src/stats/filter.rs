use crate::nyt::error::ApiError;
use crate::nyt::types::PuzzleSummary;
use crate::nyt::PuzzleApi;
use chrono::{DateTime, Datelike, NaiveDate, TimeZone, Weekday};

/// A puzzle that survived completion filtering. Only constructed for
/// solved puzzles with a present first-solved timestamp.
#[derive(Debug, Clone)]
pub struct SolvedPuzzle {
    pub puzzle_id: u64,
    pub print_date: NaiveDate,
    pub author: Option<String>,
    pub seconds_spent_solving: Option<u32>,
    /// Unix epoch seconds of the first full solve.
    pub first_solved: i64,
    /// Derived from the publication date, not the completion date.
    pub day_of_week: Weekday,
}

/// Inclusive completion-date window.
#[derive(Debug, Clone, Copy)]
pub struct CompletionWindow {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl CompletionWindow {
    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start && date <= self.end
    }
}

/// Calendar date of a completion timestamp in the given timezone.
fn completion_date<Tz: TimeZone>(epoch_secs: i64, tz: &Tz) -> Option<NaiveDate> {
    DateTime::from_timestamp(epoch_secs, 0).map(|utc| utc.with_timezone(tz).date_naive())
}

/// Full English weekday name, as it appears in the CSV output.
pub fn weekday_name(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

/// Fetch solve details for the overview rows and keep the puzzles first
/// solved inside `window`.
///
/// The overview endpoint can only filter by publication date server-side,
/// so completion filtering happens here, after the per-puzzle detail fetch.
/// Unsolved rows are dropped before any detail request is issued. Rows
/// without a first-solved timestamp are dropped, not errors. Survivors keep
/// the overview order (ascending publication date).
pub async fn filter_completed<A, Tz>(
    api: &A,
    overview: Vec<PuzzleSummary>,
    window: CompletionWindow,
    tz: &Tz,
) -> Result<Vec<SolvedPuzzle>, ApiError>
where
    A: PuzzleApi + ?Sized,
    Tz: TimeZone,
{
    let mut kept = Vec::new();

    for summary in overview {
        if !summary.solved {
            continue;
        }

        let detail = api.fetch_detail(summary.puzzle_id).await?;

        let Some(first_solved) = detail.first_solved else {
            tracing::debug!(
                puzzle_id = summary.puzzle_id,
                "no first-solved timestamp, skipping"
            );
            continue;
        };

        let Some(completed) = completion_date(first_solved, tz) else {
            tracing::debug!(
                puzzle_id = summary.puzzle_id,
                first_solved,
                "unrepresentable completion timestamp, skipping"
            );
            continue;
        };

        if !window.contains(completed) {
            tracing::debug!(
                puzzle_id = summary.puzzle_id,
                completed = %completed,
                "completed outside window, skipping"
            );
            continue;
        }

        kept.push(SolvedPuzzle {
            puzzle_id: summary.puzzle_id,
            print_date: summary.print_date,
            author: summary.author,
            seconds_spent_solving: detail.seconds_spent_solving,
            first_solved,
            day_of_week: summary.print_date.weekday(),
        });
    }

    Ok(kept)
}
