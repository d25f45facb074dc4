pub mod auth;
pub mod error;
pub mod rest;
pub mod types;

use async_trait::async_trait;
use chrono::NaiveDate;
use error::ApiError;
use types::{PuzzleDetail, PuzzleSummary, PuzzleType};

/// Seam over the crossword service so the completion filter can be
/// exercised without a live endpoint.
#[async_trait]
pub trait PuzzleApi: Send + Sync {
    /// Summaries for puzzles published inside [date_start, date_end],
    /// ascending by publication date.
    async fn fetch_overview(
        &self,
        puzzle_type: PuzzleType,
        date_start: NaiveDate,
        date_end: NaiveDate,
    ) -> Result<Vec<PuzzleSummary>, ApiError>;

    /// Solve metrics for a single puzzle.
    async fn fetch_detail(&self, puzzle_id: u64) -> Result<PuzzleDetail, ApiError>;
}
