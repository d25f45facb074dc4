use chrono::NaiveDate;
use clap::ValueEnum;
use serde::Deserialize;

/// Puzzle categories the overview endpoint can be queried for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum PuzzleType {
    Daily,
    Mini,
    Bonus,
}

impl PuzzleType {
    /// Value for the `publish_type` query parameter.
    pub fn publish_type(&self) -> &'static str {
        match self {
            PuzzleType::Daily => "daily",
            PuzzleType::Mini => "mini",
            PuzzleType::Bonus => "bonus",
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct OverviewResponse {
    pub results: Option<Vec<PuzzleSummary>>,
}

/// One row of the v3 overview listing. Unknown fields are ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct PuzzleSummary {
    pub puzzle_id: u64,
    pub print_date: NaiveDate,
    #[serde(default)]
    pub solved: bool,
    #[serde(default)]
    pub author: Option<String>,
}

/// Solve metrics merged from the v6 game payload: duration lives under
/// `calcs`, the first-solved timestamp under `firsts`.
#[derive(Debug, Clone, Copy, Default)]
pub struct PuzzleDetail {
    pub seconds_spent_solving: Option<u32>,
    /// Unix epoch seconds; None means the puzzle was never fully solved.
    pub first_solved: Option<i64>,
}

#[derive(Debug, Deserialize)]
pub struct GameResponse {
    #[serde(default)]
    pub calcs: Calcs,
    #[serde(default)]
    pub firsts: Firsts,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Calcs {
    #[serde(default)]
    pub seconds_spent_solving: Option<u32>,
}

#[derive(Debug, Default, Deserialize)]
pub struct Firsts {
    #[serde(default)]
    pub solved: Option<i64>,
}

#[derive(Debug, Deserialize)]
pub struct LoginResponse {
    pub data: LoginData,
}

#[derive(Debug, Deserialize)]
pub struct LoginData {
    #[serde(default)]
    pub cookies: Vec<LoginCookie>,
}

#[derive(Debug, Deserialize)]
pub struct LoginCookie {
    pub name: String,
    #[serde(default, rename = "cipheredValue")]
    pub ciphered_value: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_parses_with_extra_fields() {
        let json = r#"{
            "puzzle_id": 12345,
            "print_date": "2024-01-05",
            "solved": true,
            "author": "Jane Doe",
            "percent_filled": 100,
            "star": "Gold"
        }"#;
        let summary: PuzzleSummary = serde_json::from_str(json).unwrap();
        assert_eq!(summary.puzzle_id, 12345);
        assert_eq!(
            summary.print_date,
            NaiveDate::from_ymd_opt(2024, 1, 5).unwrap()
        );
        assert!(summary.solved);
        assert_eq!(summary.author.as_deref(), Some("Jane Doe"));
    }

    #[test]
    fn test_summary_solved_defaults_to_false() {
        let json = r#"{"puzzle_id": 1, "print_date": "2024-01-05"}"#;
        let summary: PuzzleSummary = serde_json::from_str(json).unwrap();
        assert!(!summary.solved);
        assert!(summary.author.is_none());
    }

    #[test]
    fn test_game_response_missing_firsts() {
        let json = r#"{"calcs": {"secondsSpentSolving": 120}}"#;
        let game: GameResponse = serde_json::from_str(json).unwrap();
        assert_eq!(game.calcs.seconds_spent_solving, Some(120));
        assert_eq!(game.firsts.solved, None);
    }

    #[test]
    fn test_overview_results_may_be_null() {
        let resp: OverviewResponse = serde_json::from_str(r#"{"results": null}"#).unwrap();
        assert!(resp.results.is_none());
    }

    #[test]
    fn test_publish_type_values() {
        assert_eq!(PuzzleType::Daily.publish_type(), "daily");
        assert_eq!(PuzzleType::Mini.publish_type(), "mini");
        assert_eq!(PuzzleType::Bonus.publish_type(), "bonus");
    }
}
