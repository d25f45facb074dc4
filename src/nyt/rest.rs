use super::error::{ApiError, SESSION_COOKIE};
use super::types::{GameResponse, OverviewResponse, PuzzleDetail, PuzzleSummary, PuzzleType};
use super::PuzzleApi;
use async_trait::async_trait;
use chrono::NaiveDate;
use reqwest::header::COOKIE;
use reqwest::Client;
use std::time::Duration;

pub struct NytRest {
    client: Client,
    base_url: String,
    session_token: String,
}

impl NytRest {
    pub fn new(session_token: String, base_url: &str, timeout: Duration) -> Self {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .expect("failed to build HTTP client");
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            session_token,
        }
    }

    fn session_cookie(&self) -> String {
        format!("{}={}", SESSION_COOKIE, self.session_token)
    }
}

#[async_trait]
impl PuzzleApi for NytRest {
    async fn fetch_overview(
        &self,
        puzzle_type: PuzzleType,
        date_start: NaiveDate,
        date_end: NaiveDate,
    ) -> Result<Vec<PuzzleSummary>, ApiError> {
        let url = format!("{}/v3/puzzles.json", self.base_url);
        let date_start = date_start.format("%Y-%m-%d").to_string();
        let date_end = date_end.format("%Y-%m-%d").to_string();

        let resp = self
            .client
            .get(&url)
            .header(COOKIE, self.session_cookie())
            .query(&[
                ("publish_type", puzzle_type.publish_type()),
                ("sort_order", "asc"),
                ("sort_by", "print_date"),
                ("date_start", date_start.as_str()),
                ("date_end", date_end.as_str()),
            ])
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(ApiError::Remote {
                endpoint: "overview",
                status,
                body,
            });
        }

        let parsed: OverviewResponse = resp.json().await?;
        Ok(parsed.results.unwrap_or_default())
    }

    async fn fetch_detail(&self, puzzle_id: u64) -> Result<PuzzleDetail, ApiError> {
        let url = format!("{}/v6/game/{}.json", self.base_url, puzzle_id);

        let resp = self
            .client
            .get(&url)
            .header(COOKIE, self.session_cookie())
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(ApiError::Remote {
                endpoint: "detail",
                status,
                body,
            });
        }

        let parsed: GameResponse = resp.json().await?;
        Ok(PuzzleDetail {
            seconds_spent_solving: parsed.calcs.seconds_spent_solving,
            first_solved: parsed.firsts.solved,
        })
    }
}
