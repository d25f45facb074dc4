use crate::nyt::types::PuzzleType;
use chrono::NaiveDate;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "xword-stats",
    about = "Fetch NYT Crossword solve stats and export them to CSV",
    version
)]
pub struct Cli {
    /// NYT account email address (falls back to NYT_EMAIL)
    #[arg(short, long)]
    pub username: Option<String>,

    /// NYT account password (falls back to NYT_PASSWORD)
    #[arg(short, long)]
    pub password: Option<String>,

    /// First COMPLETION date to keep, inclusive (defaults to 30 days ago)
    #[arg(short = 's', long)]
    pub start_date: Option<NaiveDate>,

    /// Last COMPLETION date to keep, inclusive (defaults to today)
    #[arg(short = 'e', long)]
    pub end_date: Option<NaiveDate>,

    /// First PUBLICATION date to query (defaults to 2 years before
    /// start-date to capture late solves)
    #[arg(long)]
    pub pub_start_date: Option<NaiveDate>,

    /// Last PUBLICATION date to query (defaults to today)
    #[arg(long)]
    pub pub_end_date: Option<NaiveDate>,

    /// The CSV file to write to
    #[arg(short, long, default_value = "data.csv")]
    pub output_csv: PathBuf,

    /// The type of puzzle data to fetch
    #[arg(short = 't', long = "type", value_enum, default_value = "daily")]
    pub puzzle_type: PuzzleType,

    /// Optional TOML config overriding API endpoints and timeouts
    #[arg(long)]
    pub config: Option<PathBuf>,
}
