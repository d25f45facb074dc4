use anyhow::Result;
use chrono::{Duration, Local};
use clap::Parser;
use tracing_subscriber::EnvFilter;
use xword_stats::cli::Cli;
use xword_stats::config::Config;
use xword_stats::nyt::rest::NytRest;
use xword_stats::nyt::{auth, PuzzleApi};
use xword_stats::stats::batching::plan_batches;
use xword_stats::stats::export;
use xword_stats::stats::filter::{filter_completed, CompletionWindow};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("xword_stats=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Cli::parse();

    // Load saved secrets from .env (real env vars take precedence)
    Config::load_env_file();

    let config = match &args.config {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };

    // Completion window: what we filter on
    let today = Local::now().date_naive();
    let completion_end = args.end_date.unwrap_or(today);
    let completion_start = args
        .start_date
        .unwrap_or_else(|| today - Duration::days(30));

    // Publication window: what we query. Defaults reach 2 years before the
    // completion start to catch puzzles published long ago but solved
    // recently (the API can only filter by publication date server-side).
    let pub_start = args
        .pub_start_date
        .unwrap_or_else(|| completion_start - Duration::days(730));
    let pub_end = args.pub_end_date.unwrap_or(today);

    let session_token = match Config::session_token() {
        Some(token) => {
            tracing::debug!("using session token from NYT_COOKIE");
            token
        }
        None => {
            let (username, password) = Config::credentials(args.username, args.password)?;
            println!("Logging in as {}", username);
            let client = reqwest::Client::new();
            auth::login(&client, &config.api.login_url, &username, &password).await?
        }
    };

    let windows = plan_batches(pub_start, pub_end);
    println!(
        "Querying {} puzzles published {} to {} in {} batches",
        args.puzzle_type.publish_type(),
        pub_start,
        pub_end,
        windows.len()
    );
    println!(
        "Filtering for puzzles completed {} to {}",
        completion_start, completion_end
    );

    let rest = NytRest::new(
        session_token,
        &config.api.base_url,
        std::time::Duration::from_millis(config.api.request_timeout_ms),
    );

    let mut overview = Vec::new();
    for (i, window) in windows.iter().enumerate() {
        println!(
            "  Batch {}/{}: {} to {}",
            i + 1,
            windows.len(),
            window.start,
            window.end
        );
        let batch = rest
            .fetch_overview(args.puzzle_type, window.start, window.end)
            .await?;
        tracing::debug!(batch = i + 1, count = batch.len(), "fetched overview batch");
        overview.extend(batch);
    }

    let solved_count = overview.iter().filter(|p| p.solved).count();
    println!(
        "Fetched {} puzzles, getting solve times for {} solved",
        overview.len(),
        solved_count
    );

    let window = CompletionWindow {
        start: completion_start,
        end: completion_end,
    };
    let survivors = filter_completed(&rest, overview, window, &Local).await?;

    export::write_csv(&args.output_csv, &survivors)?;
    println!(
        "{} completed puzzles written to {}",
        survivors.len(),
        args.output_csv.display()
    );

    Ok(())
}
