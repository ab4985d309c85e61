use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing::{error, info};

use matchlog::config::Config;
use matchlog::error::AppError;
use matchlog::riot::types::MatchType;
use matchlog::riot::{Region, RiotClient};
use matchlog::window::{self, YearMonth};
use matchlog::{export, history, logging};

#[derive(Parser)]
#[command(name = "matchlog")]
#[command(about = "Export a player's League of Legends match history to a spreadsheet")]
struct Cli {
    /// Riot ID game name
    #[arg(long)]
    name: String,

    /// Riot ID tag line (the part after #)
    #[arg(long)]
    tag: String,

    /// Regional routing value (americas, asia, europe, sea)
    #[arg(long, default_value = "europe")]
    region: Region,

    /// First scanned month, inclusive (YYYY-MM)
    #[arg(long, default_value = "2021-01")]
    from: YearMonth,

    /// End of the scanned range, exclusive (YYYY-MM)
    #[arg(long, default_value = "2024-07")]
    until: YearMonth,

    /// Match type filter (ranked, normal, tourney, tutorial)
    #[arg(long, default_value = "ranked")]
    queue: MatchType,

    /// Maximum ids requested per month window
    #[arg(long, default_value_t = 100)]
    count: u32,

    /// Output workbook path
    #[arg(long, default_value = "matches.xlsx")]
    output: PathBuf,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<(), AppError> {
    if cli.from >= cli.until {
        return Err(AppError::Config(format!(
            "--from {} must be before --until {}",
            cli.from, cli.until
        )));
    }

    let config = Config::from_env()?;
    let client = RiotClient::new(
        config.riot_api_key.clone(),
        cli.region,
        config.rate_limit_per_second,
        config.retry_policy(),
    );

    let account = client.get_account_by_riot_id(&cli.name, &cli.tag).await?;
    info!(puuid = %account.puuid, "account resolved for {}#{}", cli.name, cli.tag);

    let windows = window::month_windows(cli.from, cli.until);
    info!(
        windows = windows.len(),
        from = %cli.from,
        until = %cli.until,
        "scanning match history"
    );

    let ids = history::collect_match_ids(&client, &account.puuid, &windows, cli.queue, cli.count)
        .await?;
    let rows = history::collect_rows(&client, &account.puuid, &ids).await?;

    export::write_workbook(&cli.output, &rows)?;

    client.metrics.log_summary();
    info!(matches = ids.len(), rows = rows.len(), "done");
    Ok(())
}
