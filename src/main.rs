mod config;
mod formatter;
mod github;
mod pipeline;

use crate::config::{DateWindow, ReportConfig, parse_date, today};
use crate::github::Client;
use clap::Parser;
use tracing_subscriber::EnvFilter;

#[derive(clap::Parser, Debug)]
#[command(version, about = "GitHub daily report (nippou) generator")]
struct Cli {
    #[arg(
        short,
        long,
        env = "GH_NIPPOU_USER",
        help = "GitHub username (defaults to the authenticated user)"
    )]
    user: Option<String>,
    #[arg(
        short,
        long,
        help = "GitHub token (defaults to GH_TOKEN or `gh auth token`)"
    )]
    token: Option<String>,
    #[arg(
        short,
        long,
        value_parser = parse_date,
        value_name = "YYYYMMDD",
        help = "Start date",
        default_value_t = today()
    )]
    since: chrono::NaiveDate,
    #[arg(
        short = 'e',
        long,
        value_parser = parse_date,
        value_name = "YYYYMMDD",
        help = "End date",
        default_value_t = today()
    )]
    until: chrono::NaiveDate,
    #[arg(
        long,
        value_name = "HOST",
        default_value = "github.com",
        help = "Target GitHub hostname",
        env = "GH_HOST"
    )]
    hostname: String,
    #[arg(long, help = "Log debug diagnostics to stderr")]
    debug: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let Cli {
        user,
        token,
        since,
        until,
        hostname,
        debug,
    } = Cli::parse();

    init_tracing(debug);

    let window = DateWindow::from_dates(since, until, &chrono::Local)?;
    let client = Client::new(&hostname, token)?;
    let user = match user {
        Some(user) => user,
        None => client.viewer_login().await?,
    };

    let config = ReportConfig {
        user,
        window,
        host: hostname,
    };
    tracing::debug!(?config, "starting report");

    let output = pipeline::generate_report(&client, &config).await?;

    print!("{output}");

    Ok(())
}

fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::new("gh_nippou=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}
