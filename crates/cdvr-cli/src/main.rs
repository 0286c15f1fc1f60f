//! `cdvr_find_pass` — find which pass triggered the recording of a program.

use std::process::ExitCode;

use clap::Parser;
use cdvr_core::{build_base_url, Criteria, DvrError, PassFinder, DEFAULT_HOST, DEFAULT_PORT};

mod report;

#[derive(Parser, Debug)]
#[command(
    name = "cdvr_find_pass",
    about = "Find which pass triggered the recording of a program.",
    after_help = "By default, use the URL http://127.0.0.1:8089 to query the Channels DVR server.",
    disable_version_flag = true
)]
struct Cli {
    /// Title of the program for which you want to find the pass
    #[arg(short = 't', long = "title", required_unless_present = "version")]
    title: Option<String>,

    /// For a series: episode number. Not required
    #[arg(short = 'e', long = "episode_number")]
    episode_number: Option<u32>,

    /// IP address of the Channels DVR server. Not required
    #[arg(short = 'i', long = "ip_address", default_value = DEFAULT_HOST)]
    ip_address: String,

    /// Port number of the Channels DVR server. Not required
    #[arg(short = 'p', long = "port_number", default_value_t = DEFAULT_PORT)]
    port_number: u16,

    /// For a series: the season number. Not required
    #[arg(short = 's', long = "season_number")]
    season_number: Option<u32>,

    /// Print the version number and exit the program
    #[arg(short = 'v', long = "version")]
    version: bool,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    if cli.version {
        println!("{}", env!("CARGO_PKG_VERSION"));
        return ExitCode::SUCCESS;
    }

    // Clap enforces --title whenever --version is absent.
    let Some(title) = cli.title else {
        return ExitCode::FAILURE;
    };

    let criteria = Criteria {
        title,
        season: cli.season_number,
        episode: cli.episode_number,
    };
    let base_url = build_base_url(&cli.ip_address, cli.port_number);

    match run(&base_url, &criteria).await {
        Ok(Some(rendered)) => {
            print!("{rendered}");
            ExitCode::SUCCESS
        }
        Ok(None) => {
            println!("no matching recording found");
            ExitCode::FAILURE
        }
        Err(err) => {
            eprintln!("{}", describe_error(&err));
            ExitCode::FAILURE
        }
    }
}

/// Run the lookup and render the matches, or return `None` on a miss.
async fn run(base_url: &str, criteria: &Criteria) -> cdvr_core::Result<Option<String>> {
    let finder = PassFinder::new(base_url)?;

    println!();
    println!("Using Channels DVR server located at: {}.", base_url);
    println!();
    println!("Looking for matches...");
    println!();

    let matches = finder.find(criteria).await?;
    if matches.is_empty() {
        return Ok(None);
    }

    Ok(Some(report::render(&matches)))
}

/// User-facing error text, prefixed so a connection failure reads
/// differently from a bad response or a plain miss.
fn describe_error(err: &DvrError) -> String {
    match err {
        DvrError::Connection(_) => format!("connection error: {err}"),
        DvrError::Status { .. } | DvrError::Shape { .. } => format!("response error: {err}"),
        DvrError::InvalidQuery(_) => err.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parses_all_flags() {
        let cli = Cli::parse_from([
            "cdvr_find_pass",
            "-t",
            "Nature",
            "-e",
            "3",
            "-s",
            "2",
            "-i",
            "192.168.1.50",
            "-p",
            "8189",
        ]);
        assert_eq!(cli.title.as_deref(), Some("Nature"));
        assert_eq!(cli.episode_number, Some(3));
        assert_eq!(cli.season_number, Some(2));
        assert_eq!(cli.ip_address, "192.168.1.50");
        assert_eq!(cli.port_number, 8189);
    }

    #[test]
    fn test_cli_defaults() {
        let cli = Cli::parse_from(["cdvr_find_pass", "--title", "Nature"]);
        assert_eq!(cli.ip_address, DEFAULT_HOST);
        assert_eq!(cli.port_number, DEFAULT_PORT);
        assert_eq!(cli.episode_number, None);
        assert_eq!(cli.season_number, None);
    }

    #[test]
    fn test_cli_requires_title_without_version() {
        assert!(Cli::try_parse_from(["cdvr_find_pass"]).is_err());
        assert!(Cli::try_parse_from(["cdvr_find_pass", "-v"]).is_ok());
    }

    #[test]
    fn test_describe_error_prefixes() {
        let err = DvrError::Shape {
            url: "http://127.0.0.1:8089/dvr/files".to_string(),
            detail: "expected a list".to_string(),
        };
        assert!(describe_error(&err).starts_with("response error:"));

        let err = DvrError::InvalidQuery("title cannot be empty".to_string());
        assert_eq!(describe_error(&err), "invalid query: title cannot be empty");
    }
}
