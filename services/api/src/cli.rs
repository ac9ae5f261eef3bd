use crate::commands::{run_recommend, run_stats, RecommendArgs, StatsArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use scheme_assist::error::AppError;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "SchemeAssist AI",
    about = "Match applicant profiles to government welfare schemes from the command line",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Score one applicant profile against the catalog and print the ranked report
    Recommend(RecommendArgs),
    /// Print catalog-wide scheme statistics
    Stats(StatsArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
    /// Scheme catalog (JSON or CSV). Defaults to SCHEME_CATALOG_PATH, then the bundled sample.
    #[arg(long)]
    pub(crate) catalog: Option<PathBuf>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Recommend(args) => run_recommend(args),
        Command::Stats(args) => run_stats(args),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn defaults_to_serve_without_subcommand() {
        let cli = Cli::try_parse_from(["scheme-assist-api"]).expect("parses");
        assert!(cli.command.is_none());
    }

    #[test]
    fn parses_recommend_flags() {
        let cli = Cli::try_parse_from([
            "scheme-assist-api",
            "recommend",
            "--state",
            "All India",
            "--age",
            "40",
            "--income",
            "150000",
            "--category",
            "Women Welfare",
            "--gender",
            "female",
            "--today",
            "2026-10-15",
            "--markdown",
        ])
        .expect("parses");

        match cli.command {
            Some(Command::Recommend(args)) => {
                assert_eq!(args.state, "All India");
                assert_eq!(args.age, 40);
                assert_eq!(args.income, 150_000);
                assert_eq!(args.category, "Women Welfare");
                assert!(args.markdown);
                assert_eq!(args.today, NaiveDate::from_ymd_opt(2026, 10, 15));
                assert!(args.catalog.is_none());
            }
            other => panic!("expected recommend command, got {other:?}"),
        }
    }

    #[test]
    fn rejects_malformed_dates() {
        let result = Cli::try_parse_from([
            "scheme-assist-api",
            "recommend",
            "--state",
            "Kerala",
            "--age",
            "30",
            "--income",
            "1000",
            "--category",
            "Health",
            "--today",
            "tomorrow",
        ]);
        assert!(result.is_err());
    }
}
