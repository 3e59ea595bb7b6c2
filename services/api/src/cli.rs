use crate::report::{run_assess, run_batch, AssessArgs, BatchArgs};
use crate::server;
use career_leap::error::AppError;
use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "Career Leap",
    about = "Score readiness to leave salaried work and compose tailored advice",
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
    /// Assess a single applicant profile
    Assess(AssessArgs),
    /// Assess every profile in a CSV file
    Batch(BatchArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Assess(args) => run_assess(args),
        Command::Batch(args) => run_batch(args),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_serve_without_subcommand() {
        let cli = Cli::try_parse_from(["career-leap-api"]).expect("parses");
        assert!(cli.command.is_none());
    }

    #[test]
    fn parses_assess_arguments() {
        let cli = Cli::try_parse_from([
            "career-leap-api",
            "assess",
            "--family",
            "妻と子1人",
            "--family-count",
            "3",
            "--age",
            "32",
            "--savings",
            "1000000",
            "--monthly-income",
            "300000",
            "--json",
        ])
        .expect("parses");

        match cli.command {
            Some(Command::Assess(args)) => {
                assert_eq!(args.family, "妻と子1人");
                assert_eq!(args.family_count, 3);
                assert_eq!(args.age, 32);
                assert!(!args.has_children);
                assert!(args.json);
            }
            other => panic!("expected assess command, got {other:?}"),
        }
    }
}
