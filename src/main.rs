use clap::Parser;
use meeting_cost::application::session::{AddOutcome, MeetingSession};
use meeting_cost::domain::duration::DEFAULT_DURATION;
use meeting_cost::domain::ports::ParticipantStoreBox;
use meeting_cost::infrastructure::in_memory::InMemoryParticipantStore;
use meeting_cost::interfaces::csv::roster_reader::RosterReader;
use meeting_cost::interfaces::prompt;
use meeting_cost::interfaces::report::{OutputFormat, write_summary};
use meeting_cost::logging::init_cli_logger;
use miette::{IntoDiagnostic, Result};
use std::fs::File;
use std::io;
use std::path::PathBuf;
use tokio::io::BufReader;

#[derive(Parser)]
#[command(author, version, about = "Calculate the cost of a meeting that could have been an email.", long_about = None)]
struct Cli {
    /// Roster CSV file with `name,salary` columns (annual salaries)
    roster: Option<PathBuf>,

    /// Meeting duration in minutes
    #[arg(short, long, env = "MEETING_DURATION", default_value = DEFAULT_DURATION)]
    duration: String,

    /// Report format (in interactive mode, applies to the final report)
    #[arg(short, long, env = "MEETING_FORMAT", value_enum, default_value_t = OutputFormat::Table)]
    format: OutputFormat,

    /// Start the interactive prompt (default when no roster is given)
    #[arg(short, long)]
    interactive: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_cli_logger(cli.verbose);

    let store: ParticipantStoreBox = Box::new(InMemoryParticipantStore::new());
    let mut session = MeetingSession::new(store);
    session.set_duration(cli.duration);

    if let Some(path) = &cli.roster {
        let file = File::open(path).into_diagnostic()?;
        let reader = RosterReader::new(file);
        for (row, candidate) in reader.candidates().enumerate() {
            match candidate {
                Ok(candidate) => {
                    if let AddOutcome::Rejected(errors) = session.submit(candidate).await? {
                        tracing::warn!("Rejected roster row {}: {}", row + 1, errors);
                    }
                }
                Err(e) => {
                    tracing::error!("Error reading roster row {}: {}", row + 1, e);
                }
            }
        }
    }

    if cli.interactive || cli.roster.is_none() {
        let stdin = BufReader::new(tokio::io::stdin());
        prompt::run(&mut session, stdin, tokio::io::stdout(), cli.format).await?;
        return Ok(());
    }

    let summary = session.summary().await?;
    let stdout = io::stdout();
    write_summary(stdout.lock(), &summary, cli.format)?;

    Ok(())
}
