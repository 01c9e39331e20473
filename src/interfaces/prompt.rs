//! Line-oriented front end mirroring the calculator form.
//!
//! Each input line is one form interaction: typing into a field, pressing
//! "Add Participant", pressing "Remove" on a row, or looking at the table.

use crate::application::session::{AddOutcome, MeetingSession};
use crate::domain::validation::ParticipantCandidate;
use crate::error::Result;
use crate::interfaces::report::{OutputFormat, render_table, write_summary};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};

pub const HELP: &str = "\
Commands:
  duration <minutes>     set the meeting duration
  name <text>            type into the participant name field
  salary <amount>        type into the salary (per year) field
  add                    submit the participant form
  add <name>,<salary>    fill in both fields and submit
  remove <row>           remove the participant at a table row
  show                   print the cost table
  help                   show this message
  quit                   print the report and exit
";

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Duration(String),
    Name(String),
    Salary(String),
    Add,
    AddWith(ParticipantCandidate),
    Remove(String),
    Show,
    Help,
    Quit,
    Empty,
    Unknown(String),
}

impl Command {
    /// Parses one input line. Field text after the first space is kept
    /// verbatim so that names are not trimmed.
    pub fn parse(line: &str) -> Self {
        let line = line.trim_end_matches(['\r', '\n']);
        let (keyword, rest) = match line.trim_start().split_once(' ') {
            Some((keyword, rest)) => (keyword, Some(rest)),
            None => (line.trim(), None),
        };

        match (keyword.to_ascii_lowercase().as_str(), rest) {
            ("", _) => Command::Empty,
            ("duration", rest) => Command::Duration(rest.unwrap_or_default().to_string()),
            ("name", rest) => Command::Name(rest.unwrap_or_default().to_string()),
            ("salary", rest) => Command::Salary(rest.unwrap_or_default().to_string()),
            ("add", None) => Command::Add,
            ("add", Some(rest)) if rest.trim().is_empty() => Command::Add,
            ("add", Some(rest)) => {
                let candidate = match rest.rsplit_once(',') {
                    Some((name, salary)) => ParticipantCandidate::new(name.trim(), salary.trim()),
                    None => ParticipantCandidate {
                        name: Some(rest.trim().to_string()),
                        salary: None,
                    },
                };
                Command::AddWith(candidate)
            }
            ("remove", rest) => Command::Remove(rest.unwrap_or_default().trim().to_string()),
            ("show", _) => Command::Show,
            ("help", _) => Command::Help,
            ("quit" | "exit", _) => Command::Quit,
            _ => Command::Unknown(keyword.to_string()),
        }
    }
}

/// Drives `session` from `input` until `quit` or end of input, then prints the
/// final report in `format`.
pub async fn run<R, W>(
    session: &mut MeetingSession,
    input: R,
    mut output: W,
    format: OutputFormat,
) -> Result<()>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut lines = input.lines();
    output.write_all(HELP.as_bytes()).await?;

    while let Some(line) = lines.next_line().await? {
        let reply = match Command::parse(&line) {
            Command::Empty => continue,
            Command::Quit => break,
            Command::Help => HELP.to_string(),
            Command::Show => render_table(&session.summary().await?),
            Command::Duration(text) => {
                session.set_duration(text);
                format!("Meeting duration set to {} minutes\n", session.duration())
            }
            Command::Name(text) => {
                session.set_pending_name(text);
                String::new()
            }
            Command::Salary(text) => {
                session.set_pending_salary(text);
                String::new()
            }
            Command::Add => {
                let outcome = session.add_participant().await?;
                describe(session, outcome).await?
            }
            Command::AddWith(candidate) => {
                let outcome = session.submit(candidate).await?;
                describe(session, outcome).await?
            }
            Command::Remove(text) => match text.parse::<usize>() {
                Ok(row) if row >= 1 => match session.remove_participant(row - 1).await? {
                    Some(removed) => format!("Removed {}\n", removed.name()),
                    None => String::new(),
                },
                _ => format!("Not a row number: {text}\n"),
            },
            Command::Unknown(keyword) => format!("Unknown command: {keyword} (try 'help')\n"),
        };
        output.write_all(reply.as_bytes()).await?;
        output.flush().await?;
    }

    let mut report = Vec::new();
    write_summary(&mut report, &session.summary().await?, format)?;
    output.write_all(&report).await?;
    output.flush().await?;
    Ok(())
}

async fn describe(session: &MeetingSession, outcome: AddOutcome) -> Result<String> {
    Ok(match outcome {
        AddOutcome::Added(participant) => {
            let count = session.participant_count().await?;
            format!("Added {} ({count} in meeting)\n", participant.name())
        }
        AddOutcome::Rejected(errors) => errors
            .messages()
            .iter()
            .map(|message| format!("error: {message}\n"))
            .collect(),
    })
}
