use crate::application::session::MeetingSummary;
use crate::domain::money::{NOT_A_NUMBER, format_usd, format_usd_or_nan};
use crate::error::Result;
use crate::interfaces::csv::summary_writer::{SummaryWriter, TOTAL_LABEL};
use std::io::Write;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Table,
    Csv,
    Json,
}

const HEADERS: [&str; 3] = ["Name", "Salary", "Meeting Cost"];

fn push_line(out: &mut String, label: &str, cells: [&str; 3], widths: &[usize; 3]) {
    out.push_str(&format!(
        "  {:<4}{:<w0$}  {:>w1$}  {:>w2$}\n",
        label,
        cells[0],
        cells[1],
        cells[2],
        w0 = widths[0],
        w1 = widths[1],
        w2 = widths[2],
    ));
}

/// Renders the cost table as aligned text, with a duration line and totals.
pub fn render_table(summary: &MeetingSummary) -> String {
    let mut rows: Vec<[String; 3]> = summary
        .participants
        .iter()
        .map(|row| {
            [
                row.name.clone(),
                format_usd(row.salary),
                format_usd_or_nan(row.meeting_cost),
            ]
        })
        .collect();
    rows.push([
        TOTAL_LABEL.to_string(),
        format_usd_or_nan(summary.totals.salary),
        format_usd_or_nan(summary.totals.meeting_cost),
    ]);

    let mut widths = HEADERS.map(|h| h.chars().count());
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let duration = summary
        .duration
        .map(|minutes| minutes.normalize().to_string())
        .unwrap_or_else(|| NOT_A_NUMBER.to_string());

    let mut out = format!("Meeting Duration (minutes): {duration}\n");
    push_line(&mut out, "#", HEADERS, &widths);
    let total_index = rows.len() - 1;
    for (i, row) in rows.iter().enumerate() {
        let label = if i == total_index {
            String::new()
        } else {
            (i + 1).to_string()
        };
        let cells = [row[0].as_str(), row[1].as_str(), row[2].as_str()];
        push_line(&mut out, &label, cells, &widths);
    }
    out
}

/// Writes `summary` to `sink` in the requested format.
pub fn write_summary<W: Write>(mut sink: W, summary: &MeetingSummary, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Table => sink.write_all(render_table(summary).as_bytes())?,
        OutputFormat::Csv => SummaryWriter::new(sink).write_summary(summary)?,
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut sink, summary)?;
            writeln!(sink)?;
        }
    }
    Ok(())
}
