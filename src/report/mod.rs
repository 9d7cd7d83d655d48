//! Plain-text report: one line per throw, one per hammer, one grand total.
use std::io::{self, Write};
use std::time::Duration;

use crate::dispatch::DispatchOutcome;
use crate::error::HammerError;
use crate::hammer::{HammerResult, ThrowOutcome};
use crate::metrics::OverallResult;


const NANOS_PER_CENTISECOND: u128 = 10_000_000;
const HALF_CENTISECOND_NANOS: u128 = 5_000_000;

/// Seconds with two decimals, rounded half up.
#[must_use]
pub fn format_seconds(duration: Duration) -> String {
    let centis = duration
        .as_nanos()
        .saturating_add(HALF_CENTISECOND_NANOS)
        .checked_div(NANOS_PER_CENTISECOND)
        .unwrap_or(0);
    format!("{}.{:02}", centis / 100, centis % 100)
}

#[must_use]
pub fn throw_line(hammer_id: usize, outcome: &ThrowOutcome) -> String {
    let head = format!(
        "Hammer: {}, Throw:   {}, Elapsed Time: {}",
        hammer_id,
        outcome.throw_index(),
        format_seconds(outcome.elapsed())
    );
    match outcome.error() {
        None => head,
        Some(err) => format!("{}, FAILED: {}", head, err),
    }
}

#[must_use]
pub fn average_line(result: &HammerResult) -> String {
    format!(
        "Hammer: {}, AVERAGE   , Elapsed Time: {}",
        result.hammer_id(),
        format_seconds(result.average())
    )
}

#[must_use]
pub fn failed_hammer_line(failure: &HammerError) -> String {
    let reason = match failure {
        HammerError::AllThrowsFailed { throws, .. } => {
            format!("all {} throws failed", throws.len())
        }
        HammerError::Interrupted { throws, .. } => {
            format!("interrupted after {} throws", throws.len())
        }
        HammerError::Aborted { reason, .. } => format!("aborted ({})", reason),
    };
    format!(
        "Hammer: {}, AVERAGE   , FAILED: {}",
        failure.hammer_id(),
        reason
    )
}

#[must_use]
pub fn total_line(overall: &OverallResult<'_>) -> String {
    format!(
        "TOTAL AVERAGE ELAPSED TIME: {}",
        format_seconds(overall.overall_average())
    )
}

enum HammerEntry<'run> {
    Finished(&'run HammerResult),
    Failed(&'run HammerError),
}

impl HammerEntry<'_> {
    const fn hammer_id(&self) -> usize {
        match self {
            HammerEntry::Finished(result) => result.hammer_id(),
            HammerEntry::Failed(failure) => failure.hammer_id(),
        }
    }
}

/// Lines for every hammer in id order: its throws (with captured bodies),
/// then its average or failure line.
#[must_use]
pub fn hammer_lines(outcome: &DispatchOutcome) -> Vec<String> {
    let mut entries: Vec<HammerEntry<'_>> = outcome
        .successes
        .iter()
        .map(HammerEntry::Finished)
        .chain(outcome.failures.iter().map(HammerEntry::Failed))
        .collect();
    entries.sort_by_key(HammerEntry::hammer_id);

    let mut lines = Vec::new();
    for entry in entries {
        let (hammer_id, throws, closing) = match entry {
            HammerEntry::Finished(result) => {
                (result.hammer_id(), result.throws(), average_line(result))
            }
            HammerEntry::Failed(failure) => (
                failure.hammer_id(),
                failure.throws(),
                failed_hammer_line(failure),
            ),
        };
        for throw in throws {
            lines.push(throw_line(hammer_id, throw));
            if let Some(body) = throw.body() {
                lines.push(body.to_owned());
            }
        }
        lines.push(closing);
    }
    lines
}

/// Writes the per-hammer section of the report.
///
/// # Errors
///
/// Returns an error when writing to `out` fails.
pub fn write_hammers<W: Write>(out: &mut W, outcome: &DispatchOutcome) -> io::Result<()> {
    for line in hammer_lines(outcome) {
        writeln!(out, "{}", line)?;
    }
    out.flush()
}

/// Writes the grand total line.
///
/// # Errors
///
/// Returns an error when writing to `out` fails.
pub fn write_total<W: Write>(out: &mut W, overall: &OverallResult<'_>) -> io::Result<()> {
    writeln!(out, "{}", total_line(overall))?;
    out.flush()
}
