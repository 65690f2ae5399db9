// crates/cli/src/presentation.rs
use std::io::{self, Write};
use std::path::Path;
use wvoov_engine::RunEvent;
use wvoov_engine::stats::OovReport;

/// `0.8333…` → `83.33%`
#[must_use]
pub fn format_percent(fraction: f64) -> String {
    format!("{:.2}%", fraction * 100.0)
}

/// Print one step of a run as soon as it finishes. Results go to `out`,
/// failures to `err` after `out` has been flushed, so the two keep their order
/// when both end up on the same terminal.
///
/// # Errors
///
/// Returns any error from writing to `out` or `err`.
pub fn write_event<W: Write, E: Write>(
    out: &mut W,
    err: &mut E,
    event: &RunEvent<'_>,
) -> io::Result<()> {
    match *event {
        RunEvent::VocabularyLoaded(vocab) => {
            write_vocabulary(out, vocab.len(), vocab.source())?;
        }
        RunEvent::Report(report) => write_report(out, report)?,
        RunEvent::Failed { error, .. } => {
            out.flush()?;
            writeln!(err, "Error: {error}")?;
            return err.flush();
        }
    }
    out.flush()
}

/// # Errors
///
/// Returns any error from writing to `out`.
pub fn write_vocabulary<W: Write>(out: &mut W, size: usize, path: &Path) -> io::Result<()> {
    writeln!(out, "Read {size} words from {}", path.display())
}

/// One `token<TAB>pct (count/total)` line per top OOV word, then the overall rate.
///
/// # Errors
///
/// Returns any error from writing to `out`.
pub fn write_report<W: Write>(out: &mut W, report: &OovReport) -> io::Result<()> {
    let total = report.total_tokens;
    for entry in &report.top {
        writeln!(
            out,
            "{}\t{} ({}/{total})",
            entry.token,
            format_percent(report.share(entry)),
            entry.count
        )?;
    }
    writeln!(
        out,
        "OOV rate {} ({}/{total})",
        format_percent(report.oov_rate()),
        report.oov_total
    )
}
