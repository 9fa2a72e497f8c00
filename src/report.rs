//! Report rendering and persistence.
//!
//! A report has two forms sharing one layout:
//!
//! - the console report: banner, totals and the ranked top-K summary;
//! - the file report: the same sections under a "REPORT" banner, followed by
//!   the full word list sorted like the summary.
//!
//! File reports are written to a temporary file next to the destination and
//! renamed into place, so the destination either keeps its previous content
//! or holds the complete new report. A replaced file keeps its permission
//! bits; a new one gets the usual umask-derived mode.

use std::fmt::Write as _;
use std::fs;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use log::{debug, info};
use tempfile::{Builder, NamedTempFile};

use crate::engine::AnalysisResult;
use crate::error::{Result, WordTallyError};

const RULE_WIDTH: usize = 60;
const TOTAL_WORDS_LABEL: &str = "Total words: ";
const UNIQUE_WORDS_LABEL: &str = "Unique words: ";

/// Create the temporary report file in `dir`.
///
/// `NamedTempFile` defaults to 0600; on unix the file is requested as 0666
/// instead so the process umask decides the final mode, as for a plain create.
fn create_temp_report(dir: &Path) -> io::Result<NamedTempFile> {
    let mut builder = Builder::new();
    builder.prefix(".wordtally-report");
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        builder.permissions(fs::Permissions::from_mode(0o666));
    }
    builder.tempfile_in(dir)
}

/// Format `n` with comma thousands separators (`1234567` → `1,234,567`).
pub fn format_count(n: usize) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Recover `(total_words, unique_words)` from a rendered report.
pub fn parse_totals(report: &str) -> Result<(usize, usize)> {
    let find = |label: &str| -> Result<usize> {
        let line = report
            .lines()
            .find_map(|line| line.strip_prefix(label))
            .ok_or_else(|| WordTallyError::report(format!("missing '{}' line", label.trim())))?;
        line.trim()
            .replace(',', "")
            .parse::<usize>()
            .map_err(|e| WordTallyError::report(format!("invalid '{}' value: {e}", label.trim())))
    };

    Ok((find(TOTAL_WORDS_LABEL)?, find(UNIQUE_WORDS_LABEL)?))
}

/// Renders an [`AnalysisResult`] as text.
#[derive(Debug, Clone, Copy)]
pub struct ReportBuilder<'a> {
    result: &'a AnalysisResult,
}

impl<'a> ReportBuilder<'a> {
    /// Create a builder for `result`.
    pub fn new(result: &'a AnalysisResult) -> Self {
        ReportBuilder { result }
    }

    /// Render the console report.
    pub fn render_console(&self) -> String {
        let mut out = String::new();
        out.push('\n');
        self.write_banner(&mut out, "WORD FREQUENCY ANALYSIS");
        out.push('\n');
        self.write_totals(&mut out);
        out.push('\n');
        self.write_ranked(&mut out);
        out.push('\n');
        out
    }

    /// Render the file report: the console sections plus the full word list.
    pub fn render_file(&self) -> String {
        let mut out = String::new();
        self.write_banner(&mut out, "WORD FREQUENCY ANALYSIS REPORT");
        out.push('\n');
        self.write_totals(&mut out);
        out.push('\n');
        self.write_ranked(&mut out);
        out.push('\n');
        self.write_full_listing(&mut out);
        out
    }

    /// Print the console report to standard output.
    pub fn print(&self) -> Result<()> {
        let stdout = io::stdout();
        let mut handle = stdout.lock();
        handle.write_all(self.render_console().as_bytes())?;
        handle.flush()?;
        Ok(())
    }

    /// Write the file report to `path`, replacing any existing file.
    ///
    /// The parent directory must already exist.
    pub fn write_to<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let dir = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        let fail = |e: io::Error| {
            WordTallyError::report(format!("failed to write {}: {e}", path.display()))
        };

        let temp = create_temp_report(dir).map_err(fail)?;
        debug!("Writing report to temporary file {}", temp.path().display());

        let mut writer = BufWriter::new(temp);
        writer
            .write_all(self.render_file().as_bytes())
            .map_err(fail)?;
        let temp = writer.into_inner().map_err(|e| fail(e.into_error()))?;
        if let Ok(metadata) = fs::metadata(path) {
            temp.as_file()
                .set_permissions(metadata.permissions())
                .map_err(fail)?;
        }
        temp.as_file().sync_all().map_err(fail)?;
        temp.persist(path).map_err(|e| fail(e.error))?;

        info!("Report written to {}", path.display());
        Ok(())
    }

    fn write_banner(&self, out: &mut String, title: &str) {
        let rule = "=".repeat(RULE_WIDTH);
        let _ = writeln!(out, "{rule}");
        let _ = writeln!(out, "  {title}");
        let _ = writeln!(out, "{rule}");
    }

    fn write_totals(&self, out: &mut String) {
        let _ = writeln!(
            out,
            "{TOTAL_WORDS_LABEL}{}",
            format_count(self.result.total_words())
        );
        let _ = writeln!(
            out,
            "{UNIQUE_WORDS_LABEL}{}",
            format_count(self.result.unique_words())
        );
    }

    fn write_ranked(&self, out: &mut String) {
        let rule = "-".repeat(RULE_WIDTH);
        let _ = writeln!(out, "{rule}");
        let _ = writeln!(out, "Top {} Most Common Words:", self.result.top_k());
        let _ = writeln!(out, "{rule}");

        for entry in self.result.top() {
            let _ = writeln!(
                out,
                "  {:>2}. {:<15} : {:>4} times ({:>5.2}%)",
                entry.rank, entry.word, entry.count, entry.percentage
            );
        }
    }

    fn write_full_listing(&self, out: &mut String) {
        let rule = "=".repeat(RULE_WIDTH);
        let _ = writeln!(out, "{rule}");
        let _ = writeln!(out, "Full Word List (sorted by frequency):");
        let _ = writeln!(out, "{rule}");

        for (word, count) in self.result.full_listing() {
            let _ = writeln!(out, "{word:<20} : {count:>4}");
        }
    }
}
