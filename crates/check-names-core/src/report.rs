//! Per-file grouping of findings and text rendering.
//!
//! The [`Aggregator`] groups findings by the file currently being processed
//! and hands a finished [`FileReport`] to a [`ReportSink`] whenever the file
//! changes. Grouping only looks at the previous file: if declarations
//! arrive as `A, B, A`, three reports are produced.

use crate::types::Finding;
use serde::Serialize;
use std::borrow::Cow;
use std::io;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Errors that can occur while emitting reports.
#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    /// IO error writing a report.
    #[error("Failed to write report: {0}")]
    Io(#[from] io::Error),
}

/// Returns the text after the last `/` of a path, or the whole path if it
/// has none. A trailing `/` gives an empty name.
#[must_use]
pub fn basename(path: &Path) -> Cow<'_, str> {
    match path.to_string_lossy() {
        Cow::Borrowed(s) => Cow::Borrowed(after_last_slash(s)),
        Cow::Owned(s) => Cow::Owned(after_last_slash(&s).to_string()),
    }
}

fn after_last_slash(path: &str) -> &str {
    path.rfind('/').map_or(path, |i| &path[i + 1..])
}

/// Findings collected for one contiguous run of a file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FileReport {
    /// File the findings were grouped under.
    pub file: PathBuf,
    /// Number of naming violations.
    pub naming_violations: usize,
    /// Number of spelling mistakes.
    pub spelling_mistakes: usize,
    /// Findings in the order they were recorded.
    pub findings: Vec<Finding>,
}

impl FileReport {
    /// Creates an empty report for a file.
    #[must_use]
    pub fn new(file: impl Into<PathBuf>) -> Self {
        Self {
            file: file.into(),
            ..Self::default()
        }
    }

    /// Appends a finding and updates the counters.
    pub fn push(&mut self, finding: Finding) {
        if finding.is_naming_violation() {
            self.naming_violations += 1;
        } else {
            self.spelling_mistakes += 1;
        }
        self.findings.push(finding);
    }

    /// Returns `true` if there are no findings.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.findings.is_empty()
    }

    /// Renders the report as text.
    ///
    /// The summary names the grouped file; each finding names the file it
    /// was declared in. Both use the file name without directories.
    #[must_use]
    pub fn render(&self) -> String {
        use std::fmt::Write;

        let mut out = String::new();
        let _ = writeln!(out, "===== Processing {} =====", basename(&self.file));
        let _ = writeln!(out, "Bad names found: {}", self.naming_violations);
        let _ = writeln!(out, "Possible mistakes: {}", self.spelling_mistakes);
        let _ = writeln!(out);

        for finding in &self.findings {
            let location = finding.location();
            match finding {
                Finding::NamingViolation(v) => {
                    let _ = writeln!(
                        out,
                        "Entity's name \"{}\" does not meet the requirements ({})",
                        v.name, v.kind
                    );
                }
                Finding::SpellingMistake(m) => {
                    let _ = writeln!(
                        out,
                        "Probably mistake in variable's \"{}\" name.",
                        m.entity_name
                    );
                    let _ = writeln!(
                        out,
                        "Consider using \"{}\" instead of \"{}\"",
                        m.suggested_word, m.wrong_token
                    );
                }
            }
            let _ = writeln!(
                out,
                "In {} at line {}",
                basename(&location.file),
                location.line
            );
            let _ = writeln!(out);
        }

        out
    }
}

/// Destination for finished file reports.
pub trait ReportSink {
    /// Receives one finished report.
    ///
    /// # Errors
    ///
    /// Returns an error if the report cannot be written.
    fn emit(&mut self, report: FileReport) -> Result<(), ReportError>;
}

impl ReportSink for Vec<FileReport> {
    fn emit(&mut self, report: FileReport) -> Result<(), ReportError> {
        self.push(report);
        Ok(())
    }
}

impl<S: ReportSink + ?Sized> ReportSink for Box<S> {
    fn emit(&mut self, report: FileReport) -> Result<(), ReportError> {
        (**self).emit(report)
    }
}

/// Writes reports as text.
#[derive(Debug)]
pub struct TextSink<W: io::Write> {
    out: W,
}

impl<W: io::Write> TextSink<W> {
    /// Creates a sink writing to `out`.
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Returns the underlying writer.
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: io::Write> ReportSink for TextSink<W> {
    fn emit(&mut self, report: FileReport) -> Result<(), ReportError> {
        self.out.write_all(report.render().as_bytes())?;
        self.out.flush()?;
        Ok(())
    }
}

/// Groups findings by file and flushes a report on every file change.
#[derive(Debug)]
pub struct Aggregator<S: ReportSink> {
    sink: S,
    current_file: Option<PathBuf>,
    pending: FileReport,
    emitted: usize,
}

impl<S: ReportSink> Aggregator<S> {
    /// Creates an aggregator with no current file.
    pub fn new(sink: S) -> Self {
        Self {
            sink,
            current_file: None,
            pending: FileReport::default(),
            emitted: 0,
        }
    }

    /// Returns the file currently being grouped.
    #[must_use]
    pub fn current_file(&self) -> Option<&Path> {
        self.current_file.as_deref()
    }

    /// Returns the number of reports emitted so far.
    #[must_use]
    pub fn reports_emitted(&self) -> usize {
        self.emitted
    }

    /// Notes that the next findings belong to `file`.
    ///
    /// Flushes the pending report first if `file` differs from the current
    /// file.
    ///
    /// # Errors
    ///
    /// Returns an error if the flushed report cannot be emitted.
    pub fn observe(&mut self, file: &Path) -> Result<(), ReportError> {
        match &self.current_file {
            Some(current) if current == file => return Ok(()),
            Some(_) => self.flush()?,
            None => {}
        }
        debug!("Grouping findings under {}", file.display());
        self.current_file = Some(file.to_path_buf());
        Ok(())
    }

    /// Records a finding for the current file.
    pub fn record(&mut self, finding: Finding) {
        self.pending.push(finding);
    }

    /// Emits the pending report and clears all state, including the
    /// current file. Does nothing if no file was observed and nothing was
    /// recorded.
    ///
    /// # Errors
    ///
    /// Returns an error if the report cannot be emitted.
    pub fn flush(&mut self) -> Result<(), ReportError> {
        let file = self.current_file.take();
        let mut report = std::mem::take(&mut self.pending);
        if file.is_none() && report.is_empty() {
            return Ok(());
        }
        report.file = file.unwrap_or_default();
        self.emitted += 1;
        self.sink.emit(report)
    }

    /// Flushes the last report and returns the sink.
    ///
    /// # Errors
    ///
    /// Returns an error if the last report cannot be emitted.
    pub fn finish(mut self) -> Result<S, ReportError> {
        self.flush()?;
        Ok(self.sink)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{EntityKind, Location, NamingViolation, SpellingMistake};

    fn violation(file: &str, name: &str, line: usize) -> Finding {
        NamingViolation::new(
            "CN003",
            "snake-case",
            EntityKind::Variable,
            name,
            Location::new(file, line),
        )
        .into()
    }

    fn mistake(file: &str, line: usize) -> Finding {
        SpellingMistake {
            entity_name: "recieve_count".to_string(),
            wrong_token: "recieve".to_string(),
            suggested_word: "receive".to_string(),
            distance: 2,
            location: Location::new(file, line),
        }
        .into()
    }

    #[test]
    fn same_file_is_grouped() {
        let mut agg = Aggregator::new(Vec::new());
        agg.observe(Path::new("a.cpp")).unwrap();
        agg.record(violation("a.cpp", "badName", 1));
        agg.observe(Path::new("a.cpp")).unwrap();
        agg.record(mistake("a.cpp", 2));
        let reports = agg.finish().unwrap();

        assert_eq!(reports.len(), 1);
        assert_eq!(reports[0].naming_violations, 1);
        assert_eq!(reports[0].spelling_mistakes, 1);
    }

    #[test]
    fn interleaved_files_are_not_merged() {
        let mut agg = Aggregator::new(Vec::new());
        for file in ["a.cpp", "b.cpp", "a.cpp"] {
            agg.observe(Path::new(file)).unwrap();
            agg.record(violation(file, "badName", 1));
        }
        assert_eq!(agg.reports_emitted(), 2);
        let reports = agg.finish().unwrap();

        let files: Vec<_> = reports.iter().map(|r| r.file.clone()).collect();
        assert_eq!(
            files,
            [
                PathBuf::from("a.cpp"),
                PathBuf::from("b.cpp"),
                PathBuf::from("a.cpp")
            ]
        );
        assert!(reports.iter().all(|r| r.findings.len() == 1));
    }

    #[test]
    fn clean_files_still_get_a_report() {
        let mut agg = Aggregator::new(Vec::new());
        agg.observe(Path::new("clean.cpp")).unwrap();
        agg.observe(Path::new("other.cpp")).unwrap();
        let reports = agg.finish().unwrap();
        assert_eq!(reports.len(), 2);
        assert!(reports[0].is_empty());
    }

    #[test]
    fn flush_clears_current_file() {
        let mut agg = Aggregator::new(Vec::new());
        agg.observe(Path::new("a.cpp")).unwrap();
        agg.flush().unwrap();
        assert!(agg.current_file().is_none());
        agg.flush().unwrap();
        assert_eq!(agg.finish().unwrap().len(), 1);
    }

    #[test]
    fn nothing_observed_emits_nothing() {
        let agg = Aggregator::new(Vec::new());
        assert!(agg.finish().unwrap().is_empty());
    }

    #[test]
    fn nothing_observed_prints_nothing() {
        let mut agg = Aggregator::new(TextSink::new(Vec::new()));
        agg.flush().unwrap();
        assert_eq!(agg.reports_emitted(), 0);
        let out = agg.finish().unwrap().into_inner();
        assert_eq!(String::from_utf8(out).unwrap(), "");
    }

    #[test]
    fn render_text_report() {
        let mut report = FileReport::new("/home/dev/project/src/main.cpp");
        report.push(violation("/home/dev/project/src/util.h", "badName", 7));
        report.push(mistake("/home/dev/project/src/main.cpp", 12));

        insta::assert_snapshot!(report.render(), @r###"
        ===== Processing main.cpp =====
        Bad names found: 1
        Possible mistakes: 1

        Entity's name "badName" does not meet the requirements (variable)
        In util.h at line 7

        Probably mistake in variable's "recieve_count" name.
        Consider using "receive" instead of "recieve"
        In main.cpp at line 12
        "###);
    }

    #[test]
    fn render_exact_layout() {
        let mut report = FileReport::new("dir/a.cpp");
        report.push(violation("dir/a.cpp", "X", 3));
        assert_eq!(
            report.render(),
            "===== Processing a.cpp =====\n\
             Bad names found: 1\n\
             Possible mistakes: 0\n\
             \n\
             Entity's name \"X\" does not meet the requirements (variable)\n\
             In a.cpp at line 3\n\
             \n"
        );
    }

    #[test]
    fn text_sink_writes_rendered_reports() {
        let mut agg = Aggregator::new(TextSink::new(Vec::new()));
        agg.observe(Path::new("x/one.cpp")).unwrap();
        agg.observe(Path::new("x/two.cpp")).unwrap();
        let out = agg.finish().unwrap().into_inner();
        let text = String::from_utf8(out).unwrap();
        assert!(text.starts_with("===== Processing one.cpp =====\n"));
        assert!(text.contains("===== Processing two.cpp =====\n"));
    }

    #[test]
    fn basename_strips_directories() {
        assert_eq!(basename(Path::new("/a/b/c.cpp")), "c.cpp");
        assert_eq!(basename(Path::new("c.cpp")), "c.cpp");
        assert_eq!(basename(Path::new("")), "");
    }

    #[test]
    fn basename_keeps_text_after_last_slash() {
        assert_eq!(basename(Path::new("dir/")), "");
        assert_eq!(basename(Path::new("a/b/.")), ".");
        assert_eq!(basename(Path::new("a/b/..")), "..");
    }
}
