//! Report output in the selected format.

use anyhow::{Context, Result};
use check_names_core::{
    Aggregator, FileReport, Linter, ReportError, ReportSink, RunStats, SymbolDeclaration,
    TextSink,
};
use std::io::{self, Write};

use crate::OutputFormat;

/// Writes one line per finding, `<file>:<line>: [<tag>] <message>`.
pub struct CompactSink<W: Write> {
    out: W,
}

impl<W: Write> CompactSink<W> {
    /// Creates a sink writing to `out`.
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Returns the underlying writer.
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> ReportSink for CompactSink<W> {
    fn emit(&mut self, report: FileReport) -> Result<(), ReportError> {
        for finding in &report.findings {
            writeln!(self.out, "{finding}")?;
        }
        self.out.flush()?;
        Ok(())
    }
}

/// Lints `declarations` and prints the reports to stdout.
pub fn run(
    linter: &Linter,
    declarations: Vec<SymbolDeclaration>,
    format: OutputFormat,
) -> Result<()> {
    let stdout = io::stdout();
    match format {
        OutputFormat::Text => {
            drive(linter, declarations, TextSink::new(stdout.lock()))?;
        }
        OutputFormat::Compact => {
            drive(linter, declarations, CompactSink::new(stdout.lock()))?;
        }
        OutputFormat::Json => {
            let (reports, _) = drive(linter, declarations, Vec::new())?;
            let json = serde_json::to_string_pretty(&reports)?;
            println!("{json}");
        }
    }
    Ok(())
}

fn drive<S: ReportSink>(
    linter: &Linter,
    declarations: Vec<SymbolDeclaration>,
    sink: S,
) -> Result<(S, RunStats)> {
    let mut aggregator = Aggregator::new(sink);
    let stats = linter
        .run(declarations, &mut aggregator)
        .context("Failed to write report")?;
    tracing::debug!("Emitted {} file reports", aggregator.reports_emitted());
    let sink = aggregator.finish().context("Failed to write report")?;
    Ok((sink, stats))
}

#[cfg(test)]
mod tests {
    use super::*;
    use check_names_core::{Dictionary, EntityKind, Location, SpellChecker};
    use check_names_rules::default_classifier;

    fn linter() -> Linter {
        Linter::builder()
            .classifier(default_classifier().unwrap())
            .spell_checker(SpellChecker::new(Dictionary::from_words(["receive", "count"])))
            .build()
            .unwrap()
    }

    fn decls() -> Vec<SymbolDeclaration> {
        vec![
            SymbolDeclaration::new(EntityKind::Type, "bad_type", Location::new("src/a.h", 3)),
            SymbolDeclaration::new(
                EntityKind::Variable,
                "recieve_count",
                Location::new("src/b.cpp", 7),
            ),
            SymbolDeclaration::new(EntityKind::Variable, "clean", Location::new("src/c.cpp", 1)),
        ]
    }

    #[test]
    fn compact_lines() {
        let (sink, stats) = drive(&linter(), decls(), CompactSink::new(Vec::new())).unwrap();
        let text = String::from_utf8(sink.into_inner()).unwrap();
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("src/a.h:3: [CN005]"), "{}", lines[0]);
        assert!(lines[1].starts_with("src/b.cpp:7: [spelling]"), "{}", lines[1]);
        assert_eq!(stats.naming_violations, 1);
        assert_eq!(stats.spelling_mistakes, 1);
    }

    #[test]
    fn json_reports_keep_clean_files() {
        let (reports, _) = drive(&linter(), decls(), Vec::new()).unwrap();
        let json: serde_json::Value = serde_json::to_value(&reports).unwrap();
        let files: Vec<_> = json
            .as_array()
            .unwrap()
            .iter()
            .map(|r| r["file"].as_str().unwrap().to_string())
            .collect();
        assert_eq!(files, ["src/a.h", "src/b.cpp", "src/c.cpp"]);
        assert_eq!(json[0]["naming_violations"], 1);
        assert_eq!(json[1]["spelling_mistakes"], 1);
        assert_eq!(json[2]["findings"].as_array().unwrap().len(), 0);
    }
}
