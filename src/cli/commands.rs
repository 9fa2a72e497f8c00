//! Command implementations for the wordtally CLI.

use log::debug;

use crate::cli::args::*;
use crate::cli::output::*;
use crate::config::{AnalysisConfig, Decoding};
use crate::engine::WordFrequencyEngine;
use crate::error::Result;
use crate::report::ReportBuilder;

/// Execute a CLI command.
pub fn execute_command(args: WordTallyArgs) -> Result<()> {
    match &args.command {
        Command::Analyze(analyze_args) => analyze(analyze_args, &args),
        Command::Count(count_args) => count(count_args, &args),
    }
}

/// Load the configuration file named on the command line, or the defaults.
pub fn load_config(args: &WordTallyArgs) -> Result<AnalysisConfig> {
    match &args.config {
        Some(path) => {
            debug!("Loading configuration from {}", path.display());
            AnalysisConfig::from_file(path)
        }
        None => Ok(AnalysisConfig::default()),
    }
}

/// Overlay the `analyze` flags onto a base configuration.
pub fn apply_analyze_args(mut config: AnalysisConfig, args: &AnalyzeArgs) -> AnalysisConfig {
    if let Some(top) = args.top {
        config.top_k = top;
    }
    if let Some(tie_break) = args.tie_break {
        config.tie_break = tie_break.into();
    }
    if args.lossy {
        config.decoding = Decoding::Lossy;
    }
    if let Some(Some(path)) = &args.output {
        config.report_path = path.clone();
    }
    config
}

/// Analyze a file, show the summary, and optionally save the full report.
fn analyze(args: &AnalyzeArgs, cli_args: &WordTallyArgs) -> Result<()> {
    let config = apply_analyze_args(load_config(cli_args)?, args);
    let engine = WordFrequencyEngine::new(config)?;

    if cli_args.verbosity() > 1 {
        println!("Analyzing: {}", args.file.display());
    }

    let file = args.file.display().to_string();
    let result = engine.analyze_file(&args.file)?;
    output_analysis(&file, &result, cli_args)?;

    if args.output.is_some() {
        let report_path = &engine.config().report_path;
        // The summary is already on screen; a failed save only loses the file
        ReportBuilder::new(&result).write_to(report_path)?;
        if cli_args.output_format == OutputFormat::Human && cli_args.verbosity() > 0 {
            println!("Report saved successfully to: {}", report_path.display());
        }
    }

    Ok(())
}

/// Count raw words in a file.
fn count(args: &CountArgs, cli_args: &WordTallyArgs) -> Result<()> {
    let mut config = load_config(cli_args)?;
    if args.lossy {
        config.decoding = Decoding::Lossy;
    }
    let engine = WordFrequencyEngine::new(config)?;

    let words = engine.count_words(&args.file)?;

    output_count(
        &CountResult {
            file: args.file.display().to_string(),
            words,
        },
        cli_args,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ranking::TieBreak;
    use clap::Parser;
    use std::fs;
    use std::path::PathBuf;
    use tempfile::TempDir;

    fn analyze_args(argv: &[&str]) -> (WordTallyArgs, AnalyzeArgs) {
        let args = WordTallyArgs::try_parse_from(argv).unwrap();
        match args.command.clone() {
            Command::Analyze(analyze_args) => (args, analyze_args),
            _ => panic!("Expected Analyze command"),
        }
    }

    #[test]
    fn test_flags_override_config() {
        let (_, analyze) = analyze_args(&[
            "wordtally",
            "analyze",
            "a.txt",
            "--top",
            "3",
            "--tie-break",
            "alphabetical",
            "--lossy",
            "-o",
            "out.txt",
        ]);

        let config = apply_analyze_args(AnalysisConfig::default(), &analyze);

        assert_eq!(config.top_k, 3);
        assert_eq!(config.tie_break, TieBreak::Alphabetical);
        assert_eq!(config.decoding, Decoding::Lossy);
        assert_eq!(config.report_path, PathBuf::from("out.txt"));
    }

    #[test]
    fn test_bare_output_keeps_configured_path() {
        let (_, analyze) = analyze_args(&["wordtally", "analyze", "a.txt", "--output"]);
        let base = AnalysisConfig::default().with_report_path("custom.txt");

        let config = apply_analyze_args(base, &analyze);

        assert_eq!(config.report_path, PathBuf::from("custom.txt"));
    }

    #[test]
    fn test_analyze_writes_report() {
        let temp_dir = TempDir::new().unwrap();
        let input = temp_dir.path().join("input.txt");
        let report = temp_dir.path().join("report.txt");
        fs::write(&input, "alpha beta alpha").unwrap();

        let args = WordTallyArgs::try_parse_from([
            "wordtally",
            "-q",
            "analyze",
            input.to_str().unwrap(),
            "-o",
            report.to_str().unwrap(),
        ])
        .unwrap();

        execute_command(args).unwrap();

        let written = fs::read_to_string(&report).unwrap();
        assert!(written.contains("Total words: 3"));
        assert!(written.contains("alpha                :    2"));
    }

    #[test]
    fn test_analyze_missing_file_is_an_error() {
        let temp_dir = TempDir::new().unwrap();
        let input = temp_dir.path().join("missing.txt");

        let args =
            WordTallyArgs::try_parse_from(["wordtally", "-q", "analyze", input.to_str().unwrap()])
                .unwrap();

        assert!(execute_command(args).is_err());
    }
}
