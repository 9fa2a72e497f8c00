//! Output formatting for CLI commands.

use serde::{Deserialize, Serialize};

use crate::cli::args::{OutputFormat, WordTallyArgs};
use crate::engine::AnalysisResult;
use crate::error::Result;
use crate::ranking::{RankedEntry, TieBreak};
use crate::report::{ReportBuilder, format_count};

/// One `(word, count)` pair of the full frequency listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordCount {
    pub word: String,
    pub count: usize,
}

/// Serializable form of an analysis.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisSummary {
    pub file: String,
    pub total_words: usize,
    pub unique_words: usize,
    pub top_k: usize,
    pub tie_break: TieBreak,
    pub top: Vec<RankedEntry>,
    pub frequencies: Vec<WordCount>,
}

impl AnalysisSummary {
    /// Build a summary of `result` for the source `file`.
    pub fn new(file: &str, result: &AnalysisResult) -> Self {
        AnalysisSummary {
            file: file.to_string(),
            total_words: result.total_words(),
            unique_words: result.unique_words(),
            top_k: result.top_k(),
            tie_break: result.tie_break(),
            top: result.top().entries().to_vec(),
            frequencies: result
                .full_listing()
                .into_iter()
                .map(|(word, count)| WordCount {
                    word: word.to_string(),
                    count,
                })
                .collect(),
        }
    }
}

/// Result structure for raw word counting.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CountResult {
    pub file: String,
    pub words: usize,
}

/// Output an analysis in the requested format.
pub fn output_analysis(file: &str, result: &AnalysisResult, args: &WordTallyArgs) -> Result<()> {
    match args.output_format {
        OutputFormat::Human => ReportBuilder::new(result).print(),
        OutputFormat::Json => output_json(&AnalysisSummary::new(file, result), args),
    }
}

/// Output a raw word count in the requested format.
pub fn output_count(count: &CountResult, args: &WordTallyArgs) -> Result<()> {
    match args.output_format {
        OutputFormat::Human => {
            if args.verbosity() > 0 {
                println!("Total words in '{}': {}", count.file, format_count(count.words));
            } else {
                println!("{}", count.words);
            }
            Ok(())
        }
        OutputFormat::Json => output_json(count, args),
    }
}

/// Output in JSON format.
fn output_json<T: Serialize>(result: &T, args: &WordTallyArgs) -> Result<()> {
    let json = if args.pretty {
        serde_json::to_string_pretty(result)?
    } else {
        serde_json::to_string(result)?
    };

    println!("{json}");
    Ok(())
}
