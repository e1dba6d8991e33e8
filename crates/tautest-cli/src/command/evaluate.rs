use std::path::PathBuf;

use anyhow::Context;
use tautest_core::{Evaluation, Strictness, scan::ScanOutcome};
use tautest_frame::{Options, column::ColumnSelector};

use crate::util::{self, Output};

#[derive(Default, Debug, Clone, clap::Args)]
pub(crate) struct EvaluateArg {
    /// Path to the dataset JSON file (list, series, table, or rows); reads stdin if omitted
    input: Option<PathBuf>,
    /// Index of the column to evaluate (tables and headerless rows)
    #[arg(long)]
    column_index: Option<usize>,
    /// Name of the column to evaluate (tables only)
    #[arg(long)]
    column_name: Option<String>,
    /// Strictness level, 1 (lenient) to 5 (conservative)
    #[arg(long, default_value = "3")]
    strictness: Strictness,
    /// Treat the target values as already sorted ascending
    #[arg(long)]
    sorted: bool,
    /// Output file path
    #[arg(long)]
    output: Option<PathBuf>,
    /// Print each rejection step to stderr
    #[arg(long)]
    report: bool,
}

pub(crate) fn run(arg: &EvaluateArg) -> anyhow::Result<()> {
    let strictness = arg.strictness;
    let options = Options {
        selector: ColumnSelector {
            index: arg.column_index,
            name: arg.column_name.clone(),
        },
        strictness,
        is_sorted: arg.sorted,
    };

    eprintln!("Reading dataset...");
    let dataset = util::read_dataset(arg.input.as_deref())?;
    eprintln!("Loaded {} with {} values", dataset.kind(), dataset.len());

    eprintln!("Running Thompson tau test (strictness {strictness})...");
    let labeled = tautest_frame::evaluate_dataset(&dataset, &options)
        .context("Failed to evaluate dataset")?;
    let evaluation = labeled.evaluation();
    eprintln!(
        "Evaluated {} values, {} outliers",
        evaluation.len(),
        evaluation.outlier_count()
    );

    if arg.report {
        print_report(evaluation);
    }

    Output::save_json(&labeled, arg.output.clone())?;
    if let Some(path) = &arg.output {
        eprintln!("Labeled dataset saved to: {}", path.display());
    }

    Ok(())
}

fn print_report(evaluation: &Evaluation) {
    eprintln!();
    eprintln!("Rejections:");
    if evaluation.rejections().is_empty() {
        eprintln!("  (none)");
    }
    for (step, rejection) in evaluation.rejections().iter().enumerate() {
        eprintln!(
            "  #{:<3} index={:<6} value={:<12} end={:<5} n={:<6} delta={:.4} > tau={:.4}",
            step + 1,
            rejection.index,
            rejection.value,
            rejection.end,
            rejection.sample_len,
            rejection.delta,
            rejection.tau,
        );
    }

    match evaluation.stop() {
        ScanOutcome::Insufficient { len } => {
            eprintln!("Stopped: {len} values remain, too few to test");
        }
        ScanOutcome::Inlier(candidate) => {
            eprintln!(
                "Stopped: {} value {} within threshold (delta={:.4} <= tau={:.4})",
                candidate.end, candidate.value, candidate.delta, candidate.tau,
            );
        }
        ScanOutcome::Outlier(_) => unreachable!("the run only stops on a non-outlier"),
    }
}
