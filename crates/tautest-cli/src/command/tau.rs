use anyhow::ensure;
use tautest_core::{
    Strictness, critical_value,
    tau::{self, MIN_SAMPLE_LEN},
};

#[derive(Default, Debug, Clone, clap::Args)]
pub(crate) struct TauArg {
    /// Strictness level, 1 (lenient) to 5 (conservative)
    #[arg(long, default_value = "3")]
    strictness: Strictness,
    /// Smallest sample size to print
    #[arg(long, default_value_t = MIN_SAMPLE_LEN)]
    min_n: usize,
    /// Largest sample size to print
    #[arg(long, default_value_t = 30)]
    max_n: usize,
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct TauRow {
    n: usize,
    degrees_of_freedom: usize,
    t: f64,
    tau: f64,
}

fn tau_rows(strictness: Strictness, min_n: usize, max_n: usize) -> anyhow::Result<Vec<TauRow>> {
    (min_n..=max_n)
        .map(|n| -> anyhow::Result<TauRow> {
            let degrees_of_freedom = tau::degrees_of_freedom(n);
            Ok(TauRow {
                n,
                degrees_of_freedom,
                t: critical_value::lookup(strictness, degrees_of_freedom),
                tau: tau::calc_tau(n, strictness)?,
            })
        })
        .collect()
}

pub(crate) fn run(arg: &TauArg) -> anyhow::Result<()> {
    let TauArg {
        strictness,
        min_n,
        max_n,
    } = *arg;
    ensure!(
        min_n >= MIN_SAMPLE_LEN,
        "--min-n must be at least {MIN_SAMPLE_LEN}, got {min_n}"
    );
    ensure!(
        min_n <= max_n,
        "--min-n ({min_n}) must not exceed --max-n ({max_n})"
    );

    let rows = tau_rows(strictness, min_n, max_n)?;

    println!("Rejection thresholds (strictness {strictness})");
    println!("{:>8} {:>8} {:>8} {:>8}", "n", "dof", "t", "tau");
    for row in rows {
        println!(
            "{:>8} {:>8} {:>8.3} {:>8.4}",
            row.n, row.degrees_of_freedom, row.t, row.tau
        );
    }
    Ok(())
}
