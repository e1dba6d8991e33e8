use clap::{Parser, Subcommand};

use self::{critical_value::CriticalValueArg, evaluate::EvaluateArg, tau::TauArg};

mod critical_value;
mod evaluate;
mod tau;

#[derive(Debug, Clone, Parser)]
#[command(author, version, about, long_about = None)]
pub struct CommandArgs {
    #[command(subcommand)]
    mode: Mode,
}

#[derive(Debug, Clone, Subcommand)]
enum Mode {
    /// Flag outliers in a JSON dataset
    Evaluate(#[clap(flatten)] EvaluateArg),
    /// Print rejection thresholds for a range of sample sizes
    Tau(#[clap(flatten)] TauArg),
    /// Print the Student-t critical value for some degrees of freedom
    CriticalValue(#[clap(flatten)] CriticalValueArg),
}

pub fn run() -> anyhow::Result<()> {
    let args = CommandArgs::parse();
    match args.mode {
        Mode::Evaluate(arg) => evaluate::run(&arg)?,
        Mode::Tau(arg) => tau::run(&arg)?,
        Mode::CriticalValue(arg) => critical_value::run(&arg),
    }
    Ok(())
}
