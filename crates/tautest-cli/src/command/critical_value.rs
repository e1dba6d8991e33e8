use tautest_core::Strictness;

#[derive(Default, Debug, Clone, clap::Args)]
pub(crate) struct CriticalValueArg {
    /// Degrees of freedom (sample size minus two)
    #[arg(long)]
    dof: usize,
    /// Strictness level, 1 (lenient) to 5 (conservative)
    #[arg(long, default_value = "3")]
    strictness: Strictness,
}

pub(crate) fn run(arg: &CriticalValueArg) {
    let table = arg.strictness.critical_values();
    let value = table.lookup(arg.dof);
    if arg.dof > table.max_degrees_of_freedom() {
        eprintln!(
            "dof {} is past the last tabulated row ({}), using the normal limit",
            arg.dof,
            table.max_degrees_of_freedom()
        );
    }
    println!("{value}");
}
