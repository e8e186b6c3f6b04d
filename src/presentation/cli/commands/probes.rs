use colored::Colorize;

use crate::domain::ports::probe::Probe;

/// Lists the probes the current configuration would run, in run order.
pub fn run_probes(probes: &[Box<dyn Probe>]) {
    let title = "Configured probes";
    println!("{}", title.bold().cyan());
    println!("{}", "\u{2500}".repeat(title.chars().count()).cyan());

    if probes.is_empty() {
        println!("No probes configured.");
        return;
    }
    for probe in probes {
        println!("  \u{2022} {}", probe.name());
    }
}
