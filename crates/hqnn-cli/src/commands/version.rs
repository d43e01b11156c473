//! Version command implementation.

use console::style;

/// Execute the version command.
pub fn execute() {
    let version = env!("CARGO_PKG_VERSION");

    println!(
        "{} {} - Hybrid quantum neural network circuit builder",
        style("HQNN").cyan().bold(),
        style(format!("v{version}")).yellow()
    );
    println!();
    println!("Components:");
    println!("  hqnn-ir     Circuit intermediate representation");
    println!("  hqnn-model  Layered QNN model construction");
    println!("  hqnn-data   CSV loading, scaling and splitting");
    println!("  hqnn-cli    Command-line interface");
    println!();
    println!("License: {}", style("Apache-2.0").dim());
}
