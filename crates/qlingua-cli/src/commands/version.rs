//! Version command implementation.

use console::style;

/// Execute the version command.
pub fn execute() {
    let version = env!("CARGO_PKG_VERSION");

    println!(
        "{} {} - quantum circuit interchange",
        style("qlingua").cyan().bold(),
        style(format!("v{version}")).yellow()
    );
    println!();
    println!("Components:");
    println!("  qlingua-token     Gate-token grammar and parser");
    println!("  qlingua-convert   Adapter contract");
    println!("  qlingua-sim       Statevector engine");
    println!("  qlingua-adapter-* moment, register and timed toolkit adapters");
    println!("  qlingua-cli       Command-line interface");
    println!();
    println!("License:    {}", style("Apache-2.0").dim());
}
