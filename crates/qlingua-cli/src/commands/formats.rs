//! Formats command implementation.

use console::style;

use crate::format::Format;

/// Execute the formats command.
pub fn execute() {
    println!("{}", style("Circuit formats:").bold());
    println!();
    for format in Format::ALL {
        println!(
            "  {:<10} {:<5} {}",
            style(format.name()).cyan(),
            format.encoding(),
            style(format.description()).dim()
        );
    }
    println!();
    println!("Every conversion passes through the canonical form.");
}
