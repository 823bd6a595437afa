//! Stage listing command.

use anyhow::Result;
use apicheck_core::Stage;
use console::style;

/// Print the stages in execution order.
pub fn run() -> Result<()> {
    for (i, stage) in Stage::ALL.iter().enumerate() {
        println!(
            "{:>2}. {:<20} {}",
            i + 1,
            style(stage.name()).cyan(),
            stage.description()
        );
    }
    Ok(())
}
