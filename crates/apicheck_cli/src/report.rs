//! Terminal rendering of step results.

use apicheck_core::StepResult;
use chrono::Local;
use console::style;

/// `[HH:MM:SS] ✓ message`, green for passes and red for failures.
pub fn result_line(result: &StepResult, timestamp: &str) -> String {
    if result.success {
        style(format!("[{}] ✓ {}", timestamp, result.message))
            .green()
            .to_string()
    } else {
        style(format!("[{}] ✗ {}", timestamp, result.message))
            .red()
            .to_string()
    }
}

/// Print one result, followed by its error detail for failures.
pub fn print_result(result: &StepResult) {
    let timestamp = Local::now().format("%H:%M:%S").to_string();
    println!("{}", result_line(result, &timestamp));
    if !result.success {
        if let Some(detail) = &result.detail {
            println!("Error response: {}", detail);
        }
    }
}
