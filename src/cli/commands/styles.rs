//! Styles command handler.

use crate::assist::{Length, SUGGESTED_STYLES};
use crate::ui::Style;

/// Prints the suggested `--style` values and the accepted `--length` values.
pub fn list_styles() {
    println!("{}", Style::header("Suggested styles"));
    for (key, description) in SUGGESTED_STYLES {
        println!(
            "  {}  {}",
            Style::code(format!("{key:13}")),
            Style::secondary(description)
        );
    }
    println!(
        "  {}",
        Style::hint("Any other text is passed to the model as-is.")
    );

    println!();
    println!("{}", Style::header("Lengths"));
    for length in [Length::Short, Length::Medium, Length::Long] {
        println!("  {}", Style::code(length));
    }
}
