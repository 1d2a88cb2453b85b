//! Display Helpers
//!
//! Terminal output formatting and styling.

use aadhaar_qr::render::to_terminal_string;
use aadhaar_qr::IdentityFields;
use console::{style, Style};

/// Prints a success message.
pub fn success(msg: &str) {
    println!("{} {}", style("✓").green().bold(), msg);
}

/// Prints an error message.
pub fn error(msg: &str) {
    eprintln!("{} {}", style("✗").red().bold(), msg);
}

/// Prints a warning message.
pub fn warning(msg: &str) {
    println!("{} {}", style("⚠").yellow().bold(), msg);
}

/// Prints an info message.
pub fn info(msg: &str) {
    println!("{} {}", style("ℹ").blue().bold(), msg);
}

/// Displays identity fields in a formatted box.
pub fn display_fields(fields: &IdentityFields) {
    let width = 40;
    let label_style = Style::new().dim();

    println!("{}", "─".repeat(width));
    println!("  {}", style(&fields.name).bold().cyan());
    println!("{}", "─".repeat(width));

    let rows = [
        ("reference", &fields.reference_id),
        ("last four", &fields.last_four_digits),
        ("timestamp", &fields.timestamp),
        ("birth", &fields.date_of_birth),
        ("gender", &fields.gender),
        ("pincode", &fields.pincode),
        ("state", &fields.state),
    ];
    for (label, value) in rows {
        println!("  {:12} {}", label_style.apply_to(label), value);
    }

    println!("{}", "─".repeat(width));
}

/// Displays a QR code in the terminal using Unicode blocks.
pub fn display_qr_code(data: &str) {
    match to_terminal_string(data) {
        Ok(image) => println!("{}", image),
        Err(e) => error(&format!("Failed to generate QR code: {}", e)),
    }
}
