use crate::cli::io;
use crate::cli::output::section as output_section;
use crate::cli::registry::{CommandEntry, CommandRegistry};

const GUIDE: [&str; 6] = [
    "Pick the job type with `category <name>` to work on its own cost inputs.",
    "Use the timer to track working hours automatically.",
    "Enter your hourly rate with `set rate <amount>` to price the labor.",
    "`start` begins tracking time.",
    "`pause` holds the timer without losing the count.",
    "`stop` ends the run and adds the tracked time to the labor hours.",
];

pub fn print_overview(registry: &CommandRegistry) {
    output_section("Available commands");
    for entry in registry.entries() {
        io::print_info(format!("  {:<12} {}", entry.name, entry.description));
    }
    io::print_info("Use `help <command>` for details.");
}

pub fn print_command(entry: &CommandEntry) {
    output_section(format!("Help: {}", entry.name));
    io::print_info(format!("  Description: {}", entry.description));
    io::print_info(format!("  Usage: {}", entry.usage));
}

pub fn print_guide() {
    output_section("Guide");
    for (step, line) in GUIDE.iter().enumerate() {
        io::print_info(format!("  {}. {}", step + 1, line));
    }
}
