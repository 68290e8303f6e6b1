//! List rules command implementation.

use check_names_rules::BUILTIN_RULES;

/// Runs the list-rules command.
pub fn run() {
    println!("Built-in rules (first matching rule wins):\n");
    println!("{:<8} {:<22} {:<10} Description", "Code", "Name", "Reports");
    println!("{}", "-".repeat(80));

    for spec in BUILTIN_RULES {
        println!(
            "{:<8} {:<22} {:<10} {}",
            spec.code,
            spec.name,
            spec.reported_kind,
            spec.description
        );
        println!("{:<42} pattern: {}", "", spec.pattern);
    }

    println!("\nOverride a rule in check-names.toml by name or code, e.g.:");
    println!("  [rules.snake-case]");
    println!("  pattern = '^[a-z]+(_[a-z0-9]+)*$'");
    println!("  [rules.CN001]");
    println!("  enabled = false");
}
