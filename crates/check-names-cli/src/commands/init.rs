//! Init command implementation.

use anyhow::{bail, Context, Result};
use std::path::Path;

use crate::config_resolver::PROJECT_CONFIG_NAMES;

const DEFAULT_CONFIG: &str = r#"# check-names configuration

[analyzer]
# Glob patterns matched against declaration files; matches are not checked
exclude = [
    "/usr/include/**",
    "/usr/lib/**",
]

[spelling]
enabled = true
# Whitespace-separated word list (overridden by --dict)
# dictionary = "words.txt"
# Tokens shorter than this are skipped
min_token_length = 4
# Identifiers shorter than this are not spell-checked
min_name_length = 4
# Suggestions at this distance or further are dropped
max_distance = 4

# Rules can be disabled or given a new pattern, by name or by code.
# A disabled rule still claims its declarations but accepts every name.

# [rules.const-case]
# pattern = '^k([A-Z]+[a-z]+)+$'

# [rules.snake-case]
# enabled = false
"#;

/// Runs the init command.
pub fn run(force: bool) -> Result<()> {
    let config_path = Path::new(PROJECT_CONFIG_NAMES[0]);
    write_config(config_path, force)?;

    println!("Created {}", config_path.display());
    println!("\nNext steps:");
    println!("  1. Edit {} to configure rules", config_path.display());
    println!("  2. Run: check-names <DUMP>... --dict=<PATH>");

    Ok(())
}

fn write_config(path: &Path, force: bool) -> Result<()> {
    if path.exists() && !force {
        bail!(
            "Configuration file already exists at {}. Use --force to overwrite.",
            path.display()
        );
    }

    std::fs::write(path, DEFAULT_CONFIG)
        .with_context(|| format!("Failed to write {}", path.display()))
}
