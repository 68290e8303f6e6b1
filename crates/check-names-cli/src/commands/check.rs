//! Check command implementation.

use anyhow::{bail, Context, Result};
use check_names_core::{Config, Dictionary, Linter, SpellChecker};
use check_names_rules::classifier_from_config;

use crate::config_resolver::ConfigSource;
use crate::{provider, CheckArgs};

/// Builds the linter from the configuration and command-line overrides.
pub fn build_linter(config: &Config, args: &CheckArgs) -> Result<Linter> {
    let classifier = classifier_from_config(config).context("Failed to build rule table")?;
    let mut builder = Linter::builder().classifier(classifier).config(config);

    if config.spelling.enabled {
        let dictionary = match args.dict.as_ref().or(config.spelling.dictionary.as_ref()) {
            Some(path) => Dictionary::load_or_empty(path),
            None => Dictionary::new(),
        };
        tracing::debug!("Dictionary has {} words", dictionary.len());
        builder = builder.spell_checker(SpellChecker::from_config(dictionary, &config.spelling));
    }

    for pattern in &args.exclude {
        builder = builder.exclude(pattern.clone());
    }

    builder.build().context("Failed to build linter")
}

/// Runs the check command.
///
/// Findings never affect the exit code; only failing to load the
/// configuration or the declaration dumps does.
pub fn run(args: CheckArgs, source: &ConfigSource) -> Result<()> {
    if args.paths.is_empty() {
        bail!("No declaration dumps given");
    }

    let config = source.load()?;
    let declarations =
        provider::load_all(&args.paths).context("Failed to load declarations")?;
    let linter = build_linter(&config, &args)?;

    tracing::info!(
        "Checking {} declarations with {} rules",
        declarations.len(),
        linter.rule_count()
    );

    super::output::run(&linter, declarations, args.format)?;

    Ok(())
}
