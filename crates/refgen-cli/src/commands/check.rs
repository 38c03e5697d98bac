//! `refgen check` - validate configuration and templates without writing.

use anyhow::{Context, Result};
use refgen_core::{generate, GeneratorConfig};
use std::path::Path;

pub fn execute(config_path: &Path) -> Result<()> {
    let config = GeneratorConfig::load(config_path)
        .with_context(|| format!("failed to load '{}'", config_path.display()))?;

    let summary = generate::check(&config).context("validation failed")?;

    println!("OK: {} page(s) resolve and render cleanly", summary.pages);
    Ok(())
}
