//! `refgen build` - run the full generation pipeline.

use anyhow::{Context, Result};
use refgen_core::{generate, GeneratorConfig};
use std::path::Path;

pub fn execute(config_path: &Path) -> Result<()> {
    let config = GeneratorConfig::load(config_path)
        .with_context(|| format!("failed to load '{}'", config_path.display()))?;

    let summary = generate::run(&config).context("generation failed")?;

    println!(
        "Generated {} page(s) and copied {} auxiliary file(s) into {}",
        summary.pages,
        summary.copies,
        config.paths.output.display()
    );
    Ok(())
}
