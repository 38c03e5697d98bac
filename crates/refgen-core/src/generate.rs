//! The full generation pipeline: tree sync, README stitch, page assembly.
//!
//! Runs are all-or-nothing: the first fatal error aborts with no attempt to
//! salvage a partial output tree.

use crate::assembler::PageAssembler;
use crate::config::GeneratorConfig;
use crate::metadata::Library;
use crate::tree::TreeSync;
use crate::Result;
use tracing::info;

/// Counts reported by a completed run.
#[derive(Debug, Clone, Copy, Default)]
pub struct Summary {
    /// Pages written.
    pub pages: usize,
    /// Auxiliary files copied.
    pub copies: usize,
}

/// Run the complete pipeline described by a configuration.
///
/// Order matches the documented control flow: tree sync prepares the output
/// tree, the README is stitched into the index page, every page specification
/// is assembled, then auxiliary files are copied.
pub fn run(config: &GeneratorConfig) -> Result<Summary> {
    let library = Library::load(&config.paths.metadata)?;
    let sync = TreeSync::new(&config.paths.templates, &config.paths.output);

    sync.reset()?;
    if let Some(readme) = &config.paths.readme {
        sync.stitch_readme(readme, &config.render.index_page, &config.render.placeholder)?;
    }

    info!("starting page generation");
    let assembler = PageAssembler::new(&library, config);
    for page in &config.pages {
        assembler.assemble(page)?;
    }
    for copy in &config.copies {
        sync.copy_auxiliary(&copy.src, &copy.dest)?;
    }

    Ok(Summary {
        pages: config.pages.len(),
        copies: config.copies.len(),
    })
}

/// Validate a configuration without touching the output tree.
///
/// Resolves and renders every page and verifies the placeholder contract
/// against the template tree.
pub fn check(config: &GeneratorConfig) -> Result<Summary> {
    let library = Library::load(&config.paths.metadata)?;
    let assembler = PageAssembler::new(&library, config);
    for page in &config.pages {
        assembler.check(page, &config.paths.templates)?;
    }
    Ok(Summary {
        pages: config.pages.len(),
        copies: 0,
    })
}
