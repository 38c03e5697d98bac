//! Output-tree preparation: reset, template copy, README stitch, aux copies.
//!
//! This is the I/O boundary invoked once before page assembly. The output
//! tree is fully destroyed and rebuilt on every run; no state survives
//! between runs except the tree itself.

use crate::{Error, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Prepares the output tree from the template tree.
pub struct TreeSync {
    templates: PathBuf,
    output: PathBuf,
}

impl TreeSync {
    /// Create a sync over a template tree and an output tree.
    #[must_use]
    pub fn new(templates: &Path, output: &Path) -> Self {
        Self {
            templates: templates.to_path_buf(),
            output: output.to_path_buf(),
        }
    }

    /// Destroy the output tree and repopulate it with `.md` templates.
    ///
    /// Non-markdown files in the template tree are ignored; directory
    /// structure is mirrored.
    pub fn reset(&self) -> Result<()> {
        if self.output.exists() {
            info!(output = %self.output.display(), "cleaning up existing output directory");
            fs::remove_dir_all(&self.output)?;
        }
        fs::create_dir_all(&self.output)?;
        info!(templates = %self.templates.display(), "populating output directory with templates");
        self.copy_markdown(&self.templates, &self.output)
    }

    fn copy_markdown(&self, from: &Path, to: &Path) -> Result<()> {
        for entry in fs::read_dir(from)? {
            let entry = entry?;
            let path = entry.path();
            if entry.file_type()?.is_dir() {
                let nested = to.join(entry.file_name());
                fs::create_dir_all(&nested)?;
                self.copy_markdown(&path, &nested)?;
            } else if path.extension().is_some_and(|ext| ext == "md") {
                debug!(template = %path.display(), "copying template");
                fs::copy(&path, to.join(entry.file_name()))?;
            }
        }
        Ok(())
    }

    /// Stitch the README body into the index page.
    ///
    /// Extracts the substring starting at the first second-level heading and
    /// replaces the placeholder in the index template (read from the template
    /// tree, written to the output tree). A README without a `##` heading or
    /// an index template without the placeholder is a configuration error.
    pub fn stitch_readme(&self, readme: &Path, index_page: &str, placeholder: &str) -> Result<()> {
        let readme_text = fs::read_to_string(readme)?;
        let Some(start) = readme_text.find("##") else {
            return Err(Error::Config(format!(
                "README '{}' has no second-level heading to stitch from",
                readme.display()
            )));
        };

        let template_path = self.templates.join(index_page);
        let template = fs::read_to_string(&template_path)?;
        if !template.contains(placeholder) {
            return Err(Error::Config(format!(
                "index template '{}' is missing the {placeholder} tag",
                template_path.display()
            )));
        }

        let index = template.replacen(placeholder, &readme_text[start..], 1);
        let out = self.output.join(index_page);
        if let Some(parent) = out.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&out, index)?;
        info!(index = %out.display(), "stitched README into index page");
        Ok(())
    }

    /// Copy an auxiliary file verbatim into the output tree.
    pub fn copy_auxiliary(&self, src: &Path, dest: &str) -> Result<()> {
        let out = self.output.join(dest);
        if let Some(parent) = out.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::copy(src, &out)?;
        debug!(src = %src.display(), dest = %out.display(), "copied auxiliary file");
        Ok(())
    }
}
