//! Documentation-URL and source-URL derivation.
//!
//! Links are derived purely from a class's declaring-module path, so they only
//! make sense for classes inside the documented library's own namespace. A
//! foreign module is a configuration error, never a silent fallback: a wrong
//! namespace in the manifest would otherwise produce links into nowhere.

use crate::metadata::ClassMeta;
use crate::{Error, Result};
use serde::{Deserialize, Serialize};

/// URL derivation settings, from the `[links]` table of the configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LinkConfig {
    /// Root URL of the published documentation, e.g. `http://kipoi.org/docs/`.
    pub docs_root: String,
    /// Base URL for source files, e.g.
    /// `https://github.com/kipoi/kipoi/blob/master/`.
    pub repo_root: String,
    /// The documented library's namespace, e.g. `kipoi`.
    pub namespace: String,
    /// Suffix appended to module paths to obtain source file paths.
    #[serde(default = "default_source_suffix")]
    pub source_suffix: String,
}

fn default_source_suffix() -> String {
    ".py".to_string()
}

impl LinkConfig {
    /// Module path relative to the namespace, or a configuration error for a
    /// foreign class.
    fn stripped_module_path(&self, class: &ClassMeta) -> Result<String> {
        let prefix = format!("{}.", self.namespace);
        class.module.strip_prefix(&prefix).map_or_else(
            || {
                Err(Error::Config(format!(
                    "class '{}' is declared in module '{}' outside the '{}' namespace; \
                     cannot derive links",
                    class.name, class.module, self.namespace
                )))
            },
            |rest| Ok(rest.replace('.', "/")),
        )
    }

    /// Documentation URL for a class page anchor.
    ///
    /// The published docs tree is rooted at the namespace, so the namespace
    /// segment is stripped from the path.
    pub fn class_docs_link(&self, class: &ClassMeta) -> Result<String> {
        let path = self.stripped_module_path(class)?;
        Ok(format!(
            "{}{}#{}",
            self.docs_root,
            path,
            class.name.to_lowercase()
        ))
    }

    /// `[[source]](...)` markup fragment pointing at the class definition.
    ///
    /// Unlike the docs link, the source path keeps the namespace segment: in
    /// the repository the package directory is part of the file path.
    pub fn class_source_link(&self, class: &ClassMeta) -> Result<String> {
        self.stripped_module_path(class)?;
        let path = class.module.replace('.', "/");
        Ok(format!(
            "[[source]]({}{}{}#L{})",
            self.repo_root, path, self.source_suffix, class.line
        ))
    }
}
