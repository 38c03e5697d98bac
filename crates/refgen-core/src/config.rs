//! Generator configuration loaded from `refgen.toml`.
//!
//! Everything the original generator kept as process-wide constants — the
//! exclusion set, documentation root URL, repository base URL, placeholder
//! token — is explicit configuration here so that runs are reproducible and
//! tests can substitute their own values.
//!
//! ## Example configuration
//!
//! ```toml
//! [paths]
//! templates = "templates"
//! output = "sources"
//! metadata = "library.json"
//! readme = "../README.md"
//!
//! [links]
//! docs_root = "http://kipoi.org/docs/"
//! repo_root = "https://github.com/kipoi/kipoi/blob/master/"
//! namespace = "kipoi"
//!
//! exclude = ["Optimizer", "Wrapper", "get", "serialize", "deserialize"]
//!
//! [[pages]]
//! page = "api/model.md"
//! functions = ["kipoi.model.get_model"]
//! classes = ["kipoi.model.KerasModel", "kipoi.model.SklearnModel"]
//!
//! [[pages]]
//! page = "api/losses.md"
//! module_functions = ["kipoi.losses"]
//!
//! [[copy]]
//! src = "../CONTRIBUTING.md"
//! dest = "contributing.md"
//! ```

use crate::links::LinkConfig;
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Declarative description of one output documentation page.
///
/// Explicit references are rendered in declared order; `module_classes` and
/// `module_functions` name modules whose public exports are scanned in bulk.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PageSpec {
    /// Output path of the page, relative to the output tree root.
    pub page: String,
    /// Qualified names of classes to document, in order.
    #[serde(default)]
    pub classes: Vec<String>,
    /// Qualified names of functions to document, in order.
    #[serde(default)]
    pub functions: Vec<String>,
    /// Modules whose public classes are collected in bulk.
    #[serde(default)]
    pub module_classes: Vec<String>,
    /// Modules whose public functions are collected in bulk.
    #[serde(default)]
    pub module_functions: Vec<String>,
}

/// One auxiliary file copied verbatim into the output tree.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CopySpec {
    /// Source file path.
    pub src: PathBuf,
    /// Destination path relative to the output tree root.
    pub dest: String,
}

/// Filesystem locations used by a generation run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PathsConfig {
    /// Template tree mirrored into the output tree before generation.
    pub templates: PathBuf,
    /// Output tree root; destroyed and rebuilt on every run.
    pub output: PathBuf,
    /// JSON metadata manifest of the documented library.
    pub metadata: PathBuf,
    /// README whose body (from the first `##` heading) is stitched into the
    /// index page. Stitching is skipped when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub readme: Option<PathBuf>,
}

/// Rendering knobs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderConfig {
    /// Marker string a template must contain exactly once.
    #[serde(default = "default_placeholder")]
    pub placeholder: String,
    /// Language tag on fenced signature snippets.
    #[serde(default = "default_snippet_language")]
    pub snippet_language: String,
    /// Index page path, relative to the output tree root.
    #[serde(default = "default_index_page")]
    pub index_page: String,
}

fn default_placeholder() -> String {
    "{{autogenerated}}".to_string()
}

fn default_snippet_language() -> String {
    "python".to_string()
}

fn default_index_page() -> String {
    "index.md".to_string()
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            placeholder: default_placeholder(),
            snippet_language: default_snippet_language(),
            index_page: default_index_page(),
        }
    }
}

/// Complete configuration of a generation run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratorConfig {
    /// Filesystem locations.
    pub paths: PathsConfig,
    /// URL derivation settings.
    pub links: LinkConfig,
    /// Rendering knobs.
    #[serde(default)]
    pub render: RenderConfig,
    /// Names excluded from module scans even when public.
    #[serde(default)]
    pub exclude: Vec<String>,
    /// Pages to generate, in order.
    #[serde(default)]
    pub pages: Vec<PageSpec>,
    /// Auxiliary files copied after generation.
    #[serde(default, rename = "copy")]
    pub copies: Vec<CopySpec>,
}

impl GeneratorConfig {
    /// Load configuration from a TOML file.
    ///
    /// Relative paths in the file resolve against the file's own directory,
    /// so a configuration can be invoked from anywhere.
    pub fn load(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path).map_err(|e| {
            Error::Config(format!("cannot read config '{}': {e}", path.display()))
        })?;
        let mut config: Self = toml::from_str(&raw)
            .map_err(|e| Error::Serialization(format!("{}: {e}", path.display())))?;

        if config.pages.is_empty() {
            return Err(Error::Config(format!(
                "'{}' declares no pages",
                path.display()
            )));
        }

        let base = path.parent().unwrap_or_else(|| Path::new("."));
        config.paths.templates = resolve(base, &config.paths.templates);
        config.paths.output = resolve(base, &config.paths.output);
        config.paths.metadata = resolve(base, &config.paths.metadata);
        config.paths.readme = config.paths.readme.as_ref().map(|p| resolve(base, p));
        for copy in &mut config.copies {
            copy.src = resolve(base, &copy.src);
        }
        Ok(config)
    }

    /// Whether a short name is excluded from module scans.
    #[must_use]
    pub fn is_excluded(&self, name: &str) -> bool {
        self.exclude.iter().any(|e| e == name)
    }
}

fn resolve(base: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        base.join(path)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use std::io::Write as _;

    const MINIMAL: &str = r#"
exclude = ["Optimizer"]

[paths]
templates = "templates"
output = "sources"
metadata = "library.json"

[links]
docs_root = "http://docs.example/"
repo_root = "http://repo.example/"
namespace = "lib"

[[pages]]
page = "api/model.md"
classes = ["lib.model.Model"]
"#;

    fn write_config(dir: &Path, contents: &str) -> PathBuf {
        let path = dir.join("refgen.toml");
        let mut file = fs::File::create(&path).unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        path
    }

    #[test]
    fn load_resolves_paths_against_config_dir() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_config(dir.path(), MINIMAL);
        let config = GeneratorConfig::load(&path).unwrap();

        assert_eq!(config.paths.templates, dir.path().join("templates"));
        assert_eq!(config.paths.metadata, dir.path().join("library.json"));
        assert!(config.paths.readme.is_none());
        assert_eq!(config.pages.len(), 1);
        assert_eq!(config.pages[0].page, "api/model.md");
    }

    #[test]
    fn render_defaults_apply() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_config(dir.path(), MINIMAL);
        let config = GeneratorConfig::load(&path).unwrap();

        assert_eq!(config.render.placeholder, "{{autogenerated}}");
        assert_eq!(config.render.snippet_language, "python");
        assert_eq!(config.render.index_page, "index.md");
        assert_eq!(config.links.source_suffix, ".py");
    }

    #[test]
    fn exclusion_lookup() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_config(dir.path(), MINIMAL);
        let config = GeneratorConfig::load(&path).unwrap();
        assert!(config.is_excluded("Optimizer"));
        assert!(!config.is_excluded("Model"));
    }

    #[test]
    fn config_without_pages_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let no_pages = MINIMAL.split("[[pages]]").next().unwrap();
        let path = write_config(dir.path(), no_pages);
        let err = GeneratorConfig::load(&path).unwrap_err();
        assert!(err.to_string().contains("declares no pages"));
    }

    #[test]
    fn malformed_toml_is_a_serialization_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_config(dir.path(), "[paths\n");
        let err = GeneratorConfig::load(&path).unwrap_err();
        assert_eq!(err.category(), "serialization");
    }
}
