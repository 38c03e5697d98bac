//! Page assembly: entity resolution, block concatenation, template merge.
//!
//! Each page moves through collect → render → merge → write. Collection
//! resolves the page's explicit references in declared order, then appends
//! module scans. Rendering produces one markdown block per entity. Merging
//! either replaces the placeholder token in an existing template or starts a
//! fresh page, and writing creates any missing intermediate directories.
//!
//! A page that resolves to zero entities aborts the run: an empty page would
//! silently mask a configuration mistake, and a documentation build is
//! meaningless if incomplete.

use crate::config::{GeneratorConfig, PageSpec};
use crate::metadata::{split_qualified, ClassMeta, FunctionMeta, Library};
use crate::render::{render_class, render_function};
use crate::{Error, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Separator inserted between entity blocks on a page.
const BLOCK_SEPARATOR: &str = "\n----\n\n";

/// Assembles documentation pages from page specifications.
pub struct PageAssembler<'a> {
    library: &'a Library,
    config: &'a GeneratorConfig,
}

impl<'a> PageAssembler<'a> {
    /// Create an assembler over a metadata library and run configuration.
    #[must_use]
    pub const fn new(library: &'a Library, config: &'a GeneratorConfig) -> Self {
        Self { library, config }
    }

    /// Render and write one page, returning the output path.
    pub fn assemble(&self, spec: &PageSpec) -> Result<PathBuf> {
        let body = self.render_page(spec)?;
        let path = self.config.paths.output.join(&spec.page);

        let merged = if path.exists() {
            let template = fs::read_to_string(&path)?;
            let merged = merge_template(
                &template,
                &self.config.render.placeholder,
                &body,
                &spec.page,
            )?;
            info!(page = %spec.page, "inserting generated content into template");
            merged
        } else {
            info!(page = %spec.page, "creating new page with generated content");
            body
        };

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, merged)?;
        Ok(path)
    }

    /// Validate a page without writing anything.
    ///
    /// Resolves and renders every entity and, when a template exists for the
    /// page under `template_root`, verifies the placeholder contract.
    pub fn check(&self, spec: &PageSpec, template_root: &Path) -> Result<()> {
        let body = self.render_page(spec)?;
        let path = template_root.join(&spec.page);
        if path.exists() {
            let template = fs::read_to_string(&path)?;
            merge_template(
                &template,
                &self.config.render.placeholder,
                &body,
                &spec.page,
            )?;
        }
        Ok(())
    }

    /// Render the concatenated blocks for a page.
    ///
    /// Classes render before functions, matching the declared order within
    /// each list; blocks are separated by a horizontal rule.
    pub fn render_page(&self, spec: &PageSpec) -> Result<String> {
        let mut blocks: Vec<String> = Vec::new();

        for class in self.collect_classes(spec)? {
            let block = render_class(&self.config.links, class)?;
            blocks.push(block.to_markdown(&self.config.render.snippet_language));
        }
        for function in self.collect_functions(spec)? {
            let block = render_function(function)?;
            blocks.push(block.to_markdown(&self.config.render.snippet_language));
        }

        if blocks.is_empty() {
            return Err(Error::Config(format!(
                "found no content for page '{}'",
                spec.page
            )));
        }
        Ok(blocks.join(BLOCK_SEPARATOR))
    }

    fn collect_classes(&self, spec: &PageSpec) -> Result<Vec<&'a ClassMeta>> {
        let mut classes: Vec<&ClassMeta> = Vec::new();
        for reference in &spec.classes {
            classes.push(self.library.class(reference)?);
        }
        for module in &spec.module_classes {
            classes.extend(self.scan_module(module, ScanKind::Classes)?.classes);
        }
        Ok(classes)
    }

    fn collect_functions(&self, spec: &PageSpec) -> Result<Vec<&'a FunctionMeta>> {
        let mut functions: Vec<&FunctionMeta> = Vec::new();
        for reference in &spec.functions {
            functions.push(self.library.function(reference)?);
        }
        for module in &spec.module_functions {
            functions.extend(self.scan_module(module, ScanKind::Functions)?.functions);
        }
        Ok(functions)
    }

    /// Scan a module's exports for public entities declared in that module.
    ///
    /// Skips names starting with the reserved `_` marker and names in the
    /// exclusion set, drops re-exports (declaring module differs), dedups,
    /// and sorts by name so ordering is deterministic across runs.
    fn scan_module(&self, module: &str, kind: ScanKind) -> Result<Scan<'a>> {
        let meta = self.library.module(module)?;
        let mut scan = Scan::default();
        for export in &meta.exports {
            let (_, name) = split_qualified(export);
            if name.starts_with('_') || self.config.is_excluded(name) {
                debug!(module, name, "skipping excluded export");
                continue;
            }
            match kind {
                ScanKind::Classes if self.library.is_class(export) => {
                    let class = self.library.class(export)?;
                    if class.module == module
                        && !scan.classes.iter().any(|c| c.qualified() == *export)
                    {
                        scan.classes.push(class);
                    }
                },
                ScanKind::Functions if self.library.is_function(export) => {
                    let function = self.library.function(export)?;
                    if function.module == module
                        && !scan.functions.iter().any(|f| f.qualified() == *export)
                    {
                        scan.functions.push(function);
                    }
                },
                _ => {},
            }
        }
        scan.classes.sort_by(|a, b| a.name.cmp(&b.name));
        scan.functions.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(scan)
    }
}

#[derive(Clone, Copy)]
enum ScanKind {
    Classes,
    Functions,
}

#[derive(Default)]
struct Scan<'a> {
    classes: Vec<&'a ClassMeta>,
    functions: Vec<&'a FunctionMeta>,
}

/// Replace the placeholder token in a template with generated content.
///
/// The template must contain the token exactly once; zero or multiple
/// occurrences are configuration errors naming the page. All other template
/// text is preserved verbatim.
pub fn merge_template(
    template: &str,
    placeholder: &str,
    content: &str,
    page: &str,
) -> Result<String> {
    match template.matches(placeholder).count() {
        1 => Ok(template.replacen(placeholder, content, 1)),
        0 => Err(Error::Config(format!(
            "template found for '{page}' but missing {placeholder} tag"
        ))),
        n => Err(Error::Config(format!(
            "template for '{page}' contains {n} {placeholder} tags, expected exactly one"
        ))),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::config::{PathsConfig, RenderConfig};
    use crate::links::LinkConfig;
    use crate::metadata::{LibraryMetadata, ModuleMeta, Param};
    use serde_json::json;
    use std::path::Path;

    fn class(name: &str, module: &str) -> ClassMeta {
        ClassMeta {
            name: name.to_string(),
            module: module.to_string(),
            doc: None,
            init: None,
            bases: vec![],
            members: vec![],
            line: 1,
        }
    }

    fn library() -> Library {
        Library::new(LibraryMetadata {
            classes: vec![
                class("Model", "lib.model"),
                class("Optimizer", "lib.model"),
                class("Zeta", "lib.model"),
                class("Alpha", "lib.model"),
                class("Foreign", "lib.other"),
            ],
            functions: vec![FunctionMeta {
                name: "f".to_string(),
                module: "lib.model".to_string(),
                params: vec![
                    Param {
                        name: "a".to_string(),
                        default: None,
                    },
                    Param {
                        name: "b".to_string(),
                        default: Some(json!(2)),
                    },
                ],
                doc: None,
            }],
            modules: vec![ModuleMeta {
                path: "lib.model".to_string(),
                exports: vec![
                    "lib.model.Zeta".to_string(),
                    "lib.model.Optimizer".to_string(),
                    "lib.model._Private".to_string(),
                    "lib.model.Alpha".to_string(),
                    "lib.other.Foreign".to_string(),
                    "lib.model.Alpha".to_string(),
                ],
            }],
        })
    }

    fn config(output: &Path) -> GeneratorConfig {
        GeneratorConfig {
            paths: PathsConfig {
                templates: output.join("templates"),
                output: output.to_path_buf(),
                metadata: output.join("library.json"),
                readme: None,
            },
            links: LinkConfig {
                docs_root: "http://docs.example/".to_string(),
                repo_root: "http://repo.example/".to_string(),
                namespace: "lib".to_string(),
                source_suffix: ".py".to_string(),
            },
            render: RenderConfig::default(),
            exclude: vec!["Optimizer".to_string()],
            pages: vec![],
            copies: vec![],
        }
    }

    fn page(name: &str) -> PageSpec {
        PageSpec {
            page: name.to_string(),
            ..PageSpec::default()
        }
    }

    #[test]
    fn function_page_renders_signature_without_source_link() {
        let lib = library();
        let dir = tempfile::tempdir().unwrap();
        let cfg = config(dir.path());
        let assembler = PageAssembler::new(&lib, &cfg);

        let mut spec = page("api/f.md");
        spec.functions = vec!["lib.model.f".to_string()];
        let body = assembler.render_page(&spec).unwrap();

        assert!(body.contains("f(a, b=2)"));
        assert!(!body.contains("[[source]]"));
    }

    #[test]
    fn empty_page_is_fatal_and_names_the_page() {
        let lib = library();
        let dir = tempfile::tempdir().unwrap();
        let cfg = config(dir.path());
        let assembler = PageAssembler::new(&lib, &cfg);

        let err = assembler.render_page(&page("api/empty.md")).unwrap_err();
        assert_eq!(err.category(), "config");
        assert!(err.to_string().contains("api/empty.md"));
    }

    #[test]
    fn module_scan_filters_excludes_and_sorts_by_name() {
        let lib = library();
        let dir = tempfile::tempdir().unwrap();
        let cfg = config(dir.path());
        let assembler = PageAssembler::new(&lib, &cfg);

        let mut spec = page("api/all.md");
        spec.module_classes = vec!["lib.model".to_string()];
        let body = assembler.render_page(&spec).unwrap();

        // Optimizer excluded, _Private skipped, Foreign is a re-export,
        // Alpha deduplicated; remaining classes in name order.
        assert!(!body.contains("Optimizer"));
        assert!(!body.contains("_Private"));
        assert!(!body.contains("Foreign"));
        assert_eq!(body.matches("### Alpha").count(), 1);
        let alpha = body.find("### Alpha").unwrap();
        let zeta = body.find("### Zeta").unwrap();
        assert!(alpha < zeta);
    }

    #[test]
    fn blocks_are_separated_by_horizontal_rules() {
        let lib = library();
        let dir = tempfile::tempdir().unwrap();
        let cfg = config(dir.path());
        let assembler = PageAssembler::new(&lib, &cfg);

        let mut spec = page("api/two.md");
        spec.classes = vec!["lib.model.Model".to_string()];
        spec.functions = vec!["lib.model.f".to_string()];
        let body = assembler.render_page(&spec).unwrap();
        assert_eq!(body.matches("\n----\n\n").count(), 1);
    }

    #[test]
    fn assemble_creates_fresh_page_with_parent_dirs() {
        let lib = library();
        let dir = tempfile::tempdir().unwrap();
        let cfg = config(dir.path());
        let assembler = PageAssembler::new(&lib, &cfg);

        let mut spec = page("api/deep/model.md");
        spec.classes = vec!["lib.model.Model".to_string()];
        let path = assembler.assemble(&spec).unwrap();

        let written = fs::read_to_string(path).unwrap();
        assert!(written.contains("### Model"));
    }

    #[test]
    fn assemble_merges_into_existing_template() {
        let lib = library();
        let dir = tempfile::tempdir().unwrap();
        let cfg = config(dir.path());
        let assembler = PageAssembler::new(&lib, &cfg);

        let page_path = dir.path().join("api/model.md");
        fs::create_dir_all(page_path.parent().unwrap()).unwrap();
        fs::write(&page_path, "# Models\n\n{{autogenerated}}\n\nFooter.\n").unwrap();

        let mut spec = page("api/model.md");
        spec.classes = vec!["lib.model.Model".to_string()];
        assembler.assemble(&spec).unwrap();

        let written = fs::read_to_string(&page_path).unwrap();
        assert!(written.starts_with("# Models\n\n"));
        assert!(written.contains("### Model"));
        assert!(written.ends_with("Footer.\n"));
        assert!(!written.contains("{{autogenerated}}"));
    }

    #[test]
    fn template_without_placeholder_is_fatal() {
        let lib = library();
        let dir = tempfile::tempdir().unwrap();
        let cfg = config(dir.path());
        let assembler = PageAssembler::new(&lib, &cfg);

        let page_path = dir.path().join("api/model.md");
        fs::create_dir_all(page_path.parent().unwrap()).unwrap();
        fs::write(&page_path, "# Models\n\nNo tag here.\n").unwrap();

        let mut spec = page("api/model.md");
        spec.classes = vec!["lib.model.Model".to_string()];
        let err = assembler.assemble(&spec).unwrap_err();
        assert!(err.to_string().contains("missing {{autogenerated}} tag"));
    }

    #[test]
    fn template_with_duplicate_placeholders_is_fatal() {
        let err = merge_template(
            "{{autogenerated}}\n{{autogenerated}}\n",
            "{{autogenerated}}",
            "body",
            "api/model.md",
        )
        .unwrap_err();
        assert!(err.to_string().contains("2"));
        assert!(err.to_string().contains("api/model.md"));
    }

    #[test]
    fn merge_preserves_all_other_template_text() {
        let merged = merge_template(
            "before {{autogenerated}} after",
            "{{autogenerated}}",
            "CONTENT",
            "p.md",
        )
        .unwrap();
        assert_eq!(merged, "before CONTENT after");
    }

    #[test]
    fn check_validates_without_writing() {
        let lib = library();
        let dir = tempfile::tempdir().unwrap();
        let cfg = config(dir.path());
        let assembler = PageAssembler::new(&lib, &cfg);

        let mut spec = page("api/fresh.md");
        spec.classes = vec!["lib.model.Model".to_string()];
        assembler.check(&spec, dir.path()).unwrap();
        assert!(!dir.path().join("api/fresh.md").exists());
    }

    #[test]
    fn unknown_reference_aborts_with_its_name() {
        let lib = library();
        let dir = tempfile::tempdir().unwrap();
        let cfg = config(dir.path());
        let assembler = PageAssembler::new(&lib, &cfg);

        let mut spec = page("api/bad.md");
        spec.classes = vec!["lib.model.Missing".to_string()];
        let err = assembler.render_page(&spec).unwrap_err();
        assert!(err.to_string().contains("lib.model.Missing"));
    }
}
