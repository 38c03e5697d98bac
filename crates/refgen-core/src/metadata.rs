//! Metadata descriptors for the documented library.
//!
//! refgen never inspects live code. The documented library ships a JSON
//! manifest describing its public surface — one descriptor per class and
//! function, plus the export list of each module — and the generator works
//! entirely from those descriptors. The manifest is the "Library Metadata
//! Provider" boundary: anything that can emit this JSON can be documented.
//!
//! Qualified names are `module.Name` strings, e.g. `kipoi.model.KerasModel`.
//! Class bases reference other descriptors by qualified name; the universal
//! root type is spelled with the literal [`OBJECT_ROOT`] and never resolved.

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// Name of the universal base type, excluded from ancestor chains.
pub const OBJECT_ROOT: &str = "object";

/// A single parameter of a callable.
///
/// Parameters are ordered as declared. A parameter without a default is
/// required; required parameters must precede defaulted ones.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Param {
    /// Parameter name as declared.
    pub name: String,
    /// Default value, if any. Strings render single-quoted, booleans as
    /// `True`/`False`, null as `None`, numbers verbatim.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<serde_json::Value>,
}

/// Descriptor of a documented free function.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FunctionMeta {
    /// Function name.
    pub name: String,
    /// Declaring module path, e.g. `kipoi.model`.
    pub module: String,
    /// Ordered parameter list.
    #[serde(default)]
    pub params: Vec<Param>,
    /// Raw docstring text, absent when the function is undocumented.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub doc: Option<String>,
}

/// Descriptor of a documented class.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassMeta {
    /// Class name.
    pub name: String,
    /// Declaring module path.
    pub module: String,
    /// Raw docstring text.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub doc: Option<String>,
    /// Initializer parameter list including the implicit receiver.
    /// `None` means the class defines no explicit initializer and gets the
    /// degenerate `module.Name()` signature.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub init: Option<Vec<Param>>,
    /// Direct base classes by qualified name, or [`OBJECT_ROOT`].
    #[serde(default)]
    pub bases: Vec<String>,
    /// Attribute surface of the class, used for defining-class lookups.
    #[serde(default)]
    pub members: Vec<String>,
    /// Line in the declaring source file where the class is defined.
    #[serde(default)]
    pub line: u32,
}

impl FunctionMeta {
    /// Qualified `module.name` reference.
    #[must_use]
    pub fn qualified(&self) -> String {
        format!("{}.{}", self.module, self.name)
    }
}

impl ClassMeta {
    /// Qualified `module.Name` reference.
    #[must_use]
    pub fn qualified(&self) -> String {
        format!("{}.{}", self.module, self.name)
    }
}

/// Export list of a module.
///
/// Exports are qualified names and may re-export entities declared elsewhere;
/// module scans compare each entity's declaring module against the scanned
/// module to drop re-exports.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModuleMeta {
    /// Module path, e.g. `kipoi.model`.
    pub path: String,
    /// Qualified names exported by the module.
    #[serde(default)]
    pub exports: Vec<String>,
}

/// The complete metadata manifest of the documented library.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LibraryMetadata {
    /// All documented classes.
    #[serde(default)]
    pub classes: Vec<ClassMeta>,
    /// All documented functions.
    #[serde(default)]
    pub functions: Vec<FunctionMeta>,
    /// Module export lists available for bulk scans.
    #[serde(default)]
    pub modules: Vec<ModuleMeta>,
}

/// Indexed view over a [`LibraryMetadata`] manifest.
///
/// Built once per run; lookups are by qualified name and fail with
/// [`Error::NotFound`] naming the missing reference.
pub struct Library {
    classes: Vec<ClassMeta>,
    functions: Vec<FunctionMeta>,
    modules: Vec<ModuleMeta>,
    class_index: HashMap<String, usize>,
    function_index: HashMap<String, usize>,
    module_index: HashMap<String, usize>,
}

impl Library {
    /// Build the indexed view from a manifest.
    #[must_use]
    pub fn new(manifest: LibraryMetadata) -> Self {
        let class_index = manifest
            .classes
            .iter()
            .enumerate()
            .map(|(i, c)| (c.qualified(), i))
            .collect();
        let function_index = manifest
            .functions
            .iter()
            .enumerate()
            .map(|(i, f)| (f.qualified(), i))
            .collect();
        let module_index = manifest
            .modules
            .iter()
            .enumerate()
            .map(|(i, m)| (m.path.clone(), i))
            .collect();
        Self {
            classes: manifest.classes,
            functions: manifest.functions,
            modules: manifest.modules,
            class_index,
            function_index,
            module_index,
        }
    }

    /// Load and index a JSON manifest from disk.
    pub fn load(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)?;
        let manifest: LibraryMetadata = serde_json::from_str(&raw)
            .map_err(|e| Error::Serialization(format!("{}: {e}", path.display())))?;
        Ok(Self::new(manifest))
    }

    /// Look up a class by qualified name.
    pub fn class(&self, qualified: &str) -> Result<&ClassMeta> {
        self.class_index
            .get(qualified)
            .map(|&i| &self.classes[i])
            .ok_or_else(|| Error::NotFound(format!("class '{qualified}' is not in the manifest")))
    }

    /// Look up a function by qualified name.
    pub fn function(&self, qualified: &str) -> Result<&FunctionMeta> {
        self.function_index
            .get(qualified)
            .map(|&i| &self.functions[i])
            .ok_or_else(|| {
                Error::NotFound(format!("function '{qualified}' is not in the manifest"))
            })
    }

    /// Look up a module export list by path.
    pub fn module(&self, path: &str) -> Result<&ModuleMeta> {
        self.module_index
            .get(path)
            .map(|&i| &self.modules[i])
            .ok_or_else(|| Error::NotFound(format!("module '{path}' is not in the manifest")))
    }

    /// Whether a qualified name refers to a known class.
    #[must_use]
    pub fn is_class(&self, qualified: &str) -> bool {
        self.class_index.contains_key(qualified)
    }

    /// Whether a qualified name refers to a known function.
    #[must_use]
    pub fn is_function(&self, qualified: &str) -> bool {
        self.function_index.contains_key(qualified)
    }
}

/// Split a qualified name into `(module, name)` at the last separator.
///
/// A bare name with no separator yields an empty module.
#[must_use]
pub fn split_qualified(qualified: &str) -> (&str, &str) {
    match qualified.rfind('.') {
        Some(i) => (&qualified[..i], &qualified[i + 1..]),
        None => ("", qualified),
    }
}
