//! Per-entity markdown block rendering.
//!
//! A [`RenderedBlock`] is the immutable result of documenting one entity:
//! heading, fenced signature snippet, transformed docstring, and (for classes
//! only) a right-floating source link. Blocks are produced once during page
//! assembly and concatenated by the assembler.

use crate::docstring::{self, DocstringKind};
use crate::links::LinkConfig;
use crate::metadata::{ClassMeta, FunctionMeta};
use crate::signature::{class_signature, function_signature};
use crate::Result;

/// Whether a block documents a class or a free function.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockKind {
    /// Class block: source link, newline-joined sections.
    Class,
    /// Function block: no source link, blank-line-joined sections.
    Function,
}

/// The rendered documentation block for a single entity.
#[derive(Debug, Clone)]
pub struct RenderedBlock {
    /// Entity name used for the heading.
    pub name: String,
    /// Class or function formatting rules.
    pub kind: BlockKind,
    /// Single-line signature text shown in the fenced snippet.
    pub signature: String,
    /// Transformed docstring, absent for undocumented entities.
    pub doc: Option<String>,
    /// `[[source]](...)` fragment, classes only.
    pub source_link: Option<String>,
}

impl RenderedBlock {
    /// Emit the markdown fragment for this block.
    #[must_use]
    pub fn to_markdown(&self, snippet_language: &str) -> String {
        let mut sections: Vec<String> = Vec::new();
        if let Some(link) = &self.source_link {
            sections.push(format!("<span style=\"float:right;\">{link}</span>"));
        }
        sections.push(format!("### {}\n", self.name));
        sections.push(code_snippet(snippet_language, &self.signature));
        if let Some(doc) = &self.doc {
            sections.push(doc.clone());
        }
        let separator = match self.kind {
            BlockKind::Class => "\n",
            BlockKind::Function => "\n\n",
        };
        sections.join(separator)
    }
}

fn code_snippet(language: &str, snippet: &str) -> String {
    format!("```{language}\n{snippet}\n```\n")
}

/// Render a class into its documentation block.
pub fn render_class(links: &LinkConfig, class: &ClassMeta) -> Result<RenderedBlock> {
    let signature = class_signature(class)?;
    Ok(RenderedBlock {
        name: class.name.clone(),
        kind: BlockKind::Class,
        signature: signature.to_string(),
        doc: class
            .doc
            .as_deref()
            .map(|d| docstring::transform(d, DocstringKind::Class))
            .filter(|d| !d.is_empty()),
        source_link: Some(links.class_source_link(class)?),
    })
}

/// Render a function into its documentation block.
///
/// The declaring-module prefix is stripped from the signature text for
/// readability; functions carry no source link.
pub fn render_function(function: &FunctionMeta) -> Result<RenderedBlock> {
    let signature = function_signature(function, false)?;
    let prefix = format!("{}.", function.module);
    Ok(RenderedBlock {
        name: function.name.clone(),
        kind: BlockKind::Function,
        signature: signature.to_string().replace(&prefix, ""),
        doc: function
            .doc
            .as_deref()
            .map(|d| docstring::transform(d, DocstringKind::Function))
            .filter(|d| !d.is_empty()),
        source_link: None,
    })
}
