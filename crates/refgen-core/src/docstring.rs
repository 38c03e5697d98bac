//! Docstring reformatting into the markdown dialect.
//!
//! Raw docstrings use the documented library's plain-text conventions:
//! indented `# Heading` markers, `name: description` field lists, and nested
//! 4-space indentation. The transform rewrites those into markdown through an
//! ordered pipeline — heading markers first, then field-list bullets, then
//! indentation collapse. Function docstrings nest one level deeper than class
//! docstrings (parameter blocks inside argument blocks), so function mode uses
//! thresholds two levels higher.

use regex::Regex;
use std::sync::LazyLock;

/// Indented `# heading` line, class-level nesting.
static HEADING_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n    # (.*)\n").unwrap());

/// Indented `# heading` line one level deeper, only seen in function docstrings.
static DEEP_HEADING_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n        # (.*)\n").unwrap());

/// `name: description` field-list line.
static FIELD_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"    ([^\s\\]+):(.*)\n").unwrap());

/// Which nesting depth assumptions to apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocstringKind {
    /// Class docstring: base indent of one level.
    Class,
    /// Function docstring: parameter blocks nest one level deeper.
    Function,
}

/// Rewrite a raw docstring into the markdown dialect.
///
/// Applying the transform to already-transformed text leaves the heading and
/// bullet rewrites unchanged (the pipeline is idempotent on its own output).
/// An empty docstring transforms to an empty string; callers skip the block
/// contribution entirely for absent docstrings.
#[must_use]
pub fn transform(doc: &str, kind: DocstringKind) -> String {
    let mut text = HEADING_RE
        .replace_all(doc, "\n    __${1}__\n\n")
        .into_owned();
    if kind == DocstringKind::Function {
        text = DEEP_HEADING_RE
            .replace_all(&text, "\n        __${1}__\n\n")
            .into_owned();
    }
    let text = FIELD_RE.replace_all(&text, "    - __${1}__:${2}\n");

    // Collapse the two deepest indentation levels to tabs and strip the base
    // indent. Order matters: deepest first, then middle, then base.
    let (deep, middle) = match kind {
        DocstringKind::Class => ("                    ", "            "),
        DocstringKind::Function => ("                        ", "                "),
    };
    text.replace(deep, "\t\t")
        .replace(middle, "\t")
        .replace("    ", "")
}
