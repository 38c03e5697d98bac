//! Call-signature reconstruction from callable metadata.
//!
//! Produces the single-line `qualified.name(arg1, arg2, kw1=default1)` text
//! rendered into every documentation block. Required parameters always precede
//! defaulted ones; an interleaved parameter list in the manifest is a
//! configuration error rather than something to silently reorder.

use crate::metadata::{ClassMeta, FunctionMeta, Param};
use crate::{Error, Result};
use std::fmt;

/// A reconstructed call signature.
///
/// Immutable once built. Rendering reproduces declaration order: all required
/// parameter names first, then `name=default` pairs.
#[derive(Debug, Clone, PartialEq)]
pub struct CallableSignature {
    qualified: String,
    required: Vec<String>,
    defaulted: Vec<(String, String)>,
}

impl CallableSignature {
    /// Build a signature from an ordered parameter list.
    ///
    /// When `method` is true the first parameter is the implicit receiver and
    /// is dropped before rendering. Returns [`Error::Config`] if a required
    /// parameter follows a defaulted one.
    pub fn new(qualified: &str, params: &[Param], method: bool) -> Result<Self> {
        let params = if method && !params.is_empty() {
            &params[1..]
        } else {
            params
        };

        let mut required = Vec::new();
        let mut defaulted = Vec::new();
        for param in params {
            match &param.default {
                Some(value) => defaulted.push((param.name.clone(), render_default(value))),
                None => {
                    if !defaulted.is_empty() {
                        return Err(Error::Config(format!(
                            "callable '{qualified}': required parameter '{}' follows a defaulted parameter",
                            param.name
                        )));
                    }
                    required.push(param.name.clone());
                },
            }
        }

        Ok(Self {
            qualified: qualified.to_string(),
            required,
            defaulted,
        })
    }

    /// Qualified name of the callable.
    #[must_use]
    pub fn qualified(&self) -> &str {
        &self.qualified
    }

    /// Required parameter names in declaration order.
    #[must_use]
    pub fn required(&self) -> &[String] {
        &self.required
    }

    /// `(name, rendered default)` pairs in declaration order.
    #[must_use]
    pub fn defaulted(&self) -> &[(String, String)] {
        &self.defaulted
    }
}

impl fmt::Display for CallableSignature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}(", self.qualified)?;
        let mut first = true;
        for name in &self.required {
            if !first {
                write!(f, ", ")?;
            }
            write!(f, "{name}")?;
            first = false;
        }
        for (name, default) in &self.defaulted {
            if !first {
                write!(f, ", ")?;
            }
            write!(f, "{name}={default}")?;
            first = false;
        }
        write!(f, ")")
    }
}

/// Render a default value the way the documented library spells literals.
///
/// Strings are single-quoted; booleans and null follow the documented
/// library's `True`/`False`/`None` spelling; numbers render verbatim;
/// composite values fall back to compact JSON.
#[must_use]
pub fn render_default(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::String(s) => format!("'{s}'"),
        serde_json::Value::Bool(true) => "True".to_string(),
        serde_json::Value::Bool(false) => "False".to_string(),
        serde_json::Value::Null => "None".to_string(),
        other => other.to_string(),
    }
}

/// Signature for a free function, with the receiver dropped when `method` is set.
pub fn function_signature(function: &FunctionMeta, method: bool) -> Result<CallableSignature> {
    CallableSignature::new(&function.qualified(), &function.params, method)
}

/// Signature for a class constructor.
///
/// Uses the initializer parameter list with the implicit receiver dropped and
/// the class name in place of the initializer name. A class without an
/// explicit initializer falls back to the degenerate `module.Name()` form.
pub fn class_signature(class: &ClassMeta) -> Result<CallableSignature> {
    match &class.init {
        Some(params) => CallableSignature::new(&class.qualified(), params, true),
        None => CallableSignature::new(&class.qualified(), &[], false),
    }
}
