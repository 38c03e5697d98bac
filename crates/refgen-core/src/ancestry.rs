//! Ancestor-chain computation for docstring-inheritance lookups.
//!
//! The chain is built breadth-first: direct bases of the input classes first,
//! then their bases, level by level, with the universal root type filtered out
//! at every level and duplicates dropped on first occurrence. Entries closest
//! to the input classes therefore appear earliest and the most distant
//! ancestors last.

use crate::metadata::{ClassMeta, Library, OBJECT_ROOT};
use crate::Result;
use std::collections::HashSet;

/// Compute the full transitive ancestor chain of a set of classes.
///
/// Excludes the universal root type and deduplicates by qualified name while
/// preserving level order. Bases that are neither the root type nor present in
/// the manifest are lookup errors. A class's bases are expanded only the
/// first time the class appears, so cyclic base declarations yield a finite
/// chain rather than a hang.
pub fn class_ancestors<'a>(
    library: &'a Library,
    classes: &[&ClassMeta],
) -> Result<Vec<&'a ClassMeta>> {
    let mut chain: Vec<&ClassMeta> = Vec::new();
    let mut seen: HashSet<String> = HashSet::new();
    let mut level: Vec<&ClassMeta> = Vec::new();

    for class in classes {
        for base in &class.bases {
            if base == OBJECT_ROOT {
                continue;
            }
            level.push(library.class(base)?);
        }
    }

    while !level.is_empty() {
        let mut next: Vec<&ClassMeta> = Vec::new();
        for ancestor in level {
            // Expand bases only on first sight; a cyclic bases graph in the
            // manifest must terminate instead of hanging the build.
            if seen.insert(ancestor.qualified()) {
                chain.push(ancestor);
                for base in &ancestor.bases {
                    if base == OBJECT_ROOT {
                        continue;
                    }
                    next.push(library.class(base)?);
                }
            }
        }
        level = next;
    }

    Ok(chain)
}

/// Find the ancestor that originally defined a named member.
///
/// Scans the ancestor chain in order and keeps the *last* match, i.e. the
/// ancestor furthest from `class` that still lists the member. Falls back to
/// `class` itself when no ancestor defines it. The furthest-match rule is the
/// lookup semantics documentation consumers rely on and is pinned by tests;
/// do not swap it for a nearest-ancestor scan.
pub fn earliest_defining_class<'a>(
    library: &'a Library,
    class: &'a ClassMeta,
    member: &str,
) -> Result<&'a ClassMeta> {
    let ancestors = class_ancestors(library, &[class])?;
    let mut found = None;
    for ancestor in ancestors {
        if ancestor.members.iter().any(|m| m == member) {
            found = Some(ancestor);
        }
    }
    Ok(found.unwrap_or(class))
}
