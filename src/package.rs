//! Package extraction: directory recursion and same-package inheritance
//! linking.

use anyhow::{Context, Result};
use rayon::prelude::*;
use serde::Serialize;
use std::path::{Component, Path};

use crate::class::{Class, UNKNOWN_PACKAGE, get_class};
use crate::files::{find_java_files, find_sub_packages};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Package {
    /// Dot-delimited package name.
    pub name: String,
    pub packages: Vec<Package>,
    pub classes: Vec<Class>,
}

/// Parses a package directory: sub-directories become nested packages, java
/// files become classes, and a sibling-linking pass qualifies same-package
/// inheritance references before the record is returned.
///
/// Files of one directory are parsed in parallel; each class is built purely
/// from its own file, so the only ordering constraint is that linking runs
/// after the parallel parse completes.
pub fn get_package(root: &Path, name: Option<&str>) -> Result<Package> {
    let name = match name {
        Some(name) => name.to_string(),
        None => extract_name(root),
    };

    let mut packages = Vec::new();
    let mut unnamed = 0usize;
    for sub in find_sub_packages(root)? {
        let sub_name = match &sub.name {
            Some(sub_name) => format!("{name}.{sub_name}"),
            None => {
                let synthesized = format!("{name}.sub{unnamed}");
                unnamed += 1;
                synthesized
            }
        };
        packages.push(get_package(&sub.root, Some(&sub_name))?);
    }

    let classes = find_java_files(root)?
        .par_iter()
        .map(|file| {
            let content = std::fs::read_to_string(file)
                .with_context(|| format!("Failed to read java file: {}", file.display()))?;
            Ok(get_class(&content))
        })
        .collect::<Result<Vec<Class>>>()?;

    Ok(Package {
        name,
        packages,
        classes: link_siblings(classes),
    })
}

/// Rewrites `extends`/`implements` references whose simple name matches a
/// sibling's fully-qualified name. Consumes and rebuilds the class list
/// against a side index instead of mutating a shared tree, so concurrently
/// parsed packages never observe a half-linked record.
fn link_siblings(classes: Vec<Class>) -> Vec<Class> {
    let index: Vec<String> = classes.iter().map(|c| c.name.clone()).collect();

    classes
        .into_iter()
        .map(|mut class| {
            class.extends = class.extends.map(|r| qualify(&index, r));
            class.implements = class
                .implements
                .into_iter()
                .map(|r| qualify(&index, r))
                .collect();
            class
        })
        .collect()
}

fn qualify(siblings: &[String], reference: String) -> String {
    let suffix = format!(".{reference}");
    siblings
        .iter()
        .find(|name| name.ends_with(&suffix))
        .cloned()
        .unwrap_or(reference)
}

/// Derives a package name from a directory path: the components after the
/// last `src/main/java` marker, dot-joined. Without the marker the directory
/// name itself is used.
fn extract_name(root: &Path) -> String {
    let components: Vec<&str> = root
        .components()
        .filter_map(|c| match c {
            Component::Normal(part) => part.to_str(),
            _ => None,
        })
        .collect();

    let tail = match components
        .windows(3)
        .rposition(|w| w == ["src", "main", "java"])
    {
        Some(pos) => &components[pos + 3..],
        None => &components[components.len().saturating_sub(1)..],
    };

    if tail.is_empty() {
        UNKNOWN_PACKAGE.to_string()
    } else {
        tail.join(".")
    }
}
