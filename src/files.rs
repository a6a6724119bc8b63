//! Filesystem discovery for the package parser.
//!
//! Locates the package root under the conventional `src/main/java` layout and
//! lists the java files and sub-directories that drive package recursion.
//! A package that cannot be found is an absence (`Ok(None)`), never an error;
//! errors are reserved for unreadable directories.

use anyhow::{Context, Result};
use ignore::WalkBuilder;
use std::path::{Component, Path, PathBuf};
use std::sync::mpsc;

const SOURCE_ROOT: [&str; 3] = ["src", "main", "java"];

#[derive(Debug, Clone)]
pub struct SubPackage {
    pub root: PathBuf,
    /// Directory name; `None` when it cannot be represented, in which case
    /// the package parser synthesizes a `sub<N>` name.
    pub name: Option<String>,
}

/// Finds the directory of a package under `root`.
///
/// With a package name, the `src/main/java/<package path>` directory is looked
/// up both inside `root` and along `root`'s own path. Without one, the search
/// falls back to the deepest directory containing every discovered java file
/// (the "biggest" package of the project).
pub fn find_package(root: &Path, name: Option<&str>) -> Result<Option<PathBuf>> {
    if let Some(name) = name {
        let mut needs = source_root();
        for part in name.split('.') {
            needs.push(part);
        }

        if path_contains(root, &needs) {
            return Ok(Some(trim_path(root, &needs)));
        }
        let wanted = root.join(&needs);
        return Ok(wanted.is_dir().then_some(wanted));
    }

    let source_root_dir = if path_contains(root, &source_root()) {
        trim_path(root, &source_root())
    } else {
        let candidate = root.join(source_root());
        if !candidate.is_dir() {
            return Ok(None);
        }
        candidate
    };

    let java_files = scan_java_files(&source_root_dir)?;
    if java_files.is_empty() {
        return Ok(None);
    }

    Ok(common_directory(&java_files))
}

/// Immediate child directories of `root` that contain java files anywhere
/// below them, sorted for deterministic traversal.
pub fn find_sub_packages(root: &Path) -> Result<Vec<SubPackage>> {
    let entries = std::fs::read_dir(root)
        .with_context(|| format!("Failed to list directory: {}", root.display()))?;

    let mut subs = Vec::new();
    for entry in entries {
        let entry = entry?;
        let path = entry.path();
        if !path.is_dir() {
            continue;
        }
        if scan_java_files(&path)?.is_empty() {
            continue;
        }
        let name = path
            .file_name()
            .and_then(|n| n.to_str())
            .map(str::to_string);
        subs.push(SubPackage { root: path, name });
    }

    subs.sort_by(|a, b| a.root.cmp(&b.root));
    Ok(subs)
}

/// The java files directly inside `root` (non-recursive), sorted.
pub fn find_java_files(root: &Path) -> Result<Vec<PathBuf>> {
    let entries = std::fs::read_dir(root)
        .with_context(|| format!("Failed to list directory: {}", root.display()))?;

    let mut files = Vec::new();
    for entry in entries {
        let entry = entry?;
        let path = entry.path();
        if path.is_file() && path.extension().is_some_and(|e| e == "java") {
            files.push(path);
        }
    }

    files.sort();
    Ok(files)
}

/// Recursively collects every java file below `base`.
pub fn scan_java_files(base: &Path) -> Result<Vec<PathBuf>> {
    let (tx, rx) = mpsc::channel();

    let walker = WalkBuilder::new(base)
        .hidden(false)
        .git_ignore(false)
        .git_global(false)
        .git_exclude(false)
        .build_parallel();

    walker.run(|| {
        let tx = tx.clone();
        Box::new(move |entry| {
            if let Ok(entry) = entry {
                let path = entry.path();
                if path.extension().is_some_and(|e| e == "java") {
                    let _ = tx.send(path.to_path_buf());
                }
            }
            ignore::WalkState::Continue
        })
    });

    drop(tx);
    let mut files: Vec<PathBuf> = rx.iter().collect();
    files.sort();
    Ok(files)
}

fn source_root() -> PathBuf {
    SOURCE_ROOT.iter().collect()
}

/// True when `needle`'s components occur consecutively inside `path`.
fn path_contains(path: &Path, needle: &Path) -> bool {
    let components: Vec<Component> = path.components().collect();
    let wanted: Vec<Component> = needle.components().collect();
    if wanted.is_empty() || components.len() < wanted.len() {
        return false;
    }
    components.windows(wanted.len()).any(|w| w == wanted)
}

/// Walks up from `root` to the shortest ancestor whose path still contains
/// `needs`: for `/p/src/main/java/a/b` and `src/main/java/a` that is
/// `/p/src/main/java/a`.
fn trim_path(root: &Path, needs: &Path) -> PathBuf {
    let mut current = root.to_path_buf();
    while let Some(parent) = current.parent() {
        if !path_contains(parent, needs) {
            break;
        }
        current = parent.to_path_buf();
    }
    current
}

/// Deepest directory containing every given file.
fn common_directory(files: &[PathBuf]) -> Option<PathBuf> {
    let mut parents = files.iter().filter_map(|f| f.parent());
    let first = parents.next()?.to_path_buf();
    Some(parents.fold(first, |acc, parent| {
        acc.components()
            .zip(parent.components())
            .take_while(|(a, b)| a == b)
            .map(|(a, _)| a)
            .collect()
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::time::{SystemTime, UNIX_EPOCH};

    fn temp_dir(name: &str) -> PathBuf {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap()
            .as_nanos();
        std::env::temp_dir().join(format!(
            "javatopuml_test_{}_{}_{}",
            std::process::id(),
            nanos,
            name
        ))
    }

    fn write_file(path: &Path, content: &str) {
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }

    #[test]
    fn finds_named_package_under_root() -> Result<()> {
        let base = temp_dir("find_named");
        let pkg = base.join("src/main/java/org/acme");
        write_file(&pkg.join("Foo.java"), "package org.acme; class Foo {}");

        let found = find_package(&base, Some("org.acme"))?;
        assert_eq!(found, Some(pkg));
        fs::remove_dir_all(&base)?;
        Ok(())
    }

    #[test]
    fn trims_root_already_inside_package() -> Result<()> {
        let base = temp_dir("find_inside");
        let pkg = base.join("src/main/java/org/acme");
        let deep = pkg.join("sub/deeper");
        fs::create_dir_all(&deep)?;

        let found = find_package(&deep, Some("org.acme"))?;
        assert_eq!(found, Some(pkg));
        fs::remove_dir_all(&base)?;
        Ok(())
    }

    #[test]
    fn missing_package_is_absence_not_error() -> Result<()> {
        let base = temp_dir("find_missing");
        fs::create_dir_all(&base)?;
        assert!(find_package(&base, Some("no.such.pkg"))?.is_none());
        assert!(find_package(&base, None)?.is_none());
        fs::remove_dir_all(&base)?;
        Ok(())
    }

    #[test]
    fn unnamed_lookup_picks_common_directory() -> Result<()> {
        let base = temp_dir("find_common");
        let java = base.join("src/main/java");
        write_file(
            &java.join("org/acme/a/A.java"),
            "package org.acme.a; class A {}",
        );
        write_file(
            &java.join("org/acme/b/B.java"),
            "package org.acme.b; class B {}",
        );

        let found = find_package(&base, None)?;
        assert_eq!(found, Some(java.join("org/acme")));
        fs::remove_dir_all(&base)?;
        Ok(())
    }

    #[test]
    fn sub_packages_require_java_files() -> Result<()> {
        let base = temp_dir("subpkgs");
        write_file(
            &base.join("withjava/nested/C.java"),
            "package p; class C {}",
        );
        fs::create_dir_all(base.join("empty"))?;

        let subs = find_sub_packages(&base)?;
        assert_eq!(subs.len(), 1);
        assert_eq!(subs[0].name.as_deref(), Some("withjava"));
        fs::remove_dir_all(&base)?;
        Ok(())
    }

    #[test]
    fn java_files_are_non_recursive_and_sorted() -> Result<()> {
        let base = temp_dir("javafiles");
        write_file(&base.join("B.java"), "class B {}");
        write_file(&base.join("A.java"), "class A {}");
        write_file(&base.join("notes.txt"), "x");
        write_file(&base.join("nested/C.java"), "class C {}");

        let files = find_java_files(&base)?;
        let names: Vec<_> = files
            .iter()
            .map(|f| f.file_name().unwrap().to_str().unwrap().to_string())
            .collect();
        assert_eq!(names, vec!["A.java", "B.java"]);
        fs::remove_dir_all(&base)?;
        Ok(())
    }
}
