//! Fully-qualified-name resolution against an import preamble.

use crate::scope::{first_inside, first_outside};

/// Resolves a type reference to a fully-qualified name using the preamble of
/// `package`/`import` statements.
///
/// A single generic level is unwrapped explicitly: the inner argument is
/// resolved first (recursively, so deeper nesting is whatever that call
/// yields) and reattached after the outer name has been matched. A name with
/// no matching import is returned unqualified — same-package and built-in
/// types stay bare until the package-level linking pass.
pub fn get_fqn(preamble: &[String], name: &str) -> String {
    let name = name.trim();

    let outer = first_outside(name, '<', '>').unwrap_or(name).trim();
    let inner_fqn = first_inside(name, '<', '>').map(|inner| get_fqn(preamble, inner));

    let mut fqn = outer.to_string();
    let suffix = format!(".{outer}");
    for statement in preamble {
        if let Some(import) = import_path(statement) {
            if import.ends_with(&suffix) {
                fqn = import.to_string();
            }
        }
    }

    match inner_fqn {
        Some(inner) => format!("{fqn}<{inner}>"),
        None => fqn,
    }
}

/// The imported path of an `import` statement, `static` keyword stripped.
fn import_path(statement: &str) -> Option<&str> {
    let rest = statement.trim().strip_prefix("import")?;
    if rest.chars().next().is_some_and(|c| !c.is_whitespace()) {
        return None;
    }
    let rest = rest.trim_start();
    let rest = match rest.strip_prefix("static") {
        Some(tail) if tail.starts_with(char::is_whitespace) => tail.trim_start(),
        _ => rest,
    };
    Some(rest.trim())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn preamble(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn resolves_imported_name() {
        let pre = preamble(&["package a.b", "import x.y.Foo"]);
        assert_eq!(get_fqn(&pre, "Foo"), "x.y.Foo");
    }

    #[test]
    fn unmatched_name_stays_bare() {
        let pre = preamble(&["package a.b", "import x.y.Foo"]);
        assert_eq!(get_fqn(&pre, "Bar"), "Bar");
    }

    #[test]
    fn resolves_generic_argument() {
        let pre = preamble(&["import x.y.Foo"]);
        assert_eq!(get_fqn(&pre, "List<Foo>"), "List<x.y.Foo>");
    }

    #[test]
    fn resolves_outer_and_inner() {
        let pre = preamble(&["import java.util.List", "import x.y.Foo"]);
        assert_eq!(get_fqn(&pre, "List<Foo>"), "java.util.List<x.y.Foo>");
    }

    #[test]
    fn suffix_match_requires_dot_boundary() {
        let pre = preamble(&["import x.y.SuperFoo"]);
        assert_eq!(get_fqn(&pre, "Foo"), "Foo");
    }

    #[test]
    fn static_import_resolves() {
        let pre = preamble(&["import static org.junit.Assert"]);
        assert_eq!(get_fqn(&pre, "Assert"), "org.junit.Assert");
    }

    #[test]
    fn last_matching_import_wins() {
        let pre = preamble(&["import a.Foo", "import b.Foo"]);
        assert_eq!(get_fqn(&pre, "Foo"), "b.Foo");
    }

    #[test]
    fn package_statement_is_not_an_import() {
        let pre = preamble(&["package x.y.Foo"]);
        assert_eq!(get_fqn(&pre, "Foo"), "Foo");
    }
}
