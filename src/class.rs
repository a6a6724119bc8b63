//! Class extraction: the orchestration layer over the cleaner, the scope
//! matcher, the member parsers and the name resolver.
//!
//! Every step is best-effort: a failed micro-extraction degrades to a
//! placeholder or an empty value, never an error. Callers must treat the
//! output as approximate, not ground truth.

use serde::Serialize;

use crate::cleaner::clean_java_content;
use crate::fields::{Field, get_fields};
use crate::methods::{Method, get_methods};
use crate::modifiers::{Modifier, extract_modifiers};
use crate::resolve::get_fqn;
use crate::scope::{SpanKind, match_scopes, split_top_level_commas};

pub const UNKNOWN_CLASS: &str = "UnknownClass";
pub const UNKNOWN_PACKAGE: &str = "unknown.package";

const CLASS_KINDS: [&str; 3] = ["class", "interface", "enum"];

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Class {
    /// Fully-qualified name: `<packageName>.<SimpleName>`. Nesting is
    /// expressed only through `classes`, never through a dotted class path.
    pub name: String,
    pub extends: Option<String>,
    pub implements: Vec<String>,
    pub modifiers: Vec<Modifier>,
    pub fields: Vec<Field>,
    pub methods: Vec<Method>,
    pub classes: Vec<Class>,
    /// Raw comma-split segments of the body text. Present exactly when the
    /// modifier set contains `enum`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub values: Option<Vec<String>>,
}

/// Extracts the class structure of one compilation unit.
pub fn get_class(java_content: &str) -> Class {
    let cleaned = clean_java_content(java_content);
    let (preamble, rest) = extract_preamble(&cleaned);
    let package_name = get_package_name(&preamble);
    parse_class(&rest, &package_name, &preamble)
}

/// Parses an already-cleaned `declaration { body }` fragment. Nested types
/// reuse the preamble and package name of the enclosing compilation unit.
fn parse_class(content: &str, package_name: &str, preamble: &[String]) -> Class {
    let mut class_declaration: Option<&str> = None;
    let mut class_content: Option<&str> = None;
    for span in match_scopes(content, '{', '}') {
        match span.kind {
            SpanKind::Outside if class_declaration.is_none() => {
                class_declaration = Some(span.text(content));
            }
            SpanKind::Inside if class_content.is_none() => {
                class_content = Some(span.text(content));
            }
            _ => {}
        }
    }
    let class_declaration = class_declaration.unwrap_or("");
    let class_content = class_content.unwrap_or("");

    let class_name = get_class_name(class_declaration);

    let mut statements: Vec<String> = Vec::new();
    let mut classes = Vec::new();
    let mut pending_nested: Option<&str> = None;

    for span in match_scopes(class_content, '{', '}') {
        match span.kind {
            SpanKind::Outside => {
                let between = span.text(class_content);
                match split_nested_declaration(between) {
                    Some((members, declaration)) => {
                        statements.extend(members.split(';').map(str::to_string));
                        pending_nested = Some(declaration);
                    }
                    None => {
                        statements.extend(between.split(';').map(str::to_string));
                    }
                }
            }
            SpanKind::Inside => {
                if let Some(declaration) = pending_nested.take() {
                    let nested = format!("{declaration} {{ {} }}", span.text(class_content));
                    classes.push(parse_class(&nested, package_name, preamble));
                }
                // other bodies (methods, initializers) carry no structure
            }
        }
    }

    statements.retain(|s| !s.trim().is_empty());

    let fields = get_fields(&statements);
    let methods = get_methods(&statements);

    let (modifiers, _) = extract_modifiers(class_declaration);
    let extends = get_extends(class_declaration, preamble);
    let implements = get_implements(class_declaration, preamble);
    let values = modifiers
        .contains(&Modifier::Enum)
        .then(|| class_content.split(',').map(str::to_string).collect());

    Class {
        name: format!("{package_name}.{class_name}"),
        extends,
        implements,
        modifiers,
        fields,
        methods,
        classes,
        values,
    }
}

/// Splits off the `package`/`import` statements preceding the first `{`.
/// Returns the preamble statements (without `;`) and the remaining text.
fn extract_preamble(content: &str) -> (Vec<String>, String) {
    let boundary = content.find('{').unwrap_or(content.len());
    let head = &content[..boundary];

    let mut preamble = Vec::new();
    let mut kept: Vec<&str> = Vec::new();
    for chunk in head.split(';') {
        let trimmed = chunk.trim();
        if starts_with_keyword(trimmed, "package") || starts_with_keyword(trimmed, "import") {
            preamble.push(trimmed.to_string());
        } else {
            kept.push(chunk);
        }
    }

    let rest = format!("{}{}", kept.join(";").trim_start(), &content[boundary..]);
    (preamble, rest)
}

/// The package name declared in the preamble, whitespace squeezed out.
fn get_package_name(preamble: &[String]) -> String {
    for statement in preamble {
        if let Some(rest) = statement.trim().strip_prefix("package") {
            if rest.starts_with(char::is_whitespace) {
                return rest.split_whitespace().collect();
            }
        }
    }
    UNKNOWN_PACKAGE.to_string()
}

fn starts_with_keyword(text: &str, keyword: &str) -> bool {
    text.strip_prefix(keyword)
        .is_some_and(|rest| rest.starts_with(char::is_whitespace))
}

/// The token following the first `class`/`interface`/`enum` keyword.
fn get_class_name(declaration: &str) -> String {
    let mut tokens = declaration.split_whitespace();
    while let Some(token) = tokens.next() {
        if CLASS_KINDS.contains(&token) {
            if let Some(name) = tokens.next() {
                return name.to_string();
            }
        }
    }
    UNKNOWN_CLASS.to_string()
}

/// Detects a nested type declaration in a "between" span: the text after the
/// last `;` must carry a class kind keyword. Member statements before that
/// point stay with the enclosing class.
fn split_nested_declaration(between: &str) -> Option<(&str, &str)> {
    let (members, declaration) = match between.rfind(';') {
        Some(split) => (&between[..split], &between[split + 1..]),
        None => ("", between),
    };
    declaration
        .split_whitespace()
        .any(|token| CLASS_KINDS.contains(&token))
        .then_some((members, declaration))
}

/// The extended type, resolved through the preamble. Capture stops at an
/// `implements` keyword.
fn get_extends(declaration: &str, preamble: &[String]) -> Option<String> {
    let target: Vec<&str> = declaration
        .split_whitespace()
        .skip_while(|token| *token != "extends")
        .skip(1)
        .take_while(|token| *token != "implements")
        .collect();
    if target.is_empty() {
        return None;
    }
    Some(get_fqn(preamble, &target.join(" ")))
}

/// The implemented types, each resolved through the preamble with any
/// trailing generic suffix stripped: downstream passes treat these entries as
/// plain type markers.
fn get_implements(declaration: &str, preamble: &[String]) -> Vec<String> {
    let clause: Vec<&str> = declaration
        .split_whitespace()
        .skip_while(|token| *token != "implements")
        .skip(1)
        .collect();
    if clause.is_empty() {
        return Vec::new();
    }

    let clause = clause.join(" ");
    split_top_level_commas(&clause)
        .into_iter()
        .filter_map(|entry| {
            let bare = entry.split('<').next().unwrap_or(entry).trim();
            (!bare.is_empty()).then(|| get_fqn(preamble, bare))
        })
        .collect()
}
