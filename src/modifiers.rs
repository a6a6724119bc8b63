//! Modifier keywords and prefix extraction.

use serde::Serialize;

/// A recognized declaration keyword. Covers the class kind alongside the
/// actual Java modifiers because both sit in the same leading keyword run of
/// a declaration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Modifier {
    Class,
    Interface,
    Enum,
    Static,
    Public,
    Private,
    Protected,
    Abstract,
    Final,
    Super,
    Annotation,
}

impl Modifier {
    pub fn from_keyword(token: &str) -> Option<Modifier> {
        Some(match token {
            "class" => Modifier::Class,
            "interface" => Modifier::Interface,
            "enum" => Modifier::Enum,
            "static" => Modifier::Static,
            "public" => Modifier::Public,
            "private" => Modifier::Private,
            "protected" => Modifier::Protected,
            "abstract" => Modifier::Abstract,
            "final" => Modifier::Final,
            "super" => Modifier::Super,
            "annotation" => Modifier::Annotation,
            _ => return None,
        })
    }
}

/// Peels the leading run of recognized keywords off `input`.
///
/// Returns the unique modifiers in encounter order and the remainder rejoined
/// with single spaces. Consumption halts at the first non-keyword token, so a
/// modifier-named identifier later in the text is never consumed.
pub fn extract_modifiers(input: &str) -> (Vec<Modifier>, String) {
    let mut tokens: Vec<&str> = input.split_whitespace().collect();
    let mut modifiers = Vec::new();

    while let Some(modifier) = tokens.first().and_then(|t| Modifier::from_keyword(t)) {
        if !modifiers.contains(&modifier) {
            modifiers.push(modifier);
        }
        tokens.remove(0);
    }

    (modifiers, tokens.join(" "))
}
