//! Field extraction from flat member statements.

use serde::Serialize;

use crate::modifiers::{Modifier, extract_modifiers};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Field {
    pub name: String,
    #[serde(rename = "type")]
    pub field_type: String,
    pub modifiers: Vec<Modifier>,
}

/// Parses the field declarations out of the flat member statements of a class
/// body. Statements whose declaration part contains a `(` are method
/// candidates and are skipped here; encounter order is preserved.
pub fn get_fields(statements: &[String]) -> Vec<Field> {
    let mut fields = Vec::new();

    for statement in statements {
        // initializers carry arbitrary expression text
        let declaration = statement.split('=').next().unwrap_or("");
        if declaration.contains('(') {
            continue;
        }

        let index = fields.len();
        let (modifiers, rest) = extract_modifiers(declaration);
        let mut tokens: Vec<&str> = rest.split_whitespace().collect();
        if modifiers.is_empty() && tokens.is_empty() {
            continue;
        }

        let name = match tokens.pop() {
            Some(token) => token.to_string(),
            None => format!("field{index}"),
        };
        let field_type = if tokens.is_empty() {
            format!("type{index}")
        } else {
            tokens.join(" ")
        };

        fields.push(Field {
            name,
            field_type,
            modifiers,
        });
    }

    fields
}

#[cfg(test)]
mod tests {
    use super::*;

    fn statements(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn parses_simple_field() {
        let fields = get_fields(&statements(&["private int count"]));
        assert_eq!(fields.len(), 1);
        assert_eq!(fields[0].name, "count");
        assert_eq!(fields[0].field_type, "int");
        assert_eq!(fields[0].modifiers, vec![Modifier::Private]);
    }

    #[test]
    fn discards_initializer() {
        let fields = get_fields(&statements(&["private int count = compute(1, 2)"]));
        assert_eq!(fields.len(), 1);
        assert_eq!(fields[0].name, "count");
        assert_eq!(fields[0].field_type, "int");
    }

    #[test]
    fn skips_method_candidates() {
        let fields = get_fields(&statements(&[
            "public void run(String s)",
            "protected String name",
        ]));
        assert_eq!(fields.len(), 1);
        assert_eq!(fields[0].name, "name");
    }

    #[test]
    fn generic_type_spans_multiple_tokens() {
        let fields = get_fields(&statements(&["private Map<String, Integer> lookup"]));
        assert_eq!(fields[0].name, "lookup");
        assert_eq!(fields[0].field_type, "Map<String, Integer>");
    }

    #[test]
    fn missing_type_synthesizes_placeholder() {
        let fields = get_fields(&statements(&["count"]));
        assert_eq!(fields[0].name, "count");
        assert_eq!(fields[0].field_type, "type0");
    }

    #[test]
    fn modifiers_only_synthesizes_both() {
        let fields = get_fields(&statements(&["static"]));
        assert_eq!(fields[0].name, "field0");
        assert_eq!(fields[0].field_type, "type0");
        assert_eq!(fields[0].modifiers, vec![Modifier::Static]);
    }

    #[test]
    fn blank_statements_are_dropped() {
        assert!(get_fields(&statements(&["  ", ""])).is_empty());
    }

    #[test]
    fn preserves_encounter_order() {
        let fields = get_fields(&statements(&["int a", "int b", "int c"]));
        let names: Vec<&str> = fields.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, vec!["a", "b", "c"]);
    }
}
