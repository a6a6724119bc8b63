//! Method extraction from flat member statements.

use serde::Serialize;

use crate::modifiers::{Modifier, extract_modifiers};
use crate::scope::{first_inside, split_top_level_commas};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Parameter {
    pub name: String,
    #[serde(rename = "type")]
    pub param_type: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Method {
    pub name: String,
    /// Raw return type text; empty for constructors, never defaulted.
    pub return_type: String,
    pub parameters: Vec<Parameter>,
    pub modifiers: Vec<Modifier>,
}

/// Parses the method declarations out of the flat member statements of a
/// class body. A statement whose declaration part carries a `(` is a method
/// candidate; everything else is left to the field parser. Encounter order is
/// preserved.
pub fn get_methods(statements: &[String]) -> Vec<Method> {
    let mut methods = Vec::new();

    for statement in statements {
        let declaration = statement.split('=').next().unwrap_or("");
        let Some(paren) = declaration.find('(') else {
            continue;
        };

        let index = methods.len();
        let (modifiers, rest) = extract_modifiers(&declaration[..paren]);
        let mut tokens: Vec<&str> = rest.split_whitespace().collect();

        let name = match tokens.pop() {
            Some(token) => token.to_string(),
            None => format!("method{index}"),
        };
        let return_type = tokens.join(" ");

        let parameter_text = first_inside(&declaration[paren..], '(', ')').unwrap_or("");
        let parameters = get_parameters(parameter_text);

        methods.push(Method {
            name,
            return_type,
            parameters,
            modifiers,
        });
    }

    methods
}

fn get_parameters(text: &str) -> Vec<Parameter> {
    let mut parameters = Vec::new();

    for piece in split_top_level_commas(text) {
        let mut tokens: Vec<&str> = piece.split_whitespace().collect();
        if tokens.is_empty() {
            continue;
        }

        let index = parameters.len();
        let name = match tokens.pop() {
            Some(token) => token.to_string(),
            None => format!("param{index}"),
        };
        let param_type = if tokens.is_empty() {
            format!("type{index}")
        } else {
            tokens.join(" ")
        };

        parameters.push(Parameter { name, param_type });
    }

    parameters
}
