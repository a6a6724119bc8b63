//! PlantUML rendering of the extracted Package/Class tree.

use crate::class::Class;
use crate::fields::Field;
use crate::methods::Method;
use crate::modifiers::Modifier;
use crate::package::Package;

#[derive(Debug, Clone, Copy)]
pub struct RenderOptions {
    /// Draw `--|>` / `..|>` edges for extends/implements references.
    pub inheritance: bool,
    /// Draw `-->` association edges for fields whose type names a class of
    /// the rendered tree.
    pub link_fields: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        RenderOptions {
            inheritance: true,
            link_fields: true,
        }
    }
}

/// Renders a complete diagram (with `@startuml`/`@enduml`) for a package.
pub fn convert(package: &Package, options: RenderOptions) -> String {
    let mut out = String::new();
    out.push_str(&format!("@startuml {}\n", package.name));
    out.push_str(&format!("title {}\n\n", package.name));
    render_package(package, 0, &mut out);

    let edges = render_edges(package, options);
    if !edges.is_empty() {
        out.push('\n');
        out.push_str(&edges);
    }

    out.push_str("\n@enduml\n");
    out
}

fn render_package(package: &Package, depth: usize, out: &mut String) {
    let indent = "    ".repeat(depth);
    out.push_str(&format!("{indent}package {} {{\n", package.name));

    if !package.classes.is_empty() {
        out.push_str(&format!("{indent}    ' -=- classes ({}) -=-\n", package.name));
        for class in &package.classes {
            render_class(class, depth + 1, out);
        }
    }

    if !package.packages.is_empty() {
        out.push_str(&format!("{indent}    ' === packages ({}) ===\n", package.name));
        for sub in &package.packages {
            render_package(sub, depth + 1, out);
        }
    }

    out.push_str(&format!("{indent}}}\n"));
}

fn render_class(class: &Class, depth: usize, out: &mut String) {
    let indent = "    ".repeat(depth);
    out.push_str(&format!(
        "{indent}{} \"{}\" {{\n",
        class_kind(&class.modifiers),
        class.name
    ));

    if let Some(values) = &class.values {
        out.push_str(&format!("{indent}    ' --- values ({}) ---\n", class.name));
        let joined = values
            .iter()
            .map(|v| v.trim())
            .filter(|v| !v.is_empty())
            .collect::<Vec<_>>()
            .join(", ");
        out.push_str(&format!("{indent}    {joined}\n"));
    }

    if !class.fields.is_empty() {
        out.push_str(&format!("{indent}    ' --- fields ({}) ---\n", class.name));
        for field in &class.fields {
            out.push_str(&format!("{indent}    {}\n", field_line(field)));
        }
    }

    if !class.methods.is_empty() {
        out.push_str(&format!("{indent}    ' --- methods ({}) ---\n", class.name));
        for method in &class.methods {
            out.push_str(&format!("{indent}    {}\n", method_line(method)));
        }
    }

    out.push_str(&format!("{indent}}}\n"));

    // nested types render as sibling boxes; ownership stays visible through
    // the shared package prefix
    for nested in &class.classes {
        render_class(nested, depth, out);
    }
}

fn class_kind(modifiers: &[Modifier]) -> &'static str {
    if modifiers.contains(&Modifier::Class) {
        "class"
    } else if modifiers.contains(&Modifier::Interface) {
        "interface"
    } else if modifiers.contains(&Modifier::Enum) {
        "enum"
    } else if modifiers.contains(&Modifier::Abstract) {
        "abstract"
    } else {
        "class"
    }
}

fn field_line(field: &Field) -> String {
    format!(
        "{}{} {}",
        member_prefix(&field.modifiers),
        field.field_type,
        field.name
    )
}

fn method_line(method: &Method) -> String {
    let parameters = method
        .parameters
        .iter()
        .map(|p| format!("{} {}", p.param_type, p.name))
        .collect::<Vec<_>>()
        .join(", ");

    let mut line = member_prefix(&method.modifiers);
    if !method.return_type.is_empty() {
        line.push_str(&method.return_type);
        line.push(' ');
    }
    line.push_str(&format!("{}({parameters})", method.name));
    line
}

/// `{static}`/`{abstract}` marker plus the PlantUML visibility prefix.
fn member_prefix(modifiers: &[Modifier]) -> String {
    let mut prefix = String::new();
    if modifiers.contains(&Modifier::Static) {
        prefix.push_str("{static}");
    } else if modifiers.contains(&Modifier::Abstract) {
        prefix.push_str("{abstract}");
    }
    if modifiers.contains(&Modifier::Private) {
        prefix.push_str("- ");
    } else if modifiers.contains(&Modifier::Protected) {
        prefix.push_str("# ");
    } else if modifiers.contains(&Modifier::Public) {
        prefix.push_str("+ ");
    } else {
        prefix.push_str("~ ");
    }
    prefix
}

fn render_edges(package: &Package, options: RenderOptions) -> String {
    let mut classes = Vec::new();
    collect_classes(package, &mut classes);

    let mut out = String::new();

    if options.inheritance {
        for class in &classes {
            if let Some(parent) = &class.extends {
                out.push_str(&format!("\"{}\" --|> \"{parent}\"\n", class.name));
            }
            for interface in &class.implements {
                out.push_str(&format!("\"{}\" ..|> \"{interface}\"\n", class.name));
            }
        }
    }

    if options.link_fields {
        for class in &classes {
            for field in &class.fields {
                let bare = field
                    .field_type
                    .split('<')
                    .next()
                    .unwrap_or("")
                    .trim();
                if bare.is_empty() {
                    continue;
                }
                let suffix = format!(".{bare}");
                let target = classes
                    .iter()
                    .find(|c| c.name == bare || c.name.ends_with(&suffix));
                if let Some(target) = target {
                    if target.name != class.name {
                        out.push_str(&format!(
                            "\"{}\" --> \"{}\" : {}\n",
                            class.name, target.name, field.name
                        ));
                    }
                }
            }
        }
    }

    out
}

fn collect_classes<'a>(package: &'a Package, out: &mut Vec<&'a Class>) {
    fn walk<'a>(class: &'a Class, out: &mut Vec<&'a Class>) {
        out.push(class);
        for nested in &class.classes {
            walk(nested, out);
        }
    }
    for class in &package.classes {
        walk(class, out);
    }
    for sub in &package.packages {
        collect_classes(sub, out);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::class::get_class;

    fn package_of(name: &str, sources: &[&str]) -> Package {
        Package {
            name: name.to_string(),
            packages: Vec::new(),
            classes: sources.iter().map(|s| get_class(s)).collect(),
        }
    }

    #[test]
    fn renders_framing_and_package_block() {
        let package = package_of("p", &["package p; class Foo {}"]);
        let puml = convert(&package, RenderOptions::default());
        assert!(puml.starts_with("@startuml p\ntitle p\n"));
        assert!(puml.contains("package p {"));
        assert!(puml.contains("class \"p.Foo\""));
        assert!(puml.trim_end().ends_with("@enduml"));
    }

    #[test]
    fn renders_field_and_method_lines() {
        let package = package_of(
            "p",
            &["package p; public class Foo { private int count; public void run(String s) {} }"],
        );
        let puml = convert(&package, RenderOptions::default());
        assert!(puml.contains("- int count"));
        assert!(puml.contains("+ void run(String s)"));
    }

    #[test]
    fn static_and_visibility_prefixes() {
        let package = package_of(
            "p",
            &["package p; class Foo { public static int MAX; protected String name; long id; }"],
        );
        let puml = convert(&package, RenderOptions::default());
        assert!(puml.contains("{static}+ int MAX"));
        assert!(puml.contains("# String name"));
        assert!(puml.contains("~ long id"));
    }

    #[test]
    fn enum_renders_kind_and_values() {
        let package = package_of("p", &["package p; enum Color { RED, GREEN, BLUE }"]);
        let puml = convert(&package, RenderOptions::default());
        assert!(puml.contains("enum \"p.Color\""));
        assert!(puml.contains("RED, GREEN, BLUE"));
    }

    #[test]
    fn interface_kind_selected_without_class_keyword() {
        let package = package_of("p", &["package p; public interface Api {}"]);
        let puml = convert(&package, RenderOptions::default());
        assert!(puml.contains("interface \"p.Api\""));
    }

    #[test]
    fn constructor_line_has_no_return_type() {
        let package = package_of("p", &["package p; class Foo { public Foo(int n) {} }"]);
        let puml = convert(&package, RenderOptions::default());
        assert!(puml.contains("+ Foo(int n)"));
    }

    #[test]
    fn inheritance_edges_render_and_can_be_disabled() {
        let package = package_of(
            "p",
            &[
                "package p; class Base {}",
                "package p; class Child extends Base implements Runnable {}",
            ],
        );
        let puml = convert(&package, RenderOptions::default());
        assert!(puml.contains("\"p.Child\" --|> \"Base\""));
        assert!(puml.contains("\"p.Child\" ..|> \"Runnable\""));

        let off = convert(
            &package,
            RenderOptions {
                inheritance: false,
                link_fields: false,
            },
        );
        assert!(!off.contains("--|>"));
    }

    #[test]
    fn field_association_edge_targets_sibling_class() {
        let package = package_of(
            "p",
            &[
                "package p; class Engine {}",
                "package p; class Car { private Engine engine; }",
            ],
        );
        let puml = convert(&package, RenderOptions::default());
        assert!(puml.contains("\"p.Car\" --> \"p.Engine\" : engine"));
    }

    #[test]
    fn nested_classes_render_as_boxes() {
        let package = package_of("p", &["package p; class Outer { class Inner {} }"]);
        let puml = convert(&package, RenderOptions::default());
        assert!(puml.contains("class \"p.Outer\""));
        assert!(puml.contains("class \"p.Inner\""));
    }
}
