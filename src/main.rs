use anyhow::{Context, Result};
use clap::Parser;
use javatopuml::cli::{Cli, OutputFormat};
use javatopuml::files::find_package;
use javatopuml::package::{Package, get_package};
use javatopuml::puml::{RenderOptions, convert};
use std::path::Path;

fn main() -> Result<()> {
    let cli = Cli::parse();

    let requests: Vec<Option<String>> = if cli.packages.is_empty() {
        vec![None]
    } else {
        cli.packages.iter().cloned().map(Some).collect()
    };

    let mut produced = 0usize;
    for request in requests {
        if convert_one(&cli, request.as_deref())? {
            produced += 1;
        }
    }

    if produced == 0 {
        println!(
            "No diagrams were created. Are you sure you are in a valid, \
             compiling Java project and your input is correct?"
        );
    }

    Ok(())
}

/// Converts one requested package. Returns false when nothing was found —
/// absence, not an error.
fn convert_one(cli: &Cli, package_name: Option<&str>) -> Result<bool> {
    let Some(package_dir) = find_package(&cli.path, package_name)? else {
        return Ok(false);
    };

    let package = get_package(&package_dir, package_name)?;
    let content = render(&package, cli)?;

    match &cli.output {
        Some(dir) => {
            let file = dir.join(format!("{}.{}", package.name, cli.format.extension()));
            write_output(&file, &content)?;
            println!("saved {}", file.display());
        }
        None => {
            print!("{content}");
            if !content.ends_with('\n') {
                println!();
            }
        }
    }

    Ok(true)
}

fn render(package: &Package, cli: &Cli) -> Result<String> {
    Ok(match cli.format {
        OutputFormat::Puml => convert(
            package,
            RenderOptions {
                inheritance: !cli.no_inheritance,
                link_fields: !cli.no_link_fields,
            },
        ),
        OutputFormat::Json => serde_json::to_string_pretty(package)?,
    })
}

fn write_output(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }
    }
    std::fs::write(path, content)
        .with_context(|| format!("Failed to write output file: {}", path.display()))
}
