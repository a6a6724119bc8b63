use clap::{Parser, ValueEnum};
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "javatopuml")]
#[command(about = "Generate PlantUML class diagrams from Java sources")]
pub struct Cli {
    /// Packages to convert; without any, the largest discoverable package of
    /// the project is used.
    #[arg(value_name = "PACKAGE")]
    pub packages: Vec<String>,

    /// Root of the Java project.
    #[arg(long, value_name = "DIR", default_value = ".")]
    pub path: PathBuf,

    /// Output directory; without it, diagrams go to stdout.
    #[arg(short = 'o', long, value_name = "DIR")]
    pub output: Option<PathBuf>,

    #[arg(short = 'f', long, value_enum, default_value_t = OutputFormat::Puml)]
    pub format: OutputFormat,

    /// Skip extends/implements edges.
    #[arg(long)]
    pub no_inheritance: bool,

    /// Skip field-type association edges.
    #[arg(long)]
    pub no_link_fields: bool,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Puml,
    Json,
}

impl OutputFormat {
    pub fn extension(self) -> &'static str {
        match self {
            OutputFormat::Puml => "puml",
            OutputFormat::Json => "json",
        }
    }
}
