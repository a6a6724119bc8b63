//! # javatopuml
//!
//! Extracts a structural model — packages, classes, fields, methods,
//! modifiers, and inheritance references — from a tree of Java source files
//! and renders it as PlantUML class diagrams.
//!
//! The extraction is a best-effort textual analysis, not a real Java
//! front-end: malformed or unusual input degrades to placeholders instead of
//! failing.
//!
//! ## Architecture
//!
//! - **cleaner**: strips comments, literals, `throws` clauses and annotations
//! - **scope**: recursive delimiter matching into outside/inside spans
//! - **modifiers**: keyword set peeled off the front of a declaration
//! - **fields** / **methods**: member extraction from flat statement text
//! - **resolve**: fully-qualified-name lookup against the import preamble
//! - **class**: per-file orchestration, recursing into nested types
//! - **package**: directory recursion plus same-package inheritance linking
//! - **files**: package root discovery under `src/main/java`
//! - **puml**: PlantUML rendering of the extracted tree
//! - **cli**: command-line surface

pub mod class;
pub mod cleaner;
pub mod cli;
pub mod fields;
pub mod files;
pub mod methods;
pub mod modifiers;
pub mod package;
pub mod puml;
pub mod resolve;
pub mod scope;
