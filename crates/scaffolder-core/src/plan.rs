//! Dry-run listing of a resolved matrix

use crate::matrix::{FileTemplate, Selection};
use anyhow::{Context, Result};
use colored::Colorize;
use serde::Serialize;

#[derive(Debug, Serialize)]
struct Plan<'a> {
    selection: &'a Selection,
    files: &'a [FileTemplate],
}

/// Serialize the selection and its resolved files as YAML
pub fn to_yaml(selection: &Selection) -> Result<String> {
    let matrix = selection.resolve();
    let plan = Plan {
        selection,
        files: matrix.files(),
    };
    serde_yaml::to_string(&plan).context("Failed to serialize plan")
}

/// Print the files a selection would generate, without writing anything
pub fn print_plan(selection: &Selection) {
    let matrix = selection.resolve();

    println!(
        "{}",
        format!(
            "{} / {} / {} / {}",
            selection.language, selection.framework, selection.project_type, selection.complexity
        )
        .cyan()
        .bold()
    );
    println!();

    for file in &matrix {
        println!(
            "  {} {} ({} bytes)",
            "->".blue(),
            file.path(),
            file.content().len()
        );
    }

    println!();
    println!("{} {} file(s)", "Would create".green().bold(), matrix.len());
}
