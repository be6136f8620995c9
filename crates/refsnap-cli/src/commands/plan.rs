//! Plan command implementation

use anyhow::Result;
use colored::Colorize;
use refsnap_core::{load_manifest, CloneSource};
use std::path::PathBuf;
use tabled::{
    settings::{object::Rows, Color, Modify, Style},
    Table,
};

use crate::output::PlanRow;

/// Parses the manifest and prints what an extract run would do,
/// without any cloning or network access
pub fn cmd_plan(manifest: PathBuf, source: CloneSource) -> Result<()> {
    let references = load_manifest(&manifest)?;

    let rows: Vec<PlanRow> = references
        .iter()
        .map(|r| PlanRow {
            project: r.project.clone(),
            commit: r.sha.clone(),
            clone_url: source.url_for(&r.project),
            output_dir: r.relative_dir().display().to_string(),
        })
        .collect();

    let mut table = Table::new(rows);
    table
        .with(Style::rounded())
        .with(Modify::new(Rows::first()).with(Color::FG_BRIGHT_CYAN));
    println!("{}", table);

    println!(
        "{} {} commits across {} projects",
        "Plan:".bright_cyan().bold(),
        references.len(),
        references
            .iter()
            .map(|r| r.project.as_str())
            .collect::<std::collections::BTreeSet<_>>()
            .len()
    );

    Ok(())
}
