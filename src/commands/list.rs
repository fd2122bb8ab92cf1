//! List command — show the software catalog.

use anyhow::{Context, Result};

use crate::domain::catalog::Catalog;
use crate::output::OutputContext;

/// Print the catalog, numbered the same way the interactive chooser
/// numbers it.
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub fn run(ctx: &OutputContext, json_mode: bool) -> Result<()> {
    let catalog = Catalog::default();

    if json_mode {
        let entries: Vec<serde_json::Value> = catalog
            .entries()
            .map(|(name, package)| serde_json::json!({ "name": name, "package": package }))
            .collect();
        let obj = serde_json::json!({ "software": entries });
        println!(
            "{}",
            serde_json::to_string_pretty(&obj).context("JSON serialization failed")?
        );
        return Ok(());
    }

    ctx.header("Available software:");
    for (i, (name, package)) in catalog.entries().enumerate() {
        if name == package {
            println!("  {}. {name}", i + 1);
        } else {
            println!("  {}. {name} ({package})", i + 1);
        }
    }
    Ok(())
}
