//! commands command - List registered definitions

use anyhow::Result;

use crate::commands::registry;

/// Print every registered definition with its description.
pub fn list() -> Result<()> {
    let width = registry().iter().map(|d| d.name.len()).max().unwrap_or(0);
    for def in registry() {
        println!("{:<width$}  {}", def.name, def.about, width = width);
    }
    Ok(())
}
