use std::path::PathBuf;

use super::load_hierarchy;
use crate::config::CliConfig;
use crate::error::CliResult;

pub fn execute(config: &CliConfig, file: PathBuf) -> CliResult<()> {
    let hierarchy = load_hierarchy(config, &file)?;
    let root = hierarchy.root();

    println!("✅ {} is valid", file.display());
    println!("   Employees: {}", hierarchy.len());
    println!("   CEO: {}", root.id());
    println!("   Direct reports of CEO: {}", root.reports().count());
    println!("   Total salary budget: {}", root.salary_budget());

    Ok(())
}
