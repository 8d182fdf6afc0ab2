use org_hierarchy_csvs::{write_budget_csv, write_budget_csv_file};
use std::io;
use std::path::PathBuf;
use tracing::info;

use super::load_hierarchy;
use crate::config::CliConfig;
use crate::error::CliResult;

pub fn execute(config: &CliConfig, file: PathBuf, output: Option<PathBuf>) -> CliResult<()> {
    let hierarchy = load_hierarchy(config, &file)?;
    let rows = hierarchy.budget_rows();

    match output {
        Some(path) => {
            write_budget_csv_file(&path, &rows)?;
            info!(rows = rows.len(), path = %path.display(), "wrote budget report");
            println!("✅ Wrote {} rows to {}", rows.len(), path.display());
        }
        None => write_budget_csv(io::stdout().lock(), &rows)?,
    }

    Ok(())
}
