use std::path::PathBuf;

use super::load_hierarchy;
use crate::config::CliConfig;
use crate::error::CliResult;

pub fn execute(config: &CliConfig, file: PathBuf, employee: String) -> CliResult<()> {
    let hierarchy = load_hierarchy(config, &file)?;
    let budget = hierarchy.get_salary_budget(&employee)?;
    println!("{}", budget);
    Ok(())
}
