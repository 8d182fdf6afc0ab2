pub mod budget;
pub mod export;
pub mod reports;
pub mod tree;
pub mod validate;

use org_hierarchy_sdk::Hierarchy;
use std::fs;
use std::path::Path;

use crate::config::CliConfig;
use crate::error::{CliError, CliResult};

/// Read a hierarchy file and build it with the configured row format
pub(crate) fn load_hierarchy(config: &CliConfig, file: &Path) -> CliResult<Hierarchy> {
    let text = fs::read_to_string(file).map_err(|e| CliError::read_file(file, e))?;
    Ok(config.builder().build(&text)?)
}
