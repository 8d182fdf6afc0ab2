use org_hierarchy_csvs::ParserConfig;
use org_hierarchy_sdk::HierarchyBuilder;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::info;

use crate::error::{CliError, CliResult};

/// Configuration file structure
///
/// ```yaml
/// parser:
///   id_prefix: staff
///   delimiter: ";"
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CliConfig {
    /// Row format of hierarchy files
    #[serde(default)]
    pub parser: ParserConfig,
}

impl CliConfig {
    pub fn builder(&self) -> HierarchyBuilder {
        HierarchyBuilder::with_config(self.parser.clone())
    }
}

/// Load the config file if one was given, otherwise use defaults
pub fn load(path: Option<&Path>) -> CliResult<CliConfig> {
    let Some(path) = path else {
        return Ok(CliConfig::default());
    };

    let text = fs::read_to_string(path).map_err(|e| CliError::read_file(path, e))?;
    let config = parse(&text)?;
    info!(path = %path.display(), ?config, "loaded config");
    Ok(config)
}

fn parse(text: &str) -> CliResult<CliConfig> {
    let config: CliConfig = serde_yaml::from_str(text)?;
    config.parser.validate()?;
    Ok(config)
}
