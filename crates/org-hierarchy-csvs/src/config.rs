use serde::{Deserialize, Serialize};

use crate::errors::{HierarchyError, HierarchyResult};

/// Default id prefix, matched case-insensitively
pub const DEFAULT_ID_PREFIX: &str = "employee";

/// Default column separator
pub const DEFAULT_DELIMITER: char = ',';

/// Settings for reading hierarchy rows
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParserConfig {
    /// Text that must precede the digits of every employee and manager id
    pub id_prefix: String,

    /// Column separator
    pub delimiter: char,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            id_prefix: DEFAULT_ID_PREFIX.to_string(),
            delimiter: DEFAULT_DELIMITER,
        }
    }
}

impl ParserConfig {
    pub fn validate(&self) -> HierarchyResult<()> {
        if self.id_prefix.is_empty() || !self.id_prefix.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(HierarchyError::InvalidConfig(format!(
                "id_prefix must be non-empty ASCII letters, found '{}'",
                self.id_prefix
            )));
        }

        let d = self.delimiter;
        if !d.is_ascii() || d.is_ascii_alphanumeric() || d.is_ascii_whitespace() {
            return Err(HierarchyError::InvalidConfig(format!(
                "delimiter must be an ASCII punctuation character, found {:?}",
                d
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ParserConfig::default();
        assert_eq!(config.id_prefix, "employee");
        assert_eq!(config.delimiter, ',');
        config.validate().unwrap();
    }

    #[test]
    fn test_invalid_configs() {
        let bad_prefix = ParserConfig {
            id_prefix: "emp-".to_string(),
            ..Default::default()
        };
        assert!(bad_prefix.validate().is_err());

        let empty_prefix = ParserConfig {
            id_prefix: String::new(),
            ..Default::default()
        };
        assert!(empty_prefix.validate().is_err());

        for delimiter in ['a', '7', ' ', '\t', 'é'] {
            let config = ParserConfig {
                delimiter,
                ..Default::default()
            };
            assert!(config.validate().is_err(), "{:?} accepted", delimiter);
        }

        let semicolon = ParserConfig {
            delimiter: ';',
            ..Default::default()
        };
        semicolon.validate().unwrap();
    }
}
