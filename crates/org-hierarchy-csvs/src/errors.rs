use thiserror::Error;

use crate::schemas::EmployeeId;

pub type HierarchyResult<T> = Result<T, HierarchyError>;

/// Everything that can go wrong while parsing, validating or querying a hierarchy.
///
/// The first eight variants form the validation taxonomy; the rest are
/// ambient failures from I/O, the CSV reader and configuration.
#[derive(Error, Debug)]
pub enum HierarchyError {
    #[error(
        "Invalid number of columns on line {line}: only 3 columns per row were expected, found {found}"
    )]
    InvalidFormat { line: u64, found: usize },

    #[error(
        "Invalid Employee Id '{token}': input must be the employee prefix followed by an integer greater than zero"
    )]
    InvalidEmployeeId { token: String, line: Option<u64> },

    #[error("Invalid Salary '{token}' on line {line}: input must be an integer greater than zero")]
    InvalidSalary { token: String, line: u64 },

    #[error("{id} has appeared more than once in the list (line {line})")]
    DuplicateEmployee { id: EmployeeId, line: u64 },

    #[error("The employee/manager {id} does not exist in the list of employees")]
    EmployeeNotFound { id: EmployeeId },

    #[error("CEO is not defined: exactly one employee must have no manager")]
    CeoNotDefined,

    #[error("Multiple CEOs have been defined where only one was expected: {}", display_ids(.ids))]
    MultipleCeosDefined { ids: Vec<EmployeeId> },

    #[error("Circular Reference Error: {employee} and {manager} cannot be each other's manager")]
    CircularReference {
        employee: EmployeeId,
        manager: EmployeeId,
    },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Fieldless discriminant of [`HierarchyError`], for matching on the kind alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    InvalidFormat,
    InvalidEmployeeId,
    InvalidSalary,
    DuplicateEmployee,
    EmployeeNotFound,
    CeoNotDefined,
    MultipleCeosDefined,
    CircularReference,
    Csv,
    Io,
    InvalidConfig,
}

impl HierarchyError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidFormat { .. } => ErrorKind::InvalidFormat,
            Self::InvalidEmployeeId { .. } => ErrorKind::InvalidEmployeeId,
            Self::InvalidSalary { .. } => ErrorKind::InvalidSalary,
            Self::DuplicateEmployee { .. } => ErrorKind::DuplicateEmployee,
            Self::EmployeeNotFound { .. } => ErrorKind::EmployeeNotFound,
            Self::CeoNotDefined => ErrorKind::CeoNotDefined,
            Self::MultipleCeosDefined { .. } => ErrorKind::MultipleCeosDefined,
            Self::CircularReference { .. } => ErrorKind::CircularReference,
            Self::Csv(_) => ErrorKind::Csv,
            Self::Io(_) => ErrorKind::Io,
            Self::InvalidConfig(_) => ErrorKind::InvalidConfig,
        }
    }

    /// 1-based input line the error was raised for, when it belongs to one line.
    pub fn line(&self) -> Option<u64> {
        match self {
            Self::InvalidFormat { line, .. }
            | Self::InvalidSalary { line, .. }
            | Self::DuplicateEmployee { line, .. } => Some(*line),
            Self::InvalidEmployeeId { line, .. } => *line,
            _ => None,
        }
    }
}

fn display_ids(ids: &[EmployeeId]) -> String {
    ids.iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_and_line() {
        let err = HierarchyError::InvalidSalary {
            token: "0".to_string(),
            line: 4,
        };
        assert_eq!(err.kind(), ErrorKind::InvalidSalary);
        assert_eq!(err.line(), Some(4));

        let err = HierarchyError::CeoNotDefined;
        assert_eq!(err.kind(), ErrorKind::CeoNotDefined);
        assert_eq!(err.line(), None);
    }

    #[test]
    fn test_messages_name_the_offenders() {
        let err = HierarchyError::MultipleCeosDefined {
            ids: vec![EmployeeId::new(1).unwrap(), EmployeeId::new(2).unwrap()],
        };
        assert!(err.to_string().ends_with("Employee1, Employee2"));

        let err = HierarchyError::CircularReference {
            employee: EmployeeId::new(3).unwrap(),
            manager: EmployeeId::new(4).unwrap(),
        };
        assert!(err.to_string().contains("Employee3 and Employee4"));
    }
}
