/*!
# Record Schema

One row of an org hierarchy file:

```text
<employee-id>,<manager-id or empty>,<salary>
Employee1,,400
Employee2,Employee1,350
```

There is no header row and no quoting. Ids are the employee prefix followed by
a positive integer, compared case-insensitively (`employee7` and `EMPLOYEE7`
are the same id).
*/

use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::NonZeroU32;
use std::str::FromStr;

use crate::config::ParserConfig;
use crate::errors::HierarchyError;
use crate::validation::parse_employee_id;

/// Number of columns every row must have
pub const RECORD_FIELD_COUNT: usize = 3;

/// Prefix rendered in front of an id when displaying it
pub const DISPLAY_ID_PREFIX: &str = "Employee";

// ================================================================================================
// Employee Id
// ================================================================================================

/// Positive integer identifying an employee.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EmployeeId(NonZeroU32);

impl EmployeeId {
    /// Returns `None` for zero.
    pub fn new(value: u32) -> Option<Self> {
        NonZeroU32::new(value).map(Self)
    }

    pub fn get(self) -> u32 {
        self.0.get()
    }
}

impl fmt::Display for EmployeeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", DISPLAY_ID_PREFIX, self.0)
    }
}

impl FromStr for EmployeeId {
    type Err = HierarchyError;

    /// Parses a token such as `Employee12` using the default prefix.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_employee_id(s, &ParserConfig::default())
    }
}

impl Serialize for EmployeeId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for EmployeeId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        EmployeeId::from_str(&s).map_err(serde::de::Error::custom)
    }
}

// ================================================================================================
// Record
// ================================================================================================

/// A validated row.
///
/// Records are immutable once parsed. Reporting lines are held by the
/// hierarchy that owns the records, not by the records themselves.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Record {
    /// Unique employee id
    pub id: EmployeeId,

    /// Manager of this employee, `None` only for the CEO
    pub manager_id: Option<EmployeeId>,

    /// Salary, always greater than zero
    pub salary: u32,
}

impl Record {
    pub fn is_ceo(&self) -> bool {
        self.manager_id.is_none()
    }
}

// ================================================================================================
// Budget Report CSV Schema
// ================================================================================================

/// Expected headers for a budget report in exact order
pub const BUDGET_CSV_HEADERS: &[&str] = &[
    "employee",
    "manager",
    "salary",
    "direct_reports",
    "budget",
];

/// One employee's line in a budget report
///
/// **Producer**: `org-hierarchy export`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BudgetRow {
    pub employee: EmployeeId,

    /// Empty for the CEO
    pub manager: Option<EmployeeId>,

    pub salary: u32,

    /// Number of employees reporting directly to this one
    pub direct_reports: usize,

    /// Salary of the employee plus everyone below them
    pub budget: u64,
}

// ================================================================================================
// Tests
// ================================================================================================
