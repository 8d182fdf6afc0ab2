/*!
# Org Hierarchy CSV Schema & Parsing

This crate owns the **row format** of org hierarchy files and the error
taxonomy shared by everything built on top of it.

## Row Format

One employee per line, three columns, no header and no quoting:

- `employee`: id token, the id prefix followed by a positive integer (`Employee7`)
- `manager`: id token of the manager, empty for the CEO
- `salary`: positive integer

```text
Employee1,,400
Employee2,Employee1,350
Employee3,Employee1,340
```

## Usage

```rust
use org_hierarchy_csvs::{read_records, ErrorKind, HierarchyResult, ParserConfig};

fn example() -> HierarchyResult<()> {
    let config = ParserConfig::default();
    let rows = read_records("Employee1,,400\nEmployee2,Employee1,350", &config)?;
    assert_eq!(rows.len(), 2);

    let err = read_records("Employee1,,2343.435", &config).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidSalary);
    Ok(())
}
# example().unwrap();
```
*/

pub mod config;
pub mod errors;
pub mod schemas;
pub mod validation;

// Re-export main types for convenience
pub use config::{ParserConfig, DEFAULT_DELIMITER, DEFAULT_ID_PREFIX};
pub use errors::{ErrorKind, HierarchyError, HierarchyResult};
pub use schemas::{BudgetRow, EmployeeId, Record, BUDGET_CSV_HEADERS, RECORD_FIELD_COUNT};
pub use validation::{
    parse_employee_id, parse_fields, parse_manager_id, parse_record, parse_salary, read_records,
    read_records_file, records, write_budget_csv, write_budget_csv_file, LineRecord,
};
