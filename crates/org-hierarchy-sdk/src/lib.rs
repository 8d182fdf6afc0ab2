/*!
# Org Hierarchy SDK

Builds a validated reporting tree from org hierarchy rows and answers salary
budget queries against it.

```rust
use org_hierarchy_sdk::{EmployeeId, HierarchyBuilder};

let hierarchy = HierarchyBuilder::new()
    .build("Employee1,,400\nEmployee2,Employee1,350\nEmployee3,Employee2,300")
    .unwrap();

assert_eq!(hierarchy.get_salary_budget("Employee2").unwrap(), 650);

let reports = hierarchy.get_direct_reports(EmployeeId::new(1).unwrap());
assert_eq!(reports.len(), 1);
```
*/

mod builder;
mod hierarchy;
mod tree;

pub use builder::HierarchyBuilder;
pub use hierarchy::{Hierarchy, OrgNode};
pub use tree::ReportTree;

// Re-export the row types and errors callers need alongside the builder
pub use org_hierarchy_csvs::{
    BudgetRow, EmployeeId, ErrorKind, HierarchyError, HierarchyResult, ParserConfig, Record,
};
