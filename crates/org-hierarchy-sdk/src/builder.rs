/*!
# Hierarchy Builder

Turns raw text into a validated [`Hierarchy`]. The pipeline runs in a fixed
order and the first failure aborts it:

1. Parse every line into a record, rejecting repeated ids as they appear
2. Check that every manager id names a known employee
3. Reject pairs of employees that manage each other
4. Find the single CEO
5. Assemble reporting lines from the CEO down

Nothing is kept from a failed build.
*/

use org_hierarchy_csvs::{
    records, EmployeeId, HierarchyError, HierarchyResult, LineRecord, ParserConfig, Record,
};
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use tracing::{debug, warn};

use crate::hierarchy::Hierarchy;
use crate::tree::assemble_reports;

/// Builds hierarchies from text using one parser configuration
#[derive(Debug, Clone, Default)]
pub struct HierarchyBuilder {
    config: ParserConfig,
}

impl HierarchyBuilder {
    /// Builder with the default row format
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: ParserConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ParserConfig {
        &self.config
    }

    /// Parse, validate and assemble a hierarchy from `input`
    pub fn build(&self, input: &str) -> HierarchyResult<Hierarchy> {
        self.config.validate()?;

        // Step 1: Parse rows, rejecting duplicates as they are added
        let set = RecordSet::collect(records(input, &self.config))?;
        debug!(records = set.records.len(), "parsed hierarchy rows");

        // Step 2: Every manager must be an employee
        set.validate_managers_exist()?;

        let by_manager = set.index_by_manager();

        // Step 3: Two employees must not manage each other
        set.validate_no_circular_references()?;

        // Step 4: Exactly one CEO
        let root = set.find_ceo()?;
        debug!(ceo = %set.records[root].id, "found CEO");

        // Step 5: Reporting lines from the CEO down
        let assembled = assemble_reports(&set.records, &set.index, &by_manager, root)?;
        if assembled.unreachable > 0 {
            warn!(
                unreachable = assembled.unreachable,
                "some employees are not connected to the CEO"
            );
        }
        debug!(
            reachable = set.records.len() - assembled.unreachable,
            "assembled hierarchy"
        );

        Ok(Hierarchy::new(
            self.config.clone(),
            set.records,
            set.index,
            by_manager,
            assembled.reports,
            root,
        ))
    }

    /// Read a file and build a hierarchy from its contents
    pub fn build_file<P: AsRef<Path>>(&self, path: P) -> HierarchyResult<Hierarchy> {
        let input = fs::read_to_string(path.as_ref())?;
        debug!(path = %path.as_ref().display(), bytes = input.len(), "read hierarchy file");
        self.build(&input)
    }
}

// ================================================================================================
// Working Set
// ================================================================================================

/// Records in input order, indexed by id
struct RecordSet {
    records: Vec<Record>,
    index: HashMap<EmployeeId, usize>,
}

impl RecordSet {
    fn collect<I>(rows: I) -> HierarchyResult<Self>
    where
        I: IntoIterator<Item = HierarchyResult<LineRecord>>,
    {
        let mut set = Self {
            records: Vec::new(),
            index: HashMap::new(),
        };

        for row in rows {
            let LineRecord { line, record } = row?;
            if set.index.contains_key(&record.id) {
                return Err(HierarchyError::DuplicateEmployee {
                    id: record.id,
                    line,
                });
            }
            set.index.insert(record.id, set.records.len());
            set.records.push(record);
        }

        Ok(set)
    }

    fn validate_managers_exist(&self) -> HierarchyResult<()> {
        for manager in self.records.iter().filter_map(|r| r.manager_id) {
            if !self.index.contains_key(&manager) {
                return Err(HierarchyError::EmployeeNotFound { id: manager });
            }
        }
        Ok(())
    }

    /// Direct reports of every manager, in input order
    fn index_by_manager(&self) -> HashMap<EmployeeId, Vec<usize>> {
        let mut by_manager: HashMap<EmployeeId, Vec<usize>> = HashMap::new();
        for (position, record) in self.records.iter().enumerate() {
            if let Some(manager) = record.manager_id {
                by_manager.entry(manager).or_default().push(position);
            }
        }
        by_manager
    }

    /// Only catches two-employee loops (and self-management). Longer loops
    /// without a CEO fail as `CeoNotDefined` instead.
    fn validate_no_circular_references(&self) -> HierarchyResult<()> {
        for record in &self.records {
            let Some(manager_id) = record.manager_id else {
                continue;
            };
            // The manager is one of this employee's direct reports exactly
            // when the manager's own manager is this employee.
            let manager = self
                .index
                .get(&manager_id)
                .map(|&position| &self.records[position])
                .ok_or(HierarchyError::EmployeeNotFound { id: manager_id })?;

            if manager.manager_id == Some(record.id) {
                return Err(HierarchyError::CircularReference {
                    employee: record.id,
                    manager: manager_id,
                });
            }
        }
        Ok(())
    }

    fn find_ceo(&self) -> HierarchyResult<usize> {
        let ceos: Vec<usize> = self
            .records
            .iter()
            .enumerate()
            .filter(|(_, r)| r.is_ceo())
            .map(|(position, _)| position)
            .collect();

        match ceos.as_slice() {
            [] => Err(HierarchyError::CeoNotDefined),
            [root] => Ok(*root),
            _ => Err(HierarchyError::MultipleCeosDefined {
                ids: ceos.iter().map(|&p| self.records[p].id).collect(),
            }),
        }
    }
}

// ================================================================================================
// Tests
// ================================================================================================
