use org_hierarchy_csvs::{
    parse_employee_id, BudgetRow, EmployeeId, HierarchyError, HierarchyResult, ParserConfig,
    Record,
};
use std::collections::HashMap;

use crate::tree::{build_report_tree, subtree_budgets, subtree_salary, ReportTree};

/// A validated org hierarchy with a single CEO.
///
/// Built by [`HierarchyBuilder`](crate::HierarchyBuilder) and read-only
/// afterwards, so it can be shared between threads freely.
#[derive(Debug, Clone)]
pub struct Hierarchy {
    config: ParserConfig,
    /// Records in input order
    records: Vec<Record>,
    index: HashMap<EmployeeId, usize>,
    /// Everyone naming a given manager, whether or not they hang off the CEO
    by_manager: HashMap<EmployeeId, Vec<usize>>,
    /// Assembled tree
    reports: Vec<Vec<usize>>,
    root: usize,
}

impl Hierarchy {
    pub(crate) fn new(
        config: ParserConfig,
        records: Vec<Record>,
        index: HashMap<EmployeeId, usize>,
        by_manager: HashMap<EmployeeId, Vec<usize>>,
        reports: Vec<Vec<usize>>,
        root: usize,
    ) -> Self {
        Self {
            config,
            records,
            index,
            by_manager,
            reports,
            root,
        }
    }

    /// Records whose manager is `manager_id`, in input order.
    ///
    /// Unknown ids simply have no reports.
    pub fn get_direct_reports(&self, manager_id: EmployeeId) -> Vec<&Record> {
        self.by_manager
            .get(&manager_id)
            .map(|positions| positions.iter().map(|&p| &self.records[p]).collect())
            .unwrap_or_default()
    }

    /// Total salary of the employee named by `employee` and everyone reporting
    /// to them, directly or not.
    pub fn get_salary_budget(&self, employee: &str) -> HierarchyResult<u64> {
        let id = parse_employee_id(employee, &self.config)?;
        self.salary_budget(id)
    }

    /// Same as [`get_salary_budget`](Self::get_salary_budget) for an already parsed id
    pub fn salary_budget(&self, id: EmployeeId) -> HierarchyResult<u64> {
        let position = self.position(id)?;
        Ok(subtree_salary(&self.records, &self.reports, position))
    }

    pub fn ceo(&self) -> &Record {
        &self.records[self.root]
    }

    pub fn root(&self) -> OrgNode<'_> {
        OrgNode {
            hierarchy: self,
            position: self.root,
        }
    }

    pub fn get(&self, id: EmployeeId) -> Option<&Record> {
        self.index.get(&id).map(|&p| &self.records[p])
    }

    pub fn node(&self, id: EmployeeId) -> Option<OrgNode<'_>> {
        self.index.get(&id).map(|&position| OrgNode {
            hierarchy: self,
            position,
        })
    }

    /// All records in input order
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Always false: a hierarchy has at least its CEO
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Owned copy of the whole tree, CEO first
    pub fn to_tree(&self) -> ReportTree {
        build_report_tree(&self.records, &self.reports, self.root)
    }

    /// Salary budget of every employee in one pass, indexed like [`records`](Self::records)
    pub fn salary_budgets(&self) -> Vec<u64> {
        subtree_budgets(&self.records, &self.reports, self.root)
    }

    /// Budget report line for every employee, in input order
    pub fn budget_rows(&self) -> Vec<BudgetRow> {
        let budgets = self.salary_budgets();
        self.records
            .iter()
            .zip(budgets)
            .enumerate()
            .map(|(position, (record, budget))| BudgetRow {
                employee: record.id,
                manager: record.manager_id,
                salary: record.salary,
                direct_reports: self.reports[position].len(),
                budget,
            })
            .collect()
    }

    fn position(&self, id: EmployeeId) -> HierarchyResult<usize> {
        self.index
            .get(&id)
            .copied()
            .ok_or(HierarchyError::EmployeeNotFound { id })
    }
}

/// Borrowed view of one employee inside a [`Hierarchy`]
#[derive(Debug, Clone, Copy)]
pub struct OrgNode<'a> {
    hierarchy: &'a Hierarchy,
    position: usize,
}

impl<'a> OrgNode<'a> {
    pub fn record(&self) -> &'a Record {
        &self.hierarchy.records[self.position]
    }

    pub fn id(&self) -> EmployeeId {
        self.record().id
    }

    /// Position of this employee in [`Hierarchy::records`]
    pub fn index(&self) -> usize {
        self.position
    }

    /// Direct reports in the assembled tree, in input order
    pub fn reports(&self) -> impl Iterator<Item = OrgNode<'a>> + 'a {
        let hierarchy = self.hierarchy;
        hierarchy.reports[self.position]
            .iter()
            .map(move |&position| OrgNode {
                hierarchy,
                position,
            })
    }

    pub fn is_leaf(&self) -> bool {
        self.hierarchy.reports[self.position].is_empty()
    }

    pub fn salary_budget(&self) -> u64 {
        subtree_salary(
            &self.hierarchy.records,
            &self.hierarchy.reports,
            self.position,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::HierarchyBuilder;
    use org_hierarchy_csvs::ErrorKind;

    const MIXED: &str = "Employee1,,250\n\
                         Employee2,Employee1,100\n\
                         Employee4,Employee2,130\n\
                         Employee5,Employee1,130\n\
                         Employee6,Employee2,130\n\
                         Employee7,Employee1,130";

    fn id(n: u32) -> EmployeeId {
        EmployeeId::new(n).unwrap()
    }

    fn ids(records: &[&Record]) -> Vec<u32> {
        records.iter().map(|r| r.id.get()).collect()
    }

    #[test]
    fn test_direct_reports_in_input_order() {
        let hierarchy = HierarchyBuilder::new().build(MIXED).unwrap();
        assert_eq!(ids(&hierarchy.get_direct_reports(id(1))), vec![2, 5, 7]);
        assert_eq!(ids(&hierarchy.get_direct_reports(id(2))), vec![4, 6]);
        assert!(hierarchy.get_direct_reports(id(7)).is_empty());
        assert!(hierarchy.get_direct_reports(id(999)).is_empty());
    }

    #[test]
    fn test_salary_budget_errors() {
        let hierarchy = HierarchyBuilder::new().build(MIXED).unwrap();
        assert_eq!(
            hierarchy.get_salary_budget("Employee34883").unwrap_err().kind(),
            ErrorKind::EmployeeNotFound
        );
        assert_eq!(
            hierarchy.get_salary_budget("Boss").unwrap_err().kind(),
            ErrorKind::InvalidEmployeeId
        );
        assert_eq!(hierarchy.get_salary_budget(" employee2 ").unwrap(), 360);
    }

    #[test]
    fn test_tree_views() {
        let hierarchy = HierarchyBuilder::new().build(MIXED).unwrap();
        assert_eq!(hierarchy.ceo().id, id(1));
        assert_eq!(hierarchy.len(), 6);
        assert!(!hierarchy.is_empty());

        let root = hierarchy.root();
        let top: Vec<u32> = root.reports().map(|n| n.id().get()).collect();
        assert_eq!(top, vec![2, 5, 7]);
        assert_eq!(root.salary_budget(), 870);

        let manager = hierarchy.node(id(2)).unwrap();
        assert!(!manager.is_leaf());
        assert_eq!(manager.record().salary, 100);
        assert!(hierarchy.node(id(3)).is_none());
        assert!(hierarchy.get(id(6)).is_some());
    }

    #[test]
    fn test_to_tree_serializes() {
        let hierarchy = HierarchyBuilder::new()
            .build("Employee1,,10\nEmployee2,Employee1,5")
            .unwrap();
        let json = serde_json::to_string(&hierarchy.to_tree()).unwrap();
        assert_eq!(
            json,
            r#"{"id":"Employee1","manager_id":null,"salary":10,"reports":[{"id":"Employee2","manager_id":"Employee1","salary":5,"reports":[]}]}"#
        );
    }

    #[test]
    fn test_salary_budgets_match_single_queries() {
        let hierarchy = HierarchyBuilder::new().build(MIXED).unwrap();
        let budgets = hierarchy.salary_budgets();
        assert_eq!(budgets, vec![870, 360, 130, 130, 130, 130]);

        for record in hierarchy.records() {
            let node = hierarchy.node(record.id).unwrap();
            assert_eq!(budgets[node.index()], node.salary_budget());
        }
    }

    #[test]
    fn test_deep_chain_to_tree() {
        let depth = 200_000u32;
        let input: String = (1..=depth)
            .map(|n| match n {
                1 => "Employee1,,1\n".to_string(),
                _ => format!("Employee{},Employee{},1\n", n, n - 1),
            })
            .collect();

        let hierarchy = HierarchyBuilder::new().build(&input).unwrap();
        assert_eq!(hierarchy.get_salary_budget("Employee1").unwrap(), u64::from(depth));

        let tree = hierarchy.to_tree();
        assert_eq!(tree.size(), depth as usize);
        assert_eq!(tree.depth(), depth as usize);
        drop(tree);
    }

    #[test]
    fn test_budget_rows() {
        let hierarchy = HierarchyBuilder::new().build(MIXED).unwrap();
        let rows = hierarchy.budget_rows();
        assert_eq!(rows.len(), 6);
        assert_eq!(rows[0].budget, 870);
        assert_eq!(rows[0].direct_reports, 3);
        assert_eq!(rows[1].employee, id(2));
        assert_eq!(rows[1].budget, 360);
        assert_eq!(rows[5].budget, 130);
    }

    #[test]
    fn test_detached_loop_keeps_own_salary() {
        let hierarchy = HierarchyBuilder::new()
            .build(
                "Employee1,,100\n\
                 Employee2,Employee4,1\n\
                 Employee3,Employee2,2\n\
                 Employee4,Employee3,4",
            )
            .unwrap();

        assert_eq!(hierarchy.get_salary_budget("Employee1").unwrap(), 100);
        assert_eq!(hierarchy.get_salary_budget("Employee2").unwrap(), 1);
        // Lookup by manager id still sees the loop
        assert_eq!(ids(&hierarchy.get_direct_reports(id(2))), vec![3]);
        assert!(hierarchy.node(id(2)).unwrap().is_leaf());
    }

    #[test]
    fn test_hierarchy_is_shareable() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Hierarchy>();

        let hierarchy = HierarchyBuilder::new().build(MIXED).unwrap();
        std::thread::scope(|scope| {
            for _ in 0..4 {
                scope.spawn(|| {
                    assert_eq!(hierarchy.get_salary_budget("Employee1").unwrap(), 870);
                    assert_eq!(hierarchy.get_direct_reports(id(1)).len(), 3);
                });
            }
        });
    }
}
