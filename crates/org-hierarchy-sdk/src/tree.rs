/*!
# Reporting Tree

The tree is stored as an arena: records stay in input order and every record
owns the positions of its direct reports. All walks use an explicit stack, so
depth is bounded by memory rather than the call stack.
*/

use org_hierarchy_csvs::{EmployeeId, HierarchyError, HierarchyResult, Record};
use serde::Serialize;
use std::collections::HashMap;

/// Output of [`assemble_reports`]
pub(crate) struct AssembledReports {
    /// Direct reports of every record, empty for anyone not reached from the CEO
    pub reports: Vec<Vec<usize>>,

    /// Records that could not be reached from the CEO
    pub unreachable: usize,
}

/// Fill in reporting lines, starting at `root` and descending.
///
/// Each visited record's manager is re-checked against the index before its
/// reports are assigned.
pub(crate) fn assemble_reports(
    records: &[Record],
    index: &HashMap<EmployeeId, usize>,
    by_manager: &HashMap<EmployeeId, Vec<usize>>,
    root: usize,
) -> HierarchyResult<AssembledReports> {
    let mut reports = vec![Vec::new(); records.len()];
    let mut visited = 0;
    let mut stack = vec![root];

    while let Some(node) = stack.pop() {
        let record = &records[node];
        if let Some(manager) = record.manager_id {
            if !index.contains_key(&manager) {
                return Err(HierarchyError::EmployeeNotFound { id: manager });
            }
        }

        let direct = by_manager.get(&record.id).cloned().unwrap_or_default();
        stack.extend(direct.iter().rev());
        reports[node] = direct;
        visited += 1;
    }

    Ok(AssembledReports {
        reports,
        unreachable: records.len() - visited,
    })
}

/// `start` followed by everyone below it, depth-first in input order
pub(crate) fn preorder(reports: &[Vec<usize>], start: usize) -> Vec<usize> {
    let mut order = Vec::new();
    let mut stack = vec![start];
    while let Some(node) = stack.pop() {
        order.push(node);
        stack.extend(reports[node].iter().rev());
    }
    order
}

/// Salary of `start` plus every salary below it
pub(crate) fn subtree_salary(records: &[Record], reports: &[Vec<usize>], start: usize) -> u64 {
    preorder(reports, start)
        .into_iter()
        .map(|node| u64::from(records[node].salary))
        .sum()
}

/// Subtree salary of every record in one bottom-up pass.
///
/// Records outside the CEO's tree have no reports, so their budget is their own salary.
pub(crate) fn subtree_budgets(
    records: &[Record],
    reports: &[Vec<usize>],
    root: usize,
) -> Vec<u64> {
    let mut budgets: Vec<u64> = records.iter().map(|r| u64::from(r.salary)).collect();
    for node in preorder(reports, root).into_iter().rev() {
        let below: u64 = reports[node].iter().map(|&child| budgets[child]).sum();
        budgets[node] += below;
    }
    budgets
}

// ================================================================================================
// Owned Tree
// ================================================================================================

/// Owned copy of a subtree, for serialization.
///
/// Dropping is iterative, so a tree of any depth can be built and discarded.
/// `Serialize` and `Debug` still recurse once per level; check [`depth`](Self::depth)
/// before handing a very deep tree to a serializer.
#[derive(Debug, Serialize)]
pub struct ReportTree {
    pub id: EmployeeId,
    pub manager_id: Option<EmployeeId>,
    pub salary: u32,
    pub reports: Vec<ReportTree>,
}

impl ReportTree {
    /// Number of employees in this subtree, including its top
    pub fn size(&self) -> usize {
        let mut count = 0;
        let mut stack = vec![self];
        while let Some(node) = stack.pop() {
            count += 1;
            stack.extend(node.reports.iter());
        }
        count
    }

    /// Number of levels, 1 for a lone employee
    pub fn depth(&self) -> usize {
        let mut deepest = 0;
        let mut stack = vec![(self, 1)];
        while let Some((node, level)) = stack.pop() {
            deepest = deepest.max(level);
            stack.extend(node.reports.iter().map(|child| (child, level + 1)));
        }
        deepest
    }
}

impl PartialEq for ReportTree {
    fn eq(&self, other: &Self) -> bool {
        let mut stack = vec![(self, other)];
        while let Some((a, b)) = stack.pop() {
            if a.id != b.id
                || a.manager_id != b.manager_id
                || a.salary != b.salary
                || a.reports.len() != b.reports.len()
            {
                return false;
            }
            stack.extend(a.reports.iter().zip(b.reports.iter()));
        }
        true
    }
}

impl Eq for ReportTree {}

impl Drop for ReportTree {
    fn drop(&mut self) {
        let mut stack = std::mem::take(&mut self.reports);
        while let Some(mut node) = stack.pop() {
            stack.append(&mut node.reports);
        }
    }
}

pub(crate) fn build_report_tree(
    records: &[Record],
    reports: &[Vec<usize>],
    start: usize,
) -> ReportTree {
    let order = preorder(reports, start);
    let mut built: Vec<Option<ReportTree>> = (0..records.len()).map(|_| None).collect();

    // Children come after their parent in preorder, so walking it backwards
    // finishes every subtree before the node above it needs it.
    for &node in order.iter().skip(1).rev() {
        let subtree = tree_node(records, reports, node, &mut built);
        built[node] = Some(subtree);
    }
    tree_node(records, reports, start, &mut built)
}

fn tree_node(
    records: &[Record],
    reports: &[Vec<usize>],
    node: usize,
    built: &mut [Option<ReportTree>],
) -> ReportTree {
    let record = &records[node];
    ReportTree {
        id: record.id,
        manager_id: record.manager_id,
        salary: record.salary,
        reports: reports[node]
            .iter()
            .filter_map(|&child| built[child].take())
            .collect(),
    }
}
