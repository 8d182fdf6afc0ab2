use org_hierarchy_sdk::{EmployeeId, HierarchyBuilder};
use rand::{rngs::StdRng, seq::SliceRandom, SeedableRng};

/// Wide and deep enough to exercise several levels: employee n reports to n / 3
fn company(size: u32) -> Vec<String> {
    (1..=size)
        .map(|n| {
            let manager = if n == 1 {
                String::new()
            } else {
                format!("Employee{}", (n / 3).max(1))
            };
            format!("Employee{},{},{}", n, manager, 100 + n * 7 % 50)
        })
        .collect()
}

fn budgets(lines: &[String]) -> Vec<u64> {
    let hierarchy = HierarchyBuilder::new()
        .build(&lines.join("\n"))
        .expect("company should build");
    (1..=lines.len() as u32)
        .map(|n| hierarchy.salary_budget(EmployeeId::new(n).unwrap()).unwrap())
        .collect()
}

#[test]
fn test_building_twice_gives_same_answers() {
    let lines = company(60);
    let input = lines.join("\n");

    let first = HierarchyBuilder::new().build(&input).unwrap();
    let second = HierarchyBuilder::new().build(&input).unwrap();

    assert_eq!(first.records(), second.records());
    assert_eq!(first.to_tree(), second.to_tree());
    assert_eq!(first.budget_rows(), second.budget_rows());
}

#[test]
fn test_budgets_ignore_line_order() {
    let mut lines = company(60);
    let expected = budgets(&lines);

    let payroll: u64 = (1..=60u32).map(|n| u64::from(100 + n * 7 % 50)).sum();
    assert_eq!(expected[0], payroll);

    let mut rng = StdRng::seed_from_u64(42);
    for _ in 0..20 {
        lines.shuffle(&mut rng);
        assert_eq!(budgets(&lines), expected);
    }
}

#[test]
fn test_direct_reports_follow_line_order() {
    let lines = [
        "Employee1,,10",
        "Employee4,Employee1,10",
        "Employee2,Employee1,10",
        "Employee3,Employee1,10",
    ];
    let hierarchy = HierarchyBuilder::new().build(&lines.join("\n")).unwrap();
    let order: Vec<u32> = hierarchy
        .get_direct_reports(EmployeeId::new(1).unwrap())
        .iter()
        .map(|r| r.id.get())
        .collect();
    assert_eq!(order, vec![4, 2, 3]);
}
