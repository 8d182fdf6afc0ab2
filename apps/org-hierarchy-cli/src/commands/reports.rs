use org_hierarchy_csvs::parse_employee_id;
use org_hierarchy_sdk::Record;
use std::path::PathBuf;

use super::load_hierarchy;
use crate::config::CliConfig;
use crate::error::CliResult;

pub fn execute(config: &CliConfig, file: PathBuf, employee: String) -> CliResult<()> {
    let hierarchy = load_hierarchy(config, &file)?;
    let manager = parse_employee_id(&employee, &config.parser)?;

    let reports = hierarchy.get_direct_reports(manager);
    if reports.is_empty() {
        println!("{} has no direct reports", manager);
        return Ok(());
    }

    print!("{}", render_reports(&reports));
    Ok(())
}

fn render_reports(reports: &[&Record]) -> String {
    reports
        .iter()
        .map(|r| format!("{}\t{}\n", r.id, r.salary))
        .collect()
}
