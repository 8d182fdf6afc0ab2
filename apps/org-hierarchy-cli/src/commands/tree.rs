use org_hierarchy_sdk::{Hierarchy, OrgNode};
use std::path::PathBuf;

use super::load_hierarchy;
use crate::config::CliConfig;
use crate::error::{CliError, CliResult};

/// Deepest tree `--json` will serialize; serde_json recurses once per level
pub const MAX_JSON_DEPTH: usize = 512;

pub fn execute(config: &CliConfig, file: PathBuf, json: bool) -> CliResult<()> {
    let hierarchy = load_hierarchy(config, &file)?;

    if json {
        println!("{}", render_json(&hierarchy)?);
    } else {
        print!("{}", render_outline(&hierarchy));
    }

    Ok(())
}

fn render_json(hierarchy: &Hierarchy) -> CliResult<String> {
    let tree = hierarchy.to_tree();
    let depth = tree.depth();
    if depth > MAX_JSON_DEPTH {
        return Err(CliError::TreeTooDeep {
            depth,
            max: MAX_JSON_DEPTH,
        });
    }
    Ok(serde_json::to_string_pretty(&tree)?)
}

/// One line per employee, indented two spaces per level, with salary and subtree budget
fn render_outline(hierarchy: &Hierarchy) -> String {
    let budgets = hierarchy.salary_budgets();
    let mut out = String::new();
    let mut stack: Vec<(OrgNode<'_>, usize)> = vec![(hierarchy.root(), 0)];

    while let Some((node, depth)) = stack.pop() {
        let record = node.record();
        out.push_str(&format!(
            "{:indent$}{} (salary {}, budget {})\n",
            "",
            record.id,
            record.salary,
            budgets[node.index()],
            indent = depth * 2
        ));

        let children: Vec<_> = node.reports().collect();
        stack.extend(children.into_iter().rev().map(|child| (child, depth + 1)));
    }

    out
}
