/*!
# Row Parsing & Reading

Turns raw text into [`Record`]s. Each row is checked on its own here; checks
that need the whole set (duplicates, dangling managers, cycles, the CEO) live
in the hierarchy builder.
*/

use crate::{
    config::ParserConfig,
    errors::{HierarchyError, HierarchyResult},
    schemas::{BudgetRow, EmployeeId, Record, RECORD_FIELD_COUNT},
};
use csv::Writer;
use std::fs::{self, File};
use std::io::Write;
use std::path::Path;
use tracing::debug;

/// A parsed record together with the 1-based line it came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineRecord {
    pub line: u64,
    pub record: Record,
}

// ================================================================================================
// Token Parsing
// ================================================================================================

/// Parse an id token such as `Employee12`.
///
/// The token is trimmed and the prefix compared case-insensitively. The rest
/// must be ASCII digits forming a positive integer.
pub fn parse_employee_id(token: &str, config: &ParserConfig) -> HierarchyResult<EmployeeId> {
    parse_id_token(token, &config.id_prefix).ok_or_else(|| HierarchyError::InvalidEmployeeId {
        token: token.to_string(),
        line: None,
    })
}

/// Empty or whitespace-only means "no manager".
pub fn parse_manager_id(
    token: &str,
    config: &ParserConfig,
) -> HierarchyResult<Option<EmployeeId>> {
    if token.trim().is_empty() {
        return Ok(None);
    }
    parse_employee_id(token, config).map(Some)
}

/// Salaries are plain base-10 digits, at least 1. Signs and fractions are rejected.
pub fn parse_salary(token: &str) -> Option<u32> {
    let digits = token.trim();
    if !is_ascii_digits(digits) {
        return None;
    }
    digits.parse::<u32>().ok().filter(|salary| *salary >= 1)
}

fn parse_id_token(token: &str, prefix: &str) -> Option<EmployeeId> {
    let token = token.trim();
    let head = token.get(..prefix.len())?;
    if !head.eq_ignore_ascii_case(prefix) {
        return None;
    }

    let digits = &token[prefix.len()..];
    if !is_ascii_digits(digits) {
        return None;
    }
    digits.parse::<u32>().ok().and_then(EmployeeId::new)
}

fn is_ascii_digits(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

// ================================================================================================
// Row Parsing
// ================================================================================================

/// Parse a single line (without its terminator) into a record.
pub fn parse_record(line: &str, config: &ParserConfig) -> HierarchyResult<Record> {
    let fields: Vec<&str> = line.split(config.delimiter).collect();
    parse_fields(&fields, 1, config)
}

/// Check a row's columns left to right: count, employee id, manager id, salary.
pub fn parse_fields(fields: &[&str], line: u64, config: &ParserConfig) -> HierarchyResult<Record> {
    if fields.len() != RECORD_FIELD_COUNT {
        return Err(HierarchyError::InvalidFormat {
            line,
            found: fields.len(),
        });
    }

    let at_line = |err: HierarchyError| match err {
        HierarchyError::InvalidEmployeeId { token, .. } => HierarchyError::InvalidEmployeeId {
            token,
            line: Some(line),
        },
        other => other,
    };

    let id = parse_employee_id(fields[0], config).map_err(at_line)?;
    let manager_id = parse_manager_id(fields[1], config).map_err(at_line)?;
    let salary = parse_salary(fields[2]).ok_or_else(|| HierarchyError::InvalidSalary {
        token: fields[2].to_string(),
        line,
    })?;

    Ok(Record {
        id,
        manager_id,
        salary,
    })
}

// ================================================================================================
// Reading
// ================================================================================================

/// Iterate over the lines of `input`, parsing each one.
///
/// `\n` and `\r\n` both end a line and a final terminator does not start an
/// empty row. Any other empty line is a row with the wrong column count.
pub fn records<'a>(
    input: &'a str,
    config: &'a ParserConfig,
) -> impl Iterator<Item = HierarchyResult<LineRecord>> + 'a {
    input.lines().zip(1u64..).map(move |(text, line)| {
        let fields: Vec<&str> = text.split(config.delimiter).collect();
        let record = parse_fields(&fields, line, config)?;
        Ok(LineRecord { line, record })
    })
}

/// Parse every row of `input`, stopping at the first bad one.
pub fn read_records(input: &str, config: &ParserConfig) -> HierarchyResult<Vec<LineRecord>> {
    config.validate()?;
    let rows: Vec<LineRecord> = records(input, config).collect::<HierarchyResult<_>>()?;
    debug!(rows = rows.len(), "parsed hierarchy rows");
    Ok(rows)
}

/// Parse every row of a file, stopping at the first bad one.
pub fn read_records_file<P: AsRef<Path>>(
    path: P,
    config: &ParserConfig,
) -> HierarchyResult<Vec<LineRecord>> {
    let path = path.as_ref();
    debug!(path = %path.display(), "reading hierarchy file");
    let input = fs::read_to_string(path)?;
    read_records(&input, config)
}

// ================================================================================================
// CSV Writing
// ================================================================================================

/// Write a budget report with a header row
pub fn write_budget_csv<W: Write>(wtr: W, rows: &[BudgetRow]) -> HierarchyResult<()> {
    let mut wtr = Writer::from_writer(wtr);

    // csv crate writes the headers from the first row
    for row in rows {
        wtr.serialize(row)?;
    }

    wtr.flush()?;
    debug!(rows = rows.len(), "wrote budget report");
    Ok(())
}

/// Write a budget report to a file
pub fn write_budget_csv_file<P: AsRef<Path>>(path: P, rows: &[BudgetRow]) -> HierarchyResult<()> {
    let file = File::create(path)?;
    write_budget_csv(file, rows)
}

// ================================================================================================
// Tests
// ================================================================================================
