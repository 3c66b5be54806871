//! Plain-text rendering keyed on the outcome's shape.

use std::fmt::Write;

use crate::models::employee::DirectoryRecord;
use crate::models::hr::{HierarchyRecord, HrRecord, SalaryRecord, ScheduleRecord};
use crate::models::routing::QueryType;
use crate::routing::comparison::ComparisonResult;
use crate::routing::orchestrator::MergedResult;
use crate::routing::QueryOutcome;

pub const NO_RESULTS: &str = "No results found.";

pub fn render(outcome: &QueryOutcome) -> String {
    if let Some(error) = outcome.error() {
        return format!("Error: {error}");
    }
    if outcome.is_empty() {
        return NO_RESULTS.to_string();
    }

    match outcome {
        QueryOutcome::Merged(merged) => render_merged(merged),
        QueryOutcome::Comparison(result) => render_comparison(result),
        QueryOutcome::Employees { results } => {
            let mut out = String::from("Results:\n");
            for employee in results {
                let _ = writeln!(out, "  {}", employee_line(employee));
            }
            out
        }
        QueryOutcome::Records { results, .. } => {
            let mut out = String::from("Results:\n");
            for record in results {
                let _ = writeln!(out, "  {}", record_line(record));
            }
            out
        }
        QueryOutcome::Failed { .. } => NO_RESULTS.to_string(),
    }
}

fn employee_line(e: &DirectoryRecord) -> String {
    format!("{} (ID: {}) - {} from {}", e.name, e.id, e.job_role, e.country)
}

fn record_line(record: &HrRecord) -> String {
    match record {
        HrRecord::Salary(s) => format!(
            "Employee {}: {} {} (Bonus: {})",
            s.employee_id,
            money(s.base_salary),
            s.currency,
            yes_no(s.bonus_eligible)
        ),
        HrRecord::Hierarchy(h) => format!(
            "{} (Level: {}, Reports to: {})",
            h.job_role,
            h.level,
            h.reports_to.as_deref().unwrap_or("None")
        ),
        HrRecord::Schedule(s) => format!(
            "Employee {}: {} {}-{} {} ({})",
            s.employee_id,
            s.work_days.join(", "),
            s.start_time,
            s.end_time,
            s.timezone,
            s.shift_type
        ),
    }
}

fn render_merged(merged: &MergedResult) -> String {
    let e = &merged.employee_info;
    let mut out = format!(
        "Employee: {} (ID: {})\nCountry: {}\nJob Role: {}\n",
        e.name, e.id, e.country, e.job_role
    );
    if merged.hr_info.is_empty() {
        let _ = write!(out, "\nNo {} records found.\n", merged.query_type);
    }
    for record in &merged.hr_info {
        out.push('\n');
        match record {
            HrRecord::Salary(s) => salary_block(&mut out, s),
            HrRecord::Hierarchy(h) => hierarchy_block(&mut out, h),
            HrRecord::Schedule(s) => schedule_block(&mut out, s),
        }
    }
    out
}

fn salary_block(out: &mut String, s: &SalaryRecord) {
    let _ = writeln!(out, "Salary Information:");
    let _ = writeln!(out, "  Base Salary: {} {}", money(s.base_salary), s.currency);
    let _ = writeln!(out, "  Bonus Eligible: {}", yes_no(s.bonus_eligible));
}

fn hierarchy_block(out: &mut String, h: &HierarchyRecord) {
    let _ = writeln!(out, "Hierarchy Information:");
    let _ = writeln!(out, "  Level: {}", h.level);
    let _ = writeln!(
        out,
        "  Reports To: {}",
        h.reports_to.as_deref().unwrap_or("None")
    );
}

fn schedule_block(out: &mut String, s: &ScheduleRecord) {
    let _ = writeln!(out, "Schedule Information:");
    let _ = writeln!(out, "  Work Days: {}", s.work_days.join(", "));
    let _ = writeln!(out, "  Hours: {} - {}", s.start_time, s.end_time);
    let _ = writeln!(out, "  Timezone: {}", s.timezone);
    let _ = writeln!(out, "  Shift Type: {}", s.shift_type);
}

fn render_comparison(result: &ComparisonResult) -> String {
    let label = match result.comparison {
        QueryType::HighestSalary => "Highest salary",
        QueryType::LowestSalary => "Lowest salary",
        QueryType::HighestRole => "Highest role",
        QueryType::LowestRole => "Lowest role",
        _ => "Result",
    };
    let detail = match (&result.salary, result.level) {
        (Some(s), _) => format!("{} {}", money(s.base_salary), s.currency),
        (None, Some(level)) => format!("{}, level {level}", result.employee.job_role),
        (None, None) => result.employee.job_role.clone(),
    };
    format!(
        "{label}: {} (ID: {}) - {detail}\nCompared {} employees.\n",
        result.employee.name, result.employee.id, result.considered
    )
}

fn money(amount: f64) -> String {
    if amount.fract() == 0.0 {
        format!("{amount:.0}")
    } else {
        format!("{amount:.2}")
    }
}

fn yes_no(flag: bool) -> &'static str {
    if flag {
        "Yes"
    } else {
        "No"
    }
}
