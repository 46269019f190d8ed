//! Pure aggregation over employee lists.

use crate::models::Employee;

/// Number of names returned by the top earners query
pub const TOP_EARNERS_LIMIT: usize = 10;

/// Employees whose name contains `needle`, ignoring case. Order is preserved.
pub fn filter_by_name(employees: &[Employee], needle: &str) -> Vec<Employee> {
    let needle = needle.to_lowercase();
    employees
        .iter()
        .filter(|e| e.name.to_lowercase().contains(&needle))
        .cloned()
        .collect()
}

/// Highest salary in the list, or 0 when the list is empty.
pub fn highest_salary(employees: &[Employee]) -> u32 {
    employees.iter().map(|e| e.salary).max().unwrap_or(0)
}

/// Names of the `limit` best paid employees, highest salary first.
///
/// Equal salaries keep their input order.
pub fn top_earner_names(employees: &[Employee], limit: usize) -> Vec<String> {
    let mut ranked: Vec<&Employee> = employees.iter().collect();
    // sort_by is stable
    ranked.sort_by(|a, b| b.salary.cmp(&a.salary));
    ranked
        .into_iter()
        .take(limit)
        .map(|e| e.name.clone())
        .collect()
}
