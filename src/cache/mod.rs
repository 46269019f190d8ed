//! Cache Module
//!
//! Read-through cache for upstream employee data, flushed on every write.

mod entry;
mod stats;
mod store;

// Re-export public types
pub use entry::{CacheEntry, Clock};
pub use stats::CacheStats;
pub use store::EmployeeCache;

use std::fmt;

// == Cache Scopes ==
/// Named partitions of the cache. Writes flush every scope.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CacheScope {
    /// The full employee list
    Employees,
    /// Single employees keyed by id
    EmployeeById,
}

impl CacheScope {
    /// Every scope, in flush order
    pub const ALL: [CacheScope; 2] = [CacheScope::Employees, CacheScope::EmployeeById];

    /// Stable scope name used in logs and stats
    pub fn name(&self) -> &'static str {
        match self {
            CacheScope::Employees => "employees",
            CacheScope::EmployeeById => "employeeById",
        }
    }
}

impl fmt::Display for CacheScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
