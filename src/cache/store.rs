//! Cache Store Module
//!
//! Holds the employee list and per-id lookups in two scopes. Every write to
//! the upstream service flushes both scopes.
//!
//! Fetches that miss the cache capture the current generation before going
//! upstream and hand it back when populating. A flush bumps the generation,
//! so a fetch that straddles a write cannot repopulate pre-write data.

use std::collections::HashMap;

use chrono::{DateTime, Utc};

use crate::cache::{CacheEntry, CacheScope, CacheStats, Clock};
use crate::models::Employee;

// == Employee Cache ==
#[derive(Debug)]
pub struct EmployeeCache {
    /// Scope `employees`
    employees: Option<CacheEntry<Vec<Employee>>>,
    /// Scope `employeeById`
    by_id: HashMap<String, CacheEntry<Employee>>,
    /// Incremented on every flush
    generation: u64,
    stats: CacheStats,
    clock: Clock,
}

impl Default for EmployeeCache {
    fn default() -> Self {
        Self::new()
    }
}

impl EmployeeCache {
    // == Constructor ==
    /// Creates an empty cache stamped with the system clock.
    pub fn new() -> Self {
        Self::with_clock(Utc::now)
    }

    /// Creates an empty cache that timestamps entries with `clock`.
    pub fn with_clock(clock: Clock) -> Self {
        Self {
            employees: None,
            by_id: HashMap::new(),
            generation: 0,
            stats: CacheStats::new(),
            clock,
        }
    }

    // == Generation ==
    /// Current generation; pass it back to the `put_*` methods after a fetch.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    // == Employee List ==
    /// Returns the cached employee list, recording a hit or miss.
    pub fn get_all(&mut self) -> Option<Vec<Employee>> {
        match &self.employees {
            Some(entry) => {
                self.stats.record_hit();
                Some(entry.value.clone())
            }
            None => {
                self.stats.record_miss();
                None
            }
        }
    }

    /// Stores the employee list if no flush happened since `generation`.
    ///
    /// Returns whether the list was stored.
    pub fn put_all(&mut self, generation: u64, employees: Vec<Employee>) -> bool {
        if generation != self.generation {
            return false;
        }
        self.employees = Some(CacheEntry::new(employees, self.clock));
        self.refresh_total();
        true
    }

    // == Employee By Id ==
    /// Returns a cached employee, recording a hit or miss.
    pub fn get_by_id(&mut self, id: &str) -> Option<Employee> {
        match self.by_id.get(id) {
            Some(entry) => {
                let employee = entry.value.clone();
                self.stats.record_hit();
                Some(employee)
            }
            None => {
                self.stats.record_miss();
                None
            }
        }
    }

    /// Stores a single employee if no flush happened since `generation`.
    ///
    /// Returns whether the employee was stored.
    pub fn put_by_id(&mut self, generation: u64, id: String, employee: Employee) -> bool {
        if generation != self.generation {
            return false;
        }
        self.by_id.insert(id, CacheEntry::new(employee, self.clock));
        self.refresh_total();
        true
    }

    // == Evict All ==
    /// Flushes every scope and invalidates in-flight fetches.
    ///
    /// Returns the number of entries removed.
    pub fn evict_all(&mut self) -> usize {
        let removed = CacheScope::ALL
            .iter()
            .map(|scope| self.scope_len(*scope))
            .sum();

        self.employees = None;
        self.by_id.clear();
        self.generation += 1;
        self.stats.record_flush(removed);
        self.refresh_total();
        removed
    }

    // == Introspection ==
    /// Number of entries held in `scope`.
    pub fn scope_len(&self, scope: CacheScope) -> usize {
        match scope {
            CacheScope::Employees => usize::from(self.employees.is_some()),
            CacheScope::EmployeeById => self.by_id.len(),
        }
    }

    /// When the employee list was cached, if it is.
    pub fn list_cached_at(&self) -> Option<DateTime<Utc>> {
        self.employees.as_ref().map(|entry| entry.cached_at)
    }

    pub fn stats(&self) -> CacheStats {
        let mut stats = self.stats.clone();
        stats.set_total_entries(self.len());
        stats
    }

    /// Total number of entries across all scopes.
    pub fn len(&self) -> usize {
        CacheScope::ALL.iter().map(|scope| self.scope_len(*scope)).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn refresh_total(&mut self) {
        let total = self.len();
        self.stats.set_total_entries(total);
    }
}
