//! Employee Service
//!
//! Orchestrates upstream calls behind the read-through cache, projects
//! upstream records into the facade schema, and runs the analytics queries.

mod analytics;

#[cfg(test)]
mod property_tests;

pub use analytics::{filter_by_name, highest_salary, top_earner_names, TOP_EARNERS_LIMIT};

use std::sync::Arc;

use tokio::sync::RwLock;
use tracing::{debug, info, warn};

use crate::cache::{CacheScope, EmployeeCache};
use crate::client::{EmployeeClient, HttpEmployeeClient};
use crate::config::Config;
use crate::error::Result;
use crate::models::{CreateEmployeeRequest, DeleteEmployeeInput, DeleteOutcome, Employee};

// == Employee Service ==
/// Facade over the upstream employee service.
///
/// Cheap to clone; clones share the client and the cache.
#[derive(Clone)]
pub struct EmployeeService {
    client: Arc<dyn EmployeeClient>,
    cache: Arc<RwLock<EmployeeCache>>,
    /// Whether single-employee lookups go through the `employeeById` scope
    cache_by_id: bool,
}

impl EmployeeService {
    /// Creates a service that caches both the list and single lookups.
    pub fn new(client: Arc<dyn EmployeeClient>, cache: EmployeeCache) -> Self {
        Self {
            client,
            cache: Arc::new(RwLock::new(cache)),
            cache_by_id: true,
        }
    }

    /// Enables or disables caching of single-employee lookups.
    pub fn with_cache_by_id(mut self, enabled: bool) -> Self {
        self.cache_by_id = enabled;
        self
    }

    /// Creates a service talking HTTP to the upstream configured in `config`.
    pub fn from_config(config: &Config) -> Result<Self> {
        let client = HttpEmployeeClient::from_config(config)?;
        Ok(Self::new(Arc::new(client), EmployeeCache::new()).with_cache_by_id(config.cache_by_id))
    }

    /// Shared handle to the cache, for introspection.
    pub fn cache(&self) -> Arc<RwLock<EmployeeCache>> {
        Arc::clone(&self.cache)
    }

    // == List All ==
    /// Returns every employee, from the cache when possible.
    pub async fn list_all(&self) -> Result<Vec<Employee>> {
        let generation = {
            let mut cache = self.cache.write().await;
            if let Some(employees) = cache.get_all() {
                debug!("Cache hit in scope '{}'", CacheScope::Employees);
                return Ok(employees);
            }
            cache.generation()
        };

        debug!("Cache miss in scope '{}'", CacheScope::Employees);
        let employees: Vec<Employee> = self
            .client
            .fetch_all()
            .await?
            .into_data("List employees")?
            .into_iter()
            .map(Employee::from)
            .collect();
        info!("Retrieved {} employees from upstream", employees.len());

        if !self.cache.write().await.put_all(generation, employees.clone()) {
            debug!("Employee list fetched before a flush was not cached");
        }
        Ok(employees)
    }

    // == Search By Name ==
    /// Employees whose name contains `fragment`, ignoring case.
    pub async fn search_by_name(&self, fragment: &str) -> Result<Vec<Employee>> {
        let matches = filter_by_name(&self.list_all().await?, fragment);
        info!(
            "Found {} employees matching search '{}'",
            matches.len(),
            fragment
        );
        Ok(matches)
    }

    // == Get By Id ==
    /// Returns the employee with `id`, or `None` if upstream does not know it.
    pub async fn get_by_id(&self, id: &str) -> Result<Option<Employee>> {
        if !self.cache_by_id {
            return self.fetch_employee(id).await;
        }

        let generation = {
            let mut cache = self.cache.write().await;
            if let Some(employee) = cache.get_by_id(id) {
                debug!("Cache hit in scope '{}' for {}", CacheScope::EmployeeById, id);
                return Ok(Some(employee));
            }
            cache.generation()
        };

        let employee = self.fetch_employee(id).await?;
        if let Some(found) = &employee {
            self.cache
                .write()
                .await
                .put_by_id(generation, id.to_string(), found.clone());
        }
        Ok(employee)
    }

    // == Highest Salary ==
    /// Highest salary across all employees; 0 when there are none.
    pub async fn highest_salary(&self) -> Result<u32> {
        let highest = highest_salary(&self.list_all().await?);
        info!("Highest salary among employees is {}", highest);
        Ok(highest)
    }

    // == Top Ten ==
    /// Names of the ten best paid employees, highest salary first.
    pub async fn top_ten_names(&self) -> Result<Vec<String>> {
        let names = top_earner_names(&self.list_all().await?, TOP_EARNERS_LIMIT);
        debug!("Top earners: {:?}", names);
        Ok(names)
    }

    // == Create ==
    /// Validates `request`, creates the employee upstream and flushes the cache.
    pub async fn create(&self, request: &CreateEmployeeRequest) -> Result<Employee> {
        let input = request.validate()?;
        info!(
            "Creating employee name={}, salary={}, age={}, title={}",
            input.name, input.salary, input.age, input.title
        );

        let result = self.client.create(&input).await;
        self.invalidate().await;

        let created = Employee::from(result?.into_data("Create employee")?);
        info!("Created employee {} ({})", created.name, created.id);
        Ok(created)
    }

    // == Delete ==
    /// Deletes the employee with `id`.
    ///
    /// Unknown ids short-circuit to [`DeleteOutcome::NotFound`] without
    /// calling the upstream delete.
    pub async fn delete(&self, id: &str) -> Result<DeleteOutcome> {
        let Some(employee) = self.fetch_employee(id).await? else {
            return Ok(DeleteOutcome::NotFound);
        };

        let result = self
            .client
            .delete_by_name(&DeleteEmployeeInput::new(employee.name.clone()))
            .await;
        self.invalidate().await;

        if result?.data.unwrap_or(false) {
            info!("Deleted employee {} ({})", employee.name, id);
            Ok(DeleteOutcome::Deleted(employee.name))
        } else {
            warn!("Upstream did not delete employee {} ({})", employee.name, id);
            Ok(DeleteOutcome::Failed)
        }
    }

    /// Upstream lookup that bypasses the cache. A null payload counts as absent.
    async fn fetch_employee(&self, id: &str) -> Result<Option<Employee>> {
        let employee = self
            .client
            .fetch_by_id(id)
            .await?
            .and_then(|envelope| envelope.data)
            .map(Employee::from);
        if employee.is_none() {
            warn!("No employee found for id: {}", id);
        }
        Ok(employee)
    }

    async fn invalidate(&self) {
        let removed = self.cache.write().await.evict_all();
        debug!(
            "Flushed scopes {:?}, removed {} entries",
            CacheScope::ALL.map(|scope| scope.name()),
            removed
        );
    }
}
