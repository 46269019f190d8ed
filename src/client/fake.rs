//! In-memory upstream used by unit tests.

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use uuid::Uuid;

use super::EmployeeClient;
use crate::error::{ApiError, Result};
use crate::models::{DeleteEmployeeInput, EmployeeInput, Envelope, UpstreamEmployee};

/// Upstream stand-in that keeps employees in memory and counts calls.
#[derive(Debug, Default)]
pub struct FakeEmployeeClient {
    employees: Mutex<Vec<UpstreamEmployee>>,
    pub fetch_all_calls: AtomicUsize,
    pub fetch_by_id_calls: AtomicUsize,
    pub create_calls: AtomicUsize,
    pub delete_calls: AtomicUsize,
    /// Answer every call with 429
    pub rate_limited: AtomicBool,
    /// Answer list calls with an envelope that has no data
    pub empty_list_response: AtomicBool,
    /// Report deletions as unsuccessful
    pub refuse_deletes: AtomicBool,
}

impl FakeEmployeeClient {
    pub fn with_employees(employees: Vec<UpstreamEmployee>) -> Self {
        Self {
            employees: Mutex::new(employees),
            ..Self::default()
        }
    }

    pub fn calls(counter: &AtomicUsize) -> usize {
        counter.load(Ordering::SeqCst)
    }

    fn check_rate_limit(&self) -> Result<()> {
        if self.rate_limited.load(Ordering::SeqCst) {
            Err(ApiError::RateLimited {
                retry_after: Some("1".to_string()),
            })
        } else {
            Ok(())
        }
    }
}

/// Builds an upstream record with a fresh id.
pub fn upstream_employee(name: &str, salary: u32) -> UpstreamEmployee {
    UpstreamEmployee {
        id: Uuid::new_v4(),
        name: name.to_string(),
        salary,
        age: 30,
        title: "Engineer".to_string(),
        email: Some(format!("{}@example.com", name.to_lowercase())),
    }
}

fn envelope<T>(data: Option<T>) -> Envelope<T> {
    Envelope {
        data,
        status: "Successfully processed request.".to_string(),
        error: None,
    }
}

#[async_trait]
impl EmployeeClient for FakeEmployeeClient {
    async fn fetch_all(&self) -> Result<Envelope<Vec<UpstreamEmployee>>> {
        self.fetch_all_calls.fetch_add(1, Ordering::SeqCst);
        self.check_rate_limit()?;
        if self.empty_list_response.load(Ordering::SeqCst) {
            return Ok(envelope(None));
        }
        let employees = self.employees.lock().unwrap().clone();
        Ok(envelope(Some(employees)))
    }

    async fn fetch_by_id(&self, id: &str) -> Result<Option<Envelope<UpstreamEmployee>>> {
        self.fetch_by_id_calls.fetch_add(1, Ordering::SeqCst);
        self.check_rate_limit()?;
        let employees = self.employees.lock().unwrap();
        Ok(employees
            .iter()
            .find(|e| e.id.to_string() == id)
            .cloned()
            .map(|e| envelope(Some(e))))
    }

    async fn create(&self, input: &EmployeeInput) -> Result<Envelope<UpstreamEmployee>> {
        self.create_calls.fetch_add(1, Ordering::SeqCst);
        self.check_rate_limit()?;
        let created = UpstreamEmployee {
            id: Uuid::new_v4(),
            name: input.name.clone(),
            salary: input.salary,
            age: input.age,
            title: input.title.clone(),
            email: None,
        };
        self.employees.lock().unwrap().push(created.clone());
        Ok(envelope(Some(created)))
    }

    async fn delete_by_name(&self, input: &DeleteEmployeeInput) -> Result<Envelope<bool>> {
        self.delete_calls.fetch_add(1, Ordering::SeqCst);
        self.check_rate_limit()?;
        if self.refuse_deletes.load(Ordering::SeqCst) {
            return Ok(envelope(Some(false)));
        }
        let mut employees = self.employees.lock().unwrap();
        let before = employees.len();
        employees.retain(|e| e.name != input.name);
        Ok(envelope(Some(employees.len() < before)))
    }
}
