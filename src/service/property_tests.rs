//! Property-Based Tests for the Employee Service
//!
//! Uses proptest to check the aggregation queries and the cache contract.

use proptest::prelude::*;
use std::sync::Arc;
use uuid::Uuid;

use crate::cache::EmployeeCache;
use crate::client::fake::{upstream_employee, FakeEmployeeClient};
use crate::models::{CreateEmployeeRequest, Employee};
use crate::service::{
    filter_by_name, highest_salary, top_earner_names, EmployeeService, TOP_EARNERS_LIMIT,
};

// == Strategies ==
fn employee_strategy() -> impl Strategy<Value = Employee> {
    ("[a-zA-Z ]{1,16}", 1u32..500_000).prop_map(|(name, salary)| Employee {
        id: Uuid::new_v4(),
        name,
        salary,
        age: 30,
        title: "Engineer".to_string(),
        email: None,
    })
}

fn employees_strategy() -> impl Strategy<Value = Vec<Employee>> {
    prop::collection::vec(employee_strategy(), 0..40)
}

/// Operations that may precede a read of the employee list
#[derive(Debug, Clone)]
enum ServiceOp {
    List,
    Create { name: String, salary: u32 },
    DeleteFirst,
}

fn service_op_strategy() -> impl Strategy<Value = ServiceOp> {
    prop_oneof![
        Just(ServiceOp::List),
        ("[a-z]{3,10}", 1u32..100_000).prop_map(|(name, salary)| ServiceOp::Create { name, salary }),
        Just(ServiceOp::DeleteFirst),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    // Highest salary is the maximum, or zero for an empty list.
    #[test]
    fn prop_highest_salary_is_max(employees in employees_strategy()) {
        let expected = employees.iter().map(|e| e.salary).max().unwrap_or(0);
        prop_assert_eq!(highest_salary(&employees), expected);
    }

    // Top earners: bounded length, descending, drawn from the best paid.
    #[test]
    fn prop_top_earners(employees in employees_strategy()) {
        let top = top_earner_names(&employees, TOP_EARNERS_LIMIT);
        let expected_len = employees.len().min(TOP_EARNERS_LIMIT);
        prop_assert_eq!(top.len(), expected_len);

        let mut salaries: Vec<u32> = employees.iter().map(|e| e.salary).collect();
        salaries.sort_unstable_by(|a, b| b.cmp(a));
        let threshold = salaries.get(expected_len.saturating_sub(1)).copied().unwrap_or(0);

        // Reconstruct the salaries of the returned names in order
        let mut remaining: Vec<&Employee> = employees.iter().collect();
        let mut previous = u32::MAX;
        for name in &top {
            let position = remaining
                .iter()
                .enumerate()
                .filter(|(_, e)| &e.name == name)
                .max_by_key(|(_, e)| e.salary)
                .map(|(i, _)| i);
            prop_assert!(position.is_some(), "unknown name {}", name);
            let picked = remaining.remove(position.unwrap_or_default());
            prop_assert!(picked.salary <= previous, "not sorted descending");
            prop_assert!(picked.salary >= threshold, "{} is not a top earner", name);
            previous = picked.salary;
        }
    }

    // Search keeps exactly the case-insensitive matches, in order.
    #[test]
    fn prop_search_is_case_insensitive_filter(
        employees in employees_strategy(),
        needle in "[a-zA-Z]{0,3}",
    ) {
        let found = filter_by_name(&employees, &needle);
        let expected: Vec<Employee> = employees
            .iter()
            .filter(|e| e.name.to_lowercase().contains(&needle.to_lowercase()))
            .cloned()
            .collect();
        prop_assert_eq!(found, expected);
    }

    // Reads without an intervening write hit upstream at most once, every
    // write forces the next read to refetch, and reads always reflect the
    // upstream state.
    #[test]
    fn prop_cache_refetches_only_after_writes(
        ops in prop::collection::vec(service_op_strategy(), 1..20),
    ) {
        tokio_test::block_on(async {
            let fake = Arc::new(FakeEmployeeClient::with_employees(vec![
                upstream_employee("Seed", 1000),
            ]));
            let service = EmployeeService::new(fake.clone(), EmployeeCache::new());

            let mut model: Vec<String> = vec!["Seed".to_string()];
            let mut expected_fetches = 0usize;
            let mut cached = false;

            for op in ops {
                match op {
                    ServiceOp::List => {
                        let listed = service.list_all().await.unwrap();
                        if !cached {
                            expected_fetches += 1;
                            cached = true;
                        }
                        let names: Vec<String> = listed.into_iter().map(|e| e.name).collect();
                        prop_assert_eq!(&names, &model);
                    }
                    ServiceOp::Create { name, salary } => {
                        let request = CreateEmployeeRequest::new(
                            name.clone(),
                            salary.to_string(),
                            "30",
                            "Engineer",
                        );
                        service.create(&request).await.unwrap();
                        model.push(name);
                        cached = false;
                    }
                    ServiceOp::DeleteFirst => {
                        let first = service.list_all().await.unwrap().into_iter().next();
                        if !cached {
                            expected_fetches += 1;
                            cached = true;
                        }
                        if let Some(employee) = first {
                            service.delete(&employee.id.to_string()).await.unwrap();
                            model.retain(|n| *n != employee.name);
                            cached = false;
                        }
                    }
                }
                prop_assert_eq!(
                    FakeEmployeeClient::calls(&fake.fetch_all_calls),
                    expected_fetches
                );
            }
            Ok(())
        })?;
    }
}
