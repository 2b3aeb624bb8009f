use super::{new_id, replace_in, EmployeeStore};
use crate::error::Result;
use crate::model::{Employee, EmployeeDraft};

/// In-memory storage for testing and development.
/// Does NOT persist data.
#[derive(Default)]
pub struct InMemoryStore {
    employees: Vec<Employee>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts from an existing collection, ids included.
    pub fn with_records(employees: Vec<Employee>) -> Self {
        Self { employees }
    }
}

impl EmployeeStore for InMemoryStore {
    fn get_all(&self) -> Result<Vec<Employee>> {
        Ok(self.employees.clone())
    }

    fn get_by_id(&self, id: &str) -> Result<Option<Employee>> {
        Ok(self.employees.iter().find(|e| e.id == id).cloned())
    }

    fn add(&mut self, draft: EmployeeDraft) -> Result<Employee> {
        let employee = Employee::new(new_id(), draft);
        self.employees.push(employee.clone());
        Ok(employee)
    }

    fn update(&mut self, id: &str, draft: EmployeeDraft) -> Result<Option<Employee>> {
        Ok(replace_in(&mut self.employees, id, draft))
    }

    fn delete(&mut self, id: &str) -> Result<bool> {
        let before = self.employees.len();
        self.employees.retain(|e| e.id != id);
        Ok(self.employees.len() != before)
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::model::{Department, Position};

    pub fn draft(first_name: &str, last_name: &str) -> EmployeeDraft {
        EmployeeDraft {
            first_name: first_name.to_string(),
            last_name: last_name.to_string(),
            date_of_employment: "2021-03-15".to_string(),
            date_of_birth: "1988-05-10".to_string(),
            phone: "+(90) 533 321 54 76".to_string(),
            email: format!(
                "{}.{}@example.com",
                first_name.to_lowercase(),
                last_name.to_lowercase()
            ),
            department: Department::Tech,
            position: Position::Medior,
        }
    }

    pub struct StoreFixture {
        pub store: InMemoryStore,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::new(),
            }
        }

        pub fn with_employees(mut self, count: usize) -> Self {
            for i in 0..count {
                let draft = draft(&format!("Test{}", i + 1), "Employee");
                self.store.add(draft).unwrap();
            }
            self
        }

        pub fn with_employee(mut self, first_name: &str, last_name: &str) -> Self {
            self.store.add(draft(first_name, last_name)).unwrap();
            self
        }

        pub fn with_department(mut self, first_name: &str, department: Department) -> Self {
            let mut draft = draft(first_name, "Employee");
            draft.department = department;
            self.store.add(draft).unwrap();
            self
        }
    }
}
