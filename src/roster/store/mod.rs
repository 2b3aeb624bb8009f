//! # Storage Layer
//!
//! The [`EmployeeStore`] trait is the only way the rest of the crate reads or
//! writes employee records, so the list and form logic can be exercised
//! against memory and shipped against disk.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: production storage. The whole collection is one JSON
//!   array under a single storage key, `employees.json` in the data directory.
//! - [`memory::InMemoryStore`]: no persistence, for tests.
//!
//! ## Contract
//!
//! - Ids are assigned by the store on [`EmployeeStore::add`] and never change.
//! - [`EmployeeStore::update`] replaces the whole record, keeping its id.
//! - Collection order is insertion order; updates keep a record in place.
//! - [`EmployeeStore::search`] uses [`crate::listing::matches_query`], the
//!   same predicate the list screen filters with.
//!
//! ## Storage Format
//!
//! ```text
//! <data dir>/
//! ├── employees.json   # [{"id": "...", "firstName": "...", ...}, ...]
//! └── config.json      # language and list preferences
//! ```

use crate::error::Result;
use crate::listing::matches_query;
use crate::model::{Employee, EmployeeDraft};
use uuid::Uuid;

pub mod fs;
pub mod memory;

/// The fixed key the collection is stored under.
pub const STORAGE_KEY: &str = "employees";

pub trait EmployeeStore {
    /// Every record, in insertion order.
    fn get_all(&self) -> Result<Vec<Employee>>;

    fn get_by_id(&self, id: &str) -> Result<Option<Employee>>;

    /// Stores a new record under a freshly generated id and returns it.
    fn add(&mut self, draft: EmployeeDraft) -> Result<Employee>;

    /// Replaces the record with `id`. Returns `None` when there is no such record.
    fn update(&mut self, id: &str, draft: EmployeeDraft) -> Result<Option<Employee>>;

    /// Removes the record with `id`, reporting whether it existed.
    fn delete(&mut self, id: &str) -> Result<bool>;

    fn search(&self, query: &str) -> Result<Vec<Employee>> {
        Ok(self
            .get_all()?
            .into_iter()
            .filter(|e| matches_query(e, query))
            .collect())
    }
}

pub(crate) fn new_id() -> String {
    Uuid::new_v4().to_string()
}

/// Applies an update to a loaded collection. Shared by the stores so they
/// replace records the same way.
pub(crate) fn replace_in(
    records: &mut [Employee],
    id: &str,
    draft: EmployeeDraft,
) -> Option<Employee> {
    let slot = records.iter_mut().find(|e| e.id == id)?;
    *slot = Employee::new(id, draft);
    Some(slot.clone())
}
