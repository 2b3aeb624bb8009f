use super::{new_id, replace_in, EmployeeStore, STORAGE_KEY};
use crate::error::{Result, RosterError};
use crate::model::{Employee, EmployeeDraft};
use std::fs;
use std::path::PathBuf;

pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    pub fn data_file(&self) -> PathBuf {
        self.root.join(format!("{}.json", STORAGE_KEY))
    }

    fn ensure_dir(&self) -> Result<()> {
        if !self.root.exists() {
            fs::create_dir_all(&self.root).map_err(RosterError::Io)?;
        }
        Ok(())
    }

    fn load(&self) -> Result<Vec<Employee>> {
        let data_file = self.data_file();
        if !data_file.exists() {
            return Ok(Vec::new());
        }
        let content = fs::read_to_string(&data_file).map_err(RosterError::Io)?;
        if content.trim().is_empty() {
            return Ok(Vec::new());
        }
        let records: Vec<Employee> =
            serde_json::from_str(&content).map_err(RosterError::Serialization)?;
        Ok(records)
    }

    fn save(&self, records: &[Employee]) -> Result<()> {
        self.ensure_dir()?;
        let content = serde_json::to_string_pretty(records).map_err(RosterError::Serialization)?;
        fs::write(self.data_file(), content).map_err(RosterError::Io)?;
        tracing::debug!(count = records.len(), path = %self.data_file().display(), "saved employees");
        Ok(())
    }
}

impl EmployeeStore for FileStore {
    fn get_all(&self) -> Result<Vec<Employee>> {
        self.load()
    }

    fn get_by_id(&self, id: &str) -> Result<Option<Employee>> {
        Ok(self.load()?.into_iter().find(|e| e.id == id))
    }

    fn add(&mut self, draft: EmployeeDraft) -> Result<Employee> {
        let mut records = self.load()?;
        let employee = Employee::new(new_id(), draft);
        records.push(employee.clone());
        self.save(&records)?;
        Ok(employee)
    }

    fn update(&mut self, id: &str, draft: EmployeeDraft) -> Result<Option<Employee>> {
        let mut records = self.load()?;
        let updated = replace_in(&mut records, id, draft);
        if updated.is_some() {
            self.save(&records)?;
        }
        Ok(updated)
    }

    fn delete(&mut self, id: &str) -> Result<bool> {
        let mut records = self.load()?;
        let before = records.len();
        records.retain(|e| e.id != id);
        if records.len() == before {
            return Ok(false);
        }
        self.save(&records)?;
        Ok(true)
    }
}
