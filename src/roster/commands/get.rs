use crate::commands::CmdResult;
use crate::error::{Result, RosterError};
use crate::store::EmployeeStore;

pub fn run<S: EmployeeStore>(store: &S, id: &str) -> Result<CmdResult> {
    let employee = store
        .get_by_id(id)?
        .ok_or_else(|| RosterError::EmployeeNotFound(id.to_string()))?;
    Ok(CmdResult::default().with_listed_employees(vec![employee]))
}
