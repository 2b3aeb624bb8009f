use crate::commands::{CmdMessage, CmdResult};
use crate::error::{Result, RosterError};
use crate::i18n::Translator;
use crate::store::EmployeeStore;

pub fn run<S: EmployeeStore>(store: &mut S, translator: &Translator, id: &str) -> Result<CmdResult> {
    let employee = store
        .get_by_id(id)?
        .ok_or_else(|| RosterError::EmployeeNotFound(id.to_string()))?;

    if !store.delete(id)? {
        return Err(RosterError::EmployeeNotFound(id.to_string()));
    }
    tracing::info!(id, "employee deleted");

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "{}: {}",
        translator.translate("employeeDeleted"),
        employee.full_name()
    )));
    Ok(result.with_affected_employees(vec![employee]))
}
