use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::seed::sample_employees;
use crate::store::EmployeeStore;

pub fn run<S: EmployeeStore>(store: &mut S, count: usize, seed: u64) -> Result<CmdResult> {
    let mut added = Vec::with_capacity(count);
    for draft in sample_employees(count, seed) {
        added.push(store.add(draft)?);
    }

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Added {} sample employees",
        added.len()
    )));
    Ok(result.with_affected_employees(added))
}
