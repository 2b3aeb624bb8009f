use crate::commands::{fill_form, CmdMessage, CmdResult};
use crate::error::{Result, RosterError};
use crate::form::EmployeeForm;
use crate::i18n::Translator;
use crate::store::EmployeeStore;
use crate::validation::Field;

/// Edits an employee. Fields not mentioned in `values` keep their stored value.
pub fn run<S: EmployeeStore>(
    store: &mut S,
    translator: &Translator,
    id: &str,
    values: &[(Field, String)],
) -> Result<CmdResult> {
    let mut form = EmployeeForm::edit(store, id)?
        .ok_or_else(|| RosterError::EmployeeNotFound(id.to_string()))?;
    fill_form(&mut form, values)?;
    let submission = form.submit(store)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "{}: {}",
        translator.translate("employeeUpdated"),
        submission.employee.full_name()
    )));
    Ok(result.with_affected_employees(vec![submission.employee]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Department;
    use crate::store::memory::fixtures::StoreFixture;

    #[test]
    fn updates_only_given_fields() {
        let mut store = StoreFixture::new().with_employee("Esra", "Şimşek").store;
        let id = store.get_all().unwrap()[0].id.clone();
        let translator = Translator::default();

        let values = vec![
            (Field::Department, "Analytics".to_string()),
            (Field::Phone, "+905059998877".to_string()),
        ];
        run(&mut store, &translator, &id, &values).unwrap();

        let stored = store.get_by_id(&id).unwrap().unwrap();
        assert_eq!(stored.details.first_name, "Esra");
        assert_eq!(stored.details.department, Department::Analytics);
        assert_eq!(stored.details.phone, "+(90) 505 999 88 77");
    }

    #[test]
    fn unknown_id_is_not_found() {
        let mut store = StoreFixture::new().with_employees(1).store;
        let translator = Translator::default();
        let err = run(&mut store, &translator, "nope", &[]).unwrap_err();
        assert!(matches!(err, RosterError::EmployeeNotFound(id) if id == "nope"));
    }

    #[test]
    fn invalid_change_is_rejected() {
        let mut store = StoreFixture::new().with_employee("Esra", "Şimşek").store;
        let id = store.get_all().unwrap()[0].id.clone();
        let translator = Translator::default();

        let values = vec![(Field::Email, "esra-at-example".to_string())];
        assert!(run(&mut store, &translator, &id, &values).is_err());
        let stored = store.get_by_id(&id).unwrap().unwrap();
        assert_eq!(stored.details.email, "esra.şimşek@example.com");
    }
}
