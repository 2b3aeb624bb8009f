use crate::commands::{fill_form, CmdMessage, CmdResult};
use crate::error::Result;
use crate::form::EmployeeForm;
use crate::i18n::Translator;
use crate::store::EmployeeStore;
use crate::validation::Field;

pub fn run<S: EmployeeStore>(
    store: &mut S,
    translator: &Translator,
    values: &[(Field, String)],
) -> Result<CmdResult> {
    let mut form = EmployeeForm::create();
    fill_form(&mut form, values)?;
    let submission = form.submit(store)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "{}: {}",
        translator.translate("employeeAdded"),
        submission.employee.full_name()
    )));
    Ok(result.with_affected_employees(vec![submission.employee]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RosterError;
    use crate::i18n::Language;
    use crate::store::memory::InMemoryStore;

    fn complete_values() -> Vec<(Field, String)> {
        vec![
            (Field::FirstName, "Derya".into()),
            (Field::LastName, "Öztürk".into()),
            (Field::DateOfEmployment, "2020-02-02".into()),
            (Field::DateOfBirth, "1994-04-04".into()),
            (Field::Phone, "5441112233".into()),
            (Field::Email, "derya@ozturk.com".into()),
            (Field::Position, "senior".into()),
        ]
    }

    #[test]
    fn creates_employee_with_masked_phone() {
        let mut store = InMemoryStore::new();
        let translator = Translator::new(Language::En);
        let result = run(&mut store, &translator, &complete_values()).unwrap();

        assert_eq!(result.affected_employees.len(), 1);
        let employee = &result.affected_employees[0];
        assert_eq!(employee.details.phone, "+(90) 554 411 12 23");
        assert_eq!(
            result.messages[0].content,
            "Employee added: Derya Öztürk"
        );
        assert_eq!(store.get_all().unwrap().len(), 1);
    }

    #[test]
    fn rejects_incomplete_input() {
        let mut store = InMemoryStore::new();
        let translator = Translator::default();
        let values = vec![(Field::FirstName, "Derya".to_string())];

        let err = run(&mut store, &translator, &values).unwrap_err();
        match err {
            RosterError::Validation(errors) => assert_eq!(errors.len(), 5),
            other => panic!("unexpected error: {other}"),
        }
        assert!(store.get_all().unwrap().is_empty());
    }
}
