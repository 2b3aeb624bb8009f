//! # Employee Form
//!
//! [`EmployeeForm`] is the working state behind the create and edit screens:
//! the draft being typed into, which mode we are in, and the per-field errors
//! from the last validation.
//!
//! Field updates go through [`EmployeeForm::set_field`], which is where the
//! phone mask is applied: the stored phone value is always the formatter's
//! output. Updating a field also clears that field's error, the way an inline
//! message disappears once the user starts correcting it.
//!
//! [`EmployeeForm::submit`] validates, writes through the store, and tells the
//! caller where to navigate next. It never reloads anything itself; a list
//! state that shows the same store must be reloaded by the caller.

use crate::error::{Result, RosterError};
use crate::i18n::Translator;
use crate::model::{Employee, EmployeeDraft};
use crate::phone::format_phone;
use crate::router::Route;
use crate::store::EmployeeStore;
use crate::validation::{validate, Field, ValidationErrors};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Edit(String),
}

/// What a successful submit produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    pub employee: Employee,
    pub created: bool,
    pub next: Route,
}

#[derive(Debug, Clone)]
pub struct EmployeeForm {
    mode: FormMode,
    draft: EmployeeDraft,
    errors: ValidationErrors,
}

impl EmployeeForm {
    /// An empty form; department and position start at their first option.
    pub fn create() -> Self {
        Self {
            mode: FormMode::Create,
            draft: EmployeeDraft::default(),
            errors: ValidationErrors::default(),
        }
    }

    /// Loads `id` for editing. `None` means there is no such employee and the
    /// caller should go back to the list.
    pub fn edit<S: EmployeeStore>(store: &S, id: &str) -> Result<Option<Self>> {
        let Some(employee) = store.get_by_id(id)? else {
            tracing::debug!(id, "edit target missing, redirecting to list");
            return Ok(None);
        };
        Ok(Some(Self {
            mode: FormMode::Edit(employee.id),
            draft: employee.details,
            errors: ValidationErrors::default(),
        }))
    }

    /// Builds the form a route asks for. The list route has no form.
    pub fn for_route<S: EmployeeStore>(store: &S, route: &Route) -> Result<Option<Self>> {
        match route {
            Route::List => Ok(None),
            Route::Create => Ok(Some(Self::create())),
            Route::Edit(id) => Self::edit(store, id),
        }
    }

    pub fn mode(&self) -> &FormMode {
        &self.mode
    }

    pub fn is_edit(&self) -> bool {
        matches!(self.mode, FormMode::Edit(_))
    }

    pub fn draft(&self) -> &EmployeeDraft {
        &self.draft
    }

    pub fn errors(&self) -> &ValidationErrors {
        &self.errors
    }

    /// Title key for the form header.
    pub fn title_key(&self) -> &'static str {
        match self.mode {
            FormMode::Create => "addEmployee",
            FormMode::Edit(_) => "editEmployee",
        }
    }

    /// Translated inline error for `field`, if it has one.
    pub fn error_message<'t>(&self, field: Field, translator: &'t Translator) -> Option<&'t str> {
        self.errors
            .get(field)
            .map(|error| translator.translate(error.message_key()))
    }

    /// Stores a typed value. Phone input is passed through the mask.
    pub fn set_field(&mut self, field: Field, value: &str) -> Result<()> {
        let draft = &mut self.draft;
        match field {
            Field::FirstName => draft.first_name = value.to_string(),
            Field::LastName => draft.last_name = value.to_string(),
            Field::DateOfEmployment => draft.date_of_employment = value.to_string(),
            Field::DateOfBirth => draft.date_of_birth = value.to_string(),
            Field::Phone => draft.phone = format_phone(value),
            Field::Email => draft.email = value.to_string(),
            Field::Department => draft.department = value.parse().map_err(RosterError::Api)?,
            Field::Position => draft.position = value.parse().map_err(RosterError::Api)?,
        }
        self.errors.clear(field);
        Ok(())
    }

    /// Runs every check and keeps the result for display.
    pub fn validate(&mut self) -> bool {
        self.errors = validate(&self.draft);
        self.errors.is_empty()
    }

    /// Validates and saves. On success the caller should navigate to
    /// [`Submission::next`].
    pub fn submit<S: EmployeeStore>(&mut self, store: &mut S) -> Result<Submission> {
        if !self.validate() {
            tracing::debug!(errors = %self.errors, "form validation failed");
            return Err(RosterError::Validation(self.errors.clone()));
        }

        let (employee, created) = match &self.mode {
            FormMode::Create => (store.add(self.draft.clone())?, true),
            FormMode::Edit(id) => {
                let updated = store
                    .update(id, self.draft.clone())?
                    .ok_or_else(|| RosterError::EmployeeNotFound(id.clone()))?;
                (updated, false)
            }
        };

        tracing::info!(id = %employee.id, created, "employee saved");
        Ok(Submission {
            employee,
            created,
            next: Route::List,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::Language;
    use crate::model::{Department, Position};
    use crate::store::memory::fixtures::{draft, StoreFixture};
    use crate::store::memory::InMemoryStore;
    use crate::validation::FieldError;

    fn fill(form: &mut EmployeeForm) {
        form.set_field(Field::FirstName, "Zeynep").unwrap();
        form.set_field(Field::LastName, "Çelik").unwrap();
        form.set_field(Field::DateOfEmployment, "2022-01-10").unwrap();
        form.set_field(Field::DateOfBirth, "1991-03-25").unwrap();
        form.set_field(Field::Phone, "3212345678").unwrap();
        form.set_field(Field::Email, "zeynep@celik.com").unwrap();
    }

    #[test]
    fn create_form_starts_empty_with_first_options() {
        let form = EmployeeForm::create();
        assert_eq!(form.mode(), &FormMode::Create);
        assert_eq!(form.draft().department, Department::Analytics);
        assert_eq!(form.draft().position, Position::Junior);
        assert_eq!(form.title_key(), "addEmployee");
    }

    #[test]
    fn phone_field_is_masked() {
        let mut form = EmployeeForm::create();
        form.set_field(Field::Phone, "").unwrap();
        assert_eq!(form.draft().phone, "+(90) 5");
        form.set_field(Field::Phone, "3212345678").unwrap();
        assert_eq!(form.draft().phone, "+(90) 532 123 45 67");
    }

    #[test]
    fn submit_creates_and_returns_to_list() {
        let mut store = InMemoryStore::new();
        let mut form = EmployeeForm::create();
        fill(&mut form);
        form.set_field(Field::Department, "tech").unwrap();

        let submission = form.submit(&mut store).unwrap();
        assert!(submission.created);
        assert_eq!(submission.next, Route::List);
        let all = store.get_all().unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].details.department, Department::Tech);
        assert_eq!(all[0].details.phone, "+(90) 532 123 45 67");
    }

    #[test]
    fn invalid_submit_keeps_store_untouched() {
        let mut store = InMemoryStore::new();
        let mut form = EmployeeForm::create();
        form.set_field(Field::Email, "not-an-email").unwrap();

        let err = form.submit(&mut store).unwrap_err();
        assert!(matches!(err, RosterError::Validation(_)));
        assert_eq!(
            form.errors().get(Field::Email),
            Some(FieldError::InvalidEmail)
        );
        assert_eq!(
            form.errors().get(Field::FirstName),
            Some(FieldError::Required)
        );
        assert!(store.get_all().unwrap().is_empty());
    }

    #[test]
    fn editing_a_field_clears_its_error() {
        let mut form = EmployeeForm::create();
        assert!(!form.validate());
        form.set_field(Field::FirstName, "Ali").unwrap();
        assert!(form.errors().get(Field::FirstName).is_none());
        assert!(form.errors().get(Field::LastName).is_some());
    }

    #[test]
    fn edit_replaces_record_keeping_id() {
        let mut store = StoreFixture::new().with_employee("Hasan", "Koç").store;
        let id = store.get_all().unwrap()[0].id.clone();

        let mut form = EmployeeForm::edit(&store, &id).unwrap().unwrap();
        assert!(form.is_edit());
        assert_eq!(form.draft().first_name, "Hasan");
        form.set_field(Field::Position, "Senior").unwrap();

        let submission = form.submit(&mut store).unwrap();
        assert!(!submission.created);
        assert_eq!(submission.employee.id, id);
        assert_eq!(
            store.get_by_id(&id).unwrap().unwrap().details.position,
            Position::Senior
        );
    }

    #[test]
    fn edit_of_missing_record_redirects() {
        let store = InMemoryStore::new();
        assert!(EmployeeForm::edit(&store, "ghost").unwrap().is_none());
        assert!(EmployeeForm::for_route(&store, &Route::resolve("/edit/ghost"))
            .unwrap()
            .is_none());
    }

    #[test]
    fn edit_target_deleted_before_submit_is_not_found() {
        let mut store = InMemoryStore::new();
        let employee = store.add(draft("Emine", "Aslan")).unwrap();
        let mut form = EmployeeForm::edit(&store, &employee.id).unwrap().unwrap();
        store.delete(&employee.id).unwrap();

        assert!(matches!(
            form.submit(&mut store),
            Err(RosterError::EmployeeNotFound(_))
        ));
    }

    #[test]
    fn bad_enum_value_is_rejected() {
        let mut form = EmployeeForm::create();
        assert!(form.set_field(Field::Department, "Sales").is_err());
        assert_eq!(form.draft().department, Department::Analytics);
    }

    #[test]
    fn error_messages_are_translated() {
        let translator = Translator::new(Language::En);
        let mut form = EmployeeForm::create();
        form.validate();
        assert_eq!(
            form.error_message(Field::Phone, &translator),
            Some("This field is required")
        );
        assert_eq!(form.error_message(Field::Position, &translator), None);
    }
}
