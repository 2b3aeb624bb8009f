use crate::config::RosterConfig;
use crate::error::Result;
use crate::form::EmployeeForm;
use crate::listing::PageLink;
use crate::model::Employee;
use crate::validation::Field;
use std::path::PathBuf;

pub mod create;
pub mod delete;
pub mod get;
pub mod language;
pub mod list;
pub mod seed;
pub mod update;

/// Where roster keeps its files.
#[derive(Debug, Clone)]
pub struct RosterPaths {
    pub data_dir: PathBuf,
}

impl RosterPaths {
    pub fn new(data_dir: PathBuf) -> Self {
        Self { data_dir }
    }
}

#[derive(Debug, Clone)]
pub enum MessageLevel {
    Info,
    Success,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }
}

/// Where a listing sits within the filtered collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageSummary {
    pub current_page: usize,
    pub total_pages: usize,
    pub total_matches: usize,
    pub links: Vec<PageLink>,
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub affected_employees: Vec<Employee>,
    pub listed_employees: Vec<Employee>,
    pub page: Option<PageSummary>,
    pub config: Option<RosterConfig>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_affected_employees(mut self, employees: Vec<Employee>) -> Self {
        self.affected_employees = employees;
        self
    }

    pub fn with_listed_employees(mut self, employees: Vec<Employee>) -> Self {
        self.listed_employees = employees;
        self
    }

    pub fn with_page(mut self, page: PageSummary) -> Self {
        self.page = Some(page);
        self
    }

    pub fn with_config(mut self, config: RosterConfig) -> Self {
        self.config = Some(config);
        self
    }
}

/// Applies typed field values to a form in order, as if entered by hand.
pub(crate) fn fill_form(form: &mut EmployeeForm, values: &[(Field, String)]) -> Result<()> {
    for (field, value) in values {
        form.set_field(*field, value)?;
    }
    Ok(())
}
