use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Department {
    #[default]
    Analytics,
    Tech,
}

impl Department {
    pub const ALL: [Department; 2] = [Department::Analytics, Department::Tech];

    pub fn as_str(&self) -> &'static str {
        match self {
            Department::Analytics => "Analytics",
            Department::Tech => "Tech",
        }
    }

    /// Translation key for the department label.
    pub fn label_key(&self) -> &'static str {
        match self {
            Department::Analytics => "analytics",
            Department::Tech => "tech",
        }
    }
}

impl fmt::Display for Department {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Department {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Department::ALL
            .into_iter()
            .find(|d| d.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("Unknown department: {}", s))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Position {
    #[default]
    Junior,
    Medior,
    Senior,
}

impl Position {
    pub const ALL: [Position; 3] = [Position::Junior, Position::Medior, Position::Senior];

    pub fn as_str(&self) -> &'static str {
        match self {
            Position::Junior => "Junior",
            Position::Medior => "Medior",
            Position::Senior => "Senior",
        }
    }

    pub fn label_key(&self) -> &'static str {
        match self {
            Position::Junior => "junior",
            Position::Medior => "medior",
            Position::Senior => "senior",
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Position {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Position::ALL
            .into_iter()
            .find(|p| p.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("Unknown position: {}", s))
    }
}

/// Everything about an employee except the storage-assigned id.
///
/// This is what forms edit and what `add`/`update` accept. Dates are kept as
/// the `YYYY-MM-DD` strings a date input produces.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeDraft {
    pub first_name: String,
    pub last_name: String,
    pub date_of_employment: String,
    pub date_of_birth: String,
    pub phone: String,
    pub email: String,
    pub department: Department,
    pub position: Position,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    pub id: String,
    #[serde(flatten)]
    pub details: EmployeeDraft,
}

impl Employee {
    pub fn new(id: impl Into<String>, details: EmployeeDraft) -> Self {
        Self {
            id: id.into(),
            details,
        }
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.details.first_name, self.details.last_name)
    }
}
