use std::fmt;

use serde::{Deserialize, Serialize};

/// Server-assigned identifier. The backend hands out numbers, but the wire
/// contract allows either a number or a string.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq, Hash)]
#[serde(untagged)]
pub enum EmployeeId {
    Number(i64),
    Text(String),
}

impl fmt::Display for EmployeeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EmployeeId::Number(n) => write!(f, "{n}"),
            EmployeeId::Text(s) => write!(f, "{s}"),
        }
    }
}

impl From<&str> for EmployeeId {
    fn from(value: &str) -> Self {
        let value = value.trim();
        value
            .parse::<i64>()
            .map(EmployeeId::Number)
            .unwrap_or_else(|_| EmployeeId::Text(value.to_string()))
    }
}

impl From<i64> for EmployeeId {
    fn from(value: i64) -> Self {
        EmployeeId::Number(value)
    }
}

/// A record as stored on the server.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct Employee {
    pub id: EmployeeId,
    pub name: String,
    pub email: String,
    pub department: String,
}

impl Employee {
    pub fn draft(&self) -> EmployeeDraft {
        EmployeeDraft {
            name: self.name.clone(),
            email: self.email.clone(),
            department: self.department.clone(),
        }
    }
}

/// The editable fields of a record, sent on create and update.
#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
pub struct EmployeeDraft {
    pub name: String,
    pub email: String,
    pub department: String,
}
