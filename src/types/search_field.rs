use std::fmt;
use std::str::FromStr;

use crate::error::EmployeeError;

/// Field a server-side search filters on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SearchField {
    #[default]
    Name,
    Department,
}

impl SearchField {
    pub fn as_str(self) -> &'static str {
        match self {
            SearchField::Name => "name",
            SearchField::Department => "department",
        }
    }
}

impl fmt::Display for SearchField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SearchField {
    type Err = EmployeeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "name" => Ok(SearchField::Name),
            "department" => Ok(SearchField::Department),
            other => Err(EmployeeError::InvalidArgument(format!(
                "invalid search field '{other}', use 'name' or 'department'"
            ))),
        }
    }
}
