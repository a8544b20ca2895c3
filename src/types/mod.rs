mod employee;
mod page;
mod search_field;

pub use employee::{Employee, EmployeeDraft, EmployeeId};
pub use page::EmployeePage;
pub use search_field::SearchField;
