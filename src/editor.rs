//! Add/edit form state for a single employee record.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::{Arc, OnceLock};

use regex::Regex;
use tracing::{debug, warn};

use crate::client::EmployeeApi;
use crate::error::EmployeeError;
use crate::types::{EmployeeDraft, EmployeeId};

pub const FETCH_FAILED: &str = "Failed to load employee data. Please try again.";
pub const SAVE_FAILED: &str = "Failed to save employee. Please try again.";
pub const ADDED: &str = "Employee added successfully!";
pub const UPDATED: &str = "Employee updated successfully!";

/// An editable field of the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    Name,
    Email,
    Department,
}

impl Field {
    pub const ALL: [Field; 3] = [Field::Name, Field::Email, Field::Department];

    pub fn as_str(self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Department => "department",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Violations keyed by field. Empty means the draft may be submitted.
pub type FieldErrors = BTreeMap<Field, String>;

fn email_pattern() -> &'static Regex {
    static EMAIL: OnceLock<Regex> = OnceLock::new();
    EMAIL.get_or_init(|| Regex::new(r"\S+@\S+\.\S+").expect("email pattern compiles"))
}

/// Check a draft the way the form does before anything is sent.
pub fn validate(draft: &EmployeeDraft) -> FieldErrors {
    let mut errors = FieldErrors::new();

    if draft.name.trim().is_empty() {
        errors.insert(Field::Name, "Name is required".to_string());
    }

    if draft.email.trim().is_empty() {
        errors.insert(Field::Email, "Email is required".to_string());
    } else if !email_pattern().is_match(&draft.email) {
        errors.insert(Field::Email, "Invalid email format".to_string());
    }

    if draft.department.trim().is_empty() {
        errors.insert(Field::Department, "Department is required".to_string());
    }

    errors
}

/// Result of [`EmployeeEditor::submit`]. On `Saved` the caller should leave
/// the form and refresh whatever list it came from.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    Saved(EmployeeId),
    Invalid,
    Failed,
}

pub struct EmployeeEditor {
    api: Arc<dyn EmployeeApi>,
    id: Option<EmployeeId>,
    draft: EmployeeDraft,
    field_errors: FieldErrors,
    fetch_error: Option<String>,
    submit_error: Option<String>,
    success_message: Option<String>,
    busy: bool,
}

impl EmployeeEditor {
    /// Edit mode when `id` is given, create mode otherwise.
    pub fn new(api: Arc<dyn EmployeeApi>, id: Option<EmployeeId>) -> Self {
        Self {
            api,
            id,
            draft: EmployeeDraft::default(),
            field_errors: FieldErrors::new(),
            fetch_error: None,
            submit_error: None,
            success_message: None,
            busy: false,
        }
    }

    pub fn create(api: Arc<dyn EmployeeApi>) -> Self {
        Self::new(api, None)
    }

    pub fn edit(api: Arc<dyn EmployeeApi>, id: EmployeeId) -> Self {
        Self::new(api, Some(id))
    }

    pub fn is_edit_mode(&self) -> bool {
        self.id.is_some()
    }

    pub fn id(&self) -> Option<&EmployeeId> {
        self.id.as_ref()
    }

    pub fn draft(&self) -> &EmployeeDraft {
        &self.draft
    }

    pub fn field_errors(&self) -> &FieldErrors {
        &self.field_errors
    }

    pub fn fetch_error(&self) -> Option<&str> {
        self.fetch_error.as_deref()
    }

    pub fn submit_error(&self) -> Option<&str> {
        self.submit_error.as_deref()
    }

    pub fn success_message(&self) -> Option<&str> {
        self.success_message.as_deref()
    }

    pub fn is_busy(&self) -> bool {
        self.busy
    }

    /// Fill the draft from the server. Does nothing in create mode.
    pub async fn load(&mut self) {
        let Some(id) = self.id.clone() else {
            return;
        };

        self.fetch_error = None;
        self.busy = true;
        let result = self.api.fetch_one(&id).await;
        self.busy = false;

        match result {
            Ok(employee) => {
                debug!(%id, "employee loaded into form");
                self.draft = employee.draft();
            }
            Err(e) => {
                warn!(%id, error = %e, "loading employee failed");
                self.draft = EmployeeDraft::default();
                self.fetch_error = Some(FETCH_FAILED.to_string());
            }
        }
    }

    /// Change one field. Any error shown for that field is cleared; the
    /// value is not re-validated until the next submit.
    pub fn set_field(&mut self, field: Field, value: impl Into<String>) {
        let value = value.into();
        match field {
            Field::Name => self.draft.name = value,
            Field::Email => self.draft.email = value,
            Field::Department => self.draft.department = value,
        }
        self.field_errors.remove(&field);
    }

    pub fn validate(&self) -> FieldErrors {
        validate(&self.draft)
    }

    pub async fn submit(&mut self) -> SubmitOutcome {
        self.field_errors = self.validate();
        if !self.field_errors.is_empty() {
            debug!(count = self.field_errors.len(), "form has invalid fields");
            return SubmitOutcome::Invalid;
        }

        self.submit_error = None;
        self.success_message = None;
        self.busy = true;
        let result = match &self.id {
            Some(id) => self
                .api
                .update(id, &self.draft)
                .await
                .map(|()| id.clone()),
            None => self.api.create(&self.draft).await.map(|created| created.id),
        };
        self.busy = false;

        match result {
            Ok(id) => {
                let message = if self.is_edit_mode() { UPDATED } else { ADDED };
                debug!(%id, message, "employee saved");
                self.success_message = Some(message.to_string());
                SubmitOutcome::Saved(id)
            }
            Err(e) => {
                warn!(error = %e, "saving employee failed");
                self.submit_error = Some(match e {
                    EmployeeError::Validation { messages } => {
                        format!("{SAVE_FAILED} {}", messages.join("; "))
                    }
                    _ => SAVE_FAILED.to_string(),
                });
                SubmitOutcome::Failed
            }
        }
    }
}

#[cfg(test)]
#[path = "tests/editor_tests.rs"]
mod tests;
