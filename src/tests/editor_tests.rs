use super::*;
use crate::error::Result;
use crate::fake_api::{employee, FakeApi};
use crate::types::{Employee, EmployeePage, SearchField};
use async_trait::async_trait;

fn draft(name: &str, email: &str, department: &str) -> EmployeeDraft {
    EmployeeDraft {
        name: name.to_string(),
        email: email.to_string(),
        department: department.to_string(),
    }
}

fn fill(editor: &mut EmployeeEditor, name: &str, email: &str, department: &str) {
    editor.set_field(Field::Name, name);
    editor.set_field(Field::Email, email);
    editor.set_field(Field::Department, department);
}

/// Server that turns down every create with a field message.
struct RejectingApi;

#[async_trait]
impl EmployeeApi for RejectingApi {
    async fn fetch_all(&self) -> Result<Vec<Employee>> {
        Ok(Vec::new())
    }

    async fn fetch_one(&self, id: &EmployeeId) -> Result<Employee> {
        Err(EmployeeError::NotFound(id.to_string()))
    }

    async fn create(&self, _draft: &EmployeeDraft) -> Result<Employee> {
        Err(EmployeeError::Validation {
            messages: vec!["Employee with email ada@example.com already exists".to_string()],
        })
    }

    async fn update(&self, id: &EmployeeId, _draft: &EmployeeDraft) -> Result<()> {
        Err(EmployeeError::NotFound(id.to_string()))
    }

    async fn remove(&self, id: &EmployeeId) -> Result<()> {
        Err(EmployeeError::NotFound(id.to_string()))
    }

    async fn fetch_page(&self, _page: u32, _size: u32) -> Result<EmployeePage> {
        Ok(EmployeePage::default())
    }

    async fn search(
        &self,
        _term: &str,
        _field: SearchField,
        _page: u32,
        _size: u32,
    ) -> Result<EmployeePage> {
        Ok(EmployeePage::default())
    }
}

#[test]
fn validate_reports_all_three_fields() {
    let errors = validate(&draft("", "abc", ""));

    assert_eq!(errors.len(), 3);
    assert_eq!(errors[&Field::Name], "Name is required");
    assert_eq!(errors[&Field::Email], "Invalid email format");
    assert_eq!(errors[&Field::Department], "Department is required");
}

#[test]
fn validate_is_repeatable() {
    let candidate = draft("  ", "ada@", "Engineering");
    assert_eq!(validate(&candidate), validate(&candidate));
}

#[test]
fn email_rules() {
    let check = |email: &str| validate(&draft("Ada", email, "R&D")).remove(&Field::Email);

    assert_eq!(check("").as_deref(), Some("Email is required"));
    assert_eq!(check("   ").as_deref(), Some("Email is required"));
    assert_eq!(check("ada@example").as_deref(), Some("Invalid email format"));
    assert_eq!(check("ada example.com").as_deref(), Some("Invalid email format"));
    assert_eq!(check("ada@example.com"), None);
}

#[tokio::test]
async fn valid_draft_in_create_mode_calls_create_once() {
    let api = FakeApi::empty();
    let mut editor = EmployeeEditor::create(api.clone());
    fill(&mut editor, "Ada Lovelace", "ada@example.com", "Engineering");

    let outcome = editor.submit().await;

    assert_eq!(outcome, SubmitOutcome::Saved(EmployeeId::Number(1)));
    assert_eq!(api.calls(), vec!["create"]);
    assert_eq!(api.call_count("update"), 0);
    assert_eq!(editor.success_message(), Some(ADDED));
    assert!(editor.field_errors().is_empty());
    assert!(!editor.is_busy());
    assert_eq!(api.stored()[0].email, "ada@example.com");
}

#[tokio::test]
async fn invalid_draft_never_reaches_the_server() {
    let api = FakeApi::empty();
    let mut editor = EmployeeEditor::create(api.clone());
    fill(&mut editor, "", "abc", "");

    let outcome = editor.submit().await;

    assert_eq!(outcome, SubmitOutcome::Invalid);
    assert!(api.calls().is_empty());
    let fields: Vec<Field> = editor.field_errors().keys().copied().collect();
    assert_eq!(fields, Field::ALL);
    assert_eq!(editor.submit_error(), None);
    assert_eq!(editor.success_message(), None);
}

#[tokio::test]
async fn set_field_clears_only_its_own_error() {
    let api = FakeApi::empty();
    let mut editor = EmployeeEditor::create(api);
    editor.submit().await;
    assert_eq!(editor.field_errors().len(), 3);

    editor.set_field(Field::Email, "still wrong");

    assert!(!editor.field_errors().contains_key(&Field::Email));
    assert!(editor.field_errors().contains_key(&Field::Name));
    assert!(editor.field_errors().contains_key(&Field::Department));
}

#[tokio::test]
async fn edit_mode_loads_then_updates() {
    let api = FakeApi::with_employees(vec![employee(7, "Grace Hopper", "Navy")]);
    let mut editor = EmployeeEditor::edit(api.clone(), EmployeeId::Number(7));
    assert!(editor.is_edit_mode());

    editor.load().await;
    assert_eq!(editor.draft().name, "Grace Hopper");
    assert_eq!(editor.fetch_error(), None);

    editor.set_field(Field::Department, "Computing");
    let outcome = editor.submit().await;

    assert_eq!(outcome, SubmitOutcome::Saved(EmployeeId::Number(7)));
    assert_eq!(api.calls(), vec!["fetch_one", "update"]);
    assert_eq!(api.stored()[0].department, "Computing");
    assert_eq!(editor.success_message(), Some(UPDATED));
}

#[tokio::test]
async fn load_of_unknown_record_sets_fetch_error() {
    let api = FakeApi::empty();
    let mut editor = EmployeeEditor::edit(api, EmployeeId::Number(404));

    editor.load().await;

    assert_eq!(editor.fetch_error(), Some(FETCH_FAILED));
    assert_eq!(editor.draft(), &EmployeeDraft::default());
    assert!(!editor.is_busy());
}

#[tokio::test]
async fn load_in_create_mode_does_nothing() {
    let api = FakeApi::empty();
    let mut editor = EmployeeEditor::create(api.clone());

    editor.load().await;

    assert!(api.calls().is_empty());
    assert!(!editor.is_edit_mode());
}

#[tokio::test]
async fn transport_failure_sets_submit_error() {
    let api = FakeApi::empty();
    api.fail("create");
    let mut editor = EmployeeEditor::create(api.clone());
    fill(&mut editor, "Ada Lovelace", "ada@example.com", "Engineering");

    let outcome = editor.submit().await;

    assert_eq!(outcome, SubmitOutcome::Failed);
    assert_eq!(editor.submit_error(), Some(SAVE_FAILED));
    assert_eq!(editor.success_message(), None);
    assert!(!editor.is_busy());
    assert!(api.stored().is_empty());
}

#[tokio::test]
async fn server_rejection_is_shown_with_its_reason() {
    let mut editor = EmployeeEditor::create(Arc::new(RejectingApi));
    fill(&mut editor, "Ada Lovelace", "ada@example.com", "Engineering");

    let outcome = editor.submit().await;

    assert_eq!(outcome, SubmitOutcome::Failed);
    let message = editor.submit_error().unwrap();
    assert!(message.starts_with(SAVE_FAILED));
    assert!(message.contains("already exists"));
}
