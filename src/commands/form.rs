use std::sync::Arc;

use colored::Colorize;
use serde_json::json;

use crate::cli::{AddArgs, EditArgs};
use crate::client::EmployeeApi;
use crate::editor::{EmployeeEditor, Field, SubmitOutcome, SAVE_FAILED};
use crate::error::{EmployeeError, Result};
use crate::output;
use crate::types::{Employee, EmployeeId};

pub async fn show(api: Arc<dyn EmployeeApi>, id: &str) -> Result<()> {
    let employee = api.fetch_one(&EmployeeId::from(id)).await?;

    output::print_item(&employee, |e: &Employee| {
        println!("{} {}", e.name.bold(), format!("#{}", e.id).bright_black());
        println!("{}", "─".repeat(40));
        println!("Email:      {}", e.email);
        println!("Department: {}", e.department);
    });

    Ok(())
}

pub async fn add(api: Arc<dyn EmployeeApi>, args: AddArgs) -> Result<()> {
    let mut editor = EmployeeEditor::create(api);
    editor.set_field(Field::Name, args.name);
    editor.set_field(Field::Email, args.email);
    editor.set_field(Field::Department, args.department);
    submit(editor).await
}

pub async fn edit(api: Arc<dyn EmployeeApi>, args: EditArgs) -> Result<()> {
    let mut editor = EmployeeEditor::edit(api, EmployeeId::from(args.id.as_str()));
    editor.load().await;
    if let Some(error) = editor.fetch_error() {
        return Err(EmployeeError::ActionFailed(error.to_string()));
    }

    let changes = [
        (Field::Name, args.name),
        (Field::Email, args.email),
        (Field::Department, args.department),
    ];
    for (field, value) in changes {
        if let Some(value) = value {
            editor.set_field(field, value);
        }
    }

    submit(editor).await
}

async fn submit(mut editor: EmployeeEditor) -> Result<()> {
    match editor.submit().await {
        SubmitOutcome::Saved(id) => {
            let message = editor.success_message().unwrap_or_default();
            if output::is_json_output() {
                output::print_json(&json!({ "id": id, "message": message }));
            } else {
                output::success(&format!("{message} (ID {id})"));
            }
            Ok(())
        }
        SubmitOutcome::Invalid => {
            let errors = editor.field_errors();
            for (field, message) in errors {
                output::problem(&format!("{field}: {message}"));
            }
            Err(EmployeeError::InvalidArgument(format!(
                "{} invalid field(s), nothing was saved",
                errors.len()
            )))
        }
        SubmitOutcome::Failed => Err(EmployeeError::ActionFailed(
            editor.submit_error().unwrap_or(SAVE_FAILED).to_string(),
        )),
    }
}
