use std::sync::Arc;

use serde_json::json;
use tabled::Tabled;

use crate::cli::{DeleteArgs, ListArgs};
use crate::client::EmployeeApi;
use crate::error::{EmployeeError, Result};
use crate::list::{EmployeeList, EmptyState};
use crate::output::{self, truncate};
use crate::types::{Employee, EmployeeId};

#[derive(Tabled)]
pub(crate) struct EmployeeRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Email")]
    email: String,
    #[tabled(rename = "Department")]
    department: String,
}

impl From<&Employee> for EmployeeRow {
    fn from(employee: &Employee) -> Self {
        Self {
            id: employee.id.to_string(),
            name: truncate(&employee.name, 40),
            email: truncate(&employee.email, 40),
            department: truncate(&employee.department, 30),
        }
    }
}

pub async fn list(api: Arc<dyn EmployeeApi>, page_size: usize, args: ListArgs) -> Result<()> {
    let mut view = EmployeeList::with_page_size(api, page_size);
    open(&mut view, &args).await?;
    render(&view);
    Ok(())
}

pub async fn delete(api: Arc<dyn EmployeeApi>, page_size: usize, args: DeleteArgs) -> Result<()> {
    let mut view = EmployeeList::with_page_size(api, page_size);
    open(&mut view, &args.view).await?;

    let id = EmployeeId::from(args.id.as_str());
    if !view.delete_record(&id).await {
        return Err(failure(&view));
    }

    output::success(&format!("Employee {id} deleted"));
    if let Some(error) = view.error() {
        return Err(EmployeeError::ActionFailed(error.to_string()));
    }
    render(&view);
    Ok(())
}

/// Bring the list to the state the user asked for: loaded or searched,
/// then moved to the requested page.
async fn open(view: &mut EmployeeList, args: &ListArgs) -> Result<()> {
    match args.search.as_deref() {
        Some(term) => view.search(term).await,
        None => view.load().await,
    }
    if view.error().is_some() {
        return Err(failure(view));
    }
    view.go_to_page(args.page);
    Ok(())
}

fn failure(view: &EmployeeList) -> EmployeeError {
    EmployeeError::ActionFailed(view.error().unwrap_or_default().to_string())
}

fn render(view: &EmployeeList) {
    if output::is_json_output() {
        output::print_json(&json!({
            "searchTerm": view.search_term(),
            "page": view.page(),
            "pageCount": view.page_count(),
            "total": view.records().len(),
            "employees": view.visible_page(),
        }));
        return;
    }

    if view.is_searching() {
        output::info(&format!(
            "Showing results for \"{}\" - {} employee(s) found",
            view.search_term(),
            view.records().len()
        ));
    }

    match view.empty_state() {
        EmptyState::NoMatches => println!("No matching employees found"),
        EmptyState::NoEmployees => println!("No employees found"),
        EmptyState::None => {
            output::print_table(view.visible_page(), |e| EmployeeRow::from(e));
            println!("Page {} of {}", view.page(), view.page_count());
        }
    }
}
