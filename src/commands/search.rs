use std::sync::Arc;

use crate::cli::{PageArgs, SearchArgs};
use crate::client::EmployeeApi;
use crate::commands::list::EmployeeRow;
use crate::error::Result;
use crate::output;
use crate::types::EmployeePage;

pub async fn search(api: Arc<dyn EmployeeApi>, args: SearchArgs) -> Result<()> {
    let page = api
        .search_by(&args.term, &args.field, args.paging.page, args.paging.size)
        .await?;
    print_page(&page);
    Ok(())
}

pub async fn pages(api: Arc<dyn EmployeeApi>, args: PageArgs) -> Result<()> {
    let page = api.fetch_page(args.page, args.size).await?;
    print_page(&page);
    Ok(())
}

fn print_page(page: &EmployeePage) {
    if output::is_json_output() {
        output::print_json(page);
        return;
    }

    if page.employees.is_empty() {
        println!("No employees found");
    } else {
        output::print_table(&page.employees, |e| EmployeeRow::from(e));
    }
    println!(
        "Page {} of {} ({} total)",
        page.page_number(),
        page.total_pages.max(1),
        page.total_items
    );
}
