use serde::{Deserialize, Serialize};

use super::Employee;

/// One page of a server-side paginated or filtered listing. A body missing
/// any of the counted fields is rejected rather than read as an empty page.
#[derive(Deserialize, Serialize, Debug, Clone, Default)]
pub struct EmployeePage {
    pub employees: Vec<Employee>,
    /// 0-based, as the server counts.
    #[serde(rename = "currentPage", default)]
    pub current_page: u32,
    #[serde(rename = "totalItems")]
    pub total_items: u64,
    #[serde(rename = "totalPages")]
    pub total_pages: u32,
}

impl EmployeePage {
    /// 1-based page number for display.
    pub fn page_number(&self) -> u32 {
        self.current_page.saturating_add(1)
    }
}
