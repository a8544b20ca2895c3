//! List view state: the loaded result set, the active search term and the
//! current page. Paging is done locally over whatever was last loaded.

use std::sync::Arc;

use tracing::{debug, warn};

use crate::client::EmployeeApi;
use crate::config::DEFAULT_PAGE_SIZE;
use crate::error::Result;
use crate::types::{Employee, EmployeeId, SearchField};

pub const LOAD_FAILED: &str = "Failed to load employees. Please try again later.";
pub const SEARCH_FAILED: &str =
    "An error occurred while searching. Please try again or use a different search term.";
pub const DELETE_FAILED: &str = "Failed to delete employee. Please try again later.";

/// Server page size used when collecting every search match.
const SEARCH_FETCH_SIZE: u32 = 100;

/// Why the visible page is empty, if it is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmptyState {
    /// Nothing loaded and no search is active.
    NoEmployees,
    /// A search is active and matched nothing.
    NoMatches,
    /// There are rows to show.
    None,
}

pub struct EmployeeList {
    api: Arc<dyn EmployeeApi>,
    records: Vec<Employee>,
    search_term: String,
    page: usize,
    page_size: usize,
    error: Option<String>,
    busy: bool,
}

impl EmployeeList {
    pub fn new(api: Arc<dyn EmployeeApi>) -> Self {
        Self::with_page_size(api, DEFAULT_PAGE_SIZE)
    }

    /// `page_size` is clamped to at least 1.
    pub fn with_page_size(api: Arc<dyn EmployeeApi>, page_size: usize) -> Self {
        Self {
            api,
            records: Vec::new(),
            search_term: String::new(),
            page: 1,
            page_size: page_size.max(1),
            error: None,
            busy: false,
        }
    }

    pub fn records(&self) -> &[Employee] {
        &self.records
    }

    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    pub fn is_searching(&self) -> bool {
        !self.search_term.is_empty()
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn dismiss_error(&mut self) {
        self.error = None;
    }

    pub fn is_busy(&self) -> bool {
        self.busy
    }

    /// Replace the result set with every record on the server.
    pub async fn load(&mut self) {
        self.error = None;
        self.busy = true;
        let result = self.api.fetch_all().await;
        self.busy = false;

        match result {
            Ok(records) => {
                debug!(count = records.len(), "employees loaded");
                self.records = records;
                self.clamp_page();
            }
            Err(e) => {
                warn!(error = %e, transport = e.is_transport(), "loading employees failed");
                self.fail(LOAD_FAILED);
            }
        }
    }

    /// Replace the result set with every record whose name contains `term`.
    /// A blank term is the same as [`EmployeeList::load`].
    pub async fn search(&mut self, term: &str) {
        let term = term.trim();
        if term.is_empty() {
            self.search_term.clear();
            self.load().await;
            return;
        }

        self.search_term = term.to_string();
        self.error = None;
        self.busy = true;
        let result = self.collect_matches(term).await;
        self.busy = false;

        match result {
            Ok(records) => {
                debug!(term, count = records.len(), "search finished");
                self.records = records;
                self.page = 1;
            }
            Err(e) => {
                warn!(term, error = %e, "search failed");
                self.fail(SEARCH_FAILED);
            }
        }
    }

    pub async fn clear_search(&mut self) {
        self.search_term.clear();
        self.error = None;
        self.load().await;
    }

    /// Re-run whichever query produced the current result set.
    pub async fn refresh(&mut self) {
        if self.is_searching() {
            let term = self.search_term.clone();
            self.search(&term).await;
        } else {
            self.load().await;
        }
    }

    /// Delete a record, then reload the active view from the server.
    /// On failure the loaded records are left exactly as they were.
    pub async fn delete_record(&mut self, id: &EmployeeId) -> bool {
        self.error = None;
        self.busy = true;
        let result = self.api.remove(id).await;
        self.busy = false;

        match result {
            Ok(()) => {
                debug!(%id, "employee deleted");
                self.refresh().await;
                true
            }
            Err(e) => {
                warn!(%id, error = %e, "deleting employee failed");
                self.error = Some(DELETE_FAILED.to_string());
                false
            }
        }
    }

    pub fn page_count(&self) -> usize {
        self.records.len().div_ceil(self.page_size)
    }

    /// The rows of the current page, clipped to the loaded records.
    pub fn visible_page(&self) -> &[Employee] {
        let start = ((self.page - 1) * self.page_size).min(self.records.len());
        let end = (self.page * self.page_size).min(self.records.len());
        &self.records[start..end]
    }

    pub fn go_to_page(&mut self, page: usize) {
        self.page = page.clamp(1, self.last_page());
    }

    pub fn next_page(&mut self) {
        if self.page < self.last_page() {
            self.page += 1;
        }
    }

    pub fn prev_page(&mut self) {
        if self.page > 1 {
            self.page -= 1;
        }
    }

    pub fn empty_state(&self) -> EmptyState {
        if !self.visible_page().is_empty() {
            EmptyState::None
        } else if self.is_searching() {
            EmptyState::NoMatches
        } else {
            EmptyState::NoEmployees
        }
    }

    async fn collect_matches(&self, term: &str) -> Result<Vec<Employee>> {
        let mut records = Vec::new();
        let mut page: u32 = 0;
        loop {
            let result = self
                .api
                .search(term, SearchField::Name, page, SEARCH_FETCH_SIZE)
                .await?;
            let exhausted = result.employees.is_empty();
            records.extend(result.employees);

            // Stop on the requested page index, never the server's echo of it.
            if exhausted
                || page.saturating_add(1) >= result.total_pages
                || records.len() as u64 >= result.total_items
            {
                return Ok(records);
            }
            page += 1;
        }
    }

    /// With no records there is still a page 1, showing nothing.
    fn last_page(&self) -> usize {
        self.page_count().max(1)
    }

    fn clamp_page(&mut self) {
        self.page = self.page.clamp(1, self.last_page());
    }

    fn fail(&mut self, message: &str) {
        self.error = Some(message.to_string());
        self.records.clear();
        self.page = 1;
    }
}

#[cfg(test)]
#[path = "tests/list_tests.rs"]
mod tests;
