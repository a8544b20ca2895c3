use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use tracing::{debug, error};
use url::Url;

use crate::config::ClientConfig;
use crate::error::{EmployeeError, Result};
use crate::types::{Employee, EmployeeDraft, EmployeeId, EmployeePage, SearchField};

/// Calls against the remote employee-records service.
///
/// Every failure is returned to the caller; nothing is retried.
#[async_trait]
pub trait EmployeeApi: Send + Sync {
    /// Every record the server currently knows, in server order.
    async fn fetch_all(&self) -> Result<Vec<Employee>>;

    async fn fetch_one(&self, id: &EmployeeId) -> Result<Employee>;

    /// Create a record; the returned employee carries the assigned id.
    async fn create(&self, draft: &EmployeeDraft) -> Result<Employee>;

    async fn update(&self, id: &EmployeeId, draft: &EmployeeDraft) -> Result<()>;

    async fn remove(&self, id: &EmployeeId) -> Result<()>;

    /// One server-side page (0-based) of the unfiltered listing.
    async fn fetch_page(&self, page: u32, size: u32) -> Result<EmployeePage>;

    /// One server-side page (0-based) of records whose `field` contains `term`.
    async fn search(
        &self,
        term: &str,
        field: SearchField,
        page: u32,
        size: u32,
    ) -> Result<EmployeePage>;

    /// Like [`EmployeeApi::search`], with the field given as text. An unknown
    /// field fails before any request is made.
    async fn search_by(
        &self,
        term: &str,
        field: &str,
        page: u32,
        size: u32,
    ) -> Result<EmployeePage> {
        let field: SearchField = field.parse()?;
        self.search(term, field, page, size).await
    }
}

pub struct EmployeeClient {
    http: Client,
    base_url: Url,
}

impl EmployeeClient {
    pub fn new(config: ClientConfig) -> Self {
        Self {
            http: Client::new(),
            base_url: config.base_url,
        }
    }

    fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    fn record_url(&self, id: &EmployeeId) -> Url {
        let id = id.to_string();
        self.endpoint(&[id.as_str()])
    }

    async fn send(
        &self,
        operation: &'static str,
        request: RequestBuilder,
        target: Option<&EmployeeId>,
        accepts_fields: bool,
    ) -> Result<Response> {
        let response = request.send().await.map_err(|e| {
            error!(operation, error = %e, "request failed");
            EmployeeError::Http(e)
        })?;

        let status = response.status();
        debug!(operation, status = status.as_u16(), "response received");

        if status.is_success() {
            return Ok(response);
        }

        let body = response
            .text()
            .await
            .unwrap_or_else(|_| "<failed to read response body>".to_string());
        let err = classify(status, &body, target, accepts_fields);
        error!(operation, status = status.as_u16(), error = %err, "request rejected");
        Err(err)
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        operation: &'static str,
        request: RequestBuilder,
        target: Option<&EmployeeId>,
    ) -> Result<T> {
        let response = self.send(operation, request, target, false).await?;
        Ok(response.json().await?)
    }
}

#[async_trait]
impl EmployeeApi for EmployeeClient {
    async fn fetch_all(&self) -> Result<Vec<Employee>> {
        let request = self.http.get(self.endpoint(&[]));
        self.get_json("fetch_all", request, None).await
    }

    async fn fetch_one(&self, id: &EmployeeId) -> Result<Employee> {
        let request = self.http.get(self.record_url(id));
        self.get_json("fetch_one", request, Some(id)).await
    }

    async fn create(&self, draft: &EmployeeDraft) -> Result<Employee> {
        let request = self.http.post(self.endpoint(&[])).json(draft);
        let response = self.send("create", request, None, true).await?;
        Ok(response.json().await?)
    }

    async fn update(&self, id: &EmployeeId, draft: &EmployeeDraft) -> Result<()> {
        let request = self.http.put(self.record_url(id)).json(draft);
        self.send("update", request, Some(id), true).await?;
        Ok(())
    }

    async fn remove(&self, id: &EmployeeId) -> Result<()> {
        let request = self.http.delete(self.record_url(id));
        self.send("remove", request, Some(id), false).await?;
        Ok(())
    }

    async fn fetch_page(&self, page: u32, size: u32) -> Result<EmployeePage> {
        check_size(size)?;
        let request = self
            .http
            .get(self.endpoint(&["paginate"]))
            .query(&[("page", page), ("size", size)]);
        self.get_json("fetch_page", request, None).await
    }

    async fn search(
        &self,
        term: &str,
        field: SearchField,
        page: u32,
        size: u32,
    ) -> Result<EmployeePage> {
        check_size(size)?;
        let page = page.to_string();
        let size = size.to_string();
        let request = self
            .http
            .get(self.endpoint(&["search", field.as_str()]))
            .query(&[
                (field.as_str(), term),
                ("page", page.as_str()),
                ("size", size.as_str()),
            ]);
        self.get_json("search", request, None).await
    }
}

fn check_size(size: u32) -> Result<()> {
    if size == 0 {
        return Err(EmployeeError::InvalidArgument(
            "page size must be at least 1".to_string(),
        ));
    }
    Ok(())
}

/// Map a non-success response onto the error taxonomy.
fn classify(
    status: StatusCode,
    body: &str,
    target: Option<&EmployeeId>,
    accepts_fields: bool,
) -> EmployeeError {
    if status == StatusCode::NOT_FOUND {
        if let Some(id) = target {
            return EmployeeError::NotFound(id.to_string());
        }
    }

    let rejects_fields = matches!(
        status,
        StatusCode::BAD_REQUEST | StatusCode::CONFLICT | StatusCode::UNPROCESSABLE_ENTITY
    );
    if accepts_fields && rejects_fields {
        return EmployeeError::Validation {
            messages: validation_messages(body, status),
        };
    }

    let message = match body.trim() {
        "" => status.canonical_reason().unwrap_or("no response body").to_string(),
        text => text.to_string(),
    };
    EmployeeError::Transport {
        status: status.as_u16(),
        message,
    }
}

/// Pull readable messages out of a rejection body. Understands a top-level
/// `message`, an `errors` list, or a plain field-to-message map.
fn validation_messages(body: &str, status: StatusCode) -> Vec<String> {
    let fallback = || match body.trim() {
        "" => vec![status.canonical_reason().unwrap_or("rejected").to_string()],
        text => vec![text.to_string()],
    };

    let Ok(serde_json::Value::Object(map)) = serde_json::from_str::<serde_json::Value>(body)
    else {
        return fallback();
    };

    if let Some(errors) = map.get("errors") {
        let messages: Vec<String> = match errors {
            serde_json::Value::Array(items) => items
                .iter()
                .filter_map(|item| match item {
                    serde_json::Value::String(s) => Some(s.clone()),
                    serde_json::Value::Object(obj) => obj
                        .get("defaultMessage")
                        .or_else(|| obj.get("message"))
                        .and_then(|m| m.as_str())
                        .map(String::from),
                    _ => None,
                })
                .collect(),
            serde_json::Value::Object(fields) => field_messages(fields),
            _ => Vec::new(),
        };
        if !messages.is_empty() {
            return messages;
        }
    }

    if let Some(message) = map.get("message").and_then(|m| m.as_str()) {
        return vec![message.to_string()];
    }

    let messages = field_messages(&map);
    if messages.is_empty() {
        fallback()
    } else {
        messages
    }
}

fn field_messages(fields: &serde_json::Map<String, serde_json::Value>) -> Vec<String> {
    fields
        .iter()
        .filter_map(|(field, value)| value.as_str().map(|msg| format!("{field}: {msg}")))
        .collect()
}

#[cfg(test)]
#[path = "tests/client_tests.rs"]
mod tests;
