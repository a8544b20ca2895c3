use std::path::PathBuf;

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::{EmployeeError, Result};

pub const DEFAULT_BASE_URL: &str = "http://localhost:8080/api/employees";
pub const DEFAULT_PAGE_SIZE: usize = 10;

const BASE_URL_ENV: &str = "EMPLOYEES_API_URL";

#[derive(Deserialize, Serialize, Default, Debug, PartialEq)]
pub struct Config {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_size: Option<usize>,
}

impl Config {
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            return Ok(Config::default());
        }

        let contents =
            std::fs::read_to_string(&config_path).map_err(|e| EmployeeError::ConfigRead {
                path: config_path.clone(),
                source: e,
            })?;

        Self::parse(&contents).map_err(|e| EmployeeError::ConfigParse {
            path: config_path,
            source: e,
        })
    }

    pub fn parse(contents: &str) -> std::result::Result<Self, toml::de::Error> {
        toml::from_str(contents)
    }

    pub fn config_path() -> Result<PathBuf> {
        ProjectDirs::from("", "", "employees")
            .map(|dirs| dirs.config_dir().join("config.toml"))
            .ok_or(EmployeeError::NoConfigDir)
    }

    /// Resolve the API base URL: explicit flag, then env var, then config file.
    pub fn resolve_base_url(&self, explicit: Option<&str>) -> String {
        explicit
            .map(String::from)
            .or_else(|| std::env::var(BASE_URL_ENV).ok())
            .or_else(|| self.base_url.clone())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string())
    }

    /// Resolve the list page size, preferring an explicit argument.
    pub fn resolve_page_size(&self, explicit: Option<usize>) -> Result<usize> {
        let size = explicit.or(self.page_size).unwrap_or(DEFAULT_PAGE_SIZE);
        if size == 0 {
            return Err(EmployeeError::InvalidArgument(
                "page size must be at least 1".to_string(),
            ));
        }
        Ok(size)
    }
}

/// Connection settings handed to the gateway client at construction.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub base_url: Url,
}

impl ClientConfig {
    pub fn parse(base_url: &str) -> Result<Self> {
        let url = Url::parse(base_url.trim())
            .map_err(|e| EmployeeError::InvalidArgument(format!("base URL {base_url}: {e}")))?;

        if !matches!(url.scheme(), "http" | "https") || url.cannot_be_a_base() {
            return Err(EmployeeError::InvalidArgument(format!(
                "base URL {base_url} must be an http(s) URL"
            )));
        }

        Ok(Self { base_url: url })
    }
}
