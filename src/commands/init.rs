use std::io::{self, Write};

use crate::config::{ClientConfig, Config, DEFAULT_BASE_URL, DEFAULT_PAGE_SIZE};
use crate::error::{EmployeeError, Result};

fn prompt(question: &str) -> Result<String> {
    print!("{question}");
    io::stdout().flush()?;

    let mut input = String::new();
    io::stdin().read_line(&mut input)?;
    Ok(input.trim().to_string())
}

pub async fn run() -> Result<()> {
    let config_path = Config::config_path()?;

    if config_path.exists() {
        let answer = prompt(&format!(
            "Config file already exists at {}. Overwrite? [y/N] ",
            config_path.display()
        ))?;

        if !answer.eq_ignore_ascii_case("y") {
            println!("Aborted.");
            return Ok(());
        }
    }

    println!("Employee Admin Configuration");
    println!("============================\n");

    let base_url = prompt(&format!("Employee service URL [{DEFAULT_BASE_URL}]: "))?;
    let base_url = if base_url.is_empty() {
        None
    } else {
        ClientConfig::parse(&base_url)?;
        Some(base_url)
    };

    let page_size = prompt(&format!("Rows per page [{DEFAULT_PAGE_SIZE}]: "))?;
    let page_size = if page_size.is_empty() {
        None
    } else {
        let size: usize = page_size.parse().map_err(|_| {
            EmployeeError::InvalidArgument(format!("'{page_size}' is not a page size"))
        })?;
        Some(size)
    };

    let config = Config {
        base_url,
        page_size,
    };
    config.resolve_page_size(None)?;

    let contents = toml::to_string(&config).map_err(|e| EmployeeError::ConfigWrite {
        path: config_path.clone(),
        source: io::Error::new(io::ErrorKind::InvalidData, e),
    })?;

    if let Some(parent) = config_path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| EmployeeError::ConfigWrite {
            path: config_path.clone(),
            source: e,
        })?;
    }

    std::fs::write(&config_path, contents).map_err(|e| EmployeeError::ConfigWrite {
        path: config_path.clone(),
        source: e,
    })?;

    println!("\nConfig saved to {}", config_path.display());
    println!("You can now use 'employees' commands!");

    Ok(())
}
