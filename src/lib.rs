//! Client-side administration of employee records kept by a remote REST
//! service: a gateway client plus the list and editor controllers that the
//! `employees` binary drives.

pub mod cli;
pub mod client;
pub mod commands;
pub mod config;
pub mod editor;
pub mod error;
pub mod list;
pub mod output;
pub mod types;

#[cfg(test)]
#[path = "tests/fake_api.rs"]
mod fake_api;
