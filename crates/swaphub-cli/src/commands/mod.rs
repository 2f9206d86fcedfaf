//! CLI commands module
//!
//! One module per command family; each original application page maps to a
//! family (browse page -> `browse`, dashboard -> `dashboard`, and so on).

pub mod admin;
pub mod auth;
pub mod browse;
pub mod config;
pub mod dashboard;
pub mod listing;
pub mod swap;

use crate::output::OutputFormat;
use swaphub_core::ApiClient;

/// Shared context for all commands
pub struct Context {
    pub client: ApiClient,
    pub format: OutputFormat,
    pub quiet: bool,
}
