//! Config commands
//!
//! The client is configured through the environment; this surface shows
//! what the CLI resolved so misdirected requests are easy to diagnose.

use anyhow::Result;
use clap::Subcommand;
use serde::Serialize;
use tabled::Tabled;

use crate::output::{print_error, print_info, print_output};
use swaphub_core::session::default_session_path;

use super::Context;

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Show the resolved client configuration
    Show,

    /// Get a single configuration value
    Get {
        /// Configuration key (api_base, media_base, session_path)
        key: String,
    },
}

/// Config row for table display
#[derive(Debug, Serialize, Tabled)]
pub struct ConfigRow {
    #[tabled(rename = "Key")]
    pub key: String,
    #[tabled(rename = "Value")]
    pub value: String,
    #[tabled(rename = "Source")]
    pub source: String,
}

fn resolve_rows(ctx: &Context) -> Result<Vec<ConfigRow>> {
    let api_source = if std::env::var("SWAPHUB_API_BASE_URL").is_ok() {
        "env"
    } else {
        "default"
    };
    let session_source = if std::env::var("SWAPHUB_SESSION_PATH").is_ok() {
        "env"
    } else {
        "default"
    };

    Ok(vec![
        ConfigRow {
            key: "api_base".to_string(),
            value: ctx.client.config().base_url().to_string(),
            source: api_source.to_string(),
        },
        ConfigRow {
            key: "media_base".to_string(),
            value: ctx.client.config().media_base_url(),
            source: "derived".to_string(),
        },
        ConfigRow {
            key: "session_path".to_string(),
            value: default_session_path()?.display().to_string(),
            source: session_source.to_string(),
        },
    ])
}

pub async fn execute(ctx: &Context, action: ConfigAction) -> Result<()> {
    match action {
        ConfigAction::Show => {
            let rows = resolve_rows(ctx)?;
            print_output(&rows, ctx.format)?;
            Ok(())
        }

        ConfigAction::Get { key } => {
            let rows = resolve_rows(ctx)?;
            if let Some(row) = rows.iter().find(|r| r.key.eq_ignore_ascii_case(&key)) {
                print_info(&format!("{} = {}", row.key, row.value), ctx.quiet);
            } else {
                print_error(&format!(
                    "Unknown config key: {}. Available: api_base, media_base, session_path",
                    key
                ));
            }
            Ok(())
        }
    }
}
