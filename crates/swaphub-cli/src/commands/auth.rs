//! Account commands: register, login, logout, whoami

use anyhow::Result;
use clap::Subcommand;
use serde::Serialize;
use tabled::Tabled;

use crate::output::{print_info, print_single, print_success};
use swaphub_core::forms::RegistrationForm;
use swaphub_core::{LoginRequest, UserProfile};

use super::Context;

#[derive(Subcommand)]
pub enum AuthAction {
    /// Register a new account (grants the welcome point bonus)
    Register {
        /// Username (at least 4 characters)
        #[arg(short, long)]
        username: String,

        /// Email address
        #[arg(short, long)]
        email: String,

        /// Password (min 8 chars with upper, lower, and digit)
        #[arg(short, long)]
        password: String,

        /// Password confirmation; defaults to the password itself
        #[arg(long)]
        confirm: Option<String>,

        /// First name
        #[arg(long)]
        first_name: Option<String>,

        /// Last name
        #[arg(long)]
        last_name: Option<String>,

        /// Location shown on your public profile
        #[arg(long)]
        location: Option<String>,
    },

    /// Log in with username (or email) and password
    Login {
        /// Username or email
        #[arg(short, long)]
        username: String,

        /// Password
        #[arg(short, long)]
        password: String,
    },

    /// Clear the stored session
    Logout,

    /// Show the logged-in user
    Whoami,
}

/// Profile row for table display
#[derive(Debug, Serialize, Tabled)]
pub struct ProfileRow {
    #[tabled(rename = "ID")]
    pub id: i64,
    #[tabled(rename = "Username")]
    pub username: String,
    #[tabled(rename = "Email")]
    pub email: String,
    #[tabled(rename = "Points")]
    pub points: i64,
    #[tabled(rename = "Items")]
    pub total_items: i64,
    #[tabled(rename = "Swapped")]
    pub items_swapped: i64,
}

impl From<UserProfile> for ProfileRow {
    fn from(user: UserProfile) -> Self {
        Self {
            id: user.id,
            username: user.username,
            email: user.email,
            points: user.points,
            total_items: user.total_items,
            items_swapped: user.items_swapped,
        }
    }
}

pub async fn execute(ctx: &Context, action: AuthAction) -> Result<()> {
    match action {
        AuthAction::Register {
            username,
            email,
            password,
            confirm,
            first_name,
            last_name,
            location,
        } => {
            let mut form = RegistrationForm::new();
            form.username = username;
            form.email = email;
            form.password_confirm = confirm.unwrap_or_else(|| password.clone());
            form.password = password;
            form.first_name = first_name;
            form.last_name = last_name;
            form.location = location;

            let session = form.submit(&ctx.client).await?;
            print_success(
                &format!(
                    "Welcome, {}! You start with {} points.",
                    session.user.username, session.user.points
                ),
                ctx.quiet,
            );
            Ok(())
        }

        AuthAction::Login { username, password } => {
            let session = ctx
                .client
                .login(&LoginRequest { username, password })
                .await?;
            print_success(&format!("Logged in as {}", session.user.username), ctx.quiet);
            Ok(())
        }

        AuthAction::Logout => {
            ctx.client.logout()?;
            print_success("Logged out", ctx.quiet);
            Ok(())
        }

        AuthAction::Whoami => {
            if !ctx.client.is_authenticated() {
                print_info("Not logged in", ctx.quiet);
                return Ok(());
            }
            // Refetch so the stats are current rather than the cached record
            let profile = ctx.client.get_profile().await?;
            print_single(&ProfileRow::from(profile), ctx.format)?;
            Ok(())
        }
    }
}
