//! Authentication operations
//!
//! Successful register/login calls are the only operations that create the
//! persisted session; logout is the only one that destroys it.

use reqwest::Method;
use serde::Deserialize;

use crate::error::Result;
use crate::models::{LoginRequest, RegisterRequest, UserProfile};
use crate::session::Session;

use super::client::ApiClient;

/// Wire shape of register/login responses
#[derive(Debug, Deserialize)]
struct AuthResponse {
    token: String,
    user: UserProfile,
}

impl ApiClient {
    /// Register a new account. Persists `{token, user}` on success.
    ///
    /// The confirmation field on [`RegisterRequest`] is never transmitted;
    /// interactive flows check it via [`crate::forms::RegistrationForm`]
    /// before this call is made.
    pub async fn register(&self, request: &RegisterRequest) -> Result<Session> {
        let response: AuthResponse = self
            .send_json(
                self.request(Method::POST, "/users/register/").json(request),
                "register",
            )
            .await?;

        let session = Session {
            token: response.token,
            user: response.user,
        };
        self.session().set(&session)?;
        log::info!("Registered and logged in as {}", session.user.username);
        Ok(session)
    }

    /// Log in with username (or email) and password. Persists the session.
    pub async fn login(&self, request: &LoginRequest) -> Result<Session> {
        let response: AuthResponse = self
            .send_json(
                self.request(Method::POST, "/users/login/").json(request),
                "login",
            )
            .await?;

        let session = Session {
            token: response.token,
            user: response.user,
        };
        self.session().set(&session)?;
        log::info!("Logged in as {}", session.user.username);
        Ok(session)
    }
}
