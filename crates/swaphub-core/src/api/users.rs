//! User profile and dashboard operations

use reqwest::Method;

use crate::error::{Error, Result};
use crate::models::{ActivityItem, DashboardStats, Item, MaybeWrapped, ProfilePatch, UserProfile};

use super::client::ApiClient;

impl ApiClient {
    /// Fetch the current user's full profile.
    pub async fn get_profile(&self) -> Result<UserProfile> {
        self.send_json(self.request(Method::GET, "/users/me/"), "fetch profile")
            .await
    }

    /// Fetch another user's public profile. Private profiles come back with
    /// stats redacted by the server.
    pub async fn get_public_profile(&self, user_id: i64) -> Result<UserProfile> {
        self.send_json(
            self.request(Method::GET, &format!("/users/{}/", user_id)),
            "fetch profile",
        )
        .await
    }

    /// Update the current user's profile and refresh the stored user record.
    pub async fn update_profile(&self, patch: &ProfilePatch) -> Result<UserProfile> {
        let session = self
            .session()
            .get()
            .ok_or_else(|| Error::session("Not logged in"))?;

        let updated: UserProfile = self
            .send_json(
                self.request(Method::PATCH, &format!("/users/{}/", session.user.id))
                    .json(patch),
                "update profile",
            )
            .await?;

        let mut session = session;
        session.user = updated.clone();
        self.session().set(&session)?;
        Ok(updated)
    }

    /// Fetch dashboard statistics.
    pub async fn get_dashboard_stats(&self) -> Result<DashboardStats> {
        self.send_json(
            self.request(Method::GET, "/users/dashboard/"),
            "fetch dashboard stats",
        )
        .await
    }

    /// Fetch the user's liked items.
    pub async fn get_liked_items(&self) -> Result<Vec<Item>> {
        let wrapped: MaybeWrapped<Item> = self
            .send_json(
                self.request(Method::GET, "/users/liked_items/"),
                "fetch liked items",
            )
            .await?;
        Ok(wrapped.into_vec())
    }

    /// Fetch the user's recent-activity feed.
    pub async fn get_my_activity(&self) -> Result<Vec<ActivityItem>> {
        let wrapped: MaybeWrapped<ActivityItem> = self
            .send_json(
                self.request(Method::GET, "/users/my_activity/"),
                "fetch activity",
            )
            .await?;
        Ok(wrapped.into_vec())
    }
}
