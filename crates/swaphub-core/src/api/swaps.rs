//! Swap request operations
//!
//! All status transitions are server-driven; the client only triggers them
//! and re-reads the resulting state. Illegal transitions come back as 409s.

use reqwest::Method;
use serde::Serialize;

use crate::error::Result;
use crate::models::{MaybeWrapped, NewSwap, RedeemResponse, SwapRequest};

use super::client::ApiClient;

#[derive(Debug, Serialize)]
struct TransitionBody {
    #[serde(skip_serializing_if = "Option::is_none")]
    message: Option<String>,
}

#[derive(Debug, Serialize)]
struct RedeemBody {
    item_id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    delivery_address: Option<String>,
}

impl ApiClient {
    /// The user's swap requests, sent and received.
    pub async fn get_my_swaps(&self) -> Result<Vec<SwapRequest>> {
        let wrapped: MaybeWrapped<SwapRequest> = self
            .send_json(self.request(Method::GET, "/swaps/"), "fetch swaps")
            .await?;
        Ok(wrapped.into_vec())
    }

    /// Swap request detail.
    pub async fn get_swap(&self, id: i64) -> Result<SwapRequest> {
        self.send_json(
            self.request(Method::GET, &format!("/swaps/{}/", id)),
            "fetch swap",
        )
        .await
    }

    /// Propose a swap. Both items must belong to different owners; the
    /// server enforces ownership.
    pub async fn create_swap(&self, swap: &NewSwap) -> Result<SwapRequest> {
        self.send_json(
            self.request(Method::POST, "/swaps/").json(swap),
            "create swap",
        )
        .await
    }

    /// Accept a pending swap (requested item's owner only).
    pub async fn accept_swap(&self, id: i64, message: Option<String>) -> Result<SwapRequest> {
        self.transition(id, "accept", message).await
    }

    /// Reject a pending swap (requested item's owner only).
    pub async fn reject_swap(&self, id: i64, message: Option<String>) -> Result<SwapRequest> {
        self.transition(id, "reject", message).await
    }

    /// Mark an accepted swap completed (either party).
    pub async fn complete_swap(&self, id: i64) -> Result<SwapRequest> {
        self.transition(id, "complete", None).await
    }

    /// Cancel a pending swap (requester only).
    pub async fn cancel_swap(&self, id: i64) -> Result<SwapRequest> {
        self.transition(id, "cancel", None).await
    }

    /// Redeem an item with points. The balance deduction is server-atomic;
    /// the client learns the remaining balance from the response.
    pub async fn redeem_item(
        &self,
        item_id: i64,
        delivery_address: Option<String>,
    ) -> Result<RedeemResponse> {
        let body = RedeemBody { item_id, delivery_address };
        self.send_json(
            self.request(Method::POST, "/swaps/redeem/").json(&body),
            "redeem item",
        )
        .await
    }

    async fn transition(
        &self,
        id: i64,
        action: &str,
        message: Option<String>,
    ) -> Result<SwapRequest> {
        let verb = format!("{} swap", action);
        let body = TransitionBody { message };
        self.send_json(
            self.request(Method::POST, &format!("/swaps/{}/{}/", id, action))
                .json(&body),
            &verb,
        )
        .await
    }
}
