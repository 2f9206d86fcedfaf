//! # swaphub-core
//!
//! Typed API client for the SwapHub peer-to-peer item-swap marketplace.
//!
//! This crate provides:
//! - Resource clients for the REST backend (`api` module)
//! - Wire-format data models (`models` module)
//! - Session persistence behind an injectable store (`session` module)
//! - Form state machines with local validation (`forms` module)
//! - Base URL / media URL configuration (`config` module)
//! - Unified error handling (`error` module)
//!
//! Every operation is fire-and-await with no retry, deduplication, or
//! cancellation: a failed request is reported once and the caller decides
//! whether to trigger it again.

pub mod api;
pub mod config;
pub mod error;
pub mod forms;
pub mod models;
pub mod session;

// Re-exports for convenience
pub use api::ApiClient;
pub use config::ClientConfig;
pub use error::{Error, ErrorKind, Result};
pub use session::{FileSessionStore, MemorySessionStore, Session, SessionStore};

// Re-export commonly used types from models
pub use models::{
    ActivityItem, CategoryOptions, DashboardStats, ImageAttachment, Item, ItemFilters, ItemPatch,
    ItemStatus, ItemUpdate, LikeResponse, LoginRequest, NewListing, NewSwap, Page, Pagination,
    PlatformStats, ProfilePatch, RedeemResponse, RegisterRequest, ReportedItem, SwapRequest,
    SwapStatus, UserProfile, UserSummary,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Returns the library version
pub fn version() -> &'static str {
    VERSION
}
