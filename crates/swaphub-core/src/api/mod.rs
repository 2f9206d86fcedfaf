//! Resource clients for the SwapHub REST backend
//!
//! ```text
//! api/
//! ├── mod.rs    - module exports
//! ├── client.rs - ApiClient struct and shared request plumbing
//! ├── auth.rs   - register / login / logout
//! ├── users.rs  - profile, dashboard, activity, liked items
//! ├── items.rs  - listings: browse, create, edit, like, categories
//! ├── swaps.rs  - swap requests and point redemption
//! └── admin.rs  - moderation: reports, approve, flag
//! ```

pub mod admin;
pub mod auth;
pub mod client;
pub mod items;
pub mod swaps;
pub mod users;

pub use client::ApiClient;
