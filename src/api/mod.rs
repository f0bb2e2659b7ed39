//! Typed client for the remote marketplace API.
//!
//! The marketplace is an external collaborator: catalog, reviews, and user
//! data all come from HTTP endpoints with ad hoc per-endpoint JSON
//! envelopes. Everything is parsed into explicit structs at this boundary;
//! nothing downstream ever sees untyped payloads.

mod client;
mod error;
mod types;

pub use client::{ApiClient, ItemsQuery};
pub use error::ApiError;
pub use types::{Category, GiftCard, Review, User};
