//! Network boundary to the chat backend.

pub mod api;
pub mod chat;
pub mod error;
pub mod types;
