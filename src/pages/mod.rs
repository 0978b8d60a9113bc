//! Routed pages.

pub mod workspace;
