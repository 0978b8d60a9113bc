//! Client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern (`chat`, `quiz`, `response`, `layout`) and kept
//! free of DOM access so every transition can be tested natively. Components
//! hold these values in signals and only translate events into calls.

pub mod chat;
pub mod layout;
pub mod quiz;
pub mod response;
