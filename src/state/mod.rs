//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! `session` holds the identity types, `session_store` owns persistence and
//! mutations, and `context` exposes both to the reactive graph.

pub mod context;
pub mod session;
pub mod session_store;
