//! Networking modules for the REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` issues bearer-authenticated REST calls, `auth` adapts login and
//! registration into session-store outcomes, and `types` defines the wire
//! schema.

pub mod api;
pub mod auth;
pub mod types;
