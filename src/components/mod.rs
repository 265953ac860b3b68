//! Reusable UI components shared across pages.
//!
//! SYSTEM CONTEXT
//! ==============
//! `route_guard` gates every route; `nav_bar` is the shared chrome rendered
//! above the router outlet.

pub mod nav_bar;
pub mod route_guard;
