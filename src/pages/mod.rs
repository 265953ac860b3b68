//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped data loading and form state. Input validation
//! lives in plain functions next to the page so it can be tested natively.

pub mod admin_users;
pub mod bookings;
pub mod dashboard;
pub mod exports;
pub mod home;
pub mod login;
pub mod lot_reservations;
pub mod lots;
pub mod not_found;
pub mod register;
pub mod reservations;
pub mod unauthorized;
