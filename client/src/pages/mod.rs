//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration. Access control is applied by
//! wrapping pages in `components::protected::Protected` at the route table.

pub mod account;
pub mod admin;
pub mod home;
pub mod login;
pub mod register;
