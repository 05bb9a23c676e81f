//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! `auth` is the session state model, `session` the object that drives it,
//! and `notice` the banner model the session reports through.

pub mod auth;
pub mod notice;
pub mod session;
