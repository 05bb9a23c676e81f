//! Networking modules for the auth REST endpoints.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` maps auth operations onto requests, `transport` performs them,
//! `types` defines the wire schema, and `error` the failure taxonomy.

pub mod api;
pub mod error;
pub mod transport;
pub mod types;
