//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! `auth_provider` builds the session and its contexts; the other components
//! read those contexts to render chrome and guard routes.

pub mod auth_provider;
pub mod nav_bar;
pub mod notice_banner;
pub mod protected;
