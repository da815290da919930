//! Per-route page components.
//!
//! Each page owns its own loading → success/error state and talks to the
//! backends through the [`crate::net`] clients.

pub mod dashboard;
pub mod home;
pub mod login;
pub mod post_detail;
pub mod post_edit;
pub mod post_new;
pub mod posts;
pub mod register;
