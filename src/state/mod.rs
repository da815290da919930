//! Shared client-side reactive state.
//!
//! Provided as context from the root [`crate::app::App`] component so any
//! page can consume it without prop drilling.

pub mod auth;
