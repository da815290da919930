//! Small presentation helpers shared across pages.

pub mod html;
