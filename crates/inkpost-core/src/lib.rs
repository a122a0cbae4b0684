//! Inkpost Core Library
//!
//! Core domain logic for inkpost: posts, comments and the ranked merge
//! search over their titles and bodies.

pub mod config;
pub mod db;
pub mod error;
pub mod format;
pub mod id;
pub mod logging;
pub mod post;
pub mod search;
pub mod store;
