//! CLI commands for inkpost

pub mod comment;
pub mod dispatch;
pub mod init;
pub mod post;
pub mod search;
