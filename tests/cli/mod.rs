pub mod support;

mod comment;
mod logging;
mod post;
mod search;
