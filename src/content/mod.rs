//! Content module - the post model

mod post;

pub use post::{long_date, parse_date, short_date, Post};
