//! Display helpers for provider data: durations, relative timestamps,
//! abbreviated counts and the category name to category id mapping.
//!
//! Everything here is a pure function over strings and numbers.

mod category;
mod count;
mod duration;
mod time;

pub use category::{VideoCategory, category_id};
pub use count::{format_count, format_count_str};
pub use duration::format_duration;
pub use time::{format_time_ago, format_time_ago_now};
