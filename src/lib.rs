mod utils;

pub mod input;
pub mod planner;
pub mod sink;
pub mod source;
pub mod time;

#[doc(hidden)]
pub use static_assertions;

pub use planner::compute_suggestions;
