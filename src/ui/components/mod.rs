//! Reusable widgets for the terminal front-end.

mod input;
mod results;

pub use input::QueryInput;
pub use results::{hit_line, truncate_to_width};
