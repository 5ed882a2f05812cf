pub mod dates;
pub mod names;

pub use dates::{compute_day_index, parse_date};
pub use names::concat_name;
