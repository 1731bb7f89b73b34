pub mod current_time;
pub mod local_time;

pub use current_time::{CurrentTime, ShortTime};
pub use local_time::LocalTimeInfo;
