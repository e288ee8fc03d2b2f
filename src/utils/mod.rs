pub mod clock;
pub mod duration;
pub mod report;

pub use clock::{Clock, FixedClock, SystemClock};
pub use duration::format_duration;
