pub mod allocate;
pub mod clock;

pub use allocate::{estimate_segment_timestamps, find_segment_at_time};
pub use clock::{format_duration, format_timestamp};
