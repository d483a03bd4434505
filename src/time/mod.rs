//! Clock access and timezone conversion.
//!
//! - [`source`]: the `TimeSource` trait with real and frozen clocks
//! - [`convert`]: UTC to local-time conversion backed by `chrono-tz`

pub mod convert;
pub mod source;

pub use convert::{ConversionError, parse_timezone, to_local_instant, to_local_time};
pub use source::{FixedTimeSource, RealTimeSource, TimeSource};
