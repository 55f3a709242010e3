//! Display formatters for dashboard rendering.
//!
//! Pure numeric-to-string conversions with no failure modes. Inputs are
//! unsigned, so negative and non-finite values are unrepresentable.

pub mod bytes;
pub mod duration;

pub use bytes::format_bytes;
pub use duration::format_duration;
