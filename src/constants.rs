//! Shared constants used across the application.

/// User agent string sent with feed requests.
pub const USER_AGENT: &str = concat!("apod-gallery/", env!("CARGO_PKG_VERSION"));

/// Date of the first entry in the feed; earlier dates are rejected upstream.
pub const FIRST_FEED_DATE: &str = "1995-06-16";

/// Number of days (inclusive) in the range the search form starts with.
pub const DEFAULT_RANGE_DAYS: i64 = 9;
