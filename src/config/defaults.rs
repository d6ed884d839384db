//! Default values for life-inventory configuration.

/// Default event poll interval in milliseconds.
pub const DEFAULT_TICK_RATE_MS: u64 = 250;

/// Accepted range for the event poll interval in milliseconds.
pub const TICK_RATE_RANGE_MS: std::ops::RangeInclusive<u64> = 16..=5000;

/// Default theme name.
pub const DEFAULT_THEME: &str = "dark";

/// Theme names accepted in configuration.
pub const THEME_NAMES: &[&str] = &["dark", "light", "high-contrast"];
