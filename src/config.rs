//! Application-level configuration constants.

// UI Behavior
pub const DEBOUNCE_MS: u32 = 750;

// Catalog resource
pub const CATALOG_URL: &str =
    "https://matthewtopping.com.au/resources/drax-calculator/conversion-db.json";

// Display
pub const ROUND_DECIMALS: i32 = 2;
pub const WEIGHT_UNIT_SUFFIX: &str = "kg";

/// Series names that get a dedicated glyph instead of their first letter.
pub const SERIES_GLYPHS: &[(&str, &str)] = &[("Infinity", "∞"), ("Alpha", "α")];

pub const LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;
