//! Application constants for crash point conversion
//!
//! Column names, default locations, and the literal values used when
//! normalizing crash records.

// =============================================================================
// Column Name Constants
// =============================================================================

/// Column names read from the crash CSV export
pub mod columns {
    pub const LATITUDE: &str = "Latitude";
    pub const LONGITUDE: &str = "Longitude";
    pub const CITY_ID: &str = "Rpt_City_ID";
    pub const COUNTY_ID: &str = "Rpt_CRIS_Cnty_ID";
    pub const CRASH_DATE: &str = "Crash_Date";
}

/// Columns that must all appear in the header row before any row is read
pub const REQUIRED_HEADERS: &[&str] = &[
    columns::LATITUDE,
    columns::LONGITUDE,
    columns::CITY_ID,
    columns::COUNTY_ID,
    columns::CRASH_DATE,
];

// =============================================================================
// Normalization Constants
// =============================================================================

/// Substituted for an empty city or county id
pub const UNKNOWN_JURISDICTION: &str = "Unknown";

/// Separator between month, day and year in a crash date
pub const CRASH_DATE_SEPARATOR: char = '/';

/// Maximum number of digits in the month or day part of a crash date
pub const CRASH_DATE_DAY_MONTH_MAX_DIGITS: usize = 2;

/// Number of digits required in the year part of a crash date
pub const CRASH_DATE_YEAR_DIGITS: usize = 4;

/// Row number of the first data row (the header occupies row 1)
pub const FIRST_DATA_ROW_NUMBER: usize = 2;

// =============================================================================
// File and Directory Constants
// =============================================================================

/// Default input CSV location
pub const DEFAULT_INPUT_PATH: &str = "data/cleaned_combined_crashes.csv";

/// Default output JSON location
pub const DEFAULT_OUTPUT_PATH: &str = "data/crashes.json";

/// Directory name under the user config dir
pub const CONFIG_DIR_NAME: &str = "crash-points";

/// Config file name
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Default log filter target
pub const LOG_TARGET: &str = "crash_points";
