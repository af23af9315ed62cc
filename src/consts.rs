/// Standard date format used throughout the codebase: "2025-01-15"
pub(crate) const DATE_FORMAT: &str = "%Y-%m-%d";

/// Timestamp format of MOCREO exports: "01/15/2025 08:30:00 PM"
pub(crate) const TIMESTAMP_FORMAT: &str = "%m/%d/%Y %I:%M:%S %p";

pub(crate) const TIMESTAMP_COLUMN: &str = "Timestamp";
pub(crate) const TEMPERATURE_COLUMN: &str = "Temperature(Fahrenheit)";

/// Separator between the columns of a rendered panel line
pub(crate) const PANEL_GAP: &str = "    ";
