/// Standard date format used throughout the codebase: "2025-01-15"
pub(crate) const DATE_FORMAT: &str = "%Y-%m-%d";

/// Separates commit records in raw `git log` output. Chosen to be
/// unlikely to appear in commit text.
pub(crate) const RECORD_SEPARATOR: &str = "^^^^^";

/// Separates the commit message from the date within a record
pub(crate) const FIELD_SEPARATOR: &str = "|||";

/// Overrides the config directory (mainly for test isolation)
pub(crate) const CONFIG_DIR_ENV: &str = "GITMATE_CONFIG_DIR";

/// File name of the config document inside the config directory
pub(crate) const CONFIG_FILE_NAME: &str = "config.json";
