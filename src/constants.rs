//! Application-wide constants.
//!
//! Names, defaults and user-facing message texts shared by the CLI and the
//! web API.

/// The display name of the application (human-readable, with proper capitalization).
pub const APP_NAME: &str = "Color Nearest Match";

/// The binary name of the application (used in command examples, lowercase with hyphens).
pub const APP_BINARY_NAME: &str = "hexmatch";

/// Directory name under the platform config directory.
pub const CONFIG_DIR_NAME: &str = "ColorNearestMatch";

/// Input shown when a session starts.
pub const DEFAULT_INPUT: &str = "#ff0000";

/// Result shown before the first match: the default input matched to itself.
pub const INITIAL_MATCH_NAME: &str = "Red";

/// Hex of the initial result.
pub const INITIAL_MATCH_HEX: &str = "#ff0000";

/// Name of the placeholder match answered by the fixed matcher.
pub const PLACEHOLDER_MATCH_NAME: &str = "PANTONE 18-1763 TPX Red";

/// Hex of the placeholder match.
pub const PLACEHOLDER_MATCH_HEX: &str = "#C8102E";

/// Distance of the placeholder match.
pub const PLACEHOLDER_MATCH_DISTANCE: f64 = 12.5;

/// Simulated service latency of the placeholder matcher.
pub const DEFAULT_MATCH_DELAY_MS: u64 = 1000;

/// How long a match request may take before it counts as failed.
pub const DEFAULT_MATCH_TIMEOUT_MS: u64 = 10_000;

/// Default web server port.
pub const DEFAULT_WEB_PORT: u16 = 3001;

/// Default web server bind address.
pub const DEFAULT_WEB_HOST: &str = "127.0.0.1";

/// Web sessions untouched for this long are evicted.
pub const SESSION_IDLE_TIMEOUT_SECS: u64 = 30 * 60;

/// Notification texts.
pub mod messages {
    /// Title for rejected input.
    pub const INVALID_TITLE: &str = "Invalid hex code";
    /// Detail for rejected input.
    pub const INVALID_DESCRIPTION: &str = "Please enter a valid hex color code (e.g., #ff0000)";
    /// Title for a successful match.
    pub const MATCH_FOUND_TITLE: &str = "Color match found!";
    /// Title for a failed match.
    pub const MATCH_FAILED_TITLE: &str = "Error";
    /// Detail for a failed match.
    pub const MATCH_FAILED_DESCRIPTION: &str = "Failed to find nearest color. Please try again.";
    /// Title for a rejected re-submission.
    pub const PENDING_TITLE: &str = "Match in progress";
    /// Detail for a rejected re-submission.
    pub const PENDING_DESCRIPTION: &str = "Please wait for the current match to finish";
    /// Title for a successful copy.
    pub const COPIED_TITLE: &str = "Copied!";
    /// Title for a failed copy.
    pub const COPY_FAILED_TITLE: &str = "Copy failed";
    /// Detail for a failed copy.
    pub const COPY_FAILED_DESCRIPTION: &str = "Unable to copy to clipboard";
    /// Title when there is nothing to copy.
    pub const NO_RESULT_TITLE: &str = "Nothing to copy";
    /// Detail when there is nothing to copy.
    pub const NO_RESULT_DESCRIPTION: &str = "Find a nearest match first";
}
