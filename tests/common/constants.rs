//! Shared constants for end-to-end tests
//!
//! When the seed data or the fixture files change, update only this file.

// ============================================================================
// Seed artists
// ============================================================================

/// Id of "Queen" in the fallback seed
pub const QUEEN_ID: i64 = 1;

/// Id of "Linkin Park" in the fallback seed
pub const LINKIN_PARK_ID: i64 = 2;

pub const QUEEN_NAME: &str = "Queen";
pub const LINKIN_PARK_NAME: &str = "Linkin Park";

/// Id the first created artist gets
pub const FIRST_NEW_ID: i64 = 3;

// ============================================================================
// Fixture files
// ============================================================================

pub const HOME_HTML: &str = "<!doctype html><html><body><h1>Home</h1></body></html>";
pub const ARTIST_HTML: &str = "<!doctype html><html><body><h1>Artist</h1></body></html>";
pub const STYLE_CSS: &str = "body { margin: 0; }";

/// Cache max-age for static files served by the test server
pub const STATIC_CACHE_AGE_SEC: usize = 120;

// ============================================================================
// Timeouts
// ============================================================================

/// Maximum time to wait for the server to become ready
pub const SERVER_READY_TIMEOUT_MS: u64 = 5000;

/// Interval between readiness polls
pub const SERVER_READY_POLL_INTERVAL_MS: u64 = 10;

/// Timeout for each request of the test client
pub const REQUEST_TIMEOUT_SECS: u64 = 5;
