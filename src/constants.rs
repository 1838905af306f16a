//! Application constants and configuration

pub const DEFAULT_API_BASE_URL: &str = "https://bmsp-back.onrender.com/api";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");
pub const APP_NAME: &str = "BMS Banking Client";

/// Hardcoded fallback shown when the server provides no error message.
pub const GENERIC_ERROR: &str = "Something went wrong. Please try again.";

/// Shown when an authenticated request comes back 401.
pub const SESSION_EXPIRED: &str = "Your session has expired. Please sign in again.";
