//! Version information

/// Application version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Get the current application version
pub fn get_version() -> &'static str {
    VERSION
}

/// User agent sent to the web server unless overridden in settings
pub fn user_agent() -> String {
    format!("messenger-endpoints/{}", VERSION)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_version() {
        assert_eq!(get_version(), env!("CARGO_PKG_VERSION"));
    }

    #[test]
    fn test_user_agent_carries_version() {
        assert!(user_agent().ends_with(VERSION));
        assert!(user_agent().starts_with("messenger-endpoints/"));
    }
}
