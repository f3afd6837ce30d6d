//! Settings filename derivation.
//!
//! The default-settings layer stores one blob per class under a derived
//! filename in the active namespace. The formula lives in this one place
//! so it can be revisited without touching callers.

/// Suffix appended to the class name to form the settings filename.
pub const SETTINGS_SUFFIX: &str = "AppSettings.xml";

/// Derives the settings filename for a class.
///
/// Always `{class}AppSettings.xml`. The `id` parameter is accepted for
/// API compatibility but does not participate in the derived name: all
/// ids of a class share one settings blob.
#[must_use]
pub fn settings_key(class: &str, _id: &str) -> String {
    format!("{class}{SETTINGS_SUFFIX}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_settings_key_derivation() {
        assert_eq!(settings_key("Player", "1"), "PlayerAppSettings.xml");
    }

    #[test]
    fn test_settings_key_ignores_id() {
        // All ids of a class map to the same blob.
        assert_eq!(settings_key("Player", "1"), settings_key("Player", "999"));
    }

    #[test]
    fn test_settings_key_distinct_per_class() {
        assert_ne!(settings_key("Player", "1"), settings_key("World", "1"));
    }
}
