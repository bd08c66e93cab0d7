use chrono::DateTime;

/// RFC 3339 timestamp captured by the build script.
pub const BUILD_TIME: &str = env!("BUILD_TIME");

/// Month and year of a build timestamp, or the raw value if it doesn't parse.
pub fn build_label(raw: &str) -> String {
    DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.format("%b %Y").to_string())
        .unwrap_or_else(|_| raw.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_label() {
        assert_eq!(build_label("2025-03-14T09:26:53+00:00"), "Mar 2025");
        assert_eq!(build_label("yesterday"), "yesterday");
        assert!(!build_label(BUILD_TIME).is_empty());
    }
}
