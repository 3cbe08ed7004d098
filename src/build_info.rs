//! Commit and date baked in by build.rs.

include!(concat!(env!("OUT_DIR"), "/build_info.rs"));

/// `DATE (COMMIT)`, as printed by `--version`.
pub fn version_string() -> String {
    format!("{} ({})", BUILD_DATE, BUILD_COMMIT)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_info_not_empty() {
        assert!(!BUILD_COMMIT.is_empty());
        assert!(!BUILD_DATE.is_empty());
    }

    #[test]
    fn test_build_commit_format() {
        // 7-char short hash, or "unknown" outside a git checkout
        assert!(BUILD_COMMIT == "unknown" || BUILD_COMMIT.len() == 7);
    }

    #[test]
    fn test_version_string() {
        let version = version_string();
        assert!(version.starts_with(BUILD_DATE));
        assert!(version.ends_with(&format!("({})", BUILD_COMMIT)));
    }
}
