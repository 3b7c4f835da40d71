use super::constants::BASE_PATH;

/// Resolve a logical asset path (`assets/foo.png`) to its deployed URL.
///
/// Absolute paths are returned unchanged, so resolving twice is harmless.
pub fn resolve_asset_path(path: &str) -> String {
    if path.starts_with('/') {
        return path.to_string();
    }
    format!("{}{}", BASE_PATH, path)
}
