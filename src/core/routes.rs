use super::constants::BASE_PATH;

/// Client-side pages.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Route {
    Landing,
    Universe,
    Who,
    /// Unmatched path, kept for logging.
    NotFound(String),
}

impl Route {
    /// Match a browser pathname (including the deployment prefix).
    pub fn from_pathname(pathname: &str) -> Route {
        let base = BASE_PATH.trim_end_matches('/');
        let local = match pathname.strip_prefix(base) {
            Some(rest) if rest.is_empty() || rest.starts_with('/') => rest,
            _ => return Route::NotFound(pathname.to_string()),
        };
        match local.trim_end_matches('/') {
            "" => Route::Landing,
            "/universe" => Route::Universe,
            "/who" => Route::Who,
            _ => Route::NotFound(local.to_string()),
        }
    }

    /// Path relative to the deployment prefix.
    pub fn path(&self) -> &str {
        match self {
            Route::Landing => "/",
            Route::Universe => "/universe",
            Route::Who => "/who",
            Route::NotFound(p) => p,
        }
    }

    /// Absolute pathname to push into history.
    pub fn href(&self) -> String {
        let base = BASE_PATH.trim_end_matches('/');
        match self {
            Route::Landing => BASE_PATH.to_string(),
            _ => format!("{}{}", base, self.path()),
        }
    }

    #[inline]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Route::NotFound(_))
    }
}
