//! Base path the application is mounted under.

/// Normalized base path: empty for the site root, otherwise `/segment...`
/// without a trailing slash.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HistoryBase(String);

impl HistoryBase {
    pub fn new(base: &str) -> Self {
        let trimmed = base.trim_end_matches('/');
        if trimmed.is_empty() {
            return Self::default();
        }
        if trimmed.starts_with('/') {
            Self(trimmed.to_string())
        } else {
            Self(format!("/{}", trimmed))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Remove the base from a browser path, yielding the application path.
    ///
    /// Returns `None` when the path lies outside the base.
    pub fn strip<'a>(&self, path: &'a str) -> Option<&'a str> {
        if self.0.is_empty() {
            return Some(path);
        }
        let rest = path.strip_prefix(self.0.as_str())?;
        if rest.is_empty() {
            Some("/")
        } else if rest.starts_with('/') {
            Some(rest)
        } else {
            None
        }
    }

    /// Prefix an application path with the base.
    pub fn prepend(&self, path: &str) -> String {
        if self.0.is_empty() {
            path.to_string()
        } else if path == "/" {
            format!("{}/", self.0)
        } else {
            format!("{}{}", self.0, path)
        }
    }
}
