//! Browser locations (path, query, fragment).

use serde::Serialize;
use url::Url;

/// A navigation target split into its parts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Location {
    /// Browser path, including any history base.
    pub path: String,

    /// Query string without the leading `?`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub query: Option<String>,

    /// Fragment without the leading `#`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fragment: Option<String>,
}

impl Location {
    /// Split a navigation target.
    ///
    /// Absolute URLs (`http://host/app/operadoras/1?x#y`) contribute only
    /// their path, query and fragment. Anything else is taken as a path.
    /// A query- or fragment-only target keeps an empty path; see [`Location::join`].
    pub fn parse(target: &str) -> Self {
        if let Ok(url) = Url::parse(target) {
            if !url.cannot_be_a_base() {
                return Self {
                    path: url.path().to_string(),
                    query: url.query().filter(|q| !q.is_empty()).map(str::to_string),
                    fragment: url.fragment().filter(|f| !f.is_empty()).map(str::to_string),
                };
            }
        }

        let (rest, fragment) = match target.split_once('#') {
            Some((rest, fragment)) => (rest, Some(fragment)),
            None => (target, None),
        };
        let (path, query) = match rest.split_once('?') {
            Some((path, query)) => (path, Some(query)),
            None => (rest, None),
        };

        Self {
            path: path.to_string(),
            query: query.filter(|q| !q.is_empty()).map(str::to_string),
            fragment: fragment.filter(|f| !f.is_empty()).map(str::to_string),
        }
    }

    /// Resolve `target` against this location.
    ///
    /// An empty target path stays on this path. A fragment-only or empty
    /// target also keeps this query.
    pub fn join(&self, target: &str) -> Location {
        let mut next = Location::parse(target);
        if next.path.is_empty() {
            next.path = self.path.clone();
            if target.is_empty() || target.starts_with('#') {
                next.query = self.query.clone();
            }
        }
        next
    }

    /// Path with query and fragment, as shown in the address bar.
    pub fn full_path(&self) -> String {
        let mut out = self.path.clone();
        if let Some(query) = &self.query {
            out.push('?');
            out.push_str(query);
        }
        if let Some(fragment) = &self.fragment {
            out.push('#');
            out.push_str(fragment);
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_path() {
        let location = Location::parse("/operadoras/1?ano=2024#despesas");
        assert_eq!(location.path, "/operadoras/1");
        assert_eq!(location.query.as_deref(), Some("ano=2024"));
        assert_eq!(location.fragment.as_deref(), Some("despesas"));
        assert_eq!(location.full_path(), "/operadoras/1?ano=2024#despesas");
    }

    #[test]
    fn test_parse_absolute_url() {
        let location = Location::parse("https://ans.example/app/operadoras/1?#");
        assert_eq!(location.path, "/app/operadoras/1");
        assert_eq!(location.query, None);
        assert_eq!(location.fragment, None);
    }

    #[test]
    fn test_empty_path_is_kept() {
        assert_eq!(Location::parse("?q=1").path, "");
        assert_eq!(Location::parse("").full_path(), "");
    }

    #[test]
    fn test_join_relative_targets() {
        let current = Location::parse("/operadoras/1?ano=2023#resumo");

        let query = current.join("?ano=2024");
        assert_eq!(query.full_path(), "/operadoras/1?ano=2024");

        let fragment = current.join("#despesas");
        assert_eq!(fragment.full_path(), "/operadoras/1?ano=2023#despesas");

        assert_eq!(current.join("").full_path(), "/operadoras/1?ano=2023");
        assert_eq!(current.join("/").full_path(), "/");
    }
}
