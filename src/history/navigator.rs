//! History-mode navigation over a route table.
//!
//! # Responsibilities
//! - Keep the stack of visited entries and the current position
//! - Resolve every new target before it becomes an entry
//! - Move through the stack on back/forward/go
//!
//! # Design Decisions
//! - A target that resolves to nothing leaves the history untouched
//! - Entries store their resolution; popping does not resolve again
//! - Navigating to the current location is reported, not recorded

use thiserror::Error;

use crate::history::base::HistoryBase;
use crate::history::location::Location;
use crate::observability::metrics;
use crate::routing::{Params, Resolved, RouteError, RouteTable};

/// Errors raised by navigation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NavigationError {
    #[error(transparent)]
    Route(#[from] RouteError),

    #[error("cannot move {delta} entries from the current position")]
    OutOfRange { delta: isize },
}

/// How a navigation changed the history.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationKind {
    /// A new entry was appended.
    Push,
    /// The current entry was overwritten.
    Replace,
    /// The position moved to an existing entry.
    Pop,
    /// The target is the current location; nothing changed.
    Duplicate,
}

/// A visited location and what it resolved to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryEntry {
    pub location: Location,
    pub resolved: Resolved,
}

/// Report of a completed navigation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Navigation {
    pub from: Option<HistoryEntry>,
    pub to: HistoryEntry,
    pub kind: NavigationKind,
}

/// Browser-style history bound to a route table.
#[derive(Debug)]
pub struct Navigator<'r> {
    routes: &'r RouteTable,
    base: HistoryBase,
    entries: Vec<HistoryEntry>,
    cursor: usize,
}

impl<'r> Navigator<'r> {
    /// Create an empty history.
    pub fn new(routes: &'r RouteTable, base: HistoryBase) -> Self {
        Self {
            routes,
            base,
            entries: Vec::new(),
            cursor: 0,
        }
    }

    pub fn base(&self) -> &HistoryBase {
        &self.base
    }

    /// The entry currently displayed.
    pub fn current(&self) -> Option<&HistoryEntry> {
        self.entries.get(self.cursor)
    }

    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    /// Index of the current entry.
    pub fn position(&self) -> usize {
        self.cursor
    }

    /// Resolve a target without navigating.
    ///
    /// Query- or fragment-only targets stay on the current path; with no
    /// current entry they resolve to nothing.
    pub fn resolve(&self, target: &str) -> Result<HistoryEntry, RouteError> {
        let mut location = Location::parse(target);
        if location.path.is_empty() {
            let current = self.current().ok_or_else(|| RouteError::NoMatch {
                path: target.to_string(),
            })?;
            location = current.location.join(target);
        }
        let app_path = self
            .base
            .strip(&location.path)
            .ok_or_else(|| RouteError::NoMatch {
                path: location.path.clone(),
            })?;
        let resolved = self.routes.resolve(app_path)?;
        Ok(HistoryEntry { location, resolved })
    }

    /// Browser path for a named route, including the base.
    pub fn href(&self, name: &str, params: &Params) -> Result<String, RouteError> {
        Ok(self.base.prepend(&self.routes.href(name, params)?))
    }

    /// Append a new entry, discarding any forward entries.
    pub fn push(&mut self, target: &str) -> Result<Navigation, NavigationError> {
        let entry = self.resolve_recorded(target)?;
        if let Some(nav) = self.duplicate_of(&entry) {
            return Ok(nav);
        }

        let from = self.current().cloned();
        if !self.entries.is_empty() {
            self.entries.truncate(self.cursor + 1);
        }
        self.entries.push(entry.clone());
        self.cursor = self.entries.len() - 1;

        tracing::debug!(to = %entry.location.full_path(), route = %entry.resolved.name, "Pushed history entry");
        Ok(Navigation {
            from,
            to: entry,
            kind: NavigationKind::Push,
        })
    }

    /// Overwrite the current entry. On an empty history this behaves as a push.
    pub fn replace(&mut self, target: &str) -> Result<Navigation, NavigationError> {
        let entry = self.resolve_recorded(target)?;
        if let Some(nav) = self.duplicate_of(&entry) {
            return Ok(nav);
        }

        let from = self.current().cloned();
        match self.entries.get_mut(self.cursor) {
            Some(slot) => *slot = entry.clone(),
            None => {
                self.entries.push(entry.clone());
                self.cursor = 0;
            }
        }

        tracing::debug!(to = %entry.location.full_path(), route = %entry.resolved.name, "Replaced history entry");
        Ok(Navigation {
            from,
            to: entry,
            kind: NavigationKind::Replace,
        })
    }

    pub fn back(&mut self) -> Result<Navigation, NavigationError> {
        self.go(-1)
    }

    pub fn forward(&mut self) -> Result<Navigation, NavigationError> {
        self.go(1)
    }

    /// Move `delta` entries through the history.
    pub fn go(&mut self, delta: isize) -> Result<Navigation, NavigationError> {
        let target = self
            .cursor
            .checked_add_signed(delta)
            .filter(|&i| i < self.entries.len())
            .ok_or(NavigationError::OutOfRange { delta })?;

        let from = self.entries[self.cursor].clone();
        if target == self.cursor {
            return Ok(Navigation {
                from: Some(from.clone()),
                to: from,
                kind: NavigationKind::Duplicate,
            });
        }

        self.cursor = target;
        let to = self.entries[target].clone();
        tracing::debug!(delta, to = %to.location.full_path(), "Moved through history");
        Ok(Navigation {
            from: Some(from),
            to,
            kind: NavigationKind::Pop,
        })
    }

    fn resolve_recorded(&self, target: &str) -> Result<HistoryEntry, RouteError> {
        match self.resolve(target) {
            Ok(entry) => {
                metrics::record_resolution(&entry.resolved.name);
                Ok(entry)
            }
            Err(e) => {
                metrics::record_no_match();
                tracing::warn!(navigation_target = %target, "No route matched navigation target");
                Err(e)
            }
        }
    }

    fn duplicate_of(&self, entry: &HistoryEntry) -> Option<Navigation> {
        let current = self.current()?;
        (current.location == entry.location).then(|| Navigation {
            from: Some(current.clone()),
            to: current.clone(),
            kind: NavigationKind::Duplicate,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::views::{app_routes, View};

    #[test]
    fn test_push_and_back_forward() {
        let mut nav = Navigator::new(app_routes(), HistoryBase::default());

        let first = nav.push("/").unwrap();
        assert_eq!(first.kind, NavigationKind::Push);
        assert!(first.from.is_none());

        let second = nav.push("/operadoras/123").unwrap();
        assert_eq!(second.from.unwrap().resolved.name, "home");
        assert_eq!(second.to.resolved.view, View::Operadora);
        assert_eq!(nav.entries().len(), 2);

        let back = nav.back().unwrap();
        assert_eq!(back.kind, NavigationKind::Pop);
        assert_eq!(back.to.resolved.name, "home");
        assert_eq!(nav.position(), 0);

        let forward = nav.forward().unwrap();
        assert_eq!(forward.to.resolved.params.get("cnpj"), Some("123"));
    }

    #[test]
    fn test_push_truncates_forward_entries() {
        let mut nav = Navigator::new(app_routes(), HistoryBase::default());
        nav.push("/").unwrap();
        nav.push("/operadoras/1").unwrap();
        nav.back().unwrap();

        nav.push("/operadoras/2").unwrap();
        let paths: Vec<_> = nav.entries().iter().map(|e| e.location.path.as_str()).collect();
        assert_eq!(paths, vec!["/", "/operadoras/2"]);
        assert!(matches!(
            nav.forward(),
            Err(NavigationError::OutOfRange { delta: 1 })
        ));
    }

    #[test]
    fn test_no_match_leaves_history_untouched() {
        let mut nav = Navigator::new(app_routes(), HistoryBase::default());
        nav.push("/").unwrap();

        let err = nav.push("/unknown").unwrap_err();
        assert_eq!(
            err,
            NavigationError::Route(RouteError::NoMatch {
                path: "/unknown".into()
            })
        );
        assert_eq!(nav.entries().len(), 1);
        assert_eq!(nav.current().unwrap().resolved.name, "home");
    }

    #[test]
    fn test_replace() {
        let mut nav = Navigator::new(app_routes(), HistoryBase::default());
        assert_eq!(nav.replace("/").unwrap().kind, NavigationKind::Replace);

        nav.push("/operadoras/1").unwrap();
        let replaced = nav.replace("/operadoras/2").unwrap();
        assert_eq!(replaced.from.unwrap().location.path, "/operadoras/1");
        assert_eq!(nav.entries().len(), 2);
        assert_eq!(nav.current().unwrap().location.path, "/operadoras/2");
    }

    #[test]
    fn test_duplicate_navigation() {
        let mut nav = Navigator::new(app_routes(), HistoryBase::default());
        nav.push("/operadoras/1?ano=2024").unwrap();

        let same = nav.push("/operadoras/1?ano=2024").unwrap();
        assert_eq!(same.kind, NavigationKind::Duplicate);
        assert_eq!(nav.entries().len(), 1);

        // A different query is a different location.
        assert_eq!(nav.push("/operadoras/1?ano=2023").unwrap().kind, NavigationKind::Push);
        assert_eq!(nav.go(0).unwrap().kind, NavigationKind::Duplicate);
    }

    #[test]
    fn test_query_only_target_stays_on_current_path() {
        let mut nav = Navigator::new(app_routes(), HistoryBase::default());
        nav.push("/operadoras/1").unwrap();

        let visit = nav.push("?ano=2024").unwrap();
        assert_eq!(visit.kind, NavigationKind::Push);
        assert_eq!(visit.to.resolved.name, "operadora");
        assert_eq!(visit.to.resolved.params.get("cnpj"), Some("1"));
        assert_eq!(visit.to.location.path, "/operadoras/1");
        assert_eq!(visit.to.location.query.as_deref(), Some("ano=2024"));

        let anchor = nav.replace("#despesas").unwrap();
        assert_eq!(anchor.to.location.full_path(), "/operadoras/1?ano=2024#despesas");
    }

    #[test]
    fn test_empty_target_without_history_is_no_match() {
        let mut nav = Navigator::new(app_routes(), HistoryBase::default());
        assert_eq!(
            nav.resolve("").unwrap_err(),
            RouteError::NoMatch { path: String::new() }
        );
        assert!(nav.push("?ano=2024").is_err());
        assert!(nav.entries().is_empty());
    }

    #[test]
    fn test_go_out_of_range() {
        let mut nav = Navigator::new(app_routes(), HistoryBase::default());
        assert!(matches!(nav.back(), Err(NavigationError::OutOfRange { delta: -1 })));

        nav.push("/").unwrap();
        nav.push("/operadoras/1").unwrap();
        assert!(matches!(nav.go(-2), Err(NavigationError::OutOfRange { delta: -2 })));
        assert_eq!(nav.position(), 1);
        assert_eq!(nav.go(-1).unwrap().to.resolved.name, "home");
    }

    #[test]
    fn test_base_path() {
        let mut nav = Navigator::new(app_routes(), HistoryBase::new("/app"));

        let home = nav.push("/app").unwrap();
        assert_eq!(home.to.resolved.name, "home");

        let detail = nav.push("http://localhost/app/operadoras/9#resumo").unwrap();
        assert_eq!(detail.to.resolved.path, "/operadoras/9");
        assert_eq!(detail.to.location.fragment.as_deref(), Some("resumo"));

        assert!(nav.push("/operadoras/9").is_err());

        let params: Params = [("cnpj", "9")].into_iter().collect();
        assert_eq!(nav.href("operadora", &params).unwrap(), "/app/operadoras/9");
    }
}
