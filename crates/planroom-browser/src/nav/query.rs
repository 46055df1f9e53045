//! URL query representation of the navigation state.
//!
//! Two parameters: `path` (canonical folder path, absent = root) and
//! `set` (drawing-set identifier). They are mutually exclusive; both
//! absent signals the root.

use serde::{Deserialize, Serialize};

use planroom_core::path;
use planroom_core::types::DrawingSetId;

/// The `path`/`set` query parameter pair.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UrlQuery {
    /// Canonical folder path, when a folder view is active.
    pub path: Option<String>,
    /// Drawing-set identifier, when a set view is active.
    pub set: Option<DrawingSetId>,
}

impl UrlQuery {
    /// The root query: both parameters removed.
    pub fn root() -> Self {
        Self::default()
    }

    /// A folder query. The path is normalized; a path that normalizes to
    /// empty degrades to the root query.
    pub fn folder(raw: &str) -> Self {
        let canonical = path::normalize(Some(raw));
        if canonical.is_empty() {
            Self::root()
        } else {
            Self {
                path: Some(canonical),
                set: None,
            }
        }
    }

    /// A drawing-set query.
    pub fn drawing_set(id: DrawingSetId) -> Self {
        Self {
            path: None,
            set: Some(id),
        }
    }

    /// Parse from `key=value` pairs joined by `&` (a query string without
    /// the leading `?`). Unknown keys are ignored; an unparsable set ID is
    /// dropped; when both parameters appear, `set` wins.
    pub fn parse(query_string: &str) -> Self {
        let mut parsed = Self::root();
        for pair in query_string.trim_start_matches('?').split('&') {
            let Some((key, value)) = pair.split_once('=') else {
                continue;
            };
            match key {
                "path" => {
                    let canonical = path::normalize(Some(value));
                    if !canonical.is_empty() {
                        parsed.path = Some(canonical);
                    }
                }
                "set" => parsed.set = value.parse().ok(),
                _ => {}
            }
        }
        if parsed.set.is_some() {
            parsed.path = None;
        }
        parsed
    }

    /// Render as a query string without the leading `?`. Empty for root.
    pub fn to_query_string(&self) -> String {
        if let Some(set) = self.set {
            format!("set={set}")
        } else if let Some(p) = &self.path {
            format!("path={p}")
        } else {
            String::new()
        }
    }

    /// Canonical identity of this query, used as the last-synced guard
    /// key: outbound pushes record it so the same value observed inbound
    /// is not re-processed as a new event.
    pub fn sync_key(&self) -> String {
        self.to_query_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_root_round_trip() {
        let q = UrlQuery::root();
        assert_eq!(q.to_query_string(), "");
        assert_eq!(UrlQuery::parse(""), q);
    }

    #[test]
    fn test_folder_round_trip() {
        let q = UrlQuery::folder("a/b/");
        assert_eq!(q.path.as_deref(), Some("/a/b"));
        assert_eq!(UrlQuery::parse(&q.to_query_string()), q);
    }

    #[test]
    fn test_set_round_trip() {
        let id = DrawingSetId::new();
        let q = UrlQuery::drawing_set(id);
        assert_eq!(UrlQuery::parse(&q.to_query_string()), q);
    }

    #[test]
    fn test_set_wins_over_path() {
        let id = DrawingSetId::new();
        let q = UrlQuery::parse(&format!("path=/a&set={id}"));
        assert_eq!(q.set, Some(id));
        assert!(q.path.is_none());
    }

    #[test]
    fn test_degenerate_inputs() {
        assert_eq!(UrlQuery::folder("//"), UrlQuery::root());
        assert_eq!(UrlQuery::parse("set=not-a-uuid"), UrlQuery::root());
        assert_eq!(UrlQuery::parse("foo=bar"), UrlQuery::root());
    }
}
