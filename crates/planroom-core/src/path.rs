//! Canonical folder-path grammar.
//!
//! Folders in Planroom are not physical directories. A folder is a path
//! string tagged onto flat file records, canonicalized to the form
//! `/segment/segment`. The root is represented as the empty string,
//! never as `"/"`.
//!
//! [`normalize`] is pure and total: malformed input degrades to the
//! nearest valid canonical form and never errors.

/// Canonicalize arbitrary path input.
///
/// Rules: trim surrounding whitespace; empty or whitespace-only input is
/// the root (`""`); ensure a single leading `/`; collapse repeated `/`;
/// strip the trailing `/`; a literal `"/"` collapses to the root.
///
/// Idempotent: `normalize(Some(&normalize(x)))` equals `normalize(x)`.
pub fn normalize(raw: Option<&str>) -> String {
    let raw = match raw {
        Some(r) => r.trim(),
        None => return String::new(),
    };
    if raw.is_empty() {
        return String::new();
    }

    let mut out = String::with_capacity(raw.len() + 1);
    for segment in raw.split('/').filter(|s| !s.is_empty()) {
        out.push('/');
        out.push_str(segment);
    }
    out
}

/// Whether a canonical path denotes the root.
pub fn is_root(path: &str) -> bool {
    path.is_empty()
}

/// The `/`-delimited segments of a canonical path. Empty for the root.
pub fn segments(path: &str) -> Vec<&str> {
    path.split('/').filter(|s| !s.is_empty()).collect()
}

/// The leaf segment of a canonical path, or `None` for the root.
pub fn leaf(path: &str) -> Option<&str> {
    path.rsplit('/').next().filter(|s| !s.is_empty())
}

/// The parent of a canonical path. The parent of a top-level folder is
/// the root (`""`); the root has no parent and maps to itself.
pub fn parent(path: &str) -> &str {
    match path.rfind('/') {
        Some(idx) => &path[..idx],
        None => "",
    }
}

/// Every proper ancestor of a canonical path, shortest first.
///
/// `ancestors("/a/b/c")` yields `["/a", "/a/b"]`. The root has none.
pub fn ancestors(path: &str) -> Vec<String> {
    let mut out = Vec::new();
    let mut prefix = String::new();
    let segs = segments(path);
    if segs.is_empty() {
        return out;
    }
    for seg in &segs[..segs.len() - 1] {
        prefix.push('/');
        prefix.push_str(seg);
        out.push(prefix.clone());
    }
    out
}

/// Join a canonical parent path and a child name into a canonical path.
pub fn join(parent: &str, name: &str) -> String {
    normalize(Some(&format!("{parent}/{name}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_root_forms() {
        assert_eq!(normalize(None), "");
        assert_eq!(normalize(Some("")), "");
        assert_eq!(normalize(Some("   ")), "");
        assert_eq!(normalize(Some("/")), "");
        assert_eq!(normalize(Some("///")), "");
    }

    #[test]
    fn test_normalize_adds_leading_slash() {
        assert_eq!(normalize(Some("contracts")), "/contracts");
        assert_eq!(normalize(Some("contracts/subs")), "/contracts/subs");
    }

    #[test]
    fn test_normalize_collapses_and_strips() {
        assert_eq!(normalize(Some("//a//b/")), "/a/b");
        assert_eq!(normalize(Some("/a/b/")), "/a/b");
        assert_eq!(normalize(Some("  /a/b  ")), "/a/b");
    }

    #[test]
    fn test_normalize_is_idempotent() {
        for raw in ["", "/", "//a//b/", "plans", "  /x/y/z// ", "a b/c"] {
            let once = normalize(Some(raw));
            assert_eq!(normalize(Some(&once)), once, "not idempotent for {raw:?}");
        }
    }

    #[test]
    fn test_segments_and_leaf() {
        assert_eq!(segments("/a/b"), vec!["a", "b"]);
        assert!(segments("").is_empty());
        assert_eq!(leaf("/a/b"), Some("b"));
        assert_eq!(leaf(""), None);
    }

    #[test]
    fn test_parent() {
        assert_eq!(parent("/a/b"), "/a");
        assert_eq!(parent("/a"), "");
        assert_eq!(parent(""), "");
    }

    #[test]
    fn test_ancestors() {
        assert_eq!(ancestors("/a/b/c"), vec!["/a".to_string(), "/a/b".to_string()]);
        assert!(ancestors("/a").is_empty());
        assert!(ancestors("").is_empty());
    }

    #[test]
    fn test_join() {
        assert_eq!(join("", "plans"), "/plans");
        assert_eq!(join("/plans", "rev-a"), "/plans/rev-a");
        assert_eq!(join("/plans/", "/rev-a/"), "/plans/rev-a");
    }
}
