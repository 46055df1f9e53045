//! Folder tree building from flat path collections.
//!
//! The tree is derived fresh from the declared folder-path list and the
//! `folder_path` tags on files. A folder may be "invented" implicitly by a
//! file living in it before anyone explicitly creates it. Each canonical
//! path maps to exactly one node; parent/child edges form a DAG by
//! construction because a node is only ever attached to a parent prefix
//! discovered earlier in the same sorted pass.

use std::collections::{BTreeMap, BTreeSet, HashMap};

use planroom_core::path;
use planroom_entity::{FileRecord, FolderNode};

/// Build the full folder tree for a project.
///
/// Invariant: for every node, `item_count` equals the number of files
/// whose normalized `folder_path` equals the node path exactly, never a
/// descendant path.
pub fn build(folder_paths: &[String], files: &[FileRecord]) -> Vec<FolderNode> {
    // Union of declared paths and paths implied by files, expanded with
    // every ancestor prefix so each prefix materializes exactly one node.
    let mut all_paths: BTreeSet<String> = BTreeSet::new();
    let declared = folder_paths.iter().map(|p| path::normalize(Some(p)));
    let implied = files.iter().map(FileRecord::canonical_folder_path);
    for p in declared.chain(implied) {
        if p.is_empty() {
            continue;
        }
        for ancestor in path::ancestors(&p) {
            all_paths.insert(ancestor);
        }
        all_paths.insert(p);
    }

    let counts = direct_counts(files);

    // Sorted iteration guarantees parents precede children, so every
    // child list ends up in lexicographic order.
    let mut children: BTreeMap<String, Vec<String>> = BTreeMap::new();
    for p in &all_paths {
        children
            .entry(path::parent(p).to_string())
            .or_default()
            .push(p.clone());
    }

    assemble("", &children, &counts)
}

/// The direct children of `scope` (the root when `scope` is empty), each
/// carrying its full subtree. This is what the item list shows as folder
/// rows for the current view.
pub fn child_folders(
    folder_paths: &[String],
    files: &[FileRecord],
    scope: &str,
) -> Vec<FolderNode> {
    let scope = path::normalize(Some(scope));
    let roots = build(folder_paths, files);
    if path::is_root(&scope) {
        return roots;
    }
    find(&roots, &scope)
        .map(|node| node.children.clone())
        .unwrap_or_default()
}

/// Find the node at a canonical path.
pub fn find<'a>(roots: &'a [FolderNode], target: &str) -> Option<&'a FolderNode> {
    for node in roots {
        if node.path == target {
            return Some(node);
        }
        // Descend only into prefixes of the target.
        if target.starts_with(&format!("{}/", node.path)) {
            return find(&node.children, target);
        }
    }
    None
}

/// Files directly at each canonical path (exact match, not recursive).
fn direct_counts(files: &[FileRecord]) -> HashMap<String, u64> {
    let mut counts: HashMap<String, u64> = HashMap::new();
    for file in files {
        let p = file.canonical_folder_path();
        if !p.is_empty() {
            *counts.entry(p).or_default() += 1;
        }
    }
    counts
}

fn assemble(
    parent: &str,
    children: &BTreeMap<String, Vec<String>>,
    counts: &HashMap<String, u64>,
) -> Vec<FolderNode> {
    let Some(child_paths) = children.get(parent) else {
        return Vec::new();
    };
    child_paths
        .iter()
        .map(|p| FolderNode {
            name: path::leaf(p).unwrap_or_default().to_string(),
            path: p.clone(),
            item_count: counts.get(p).copied().unwrap_or(0),
            children: assemble(p, children, counts),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use planroom_core::types::{FileId, ProjectId};

    use super::*;

    fn file(folder_path: Option<&str>) -> FileRecord {
        FileRecord {
            id: FileId::new(),
            project_id: ProjectId::new(),
            name: "doc.pdf".to_string(),
            description: None,
            tags: Vec::new(),
            folder_path: folder_path.map(str::to_string),
            category: None,
            mime_type: None,
            size_bytes: 0,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_contracts_scenario() {
        let folders = vec!["/contracts".to_string(), "/contracts/subs".to_string()];
        let files = vec![file(Some("/contracts")), file(Some("/contracts/subs"))];

        let roots = build(&folders, &files);
        assert_eq!(roots.len(), 1);
        let contracts = &roots[0];
        assert_eq!(contracts.name, "contracts");
        assert_eq!(contracts.item_count, 1);
        assert_eq!(contracts.children.len(), 1);
        let subs = &contracts.children[0];
        assert_eq!(subs.name, "subs");
        assert_eq!(subs.path, "/contracts/subs");
        assert_eq!(subs.item_count, 1);
    }

    #[test]
    fn test_folder_implied_by_file_only() {
        let roots = build(&[], &[file(Some("/photos/week-1"))]);
        assert_eq!(roots.len(), 1);
        assert_eq!(roots[0].path, "/photos");
        assert_eq!(roots[0].item_count, 0);
        assert_eq!(roots[0].children[0].path, "/photos/week-1");
        assert_eq!(roots[0].children[0].item_count, 1);
    }

    #[test]
    fn test_declared_empty_folder_and_dedup() {
        let folders = vec![
            "/plans".to_string(),
            "plans/".to_string(),
            "//plans".to_string(),
        ];
        let roots = build(&folders, &[]);
        assert_eq!(roots.len(), 1);
        assert_eq!(roots[0].path, "/plans");
        assert_eq!(roots[0].item_count, 0);
        assert!(roots[0].children.is_empty());
    }

    #[test]
    fn test_item_count_is_not_recursive() {
        let files = vec![
            file(Some("/a")),
            file(Some("/a/b")),
            file(Some("/a/b")),
            file(Some("/a/b/c")),
        ];
        let roots = build(&[], &files);
        let a = find(&roots, "/a").expect("/a");
        assert_eq!(a.item_count, 1);
        let b = find(&roots, "/a/b").expect("/a/b");
        assert_eq!(b.item_count, 2);
        let c = find(&roots, "/a/b/c").expect("/a/b/c");
        assert_eq!(c.item_count, 1);
    }

    #[test]
    fn test_sibling_order_is_lexicographic() {
        let folders = vec![
            "/zeta".to_string(),
            "/Alpha".to_string(),
            "/alpha".to_string(),
        ];
        let roots = build(&folders, &[]);
        let names: Vec<&str> = roots.iter().map(|n| n.name.as_str()).collect();
        // Byte order, not case-insensitive.
        assert_eq!(names, vec!["Alpha", "alpha", "zeta"]);
    }

    #[test]
    fn test_child_folders_scoped() {
        let folders = vec![
            "/a/x".to_string(),
            "/a/y".to_string(),
            "/b".to_string(),
        ];
        let children = child_folders(&folders, &[], "/a");
        let paths: Vec<&str> = children.iter().map(|n| n.path.as_str()).collect();
        assert_eq!(paths, vec!["/a/x", "/a/y"]);

        let top = child_folders(&folders, &[], "");
        let paths: Vec<&str> = top.iter().map(|n| n.path.as_str()).collect();
        assert_eq!(paths, vec!["/a", "/b"]);
    }

    #[test]
    fn test_every_path_has_a_node() {
        let folders = vec!["/p/q/r".to_string()];
        let files = vec![file(Some("/p/s"))];
        let roots = build(&folders, &files);
        for p in ["/p", "/p/q", "/p/q/r", "/p/s"] {
            assert!(find(&roots, p).is_some(), "missing node for {p}");
        }
    }

    #[test]
    fn test_root_files_build_no_nodes() {
        let roots = build(&[], &[file(None), file(Some("/"))]);
        assert!(roots.is_empty());
    }
}
