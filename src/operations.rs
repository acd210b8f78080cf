use crate::models::BookmarkTree;

/// Combines two bookmark trees: union of folder paths, union of links per
/// path. When both trees carry the same URL under the same path, `first`
/// keeps its title, so the operation is not commutative on conflicts.
pub fn merge(first: &BookmarkTree, second: &BookmarkTree) -> BookmarkTree {
    let mut merged = first.clone();
    for (path, links) in second.iter() {
        for (url, title) in links {
            merged.add_link(path, url, title);
        }
    }
    merged
}
