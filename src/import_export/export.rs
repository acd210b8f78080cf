use crate::error::Result;
use crate::models::BookmarkTree;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Trait for exporting a [`BookmarkTree`] to a file
pub trait BookmarkExporter {
    fn export(&self, tree: &BookmarkTree, path: &Path) -> Result<()>;
}

/// HTML/Netscape Bookmark File exporter
pub struct HtmlExporter;

impl BookmarkExporter for HtmlExporter {
    fn export(&self, tree: &BookmarkTree, path: &Path) -> Result<()> {
        let mut file = File::create(path)?;
        file.write_all(serialize_bookmarks(tree).as_bytes())?;
        Ok(())
    }
}

/// Renders a bookmark tree as a Netscape bookmark export.
///
/// Output is deterministic: folders sort case-insensitively by name, links
/// sort case-insensitively by title (URL order breaks exact ties). Names
/// and titles are written verbatim, without HTML escaping, mirroring how
/// the importer reads them.
pub fn serialize_bookmarks(tree: &BookmarkTree) -> String {
    let mut out = String::new();
    out.push_str("<!DOCTYPE NETSCAPE-Bookmark-file-1>\n");
    out.push_str("<!-- This is an automatically generated file.\n");
    out.push_str("     It will be read and overwritten.\n");
    out.push_str("     DO NOT EDIT! -->\n");
    out.push_str("<TITLE>Bookmarks</TITLE>\n");
    out.push_str("<H1>Bookmarks</H1>\n");
    out.push_str("<DL><p>\n");
    write_folder(tree, &[], 0, &mut out);
    out.push_str("</DL><p>\n");
    out
}

/// Renders one folder path and its descendants at the given depth.
/// The root (empty) path only renders its links and children; the
/// surrounding `<DL>` pair comes from the fixed prologue and trailer.
fn write_folder(tree: &BookmarkTree, path: &[String], depth: usize, out: &mut String) {
    let indent = "    ".repeat(depth);

    if let Some(name) = path.last() {
        out.push_str(&format!("{indent}<DT><H3>{name}</H3>\n"));
        out.push_str(&format!("{indent}<DL><p>\n"));
    }

    if let Some(links) = tree.links(path) {
        let mut entries: Vec<(&String, &String)> = links.iter().collect();
        entries.sort_by_key(|(_, title)| title.to_lowercase());
        for (url, title) in entries {
            out.push_str(&format!("{indent}    <DT><A HREF=\"{url}\">{title}</A>\n"));
        }
    }

    for child in tree.child_folders(path) {
        let mut child_path = path.to_vec();
        child_path.push(child);
        write_folder(tree, &child_path, depth + 1, out);
    }

    if !path.is_empty() {
        out.push_str(&format!("{indent}</DL><p>\n"));
    }
}

/// Write the merged tree to `path` in Netscape bookmark format
pub fn export_bookmarks(tree: &BookmarkTree, path: &Path) -> Result<()> {
    HtmlExporter.export(tree, path)
}
