use crate::error::Result;
use crate::models::BookmarkTree;
use regex::Regex;
use std::path::Path;
use std::sync::OnceLock;

/// Trait for importing a bookmark export file into a [`BookmarkTree`]
pub trait BookmarkImporter {
    fn import(&self, path: &Path) -> Result<BookmarkTree>;
}

struct LinePatterns {
    heading: Regex,
    href: Regex,
    anchor: Regex,
}

fn line_patterns() -> &'static LinePatterns {
    static PATTERNS: OnceLock<LinePatterns> = OnceLock::new();
    PATTERNS.get_or_init(|| LinePatterns {
        heading: Regex::new(r"(?i)<H3[^>]*>(.*?)</H3>").unwrap(),
        href: Regex::new(r#"(?i)HREF="([^"]+)""#).unwrap(),
        anchor: Regex::new(r"(?i)<A[^>]*>(.*?)</A>").unwrap(),
    })
}

/// Tolerant line-oriented importer for Netscape bookmark exports.
///
/// Scans the file line by line with loose tag patterns instead of a real
/// HTML parser. Unmatched or malformed constructs are skipped silently.
pub struct TolerantImporter;

impl BookmarkImporter for TolerantImporter {
    fn import(&self, path: &Path) -> Result<BookmarkTree> {
        let bytes = std::fs::read(path)?;
        Ok(parse_str(&String::from_utf8_lossy(&bytes)))
    }
}

/// Parses Netscape bookmark markup into a tree of folder paths.
///
/// Each line is classified by the first matching rule only:
/// 1. `<H3 ...>NAME</H3>` anywhere in the line opens a folder. NAME is the
///    raw captured text, not HTML-unescaped.
/// 2. A line starting with `</DL>` closes the innermost open folder.
///    A closer with no open folder is ignored.
/// 3. A line containing `<A ` is a link if both an `HREF="..."` value and
///    the anchor's inner text can be extracted; otherwise it is skipped.
///
/// Links seen before any folder opens land under the root (empty) path.
pub fn parse_str(text: &str) -> BookmarkTree {
    let patterns = line_patterns();
    let mut tree = BookmarkTree::new();
    let mut stack: Vec<String> = Vec::new();

    for raw in text.lines() {
        let line = raw.trim();

        if let Some(caps) = patterns.heading.captures(line) {
            stack.push(caps[1].to_string());
            continue;
        }

        if line.to_uppercase().starts_with("</DL>") {
            stack.pop();
            continue;
        }

        if line.to_uppercase().contains("<A ") {
            if let (Some(href), Some(anchor)) =
                (patterns.href.captures(line), patterns.anchor.captures(line))
            {
                tree.add_link(&stack, href[1].trim(), anchor[1].trim());
            }
        }
    }

    tree
}

/// Strict importer backed by a real HTML parser (`tl`).
///
/// Walks the parsed node stream maintaining the same folder stack as the
/// tolerant importer. Trades the line scanner's tolerance for correct
/// handling of attribute quoting and tag nesting; fails on markup the DOM
/// parser rejects.
pub struct StrictImporter;

impl BookmarkImporter for StrictImporter {
    fn import(&self, path: &Path) -> Result<BookmarkTree> {
        let bytes = std::fs::read(path)?;
        let html = String::from_utf8_lossy(&bytes);
        let dom = tl::parse(&html, tl::ParserOptions::default())?;
        let parser = dom.parser();

        let mut tree = BookmarkTree::new();
        let mut stack: Vec<String> = Vec::new();

        for node in dom.nodes() {
            if let Some(tag) = node.as_tag() {
                match tag.name().as_utf8_str().as_ref() {
                    // H3 tags open folders
                    "H3" | "h3" => {
                        let name = tag.inner_text(parser).trim().to_string();
                        if !name.is_empty() {
                            stack.push(name);
                        }
                    }
                    // A tags are bookmarks
                    "A" | "a" => {
                        if let Some(href) = tag
                            .attributes()
                            .get("HREF")
                            .or_else(|| tag.attributes().get("href"))
                        {
                            let url = href
                                .map(|h| h.as_utf8_str().trim().to_string())
                                .unwrap_or_default();
                            if url.is_empty() {
                                continue;
                            }
                            let title = tag.inner_text(parser).trim().to_string();
                            tree.add_link(&stack, &url, &title);
                        }
                    }
                    // /DL closes a folder level
                    "/DL" | "/dl" => {
                        stack.pop();
                    }
                    _ => {}
                }
            }
        }

        Ok(tree)
    }
}

/// Import a Netscape bookmark export file.
///
/// `strict` selects the DOM-based importer instead of the default
/// tolerant line scan.
pub fn import_bookmarks(path: &Path, strict: bool) -> Result<BookmarkTree> {
    let importer: Box<dyn BookmarkImporter> = if strict {
        Box::new(StrictImporter)
    } else {
        Box::new(TolerantImporter)
    };
    importer.import(path)
}
