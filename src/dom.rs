//! DOM traversal adapter over `dom_query`.
//!
//! The extraction rules only need a handful of operations beyond plain CSS
//! selection, and all of them are positional: find-by-exact-text,
//! ancestor-by-class, next-sibling-by-class, forward-scan-for-first-tag,
//! plus text-segment splitting on `<br>` boundaries. They live here so the
//! extractors stay declarative.

// Re-export core types for external use
pub use dom_query::{Document, Selection};

// StrTendril is reference-counted; cloning text handles is O(1)
pub use tendril::StrTendril;

use dom_query::NodeRef;

/// Parse an HTML string into a document.
#[inline]
#[must_use]
pub fn parse(html: &str) -> Document {
    Document::from(html)
}

/// All text content of a selection as a zero-copy handle.
#[inline]
#[must_use]
pub fn text_content(sel: &Selection) -> StrTendril {
    sel.text()
}

/// All text content of the first match for `selector` under `root`,
/// trimmed. Empty string when nothing matches.
#[must_use]
pub fn select_text(root: &Selection, selector: &str) -> String {
    let sel = root.select_single(selector);
    if sel.is_empty() {
        return String::new();
    }
    sel.text().trim().to_string()
}

/// Attribute value of the first match for `selector` under `root`.
#[must_use]
pub fn select_attr(root: &Selection, selector: &str, name: &str) -> Option<String> {
    let sel = root.select_single(selector);
    if sel.is_empty() {
        return None;
    }
    sel.attr(name).map(|v| v.to_string())
}

/// Tag name (lowercase) of a selection, if it holds an element.
#[must_use]
pub fn tag_name(sel: &Selection) -> Option<String> {
    sel.nodes()
        .first()
        .and_then(dom_query::NodeRef::node_name)
        .map(|t| t.to_lowercase())
}

/// Whether a node's `class` attribute contains `class` as a whole token.
fn node_has_class(node: NodeRef, class: &str) -> bool {
    Selection::from(node)
        .attr("class")
        .is_some_and(|attr| attr.split_whitespace().any(|token| token == class))
}

fn node_tag_matches(node: NodeRef, tags: &[&str]) -> bool {
    node.node_name()
        .is_some_and(|name| tags.iter().any(|t| name.eq_ignore_ascii_case(t)))
}

/// First element under `root` (document order) whose own trimmed text
/// equals `text` exactly.
///
/// A wrapper whose only content is the matching heading has the same text
/// and is visited first; [`parent_by_class`] therefore starts its walk at
/// the matched element itself.
#[must_use]
pub fn find_by_exact_text<'a>(root: &Selection<'a>, text: &str) -> Option<Selection<'a>> {
    for node in root.select("*").nodes() {
        let sel = Selection::from(*node);
        if sel.text().trim() == text {
            return Some(sel);
        }
    }
    None
}

/// Nearest ancestor (starting at the element itself) whose class attribute
/// contains `class` as a whole token.
#[must_use]
pub fn parent_by_class<'a>(sel: &Selection<'a>, class: &str) -> Option<Selection<'a>> {
    let mut current = sel.nodes().first().copied();
    while let Some(node) = current {
        if node.is_element() && node_has_class(node, class) {
            return Some(Selection::from(node));
        }
        current = node.parent();
    }
    None
}

/// First following element sibling whose class attribute contains `class`
/// as a whole token. Text nodes and non-matching elements are skipped.
#[must_use]
pub fn next_sibling_by_class<'a>(sel: &Selection<'a>, class: &str) -> Option<Selection<'a>> {
    let mut sibling = sel.nodes().first().copied().and_then(|n| n.next_sibling());
    while let Some(node) = sibling {
        if node.is_element() && node_has_class(node, class) {
            return Some(Selection::from(node));
        }
        sibling = node.next_sibling();
    }
    None
}

/// Forward-scan from `start` in document order for the first element with
/// one of `tags`.
///
/// Walks the following siblings of `start` (descending into each), then the
/// following siblings of its ancestors. `start` and its own descendants are
/// not considered.
#[must_use]
pub fn first_following<'a>(start: &Selection<'a>, tags: &[&str]) -> Option<Selection<'a>> {
    let mut anchor = start.nodes().first().copied();

    while let Some(node) = anchor {
        let mut sibling = node.next_sibling();
        while let Some(sib) = sibling {
            if sib.is_element() {
                if node_tag_matches(sib, tags) {
                    return Some(Selection::from(sib));
                }
                if let Some(found) = first_descendant(sib, tags) {
                    return Some(Selection::from(found));
                }
            }
            sibling = sib.next_sibling();
        }
        anchor = node.parent();
    }
    None
}

fn first_descendant<'a>(node: NodeRef<'a>, tags: &[&str]) -> Option<NodeRef<'a>> {
    for child in node.children() {
        if child.is_element() {
            if node_tag_matches(child, tags) {
                return Some(child);
            }
            if let Some(found) = first_descendant(child, tags) {
                return Some(found);
            }
        }
    }
    None
}

/// Trimmed text of each *direct* child with one of `tags`. Nested matches
/// (e.g. the items of an inner list) are not included.
#[must_use]
pub fn direct_child_texts(sel: &Selection, tags: &[&str]) -> Vec<String> {
    let Some(node) = sel.nodes().first().copied() else {
        return Vec::new();
    };

    let mut texts = Vec::new();
    for child in node.children() {
        if child.is_element() && node_tag_matches(child, tags) {
            let text = Selection::from(child).text().trim().to_string();
            if !text.is_empty() {
                texts.push(text);
            }
        }
    }
    texts
}

/// Raw text segments of an element, split on `<br>` boundaries.
///
/// Text inside nested inline elements flows into the current segment, so
/// mixed content like `Contracts <em>I</em><br>Torts` yields
/// `["Contracts I", "Torts"]`. Segments are trimmed; empty ones dropped.
#[must_use]
pub fn text_segments(sel: &Selection) -> Vec<String> {
    let Some(node) = sel.nodes().first().copied() else {
        return Vec::new();
    };

    let mut segments = Vec::new();
    let mut current = String::new();
    collect_segments(node, &mut current, &mut segments);
    push_segment(&mut current, &mut segments);
    segments
}

fn collect_segments(node: NodeRef, current: &mut String, segments: &mut Vec<String>) {
    for child in node.children() {
        if child.is_text() {
            current.push_str(&child.text());
        } else if child.is_element() {
            if node_tag_matches(child, &["br"]) {
                push_segment(current, segments);
            } else {
                collect_segments(child, current, segments);
            }
        }
    }
}

fn push_segment(current: &mut String, segments: &mut Vec<String>) {
    let segment = current.trim();
    if !segment.is_empty() {
        segments.push(segment.to_string());
    }
    current.clear();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn select_text_first_match_trimmed() {
        let doc = parse("<div><p class='x'>  hello </p><p class='x'>other</p></div>");
        let root = doc.select("div");
        assert_eq!(select_text(&root, "p.x"), "hello");
        assert_eq!(select_text(&root, "p.missing"), "");
    }

    #[test]
    fn find_by_exact_text_requires_exact_match() {
        let doc = parse("<div><h3>Specialization</h3><h3>Specializations</h3></div>");
        let root = doc.select("div");

        let found = find_by_exact_text(&root, "Specialization");
        assert!(found.is_some());

        assert!(find_by_exact_text(&root, "Special").is_none());
    }

    #[test]
    fn find_by_exact_text_trims_whitespace() {
        let doc = parse("<div><h3>\n  Publications  \n</h3></div>");
        let root = doc.select("div");
        assert!(find_by_exact_text(&root, "Publications").is_some());
    }

    #[test]
    fn parent_by_class_walks_upward() {
        let doc = parse(
            r#"<div class="detail-label outer"><span><h3 id="h">Specialization</h3></span></div>"#,
        );
        let heading = doc.select("#h");

        let parent = parent_by_class(&heading, "detail-label");
        assert!(parent.is_some());
        assert_eq!(tag_name(&parent.unwrap()), Some("div".to_string()));
    }

    #[test]
    fn parent_by_class_matches_whole_tokens_only() {
        let doc = parse(r#"<div class="detail-labels"><h3 id="h">X</h3></div>"#);
        let heading = doc.select("#h");
        assert!(parent_by_class(&heading, "detail-label").is_none());
    }

    #[test]
    fn next_sibling_by_class_skips_non_matching() {
        let doc = parse(
            r#"<div>
                <div id="a" class="detail-label">L</div>
                text between
                <div class="spacer"></div>
                <div class="detail-value">V</div>
            </div>"#,
        );
        let label = doc.select("#a");

        let value = next_sibling_by_class(&label, "detail-value");
        assert!(value.is_some());
        assert_eq!(value.unwrap().text().trim(), "V");
    }

    #[test]
    fn first_following_finds_list_after_heading() {
        let doc = parse(
            r#"<section>
                <h3 id="h">Publications</h3>
                <p>intro</p>
                <ul><li>One</li></ul>
            </section>"#,
        );
        let heading = doc.select("#h");

        let list = first_following(&heading, &["ul", "ol"]);
        assert!(list.is_some());
        assert_eq!(tag_name(&list.unwrap()), Some("ul".to_string()));
    }

    #[test]
    fn first_following_descends_into_siblings() {
        let doc = parse(
            r#"<section>
                <h3 id="h">Publications</h3>
                <div><div><ol><li>Deep</li></ol></div></div>
            </section>"#,
        );
        let heading = doc.select("#h");

        let list = first_following(&heading, &["ul", "ol"]);
        assert_eq!(tag_name(&list.unwrap()), Some("ol".to_string()));
    }

    #[test]
    fn first_following_ascends_to_ancestor_siblings() {
        let doc = parse(
            r#"<section>
                <div><h3 id="h">Publications</h3></div>
                <ul><li>After the wrapper</li></ul>
            </section>"#,
        );
        let heading = doc.select("#h");

        let list = first_following(&heading, &["ul", "ol"]);
        assert!(list.is_some());
    }

    #[test]
    fn first_following_ignores_preceding_lists() {
        let doc = parse(
            r#"<section>
                <ul><li>Before</li></ul>
                <h3 id="h">Publications</h3>
            </section>"#,
        );
        let heading = doc.select("#h");
        assert!(first_following(&heading, &["ul", "ol"]).is_none());
    }

    #[test]
    fn direct_child_texts_excludes_nested_lists() {
        let doc = parse(
            r#"<ul id="l">
                <li>Top one</li>
                <li>Top two<ul><li>Nested</li></ul></li>
            </ul>"#,
        );
        let list = doc.select("#l");

        let items = direct_child_texts(&list, &["li"]);
        assert_eq!(items.len(), 2);
        assert_eq!(items[0], "Top one");
        // Nested text still flows into its parent item, but the nested <li>
        // contributes no entry of its own.
        assert!(items[1].starts_with("Top two"));
    }

    #[test]
    fn text_segments_split_on_br() {
        let doc = parse(r#"<div id="t">Contracts I<br>Torts<br/>Evidence</div>"#);
        let field = doc.select("#t");
        assert_eq!(text_segments(&field), vec!["Contracts I", "Torts", "Evidence"]);
    }

    #[test]
    fn text_segments_preserve_inline_fragments() {
        let doc = parse(r#"<div id="t">Contract <em>Law</em> I<br><span>Torts</span></div>"#);
        let field = doc.select("#t");
        assert_eq!(text_segments(&field), vec!["Contract Law I", "Torts"]);
    }

    #[test]
    fn text_segments_drop_empty_runs() {
        let doc = parse(r#"<div id="t"><br>  <br>Only one</div>"#);
        let field = doc.select("#t");
        assert_eq!(text_segments(&field), vec!["Only one"]);
    }

    #[test]
    fn text_segments_empty_selection() {
        let doc = parse("<div></div>");
        let missing = doc.select("#nope");
        assert!(text_segments(&missing).is_empty());
    }
}
