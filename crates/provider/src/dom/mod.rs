//! Narrow document-tree abstraction over the HTML parser.
//!
//! The provider only needs a handful of query operations (find by class,
//! find anchors, walk to the enclosing table row, find the next element in
//! document order), so the full parser API stays private to this module.

use scraper::{ElementRef, Html};

/// A parsed HTML document.
pub struct Document {
    html: Html,
}

/// A single element within a [`Document`].
#[derive(Clone, Copy)]
pub struct Node<'a> {
    el: ElementRef<'a>,
}

impl Document {
    /// Parse an HTML body. Parsing never fails; malformed markup yields a
    /// best-effort tree, like any browser.
    pub fn parse(body: &str) -> Self {
        Self {
            html: Html::parse_document(body),
        }
    }

    /// True iff any text node in the document contains `marker`.
    pub fn text_contains(&self, marker: &str) -> bool {
        self.html
            .root_element()
            .descendants()
            .filter_map(|node| node.value().as_text())
            .any(|text| text.contains(marker))
    }

    /// First element carrying the given class, in document order.
    pub fn find_by_class(&self, class: &str) -> Option<Node<'_>> {
        self.elements()
            .find(|el| el.value().classes().any(|c| c == class))
            .map(Node::new)
    }

    /// First element with the given tag name and class, in document order.
    pub fn find_tag_with_class(&self, tag: &str, class: &str) -> Option<Node<'_>> {
        self.elements()
            .find(|el| el.value().name() == tag && el.value().classes().any(|c| c == class))
            .map(Node::new)
    }

    /// First `tag` element strictly after `node` in document order.
    ///
    /// Equivalent to walking forward through the rest of the document, so the
    /// match may be a descendant, a sibling, or part of a later subtree.
    pub fn element_after(&self, node: &Node<'_>, tag: &str) -> Option<Node<'_>> {
        let mut passed = false;
        for candidate in self.html.root_element().descendants() {
            if !passed {
                passed = candidate.id() == node.el.id();
                continue;
            }
            if let Some(el) = ElementRef::wrap(candidate) {
                if el.value().name() == tag {
                    return Some(Node::new(el));
                }
            }
        }
        None
    }

    /// First `tag` element after the first text node containing `label`.
    ///
    /// Used for label/value table layouts where a text label is followed by
    /// the cell holding the value.
    pub fn element_after_text(&self, label: &str, tag: &str) -> Option<Node<'_>> {
        let mut passed = false;
        for candidate in self.html.root_element().descendants() {
            if !passed {
                passed = candidate
                    .value()
                    .as_text()
                    .is_some_and(|text| text.contains(label));
                continue;
            }
            if let Some(el) = ElementRef::wrap(candidate) {
                if el.value().name() == tag {
                    return Some(Node::new(el));
                }
            }
        }
        None
    }

    fn elements(&self) -> impl Iterator<Item = ElementRef<'_>> {
        self.html
            .root_element()
            .descendants()
            .filter_map(ElementRef::wrap)
    }
}

impl<'a> Node<'a> {
    fn new(el: ElementRef<'a>) -> Self {
        Self { el }
    }

    /// Concatenated text content, trimmed.
    pub fn text(&self) -> String {
        self.el.text().collect::<String>().trim().to_string()
    }

    /// Outer HTML of this element.
    pub fn html(&self) -> String {
        self.el.html()
    }

    /// Attribute value, if present.
    pub fn attr(&self, name: &str) -> Option<&'a str> {
        self.el.value().attr(name)
    }

    /// All `<a>` descendants carrying an `href`, in document order.
    pub fn anchors(&self) -> Vec<Node<'a>> {
        self.descendant_elements()
            .filter(|el| el.value().name() == "a" && el.value().attr("href").is_some())
            .map(Node::new)
            .collect()
    }

    /// All descendants with the given tag name, in document order.
    pub fn find_all(&self, tag: &str) -> Vec<Node<'a>> {
        self.descendant_elements()
            .filter(|el| el.value().name() == tag)
            .map(Node::new)
            .collect()
    }

    /// First descendant with the given tag name.
    pub fn find_first(&self, tag: &str) -> Option<Node<'a>> {
        self.descendant_elements()
            .find(|el| el.value().name() == tag)
            .map(Node::new)
    }

    /// Cells of the nearest enclosing `<tr>`, in document order. Empty when
    /// this element is not inside a table row.
    pub fn enclosing_row_cells(&self) -> Vec<Node<'a>> {
        self.el
            .ancestors()
            .filter_map(ElementRef::wrap)
            .find(|el| el.value().name() == "tr")
            .map(|row| Node::new(row).find_all("td"))
            .unwrap_or_default()
    }

    fn descendant_elements(&self) -> impl Iterator<Item = ElementRef<'a>> {
        let own_id = self.el.id();
        self.el
            .descendants()
            .filter(move |node| node.id() != own_id)
            .filter_map(ElementRef::wrap)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAGE: &str = r#"
<html><body>
  <div class="header">Menu</div>
  <table class="results">
    <tr>
      <td><a href="https://example.org/torrent/1-one">One</a></td>
      <td>10</td>
    </tr>
  </table>
  <span>Uploadé le</span>
  <table><tr><td>02/06/2024 11:30 (il y a 3 jours)</td></tr></table>
</body></html>
"#;

    #[test]
    fn test_text_contains() {
        let doc = Document::parse(PAGE);
        assert!(doc.text_contains("Uploadé le"));
        assert!(!doc.text_contains("Déconnexion"));
    }

    #[test]
    fn test_find_by_class() {
        let doc = Document::parse(PAGE);
        let results = doc.find_by_class("results");
        assert!(results.is_some());
        assert!(doc.find_by_class("missing").is_none());
    }

    #[test]
    fn test_find_tag_with_class_requires_both() {
        let doc = Document::parse(PAGE);
        assert!(doc.find_tag_with_class("table", "results").is_some());
        assert!(doc.find_tag_with_class("ul", "results").is_none());
    }

    #[test]
    fn test_anchors_and_attrs() {
        let doc = Document::parse(PAGE);
        let results = doc.find_by_class("results").unwrap();
        let anchors = results.anchors();
        assert_eq!(anchors.len(), 1);
        assert_eq!(anchors[0].text(), "One");
        assert_eq!(
            anchors[0].attr("href"),
            Some("https://example.org/torrent/1-one")
        );
    }

    #[test]
    fn test_enclosing_row_cells() {
        let doc = Document::parse(PAGE);
        let anchor = doc.find_by_class("results").unwrap().anchors()[0];
        let cells = anchor.enclosing_row_cells();
        assert_eq!(cells.len(), 2);
        assert_eq!(cells[1].text(), "10");
    }

    #[test]
    fn test_element_after_text_crosses_markup() {
        let doc = Document::parse(PAGE);
        let cell = doc.element_after_text("Uploadé le", "td").unwrap();
        assert_eq!(cell.text(), "02/06/2024 11:30 (il y a 3 jours)");
    }

    #[test]
    fn test_element_after() {
        let html = r#"<div class="description-header">Description</div><p>skip</p><div>Body text</div>"#;
        let doc = Document::parse(html);
        let header = doc.find_by_class("description-header").unwrap();
        let next = doc.element_after(&header, "div").unwrap();
        assert_eq!(next.text(), "Body text");
    }

    #[test]
    fn test_element_after_missing() {
        let doc = Document::parse("<div class=\"x\">last</div>");
        let node = doc.find_by_class("x").unwrap();
        assert!(doc.element_after(&node, "div").is_none());
    }
}
