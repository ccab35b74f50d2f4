// src/render.rs
//! Column and document rendering into a view model.
//!
//! The model mirrors the DOM the view emits one to one: every entry becomes
//! one `article.paragraph-pair` holding a Danish and a German column.

use crate::anchor;
use crate::display_mode::Language;
use crate::document::{ContentEntry, EntryKind};
use crate::markup;

/// One node inside a language column. Markup is kept verbatim.
#[derive(Debug, Clone, PartialEq)]
pub enum ColumnNode {
    /// `h2` for sections, `h3` for subsections.
    Heading { level: u8, markup: String },
    Paragraph { markup: String },
}

impl ColumnNode {
    pub fn markup(&self) -> &str {
        match self {
            ColumnNode::Heading { markup, .. } | ColumnNode::Paragraph { markup } => markup,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Column {
    pub language: Language,
    pub nodes: Vec<ColumnNode>,
}

impl Column {
    /// Plain text of the column's heading, empty when it has none.
    pub fn heading_text(&self) -> String {
        match self.nodes.first() {
            Some(ColumnNode::Heading { markup, .. }) => markup::plain_text(markup),
            _ => String::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RenderedBlock {
    pub kind: EntryKind,
    pub anchor_id: Option<String>,
    pub danish: Column,
    pub german: Column,
}

impl RenderedBlock {
    pub fn column(&self, language: Language) -> &Column {
        match language {
            Language::Danish => &self.danish,
            Language::German => &self.german,
        }
    }
}

/// Render one language's paragraph sequence for an entry of the given kind.
///
/// Headings use only the first element; a missing heading renders empty.
pub fn render_column(paragraphs: &[String], kind: EntryKind, language: Language) -> Column {
    let heading = |level| ColumnNode::Heading {
        level,
        markup: paragraphs.first().cloned().unwrap_or_default(),
    };

    let nodes = match kind {
        EntryKind::Section => vec![heading(2)],
        EntryKind::Subsection => vec![heading(3)],
        EntryKind::Paragraph => paragraphs
            .iter()
            .map(|p| ColumnNode::Paragraph { markup: p.clone() })
            .collect(),
    };

    Column { language, nodes }
}

pub fn render_entry(entry: &ContentEntry, index: usize, max_anchor_len: usize) -> RenderedBlock {
    RenderedBlock {
        kind: entry.kind,
        anchor_id: anchor::assign(entry, index, max_anchor_len),
        danish: render_column(&entry.danish, entry.kind, Language::Danish),
        german: render_column(&entry.german, entry.kind, Language::German),
    }
}

/// Render every entry in source order. The result always replaces any
/// previously rendered blocks.
pub fn render_document(entries: &[ContentEntry], max_anchor_len: usize) -> Vec<RenderedBlock> {
    entries
        .iter()
        .enumerate()
        .map(|(index, entry)| render_entry(entry, index, max_anchor_len))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::anchor::DEFAULT_MAX_SLUG_LEN;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_section_and_paragraph_scenario() {
        let entries = vec![
            ContentEntry::new(EntryKind::Section, strings(&["<h>A</h>"]), strings(&["<h>Ü</h>"])),
            ContentEntry::new(EntryKind::Paragraph, strings(&["x"]), strings(&["y"])),
        ];
        let blocks = render_document(&entries, DEFAULT_MAX_SLUG_LEN);

        assert_eq!(blocks.len(), 2);
        assert_eq!(blocks[0].kind, EntryKind::Section);
        assert!(blocks[0].anchor_id.as_deref().is_some_and(|id| !id.is_empty()));
        assert_eq!(blocks[0].german.heading_text(), "Ü");
        assert!(matches!(blocks[0].german.nodes[0], ColumnNode::Heading { level: 2, .. }));

        assert_eq!(blocks[1].anchor_id, None);
        assert_eq!(blocks[1].danish.nodes, vec![ColumnNode::Paragraph { markup: "x".into() }]);
        assert_eq!(blocks[1].german.nodes, vec![ColumnNode::Paragraph { markup: "y".into() }]);
    }

    #[test]
    fn test_block_order_matches_entry_order() {
        let kinds = [
            EntryKind::Paragraph,
            EntryKind::Section,
            EntryKind::Paragraph,
            EntryKind::Subsection,
            EntryKind::Subsection,
            EntryKind::Paragraph,
        ];
        let entries: Vec<_> = kinds
            .iter()
            .map(|k| ContentEntry::new(*k, strings(&["a"]), strings(&["b"])))
            .collect();
        let rendered: Vec<_> = render_document(&entries, DEFAULT_MAX_SLUG_LEN)
            .iter()
            .map(|b| b.kind)
            .collect();
        assert_eq!(rendered, kinds);
    }

    #[test]
    fn test_heading_uses_first_element_only() {
        let column = render_column(&strings(&["Titel", "ignored"]), EntryKind::Subsection, Language::German);
        assert_eq!(
            column.nodes,
            vec![ColumnNode::Heading {
                level: 3,
                markup: "Titel".into()
            }]
        );
    }

    #[test]
    fn test_paragraphs_keep_markup_verbatim_and_in_order() {
        let column = render_column(
            &strings(&["<em>eins</em>", "zwei &ndash; drei"]),
            EntryKind::Paragraph,
            Language::Danish,
        );
        let markup: Vec<_> = column.nodes.iter().map(|n| n.markup()).collect();
        assert_eq!(markup, vec!["<em>eins</em>", "zwei &ndash; drei"]);
    }

    #[test]
    fn test_empty_heading_column_renders_empty_heading() {
        let column = render_column(&[], EntryKind::Section, Language::Danish);
        assert_eq!(column.nodes.len(), 1);
        assert_eq!(column.heading_text(), "");
    }
}
