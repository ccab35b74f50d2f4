// src/anchor.rs
//! Anchor ids for section and subsection blocks.
//!
//! An id is `sec-`, a slug of the heading text and the entry's position in
//! the document, e.g. `sec-die-unsterblichkeit-der-seele-4`. The positional
//! suffix keeps ids unique when headings repeat or slug to nothing; the
//! prefix keeps them apart from footnote ids.

use crate::document::ContentEntry;
use crate::markup;

pub const DEFAULT_MAX_SLUG_LEN: usize = 60;
pub const ANCHOR_PREFIX: &str = "sec";

fn is_slug_char(c: char) -> bool {
    c.is_ascii_lowercase() || c.is_ascii_digit() || "äöüßæøåéè".contains(c)
}

/// Turn plain text into a URL-safe slug: lowercase, letters/digits and the
/// Danish and German diacritics only, whitespace runs become a single `-`.
pub fn slugify(text: &str, max_len: usize) -> String {
    let mut slug = String::with_capacity(text.len());
    let mut pending_dash = false;

    for c in text.chars().flat_map(char::to_lowercase) {
        if is_slug_char(c) {
            if pending_dash && !slug.is_empty() {
                slug.push('-');
            }
            pending_dash = false;
            slug.push(c);
        } else if c.is_whitespace() || c == '-' {
            pending_dash = true;
        }
    }

    if slug.chars().count() > max_len {
        slug = slug.chars().take(max_len).collect();
    }
    slug.trim_end_matches('-').to_string()
}

/// Heading text used as the anchor source: German first, then Danish.
fn anchor_source(entry: &ContentEntry) -> Option<String> {
    [&entry.german, &entry.danish]
        .into_iter()
        .filter_map(|column| column.first())
        .map(|heading| markup::plain_text(heading))
        .find(|text| !text.is_empty())
}

/// Assign an anchor id to the entry at `index`. Paragraphs get none.
pub fn assign(entry: &ContentEntry, index: usize, max_len: usize) -> Option<String> {
    if !entry.kind.is_heading() {
        return None;
    }

    let slug = anchor_source(entry)
        .map(|text| slugify(&text, max_len))
        .unwrap_or_default();

    Some(if slug.is_empty() {
        format!("{}-{}", ANCHOR_PREFIX, index)
    } else {
        format!("{}-{}-{}", ANCHOR_PREFIX, slug, index)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::EntryKind;
    use std::collections::HashSet;

    fn heading(kind: EntryKind, da: &str, de: &str) -> ContentEntry {
        ContentEntry::new(kind, vec![da.to_string()], vec![de.to_string()])
    }

    #[test]
    fn test_slugify() {
        assert_eq!(slugify("  Über die  Seele ", 60), "über-die-seele");
        assert_eq!(slugify("Kapitel 3: Tro & Viden!", 60), "kapitel-3-tro-viden");
        assert_eq!(slugify("Ærlighed og Søren", 60), "ærlighed-og-søren");
        assert_eq!(slugify("???", 60), "");
    }

    #[test]
    fn test_slugify_caps_length_without_trailing_dash() {
        assert_eq!(slugify("abcd efgh", 5), "abcd");
        assert_eq!(slugify("abcdefgh", 3), "abc");
    }

    #[test]
    fn test_prefers_german_heading() {
        let entry = heading(EntryKind::Section, "<b>Indledning</b>", "<b>Einleitung</b>");
        assert_eq!(assign(&entry, 0, 60).as_deref(), Some("sec-einleitung-0"));
    }

    #[test]
    fn test_falls_back_to_danish_then_placeholder() {
        let entry = heading(EntryKind::Subsection, "Indledning", "<span></span>");
        assert_eq!(assign(&entry, 2, 60).as_deref(), Some("sec-indledning-2"));

        let empty = ContentEntry::new(EntryKind::Section, vec![], vec![]);
        assert_eq!(assign(&empty, 5, 60).as_deref(), Some("sec-5"));

        let symbols = heading(EntryKind::Section, "§", "***");
        assert_eq!(assign(&symbols, 1, 60).as_deref(), Some("sec-1"));
    }

    #[test]
    fn test_heading_entities_are_decoded_before_slugging() {
        let entry = heading(EntryKind::Section, "", "Tro & Viden &ndash; Glaube");
        assert_eq!(assign(&entry, 0, 60).as_deref(), Some("sec-tro-viden-glaube-0"));
    }

    #[test]
    fn test_anchor_never_matches_footnote_target() {
        let entry = heading(EntryKind::Section, "Fodnote", "Footnote");
        let id = assign(&entry, 3, 60).unwrap();
        assert_eq!(id, "sec-footnote-3");
        assert_ne!(id, crate::footnotes::target_id("3"));
        assert!(!id.starts_with("footnote-"));
    }

    #[test]
    fn test_paragraphs_have_no_anchor() {
        let entry = heading(EntryKind::Paragraph, "x", "y");
        assert_eq!(assign(&entry, 0, 60), None);
    }

    #[test]
    fn test_ids_unique_for_duplicate_and_degenerate_headings() {
        let entries = vec![
            heading(EntryKind::Section, "A", "Teil"),
            heading(EntryKind::Subsection, "A", "Teil"),
            heading(EntryKind::Section, "", ""),
            heading(EntryKind::Subsection, "<i></i>", "<i></i>"),
            heading(EntryKind::Section, "A", "Teil"),
        ];
        let ids: Vec<String> = entries
            .iter()
            .enumerate()
            .filter_map(|(i, e)| assign(e, i, 60))
            .collect();
        assert_eq!(ids.len(), entries.len());
        assert!(ids.iter().all(|id| !id.is_empty()));
        let unique: HashSet<_> = ids.iter().collect();
        assert_eq!(unique.len(), ids.len());
    }
}
