// src/footnotes.rs
use crate::document::FootnoteEntry;
use crate::markup;
use std::collections::HashMap;

/// Element id of the definition block for a footnote.
pub fn target_id(footnote_id: &str) -> String {
    format!("footnote-{}", footnote_id)
}

/// What a reference marker needs once it is linked: where to scroll and the
/// hover hint to show.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FootnoteLink {
    pub target_id: String,
    pub preview: String,
}

/// Footnotes in source order plus an id lookup. Built once per load and only
/// read afterwards.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FootnoteIndex {
    notes: Vec<FootnoteEntry>,
    by_id: HashMap<String, usize>,
}

impl FootnoteIndex {
    /// Index the notes. With duplicate ids the first definition wins and
    /// later ones are not rendered.
    pub fn new(footnotes: &[FootnoteEntry]) -> Self {
        let mut notes = Vec::with_capacity(footnotes.len());
        let mut by_id = HashMap::with_capacity(footnotes.len());
        for note in footnotes {
            if by_id.contains_key(&note.id) {
                continue;
            }
            by_id.insert(note.id.clone(), notes.len());
            notes.push(note.clone());
        }
        Self { notes, by_id }
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    pub fn len(&self) -> usize {
        self.notes.len()
    }

    /// Notes in the order the data source supplied them.
    pub fn iter(&self) -> impl Iterator<Item = &FootnoteEntry> {
        self.notes.iter()
    }

    pub fn get(&self, id: &str) -> Option<&FootnoteEntry> {
        self.by_id.get(id).map(|&i| &self.notes[i])
    }

    /// Resolve a reference marker. `None` leaves the marker inert.
    pub fn link(&self, id: &str) -> Option<FootnoteLink> {
        let note = self.get(id)?;
        Some(FootnoteLink {
            target_id: target_id(&note.id),
            preview: preview(note),
        })
    }
}

/// Plain-text hint for a note, German first.
pub fn preview(note: &FootnoteEntry) -> String {
    let german = markup::plain_text(&note.german);
    if german.is_empty() {
        markup::plain_text(&note.danish)
    } else {
        german
    }
}
