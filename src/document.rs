// src/document.rs
use crate::error::Result;
use crate::markup;
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::HashSet;

/// The three kinds of content entry in the source document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    Section,
    Subsection,
    Paragraph,
}

impl EntryKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            EntryKind::Section => "section",
            EntryKind::Subsection => "subsection",
            EntryKind::Paragraph => "paragraph",
        }
    }

    /// Sections and subsections are navigable, paragraphs are not.
    pub fn is_heading(&self) -> bool {
        matches!(self, EntryKind::Section | EntryKind::Subsection)
    }
}

/// One unit of parallel content. For headings the first element of each
/// language sequence is the heading markup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentEntry {
    #[serde(rename = "type")]
    pub kind: EntryKind,
    #[serde(default, deserialize_with = "null_as_default")]
    pub danish: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub german: Vec<String>,
}

impl ContentEntry {
    pub fn new(kind: EntryKind, danish: Vec<String>, german: Vec<String>) -> Self {
        Self {
            kind,
            danish,
            german,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FootnoteEntry {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub danish: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub german: String,
}

/// The full data source: ordered entries plus optional glossary and notes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TranslationDocument {
    pub entries: Vec<ContentEntry>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub glossary: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub footnotes: Vec<FootnoteEntry>,
}

// Older exports are a bare array of entries.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawDocument {
    Bare(Vec<ContentEntry>),
    Full(TranslationDocument),
}

/// Non-fatal problems found in an otherwise valid document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationWarning {
    EmptyHeading { index: usize, language: &'static str },
    DuplicateFootnote { id: String },
    UnknownFootnoteReference { index: usize, id: String },
}

impl std::fmt::Display for ValidationWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationWarning::EmptyHeading { index, language } => {
                write!(f, "entry {} has no {} heading", index, language)
            }
            ValidationWarning::DuplicateFootnote { id } => {
                write!(f, "footnote id {:?} is defined more than once", id)
            }
            ValidationWarning::UnknownFootnoteReference { index, id } => {
                write!(f, "entry {} references unknown footnote {:?}", index, id)
            }
        }
    }
}

impl TranslationDocument {
    pub fn new(entries: Vec<ContentEntry>) -> Self {
        Self {
            entries,
            glossary: String::new(),
            footnotes: Vec::new(),
        }
    }

    /// Parse the JSON resource. Accepts the object form as well as a bare
    /// array of entries.
    pub fn from_json(json: &str) -> Result<Self> {
        let raw: RawDocument = serde_json::from_str(json)?;
        Ok(match raw {
            RawDocument::Bare(entries) => Self::new(entries),
            RawDocument::Full(doc) => doc,
        })
    }

    pub fn heading_count(&self) -> usize {
        self.entries.iter().filter(|e| e.kind.is_heading()).count()
    }

    /// Collect the problems that degrade rendering without preventing it.
    pub fn validate(&self) -> Vec<ValidationWarning> {
        let mut warnings = Vec::new();

        for (index, entry) in self.entries.iter().enumerate() {
            if !entry.kind.is_heading() {
                continue;
            }
            if entry.danish.first().map_or(true, |h| h.trim().is_empty()) {
                warnings.push(ValidationWarning::EmptyHeading {
                    index,
                    language: "danish",
                });
            }
            if entry.german.first().map_or(true, |h| h.trim().is_empty()) {
                warnings.push(ValidationWarning::EmptyHeading {
                    index,
                    language: "german",
                });
            }
        }

        let mut seen = HashSet::new();
        for note in &self.footnotes {
            if !seen.insert(note.id.as_str()) {
                warnings.push(ValidationWarning::DuplicateFootnote {
                    id: note.id.clone(),
                });
            }
        }

        for (index, entry) in self.entries.iter().enumerate() {
            for fragment in entry.danish.iter().chain(entry.german.iter()) {
                for id in markup::footnote_references(fragment) {
                    if !seen.contains(id.as_str()) {
                        warnings.push(ValidationWarning::UnknownFootnoteReference { index, id });
                    }
                }
            }
        }

        warnings
    }
}

// An explicit `null` counts the same as a missing key.
fn null_as_default<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

fn deserialize_id<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Id {
        Text(String),
        Number(serde_json::Number),
    }

    Ok(match Id::deserialize(deserializer)? {
        Id::Text(s) => s,
        Id::Number(n) => n.to_string(),
    })
}
