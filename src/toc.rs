// src/toc.rs
//! Table of contents derived from the rendered blocks and the active mode.

use crate::display_mode::{DisplayMode, Language};
use crate::document::EntryKind;
use crate::render::RenderedBlock;
use serde::{Deserialize, Serialize};

/// How TOC labels pick their language.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TocLabelPolicy {
    /// German heading whenever present, whatever the mode.
    #[default]
    PreferGerman,
    /// The visible language first; German first when both are shown.
    FollowMode,
}

impl TocLabelPolicy {
    fn language_order(&self, mode: DisplayMode) -> [Language; 2] {
        match (self, mode.single()) {
            (TocLabelPolicy::FollowMode, Some(visible)) => [visible, visible.other()],
            _ => [Language::German, Language::Danish],
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TocDepth {
    Section,
    Subsection,
}

impl TocDepth {
    pub fn class(&self) -> &'static str {
        match self {
            TocDepth::Section => "toc-section",
            TocDepth::Subsection => "toc-subsection",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TocEntry {
    pub anchor_id: String,
    pub depth: TocDepth,
    pub label: String,
}

impl TocEntry {
    pub fn href(&self) -> String {
        format!("#{}", self.anchor_id)
    }
}

/// Everything the builder reads besides the blocks.
#[derive(Debug, Clone, Copy)]
pub struct TocContext<'a> {
    pub mode: DisplayMode,
    pub policy: TocLabelPolicy,
    /// Label stem for headings without text, numbered from 1.
    pub fallback_label: &'a str,
}

/// Build the full table of contents. Called after every render and every mode change.
pub fn build(blocks: &[RenderedBlock], ctx: &TocContext<'_>) -> Vec<TocEntry> {
    let order = ctx.policy.language_order(ctx.mode);
    let mut entries = Vec::new();

    for block in blocks {
        let depth = match block.kind {
            EntryKind::Section => TocDepth::Section,
            EntryKind::Subsection => TocDepth::Subsection,
            EntryKind::Paragraph => continue,
        };
        let Some(anchor_id) = &block.anchor_id else {
            log::debug!("skipping {} block without anchor", block.kind.as_str());
            continue;
        };

        let label = order
            .iter()
            .map(|lang| block.column(*lang).heading_text())
            .find(|text| !text.is_empty())
            .unwrap_or_else(|| format!("{} {}", ctx.fallback_label, entries.len() + 1));

        entries.push(TocEntry {
            anchor_id: anchor_id.clone(),
            depth,
            label,
        });
    }

    entries
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::ContentEntry;
    use crate::render::render_document;

    fn ctx(mode: DisplayMode, policy: TocLabelPolicy) -> TocContext<'static> {
        TocContext {
            mode,
            policy,
            fallback_label: "Abschnitt",
        }
    }

    fn sample() -> Vec<RenderedBlock> {
        let entry = |kind, da: &str, de: &str| {
            ContentEntry::new(kind, vec![da.to_string()], vec![de.to_string()])
        };
        render_document(
            &[
                entry(EntryKind::Section, "Indledning", "Einleitung"),
                entry(EntryKind::Paragraph, "tekst", "Text"),
                entry(EntryKind::Subsection, "Kun dansk", ""),
                entry(EntryKind::Subsection, "", "<br>"),
                entry(EntryKind::Paragraph, "mere", "mehr"),
            ],
            60,
        )
    }

    fn labels(entries: &[TocEntry]) -> Vec<&str> {
        entries.iter().map(|e| e.label.as_str()).collect()
    }

    #[test]
    fn test_one_entry_per_heading_in_document_order() {
        let blocks = sample();
        let toc = build(&blocks, &ctx(DisplayMode::Both, TocLabelPolicy::PreferGerman));
        assert_eq!(toc.len(), 3);
        assert_eq!(toc[0].depth, TocDepth::Section);
        assert_eq!(toc[1].depth, TocDepth::Subsection);
        assert_eq!(toc[0].anchor_id, blocks[0].anchor_id.clone().unwrap());
        assert_eq!(toc[0].href(), format!("#{}", toc[0].anchor_id));
        assert_eq!(labels(&toc), vec!["Einleitung", "Kun dansk", "Abschnitt 3"]);
    }

    #[test]
    fn test_prefer_german_ignores_mode() {
        let blocks = sample();
        let both = build(&blocks, &ctx(DisplayMode::Both, TocLabelPolicy::PreferGerman));
        let danish = build(&blocks, &ctx(DisplayMode::Danish, TocLabelPolicy::PreferGerman));
        assert_eq!(both, danish);
    }

    #[test]
    fn test_follow_mode_uses_visible_language() {
        let blocks = sample();
        let danish = build(&blocks, &ctx(DisplayMode::Danish, TocLabelPolicy::FollowMode));
        assert_eq!(labels(&danish), vec!["Indledning", "Kun dansk", "Abschnitt 3"]);
        let german = build(&blocks, &ctx(DisplayMode::German, TocLabelPolicy::FollowMode));
        assert_eq!(labels(&german)[0], "Einleitung");
    }

    #[test]
    fn test_blocks_without_anchor_are_skipped() {
        let mut blocks = sample();
        blocks[0].anchor_id = None;
        let toc = build(&blocks, &ctx(DisplayMode::Both, TocLabelPolicy::PreferGerman));
        assert_eq!(toc.len(), 2);
        assert_eq!(toc[0].label, "Kun dansk");
    }

    #[test]
    fn test_policy_from_config_value() {
        let policy: TocLabelPolicy = serde_json::from_str(r#""follow-mode""#).unwrap();
        assert_eq!(policy, TocLabelPolicy::FollowMode);
    }
}
