// src/view_state.rs
//! State of one document view: the rendered blocks, the display mode and
//! everything derived from them. Each view owns its own instance, so several
//! views can coexist.

use crate::config::ViewerConfig;
use crate::display_mode::{DisplayMode, Language};
use crate::document::TranslationDocument;
use crate::footnotes::FootnoteIndex;
use crate::panel::PanelState;
use crate::render::{self, RenderedBlock};
use crate::toc::{self, TocContext, TocEntry, TocLabelPolicy};
use std::rc::Rc;

/// The two auxiliary panels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelId {
    Glossary,
    Toc,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ViewState {
    mode: DisplayMode,
    policy: TocLabelPolicy,
    fallback_label: String,
    blocks: Rc<Vec<RenderedBlock>>,
    toc: Rc<Vec<TocEntry>>,
    footnotes: Rc<FootnoteIndex>,
    glossary: Rc<str>,
    glossary_panel: PanelState,
    toc_panel: PanelState,
}

impl ViewState {
    /// Render a freshly loaded document. Replaces any earlier content wholesale.
    pub fn from_document(doc: &TranslationDocument, config: &ViewerConfig) -> Self {
        let blocks = render::render_document(&doc.entries, config.anchor_max_len);
        let mut state = Self {
            mode: config.initial_mode,
            policy: config.toc_label_policy,
            fallback_label: config.fallback_heading_label.clone(),
            blocks: Rc::new(blocks),
            toc: Rc::new(Vec::new()),
            footnotes: Rc::new(FootnoteIndex::new(&doc.footnotes)),
            glossary: Rc::from(doc.glossary.as_str()),
            glossary_panel: PanelState::closed(config.glossary_labels.clone()),
            toc_panel: PanelState::closed(config.toc_labels.clone()),
        };
        state.rebuild_toc();
        state
    }

    pub fn mode(&self) -> DisplayMode {
        self.mode
    }

    pub fn blocks(&self) -> &Rc<Vec<RenderedBlock>> {
        &self.blocks
    }

    pub fn toc(&self) -> &Rc<Vec<TocEntry>> {
        &self.toc
    }

    pub fn footnotes(&self) -> &Rc<FootnoteIndex> {
        &self.footnotes
    }

    pub fn glossary(&self) -> &Rc<str> {
        &self.glossary
    }

    pub fn panel(&self, id: PanelId) -> &PanelState {
        match id {
            PanelId::Glossary => &self.glossary_panel,
            PanelId::Toc => &self.toc_panel,
        }
    }

    fn panel_mut(&mut self, id: PanelId) -> &mut PanelState {
        match id {
            PanelId::Glossary => &mut self.glossary_panel,
            PanelId::Toc => &mut self.toc_panel,
        }
    }

    fn rebuild_toc(&mut self) {
        let ctx = TocContext {
            mode: self.mode,
            policy: self.policy,
            fallback_label: &self.fallback_label,
        };
        self.toc = Rc::new(toc::build(&self.blocks, &ctx));
        log::debug!(
            "table of contents rebuilt for mode {}: {} entries",
            self.mode.as_attr(),
            self.toc.len()
        );
    }

    /// Switch the display mode. The table of contents is rebuilt in the same
    /// call, so it never lags the mode.
    pub fn set_mode(&mut self, mode: DisplayMode) {
        log::debug!("display mode {} -> {}", self.mode.as_attr(), mode.as_attr());
        self.mode = mode;
        self.rebuild_toc();
    }

    pub fn click_language(&mut self, language: Language) {
        self.set_mode(self.mode.after_language_click(language));
    }

    pub fn toggle_panel(&mut self, id: PanelId) {
        self.panel_mut(id).toggle();
    }

    pub fn set_panel_open(&mut self, id: PanelId, open: bool) -> bool {
        self.panel_mut(id).set_open(open)
    }

    /// A table-of-contents link was followed.
    pub fn navigate_toc(&mut self) -> bool {
        self.set_panel_open(PanelId::Toc, false)
    }
}
