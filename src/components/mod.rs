// src/components/mod.rs
pub mod document_view;
pub mod footnote_list;
pub mod glossary_panel;
pub mod language_controls;
pub mod load_error;
pub mod panel_toggle;
pub mod toc_panel;
