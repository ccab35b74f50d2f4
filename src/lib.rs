// src/lib.rs
//! Bilingual (Danish/German) reading view for a parallel text, rendered
//! client-side from a single JSON document.

pub mod anchor;
pub mod app;
pub mod components;
pub mod config;
pub mod display_mode;
pub mod document;
pub mod error;
pub mod footnotes;
pub mod linker;
pub mod markup;
pub mod panel;
pub mod render;
pub mod toc;
pub mod utils;
pub mod view_state;

pub use app::App;
pub use document::{ContentEntry, EntryKind, FootnoteEntry, TranslationDocument};
pub use error::{Result, ViewerError};
