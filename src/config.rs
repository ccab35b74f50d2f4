// src/config.rs
use crate::anchor::DEFAULT_MAX_SLUG_LEN;
use crate::display_mode::{DisplayMode, Language};
use crate::error::{Result, ViewerError};
use crate::panel::PanelLabels;
use crate::toc::TocLabelPolicy;
use serde::{Deserialize, Serialize};

/// Path of the optional configuration file, relative to the page.
pub const CONFIG_PATH: &str = "viewer-config.json";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewerConfig {
    pub data_url: String,
    pub language_names: LanguageNames,
    pub initial_mode: DisplayMode,
    pub toc_label_policy: TocLabelPolicy,
    pub fallback_heading_label: String,
    pub anchor_max_len: usize,
    pub glossary_labels: PanelLabels,
    pub toc_labels: PanelLabels,
    pub load_error_message: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LanguageNames {
    pub danish: String,
    pub german: String,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            data_url: String::from("translation-data.json"),
            language_names: LanguageNames::default(),
            initial_mode: DisplayMode::Both,
            toc_label_policy: TocLabelPolicy::PreferGerman,
            fallback_heading_label: String::from("Abschnitt"),
            anchor_max_len: DEFAULT_MAX_SLUG_LEN,
            glossary_labels: PanelLabels::new("Glossar anzeigen", "Glossar ausblenden"),
            toc_labels: PanelLabels::new("Inhaltsverzeichnis", "Inhaltsverzeichnis schließen"),
            load_error_message: String::from("Die Inhalte konnten nicht geladen werden."),
        }
    }
}

impl Default for LanguageNames {
    fn default() -> Self {
        Self {
            danish: String::from("Dänisch"),
            german: String::from("Deutsch"),
        }
    }
}

impl LanguageNames {
    pub fn name(&self, language: Language) -> &str {
        match language {
            Language::Danish => &self.danish,
            Language::German => &self.german,
        }
    }
}

impl ViewerConfig {
    /// Parse a configuration file; missing keys keep their defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: ViewerConfig =
            serde_json::from_str(json).map_err(|e| ViewerError::Config(e.to_string()))?;
        if config.anchor_max_len == 0 {
            return Err(ViewerError::Config(
                "anchor_max_len must be at least 1".to_string(),
            ));
        }
        Ok(config)
    }
}
