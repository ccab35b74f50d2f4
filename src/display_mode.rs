// src/display_mode.rs
use serde::{Deserialize, Serialize};

/// The two languages of the parallel text. Danish is the left column,
/// German the right one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Language {
    #[serde(rename = "da")]
    Danish,
    #[serde(rename = "de")]
    German,
}

impl Language {
    pub const ALL: [Language; 2] = [Language::Danish, Language::German];

    pub fn code(&self) -> &'static str {
        match self {
            Language::Danish => "da",
            Language::German => "de",
        }
    }

    pub fn other(&self) -> Language {
        match self {
            Language::Danish => Language::German,
            Language::German => Language::Danish,
        }
    }
}

/// Which language column(s) are visible.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DisplayMode {
    #[default]
    Both,
    #[serde(rename = "da")]
    Danish,
    #[serde(rename = "de")]
    German,
}

impl DisplayMode {
    /// Value written to the content container's `data-mode` attribute.
    pub fn as_attr(&self) -> &'static str {
        match self {
            DisplayMode::Both => "both",
            DisplayMode::Danish => "da",
            DisplayMode::German => "de",
        }
    }

    pub fn only(language: Language) -> Self {
        match language {
            Language::Danish => DisplayMode::Danish,
            Language::German => DisplayMode::German,
        }
    }

    /// The single visible language, if only one is shown.
    pub fn single(&self) -> Option<Language> {
        match self {
            DisplayMode::Both => None,
            DisplayMode::Danish => Some(Language::Danish),
            DisplayMode::German => Some(Language::German),
        }
    }

    pub fn shows(&self, language: Language) -> bool {
        self.single().map_or(true, |l| l == language)
    }

    /// Mode after the user clicks a language button.
    ///
    /// The buttons mute their language: from `Both`, clicking a language hides
    /// it; from a single-language mode any click brings both columns back.
    pub fn after_language_click(&self, clicked: Language) -> Self {
        match self {
            DisplayMode::Both => DisplayMode::only(clicked.other()),
            _ => DisplayMode::Both,
        }
    }

    pub fn button_state(&self, language: Language) -> LanguageButtonState {
        match self.single() {
            None => LanguageButtonState {
                muted: false,
                pressed: false,
            },
            Some(visible) => LanguageButtonState {
                muted: visible != language,
                pressed: visible == language,
            },
        }
    }
}

/// Visual and accessibility state of one language button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LanguageButtonState {
    /// The button's language is hidden (`is-muted` class).
    pub muted: bool,
    /// Value of `aria-pressed`.
    pub pressed: bool,
}

impl LanguageButtonState {
    pub fn aria_pressed(&self) -> &'static str {
        if self.pressed {
            "true"
        } else {
            "false"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_click_from_both_hides_clicked_language() {
        assert_eq!(
            DisplayMode::Both.after_language_click(Language::Danish),
            DisplayMode::German
        );
        assert_eq!(
            DisplayMode::Both.after_language_click(Language::German),
            DisplayMode::Danish
        );
    }

    #[test]
    fn test_click_from_single_mode_restores_both() {
        for mode in [DisplayMode::Danish, DisplayMode::German] {
            for lang in Language::ALL {
                assert_eq!(mode.after_language_click(lang), DisplayMode::Both);
            }
        }
    }

    #[test]
    fn test_button_state() {
        let both = DisplayMode::Both.button_state(Language::Danish);
        assert!(!both.muted);
        assert_eq!(both.aria_pressed(), "false");

        let shown = DisplayMode::German.button_state(Language::German);
        assert!(!shown.muted);
        assert_eq!(shown.aria_pressed(), "true");

        let hidden = DisplayMode::German.button_state(Language::Danish);
        assert!(hidden.muted);
        assert_eq!(hidden.aria_pressed(), "false");
    }

    #[test]
    fn test_mode_serde_codes() {
        let mode: DisplayMode = serde_json::from_str(r#""de""#).unwrap();
        assert_eq!(mode, DisplayMode::German);
        assert_eq!(serde_json::to_string(&DisplayMode::Both).unwrap(), r#""both""#);
        assert_eq!(mode.as_attr(), "de");
        assert!(DisplayMode::Both.shows(Language::Danish));
        assert!(!mode.shows(Language::Danish));
    }
}
