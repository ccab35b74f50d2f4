// src/panel.rs
use serde::{Deserialize, Serialize};

/// Button labels for a collapsible panel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PanelLabels {
    /// Shown while the panel is closed.
    pub open: String,
    /// Shown while the panel is open.
    pub close: String,
}

impl PanelLabels {
    pub fn new(open: impl Into<String>, close: impl Into<String>) -> Self {
        Self {
            open: open.into(),
            close: close.into(),
        }
    }
}

/// Open/closed state of one panel and the label its toggle button shows.
/// Each panel owns its own state; toggling one never touches another.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PanelState {
    open: bool,
    labels: PanelLabels,
}

impl PanelState {
    pub fn closed(labels: PanelLabels) -> Self {
        Self {
            open: false,
            labels,
        }
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Apply an explicit state. Returns whether anything changed.
    pub fn set_open(&mut self, open: bool) -> bool {
        let changed = self.open != open;
        self.open = open;
        changed
    }

    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    /// Label for the toggle button in the current state.
    pub fn label(&self) -> &str {
        if self.open {
            &self.labels.close
        } else {
            &self.labels.open
        }
    }

    pub fn aria_expanded(&self) -> &'static str {
        if self.open {
            "true"
        } else {
            "false"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn glossary() -> PanelState {
        PanelState::closed(PanelLabels::new("Glossar anzeigen", "Glossar ausblenden"))
    }

    #[test]
    fn test_initial_label_sync() {
        let panel = glossary();
        assert!(!panel.is_open());
        assert_eq!(panel.label(), "Glossar anzeigen");
        assert_eq!(panel.aria_expanded(), "false");
    }

    #[test]
    fn test_set_open() {
        let mut panel = glossary();
        assert!(panel.set_open(true));
        assert_eq!(panel.label(), "Glossar ausblenden");
        assert_eq!(panel.aria_expanded(), "true");
        assert!(!panel.set_open(true));
    }

    #[test]
    fn test_double_toggle_restores_state() {
        for start_open in [false, true] {
            let mut panel = glossary();
            panel.set_open(start_open);
            let before = panel.clone();
            panel.toggle();
            assert_ne!(panel, before);
            panel.toggle();
            assert_eq!(panel, before);
            assert_eq!(panel.label(), before.label());
        }
    }
}
