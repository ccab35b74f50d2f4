// src/components/glossary_panel.rs
use super::panel_toggle::PanelToggle;
use crate::panel::PanelState;
use std::rc::Rc;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct GlossaryPanelProps {
    pub markup: Rc<str>,
    pub state: PanelState,
    pub on_toggle: Callback<()>,
}

/// The glossary is pre-rendered markup and is inserted as is.
#[function_component(GlossaryPanel)]
pub fn glossary_panel(props: &GlossaryPanelProps) -> Html {
    if props.markup.trim().is_empty() {
        return html! {};
    }

    html! {
        <PanelToggle panel_id="glossary-panel" state={props.state.clone()} on_toggle={props.on_toggle.clone()}>
            <div id="glossary" class="glossary-content">
                { Html::from_html_unchecked(AttrValue::from(props.markup.clone())) }
            </div>
        </PanelToggle>
    }
}
