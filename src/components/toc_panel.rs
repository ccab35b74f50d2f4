// src/components/toc_panel.rs
use super::panel_toggle::PanelToggle;
use crate::panel::PanelState;
use crate::toc::TocEntry;
use std::rc::Rc;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct TocPanelProps {
    pub entries: Rc<Vec<TocEntry>>,
    pub state: PanelState,
    pub on_toggle: Callback<()>,
    /// Fired when a link is followed; the browser handles the jump itself.
    pub on_navigate: Callback<()>,
}

#[function_component(TocPanel)]
pub fn toc_panel(props: &TocPanelProps) -> Html {
    let onclick = {
        let on_navigate = props.on_navigate.clone();
        Callback::from(move |_: MouseEvent| on_navigate.emit(()))
    };

    html! {
        <PanelToggle panel_id="toc-panel" state={props.state.clone()} on_toggle={props.on_toggle.clone()}>
            <nav class="toc" aria-label="Inhaltsverzeichnis">
                <ol id="toc-list" class="toc-list">
                    { for props.entries.iter().map(|entry| html! {
                        <li key={entry.anchor_id.clone()} class={classes!("toc-entry", entry.depth.class())}>
                            <a href={entry.href()} onclick={onclick.clone()}>{ entry.label.clone() }</a>
                        </li>
                    }) }
                </ol>
            </nav>
        </PanelToggle>
    }
}
