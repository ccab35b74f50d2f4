// src/components/panel_toggle.rs
use crate::panel::PanelState;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct PanelToggleProps {
    /// Element id of the collapsible body, referenced by `aria-controls`.
    pub panel_id: AttrValue,
    pub state: PanelState,
    pub on_toggle: Callback<()>,
    #[prop_or_default]
    pub children: Html,
}

/// A toggle button and the panel it opens. Only touches its own pair.
#[function_component(PanelToggle)]
pub fn panel_toggle(props: &PanelToggleProps) -> Html {
    let onclick = {
        let on_toggle = props.on_toggle.clone();
        Callback::from(move |_: MouseEvent| on_toggle.emit(()))
    };
    let open = props.state.is_open();

    html! {
        <div class={classes!("panel", open.then_some("is-open"))}>
            <button
                type="button"
                class="panel-toggle"
                aria-controls={props.panel_id.clone()}
                aria-expanded={props.state.aria_expanded()}
                {onclick}
            >
                { props.state.label().to_string() }
            </button>
            <div id={props.panel_id.clone()} class="panel-body" hidden={!open}>
                { props.children.clone() }
            </div>
        </div>
    }
}
