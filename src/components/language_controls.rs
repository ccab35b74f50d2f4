// src/components/language_controls.rs
use crate::config::LanguageNames;
use crate::display_mode::{DisplayMode, Language};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct LanguageControlsProps {
    pub mode: DisplayMode,
    pub names: LanguageNames,
    pub on_click: Callback<Language>,
}

#[function_component(LanguageControls)]
pub fn language_controls(props: &LanguageControlsProps) -> Html {
    html! {
        <div class="language-toggles" role="group">
            { for Language::ALL.iter().map(|lang| {
                let lang = *lang;
                let state = props.mode.button_state(lang);
                let onclick = {
                    let on_click = props.on_click.clone();
                    Callback::from(move |_: MouseEvent| on_click.emit(lang))
                };
                html! {
                    <button
                        type="button"
                        class={classes!("language-button", state.muted.then_some("is-muted"))}
                        data-lang={lang.code()}
                        aria-pressed={state.aria_pressed()}
                        {onclick}
                    >
                        { props.names.name(lang).to_string() }
                    </button>
                }
            }) }
        </div>
    }
}
