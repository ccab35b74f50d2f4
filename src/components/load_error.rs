// src/components/load_error.rs
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct LoadErrorProps {
    pub message: AttrValue,
}

/// Replaces the whole content area when the document could not be loaded.
#[function_component(LoadError)]
pub fn load_error(props: &LoadErrorProps) -> Html {
    html! {
        <div id="content" class="content">
            <p class="load-error">{ props.message.clone() }</p>
        </div>
    }
}
