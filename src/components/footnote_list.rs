// src/components/footnote_list.rs
use crate::footnotes::{target_id, FootnoteIndex};
use std::rc::Rc;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct FootnoteListProps {
    pub footnotes: Rc<FootnoteIndex>,
}

/// Footnote definitions in source order, each addressable as `footnote-<id>`.
#[function_component(FootnoteList)]
pub fn footnote_list(props: &FootnoteListProps) -> Html {
    if props.footnotes.is_empty() {
        return html! {};
    }

    html! {
        <section id="footnotes" class="footnotes-section">
            <hr class="footnotes-divider" />
            <ol class="footnotes-list">
                { for props.footnotes.iter().map(|note| html! {
                    <li key={note.id.clone()} id={target_id(&note.id)} class="footnote-item">
                        <span class="footnote-number">{ note.id.clone() }</span>
                        <div class="footnote-text lang-da" lang="da">
                            { Html::from_html_unchecked(AttrValue::from(note.danish.clone())) }
                        </div>
                        <div class="footnote-text lang-de" lang="de">
                            { Html::from_html_unchecked(AttrValue::from(note.german.clone())) }
                        </div>
                    </li>
                }) }
            </ol>
        </section>
    }
}
