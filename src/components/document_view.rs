// src/components/document_view.rs
use crate::config::LanguageNames;
use crate::display_mode::{DisplayMode, Language};
use crate::footnotes::FootnoteIndex;
use crate::linker::link_footnote_references;
use crate::render::{Column, ColumnNode, RenderedBlock};
use gloo::events::EventListener;
use std::rc::Rc;
use web_sys::Element;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct DocumentViewProps {
    pub blocks: Rc<Vec<RenderedBlock>>,
    pub mode: DisplayMode,
    pub footnotes: Rc<FootnoteIndex>,
    pub language_names: LanguageNames,
}

/// The content container: column headers plus one paired block per entry.
pub struct DocumentView {
    content_ref: NodeRef,
    // dropped (and unregistered) whenever the content is linked again
    footnote_listeners: Vec<EventListener>,
}

impl Component for DocumentView {
    type Message = ();
    type Properties = DocumentViewProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            content_ref: NodeRef::default(),
            footnote_listeners: Vec::new(),
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();
        html! {
            <>
                { self.render_column_headers(ctx) }
                <div
                    id="content"
                    class="content"
                    data-mode={props.mode.as_attr()}
                    ref={self.content_ref.clone()}
                >
                    { for props.blocks.iter().enumerate().map(|(idx, block)| render_block(block, idx)) }
                </div>
            </>
        }
    }

    fn rendered(&mut self, ctx: &Context<Self>, _first_render: bool) {
        if let Some(container) = self.content_ref.cast::<Element>() {
            self.footnote_listeners.clear();
            self.footnote_listeners = link_footnote_references(&container, &ctx.props().footnotes);
        }
    }
}

impl DocumentView {
    fn render_column_headers(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();
        match props.mode.single() {
            None => html! {
                <div id="dual-header" class="column-headers dual-header">
                    { for Language::ALL.iter().map(|lang| html! {
                        <span class={classes!("column-header", format!("lang-{}", lang.code()))}>
                            { props.language_names.name(*lang) }
                        </span>
                    }) }
                </div>
            },
            Some(lang) => html! {
                <div id="single-header" class="column-headers single-header">
                    <span class={classes!("column-header", format!("lang-{}", lang.code()))}>
                        { props.language_names.name(lang) }
                    </span>
                </div>
            },
        }
    }
}

fn render_block(block: &RenderedBlock, idx: usize) -> Html {
    html! {
        <article
            key={idx}
            class="paragraph-pair"
            data-type={block.kind.as_str()}
            id={block.anchor_id.clone()}
        >
            { render_column(&block.danish) }
            { render_column(&block.german) }
        </article>
    }
}

fn render_column(column: &Column) -> Html {
    html! {
        <div class={classes!("language-text", format!("lang-{}", column.language.code()))} lang={column.language.code()}>
            { for column.nodes.iter().map(render_node) }
        </div>
    }
}

fn render_node(node: &ColumnNode) -> Html {
    // markup is pre-sanitized upstream
    let inner = Html::from_html_unchecked(AttrValue::from(node.markup().to_string()));
    match node {
        ColumnNode::Heading { level: 2, .. } => html! { <h2>{ inner }</h2> },
        ColumnNode::Heading { .. } => html! { <h3>{ inner }</h3> },
        ColumnNode::Paragraph { .. } => html! { <p>{ inner }</p> },
    }
}
