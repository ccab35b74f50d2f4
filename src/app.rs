// src/app.rs
use crate::components::document_view::DocumentView;
use crate::components::footnote_list::FootnoteList;
use crate::components::glossary_panel::GlossaryPanel;
use crate::components::language_controls::LanguageControls;
use crate::components::load_error::LoadError;
use crate::components::toc_panel::TocPanel;
use crate::config::{ViewerConfig, CONFIG_PATH};
use crate::display_mode::Language;
use crate::document::TranslationDocument;
use crate::error::{Result, ViewerError};
use crate::utils::{resource_url, sync_header_height};
use crate::view_state::{PanelId, ViewState};
use gloo::events::EventListener;
use gloo_net::http::Request;
use std::rc::Rc;
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlElement;
use yew::prelude::*;

/// Commands the page can dispatch. Everything below `DocumentLoaded` is a
/// direct user action.
pub enum AppMsg {
    ConfigLoaded(ViewerConfig),
    DocumentLoaded(Result<TranslationDocument>),
    LanguageClicked(Language),
    TogglePanel(PanelId),
    TocNavigated,
    HeaderResized,
}

enum LoadState {
    Loading,
    Ready(ViewState),
    Failed,
}

pub struct App {
    config: Rc<ViewerConfig>,
    load: LoadState,
    header_ref: NodeRef,
    _resize_listener: Option<EventListener>,
}

impl Component for App {
    type Message = AppMsg;
    type Properties = ();

    fn create(ctx: &Context<Self>) -> Self {
        ctx.link()
            .send_future(async { AppMsg::ConfigLoaded(load_config().await) });

        Self {
            config: Rc::new(ViewerConfig::default()),
            load: LoadState::Loading,
            header_ref: NodeRef::default(),
            _resize_listener: None,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            AppMsg::ConfigLoaded(config) => {
                let url = resource_url(&config.data_url);
                self.config = Rc::new(config);
                let link = ctx.link().clone();
                spawn_local(async move {
                    let result = load_document(&url).await;
                    link.send_message(AppMsg::DocumentLoaded(result));
                });
                false
            }
            AppMsg::DocumentLoaded(Ok(doc)) => {
                for warning in doc.validate() {
                    log::warn!("{}", warning);
                }
                log::info!(
                    "Loaded {} entries ({} headings) and {} footnotes",
                    doc.entries.len(),
                    doc.heading_count(),
                    doc.footnotes.len()
                );
                self.load = LoadState::Ready(ViewState::from_document(&doc, &self.config));
                true
            }
            AppMsg::DocumentLoaded(Err(e)) => {
                log::error!("Failed to load document: {}", e);
                self.load = LoadState::Failed;
                true
            }
            AppMsg::LanguageClicked(lang) => match &mut self.load {
                LoadState::Ready(state) => {
                    state.click_language(lang);
                    true
                }
                _ => false,
            },
            AppMsg::TogglePanel(id) => match &mut self.load {
                LoadState::Ready(state) => {
                    state.toggle_panel(id);
                    true
                }
                _ => false,
            },
            AppMsg::TocNavigated => match &mut self.load {
                LoadState::Ready(state) => state.navigate_toc(),
                _ => false,
            },
            AppMsg::HeaderResized => {
                self.sync_header();
                false
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        html! {
            <div class="app-container">
                <header class="app-header" ref={self.header_ref.clone()}>
                    { self.render_controls(ctx) }
                </header>
                <main class="app-main">
                    { self.render_main() }
                </main>
            </div>
        }
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if first_render {
            let link = ctx.link().clone();
            self._resize_listener = Some(EventListener::new(
                &gloo::utils::window(),
                "resize",
                move |_| link.send_message(AppMsg::HeaderResized),
            ));
        }
        // the header grows once the controls appear
        self.sync_header();
    }
}

impl App {
    fn sync_header(&self) {
        if let Some(header) = self.header_ref.cast::<HtmlElement>() {
            sync_header_height(&header);
        }
    }

    fn render_controls(&self, ctx: &Context<Self>) -> Html {
        let LoadState::Ready(state) = &self.load else {
            return html! {};
        };

        let on_language = ctx.link().callback(AppMsg::LanguageClicked);
        let on_toggle_toc = ctx.link().callback(|_| AppMsg::TogglePanel(PanelId::Toc));
        let on_toggle_glossary = ctx
            .link()
            .callback(|_| AppMsg::TogglePanel(PanelId::Glossary));
        let on_navigate = ctx.link().callback(|_| AppMsg::TocNavigated);

        html! {
            <div class="controls-panel">
                <LanguageControls
                    mode={state.mode()}
                    names={self.config.language_names.clone()}
                    on_click={on_language}
                />
                <TocPanel
                    entries={state.toc().clone()}
                    state={state.panel(PanelId::Toc).clone()}
                    on_toggle={on_toggle_toc}
                    {on_navigate}
                />
                <GlossaryPanel
                    markup={state.glossary().clone()}
                    state={state.panel(PanelId::Glossary).clone()}
                    on_toggle={on_toggle_glossary}
                />
            </div>
        }
    }

    fn render_main(&self) -> Html {
        match &self.load {
            LoadState::Loading => html! {
                <div class="loading"><p>{"Inhalte werden geladen …"}</p></div>
            },
            LoadState::Failed => html! {
                <LoadError message={self.config.load_error_message.clone()} />
            },
            LoadState::Ready(state) => html! {
                <>
                    <DocumentView
                        blocks={state.blocks().clone()}
                        mode={state.mode()}
                        footnotes={state.footnotes().clone()}
                        language_names={self.config.language_names.clone()}
                    />
                    <FootnoteList footnotes={state.footnotes().clone()} />
                </>
            },
        }
    }
}

/// Anything outside 2xx fails the load, whatever the body says.
pub fn check_status(status: u16) -> Result<()> {
    if (200..300).contains(&status) {
        Ok(())
    } else {
        Err(ViewerError::Status(status))
    }
}

async fn fetch_text(url: &str) -> Result<String> {
    let resp = Request::get(url)
        .send()
        .await
        .map_err(|e| ViewerError::Network(e.to_string()))?;
    check_status(resp.status())?;
    resp.text()
        .await
        .map_err(|e| ViewerError::Network(e.to_string()))
}

/// Fetch and parse the translation document.
pub async fn load_document(url: &str) -> Result<TranslationDocument> {
    let body = fetch_text(url).await?;
    TranslationDocument::from_json(&body)
}

/// Fetch the optional configuration file, falling back to the defaults.
pub async fn load_config() -> ViewerConfig {
    let url = resource_url(CONFIG_PATH);
    match fetch_text(&url)
        .await
        .and_then(|body| ViewerConfig::from_json(&body))
    {
        Ok(config) => {
            log::info!("Loaded viewer configuration from {}", url);
            config
        }
        Err(e) => {
            log::warn!("Using default configuration ({}): {}", url, e);
            ViewerConfig::default()
        }
    }
}
