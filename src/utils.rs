// src/utils.rs
use gloo_utils::{document, document_element, window};
use wasm_bindgen::JsCast;
use web_sys::HtmlElement;

/// Directory part of a page path: `/a/b/index.html` -> `/a/b`, `/a/b/` -> `/a/b`.
pub fn base_path(pathname: &str) -> &str {
    match pathname.rfind('/') {
        Some(idx) => &pathname[..idx],
        None => "",
    }
}

/// Join a resource path onto a base directory.
pub fn join_url(base: &str, path: &str) -> String {
    if path.starts_with("http://") || path.starts_with("https://") || path.starts_with('/') {
        return path.to_string();
    }
    format!("{}/{}", base.trim_end_matches('/'), path.trim_start_matches("./"))
}

/// Build a resource URL relative to the page the viewer is served from,
/// so the same build works at the domain root and under a sub-path.
pub fn resource_url(path: &str) -> String {
    let pathname = window().location().pathname().unwrap_or_default();
    join_url(base_path(&pathname), path)
}

/// Measure the header and expose its height as `--header-height`.
pub fn sync_header_height(header: &HtmlElement) {
    let height = header.offset_height();
    let root = match document_element().dyn_into::<HtmlElement>() {
        Ok(root) => root,
        Err(_) => return,
    };
    if let Err(e) = root
        .style()
        .set_property("--header-height", &format!("{}px", height))
    {
        log::debug!("could not set --header-height: {:?}", e);
    }
}

/// Scroll the element with the given id into view, smoothly.
/// Returns false when no such element exists.
pub fn scroll_to_id(id: &str) -> bool {
    let Some(target) = document().get_element_by_id(id) else {
        return false;
    };
    let options = web_sys::ScrollIntoViewOptions::new();
    options.set_behavior(web_sys::ScrollBehavior::Smooth);
    options.set_block(web_sys::ScrollLogicalPosition::Start);
    target.scroll_into_view_with_scroll_into_view_options(&options);
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_path() {
        assert_eq!(base_path("/"), "");
        assert_eq!(base_path("/index.html"), "");
        assert_eq!(base_path("/kierkegaard/index.html"), "/kierkegaard");
        assert_eq!(base_path("/kierkegaard/"), "/kierkegaard");
    }

    #[test]
    fn test_join_url() {
        assert_eq!(join_url("", "translation-data.json"), "/translation-data.json");
        assert_eq!(
            join_url("/kierkegaard", "./translation-data.json"),
            "/kierkegaard/translation-data.json"
        );
        assert_eq!(join_url("/kierkegaard", "/data.json"), "/data.json");
        assert_eq!(
            join_url("/x", "https://example.org/data.json"),
            "https://example.org/data.json"
        );
    }
}
