#![cfg(target_arch = "wasm32")]

use econquest_web::app::App;
use econquest_web::i18n;
use wasm_bindgen_test::*;
use yew::Renderer;

wasm_bindgen_test_configure!(run_in_browser);

fn document() -> web_sys::Document {
    web_sys::window()
        .and_then(|w| w.document())
        .expect("document")
}

fn mount_root() -> web_sys::Element {
    let doc = document();
    if let Some(root) = doc.get_element_by_id("app") {
        root.set_inner_html("");
        return root;
    }
    let root = doc.create_element("div").expect("create app root");
    root.set_id("app");
    doc.body()
        .expect("document body")
        .append_child(&root)
        .expect("append app root");
    root
}

#[wasm_bindgen_test]
fn set_lang_persists_locale_and_html_lang() {
    i18n::set_lang("en");
    let html = document().document_element().expect("html element");
    assert_eq!(html.get_attribute("lang"), Some("en".into()));
    let stored = web_sys::window()
        .and_then(|w| w.local_storage().ok().flatten())
        .and_then(|s| s.get_item("econquest.locale").ok().flatten());
    assert_eq!(stored.as_deref(), Some("en"));
    i18n::set_lang("ru");
    assert_eq!(html.get_attribute("lang"), Some("ru".into()));
}

#[wasm_bindgen_test]
fn app_mounts_player_cards_and_language_select() {
    i18n::set_lang("ru");
    Renderer::<App>::with_root(mount_root()).render();
    let doc = document();
    assert!(doc.get_element_by_id("lang-select").is_some());
    let cards = doc
        .query_selector_all(".player-card")
        .expect("query player cards");
    assert_eq!(cards.length(), 28);
    let active = doc
        .query_selector(".tab-active")
        .expect("query active tab")
        .expect("one tab is active");
    assert!(active.class_name().contains("tab-players"));
}
