use crate::i18n::{self, locales, t};
use wasm_bindgen::JsCast;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub current_lang: String,
    #[prop_or_default]
    pub on_lang_change: Callback<String>,
}

#[function_component(Header)]
pub fn header(p: &Props) -> Html {
    let on_change = {
        let cb = p.on_lang_change.clone();
        Callback::from(move |e: web_sys::Event| {
            if let Some(sel) = e
                .target()
                .and_then(|t| t.dyn_into::<web_sys::HtmlSelectElement>().ok())
            {
                i18n::set_lang(&sel.value());
                cb.emit(sel.value());
            }
        })
    };
    html! {
        <header class="text-center space-y-4 py-8" role="banner">
            <h1 class="text-5xl md:text-6xl font-bold text-primary">{ t("app.title") }</h1>
            <p class="text-xl text-muted-foreground">{ t("app.subtitle") }</p>
            <label for="lang-select" class="sr-only">{ t("nav.language") }</label>
            <select id="lang-select" class="lang-select" onchange={on_change} aria-label={t("nav.language")}>
                { for locales().iter().map(|meta| html! {
                    <option value={meta.code} selected={meta.code == p.current_lang}>{ meta.name }</option>
                }) }
            </select>
        </header>
    }
}
