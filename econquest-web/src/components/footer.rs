use crate::i18n::{self, t};
use econquest_core::{canonical_seed, encode_roster_code};
use std::collections::BTreeMap;
use yew::prelude::*;

#[derive(Properties, PartialEq, Eq, Clone)]
pub struct Props {
    pub seed: u64,
}

/// Seed link plus roster code.
///
/// The `?seed=` link always reopens this roster. The code only links when the
/// seed is its slot's canonical seed; otherwise it names a different roster.
#[function_component(Footer)]
pub fn footer(p: &Props) -> Html {
    let code = encode_roster_code(p.seed);
    let seed_text = {
        let seed = p.seed.to_string();
        let mut m = BTreeMap::new();
        m.insert("seed", seed.as_str());
        i18n::tr("footer.seed", Some(&m))
    };
    let code_html = if canonical_seed(p.seed) == p.seed {
        html! {
            <a class="seed-code" href={format!("?code={code}")} aria-label={t("footer.code")}>{ code }</a>
        }
    } else {
        html! {
            <span class="seed-code" aria-label={t("footer.code")}>{ code }</span>
        }
    };
    html! {
        <footer class="seed-footer text-sm text-muted-foreground" role="contentinfo">
            <a class="seed-link" href={format!("?seed={}", p.seed)}>{ seed_text }</a>
            { code_html }
        </footer>
    }
}
