#[cfg(target_arch = "wasm32")]
use js_sys::{Array, Function, Intl, Object};
use serde_json::Value;
use std::cell::RefCell;
use std::collections::BTreeMap;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::JsValue;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct LocaleMeta {
    pub code: &'static str,
    pub name: &'static str,
}

const LOCALE_META: &[LocaleMeta] = &[
    LocaleMeta {
        code: "ru",
        name: "Русский",
    },
    LocaleMeta {
        code: "en",
        name: "English",
    },
];

const DEFAULT_LANG: &str = "ru";
#[cfg(target_arch = "wasm32")]
const STORAGE_KEY: &str = "econquest.locale";

const LOCALE_TABLE: &[(&str, &str)] = &[
    ("ru", include_str!("../i18n/ru.json")),
    ("en", include_str!("../i18n/en.json")),
];

pub struct I18nBundle {
    pub lang: String,
    translations: Value,
    fallback: Value,
}

fn load_translations(lang: &str) -> Option<Value> {
    let bundle = LOCALE_TABLE
        .iter()
        .find_map(|(code, data)| (*code == lang).then_some(*data))?;
    serde_json::from_str(bundle).ok()
}

fn build_bundle(lang: &str) -> Option<I18nBundle> {
    let translations = load_translations(lang)?;
    let fallback = load_translations(DEFAULT_LANG)?;
    Some(I18nBundle {
        lang: lang.to_string(),
        translations,
        fallback,
    })
}

fn empty_bundle() -> I18nBundle {
    I18nBundle {
        lang: DEFAULT_LANG.to_string(),
        translations: Value::Object(serde_json::Map::new()),
        fallback: Value::Object(serde_json::Map::new()),
    }
}

/// Supported locales with their native names.
#[must_use]
pub const fn locales() -> &'static [LocaleMeta] {
    LOCALE_META
}

fn saved_lang() -> String {
    #[cfg(target_arch = "wasm32")]
    {
        web_sys::window()
            .and_then(|win| win.local_storage().ok().flatten())
            .and_then(|storage| storage.get_item(STORAGE_KEY).ok().flatten())
            .unwrap_or_else(|| DEFAULT_LANG.to_string())
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        DEFAULT_LANG.to_string()
    }
}

thread_local! {
    static CURRENT: RefCell<I18nBundle> = RefCell::new({
        let initial = saved_lang();
        build_bundle(&initial)
            .or_else(|| build_bundle(DEFAULT_LANG))
            .unwrap_or_else(empty_bundle)
    });
}

/// Switch the active locale. Unknown codes are ignored.
///
/// On the web this also updates `<html lang>` and remembers the choice in
/// `localStorage`.
pub fn set_lang(lang: &str) {
    let Some(bundle) = build_bundle(lang) else {
        log::warn!("ignoring unsupported locale '{lang}'");
        return;
    };
    CURRENT.with(|cell| cell.replace(bundle));
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(el) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|doc| doc.document_element())
        {
            let _ = el.set_attribute("lang", lang);
        }
        if let Some(storage) = web_sys::window().and_then(|win| win.local_storage().ok().flatten())
        {
            let _ = storage.set_item(STORAGE_KEY, lang);
        }
    }
}

#[must_use]
pub fn current_lang() -> String {
    CURRENT.with(|c| c.borrow().lang.clone())
}

fn get_nested_value<'a>(obj: &'a Value, key: &str) -> Option<&'a Value> {
    key.split('.').try_fold(obj, |current, k| current.get(k))
}

fn native_plural_category(lang: &str, count: u64) -> &'static str {
    match lang {
        "ru" => {
            let (mod10, mod100) = (count % 10, count % 100);
            if mod10 == 1 && mod100 != 11 {
                "one"
            } else if (2..=4).contains(&mod10) && !(12..=14).contains(&mod100) {
                "few"
            } else {
                "many"
            }
        }
        _ => {
            if count == 1 {
                "one"
            } else {
                "other"
            }
        }
    }
}

fn plural_category(lang: &str, count: u64) -> String {
    #[cfg(target_arch = "wasm32")]
    {
        let locales = Array::new();
        locales.push(&JsValue::from_str(lang));
        let rules = Intl::PluralRules::new(&locales, &Object::new());
        #[allow(clippy::cast_precision_loss)]
        let selected = rules.select(count as f64).as_string();
        selected.unwrap_or_else(|| native_plural_category(lang, count).to_string())
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        native_plural_category(lang, count).to_string()
    }
}

fn render_value(value: &Value, lang: &str, args: Option<&BTreeMap<&str, &str>>) -> Option<String> {
    let mut text = match value {
        Value::String(s) => s.clone(),
        Value::Object(map) => {
            let category = args
                .and_then(|m| m.get("count"))
                .and_then(|count| count.parse::<u64>().ok())
                .map(|count| plural_category(lang, count));
            category
                .and_then(|c| map.get(&c))
                .or_else(|| map.get("_"))
                .and_then(Value::as_str)?
                .to_string()
        }
        _ => return None,
    };

    if let Some(args_map) = args {
        for (k, v) in args_map {
            text = text.replace(&format!("{{{k}}}"), v);
        }
    }
    Some(text)
}

fn resolve(key: &str, args: Option<&BTreeMap<&str, &str>>) -> Option<String> {
    CURRENT.with(|cell| {
        let bundle = cell.borrow();
        get_nested_value(&bundle.translations, key)
            .and_then(|v| render_value(v, &bundle.lang, args))
            .or_else(|| {
                get_nested_value(&bundle.fallback, key)
                    .and_then(|v| render_value(v, &bundle.lang, args))
            })
    })
}

/// Translate a key; missing keys render as the key itself.
#[must_use]
pub fn t(key: &str) -> String {
    tr(key, None)
}

/// Translate a key, replacing `{name}` placeholders from `args`.
///
/// A `count` argument selects the plural form when the entry is an object.
#[must_use]
pub fn tr(key: &str, args: Option<&BTreeMap<&str, &str>>) -> String {
    resolve(key, args).unwrap_or_else(|| key.to_string())
}

fn group_digits(num: u64, separator: char, min_digits: usize) -> String {
    let digits = num.to_string();
    if digits.len() < min_digits {
        return digits;
    }
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(separator);
        }
        out.push(ch);
    }
    out
}

/// Format an integer with the current locale's digit grouping.
#[must_use]
pub fn fmt_number(num: u64) -> String {
    #[cfg(target_arch = "wasm32")]
    {
        CURRENT.with(|c| {
            let lang = c.borrow().lang.clone();
            let locales = Array::new();
            locales.push(&JsValue::from_str(&lang));
            let nf = Intl::NumberFormat::new(&locales, &Object::new());
            let format_fn: Function = nf.format();
            #[allow(clippy::cast_precision_loss)]
            let value = JsValue::from_f64(num as f64);
            format_fn
                .call1(&nf, &value)
                .ok()
                .and_then(|v| v.as_string())
                .unwrap_or_else(|| fallback_number(&lang, num))
        })
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        fallback_number(&current_lang(), num)
    }
}

fn fallback_number(lang: &str, num: u64) -> String {
    match lang {
        // ru groups with a no-break space and leaves four-digit values alone
        "ru" => group_digits(num, '\u{a0}', 5),
        _ => group_digits(num, ',', 4),
    }
}

/// Budget in thousands of rubles, e.g. `₽1500k`.
#[must_use]
pub fn fmt_budget_thousands(budget: u64) -> String {
    let thousands = budget / 1000 + u64::from(budget % 1000 >= 500);
    format!("₽{thousands}k")
}

/// Podium medal for a zero-based leaderboard index.
#[must_use]
pub const fn medal(index: usize) -> Option<&'static str> {
    match index {
        0 => Some("🥇"),
        1 => Some("🥈"),
        2 => Some("🥉"),
        _ => None,
    }
}
