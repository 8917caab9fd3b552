use serde_json::Value;
use std::cell::RefCell;
use std::collections::BTreeMap;

pub const DEFAULT_LANG: &str = "de";
const STORAGE_KEY: &str = "kiezquest.locale";

#[derive(Clone, Copy, PartialEq, Eq)]
pub struct LocaleMeta {
    pub code: &'static str,
    pub name: &'static str,
}

const LOCALE_META: &[LocaleMeta] = &[
    LocaleMeta {
        code: "de",
        name: "Deutsch",
    },
    LocaleMeta {
        code: "en",
        name: "English",
    },
];

const LOCALE_TABLE: &[(&str, &str)] = &[
    ("de", include_str!("../i18n/de.json")),
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
        .find_map(|(code, data)| (*code == lang).then_some(*data))
        .unwrap_or(LOCALE_TABLE[0].1);

    serde_json::from_str(bundle).ok()
}

fn build_bundle(lang: &str) -> Option<I18nBundle> {
    let fallback = load_translations(DEFAULT_LANG)?;
    let translations = load_translations(lang)?;

    Some(I18nBundle {
        lang: lang.to_string(),
        translations,
        fallback,
    })
}

/// Supported locales with their native names.
#[must_use]
pub const fn locales() -> &'static [LocaleMeta] {
    LOCALE_META
}

fn fallback_bundle() -> I18nBundle {
    let fallback =
        load_translations(DEFAULT_LANG).unwrap_or(Value::Object(serde_json::Map::new()));

    I18nBundle {
        lang: DEFAULT_LANG.to_string(),
        translations: fallback.clone(),
        fallback,
    }
}

fn saved_lang() -> String {
    #[cfg(all(target_arch = "wasm32", not(test)))]
    {
        crate::dom::local_storage()
            .ok()
            .and_then(|storage| storage.get_item(STORAGE_KEY).ok().flatten())
            .unwrap_or_else(|| DEFAULT_LANG.to_string())
    }
    #[cfg(not(all(target_arch = "wasm32", not(test))))]
    {
        DEFAULT_LANG.to_string()
    }
}

thread_local! {
    static CURRENT: RefCell<I18nBundle> = RefCell::new({
        let initial = saved_lang();
        build_bundle(&initial).unwrap_or_else(fallback_bundle)
    });
}

/// Set the current language.
///
/// Changes the active bundle, updates the `<html lang>` attribute and
/// persists the choice to `localStorage` for future sessions.
pub fn set_lang(lang: &str) {
    if let Some(bundle) = build_bundle(lang) {
        CURRENT.with(|cell| cell.replace(bundle));
        #[cfg(target_arch = "wasm32")]
        {
            if let Some(el) = web_sys::window()
                .and_then(|win| win.document())
                .and_then(|doc| doc.document_element())
            {
                let _ = el.set_attribute("lang", lang);
            }
            if let Ok(storage) = crate::dom::local_storage() {
                let _ = storage.set_item(STORAGE_KEY, lang);
            }
        }
    }
}

/// Get the current active language code.
#[must_use]
pub fn current_lang() -> String {
    CURRENT.with(|c| c.borrow().lang.clone())
}

fn get_nested_value<'a>(obj: &'a Value, key: &str) -> Option<&'a Value> {
    let mut current = obj;
    for k in key.split('.') {
        current = current.get(k)?;
    }
    Some(current)
}

fn render_value(value: &Value, args: Option<&BTreeMap<&str, &str>>) -> Option<String> {
    let Value::String(s) = value else {
        return None;
    };
    let mut text = s.clone();
    if let Some(args_map) = args {
        for (k, v) in args_map {
            let placeholder = format!("{{{k}}}");
            text = text.replace(&placeholder, v);
        }
    }
    Some(text)
}

fn resolve(key: &str, args: Option<&BTreeMap<&str, &str>>) -> Option<String> {
    CURRENT.with(|cell| {
        let bundle = cell.borrow();
        get_nested_value(&bundle.translations, key)
            .and_then(|v| render_value(v, args))
            .or_else(|| get_nested_value(&bundle.fallback, key).and_then(|v| render_value(v, args)))
    })
}

/// Translate a key to the current language.
///
/// Falls back to German if the key is missing in the current language;
/// a key missing everywhere renders as itself so the defect is visible.
#[must_use]
pub fn t(key: &str) -> String {
    tr(key, None)
}

/// Translate a key with `{var}` substitution.
#[must_use]
pub fn tr(key: &str, args: Option<&BTreeMap<&str, &str>>) -> String {
    resolve(key, args).unwrap_or_else(|| key.to_string())
}
