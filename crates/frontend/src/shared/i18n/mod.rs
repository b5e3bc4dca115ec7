//! Переводы интерфейса
//!
//! Каталоги `locales/{en,vi}.json` встраиваются в бандл. Ключ ищется в
//! выбранной локали, затем в локали по умолчанию; если его нет нигде,
//! возвращается `namespace.key`.

use leptos::prelude::*;
use once_cell::sync::Lazy;
use std::collections::HashMap;

type Catalog = HashMap<String, HashMap<String, String>>;

const EN_CATALOG: &str = include_str!("../../../locales/en.json");
const VI_CATALOG: &str = include_str!("../../../locales/vi.json");

fn parse_catalog(name: &str, raw: &str) -> Catalog {
    serde_json::from_str(raw).unwrap_or_else(|e| {
        log::error!("translation catalog `{}` is invalid: {}", name, e);
        Catalog::new()
    })
}

static EN: Lazy<Catalog> = Lazy::new(|| parse_catalog("en", EN_CATALOG));
static VI: Lazy<Catalog> = Lazy::new(|| parse_catalog("vi", VI_CATALOG));

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Locale {
    #[default]
    En,
    Vi,
}

impl Locale {
    pub const ALL: [Locale; 2] = [Locale::En, Locale::Vi];

    pub fn as_str(&self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Vi => "vi",
        }
    }

    pub fn parse(code: &str) -> Option<Self> {
        match code.trim().to_ascii_lowercase().as_str() {
            "en" => Some(Locale::En),
            "vi" => Some(Locale::Vi),
            _ => None,
        }
    }

    fn catalog(&self) -> &'static Catalog {
        match self {
            Locale::En => &EN,
            Locale::Vi => &VI,
        }
    }
}

fn lookup(locale: Locale, namespace: &str, key: &str) -> Option<&'static str> {
    locale
        .catalog()
        .get(namespace)
        .and_then(|ns| ns.get(key))
        .map(String::as_str)
}

/// Translate without any reactive context
pub fn translate(locale: Locale, namespace: &str, key: &str) -> String {
    lookup(locale, namespace, key)
        .or_else(|| lookup(Locale::default(), namespace, key))
        .map(str::to_string)
        .unwrap_or_else(|| format!("{}.{}", namespace, key))
}

/// Substitute `{name}` placeholders
pub fn interpolate(template: &str, args: &[(&str, &str)]) -> String {
    args.iter().fold(template.to_string(), |acc, (name, value)| {
        acc.replace(&format!("{{{}}}", name), value)
    })
}

/// Текущая локаль интерфейса (контекст приложения)
#[derive(Clone, Copy)]
pub struct I18n {
    pub locale: RwSignal<Locale>,
}

impl I18n {
    pub fn new(locale: Locale) -> Self {
        Self {
            locale: RwSignal::new(locale),
        }
    }

    /// Reactive: re-runs when the locale changes
    pub fn t(&self, namespace: &str, key: &str) -> String {
        translate(self.locale.get(), namespace, key)
    }

    pub fn t_with(&self, namespace: &str, key: &str, args: &[(&str, &str)]) -> String {
        interpolate(&self.t(namespace, key), args)
    }

    pub fn t_untracked(&self, namespace: &str, key: &str) -> String {
        translate(self.locale.get_untracked(), namespace, key)
    }

    pub fn t_with_untracked(&self, namespace: &str, key: &str, args: &[(&str, &str)]) -> String {
        interpolate(&self.t_untracked(namespace, key), args)
    }

    pub fn set_locale(&self, locale: Locale) {
        self.locale.set(locale);
    }
}

pub fn use_i18n() -> I18n {
    use_context::<I18n>().expect("I18n context not found")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalogs_parse() {
        assert!(!EN.is_empty());
        assert!(!VI.is_empty());
    }

    #[test]
    fn test_translate_and_fallback() {
        assert_eq!(translate(Locale::Vi, "port", "new_port"), "Thêm cảng mới");
        assert_eq!(translate(Locale::En, "port", "code_required"), "Please input Port Code");
        assert_eq!(translate(Locale::Vi, "port", "missing_key"), "port.missing_key");
        assert_eq!(translate(Locale::En, "nowhere", "x"), "nowhere.x");
    }

    #[test]
    fn test_catalogs_share_keys() {
        for (ns, keys) in EN.iter() {
            for key in keys.keys() {
                assert!(
                    lookup(Locale::Vi, ns, key).is_some(),
                    "vi catalog misses {}.{}",
                    ns,
                    key
                );
            }
        }
    }

    #[test]
    fn test_interpolate() {
        assert_eq!(
            interpolate("Delete {count} selected records?", &[("count", "3")]),
            "Delete 3 selected records?"
        );
        assert_eq!(Locale::parse("VI"), Some(Locale::Vi));
        assert_eq!(Locale::parse("fr"), None);
    }
}
