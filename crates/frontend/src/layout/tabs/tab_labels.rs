//! Tab labels - единственный источник правды для заголовков табов.
//!
//! Заголовок берётся из пространства `menu` каталога переводов;
//! для неизвестного ключа показывается сам ключ.

use crate::routes::AppRoute;
use crate::shared::i18n::I18n;

/// Возвращает читаемый заголовок таба для данного ключа (реактивно по локали).
pub fn tab_label_for_key(i18n: I18n, key: &str) -> String {
    match AppRoute::parse(key) {
        Some(route) => match route.label_key() {
            (label_key, Some(id)) => i18n.t_with("menu", label_key, &[("id", id)]),
            (label_key, None) => i18n.t("menu", label_key),
        },
        None => key.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use crate::routes::AppRoute;

    #[test]
    fn test_every_route_has_menu_label() {
        use crate::shared::i18n::{translate, Locale};
        let routes = [
            AppRoute::PartnerList,
            AppRoute::PartnerCreate,
            AppRoute::PartnerEdit("1".into()),
            AppRoute::PortList,
            AppRoute::PortCreate,
            AppRoute::PortEdit("p".into()),
            AppRoute::Users,
        ];
        for locale in Locale::ALL {
            for route in &routes {
                let (key, _) = route.label_key();
                assert_ne!(translate(locale, "menu", key), format!("menu.{}", key));
            }
        }
    }
}
