use crate::routes::AppRoute;
use contracts::domain::common::EntityKind;
use leptos::prelude::*;
use std::collections::HashMap;
use web_sys::window;

#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    pub opened: RwSignal<Vec<Tab>>,
    pub active: RwSignal<Option<String>>,
    pub left_open: RwSignal<bool>,
    /// Счётчик сохранений по сущностям; списки перечитываются при его смене
    pub revisions: RwSignal<HashMap<EntityKind, u64>>,
}

impl AppGlobalContext {
    pub fn new() -> Self {
        Self {
            opened: RwSignal::new(vec![]),
            active: RwSignal::new(None),
            left_open: RwSignal::new(true),
            revisions: RwSignal::new(HashMap::new()),
        }
    }

    /// Синхронизация активного таба с `?active=` в адресной строке
    pub fn init_router_integration(&self) {
        let search = window()
            .and_then(|w| w.location().search().ok())
            .unwrap_or_default();
        let params: HashMap<String, String> =
            serde_qs::from_str(search.trim_start_matches('?')).unwrap_or_default();
        let initial = params
            .get("active")
            .and_then(|key| AppRoute::parse(key))
            .unwrap_or(AppRoute::PartnerList);
        self.navigate(initial);

        let this = *self;
        Effect::new(move |_| {
            let Some(active_key) = this.active.get() else {
                return;
            };
            // Остальные параметры (source, locale) сохраняем
            let search = window()
                .and_then(|w| w.location().search().ok())
                .unwrap_or_default();
            let mut params: HashMap<String, String> =
                serde_qs::from_str(search.trim_start_matches('?')).unwrap_or_default();
            params.insert("active".to_string(), active_key);
            let query_string = serde_qs::to_string(&params).unwrap_or_default();
            let new_url = format!("?{}", query_string);

            // Only update URL if it actually changed
            if search != new_url {
                if let Some(w) = window() {
                    if let Ok(history) = w.history() {
                        let _ = history.replace_state_with_url(
                            &wasm_bindgen::JsValue::NULL,
                            "",
                            Some(&new_url),
                        );
                    }
                }
            }
        });
    }

    /// Открыть (или активировать) таб маршрута
    pub fn navigate(&self, route: AppRoute) {
        self.open_tab(&route.key());
    }

    pub fn open_tab(&self, key: &str) {
        leptos::logging::log!("open_tab: key='{}'", key);
        let exists = self
            .opened
            .with_untracked(|tabs| tabs.iter().any(|tab| tab.key == key));
        if !exists {
            self.opened.update(|tabs| {
                tabs.push(Tab {
                    key: key.to_string(),
                });
            });
        }
        self.activate_tab(key);
    }

    pub fn activate_tab(&self, key: &str) {
        self.active.set(Some(key.to_string()));
    }

    pub fn close_tab(&self, key: &str) {
        leptos::logging::log!("close_tab: key='{}'", key);
        self.opened.update(|tabs| tabs.retain(|tab| tab.key != key));
        if self
            .active
            .with_untracked(|active| active.as_deref() == Some(key))
        {
            let next_active = self
                .opened
                .with_untracked(|tabs| tabs.last().map(|t| t.key.clone()));
            self.active.set(next_active);
        }
    }

    /// Закрыть таб формы и вернуться к списку
    pub fn close_and_navigate(&self, key: &str, route: AppRoute) {
        self.close_tab(key);
        self.navigate(route);
    }

    /// Записи `kind` изменились
    pub fn mark_changed(&self, kind: EntityKind) {
        self.revisions.update(|r| *r.entry(kind).or_default() += 1);
    }

    /// Reactive: tracks `mark_changed` for `kind`
    pub fn revision(&self, kind: EntityKind) -> u64 {
        self.revisions.with(|r| r.get(&kind).copied().unwrap_or_default())
    }

    pub fn toggle_left(&self) {
        self.left_open.update(|val| *val = !*val);
    }
}

impl Default for AppGlobalContext {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_app_context() -> AppGlobalContext {
    use_context::<AppGlobalContext>().expect("AppGlobalContext context not found")
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tab {
    pub key: String,
}

impl Tab {
    pub fn route(&self) -> Option<AppRoute> {
        AppRoute::parse(&self.key)
    }
}
