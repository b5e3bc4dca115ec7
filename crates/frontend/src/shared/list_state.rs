//! Состояние экрана списка
//!
//! Один `ListState<R>` на экран: строки текущей страницы, поиск по колонкам,
//! сортировка, выбранные строки. Все изменения идут через методы ниже, а
//! загрузка страницы через `load_list`.

use crate::layout::notification_service::NotificationService;
use crate::shared::data_source::DataSource;
use crate::shared::i18n::I18n;
use contracts::domain::common::EntityRecord;
use contracts::shared::table::{
    ColumnFilterState, HeaderCheckState, ListRequest, Paginated, Pagination, SelectionSet,
    SortSpec,
};
use leptos::prelude::*;
use leptos::task::spawn_local;

#[derive(Clone, Debug, PartialEq)]
pub struct ListState<R> {
    pub rows: Vec<R>,
    pub pagination: Pagination,
    pub total: usize,
    pub total_pages: usize,
    pub filter: ColumnFilterState,
    pub sort: Option<SortSpec>,
    pub selection: SelectionSet,
    pub is_loading: bool,
    pub is_loaded: bool,
    pub error: Option<String>,
    // Номер последнего запроса; ответы на более ранние отбрасываются
    load_seq: u64,
}

impl<R> Default for ListState<R> {
    fn default() -> Self {
        Self::new(Pagination::default().page_size)
    }
}

impl<R> ListState<R> {
    pub fn new(page_size: usize) -> Self {
        Self {
            rows: Vec::new(),
            pagination: Pagination::new(1, page_size),
            total: 0,
            total_pages: 0,
            filter: ColumnFilterState::new(),
            sort: None,
            selection: SelectionSet::new(),
            is_loading: false,
            is_loaded: false,
            error: None,
            load_seq: 0,
        }
    }

    pub fn request(&self) -> ListRequest {
        ListRequest::new(self.pagination, &self.filter, self.sort.clone())
    }

    /// Start a load; returns the request and its sequence number
    pub fn begin_load(&mut self) -> (ListRequest, u64) {
        self.load_seq += 1;
        self.is_loading = true;
        (self.request(), self.load_seq)
    }

    /// Take a loaded page. Stale responses are ignored.
    pub fn apply_page(&mut self, seq: u64, page: Paginated<R>) -> bool {
        if seq != self.load_seq {
            return false;
        }
        self.rows = page.data;
        self.pagination = Pagination::new(page.current_page, page.page_size);
        self.total = page.total;
        self.total_pages = page.total_pages;
        self.selection.clear();
        self.is_loading = false;
        self.is_loaded = true;
        self.error = None;
        true
    }

    pub fn fail(&mut self, seq: u64, message: String) -> bool {
        if seq != self.load_seq {
            return false;
        }
        self.is_loading = false;
        self.error = Some(message);
        true
    }

    /// Confirmed column search; back to the first page
    pub fn confirm_search(&mut self, column: &str, query: &str) {
        self.filter.confirm(column, query);
        self.pagination.current_page = 1;
    }

    pub fn reset_search(&mut self, column: &str) {
        self.filter.reset(column);
        self.pagination.current_page = 1;
    }

    pub fn set_value_filter(&mut self, column: &str, values: Vec<String>) {
        self.filter.set_values(column, values);
        self.pagination.current_page = 1;
    }

    pub fn toggle_sort(&mut self, field: &str) {
        self.sort = Some(SortSpec::toggled(self.sort.as_ref(), field));
    }

    pub fn go_to_page(&mut self, page: usize) {
        self.pagination.current_page = page.clamp(1, self.total_pages.max(1));
    }

    pub fn set_page_size(&mut self, page_size: usize) {
        self.pagination = Pagination::new(1, page_size);
    }
}

impl<R: EntityRecord> ListState<R> {
    pub fn visible_keys(&self) -> Vec<String> {
        self.rows.iter().map(|r| r.key()).collect()
    }

    pub fn header_state(&self) -> HeaderCheckState {
        let keys = self.visible_keys();
        self.selection.header_state(keys.iter().map(String::as_str))
    }

    /// Header checkbox click: check or uncheck every row on the page
    pub fn toggle_all(&mut self, checked: bool) {
        let keys = self.visible_keys();
        self.selection.set_all(keys.iter().map(String::as_str), checked);
    }
}

/// Загрузить текущую страницу в `state`.
///
/// Ответ, пришедший после закрытия экрана, отбрасывается.
pub fn load_list<R>(
    state: RwSignal<ListState<R>>,
    source: DataSource,
    notifications: NotificationService,
    i18n: I18n,
) where
    R: EntityRecord + Send + Sync + 'static,
{
    let Some((request, seq)) = state.try_update(|s| s.begin_load()) else {
        return;
    };
    spawn_local(async move {
        match source.fetch_list::<R>(request).await {
            Ok(page) => {
                let _ = state.try_update(|s| s.apply_page(seq, page));
            }
            Err(e) => {
                log::error!("failed to load {} list: {}", R::kind(), e);
                let message = e.to_string();
                if state.try_update(|s| s.fail(seq, message.clone())) == Some(true) {
                    notifications.error(i18n.t_with_untracked(
                        "common",
                        "load_failed",
                        &[("error", message.as_str())],
                    ));
                }
            }
        }
    });
}

/// Удалить выбранные строки после подтверждения и перезагрузить страницу.
///
/// Выбор только читается; его очистит следующая загрузка.
pub fn delete_selected<R>(
    state: RwSignal<ListState<R>>,
    source: DataSource,
    notifications: NotificationService,
    i18n: I18n,
    on_deleted: Callback<()>,
) where
    R: EntityRecord + Send + Sync + 'static,
{
    let ids = state.with_untracked(|s| s.selection.keys());
    if ids.is_empty() {
        return;
    }

    let count = ids.len().to_string();
    let question = i18n.t_with_untracked("common", "confirm_delete", &[("count", count.as_str())]);
    let confirmed = web_sys::window()
        .map(|win| win.confirm_with_message(&question).unwrap_or(false))
        .unwrap_or(false);
    if !confirmed {
        return;
    }

    spawn_local(async move {
        match source.delete(R::kind(), &ids).await {
            Ok(deleted) => {
                log::info!("deleted {} {} record(s)", deleted, R::kind());
                notifications.success(i18n.t_with_untracked(
                    "common",
                    "delete_success",
                    &[("count", deleted.to_string().as_str())],
                ));
                on_deleted.run(());
            }
            Err(e) => {
                log::error!("failed to delete {}: {}", R::kind(), e);
                notifications.error(i18n.t_with_untracked(
                    "common",
                    "delete_failed",
                    &[("error", e.to_string().as_str())],
                ));
            }
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a001_partner::PartnerRow;

    fn row(key: &str, code: &str) -> PartnerRow {
        PartnerRow {
            key: key.into(),
            partner_code: code.into(),
            ..PartnerRow::default()
        }
    }

    fn page(rows: Vec<PartnerRow>, current_page: usize, total: usize) -> Paginated<PartnerRow> {
        Paginated {
            data: rows,
            current_page,
            page_size: 10,
            total_pages: total.div_ceil(10),
            total,
        }
    }

    #[test]
    fn test_apply_page_clears_selection() {
        let mut state = ListState::<PartnerRow>::new(10);
        let (_, seq) = state.begin_load();
        state.apply_page(seq, page(vec![row("1", "A"), row("2", "B")], 1, 2));
        state.selection.toggle("1", true);

        let (_, seq) = state.begin_load();
        assert!(state.apply_page(seq, page(vec![row("1", "A")], 1, 1)));
        assert!(state.selection.is_empty());
        assert!(state.is_loaded);
        assert!(!state.is_loading);
    }

    #[test]
    fn test_stale_response_is_dropped() {
        let mut state = ListState::<PartnerRow>::new(10);
        let (_, first) = state.begin_load();
        let (_, second) = state.begin_load();
        assert!(state.apply_page(second, page(vec![row("2", "B")], 1, 1)));
        assert!(!state.apply_page(first, page(vec![row("1", "A")], 1, 1)));
        assert_eq!(state.rows[0].key, "2");
        assert!(!state.fail(first, "late".into()));
        assert_eq!(state.error, None);
    }

    #[test]
    fn test_search_returns_to_first_page() {
        let mut state = ListState::<PartnerRow>::new(10);
        let (_, seq) = state.begin_load();
        state.apply_page(seq, page(vec![row("31", "A")], 4, 46));
        assert_eq!(state.pagination.current_page, 4);

        state.confirm_search("partnerCode", "ASLS");
        assert_eq!(state.pagination.current_page, 1);
        let request = state.request();
        assert_eq!(request.filters.len(), 1);
        assert_eq!(state.filter.searched_column(), Some("partnerCode"));

        state.go_to_page(3);
        state.reset_search("partnerCode");
        assert_eq!(state.pagination.current_page, 1);
        assert!(state.request().filters.is_empty());
    }

    #[test]
    fn test_go_to_page_clamps() {
        let mut state = ListState::<PartnerRow>::new(10);
        let (_, seq) = state.begin_load();
        state.apply_page(seq, page(Vec::new(), 1, 46));
        state.go_to_page(99);
        assert_eq!(state.pagination.current_page, 5);
        state.go_to_page(0);
        assert_eq!(state.pagination.current_page, 1);
    }

    #[test]
    fn test_page_size_change() {
        let mut state = ListState::<PartnerRow>::new(10);
        state.go_to_page(1);
        state.set_page_size(50);
        assert_eq!(state.request().paginate_request, Pagination::new(1, 50));
    }

    #[test]
    fn test_header_checkbox_over_visible_rows() {
        let mut state = ListState::<PartnerRow>::new(10);
        let (_, seq) = state.begin_load();
        state.apply_page(seq, page(vec![row("1", "A"), row("2", "B")], 1, 2));
        assert_eq!(state.header_state(), HeaderCheckState::Unchecked);
        state.selection.toggle("2", true);
        assert_eq!(state.header_state(), HeaderCheckState::Indeterminate);
        state.toggle_all(true);
        assert_eq!(state.header_state(), HeaderCheckState::Checked);
        state.toggle_all(false);
        assert!(state.selection.is_empty());
    }

    #[test]
    fn test_sort_toggles() {
        let mut state = ListState::<PartnerRow>::new(10);
        state.toggle_sort("partnerCode");
        state.toggle_sort("partnerCode");
        assert_eq!(
            state.sort,
            Some(SortSpec {
                field: "partnerCode".into(),
                ascending: false
            })
        );
    }
}
