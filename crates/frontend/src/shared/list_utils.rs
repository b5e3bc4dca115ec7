/// Утилиты для заголовков списков: индикатор и класс сортировки
use contracts::shared::table::SortSpec;

/// Получить индикатор сортировки для заголовка
pub fn get_sort_indicator(sort: Option<&SortSpec>, field: &str) -> &'static str {
    match sort {
        Some(spec) if spec.field == field => {
            if spec.ascending {
                " ▲"
            } else {
                " ▼"
            }
        }
        _ => " ⇅",
    }
}

/// CSS-класс индикатора: активная колонка подсвечивается
pub fn get_sort_class(sort: Option<&SortSpec>, field: &str) -> &'static str {
    match sort {
        Some(spec) if spec.field == field => "table__sort-indicator table__sort-indicator--active",
        _ => "table__sort-indicator",
    }
}
