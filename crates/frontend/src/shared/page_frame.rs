//! PageFrame: root wrapper for every page rendered inside a tab.
//!
//! Sets two metadata attributes on the root DOM element:
//!   - `id`                 `"{entity}--{category}"`, e.g. `"a001_partner--list"`
//!   - `data-page-category` one of the PAGE_CAT_* constants
//!
//! ```rust,ignore
//! use crate::shared::page_frame::PageFrame;
//! use crate::shared::page_standard::PAGE_CAT_LIST;
//!
//! view! {
//!     <PageFrame page_id="a001_partner--list" category=PAGE_CAT_LIST>
//!         <div class="page__header">...</div>
//!         <div class="page__content">...</div>
//!     </PageFrame>
//! }
//! ```

use super::page_standard::*;
use leptos::prelude::*;

/// Root wrapper that sets standard metadata on every tab page.
///
/// Adds the BEM modifier class by category:
/// - `list`   → `page`
/// - `detail` → `page page--detail`
/// - `system` → `page`
#[component]
pub fn PageFrame(
    /// HTML id in format `{entity}--{category}`
    #[prop(into)]
    page_id: String,
    /// One of the PAGE_CAT_* constants from `page_standard`.
    category: &'static str,
    /// Additional CSS classes appended after the base class.
    #[prop(optional)]
    class: &'static str,
    children: Children,
) -> impl IntoView {
    let base_class = match category {
        PAGE_CAT_DETAIL => "page page--detail",
        _ => "page",
    };

    let full_class = if class.is_empty() {
        base_class.to_string()
    } else {
        format!("{base_class} {class}")
    };

    view! {
        <div id=page_id class=full_class data-page-category=category>
            {children()}
        </div>
    }
}
