pub mod center;
pub mod global_context;
pub mod left;
pub mod notification_service;
pub mod tabs;
pub mod top_header;

pub use notification_service::{NotificationHost, NotificationService};

use leptos::prelude::*;
use top_header::TopHeader;

/// Main application shell.
///
/// ```text
/// +------------------------------------------+
/// |              TopHeader                    |
/// +------------------------------------------+
/// |  Sidebar  |         Content (tabs)        |
/// |   (Left)  |           (Center)            |
/// +------------------------------------------+
/// ```
#[component]
pub fn Shell<L, C>(left: L, center: C) -> impl IntoView
where
    L: Fn() -> AnyView + 'static + Send,
    C: Fn() -> AnyView + 'static + Send,
{
    let ctx = global_context::use_app_context();

    view! {
        <div class="app-layout">
            <TopHeader />

            <div class="app-body">
                <aside
                    data-zone="left"
                    class="app-sidebar"
                    class:hidden=move || !ctx.left_open.get()
                >
                    {left()}
                </aside>

                <div class="app-main">
                    <center::Center>
                        {center()}
                    </center::Center>
                </div>
            </div>

            <NotificationHost />
        </div>
    }
}
