use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

/// Время показа уведомления, мс
const NOTIFICATION_TTL_MS: u32 = 4000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
    Info,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    pub id: u64,
    pub kind: NotificationKind,
    pub text: String,
}

/// Сервис для уведомлений об успехе и ошибках операций экранов
#[derive(Clone, Copy)]
pub struct NotificationService {
    items: RwSignal<Vec<Notification>>,
    next_id: RwSignal<u64>,
}

impl NotificationService {
    pub fn new() -> Self {
        Self {
            items: RwSignal::new(Vec::new()),
            next_id: RwSignal::new(1),
        }
    }

    /// Показать уведомление; оно скрывается само через `NOTIFICATION_TTL_MS`
    pub fn push(&self, kind: NotificationKind, text: impl Into<String>) -> u64 {
        let id = self.next_id.get_untracked();
        self.next_id.set(id + 1);
        self.items.update(|items| {
            items.push(Notification {
                id,
                kind,
                text: text.into(),
            })
        });

        let service = *self;
        spawn_local(async move {
            gloo_timers::future::TimeoutFuture::new(NOTIFICATION_TTL_MS).await;
            service.dismiss(id);
        });
        id
    }

    pub fn success(&self, text: impl Into<String>) -> u64 {
        self.push(NotificationKind::Success, text)
    }

    pub fn error(&self, text: impl Into<String>) -> u64 {
        self.push(NotificationKind::Error, text)
    }

    pub fn info(&self, text: impl Into<String>) -> u64 {
        self.push(NotificationKind::Info, text)
    }

    /// Скрыть уведомление
    pub fn dismiss(&self, id: u64) {
        let _ = self
            .items
            .try_update(|items| items.retain(|n| n.id != id));
    }

    pub fn items(&self) -> Vec<Notification> {
        self.items.get()
    }
}

impl Default for NotificationService {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_notifications() -> NotificationService {
    use_context::<NotificationService>().expect("NotificationService not provided in context")
}

/// Стопка уведомлений в правом верхнем углу
#[component]
pub fn NotificationHost() -> impl IntoView {
    let service = use_notifications();

    view! {
        <div class="notification-host">
            <For
                each=move || service.items()
                key=|n| n.id
                children=move |n: Notification| {
                    let intent = match n.kind {
                        NotificationKind::Success => MessageBarIntent::Success,
                        NotificationKind::Error => MessageBarIntent::Error,
                        NotificationKind::Info => MessageBarIntent::Info,
                    };
                    let id = n.id;
                    view! {
                        <div class="notification-host__item">
                            <MessageBar intent=intent>
                                <div style="display: flex; align-items: center; gap: 8px;">
                                    <span>{n.text}</span>
                                    <Button
                                        appearance=ButtonAppearance::Transparent
                                        on_click=move |_| service.dismiss(id)
                                    >
                                        {crate::shared::icons::icon("x")}
                                    </Button>
                                </div>
                            </MessageBar>
                        </div>
                    }
                }
            />
        </div>
    }
}
