//! In-app notifications. Also serves as the process-wide error sink handed
//! to flows as their `ErrorTracker`.

use chrono::{DateTime, Utc};
use contracts::shared::error::ServiceError;
use contracts::shared::services::ErrorTracker;
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use thaw::*;
use uuid::Uuid;
use wasm_bindgen_futures::spawn_local;

const INFO_TIMEOUT_MS: u32 = 4_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Info,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub id: Uuid,
    pub kind: NotificationKind,
    pub message: String,
    pub created_at: DateTime<Utc>,
}

impl Notification {
    pub fn new(kind: NotificationKind, message: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            kind,
            message: message.into(),
            created_at: Utc::now(),
        }
    }

    pub fn time_label(&self) -> String {
        self.created_at
            .with_timezone(&chrono::Local)
            .format("%H:%M:%S")
            .to_string()
    }
}

#[derive(Clone, Copy)]
pub struct NotificationService {
    items: RwSignal<Vec<Notification>>,
}

impl NotificationService {
    pub fn new() -> Self {
        Self {
            items: RwSignal::new(Vec::new()),
        }
    }

    pub fn items(&self) -> Vec<Notification> {
        self.items.get()
    }

    /// Short-lived confirmation, dismissed automatically
    pub fn show_info(&self, message: impl Into<String>) {
        let id = self.push(Notification::new(NotificationKind::Info, message));
        let svc = *self;
        spawn_local(async move {
            TimeoutFuture::new(INFO_TIMEOUT_MS).await;
            svc.dismiss(id);
        });
    }

    /// Stays until dismissed
    pub fn show_error(&self, message: impl Into<String>) {
        self.push(Notification::new(NotificationKind::Error, message));
    }

    pub fn dismiss(&self, id: Uuid) {
        let _ = self.items.try_update(|items| items.retain(|n| n.id != id));
    }

    fn push(&self, notification: Notification) -> Uuid {
        let id = notification.id;
        self.items.update(|items| items.push(notification));
        id
    }
}

impl Default for NotificationService {
    fn default() -> Self {
        Self::new()
    }
}

impl ErrorTracker for NotificationService {
    fn track_error(&self, error: &ServiceError) {
        log::error!("Tracked error: {error:?}");
        self.show_error(error.to_string());
    }
}

/// Renders pending notifications in the bottom corner.
///
/// Must be mounted exactly once.
#[component]
pub fn NotificationHost() -> impl IntoView {
    let svc = use_context::<NotificationService>()
        .expect("NotificationService not provided in context (provide it in app root)");

    view! {
        <div class="notification-host" style="position: fixed; right: 16px; bottom: 16px; z-index: 2000; display: flex; flex-direction: column; gap: 8px; max-width: 420px;">
            <For
                each=move || svc.items()
                key=|notification| notification.id
                children=move |notification| {
                    let id = notification.id;
                    let intent = match notification.kind {
                        NotificationKind::Info => MessageBarIntent::Success,
                        NotificationKind::Error => MessageBarIntent::Error,
                    };
                    view! {
                        <MessageBar intent=intent>
                            <MessageBarBody>
                                <span title=notification.time_label()>{notification.message.clone()}</span>
                            </MessageBarBody>
                            <MessageBarActions>
                                <Button
                                    appearance=ButtonAppearance::Subtle
                                    size=ButtonSize::Small
                                    on_click=move |_| svc.dismiss(id)
                                >
                                    "Dismiss"
                                </Button>
                            </MessageBarActions>
                        </MessageBar>
                    }
                }
            />
        </div>
    }
}
