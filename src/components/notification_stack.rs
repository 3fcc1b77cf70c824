//! Stack of transient feedback messages.

use leptos::prelude::*;

use crate::state::notifications::{NotificationKind, NotificationsState};

/// Renders visible notifications in creation order. Entries leave on their
/// expiry timers; there is no dismiss affordance.
#[component]
pub fn NotificationStack() -> impl IntoView {
    let notifications = expect_context::<RwSignal<NotificationsState>>();

    view! {
        <div class="notification-stack">
            {move || {
                notifications
                    .get()
                    .items
                    .into_iter()
                    .map(|n| {
                        let kind = match n.kind {
                            NotificationKind::Success => "notification--success",
                            NotificationKind::Error => "notification--error",
                        };
                        view! {
                            <div class=format!("notification {kind}")>{n.message}</div>
                        }
                    })
                    .collect::<Vec<_>>()
            }}
        </div>
    }
}
