//! Gallery page: header actions, search, card grid, editor dialog, and the
//! notification stack.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the single screen of the application. It wires the editor
//! submission flow — validation, list mutation, notification emission — and
//! schedules the two delayed tasks (notification expiry, "novo" marker
//! clearance). The submission logic itself lives in [`submit_editor`], pure
//! over the three state structs so it stays natively testable.

#[cfg(test)]
#[path = "gallery_test.rs"]
mod gallery_test;

use leptos::prelude::*;

use crate::components::editor_dialog::EditorDialog;
use crate::components::method_card::MethodCard;
use crate::components::notification_stack::NotificationStack;
use crate::components::search_bar::SearchBar;
use crate::state::editor::{EditorMode, EditorState};
use crate::state::methods::{MethodId, MethodsState};
use crate::state::notifications::{NotificationId, NotificationKind, NotificationsState};
use crate::state::ui::UiState;
use crate::util::dark_mode;

const MSG_MISSING_FIELDS: &str = "Por favor, preencha todos os campos obrigatórios";
const MSG_CREATED: &str = "Método adicionado com sucesso!";
const MSG_EDITED: &str = "Método editado com sucesso!";

/// Result of one editor submission, telling the caller which delayed tasks
/// to schedule.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Nothing to do: the editor was closed, or its target record vanished.
    Ignored,
    /// Validation failed; the dialog stays open and the error notification
    /// expires after the usual delay.
    Rejected(NotificationId),
    /// A record was created and prepended with the "novo" marker set.
    Created {
        method: MethodId,
        notification: NotificationId,
    },
    /// An existing record was updated in place.
    Edited {
        method: MethodId,
        notification: NotificationId,
    },
}

/// Single submission entry point for the editor dialog.
///
/// On validation failure the method list is untouched and the dialog stays
/// open; on success the list is mutated and the dialog closes. Exactly one
/// notification is emitted on every path except [`SubmitOutcome::Ignored`].
pub fn submit_editor(
    editor: &mut EditorState,
    methods: &mut MethodsState,
    notifications: &mut NotificationsState,
) -> SubmitOutcome {
    match editor.mode {
        EditorMode::Closed => SubmitOutcome::Ignored,
        _ if editor.draft.validate().is_err() => {
            SubmitOutcome::Rejected(notifications.push(NotificationKind::Error, MSG_MISSING_FIELDS))
        }
        EditorMode::Create => {
            let method = methods.create(&editor.draft);
            let notification = notifications.push(NotificationKind::Success, MSG_CREATED);
            editor.close();
            SubmitOutcome::Created {
                method,
                notification,
            }
        }
        EditorMode::Edit(id) => {
            if !methods.apply_edit(id, &editor.draft) {
                editor.close();
                return SubmitOutcome::Ignored;
            }
            let notification = notifications.push(NotificationKind::Success, MSG_EDITED);
            editor.close();
            SubmitOutcome::Edited {
                method: id,
                notification,
            }
        }
    }
}

/// Gallery page — header, heading, search bar, flippable card grid.
#[component]
pub fn GalleryPage() -> impl IntoView {
    let methods = expect_context::<RwSignal<MethodsState>>();
    let editor = expect_context::<RwSignal<EditorState>>();
    let notifications = expect_context::<RwSignal<NotificationsState>>();
    let ui = expect_context::<RwSignal<UiState>>();

    let query = RwSignal::new(String::new());

    let on_add = move |_| editor.update(EditorState::open_create);

    let on_toggle_theme = move |_| {
        let next = dark_mode::toggle(ui.get().dark_mode);
        ui.update(|u| u.dark_mode = next);
    };

    let on_edit = Callback::new(move |id: MethodId| {
        let record = methods
            .get_untracked()
            .items
            .iter()
            .find(|r| r.id == id)
            .cloned();
        if let Some(record) = record {
            editor.update(|e| e.open_edit(&record));
        }
    });

    let on_cancel = Callback::new(move |()| editor.update(EditorState::close));

    let on_submit = Callback::new(move |()| {
        let mut outcome = SubmitOutcome::Ignored;
        editor.update(|e| {
            methods.update(|m| {
                notifications.update(|n| {
                    outcome = submit_editor(e, m, n);
                });
            });
        });
        match outcome {
            SubmitOutcome::Created {
                method,
                notification,
            } => {
                schedule_marker_clear(methods, method);
                schedule_notification_expiry(notifications, notification);
            }
            SubmitOutcome::Rejected(notification)
            | SubmitOutcome::Edited { notification, .. } => {
                schedule_notification_expiry(notifications, notification);
            }
            SubmitOutcome::Ignored => {}
        }
    });

    view! {
        <div class="gallery-page">
            <header class="gallery-page__header">
                <span class="gallery-page__spacer"></span>
                <button class="btn gallery-page__add" on:click=on_add>
                    "adicionar método"
                </button>
                <button
                    class="btn btn--icon gallery-page__dark-toggle"
                    on:click=on_toggle_theme
                    title="Alternar tema"
                >
                    {move || if ui.get().dark_mode { "☀" } else { "☾" }}
                </button>
            </header>

            <h1 class="gallery-page__heading">"Qual o método de UX você precisa saber?"</h1>

            <SearchBar query=query/>

            <main class="gallery-page__grid">
                {move || {
                    let visible = methods.get().filtered(&query.get());
                    if visible.is_empty() {
                        view! {
                            <p class="gallery-page__empty">
                                {format!("Nenhum método encontrado para \"{}\"", query.get())}
                            </p>
                        }
                            .into_any()
                    } else {
                        visible
                            .into_iter()
                            .map(|record| view! { <MethodCard record=record on_edit=on_edit/> })
                            .collect::<Vec<_>>()
                            .into_any()
                    }
                }}
            </main>

            <Show when=move || editor.get().is_open()>
                <EditorDialog editor=editor on_submit=on_submit on_cancel=on_cancel/>
            </Show>

            <NotificationStack/>
        </div>
    }
}

/// Schedule the one-shot clearance of a fresh record's "novo" marker.
///
/// Non-cancelable; inert if the identifier no longer resolves by the time
/// the timer fires.
fn schedule_marker_clear(methods: RwSignal<MethodsState>, id: MethodId) {
    #[cfg(feature = "csr")]
    {
        log::debug!("scheduling marker clearance for method {id}");
        leptos::task::spawn_local(async move {
            gloo_timers::future::sleep(crate::state::methods::RECENT_MARKER_TTL).await;
            methods.update(|m| m.clear_recent(id));
        });
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (methods, id);
    }
}

/// Schedule the one-shot expiry of a notification.
fn schedule_notification_expiry(notifications: RwSignal<NotificationsState>, id: NotificationId) {
    #[cfg(feature = "csr")]
    {
        leptos::task::spawn_local(async move {
            gloo_timers::future::sleep(crate::state::notifications::NOTIFICATION_TTL).await;
            notifications.update(|n| n.remove(id));
        });
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (notifications, id);
    }
}
