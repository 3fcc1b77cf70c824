//! Modal dialog for creating or editing a method record.

use leptos::prelude::*;

use crate::state::editor::{AVAILABLE_TAGS, EditorMode, EditorState};

/// Create/edit form over the editor draft.
///
/// Backdrop click, the "✕" button, "Cancelar", and Escape all cancel;
/// Enter in the title input submits. Clicks inside the dialog stop
/// propagation so they never reach the backdrop handler.
#[component]
pub fn EditorDialog(
    editor: RwSignal<EditorState>,
    on_submit: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let editing = move || matches!(editor.get().mode, EditorMode::Edit(_));
    let heading = move || {
        if editing() {
            "editar método de UX"
        } else {
            "adicionar método de UX"
        }
    };
    let submit_label = move || if editing() { "Salvar" } else { "Adicionar" };

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_cancel.run(())>
            <div
                class="dialog dialog--editor"
                on:click=move |ev| ev.stop_propagation()
                on:keydown=move |ev: leptos::ev::KeyboardEvent| {
                    if ev.key() == "Escape" {
                        on_cancel.run(());
                    }
                }
            >
                <div class="dialog__heading-row">
                    <h2>{heading}</h2>
                    <button
                        class="btn btn--icon dialog__close"
                        on:click=move |_| on_cancel.run(())
                        title="Fechar"
                    >
                        "✕"
                    </button>
                </div>

                <label class="dialog__label">
                    "Título *"
                    <input
                        class="dialog__input"
                        type="text"
                        placeholder="Nome do método"
                        autofocus=true
                        prop:value=move || editor.get().draft.title
                        on:input=move |ev| {
                            editor.update(|e| e.draft.title = event_target_value(&ev));
                        }
                        on:keydown=move |ev: leptos::ev::KeyboardEvent| {
                            if ev.key() == "Enter" {
                                ev.prevent_default();
                                on_submit.run(());
                            }
                        }
                    />
                </label>

                <label class="dialog__label">
                    "Descrição *"
                    <p class="dialog__hint">"escreva sobre o que é o método"</p>
                    <textarea
                        class="dialog__textarea"
                        rows="4"
                        placeholder="Descreva o método de UX..."
                        prop:value=move || editor.get().draft.description
                        on:input=move |ev| {
                            editor.update(|e| e.draft.description = event_target_value(&ev));
                        }
                    ></textarea>
                </label>

                <div class="dialog__label">
                    "Tags *"
                    <p class="dialog__hint">"selecione as categorias relacionadas"</p>
                    <div class="dialog__tag-grid">
                        {AVAILABLE_TAGS
                            .into_iter()
                            .map(|tag| {
                                view! {
                                    <label class="dialog__tag-option">
                                        <input
                                            type="checkbox"
                                            prop:checked=move || {
                                                editor.get().draft.tags.iter().any(|t| t == tag)
                                            }
                                            on:change=move |ev| {
                                                let checked = event_target_checked(&ev);
                                                editor.update(|e| e.draft.toggle_tag(tag, checked));
                                            }
                                        />
                                        <span>{tag}</span>
                                    </label>
                                }
                            })
                            .collect::<Vec<_>>()}
                    </div>
                </div>

                <div class="dialog__actions">
                    <button class="btn" on:click=move |_| on_cancel.run(())>
                        "Cancelar"
                    </button>
                    <button class="btn btn--primary" on:click=move |_| on_submit.run(())>
                        {submit_label}
                    </button>
                </div>
            </div>
        </div>
    }
}
