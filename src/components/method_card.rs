//! Flippable card for one method record.

use leptos::prelude::*;

use crate::state::methods::{MethodId, MethodRecord};
use crate::state::ui::UiState;

/// A flippable tile: title on the front, full detail plus an edit affordance
/// on the back. Clicking anywhere on the card toggles the flip; the edit
/// button suppresses propagation so it never flips the card.
#[component]
pub fn MethodCard(record: MethodRecord, on_edit: Callback<MethodId>) -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    let id = record.id;
    let title = record.title;
    let back_title = title.clone();
    let description = record.description;
    let tags = record.tags;
    let recently_added = record.recently_added;

    let flipped = move || ui.get().is_flipped(id);
    let on_flip = move |_| ui.update(|u| u.toggle_flip(id));
    let on_edit_click = move |ev: leptos::ev::MouseEvent| {
        ev.prevent_default();
        ev.stop_propagation();
        on_edit.run(id);
    };

    view! {
        <div class="method-card" on:click=on_flip>
            <Show when=move || recently_added>
                <span class="method-card__badge">"novo"</span>
            </Show>
            <div class="method-card__inner" class:method-card__inner--flipped=flipped>
                <div class="method-card__face method-card__face--front">
                    <h3 class="method-card__title">{title}</h3>
                </div>
                <div class="method-card__face method-card__face--back">
                    <button
                        class="btn btn--icon method-card__edit"
                        on:click=on_edit_click
                        title="Editar método"
                    >
                        "✎"
                    </button>
                    <h3 class="method-card__title">{back_title}</h3>
                    <p class="method-card__description">{description}</p>
                    <div class="method-card__tags">
                        {tags
                            .iter()
                            .map(|tag| view! { <span class="method-card__tag">{tag.clone()}</span> })
                            .collect::<Vec<_>>()}
                    </div>
                </div>
            </div>
        </div>
    }
}
