//! Search input deriving the filtered card view.

use leptos::prelude::*;

/// Text input bound to the gallery's query signal. Filtering re-evaluates
/// on every keystroke.
#[component]
pub fn SearchBar(query: RwSignal<String>) -> impl IntoView {
    view! {
        <div class="search-bar">
            <input
                class="search-bar__input"
                type="text"
                placeholder="Buscar métodos de UX..."
                prop:value=move || query.get()
                on:input=move |ev| query.set(event_target_value(&ev))
            />
        </div>
    }
}
