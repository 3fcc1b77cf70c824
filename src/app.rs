//! Root application component with context providers.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};

use crate::pages::gallery::GalleryPage;
use crate::state::editor::EditorState;
use crate::state::methods::MethodsState;
use crate::state::notifications::NotificationsState;
use crate::state::ui::UiState;
use crate::util::dark_mode;

/// Root application component.
///
/// Provides all shared state contexts and renders the single gallery page.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    // Initial theme follows the system preference; nothing is persisted.
    let dark = dark_mode::read_preference();
    dark_mode::apply(dark);

    // Provide reactive state contexts for all child components.
    let methods = RwSignal::new(MethodsState::seeded());
    let editor = RwSignal::new(EditorState::default());
    let notifications = RwSignal::new(NotificationsState::default());
    let ui = RwSignal::new(UiState {
        dark_mode: dark,
        ..UiState::default()
    });

    provide_context(methods);
    provide_context(editor);
    provide_context(notifications);
    provide_context(ui);

    view! {
        <Title text="Métodos de UX"/>

        <GalleryPage/>
    }
}
