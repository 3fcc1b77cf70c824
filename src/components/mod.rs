//! Reusable rendering units for the gallery page.

pub mod editor_dialog;
pub mod method_card;
pub mod notification_stack;
pub mod search_bar;
