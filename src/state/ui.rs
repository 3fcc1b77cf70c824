//! Local UI chrome state (dark mode, flipped cards).
//!
//! DESIGN
//! ======
//! Keeps transient presentation concerns out of domain state (`methods`,
//! `notifications`) so rendering controls can evolve independently of the
//! card data.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

use std::collections::HashSet;

use crate::state::methods::MethodId;

/// UI state for theming and per-card flip.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UiState {
    pub dark_mode: bool,
    /// Cards currently showing their descriptive back face.
    pub flipped: HashSet<MethodId>,
}

impl UiState {
    /// Toggle the flip state of one card. No cross-card coupling.
    pub fn toggle_flip(&mut self, id: MethodId) {
        if !self.flipped.insert(id) {
            self.flipped.remove(&id);
        }
    }

    pub fn is_flipped(&self, id: MethodId) -> bool {
        self.flipped.contains(&id)
    }
}
