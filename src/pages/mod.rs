//! Route-level screens. The gallery is the only page.

pub mod gallery;
