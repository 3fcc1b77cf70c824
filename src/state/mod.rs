//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`methods`, `editor`, `notifications`, `ui`) so
//! individual components can depend on small focused models. Everything here
//! is a plain struct; the root `App` component wraps each in an `RwSignal`
//! provided via context.

pub mod editor;
pub mod methods;
pub mod notifications;
pub mod ui;
