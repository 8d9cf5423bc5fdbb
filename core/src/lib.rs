//! # Gradebook Core
//!
//! Holds the in-memory project register and the orchestration that turns user
//! actions into store calls.
//!
//! * **[`store`]**: the authoritative collection with its validation rules.
//! * **[`view`]**: the outbound port the presenter reports to.
//! * **[`presenter`]**: one method per user action, each returning an
//!   [`presenter::Outcome`].
//! * **[`listing`]**: text rendering of the register.

pub mod listing;
pub mod presenter;
pub mod store;
pub mod view;
